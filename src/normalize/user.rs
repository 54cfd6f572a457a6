//! User Records
//!
//! Canonical form of one `/api/users/` record.

use serde_json::Value;

use crate::normalize::fields::{display_or_na, format_date, pick_display};

/// One normalized user (a row on the drivers roster).
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    /// Display name: `name`, else `username`.
    pub name: String,
    pub email: String,
    /// Team affiliation: `team_name`, else `team`, else `team_id`; absent
    /// entries render as "Independent".
    pub team: Option<String>,
    /// License date, formatted: `created_at`, else `date_joined`.
    pub joined: Option<String>,
}

impl User {
    pub fn from_value(record: &Value) -> Self {
        Self {
            name: display_or_na(record, &["name", "username"]),
            email: display_or_na(record, &["email"]),
            team: pick_display(record, &["team_name", "team", "team_id"]),
            joined: pick_display(record, &["created_at", "date_joined"])
                .and_then(|raw| format_date(&raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_falls_back_to_username() {
        let user = User::from_value(&json!({"username": "speedy", "email": "s@x.io"}));
        assert_eq!(user.name, "speedy");
        assert_eq!(user.email, "s@x.io");
    }

    #[test]
    fn team_id_is_an_accepted_affiliation() {
        let user = User::from_value(&json!({"name": "eve", "team_id": "t-42"}));
        assert_eq!(user.team.as_deref(), Some("t-42"));
    }

    #[test]
    fn join_date_prefers_created_at() {
        let user = User::from_value(&json!({
            "name": "eve",
            "created_at": "2024-01-15T00:00:00Z",
            "date_joined": "2020-01-01T00:00:00Z"
        }));
        assert_eq!(user.joined.as_deref(), Some("Jan 15, 2024"));
    }

    #[test]
    fn empty_record_is_all_sentinels() {
        let user = User::from_value(&json!({}));
        assert_eq!(user.name, "N/A");
        assert_eq!(user.email, "N/A");
        assert_eq!(user.team, None);
        assert_eq!(user.joined, None);
    }
}
