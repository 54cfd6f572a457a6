//! Team Records
//!
//! Canonical form of one `/api/teams/` record.

use serde_json::Value;

use crate::normalize::fields::{display_or_na, format_date, pick_display, pick_int};

/// One normalized team (a card on the teams page).
#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    pub name: String,
    /// Team description, defaulted when the backend sends none.
    pub description: String,
    /// Member count: `member_count`, else the length of an embedded
    /// `members` array, else 0.
    pub member_count: i64,
    /// Founded date, formatted from `created_at`.
    pub founded: Option<String>,
}

impl Team {
    pub fn from_value(record: &Value) -> Self {
        let member_count = pick_int(record, &["member_count"])
            .or_else(|| {
                record
                    .get("members")
                    .and_then(Value::as_array)
                    .map(|members| members.len() as i64)
            })
            .unwrap_or(0);

        Self {
            name: display_or_na(record, &["name"]),
            description: pick_display(record, &["description"])
                .unwrap_or_else(|| "No description available".to_string()),
            member_count,
            founded: pick_display(record, &["created_at"]).and_then(|raw| format_date(&raw)),
        }
    }

    pub fn members_label(&self) -> String {
        format!("{} drivers", self.member_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn member_count_falls_back_to_members_array_length() {
        let explicit = Team::from_value(&json!({"name": "A", "member_count": 5}));
        assert_eq!(explicit.member_count, 5);

        let embedded = Team::from_value(&json!({
            "name": "B",
            "members": [{"id": 1}, {"id": 2}, {"id": 3}]
        }));
        assert_eq!(embedded.member_count, 3);
        assert_eq!(embedded.members_label(), "3 drivers");

        let neither = Team::from_value(&json!({"name": "C"}));
        assert_eq!(neither.member_count, 0);
    }

    #[test]
    fn description_defaults_when_missing_or_empty() {
        let team = Team::from_value(&json!({"name": "A", "description": ""}));
        assert_eq!(team.description, "No description available");
    }

    #[test]
    fn founded_date_is_formatted() {
        let team = Team::from_value(&json!({"name": "A", "created_at": "2023-11-02T09:00:00Z"}));
        assert_eq!(team.founded.as_deref(), Some("Nov 2, 2023"));
    }
}
