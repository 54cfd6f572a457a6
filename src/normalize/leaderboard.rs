//! Leaderboard Records
//!
//! Canonical form of one `/api/leaderboard/` record. Unlike the activities
//! page, missing totals here default to 0 rather than "N/A"; that asymmetry
//! matches the backend's observed behavior and is deliberate.

use serde_json::Value;

use crate::normalize::fields::{display_or_na, format_thousands, pick_display, pick_int};

/// One normalized leaderboard entry; rank comes from position in the
/// collection, not from the record itself.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    /// Driver name: `user_name`, else `user`.
    pub performer: String,
    /// Team name: `team_name`, else `team`; absent entries render as
    /// "Independent".
    pub team: Option<String>,
    /// Total calories burned, default 0.
    pub total_calories: i64,
    /// Total activities completed, default 0.
    pub total_activities: i64,
}

impl LeaderboardEntry {
    pub fn from_value(record: &Value) -> Self {
        Self {
            performer: display_or_na(record, &["user_name", "user"]),
            team: pick_display(record, &["team_name", "team"]),
            total_calories: pick_int(record, &["total_calories"]).unwrap_or(0),
            total_activities: pick_int(record, &["total_activities"]).unwrap_or(0),
        }
    }

    pub fn calories_label(&self) -> String {
        format!("{} cal", format_thousands(self.total_calories))
    }

    pub fn activities_label(&self) -> String {
        format!("{} laps", self.total_activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn totals_default_to_zero_not_na() {
        let entry = LeaderboardEntry::from_value(&json!({"user_name": "bob"}));
        assert_eq!(entry.total_calories, 0);
        assert_eq!(entry.calories_label(), "0 cal");
        assert_eq!(entry.activities_label(), "0 laps");
    }

    #[test]
    fn large_calorie_totals_are_grouped() {
        let entry = LeaderboardEntry::from_value(&json!({
            "user": "carol",
            "total_calories": 12500,
            "total_activities": 48
        }));
        assert_eq!(entry.performer, "carol");
        assert_eq!(entry.calories_label(), "12,500 cal");
        assert_eq!(entry.activities_label(), "48 laps");
    }

    #[test]
    fn missing_team_is_independent() {
        let entry = LeaderboardEntry::from_value(&json!({"user_name": "dave"}));
        assert_eq!(entry.team, None);

        let teamed = LeaderboardEntry::from_value(&json!({"team_name": "Red Bull Gym"}));
        assert_eq!(teamed.team.as_deref(), Some("Red Bull Gym"));
    }
}
