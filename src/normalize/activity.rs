//! Activity Records
//!
//! Canonical form of one `/api/activities/` record.

use serde_json::Value;

use crate::normalize::fields::{display_or_na, format_date, pick_display};

/// One normalized activity (a row on the activities page).
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    /// Who performed the activity: `user_name`, else `user`, else `user_id`.
    pub performer: String,
    /// Activity type, empty when the backend sends none.
    pub activity_type: String,
    /// Duration display text: `duration_minutes`, else `duration`, else "N/A".
    pub duration: String,
    /// Distance display text: `distance_km`, else `distance`; absent when
    /// neither is present.
    pub distance: Option<String>,
    /// Calories display text: `calories_burned`, else `calories`, else "N/A".
    pub calories: String,
    /// Session date, formatted: `date`, else `created_at`.
    pub date: Option<String>,
}

impl Activity {
    pub fn from_value(record: &Value) -> Self {
        Self {
            performer: display_or_na(record, &["user_name", "user", "user_id"]),
            activity_type: pick_display(record, &["activity_type"]).unwrap_or_default(),
            duration: display_or_na(record, &["duration_minutes", "duration"]),
            distance: pick_display(record, &["distance_km", "distance"]),
            calories: display_or_na(record, &["calories_burned", "calories"]),
            date: pick_display(record, &["date", "created_at"])
                .and_then(|raw| format_date(&raw)),
        }
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration)
    }

    pub fn distance_label(&self) -> Option<String> {
        self.distance.as_ref().map(|d| format!("{d} km"))
    }

    pub fn calories_label(&self) -> String {
        format!("{} cal", self.calories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_duration_field_wins() {
        let activity = Activity::from_value(&json!({"id": 1, "duration_minutes": 30}));
        assert_eq!(activity.duration_label(), "30 min");
    }

    #[test]
    fn fallback_duration_field_is_used() {
        let activity = Activity::from_value(&json!({"id": 1, "duration": 45}));
        assert_eq!(activity.duration_label(), "45 min");
    }

    #[test]
    fn missing_fields_become_sentinels_not_panics() {
        let activity = Activity::from_value(&json!({}));
        assert_eq!(activity.performer, "N/A");
        assert_eq!(activity.duration_label(), "N/A min");
        assert_eq!(activity.calories_label(), "N/A cal");
        assert_eq!(activity.distance_label(), None);
        assert_eq!(activity.date, None);
    }

    #[test]
    fn performer_falls_back_through_user_fields() {
        let by_name = Activity::from_value(&json!({"user_name": "alice", "user_id": 3}));
        assert_eq!(by_name.performer, "alice");

        let by_id = Activity::from_value(&json!({"user_id": 3}));
        assert_eq!(by_id.performer, "3");
    }

    #[test]
    fn date_prefers_session_date_over_created_at() {
        let activity = Activity::from_value(&json!({
            "date": "2024-06-01T08:00:00Z",
            "created_at": "2024-06-02T08:00:00Z"
        }));
        assert_eq!(activity.date.as_deref(), Some("Jun 1, 2024"));
    }

    #[test]
    fn normalization_is_idempotent_over_canonical_fields() {
        let first = Activity::from_value(&json!({
            "user_name": "alice",
            "activity_type": "running",
            "duration_minutes": 30,
            "distance_km": 5,
            "calories_burned": 320
        }));
        let again = Activity::from_value(&json!({
            "user_name": first.performer.clone(),
            "activity_type": first.activity_type.clone(),
            "duration_minutes": first.duration.clone(),
            "distance_km": first.distance.clone(),
            "calories_burned": first.calories.clone()
        }));
        assert_eq!(first, again);
    }
}
