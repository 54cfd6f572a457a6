//! Workout Records
//!
//! Canonical form of one `/api/workouts/` record, including the optional
//! embedded exercises list.

use serde_json::Value;

use crate::normalize::fields::{display_or_na, pick_display};

/// One normalized workout (a card on the training circuit page).
#[derive(Clone, Debug, PartialEq)]
pub struct Workout {
    pub title: String,
    /// Difficulty: `difficulty`, else `difficulty_level`, else "Medium".
    pub difficulty: String,
    pub workout_type: Option<String>,
    pub description: String,
    /// Duration display text: `estimated_duration_minutes`, else `duration`,
    /// else "N/A".
    pub duration: String,
    /// Calories display text: `estimated_calories`, else `calories_estimate`,
    /// else "N/A".
    pub calories: String,
    pub exercises: Vec<Exercise>,
    pub target_muscle_groups: Option<String>,
    pub equipment_needed: Option<String>,
}

impl Workout {
    pub fn from_value(record: &Value) -> Self {
        let exercises = record
            .get("exercises")
            .and_then(Value::as_array)
            .map(|list| list.iter().map(Exercise::from_value).collect())
            .unwrap_or_default();

        Self {
            title: display_or_na(record, &["title"]),
            difficulty: pick_display(record, &["difficulty", "difficulty_level"])
                .unwrap_or_else(|| "Medium".to_string()),
            workout_type: pick_display(record, &["workout_type"]),
            description: pick_display(record, &["description"])
                .unwrap_or_else(|| "No description available".to_string()),
            duration: display_or_na(record, &["estimated_duration_minutes", "duration"]),
            calories: display_or_na(record, &["estimated_calories", "calories_estimate"]),
            exercises,
            target_muscle_groups: pick_display(record, &["target_muscle_groups"]),
            equipment_needed: pick_display(record, &["equipment_needed"]),
        }
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration)
    }

    pub fn calories_label(&self) -> String {
        format!("{} kcal", self.calories)
    }

    /// Bootstrap color suffix for the difficulty badge.
    pub fn difficulty_color(&self) -> &'static str {
        match self.difficulty.as_str() {
            "Easy" => "success",
            "Medium" => "warning",
            "Hard" => "danger",
            "Expert" => "dark",
            _ => "secondary",
        }
    }
}

/// One exercise inside a workout's embedded list.
#[derive(Clone, Debug, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub duration: Option<String>,
    pub distance: Option<String>,
}

impl Exercise {
    pub fn from_value(record: &Value) -> Self {
        Self {
            name: display_or_na(record, &["name"]),
            sets: pick_display(record, &["sets"]),
            reps: pick_display(record, &["reps"]),
            duration: pick_display(record, &["duration"]),
            distance: pick_display(record, &["distance"]),
        }
    }

    /// Trailing detail text after the exercise name, e.g. " - 3 sets × 12 reps".
    pub fn details(&self) -> String {
        let mut details = String::new();
        if let Some(sets) = &self.sets {
            details.push_str(&format!(" - {sets} sets"));
        }
        if let Some(reps) = &self.reps {
            details.push_str(&format!(" × {reps} reps"));
        }
        if let Some(duration) = &self.duration {
            details.push_str(&format!(" - {duration}"));
        }
        if let Some(distance) = &self.distance {
            details.push_str(&format!(" - {distance}"));
        }
        details
    }
}
