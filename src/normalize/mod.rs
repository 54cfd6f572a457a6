//! Field Normalizer
//!
//! The backend's collections arrive with varying field names and shapes
//! (`duration_minutes` vs `duration`, `user_name` vs `user` vs `user_id`).
//! This module resolves each logical attribute through a declarative
//! priority list of candidate source fields and produces one canonical
//! record per entity. Renderers only ever consume canonical records, so
//! rendering is total: a missing field becomes a documented default or an
//! "N/A" sentinel, never a panic.
//!
//! Resolution is pure: same input record, same canonical output, no I/O.

pub mod activity;
pub mod fields;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use fields::{display_or_na, format_date, format_thousands, pick_display, pick_int};
pub use leaderboard::LeaderboardEntry;
pub use team::Team;
pub use user::User;
pub use workout::{Exercise, Workout};
