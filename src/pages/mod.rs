//! Pages
//!
//! Top-level page components for each route. Every collection page follows
//! the same shape: fetch once on mount, then render exactly one of the
//! loading / error / ready branches.

pub mod activities;
pub mod home;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

pub use activities::Activities;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use teams::Teams;
pub use users::Users;
pub use workouts::Workouts;
