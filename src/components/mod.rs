//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod alert;
pub mod loading;
pub mod nav;

pub use alert::ErrorAlert;
pub use loading::Loading;
pub use nav::Nav;
