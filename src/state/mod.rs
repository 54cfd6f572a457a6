//! View State
//!
//! Per-page remote collection state management.

pub mod view;

pub use view::{create_collection_view, ViewState};
