//! HTTP API Client
//!
//! Communication with the OctoFit REST API.

pub mod client;
pub mod error;

pub use client::{fetch_collection, get_api_base};
pub use error::FetchError;
