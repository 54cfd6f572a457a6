//! OctoFit Dashboard
//!
//! Fitness tracking dashboard for teams, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity log with per-driver performance metrics
//! - Championship-style leaderboard standings
//! - Team, user, and workout catalogues
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Each page fetches one JSON collection from the OctoFit REST
//! API on mount and renders it through a loading / error / ready state.

use leptos::*;

mod api;
mod app;
mod components;
mod normalize;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
