//! Loading Component
//!
//! Spinner shown while a page's collection fetch is in flight.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>
    }
}
