//! Alert Component
//!
//! Error alert that replaces a page's content area when a fetch fails.

use leptos::*;

/// Alert block with a heading and the fetch error message
#[component]
pub fn ErrorAlert(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="alert alert-danger" role="alert">
            <h4 class="alert-heading">{title}</h4>
            <p>{message}</p>
        </div>
    }
}
