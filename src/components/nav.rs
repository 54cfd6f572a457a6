//! Navigation Component
//!
//! Header navigation bar with brand and page links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark">
            <div class="container-fluid">
                // Brand
                <A href="/" class="navbar-brand">
                    "🏎️ OctoFit Tracker"
                </A>

                // Page links
                <ul class="navbar-nav">
                    <NavLink href="/activities" label="Activities" />
                    <NavLink href="/leaderboard" label="Leaderboard" />
                    <NavLink href="/teams" label="Teams" />
                    <NavLink href="/users" label="Users" />
                    <NavLink href="/workouts" label="Workouts" />
                </ul>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <li class="nav-item">
            <A href=href class="nav-link" active_class="active">
                {label}
            </A>
        </li>
    }
}
