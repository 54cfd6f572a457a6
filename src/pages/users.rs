//! Users Page
//!
//! Drivers roster table.

use leptos::*;

use crate::components::{ErrorAlert, Loading};
use crate::normalize::User;
use crate::state::{create_collection_view, ViewState};

/// Users page component
#[component]
pub fn Users() -> impl IntoView {
    let users = create_collection_view("users", User::from_value);

    view! {
        <div class="container page-container">
            <div class="page-header">
                <h1>
                    <span class="badge bg-success me-2">"🏁"</span>
                    "Drivers Roster"
                </h1>
                <p class="subtitle">
                    "🏎️ Meet the champions • Every driver brings unique speed"
                </p>
            </div>

            {move || match users.get() {
                ViewState::Loading => view! { <Loading /> }.into_view(),
                ViewState::Error(message) => view! {
                    <ErrorAlert title="Error Loading Users" message=message />
                }.into_view(),
                ViewState::Ready(records) => view! {
                    <RosterTable records=records />
                }.into_view(),
            }}
        </div>
    }
}

/// Users rendered as a roster table, with a fixed empty state
#[component]
fn RosterTable(records: Vec<User>) -> impl IntoView {
    view! {
        <div class="table-responsive">
            <table class="table table-striped table-hover">
                <thead>
                    <tr>
                        <th>"🏎️ Driver Name"</th>
                        <th>"Contact"</th>
                        <th>"Racing Team"</th>
                        <th>"License Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {if records.is_empty() {
                        view! {
                            <tr>
                                <td colspan="4" class="text-center py-4">
                                    <div class="text-muted">
                                        <h5>"🏎️ No Drivers Registered"</h5>
                                        <p>"Recruiting racing champions for the team"</p>
                                    </div>
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        records
                            .into_iter()
                            .map(|user| view! { <RosterRow user=user /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// One roster row
#[component]
fn RosterRow(user: User) -> impl IntoView {
    let email = format!("📧 {}", user.email);
    let team = user.team.clone();
    let joined = user.joined.clone();
    let name = user.name;

    view! {
        <tr>
            <td><strong class="text-primary">{name}</strong></td>
            <td><span class="text-muted">{email}</span></td>
            <td>
                {match team {
                    Some(team) => view! {
                        <span class="badge bg-warning text-dark">{format!("🏎️ {team}")}</span>
                    }.into_view(),
                    None => view! {
                        <span class="badge bg-secondary">"Independent"</span>
                    }.into_view(),
                }}
            </td>
            <td>
                {match joined {
                    Some(date) => date.into_view(),
                    None => view! { <span class="text-muted">"N/A"</span> }.into_view(),
                }}
            </td>
        </tr>
    }
}
