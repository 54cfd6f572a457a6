//! Teams Page
//!
//! Racing teams rendered as a card grid.

use leptos::*;

use crate::components::{ErrorAlert, Loading};
use crate::normalize::Team;
use crate::state::{create_collection_view, ViewState};

/// Teams page component
#[component]
pub fn Teams() -> impl IntoView {
    let teams = create_collection_view("teams", Team::from_value);

    view! {
        <div class="container page-container">
            <div class="page-header">
                <h1>
                    <span class="badge bg-warning text-dark me-2">"🏎️"</span>
                    "Racing Teams"
                </h1>
                <p class="subtitle">
                    "⚡ Join the pit crew • Team spirit drives victory • Racing together"
                </p>
            </div>

            {move || match teams.get() {
                ViewState::Loading => view! { <Loading /> }.into_view(),
                ViewState::Error(message) => view! {
                    <ErrorAlert title="Error Loading Teams" message=message />
                }.into_view(),
                ViewState::Ready(records) => view! {
                    <TeamGrid records=records />
                }.into_view(),
            }}
        </div>
    }
}

/// Teams rendered as cards, with a fixed empty state
#[component]
fn TeamGrid(records: Vec<Team>) -> impl IntoView {
    view! {
        <div class="row g-4">
            {if records.is_empty() {
                view! {
                    <div class="col-12">
                        <div class="alert alert-info text-center" role="alert">
                            <h5>"🏎️ No Racing Teams Found"</h5>
                            <p class="mb-0">"Form your pit crew and join the championship!"</p>
                        </div>
                    </div>
                }.into_view()
            } else {
                records
                    .into_iter()
                    .map(|team| view! { <TeamCard team=team /> })
                    .collect_view()
            }}
        </div>
    }
}

/// One team card
#[component]
fn TeamCard(team: Team) -> impl IntoView {
    let members = team.members_label();
    let founded = team.founded.clone();
    let description = team.description.clone();
    let title = format!("🏎️ {}", team.name);

    view! {
        <div class="col-md-6 col-lg-4">
            <div class="card h-100">
                <div class="card-header">
                    <h5 class="mb-0">{title}</h5>
                </div>
                <div class="card-body">
                    <p class="card-text">{description}</p>
                    <hr />
                    <div class="d-flex justify-content-between align-items-center mb-2">
                        <span class="text-muted">"🏎️ Pit Crew:"</span>
                        <span class="badge bg-primary rounded-pill">{members}</span>
                    </div>
                    <div class="d-flex justify-content-between align-items-center">
                        <span class="text-muted">"🏁 Team Founded:"</span>
                        <small class="text-muted">
                            {founded.unwrap_or_else(|| "N/A".to_string())}
                        </small>
                    </div>
                </div>
                <div class="card-footer bg-transparent">
                    <button class="btn btn-outline-primary btn-sm w-100">
                        "🏎️ Join Racing Team"
                    </button>
                </div>
            </div>
        </div>
    }
}
