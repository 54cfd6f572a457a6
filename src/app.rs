//! App Root Component
//!
//! Main application component with routing and top-level navigation.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Activities, Home, Leaderboard, Teams, Users, Workouts};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="App">
                // Navigation header
                <Nav />

                // Main content area
                <main>
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/activities" view=Activities />
                        <Route path="/leaderboard" view=Leaderboard />
                        <Route path="/teams" view=Teams />
                        <Route path="/users" view=Users />
                        <Route path="/workouts" view=Workouts />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container page-container text-center">
            <div class="display-3 mb-3">"🔍"</div>
            <h1>"Page Not Found"</h1>
            <p class="text-muted mb-4">"This lap doesn't exist on the circuit."</p>
            <A href="/" class="btn btn-primary">
                "Back to the Paddock"
            </A>
        </div>
    }
}
