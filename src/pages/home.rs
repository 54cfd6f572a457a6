//! Home Page
//!
//! Landing page with the hero banner and quick links into the dashboard.

use leptos::*;
use leptos_router::*;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="container page-container">
            <div class="hero-section text-center">
                <h1 class="display-3">"🏎️ Welcome to OctoFit Tracker 🏁"</h1>
                <p class="lead">
                    "Accelerate your fitness journey • Race towards your goals • Champion performance"
                </p>
                <hr class="my-4 bg-white" />
                <p class="fs-5">"⚡ Maximum performance • Precision tracking • Racing spirit ⚡"</p>
            </div>

            <div class="row g-4">
                <HomeCard
                    href="/activities"
                    icon="🏁"
                    title="Track Performance"
                    text="Monitor every lap of your fitness journey with championship precision."
                    action="View Activities →"
                />
                <HomeCard
                    href="/leaderboard"
                    icon="🏆"
                    title="Championship Standings"
                    text="See who holds pole position and race your way up the podium."
                    action="View Leaderboard →"
                />
                <HomeCard
                    href="/workouts"
                    icon="⚡"
                    title="Training Circuit"
                    text="Championship-caliber training programs engineered for performance."
                    action="View Workouts →"
                />
            </div>
        </div>
    }
}

/// Quick-link card on the landing page
#[component]
fn HomeCard(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    action: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-md-4">
            <A href=href class="text-decoration-none">
                <div class="card text-center">
                    <div class="card-body">
                        <div class="display-4 mb-3">{icon}</div>
                        <h5 class="card-title">{title}</h5>
                        <p class="card-text">{text}</p>
                    </div>
                    <div class="card-footer bg-transparent">
                        <span class="btn btn-primary btn-sm">{action}</span>
                    </div>
                </div>
            </A>
        </div>
    }
}
