//! Activities Page
//!
//! Performance tracker table listing every logged activity.

use leptos::*;

use crate::components::{ErrorAlert, Loading};
use crate::normalize::Activity;
use crate::state::{create_collection_view, ViewState};

/// Activities page component
#[component]
pub fn Activities() -> impl IntoView {
    let activities = create_collection_view("activities", Activity::from_value);

    view! {
        <div class="container page-container">
            <div class="page-header">
                <h1>
                    <span class="badge bg-primary me-2">"🏁"</span>
                    "Performance Tracker"
                </h1>
                <p class="subtitle">
                    "🏎️ Every activity is a lap towards your championship • Monitor your race metrics"
                </p>
            </div>

            {move || match activities.get() {
                ViewState::Loading => view! { <Loading /> }.into_view(),
                ViewState::Error(message) => view! {
                    <ErrorAlert title="Error Loading Activities" message=message />
                }.into_view(),
                ViewState::Ready(records) => view! {
                    <ActivityTable records=records />
                }.into_view(),
            }}
        </div>
    }
}

/// Activities rendered as a striped table, with a fixed empty state
#[component]
fn ActivityTable(records: Vec<Activity>) -> impl IntoView {
    view! {
        <div class="table-responsive">
            <table class="table table-striped table-hover">
                <thead>
                    <tr>
                        <th>"🏎️ Driver"</th>
                        <th>"Activity Type"</th>
                        <th class="text-end">"Lap Time"</th>
                        <th class="text-end">"Distance"</th>
                        <th class="text-end">"Fuel Burned"</th>
                        <th>"Session Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {if records.is_empty() {
                        view! {
                            <tr>
                                <td colspan="6" class="text-center py-4">
                                    <div class="text-muted">
                                        <h5>"🏎️ No Racing Sessions Found"</h5>
                                        <p>"Start your engines and begin logging your performance!"</p>
                                    </div>
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        records
                            .into_iter()
                            .map(|activity| view! { <ActivityRow activity=activity /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// One activity table row
#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    let type_badge = format!(
        "{} {}",
        activity_icon(&activity.activity_type),
        activity.activity_type
    );
    let duration = activity.duration_label();
    let distance = activity.distance_label();
    let calories = activity.calories_label();
    let date = activity.date.clone();
    let performer = activity.performer;

    view! {
        <tr>
            <td><strong>{performer}</strong></td>
            <td><span class="badge bg-primary">{type_badge}</span></td>
            <td class="text-end"><span class="badge bg-info">{duration}</span></td>
            <td class="text-end">
                {match distance {
                    Some(label) => view! { <span class="badge bg-success">{label}</span> }.into_view(),
                    None => view! { <span class="text-muted">"N/A"</span> }.into_view(),
                }}
            </td>
            <td class="text-end"><span class="badge bg-danger">{calories}</span></td>
            <td>
                {match date {
                    Some(label) => label.into_view(),
                    None => view! { <span class="text-muted">"N/A"</span> }.into_view(),
                }}
            </td>
        </tr>
    }
}

/// Get icon for activity type
fn activity_icon(activity_type: &str) -> &'static str {
    match activity_type.to_lowercase().as_str() {
        "running" => "🏃",
        "cycling" => "🚴",
        "swimming" => "🏊",
        "walking" => "🚶",
        "yoga" => "🧘",
        "weightlifting" => "🏋️",
        _ => "💪",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_activity_types_have_icons() {
        assert_eq!(activity_icon("running"), "🏃");
        assert_eq!(activity_icon("Cycling"), "🚴");
    }

    #[test]
    fn unknown_activity_types_get_the_default_icon() {
        assert_eq!(activity_icon("curling"), "💪");
        assert_eq!(activity_icon(""), "💪");
    }
}
