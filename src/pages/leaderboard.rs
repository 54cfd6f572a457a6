//! Leaderboard Page
//!
//! Championship standings table. Rank is derived from each entry's position
//! in the collection: the top three get podium labels, everyone else a plain
//! "P{n}".

use leptos::*;

use crate::components::{ErrorAlert, Loading};
use crate::normalize::LeaderboardEntry;
use crate::state::{create_collection_view, ViewState};

/// Leaderboard page component
#[component]
pub fn Leaderboard() -> impl IntoView {
    let leaderboard = create_collection_view("leaderboard", LeaderboardEntry::from_value);

    view! {
        <div class="container page-container">
            <div class="page-header">
                <h1>
                    <span class="badge bg-danger me-2">"🏆"</span>
                    "Championship Standings"
                </h1>
                <p class="subtitle">
                    "🏎️ Pole position rankings • Race for the podium • Champions are made here"
                </p>
            </div>

            {move || match leaderboard.get() {
                ViewState::Loading => view! { <Loading /> }.into_view(),
                ViewState::Error(message) => view! {
                    <ErrorAlert title="Error Loading Leaderboard" message=message />
                }.into_view(),
                ViewState::Ready(records) => view! {
                    <StandingsTable records=records />
                }.into_view(),
            }}
        </div>
    }
}

/// Standings rendered as a ranked table, with a fixed empty state
#[component]
fn StandingsTable(records: Vec<LeaderboardEntry>) -> impl IntoView {
    view! {
        <div class="table-responsive">
            <table class="table table-striped table-hover">
                <thead>
                    <tr>
                        <th class="text-center">"🏁 Position"</th>
                        <th>"🏎️ Driver"</th>
                        <th>"Racing Team"</th>
                        <th class="text-end">"Fuel Burned"</th>
                        <th class="text-end">"Laps Completed"</th>
                    </tr>
                </thead>
                <tbody>
                    {if records.is_empty() {
                        view! {
                            <tr>
                                <td colspan="5" class="text-center py-4">
                                    <div class="text-muted">
                                        <h5>"🏁 Championship Table Empty"</h5>
                                        <p>"Start racing to claim your position on the podium!"</p>
                                    </div>
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        records
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| view! {
                                <StandingsRow rank=index + 1 entry=entry />
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// One standings row
#[component]
fn StandingsRow(rank: usize, entry: LeaderboardEntry) -> impl IntoView {
    let (position, tier) = rank_label(rank);
    let calories = format!("🔥 {}", entry.calories_label());
    let laps = format!("🏁 {}", entry.activities_label());
    let team = entry.team.clone();
    let performer = format!("🏎️ {}", entry.performer);

    view! {
        <tr>
            <td class="text-center">
                <span class=format!("rank-badge {tier}")>{position}</span>
            </td>
            <td><strong>{performer}</strong></td>
            <td>
                {match team {
                    Some(name) => view! {
                        <span class="badge bg-secondary">{format!("🏎️ {name}")}</span>
                    }.into_view(),
                    None => view! { <span class="text-muted">"Independent"</span> }.into_view(),
                }}
            </td>
            <td class="text-end"><span class="badge bg-danger">{calories}</span></td>
            <td class="text-end"><span class="badge bg-primary">{laps}</span></td>
        </tr>
    }
}

/// Position label and badge tier for a 1-based rank.
fn rank_label(rank: usize) -> (String, &'static str) {
    match rank {
        1 => ("🥇 P1".to_string(), "gold"),
        2 => ("🥈 P2".to_string(), "silver"),
        3 => ("🥉 P3".to_string(), "bronze"),
        n => (format!("P{n}"), "default"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_ranks_get_medal_labels() {
        assert_eq!(rank_label(1), ("🥇 P1".to_string(), "gold"));
        assert_eq!(rank_label(2), ("🥈 P2".to_string(), "silver"));
        assert_eq!(rank_label(3), ("🥉 P3".to_string(), "bronze"));
    }

    #[test]
    fn lower_ranks_get_generic_labels() {
        assert_eq!(rank_label(4), ("P4".to_string(), "default"));
        assert_eq!(rank_label(17), ("P17".to_string(), "default"));
    }
}
