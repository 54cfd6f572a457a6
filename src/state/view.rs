//! Remote Collection View State
//!
//! Every page renders one remote collection through the same tri-state
//! lifecycle: `Loading` until the fetch resolves, then exactly one
//! transition to `Ready` or `Error`. There is no transition back to
//! `Loading` without a fresh activation (no refresh, no retry).

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use serde_json::Value;

use crate::api;

/// State of one remote collection over a view activation.
///
/// Exactly one variant holds at any time; pages render exactly one branch.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    /// Fetch in flight; initial state of every activation.
    Loading,
    /// Fetch failed; human-readable message for the alert block.
    Error(String),
    /// Fetch resolved; normalized records in response order.
    Ready(Vec<T>),
}

/// Fetch a collection endpoint once on mount and expose it as a signal.
///
/// Each raw record is passed through `normalize` before it reaches the
/// signal, so render code only ever sees canonical records. If the component
/// is torn down while the request is in flight, the response is dropped
/// instead of written: a liveness flag cleared in `on_cleanup` plus
/// `try_set` guarantee no state mutation after teardown.
pub fn create_collection_view<T>(
    endpoint: &'static str,
    normalize: fn(&Value) -> T,
) -> ReadSignal<ViewState<T>>
where
    T: Clone + PartialEq + 'static,
{
    let (state, set_state) = create_signal(ViewState::Loading);

    let alive = Rc::new(Cell::new(true));
    {
        let alive = Rc::clone(&alive);
        on_cleanup(move || alive.set(false));
    }

    // The effect reads no signals, so it runs once per activation.
    create_effect(move |_| {
        let alive = Rc::clone(&alive);
        spawn_local(async move {
            let next = match api::fetch_collection(endpoint).await {
                Ok(records) => ViewState::Ready(records.iter().map(normalize).collect()),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("{endpoint} - Error fetching data: {err}").into(),
                    );
                    ViewState::Error(err.to_string())
                }
            };
            if alive.get() {
                let _ = set_state.try_set(next);
            }
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_mutually_exclusive() {
        let loading: ViewState<i32> = ViewState::Loading;
        let ready = ViewState::Ready(vec![1, 2]);
        let error: ViewState<i32> = ViewState::Error("HTTP error! status: 500".to_string());

        assert_ne!(loading, ready);
        assert_ne!(loading, error);
        assert_ne!(ready, error);
    }

    #[test]
    fn ready_preserves_record_order() {
        let ready = ViewState::Ready(vec![3, 1, 2]);
        match ready {
            ViewState::Ready(records) => assert_eq!(records, vec![3, 1, 2]),
            _ => unreachable!(),
        }
    }
}
