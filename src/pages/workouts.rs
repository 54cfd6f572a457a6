//! Workouts Page
//!
//! Training circuit card grid, including each workout's embedded exercises.

use leptos::*;

use crate::components::{ErrorAlert, Loading};
use crate::normalize::{Exercise, Workout};
use crate::state::{create_collection_view, ViewState};

/// How many exercises a card lists before collapsing into "+ N more".
const EXERCISE_PREVIEW_LEN: usize = 4;

/// Workouts page component
#[component]
pub fn Workouts() -> impl IntoView {
    let workouts = create_collection_view("workouts", Workout::from_value);

    view! {
        <div class="container page-container">
            <div class="page-header">
                <h1>
                    <span class="badge bg-info me-2">"⚡"</span>
                    "Training Circuit"
                </h1>
                <p class="subtitle">
                    "🏎️ Engineered for performance • Championship-caliber training programs"
                </p>
            </div>

            {move || match workouts.get() {
                ViewState::Loading => view! { <Loading /> }.into_view(),
                ViewState::Error(message) => view! {
                    <ErrorAlert title="Error Loading Workouts" message=message />
                }.into_view(),
                ViewState::Ready(records) => view! {
                    <WorkoutGrid records=records />
                }.into_view(),
            }}
        </div>
    }
}

/// Workouts rendered as cards, with a fixed empty state
#[component]
fn WorkoutGrid(records: Vec<Workout>) -> impl IntoView {
    view! {
        <div class="row g-4">
            {if records.is_empty() {
                view! {
                    <div class="col-12">
                        <div class="alert alert-info text-center" role="alert">
                            <h5>"⚡ No Training Circuits Found"</h5>
                            <p class="mb-0">"Championship-caliber training programs coming soon!"</p>
                        </div>
                    </div>
                }.into_view()
            } else {
                records
                    .into_iter()
                    .map(|workout| view! { <WorkoutCard workout=workout /> })
                    .collect_view()
            }}
        </div>
    }
}

/// One workout card
#[component]
fn WorkoutCard(workout: Workout) -> impl IntoView {
    let difficulty_badge = format!("badge bg-{} me-2", workout.difficulty_color());
    let difficulty = workout.difficulty.clone();
    let workout_type = workout.workout_type.clone();
    let description = workout.description.clone();
    let duration = workout.duration_label();
    let calories = workout.calories_label();
    let exercises = workout.exercises.clone();
    let target = workout.target_muscle_groups.clone();
    let equipment = workout.equipment_needed.clone();
    let title = format!("⚡ {}", workout.title);

    view! {
        <div class="col-md-6 col-lg-4">
            <div class="card h-100">
                <div class="card-header">
                    <h5 class="mb-0">{title}</h5>
                </div>
                <div class="card-body">
                    <div class="mb-3">
                        <span class=difficulty_badge>{difficulty}</span>
                        {workout_type.map(|t| view! {
                            <span class="badge bg-info">{t}</span>
                        })}
                    </div>
                    <p class="card-text">{description}</p>
                    <hr />
                    <div class="d-flex justify-content-between align-items-center mb-2">
                        <span class="text-muted">"🏁 Session Time:"</span>
                        <span class="badge bg-primary">{duration}</span>
                    </div>
                    <div class="d-flex justify-content-between align-items-center mb-2">
                        <span class="text-muted">"🔥 Calories:"</span>
                        <span class="badge bg-danger">{calories}</span>
                    </div>

                    {(!exercises.is_empty()).then(|| view! {
                        <ExerciseList exercises=exercises />
                    })}

                    {target.map(|target| view! {
                        <div class="d-flex justify-content-between align-items-center mb-2">
                            <span class="text-muted">"🎯 Target:"</span>
                            <small class="text-end">{target}</small>
                        </div>
                    })}
                    {equipment.map(|equipment| view! {
                        <div class="d-flex justify-content-between align-items-center">
                            <span class="text-muted">"🏋️ Equipment:"</span>
                            <small class="text-end">{equipment}</small>
                        </div>
                    })}
                </div>
                <div class="card-footer bg-transparent">
                    <button class="btn btn-primary btn-sm w-100">"Start Workout"</button>
                </div>
            </div>
        </div>
    }
}

/// Preview of a workout's exercises: first few, then a "+ N more" line
#[component]
fn ExerciseList(exercises: Vec<Exercise>) -> impl IntoView {
    let hidden = exercises.len().saturating_sub(EXERCISE_PREVIEW_LEN);

    view! {
        <div class="mt-3">
            <hr />
            <div class="mb-2">
                <strong class="text-muted">"🏋️ Exercises:"</strong>
            </div>
            <ul class="list-unstyled ms-3">
                {exercises
                    .into_iter()
                    .take(EXERCISE_PREVIEW_LEN)
                    .enumerate()
                    .map(|(index, exercise)| {
                        let details = exercise.details();
                        view! {
                            <li class="mb-1">
                                <small>
                                    <span class="badge bg-light text-dark me-1">{index + 1}</span>
                                    <strong>{exercise.name.clone()}</strong>
                                    <span class="text-muted">{details}</span>
                                </small>
                            </li>
                        }
                    })
                    .collect_view()}
                {(hidden > 0).then(|| view! {
                    <li class="text-muted">
                        <small>{format!("+ {hidden} more exercises")}</small>
                    </li>
                })}
            </ul>
        </div>
    }
}
