// Planning services, leaf to root

pub mod check_in_service;
pub mod duration_estimator;
pub mod exercise_selection_service;
pub mod plan_generation_service;
pub mod progress_tracking_service;
pub mod schedule_balancer;
pub mod workout_focus_service;

pub use duration_estimator::{estimate_exercise_minutes, estimate_workout_minutes, target_session_minutes};
pub use exercise_selection_service::ExerciseSelectionService;
pub use plan_generation_service::PlanGenerationService;
pub use schedule_balancer::balance_weekly_schedule;
pub use workout_focus_service::{classify_muscles, MuscleBucket, WorkoutFocus, MUSCLE_CLASSIFICATION};
