// Library exports for the fitplan training engine
// Callers (UI, persistence, the CLI) drive everything through `TrainingEngine`

pub mod catalog;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;

pub use catalog::ExerciseCatalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{EngineConfig, RegenerationPolicy};
pub use engine::{CheckInOutcome, TrainingEngine};
pub use error::EngineError;
