// Engine data models, serialized as camelCase JSON

pub mod check_in;
pub mod exercise;
pub mod progress;
pub mod training_plan;
pub mod user_profile;

pub use check_in::*;
pub use exercise::*;
pub use progress::*;
pub use training_plan::*;
pub use user_profile::*;
