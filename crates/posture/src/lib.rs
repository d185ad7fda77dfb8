mod calibration;
pub use calibration::*;

mod classifier;
pub use classifier::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod escalation;
pub use escalation::*;

mod heuristic;
pub use heuristic::*;

mod model;
pub use model::*;

mod monitor;
pub use monitor::*;

mod status;
pub use status::*;
