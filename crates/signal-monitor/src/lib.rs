//! Recurring market scan loop and logging setup.

mod logging;
mod scheduler;

pub use logging::setup_logging;
pub use scheduler::{CycleStats, Monitor};
