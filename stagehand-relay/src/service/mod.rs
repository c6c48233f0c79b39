//! Service layer
//!
//! Business logic for the relay. The run driver owns the start → poll →
//! fetch lifecycle of a single remote run; the HTTP handlers above it only
//! validate requests and map outcomes to responses.

mod run_driver;

pub use run_driver::{DriveError, RunDriver};
