//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Progress storage (could swap SQLite -> browser storage or a remote KV)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::ProgressStore;
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use repos::MockProgressStore;
#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
