//! API layer - entry points that drive a challenge session.

pub mod console;

pub use console::{execute, Command};
