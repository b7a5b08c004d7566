//! Echona Engine library.
//!
//! Drives the mood-based challenge loop: selection, progression and
//! persistence for a single user session.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping storage operations
//! - `use_cases/` - The challenge session controller
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Command entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

pub use app::{App, SharedSession};
