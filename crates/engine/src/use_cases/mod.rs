//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod challenge;

pub use challenge::ChallengeSession;
