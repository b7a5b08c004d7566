//! Domain entities - Core business objects with identity

mod challenge;

pub use challenge::ChallengeDefinition;
