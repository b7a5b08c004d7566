pub mod catalog;
pub mod entities;
pub mod error;
pub mod ids;
pub mod progression;
pub mod selection;
pub mod value_objects;

pub use catalog::{Catalog, FALLBACK_MOOD};
pub use entities::ChallengeDefinition;
pub use error::DomainError;
pub use ids::{BadgeId, ChallengeId};
pub use progression::{Completion, PointsPolicy, ProgressRecord, ProgressionState};
pub use selection::{select_active_challenge, SelectionRequest};
pub use value_objects::{pick_affirmation, Mood, AFFIRMATIONS};
