//! Challenge definition - a mood-tailored micro-activity
//!
//! Definitions are immutable catalog data. Progression refers to them by
//! [`ChallengeId`] value only, never by reference, so a persisted id that no
//! longer exists in the catalog is harmless.

use crate::error::DomainError;
use crate::{BadgeId, ChallengeId};
use serde::{Deserialize, Serialize};

/// A challenge that can be presented to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDefinition {
    id: ChallengeId,
    title: String,
    description: String,
    /// Reward added to the point total on completion
    points: u32,
    /// Badge unlocked on completion; several challenges may share one
    badge: BadgeId,
}

impl ChallengeDefinition {
    /// Create a new challenge definition.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the id or badge is blank, or if
    /// `points` is zero.
    pub fn new(
        id: impl Into<ChallengeId>,
        title: impl Into<String>,
        description: impl Into<String>,
        points: u32,
        badge: impl Into<BadgeId>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let badge = badge.into();
        if id.as_str().trim().is_empty() {
            return Err(DomainError::validation("Challenge id cannot be empty"));
        }
        if badge.as_str().trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Challenge {} has an empty badge",
                id
            )));
        }
        if points == 0 {
            return Err(DomainError::validation(format!(
                "Challenge {} must award a positive number of points",
                id
            )));
        }
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            points,
            badge,
        })
    }

    /// Construct builtin catalog data; validated by the catalog tests.
    pub(crate) fn fixed(id: &str, title: &str, description: &str, points: u32, badge: &str) -> Self {
        Self {
            id: ChallengeId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            points,
            badge: BadgeId::new(badge),
        }
    }

    // === Accessors ===

    pub fn id(&self) -> &ChallengeId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn badge(&self) -> &BadgeId {
        &self.badge
    }
}
