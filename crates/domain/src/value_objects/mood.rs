//! Mood labels that drive challenge selection
//!
//! Moods arrive as free-form strings from the mood selector and the emotion
//! detectors. Anything that is not one of the six known labels resolves to
//! [`Mood::Calm`], which is also the catalog fallback list.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// The user's current emotional state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    /// Fallback for unknown labels
    #[default]
    Calm,
    Excited,
    Anxious,
}

impl Mood {
    /// Get all moods in catalog order
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Happy,
            Mood::Calm,
            Mood::Excited,
            Mood::Sad,
            Mood::Angry,
            Mood::Anxious,
        ]
    }

    /// Get a display name for the mood
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Calm => "Calm",
            Mood::Excited => "Excited",
            Mood::Anxious => "Anxious",
        }
    }

    /// Resolve a raw label, falling back to `Calm` for unknown input.
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "calm" => Ok(Mood::Calm),
            "excited" => Ok(Mood::Excited),
            "anxious" => Ok(Mood::Anxious),
            _ => Err(DomainError::parse(format!("Unknown mood: {}", s))),
        }
    }
}
