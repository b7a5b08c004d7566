//! Progress entity operations.
//!
//! Owns the translation between the stored text and [`ProgressionState`]. Load
//! never fails: an absent key, unreadable storage and corrupt JSON all yield the
//! empty state.

use std::sync::Arc;

use echona_domain::{ProgressRecord, ProgressionState};

use crate::infrastructure::ports::{ProgressStore, RepoError};

/// Progress entity operations.
pub struct Progress {
    store: Arc<dyn ProgressStore>,
    namespace: String,
}

impl Progress {
    pub fn new(store: Arc<dyn ProgressStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Load the stored state, treating anything unusable as absent.
    pub async fn load(&self) -> ProgressionState {
        let raw = match self.store.load(&self.namespace).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(namespace = %self.namespace, "No stored progress, starting fresh");
                return ProgressionState::default();
            }
            Err(e) => {
                tracing::warn!(namespace = %self.namespace, error = %e, "Failed to read progress, starting fresh");
                return ProgressionState::default();
            }
        };

        match serde_json::from_str::<ProgressRecord>(&raw) {
            Ok(record) => {
                let state = ProgressionState::from(record);
                tracing::info!(
                    namespace = %self.namespace,
                    completed = state.completed_count(),
                    badges = state.badge_count(),
                    points = state.points(),
                    "Restored progress"
                );
                state
            }
            Err(e) => {
                tracing::warn!(namespace = %self.namespace, error = %e, "Stored progress is malformed, ignoring it");
                ProgressionState::default()
            }
        }
    }

    /// Serialize and write the full state.
    pub async fn save(&self, state: &ProgressionState) -> Result<(), RepoError> {
        let json =
            serde_json::to_string(&state.to_record()).map_err(RepoError::serialization)?;
        self.store.save(&self.namespace, &json).await
    }
}
