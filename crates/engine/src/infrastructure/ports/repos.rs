//! Storage port for durable progression state.

use async_trait::async_trait;

use super::error::RepoError;

// =============================================================================
// Progress Storage
// =============================================================================

/// Durable key-value store keyed by a namespace string.
///
/// Values are opaque serialized text; parsing belongs to the caller so that a
/// corrupt value can be treated the same as an absent one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Raw value stored under `namespace`, or `None` if it was never written.
    async fn load(&self, namespace: &str) -> Result<Option<String>, RepoError>;

    /// Replace the value stored under `namespace`.
    async fn save(&self, namespace: &str, value: &str) -> Result<(), RepoError>;
}
