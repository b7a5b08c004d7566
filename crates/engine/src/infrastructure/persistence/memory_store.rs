//! In-memory progress storage for tests and throwaway sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{ProgressStore, RepoError};

#[derive(Default)]
pub struct InMemoryProgressStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a namespace, e.g. with corrupt data.
    pub fn with_value(namespace: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(namespace.into(), value.into());
        Self {
            values: RwLock::new(values),
        }
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn load(&self, namespace: &str) -> Result<Option<String>, RepoError> {
        Ok(self.values.read().await.get(namespace).cloned())
    }

    async fn save(&self, namespace: &str, value: &str) -> Result<(), RepoError> {
        self.values
            .write()
            .await
            .insert(namespace.to_string(), value.to_string());
        Ok(())
    }
}
