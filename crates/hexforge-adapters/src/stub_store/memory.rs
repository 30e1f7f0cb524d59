//! In-memory stub store with the built-in stubs.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use hexforge_core::{
    application::{ApplicationError, ports::StubStore},
    error::HexforgeResult,
};

use super::builtin::BUILTIN_STUBS;

/// Thread-safe in-memory stub store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStubStore {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryStubStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in stubs loaded.
    pub fn with_builtin() -> Self {
        let stubs = BUILTIN_STUBS
            .iter()
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(stubs)),
        }
    }

    /// Add or replace a stub.
    pub fn insert(&self, name: impl Into<String>, text: impl Into<String>) -> HexforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), text.into());
        Ok(())
    }

    /// Get the number of stubs.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StubStore for InMemoryStubStore {
    fn load(&self, name: &str) -> HexforgeResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::StubNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn names(&self) -> HexforgeResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.keys().cloned().collect())
    }
}
