//! In-process store
//!
//! A `BTreeMap` behind the [`Store`] trait. Keys come back from `scan_keys`
//! in sorted order, which is just one valid "store order".

use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};

use super::{glob_match, Store};

/// In-memory store honouring the same contract as [`RedisStore`](super::RedisStore)
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key → stored value
    data: BTreeMap<String, String>,

    /// When set, every call fails with this message
    failure: Option<String>,

    /// Number of set/get/scan/delete calls received (pings excluded)
    operations: usize,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising error paths
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of data operations received so far
    pub fn operation_count(&self) -> usize {
        self.operations
    }

    /// Whether `key` currently holds a value
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_available(&self) -> StoreResult<()> {
        match &self.failure {
            Some(message) => Err(StoreError::Backend(message.clone())),
            None => Ok(()),
        }
    }

    fn begin_operation(&mut self) -> StoreResult<()> {
        self.operations += 1;
        self.check_available()
    }
}

impl Store for MemoryStore {
    fn ping(&mut self) -> StoreResult<()> {
        self.check_available()
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.begin_operation()?;
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&mut self, key: &str) -> StoreResult<Option<String>> {
        self.begin_operation()?;
        Ok(self.data.get(key).cloned())
    }

    fn scan_keys(&mut self, pattern: &str) -> StoreResult<Vec<String>> {
        self.begin_operation()?;
        Ok(self
            .data
            .keys()
            .filter(|key| glob_match(pattern, key))
            .cloned()
            .collect())
    }

    fn delete(&mut self, key: &str) -> StoreResult<u64> {
        self.begin_operation()?;
        Ok(u64::from(self.data.remove(key).is_some()))
    }
}
