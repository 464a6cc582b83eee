//! Store Module
//!
//! The adapter between the dispatcher and the key-value store.
//!
//! ## Responsibilities
//! - Open a connection and verify it with one PING
//! - Expose set / get / scan-by-pattern / delete as plain blocking calls
//! - Materialize cursor-based key scans into a finite, duplicate-free list
//!
//! ## Backends
//! - [`RedisStore`]: the real thing, over the `redis` crate
//! - [`MemoryStore`]: an in-process map with the same contract, used to drive
//!   the dispatcher without a server

mod glob;
mod memory;
mod redis_store;

pub use glob::glob_match;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use crate::error::StoreResult;

/// The four primitive operations the dispatcher relies on
///
/// Every call is a blocking round trip and is never retried.
pub trait Store {
    /// Liveness check
    fn ping(&mut self) -> StoreResult<()>;

    /// Store `value` under `key`, replacing whatever was there
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Fetch the value under `key`; `None` when the key does not exist
    fn get(&mut self, key: &str) -> StoreResult<Option<String>>;

    /// All keys matching a glob `pattern`, in store order, without duplicates
    fn scan_keys(&mut self, pattern: &str) -> StoreResult<Vec<String>>;

    /// Remove `key`; returns how many keys were actually removed
    fn delete(&mut self, key: &str) -> StoreResult<u64>;
}
