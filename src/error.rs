//! Error types for context-wrangler
//!
//! Two layers:
//! - [`StoreError`]: a failure surfaced by a store backend during a round trip
//! - [`WranglerError`]: the per-invocation taxonomy the binary reports to the user
//!
//! The `Display` of every `WranglerError` variant is the exact line printed to
//! stdout. Absent keys and empty listings are not errors at all; they are
//! ordinary [`Outcome`](crate::dispatch::Outcome)s.

use thiserror::Error;

use crate::cli::Operation;

/// Result type alias using WranglerError
pub type Result<T> = std::result::Result<T, WranglerError>;

/// Result type alias for store backend calls
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure reported by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Anything the Redis client reports: I/O, auth, protocol, server errors
    #[error("{0}")]
    Redis(#[from] redis::RedisError),

    /// Failure from a non-Redis backend
    #[error("{0}")]
    Backend(String),
}

/// Top-level error for a single invocation
#[derive(Debug, Error)]
pub enum WranglerError {
    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// Store unreachable or credentials rejected at connect time
    #[error("Error connecting to Redis: {0}")]
    Connection(#[source] StoreError),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    /// Write payload is not syntactically valid JSON
    #[error("Error: Provided data is not valid JSON.")]
    InvalidJson(#[source] serde_json::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// A store round trip failed while executing a command
    #[error("An error occurred during {operation}: {source}")]
    Store {
        operation: Operation,
        #[source]
        source: StoreError,
    },
}

impl WranglerError {
    /// Wrap a backend failure with the operation it interrupted
    pub fn store(operation: Operation, source: StoreError) -> Self {
        WranglerError::Store { operation, source }
    }
}
