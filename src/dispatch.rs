//! Command Dispatcher
//!
//! Executes one [`Command`] against a [`Store`] and turns the result into an
//! [`Outcome`] whose `Display` is the text printed to stdout.
//!
//! ## Flow per command
//! - Write:  validate JSON → set (raw input, byte-for-byte)
//! - Read:   get → value verbatim, or "not found"
//! - List:   scan_keys → one key per line, or "no keys found"
//! - Delete: delete → confirmation, or "not found"
//!
//! Store failures are wrapped with the operation they interrupted; nothing
//! is retried.

use std::fmt;

use serde::de::IgnoredAny;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{Result, WranglerError};
use crate::store::{RedisStore, Store};

/// The user-visible result of a successful command
///
/// "Not found" variants are normal outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Value stored under the key
    Written { key: String },

    /// Value read back, untouched
    Value(String),

    /// Read of a key that does not exist
    Missing { key: String },

    /// Keys matching a pattern, in store order (never empty)
    Keys(Vec<String>),

    /// No keys matched the pattern
    NoKeys { pattern: String },

    /// Key removed
    Deleted { key: String },

    /// Delete of a key that does not exist
    NothingToDelete { key: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Written { key } => write!(f, "Successfully wrote to key: {}", key),
            Outcome::Value(value) => f.write_str(value),
            Outcome::Missing { key } => write!(f, "No data found for key: {}", key),
            Outcome::Keys(keys) => f.write_str(&keys.join("\n")),
            Outcome::NoKeys { pattern } => {
                write!(f, "No keys found matching pattern: {}", pattern)
            }
            Outcome::Deleted { key } => write!(f, "Successfully deleted key: {}", key),
            Outcome::NothingToDelete { key } => write!(f, "No key found to delete: {}", key),
        }
    }
}

/// Check that `data` is syntactically valid JSON, discarding the parse
pub fn validate_json(data: &str) -> Result<()> {
    serde_json::from_str::<IgnoredAny>(data)
        .map(|_| ())
        .map_err(WranglerError::InvalidJson)
}

/// Execute exactly one store operation for `command`
pub fn execute<S>(store: &mut S, command: &Command) -> Result<Outcome>
where
    S: Store + ?Sized,
{
    let operation = command.operation();
    tracing::debug!("Executing {}", operation);

    let outcome = match command {
        Command::Write { key, data } => {
            validate_json(data)?;
            store
                .set(key, data)
                .map_err(|e| WranglerError::store(operation, e))?;
            Outcome::Written { key: key.clone() }
        }

        Command::Read { key } => {
            let value = store
                .get(key)
                .map_err(|e| WranglerError::store(operation, e))?;
            match value {
                Some(value) => Outcome::Value(value),
                None => Outcome::Missing { key: key.clone() },
            }
        }

        Command::List { pattern } => {
            let keys = store
                .scan_keys(pattern)
                .map_err(|e| WranglerError::store(operation, e))?;
            if keys.is_empty() {
                Outcome::NoKeys {
                    pattern: pattern.clone(),
                }
            } else {
                Outcome::Keys(keys)
            }
        }

        Command::Delete { key } => {
            let removed = store
                .delete(key)
                .map_err(|e| WranglerError::store(operation, e))?;
            if removed > 0 {
                Outcome::Deleted { key: key.clone() }
            } else {
                Outcome::NothingToDelete { key: key.clone() }
            }
        }
    };

    Ok(outcome)
}

/// Connect to Redis with `config`, then execute `command`
///
/// A connection failure means no operation is attempted at all.
pub fn run(config: &Config, command: &Command) -> Result<Outcome> {
    let mut store = RedisStore::connect(config)?;
    execute(&mut store, command)
}
