//! # context-wrangler
//!
//! A command-line tool that writes, reads, lists and deletes JSON "context"
//! records stored under namespaced keys in Redis:
//! - One subcommand per invocation, one store operation per subcommand
//! - Connection settings from `REDIS_*` variables, optionally via a `.env` file
//! - JSON validated on write, stored byte-for-byte
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Command Parser                          │
//! │               (clap: write / read / list / delete)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Command Dispatcher                         │
//! │         (JSON validation, outcome / error rendering)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ set / get / scan_keys / delete
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ RedisStore  │          │ MemoryStore │
//!   │  (network)  │          │ (in-process)│
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod cli;
pub mod store;
pub mod dispatch;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use cli::{Cli, Command, Operation};
pub use config::Config;
pub use dispatch::{execute, run, Outcome};
pub use error::{Result, StoreError, WranglerError};
pub use store::{MemoryStore, RedisStore, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of context-wrangler
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
