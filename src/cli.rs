//! Command-line parsing
//!
//! Turns the process arguments into exactly one [`Command`]. Anything clap
//! rejects (missing flag, unknown subcommand, empty value) ends the process
//! with usage help before a connection is attempted.

use std::fmt;
use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser, Subcommand};

/// Pattern used by `list` when `--pattern` is omitted
pub const DEFAULT_PATTERN: &str = "*";

/// context-wrangler CLI
#[derive(Parser, Debug)]
#[command(name = "context-wrangler")]
#[command(about = "A CLI tool to wrangle context with Redis.")]
#[command(version)]
pub struct Cli {
    /// Settings file to load before reading REDIS_* variables
    /// (default: .env next to the executable, if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// One store operation requested on the command line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write data to a Redis key.
    Write {
        /// The key to write to.
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        key: String,

        /// The JSON data string to write.
        #[arg(long, allow_hyphen_values = true, value_parser = NonEmptyStringValueParser::new())]
        data: String,
    },

    /// Read data from a Redis key.
    Read {
        /// The key to read from.
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        key: String,
    },

    /// List keys matching a pattern.
    List {
        /// The pattern to match keys (e.g., 'gemini-context:*').
        #[arg(long, default_value = DEFAULT_PATTERN, value_parser = NonEmptyStringValueParser::new())]
        pattern: String,
    },

    /// Delete a key from Redis.
    Delete {
        /// The key to delete.
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        key: String,
    },
}

/// The kind of a command, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Write,
    Read,
    List,
    Delete,
}

impl Command {
    /// Get the operation kind
    pub fn operation(&self) -> Operation {
        match self {
            Command::Write { .. } => Operation::Write,
            Command::Read { .. } => Operation::Read,
            Command::List { .. } => Operation::List,
            Command::Delete { .. } => Operation::Delete,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Write => "write",
            Operation::Read => "read",
            Operation::List => "list",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}
