//! context-wrangler CLI
//!
//! Parses one subcommand, connects to Redis, runs it, prints the result.

use clap::Parser;
use context_wrangler::config::{load_env_file, Config};
use context_wrangler::{dispatch, Cli};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the result line(s)
    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("context-wrangler v{}", context_wrangler::VERSION);

    let result = load_env_file(cli.env_file.as_deref())
        .and_then(|loaded| {
            if let Some(path) = loaded {
                tracing::debug!("Loaded settings from {}", path.display());
            }
            Config::from_env()
        })
        .and_then(|config| dispatch::run(&config, &cli.command));

    match result {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    }
}
