//! Redis-backed store
//!
//! Thin wrapper over a synchronous `redis::Connection`. The RESP wire format,
//! AUTH and socket handling all live in the `redis` crate.

use std::collections::HashSet;

use redis::{Client, Commands, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

use crate::config::Config;
use crate::error::{Result, StoreError, StoreResult, WranglerError};

use super::Store;

/// A live, verified connection to a Redis server
pub struct RedisStore {
    /// Underlying client connection (owned for the whole invocation)
    connection: redis::Connection,

    /// COUNT hint for each SCAN round trip
    scan_count: usize,

    /// `host:port`, for logging
    addr: String,
}

impl RedisStore {
    /// Open a connection and verify it with PING
    ///
    /// An unreachable server, a rejected password or a failed PING are all
    /// reported as [`WranglerError::Connection`]. Nothing is retried.
    pub fn connect(config: &Config) -> Result<Self> {
        let addr = config.addr();
        tracing::debug!("Connecting to Redis at {}", addr);

        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(config.host.clone(), config.port),
            redis: RedisConnectionInfo {
                password: config.password.clone(),
                ..Default::default()
            },
        };

        let connection = Client::open(info)
            .and_then(|client| client.get_connection())
            .map_err(|e| {
                tracing::warn!("Failed to connect to {}: {}", addr, e);
                WranglerError::Connection(StoreError::Redis(e))
            })?;

        let mut store = Self {
            connection,
            scan_count: config.scan_count,
            addr,
        };

        store.ping().map_err(|e| {
            tracing::warn!("PING to {} failed: {}", store.addr, e);
            WranglerError::Connection(e)
        })?;

        tracing::debug!("Connected to {}", store.addr);
        Ok(store)
    }

    /// Get the server address string
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

impl Store for RedisStore {
    fn ping(&mut self) -> StoreResult<()> {
        let _: String = redis::cmd("PING").query(&mut self.connection)?;
        Ok(())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        tracing::trace!("SET {} ({} bytes)", key, value.len());
        self.connection.set::<_, _, ()>(key, value)?;
        Ok(())
    }

    fn get(&mut self, key: &str) -> StoreResult<Option<String>> {
        tracing::trace!("GET {}", key);
        Ok(self.connection.get(key)?)
    }

    /// Walk the keyspace with SCAN until the cursor returns to 0
    ///
    /// SCAN may hand back the same key more than once; only the first
    /// occurrence is kept so the caller sees each key exactly once.
    fn scan_keys(&mut self, pattern: &str) -> StoreResult<Vec<String>> {
        let mut keys = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor: u64 = 0;
        let mut round_trips = 0usize;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(self.scan_count)
                .query(&mut self.connection)?;
            round_trips += 1;

            for key in batch {
                if seen.insert(key.clone()) {
                    keys.push(key);
                }
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        tracing::debug!(
            "SCAN {} matched {} keys in {} round trips",
            pattern,
            keys.len(),
            round_trips
        );
        Ok(keys)
    }

    fn delete(&mut self, key: &str) -> StoreResult<u64> {
        tracing::trace!("DEL {}", key);
        Ok(self.connection.del(key)?)
    }
}
