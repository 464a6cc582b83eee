//! Tests for MemoryStore
//!
//! These tests verify the in-process backend honours the store contract:
//! - Overwrite on set, absence on get
//! - Glob scans without duplicates
//! - Delete counts
//! - Failure mode and operation counting

use context_wrangler::error::StoreError;
use context_wrangler::store::{MemoryStore, Store};

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_set_get() {
    let mut store = MemoryStore::new();

    store.set("hello", "\"world\"").unwrap();

    assert_eq!(store.get("hello").unwrap(), Some("\"world\"".to_string()));
}

#[test]
fn test_get_nonexistent_key() {
    let mut store = MemoryStore::new();

    assert_eq!(store.get("nonexistent").unwrap(), None);
}

#[test]
fn test_set_overwrites() {
    let mut store = MemoryStore::new();

    store.set("k", "1").unwrap();
    store.set("k", "2").unwrap();

    assert_eq!(store.get("k").unwrap(), Some("2".to_string()));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_counts_removed_keys() {
    let mut store = MemoryStore::new();
    store.set("k", "1").unwrap();

    assert_eq!(store.delete("k").unwrap(), 1);
    assert_eq!(store.delete("k").unwrap(), 0);
    assert!(!store.contains_key("k"));
    assert!(store.is_empty());
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn test_scan_prefix() {
    let mut store = MemoryStore::new();
    for key in ["ctx:1", "ctx:2", "other:1", "ctx"] {
        store.set(key, "{}").unwrap();
    }

    let mut keys = store.scan_keys("ctx:*").unwrap();
    keys.sort();

    assert_eq!(keys, vec!["ctx:1".to_string(), "ctx:2".to_string()]);
}

#[test]
fn test_scan_default_pattern_returns_all() {
    let mut store = MemoryStore::new();
    for key in ["a", "b", "c"] {
        store.set(key, "1").unwrap();
    }

    assert_eq!(store.scan_keys("*").unwrap().len(), 3);
}

#[test]
fn test_scan_no_match() {
    let mut store = MemoryStore::new();
    store.set("a", "1").unwrap();

    assert!(store.scan_keys("zzz*").unwrap().is_empty());
}

// =============================================================================
// Failure Mode Tests
// =============================================================================

#[test]
fn test_unavailable_store_fails_every_call() {
    let mut store = MemoryStore::unavailable("connection reset by peer");

    assert!(matches!(store.ping(), Err(StoreError::Backend(_))));
    assert!(store.set("k", "1").is_err());
    assert!(store.get("k").is_err());
    assert!(store.scan_keys("*").is_err());

    let err = store.delete("k").unwrap_err();
    assert_eq!(err.to_string(), "connection reset by peer");
}

#[test]
fn test_operation_count_excludes_ping() {
    let mut store = MemoryStore::new();

    store.ping().unwrap();
    assert_eq!(store.operation_count(), 0);

    store.set("k", "1").unwrap();
    store.get("k").unwrap();
    store.scan_keys("*").unwrap();
    store.delete("k").unwrap();

    assert_eq!(store.operation_count(), 4);
}
