//! Failure Absorption Tests
//!
//! Store and codec failures never reach the caller. Each one leaves the cell
//! and the slot as they were before the failed call.

use crate::*;

/// A rejected write keeps the previous value in the cell and the store
#[test]
fn test_silent_failure_on_set() {
    init_tracing();
    let flaky = FlakyStore::new();
    let mut cell = PersistentCell::bind("k", Some("before".to_string()), flaky.backend()).unwrap();

    flaky.fail_set(true);
    cell.set("after".to_string());

    assert_eq!(cell.get().map(String::as_str), Some("before"));
    assert_eq!(flaky.inner().get("k").unwrap().as_deref(), Some(r#""before""#));

    // Once the store recovers, writes go through again
    flaky.fail_set(false);
    cell.set("after".to_string());
    assert_eq!(cell.get().map(String::as_str), Some("after"));
}

/// A failing updater write behaves like a failing plain write
#[test]
fn test_silent_failure_on_update() {
    init_tracing();
    let flaky = FlakyStore::new();
    let mut cell = PersistentCell::bind("n", Some(1u32), flaky.backend()).unwrap();

    flaky.fail_set(true);
    cell.update(|n| n.map(|n| n * 100));
    assert_eq!(cell.get(), Some(&1));
    assert_eq!(flaky.inner().get("n").unwrap().as_deref(), Some("1"));
}

/// A rejected remove leaves everything in place
#[test]
fn test_silent_failure_on_remove() {
    init_tracing();
    let flaky = FlakyStore::new();
    let mut cell = PersistentCell::bind("k", Some(true), flaky.backend()).unwrap();

    flaky.fail_remove(true);
    cell.remove();
    assert_eq!(cell.get(), Some(&true));
    assert!(flaky.inner().contains_key("k"));
}

/// A store that throws on read falls back to the initial value
#[test]
fn test_failed_read_falls_back_to_initial() {
    init_tracing();
    let flaky = FlakyStore::new();
    flaky.inner().set("k", r#""stored""#).unwrap();
    flaky.fail_get(true);

    let cell = PersistentCell::bind("k", Some("initial".to_string()), flaky.backend()).unwrap();
    assert_eq!(cell.get().map(String::as_str), Some("initial"));

    // Nothing was seeded over the unreadable value
    assert_eq!(flaky.set_calls(), 0);
    assert_eq!(
        flaky.inner().get("k").unwrap().as_deref(),
        Some(r#""stored""#)
    );
}

/// A failed seed does not abort initialization
#[test]
fn test_failed_seed_keeps_initial() {
    init_tracing();
    let flaky = FlakyStore::new();
    flaky.fail_set(true);

    let cell = PersistentCell::bind("k", Some(42u16), flaky.backend()).unwrap();
    assert_eq!(cell.get(), Some(&42));
    assert_eq!(flaky.set_calls(), 1);
    assert!(flaky.inner().is_empty());
}

/// Malformed stored data falls back to the initial value
#[test]
fn test_malformed_stored_value() {
    test_across_backends(|store| {
        store.put_raw("k", "not json at all");
        let cell = PersistentCell::bind("k", Some(vec![1u8]), store.backend()).unwrap();
        assert_eq!(cell.get(), Some(&vec![1]));
        assert_eq!(store.raw("k").as_deref(), Some("not json at all"));
    });
}

/// Stored data of the wrong shape is a decode failure like any other
#[test]
fn test_wrong_type_stored_value() {
    test_across_backends(|store| {
        store.put_raw("k", r#"{"a":1}"#);
        let cell = PersistentCell::<u32>::bind("k", None, store.backend()).unwrap();
        assert!(cell.get().is_none());
    });
}

/// A value the codec cannot encode is dropped
#[test]
fn test_encode_failure_is_absorbed() {
    init_tracing();
    let flaky = FlakyStore::new();
    let options = CellOptions::<String>::custom(
        |v: &String| {
            if v.contains('\n') {
                Err(stashcell::CodecError::Encode("multi-line".into()))
            } else {
                Ok(v.clone())
            }
        },
        |raw: &str| Ok(raw.to_string()),
    );
    let mut cell =
        PersistentCell::bind_with("line", Some("one".to_string()), options, flaky.backend())
            .unwrap();

    cell.set("two\nlines".to_string());
    assert_eq!(cell.get().map(String::as_str), Some("one"));
    assert_eq!(flaky.inner().get("line").unwrap().as_deref(), Some("one"));
    // Only the seed reached the store
    assert_eq!(flaky.set_calls(), 1);
}

/// Quota exhaustion behaves like any other rejected write
#[test]
fn test_quota_exceeded() {
    init_tracing();
    let store = MemoryStore::with_quota(32);
    let mut cell =
        PersistentCell::bind("note", Some(String::new()), Backend::new(store.clone())).unwrap();

    cell.set("short".to_string());
    cell.set("x".repeat(64));
    assert_eq!(cell.get().map(String::as_str), Some("short"));
    assert_eq!(store.get("note").unwrap().as_deref(), Some(r#""short""#));
}

/// No backend at all yields a fixed, inert cell
#[test]
fn test_detached_cell() {
    init_tracing();
    let mut cell = PersistentCell::bind("k", Some("foo".to_string()), Backend::Unavailable).unwrap();
    assert!(cell.is_detached());

    cell.set("bar".to_string());
    assert_eq!(cell.get().map(String::as_str), Some("foo"));
    cell.remove();
    assert_eq!(cell.get().map(String::as_str), Some("foo"));

    let empty = PersistentCell::<String>::bind("k", None, Backend::Unavailable).unwrap();
    assert!(empty.get().is_none());
}

/// Outside a browser, detection finds no backend
#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_detected_backend_outside_browser_is_detached() {
    let cell = PersistentCell::<u8>::builder("k")
        .initial(1)
        .detect_backend()
        .bind()
        .unwrap();
    assert!(cell.is_detached());
    assert_eq!(cell.get(), Some(&1));
}
