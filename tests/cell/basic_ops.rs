//! Basic Operations Tests
//!
//! Seeding, read-through, writes, cancelled updates and removal.

use crate::*;

/// Binding a fresh key seeds the store from the initial value
#[test]
fn test_seed_on_absent() {
    test_across_backends(|store| {
        let cell = PersistentCell::bind("myString", Some("foo".to_string()), store.backend())
            .unwrap();

        assert_eq!(cell.get().map(String::as_str), Some("foo"), "{}", store.name);
        assert_eq!(store.raw("myString").as_deref(), Some(r#""foo""#));
    });
}

/// A stored value wins over the initial value
#[test]
fn test_read_through_on_present() {
    test_across_backends(|store| {
        store.put_raw("k", r#""bar""#);

        let cell = PersistentCell::bind("k", Some("ignored".to_string()), store.backend()).unwrap();
        assert_eq!(cell.get().map(String::as_str), Some("bar"));
        assert_eq!(store.raw("k").as_deref(), Some(r#""bar""#));
    });
}

/// Without an initial value an empty slot stays empty
#[test]
fn test_absent_without_initial() {
    test_across_backends(|store| {
        let cell = PersistentCell::<String>::bind("nothing", None, store.backend()).unwrap();
        assert!(cell.get().is_none());
        assert!(store.raw("nothing").is_none());
    });
}

/// Writes reach the store and the mirror
#[test]
fn test_set_persists() {
    test_across_backends(|store| {
        let mut cell = PersistentCell::bind("myString", Some("foo".to_string()), store.backend())
            .unwrap();

        cell.set("bar".to_string());
        assert_eq!(cell.get().map(String::as_str), Some("bar"));
        assert_eq!(store.raw("myString").as_deref(), Some(r#""bar""#));

        cell.set("baz".to_string());
        assert_eq!(cell.get().map(String::as_str), Some("baz"));
        assert_eq!(store.raw("myString").as_deref(), Some(r#""baz""#));
    });
}

/// Returning `None` from an updater changes nothing
#[test]
fn test_cancel_via_none() {
    test_across_backends(|store| {
        // From a populated state
        let mut cell = PersistentCell::bind("k", Some(10i64), store.backend()).unwrap();
        cell.update(|_| None);
        assert_eq!(cell.get(), Some(&10));
        assert_eq!(store.raw("k").as_deref(), Some("10"));

        // From an empty state
        let mut empty = PersistentCell::<i64>::bind("empty", None, store.backend()).unwrap();
        empty.update(|_| None);
        assert!(empty.get().is_none());
        assert!(store.raw("empty").is_none());
    });
}

/// Updaters see the current value
#[test]
fn test_update_from_current() {
    test_across_backends(|store| {
        let mut counter = PersistentCell::bind("counter", Some(0u64), store.backend()).unwrap();
        for _ in 0..3 {
            counter.update(|n| n.map(|n| n + 1));
        }
        assert_eq!(counter.get(), Some(&3));
        assert_eq!(store.raw("counter").as_deref(), Some("3"));
    });
}

/// Removal empties both the cell and the slot
#[test]
fn test_delete_then_read() {
    test_across_backends(|store| {
        let mut cell = PersistentCell::bind("myString", Some("foo".to_string()), store.backend())
            .unwrap();

        cell.remove();
        assert!(cell.get().is_none());
        assert!(store.raw("myString").is_none());

        // Setting after removal works again
        cell.set("back".to_string());
        assert_eq!(store.raw("myString").as_deref(), Some(r#""back""#));
    });
}

/// Reads never go to the store
#[test]
fn test_get_does_not_touch_store() {
    test_across_backends(|store| {
        let cell = PersistentCell::bind("k", Some(1u8), store.backend()).unwrap();
        store.put_raw("k", "2");
        assert_eq!(cell.get(), Some(&1));
    });
}

/// Builder produces the same cell as `bind`
#[test]
fn test_builder_binds() {
    test_across_backends(|store| {
        let cell = PersistentCell::<Vec<u8>>::builder("bytes")
            .initial(vec![1, 2, 3])
            .backend(store.backend())
            .bind()
            .unwrap();
        assert_eq!(cell.get(), Some(&vec![1, 2, 3]));
        assert_eq!(store.raw("bytes").as_deref(), Some("[1,2,3]"));
        assert_eq!(cell.key(), "bytes");
        assert_eq!(cell.initial(), Some(&vec![1, 2, 3]));
    });
}

/// An empty key is the one error that reaches the caller
#[test]
fn test_empty_key_is_configuration_error() {
    test_across_backends(|store| {
        let err = PersistentCell::bind("", Some(1u8), store.backend()).unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }));

        let err = PersistentCell::<u8>::builder("").bind().unwrap_err();
        assert!(err.is_invalid_key());
    });
}
