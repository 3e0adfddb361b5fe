//! Rebinding and Shared Slot Tests

use crate::*;

/// `rebind_with` re-initializes under the new key with the new initial value
#[test]
fn test_rebind_with_new_initial() {
    test_across_backends(|store| {
        let mut cell = PersistentCell::bind("a", Some("1".to_string()), store.backend()).unwrap();
        assert_eq!(store.raw("a").as_deref(), Some(r#""1""#));

        cell.rebind_with("b", Some("2".to_string())).unwrap();
        assert_eq!(cell.key().as_str(), "b");
        assert_eq!(cell.get().map(String::as_str), Some("2"));
        assert_eq!(store.raw("b").as_deref(), Some(r#""2""#));

        // The old slot is untouched
        assert_eq!(store.raw("a").as_deref(), Some(r#""1""#));
    });
}

/// `rebind` keeps the construction-time initial value
#[test]
fn test_rebind_reuses_initial() {
    test_across_backends(|store| {
        let mut cell = PersistentCell::bind("a", Some(5i64), store.backend()).unwrap();
        cell.set(6);

        cell.rebind("b").unwrap();
        assert_eq!(cell.get(), Some(&5));
        assert_eq!(cell.initial(), Some(&5));
        assert_eq!(store.raw("b").as_deref(), Some("5"));
        assert_eq!(store.raw("a").as_deref(), Some("6"));
    });
}

/// Rebinding to a slot that already holds data reads it through
#[test]
fn test_rebind_reads_existing_slot() {
    test_across_backends(|store| {
        store.put_raw("other", "[1,2,3]");
        let mut cell = PersistentCell::bind("mine", Some(Vec::<u8>::new()), store.backend()).unwrap();

        cell.rebind("other").unwrap();
        assert_eq!(cell.get(), Some(&vec![1, 2, 3]));
    });
}

/// Rebinding to the current key is a no-op
#[test]
fn test_rebind_same_key_is_noop() {
    test_across_backends(|store| {
        let mut cell = PersistentCell::bind("k", Some(1u8), store.backend()).unwrap();
        // Change the slot behind the cell's back
        store.put_raw("k", "9");

        cell.rebind("k").unwrap();
        assert_eq!(cell.get(), Some(&1));

        // rebind_with always re-reads
        cell.rebind_with("k", Some(1)).unwrap();
        assert_eq!(cell.get(), Some(&9));
    });
}

/// An empty key is rejected and the cell stays bound where it was
#[test]
fn test_rebind_empty_key_rejected() {
    test_across_backends(|store| {
        let mut cell = PersistentCell::bind("k", Some(1u8), store.backend()).unwrap();

        let err = cell.rebind("").unwrap_err();
        assert!(err.is_invalid_key());
        let err = cell.rebind_with("", Some(2)).unwrap_err();
        assert!(err.is_invalid_key());

        assert_eq!(cell.key().as_str(), "k");
        assert_eq!(cell.get(), Some(&1));
        assert_eq!(cell.initial(), Some(&1));
    });
}

/// Cells on the same key keep independent mirrors; the last writer wins
#[test]
fn test_shared_key_independent_mirrors() {
    test_across_backends(|store| {
        let mut first = PersistentCell::bind("shared", Some(0u32), store.backend()).unwrap();
        let mut second = PersistentCell::bind("shared", Some(100u32), store.backend()).unwrap();

        // The second cell found the first one's seed
        assert_eq!(second.get(), Some(&0));

        first.set(1);
        assert_eq!(first.get(), Some(&1));
        assert_eq!(second.get(), Some(&0));

        second.set(2);
        assert_eq!(store.raw("shared").as_deref(), Some("2"));
        assert_eq!(first.get(), Some(&1));

        // A fresh binding sees the last write
        let third = PersistentCell::<u32>::bind("shared", None, store.backend()).unwrap();
        assert_eq!(third.get(), Some(&2));
    });
}
