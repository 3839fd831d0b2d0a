//! Integration tests for the handle-keyed mutex registry.

use std::sync::Arc;

use keyed_mutex::MutexRegistry;

#[test]
fn equal_handles_observe_the_same_mutex() {
    let registry = MutexRegistry::new();
    let first = registry.mutex_for("db-row-5");
    let second = registry.mutex_for("db-row-5");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn distinct_handles_observe_distinct_mutexes() {
    let registry = MutexRegistry::new();
    let a = registry.mutex_for("db-row-5");
    let b = registry.mutex_for("db-row-6");
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(registry.len(), 2);
}

#[test]
fn entries_survive_lock_cycles() {
    let registry = MutexRegistry::new();
    let mutex = registry.mutex_for(7u32);

    let releaser = mutex.clone().try_acquire().expect("uncontended");
    releaser.release();

    // No eviction: the handle still maps to the very same instance.
    assert!(Arc::ptr_eq(&mutex, &registry.mutex_for(7u32)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registries_are_independent() {
    let left = MutexRegistry::new();
    let right = MutexRegistry::new();
    let a = left.mutex_for("shared-name");
    let b = right.mutex_for("shared-name");
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn any_hashable_handle_type_works() {
    let by_pair = MutexRegistry::new();
    let a = by_pair.mutex_for(("orders", 42u64));
    let b = by_pair.mutex_for(("orders", 42u64));
    let c = by_pair.mutex_for(("orders", 43u64));
    assert!(Arc::ptr_eq(&a, &b));
    assert!(!Arc::ptr_eq(&a, &c));

    let by_string = MutexRegistry::new();
    let owned = by_string.mutex_for(String::from("db-row-5"));
    assert!(by_string.contains("db-row-5"));
    assert!(Arc::ptr_eq(&owned, &by_string.mutex_for(String::from("db-row-5"))));
}
