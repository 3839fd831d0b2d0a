//! Handle-keyed registry of mutexes.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;

use crate::mutex::Mutex;

/// Registry mapping caller-supplied handles to mutex instances.
///
/// A handle identifies *which* logical resource a mutex protects; any
/// equality-comparable, hashable type works. The registry guarantees that
/// equal handles observe the same [`Mutex`] instance for the registry's
/// whole lifetime.
///
/// The registry is an explicitly constructed and explicitly passed object
/// with no process-wide singleton behind it; tests should build a fresh
/// registry per case instead of sharing one. Entries are append-only and
/// never evicted, even for mutexes that are never locked again — an
/// accepted unbounded-growth trade-off, not a leak to fix.
pub struct MutexRegistry<H> {
    mutexes: DashMap<H, Arc<Mutex>>,
}

impl<H: Eq + Hash> MutexRegistry<H> {
    /// Creates an empty registry.
    pub fn new() -> MutexRegistry<H> {
        MutexRegistry {
            mutexes: DashMap::new(),
        }
    }

    /// Returns the mutex for `handle`, creating it on first use.
    ///
    /// Idempotent: repeated calls with equal handles return the same
    /// `Arc<Mutex>`. The create-or-get step happens under the map entry
    /// lock, so no two callers can race a duplicate mutex into existence.
    pub fn mutex_for(&self, handle: H) -> Arc<Mutex> {
        Arc::clone(
            &self
                .mutexes
                .entry(handle)
                .or_insert_with(|| Arc::new(Mutex::new())),
        )
    }

    /// Whether a mutex has been created for `handle`.
    pub fn contains<Q>(&self, handle: &Q) -> bool
    where
        H: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.mutexes.contains_key(handle)
    }

    /// Number of handles seen so far.
    pub fn len(&self) -> usize {
        self.mutexes.len()
    }

    /// Whether any handle has been seen.
    pub fn is_empty(&self) -> bool {
        self.mutexes.is_empty()
    }
}

impl<H: Eq + Hash> Default for MutexRegistry<H> {
    fn default() -> MutexRegistry<H> {
        MutexRegistry::new()
    }
}

impl<H: Eq + Hash> fmt::Debug for MutexRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutexRegistry")
            .field("handles", &self.mutexes.len())
            .finish()
    }
}
