//! Type aliases for shared mutable state.
//!
//! The filter's job state is mutated both by command handlers and by the
//! move transform adapter, so it lives behind a single mutual-exclusion
//! domain. These aliases name that pattern once instead of repeating the
//! nested smart-pointer types at every use site.

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex`. The motion pipeline itself is synchronous and
/// single-threaded; the lock exists so a host that drives command handling
/// and motion from different contexts still sees one consistent state.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Wrap a value in a [`ThreadSafe`] container
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
