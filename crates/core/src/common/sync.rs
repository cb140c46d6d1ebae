//! Synchronization helpers.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Acquires a mutex, recovering the guard if the lock is poisoned.
///
/// Every critical section in this crate is a handful of field reads and
/// writes, so the protected data is consistent even when a collaborator
/// panicked while holding the lock; the panic itself still propagates to
/// whoever joins the worker.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
