//! Type aliases for shared mutable state.
//!
//! The layout document and its surrounding application state live behind a
//! single lock that every event handler replaces wholesale. Naming that lock
//! keeps signatures readable across crates.
//!
//! ```rust,ignore
//! use gridkit_core::types::*;
//!
//! let state: ThreadSafe<AppState> = thread_safe(AppState::default());
//! state.lock().layout_locked = true;
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for state shared with async tasks.
///
/// Uses `parking_lot::Mutex`; guards must never be held across an `.await`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Wrap a value in a [`ThreadSafe`] container.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_safe_shares_state() {
        let a = thread_safe(vec![1, 2]);
        let b = a.clone();
        b.lock().push(3);
        assert_eq!(*a.lock(), vec![1, 2, 3]);
    }
}
