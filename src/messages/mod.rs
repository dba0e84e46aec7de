//! The activity log shown to users of the application.
//!
//! This module provides [`MessageLog`], an append-only, order-preserving
//! sink of short text messages. The hero facade writes one entry per
//! completed operation; a display surface (outside this crate) reads and
//! eventually clears them.
//!
//! The log is a cheaply cloneable handle to shared state: clone it once
//! for the facade and keep a clone for the display side. It is deliberately
//! an injected collaborator rather than a process-wide global, so the
//! facade stays testable in isolation.

use std::sync::{Arc, Mutex, PoisonError};

/// An append-only, order-preserving log of activity messages.
///
/// Cloning a `MessageLog` produces another handle to the same underlying
/// log. Appending never fails and never panics; a poisoned lock is absorbed
/// and the log keeps accepting entries.
///
/// # Example
///
/// ```rust
/// use heroes_api::MessageLog;
///
/// let log = MessageLog::new();
/// let handle = log.clone();
///
/// handle.add("HeroService: fetched heroes");
/// assert_eq!(log.entries(), vec!["HeroService: fetched heroes".to_string()]);
///
/// log.clear();
/// assert!(log.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    /// Creates a new, empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the log.
    ///
    /// Fire-and-forget: the entry is immutable once appended and ordering
    /// follows append order.
    pub fn add(&self, message: impl Into<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.into());
    }

    /// Returns a snapshot of all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes all entries from the log.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the number of entries in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Verify MessageLog is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MessageLog>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let log = MessageLog::new();
        log.add("first");
        log.add("second");
        log.add("third");

        assert_eq!(
            log.entries(),
            vec!["first".to_string(), "second".to_string(), "third".to_string()]
        );
    }

    #[test]
    fn test_clones_share_the_same_log() {
        let log = MessageLog::new();
        let handle = log.clone();

        handle.add("from the clone");

        assert_eq!(log.len(), 1);
        assert_eq!(log.entries(), vec!["from the clone".to_string()]);
    }

    #[test]
    fn test_clear_empties_the_log() {
        let log = MessageLog::new();
        log.add("entry");
        assert!(!log.is_empty());

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_entries_returns_a_snapshot() {
        let log = MessageLog::new();
        log.add("one");

        let snapshot = log.entries();
        log.add("two");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_concurrent_adds_keep_every_message_intact() {
        let log = MessageLog::new();
        let mut handles = Vec::new();

        for worker in 0..4 {
            let log = log.clone();
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    log.add(format!("worker {worker} message {i}"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let entries = log.entries();
        assert_eq!(entries.len(), 100);
        for entry in entries {
            assert!(entry.starts_with("worker "));
            assert!(entry.contains(" message "));
        }
    }
}
