//! # Cart History
//!
//! Undo substrate: captures deep-copied snapshots of the cart on demand and
//! hands back any prior snapshot by index.
//!
//! ## Save / Restore Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    History Operations                                   │
//! │                                                                         │
//! │  save_state(entries) ──► clone every entry ──► append Snapshot #n      │
//! │                                                                         │
//! │  restore_state(i)                                                       │
//! │       │                                                                 │
//! │       ├── 0 <= i < len ──► deep copy of snapshot #i's entries          │
//! │       └── otherwise    ──► empty Vec  (silent miss, NOT an error)      │
//! │                                                                         │
//! │  History is append-only: restoring never truncates or reorders it.     │
//! │  There is no eviction — long-running callers own their growth.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Explicit Cloning?
//! Snapshots are plain value copies of [`CartEntry`], not a serialization
//! round trip. A `Vec::clone` cannot silently drop fields the way
//! stringify/parse copying can, and it shares nothing with the live cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::CartEntry;

// =============================================================================
// Snapshot
// =============================================================================

/// An immutable, indexed copy of the cart contents at a point in time.
///
/// Once captured, a snapshot is independent of the live cart: mutating the
/// cart afterwards cannot change what was saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Position in history (0-based, assigned at capture, never changes).
    index: usize,

    /// When the snapshot was captured.
    taken_at: DateTime<Utc>,

    /// Deep copy of the cart entries at capture time.
    entries: Vec<CartEntry>,
}

impl Snapshot {
    /// Returns this snapshot's position in history.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the capture timestamp.
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// Returns a read view of the captured entries.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }
}

// =============================================================================
// History
// =============================================================================

/// Append-only log of cart snapshots.
///
/// ## Invariants
/// - Saving `n` times yields exactly the retrievable indices `0..n`
/// - Restoring any index leaves the log untouched (no truncation, no
///   reordering) — "redo" is just re-reading a later index
/// - Growth is unbounded by design; a capacity cap would change behavior
///   and has deliberately not been added
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        History {
            snapshots: Vec::new(),
        }
    }

    /// Deep-copies `entries` into a new snapshot at the next index.
    ///
    /// Always succeeds; returns the index the snapshot was stored at.
    pub fn save_state(&mut self, entries: &[CartEntry]) -> usize {
        let index = self.snapshots.len();
        self.snapshots.push(Snapshot {
            index,
            taken_at: Utc::now(),
            entries: entries.to_vec(),
        });
        debug!(index, entries = entries.len(), "cart snapshot saved");
        index
    }

    /// Returns a deep copy of snapshot `index`'s entries.
    ///
    /// ## Silent Miss
    /// Any out-of-range index — negative, past the end, or any index while
    /// the history is empty — returns an empty `Vec` instead of failing.
    /// This mirrors the reference behavior exactly; whether callers would
    /// prefer an explicit not-found signal is an open product question, so
    /// the contract is preserved rather than guessed at. Use
    /// [`History::get`] when `Option` semantics are wanted.
    pub fn restore_state(&self, index: i64) -> Vec<CartEntry> {
        let Ok(index) = usize::try_from(index) else {
            debug!(index, "restore of negative index, returning empty cart");
            return Vec::new();
        };
        match self.snapshots.get(index) {
            Some(snapshot) => snapshot.entries.clone(),
            None => {
                debug!(index, len = self.snapshots.len(), "restore miss, returning empty cart");
                Vec::new()
            }
        }
    }

    /// Restores the most recently saved snapshot (the reference usage's
    /// default). Empty history yields an empty cart, per the silent-miss
    /// contract.
    pub fn restore_last(&self) -> Vec<CartEntry> {
        match self.last_index() {
            Some(index) => self.restore_state(index as i64),
            None => Vec::new(),
        }
    }

    /// Returns the snapshot at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Returns the index of the most recent snapshot.
    pub fn last_index(&self) -> Option<usize> {
        self.snapshots.len().checked_sub(1)
    }

    /// Returns the number of snapshots taken so far.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Checks if any snapshot has been taken.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn entry(name: &str, cents: i64) -> CartEntry {
        CartEntry::new(name, Money::from_cents(cents))
    }

    #[test]
    fn test_save_assigns_sequential_indices() {
        let mut history = History::new();
        assert_eq!(history.save_state(&[entry("A", 10)]), 0);
        assert_eq!(history.save_state(&[entry("B", 20)]), 1);
        assert_eq!(history.save_state(&[]), 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last_index(), Some(2));
    }

    #[test]
    fn test_snapshot_isolation_from_live_mutation() {
        let mut live = vec![entry("A", 10), entry("B", 20)];
        let mut history = History::new();
        history.save_state(&live);

        // Mutate the "live" cart after saving.
        live.push(entry("C", 30));
        live[0] = entry("A2", 11);

        assert_eq!(
            history.restore_state(0),
            vec![entry("A", 10), entry("B", 20)]
        );
    }

    #[test]
    fn test_restore_returns_independent_copy() {
        let mut history = History::new();
        history.save_state(&[entry("A", 10)]);

        let mut restored = history.restore_state(0);
        restored.push(entry("B", 20));

        // Mutating the restored copy does not touch the stored snapshot.
        assert_eq!(history.restore_state(0), vec![entry("A", 10)]);
    }

    #[test]
    fn test_out_of_range_restore_is_silent_miss() {
        let mut history = History::new();

        // Empty history: every index misses.
        assert!(history.restore_state(0).is_empty());
        assert!(history.restore_state(-1).is_empty());

        history.save_state(&[entry("A", 10)]);

        assert!(history.restore_state(-1).is_empty());
        assert!(history.restore_state(1).is_empty()); // == len
        assert!(history.restore_state(i64::MAX).is_empty());
        assert!(history.restore_state(i64::MIN).is_empty());
    }

    #[test]
    fn test_history_append_only_across_restores() {
        let mut history = History::new();
        history.save_state(&[entry("A", 10)]);
        history.save_state(&[entry("A", 10), entry("B", 20)]);

        // Restoring an old index must not truncate later snapshots.
        let _ = history.restore_state(0);
        history.save_state(&[entry("C", 30)]);

        assert_eq!(history.len(), 3);
        assert_eq!(history.restore_state(0), vec![entry("A", 10)]);
        assert_eq!(
            history.restore_state(1),
            vec![entry("A", 10), entry("B", 20)]
        );
        assert_eq!(history.restore_state(2), vec![entry("C", 30)]);
    }

    #[test]
    fn test_restore_last() {
        let mut history = History::new();
        assert!(history.restore_last().is_empty());

        history.save_state(&[entry("A", 10)]);
        history.save_state(&[entry("B", 20)]);

        assert_eq!(history.restore_last(), vec![entry("B", 20)]);
    }

    #[test]
    fn test_get_exposes_snapshot_metadata() {
        let mut history = History::new();
        let index = history.save_state(&[entry("A", 10)]);

        let snapshot = history.get(index).unwrap();
        assert_eq!(snapshot.index(), 0);
        assert_eq!(snapshot.entries(), &[entry("A", 10)]);
        assert!(history.get(1).is_none());
    }
}
