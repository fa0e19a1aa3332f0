//! # Cart Store
//!
//! The single source of truth for current cart contents.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operations                                 │
//! │                                                                         │
//! │  Caller Action             Store Change            Notification         │
//! │  ─────────────             ────────────            ────────────         │
//! │                                                                         │
//! │  add_entry(e) ───────────► entries.push(e) ──────► "Item added to      │
//! │                                                     cart: {e.name}"    │
//! │                                                                         │
//! │  entries() ──────────────► (read-only view)        none                │
//! │                                                                         │
//! │  replace_entries(es) ────► entries = es            NONE — restore      │
//! │                                                     is silent           │
//! │                                                                         │
//! │  The add/replace asymmetry is deliberate: listeners hear about items   │
//! │  arriving, not about the cart being rewound to an earlier state.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Logical Cart
//! There is no hidden global instance. Whoever composes the system builds
//! one [`CartStore`] and passes it down; [`SharedCart`] wraps it in
//! `Arc<Mutex<_>>` when several call sites need the same cart, so "exactly
//! one cart" is a construction discipline rather than enforced uniqueness.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::money::Money;
use crate::notify::{CartListener, NotificationHub, SubscriptionId};
use crate::types::CartEntry;

// =============================================================================
// Cart Store
// =============================================================================

/// Ordered cart contents plus the hub that announces changes to them.
///
/// ## Invariants
/// - Insertion order is significant and preserved
/// - Duplicates are allowed; there is no uniqueness constraint
/// - All mutation goes through this type: `entries()` hands out an
///   immutable view, never the backing storage
#[derive(Debug, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
    hub: NotificationHub,
}

impl CartStore {
    /// Creates an empty cart with no listeners.
    pub fn new() -> Self {
        CartStore {
            entries: Vec::new(),
            hub: NotificationHub::new(),
        }
    }

    /// Creates an empty cart around an existing hub (listeners already
    /// registered elsewhere stay registered).
    pub fn with_hub(hub: NotificationHub) -> Self {
        CartStore {
            entries: Vec::new(),
            hub,
        }
    }

    /// Appends an entry to the end of the cart and announces it.
    ///
    /// Fires exactly one notification, `"Item added to cart: {name}"`,
    /// through the hub.
    pub fn add_entry(&mut self, entry: CartEntry) {
        debug!(name = %entry.name, price = %entry.price, "entry added to cart");
        let message = format!("Item added to cart: {}", entry.name);
        self.entries.push(entry);
        self.hub.notify_all(&message);
    }

    /// Returns a read view of the current contents, in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Wholesale-replaces the cart contents.
    ///
    /// Used by restore. Fires **no** notification: rewinding the cart is
    /// silent in the reference behavior and that asymmetry is kept.
    pub fn replace_entries(&mut self, entries: Vec<CartEntry>) {
        debug!(count = entries.len(), "cart contents replaced");
        self.entries = entries;
    }

    /// Returns the number of entries in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sums the entry prices.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.price).sum()
    }

    /// Registers a listener for cart-change notifications.
    pub fn subscribe(&mut self, listener: Box<dyn CartListener>) -> SubscriptionId {
        self.hub.subscribe(listener)
    }

    /// Removes a listener registration; no-op for unknown tokens.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }

    /// Read access to the hub.
    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    /// Mutable access to the hub (for broadcasting app-level messages
    /// through the same listeners).
    pub fn hub_mut(&mut self) -> &mut NotificationHub {
        &mut self.hub
    }
}

// =============================================================================
// Shared Cart Handle
// =============================================================================

/// Shared handle to the one logical cart.
///
/// ## Why Arc<Mutex>?
/// - `Arc`: several call sites hold the same cart without a global
/// - `Mutex`: mutation and its notification run as one uninterrupted unit,
///   which also keeps the ordered-delivery contract if callers ever move
///   off a single thread
///
/// Cloning the handle clones the *handle*, never the cart: every clone
/// observes every mutation made through any other clone.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    cart: Arc<Mutex<CartStore>>,
}

impl SharedCart {
    /// Wraps a freshly built cart in a shared handle.
    pub fn new(cart: CartStore) -> Self {
        SharedCart {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = shared.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// shared.with_cart_mut(|cart| cart.add_entry(entry));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListenerError;
    use crate::history::History;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn entry(name: &str, cents: i64) -> CartEntry {
        CartEntry::new(name, Money::from_cents(cents))
    }

    fn recording(log: &Rc<RefCell<Vec<String>>>) -> Box<dyn CartListener> {
        let sink = Rc::clone(log);
        Box::new(move |message: &str| -> Result<(), ListenerError> {
            sink.borrow_mut().push(message.to_string());
            Ok(())
        })
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let mut cart = CartStore::new();
        cart.add_entry(entry("A", 10));
        cart.add_entry(entry("B", 20));
        cart.add_entry(entry("A", 10)); // duplicate allowed

        assert_eq!(
            cart.entries(),
            &[entry("A", 10), entry("B", 20), entry("A", 10)]
        );
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.total(), Money::from_cents(40));
    }

    #[test]
    fn test_add_fires_notification_message() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cart = CartStore::new();
        cart.subscribe(recording(&log));

        cart.add_entry(entry("Computer 1", 100_000));

        assert_eq!(*log.borrow(), vec!["Item added to cart: Computer 1"]);
    }

    #[test]
    fn test_replace_is_silent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cart = CartStore::new();
        cart.subscribe(recording(&log));

        cart.add_entry(entry("A", 10));
        cart.replace_entries(vec![entry("B", 20)]);

        // Only the add spoke; the replace did not.
        assert_eq!(*log.borrow(), vec!["Item added to cart: A"]);
        assert_eq!(cart.entries(), &[entry("B", 20)]);
    }

    #[test]
    fn test_unsubscribed_listener_stops_receiving() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cart = CartStore::new();
        let token = cart.subscribe(recording(&log));

        cart.add_entry(entry("A", 10));
        assert!(cart.unsubscribe(token));
        cart.add_entry(entry("B", 20));

        assert_eq!(*log.borrow(), vec!["Item added to cart: A"]);
    }

    #[test]
    fn test_shared_handle_is_one_logical_cart() {
        let first = SharedCart::new(CartStore::new());
        let second = first.clone();

        first.with_cart_mut(|cart| cart.add_entry(entry("A", 10)));

        // The mutation through one handle is visible through the other.
        let seen = second.with_cart(|cart| cart.entries().to_vec());
        assert_eq!(seen, vec![entry("A", 10)]);
    }

    /// End-to-end: add {A,10},{B,20} → save → add {C,30} → restore(0).
    #[test]
    fn test_add_save_add_restore_round_trip() {
        let mut cart = CartStore::new();
        let mut history = History::new();

        cart.add_entry(entry("A", 10));
        cart.add_entry(entry("B", 20));
        assert_eq!(cart.entries(), &[entry("A", 10), entry("B", 20)]);

        history.save_state(cart.entries());

        cart.add_entry(entry("C", 30));
        assert_eq!(
            cart.entries(),
            &[entry("A", 10), entry("B", 20), entry("C", 30)]
        );

        cart.replace_entries(history.restore_state(0));
        assert_eq!(cart.entries(), &[entry("A", 10), entry("B", 20)]);

        // The undone add is still in no snapshot, and history kept its one
        // entry regardless of the restore.
        assert_eq!(history.len(), 1);
    }
}
