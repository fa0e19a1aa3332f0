//! # Notification Hub
//!
//! One-to-many fan-out of cart change events, decoupling cart mutation from
//! whatever reacts to it (log output, a display, a future UI).
//!
//! ## Delivery Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Notification Fan-Out                                 │
//! │                                                                         │
//! │  CartStore::add_entry("Computer 1")                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  hub.notify_all("Item added to cart: Computer 1")                      │
//! │           │                                                             │
//! │           ├──► listener #1  (registration order,                       │
//! │           ├──► listener #2   synchronous, exactly once                 │
//! │           └──► listener #3   per registration)                         │
//! │                                                                         │
//! │  A listener returning Err is logged and SKIPPED — the loop continues   │
//! │  to the remaining listeners. Nothing propagates back to the caller.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Subscription Tokens
//! `subscribe` hands back an opaque [`SubscriptionId`] instead of relying on
//! listener identity comparison. Unsubscribing an unknown token is a no-op.
//! Subscribing the same logical listener twice is allowed and yields two
//! tokens — and two deliveries per message.

use std::fmt;

use tracing::{debug, warn};

use crate::error::ListenerError;

// =============================================================================
// Listener Trait
// =============================================================================

/// Anything that reacts to cart-change notifications.
///
/// `notify` is fallible so that a misbehaving listener can be contained by
/// the hub instead of poisoning the delivery loop. Returning `Err` skips
/// only that listener for that message.
pub trait CartListener {
    /// Handles one notification message.
    fn notify(&mut self, message: &str) -> Result<(), ListenerError>;
}

/// Closures can be used as listeners directly.
impl<F> CartListener for F
where
    F: FnMut(&str) -> Result<(), ListenerError>,
{
    fn notify(&mut self, message: &str) -> Result<(), ListenerError> {
        self(message)
    }
}

// =============================================================================
// Subscription Id
// =============================================================================

/// Opaque token returned by [`NotificationHub::subscribe`].
///
/// Tokens are unique for the lifetime of the hub and never reused, so a
/// stale token held after unsubscribing can never remove someone else's
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// =============================================================================
// Notification Hub
// =============================================================================

/// Registry of listeners with synchronous, ordered broadcast.
pub struct NotificationHub {
    /// Registration order is delivery order.
    listeners: Vec<(SubscriptionId, Box<dyn CartListener>)>,
    /// Next token value. Monotonic; never reused.
    next_id: u64,
}

impl NotificationHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        NotificationHub {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a listener and returns its subscription token.
    ///
    /// Duplicates are permitted: registering twice means receiving each
    /// message twice, once per registration.
    pub fn subscribe(&mut self, listener: Box<dyn CartListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        debug!(subscription = id.0, "listener subscribed");
        id
    }

    /// Removes the registration behind `id`.
    ///
    /// Returns `true` if a registration was removed. An unknown or
    /// already-removed token is a no-op (`false`), not an error.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(subscription = id.0, "listener unsubscribed");
        }
        removed
    }

    /// Delivers `message` to every registered listener, in registration
    /// order, exactly once per registration.
    ///
    /// Delivery is fire-and-forget: a listener that returns `Err` is logged
    /// with `warn!` and delivery continues to the remaining listeners.
    pub fn notify_all(&mut self, message: &str) {
        for (id, listener) in &mut self.listeners {
            if let Err(err) = listener.notify(message) {
                warn!(subscription = id.0, %err, "listener rejected notification");
            }
        }
    }

    /// Returns the number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Boxed listeners are not `Debug`; show the registry size instead.
impl fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHub")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test listener that records every message it receives, tagged so that
    /// delivery order across listeners is observable.
    struct Recording {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl CartListener for Recording {
        fn notify(&mut self, message: &str) -> Result<(), ListenerError> {
            self.log.borrow_mut().push(format!("{}:{}", self.tag, message));
            Ok(())
        }
    }

    fn recording(tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Box<dyn CartListener> {
        Box::new(Recording {
            tag,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_fanout_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hub = NotificationHub::new();
        hub.subscribe(recording("L1", &log));
        hub.subscribe(recording("L2", &log));

        hub.notify_all("X");

        assert_eq!(*log.borrow(), vec!["L1:X", "L2:X"]);
    }

    #[test]
    fn test_duplicate_registration_delivers_twice() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hub = NotificationHub::new();
        let first = hub.subscribe(recording("L1", &log));
        let second = hub.subscribe(recording("L1", &log));

        assert_ne!(first, second);
        hub.notify_all("X");

        assert_eq!(*log.borrow(), vec!["L1:X", "L1:X"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hub = NotificationHub::new();
        let l1 = hub.subscribe(recording("L1", &log));
        hub.subscribe(recording("L2", &log));

        assert!(hub.unsubscribe(l1));
        hub.notify_all("X");

        assert_eq!(*log.borrow(), vec!["L2:X"]);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_token_is_noop() {
        let mut hub = NotificationHub::new();
        let id = hub.subscribe(Box::new(|_: &str| -> Result<(), ListenerError> { Ok(()) }));

        assert!(hub.unsubscribe(id));
        // Second removal of the same token: no-op, not an error.
        assert!(!hub.unsubscribe(id));
    }

    #[test]
    fn test_faulty_listener_does_not_stop_delivery() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hub = NotificationHub::new();
        hub.subscribe(Box::new(|_: &str| -> Result<(), ListenerError> {
            Err(ListenerError::new("display offline"))
        }));
        hub.subscribe(recording("L2", &log));

        hub.notify_all("X");

        assert_eq!(*log.borrow(), vec!["L2:X"]);
    }

    #[test]
    fn test_closure_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut hub = NotificationHub::new();
        hub.subscribe(Box::new(move |message: &str| -> Result<(), ListenerError> {
            sink.borrow_mut().push(message.to_string());
            Ok(())
        }));

        hub.notify_all("hello");
        assert_eq!(*log.borrow(), vec!["hello"]);
    }
}
