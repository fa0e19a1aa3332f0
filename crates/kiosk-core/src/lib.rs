//! # kiosk-core: Pure Business Logic for the Kiosk Cart Demo
//!
//! This crate is the **heart** of Kiosk: an observable, snapshot-able cart
//! state container with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kiosk Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/kiosk-cli (shell)                       │   │
//! │  │    seeds the catalog, wires listeners, renders the cart         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │  history  │  │  notify   │  │  payment  │  │   │
//! │  │   │ CartStore │  │ Snapshot  │  │    Hub    │  │  Gateway  │  │   │
//! │  │   │SharedCart │  │  History  │  │ Listener  │  │  Adapter  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • SYNCHRONOUS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartEntry, Product, Catalog)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`store`] - The cart itself: single source of truth, notifies on add
//! - [`history`] - Append-only snapshot log for undo/restore
//! - [`notify`] - Listener registry with synchronous ordered fan-out
//! - [`payment`] - Gateway trait plus the card-terminal adapter
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Single-threaded, synchronous**: every operation runs to completion
//!    before the next begins; there is no suspension point anywhere
//! 2. **No I/O**: all state is process memory and dies with the process
//! 3. **Integer Money**: monetary values are cents (i64), never floats
//! 4. **One logical cart by construction**: build a [`CartStore`], pass it
//!    down (or share it via [`SharedCart`]) — no hidden global instance
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::{CartEntry, CartStore, History, Money};
//!
//! let mut cart = CartStore::new();
//! let mut history = History::new();
//!
//! cart.add_entry(CartEntry::new("Computer 1", Money::from_cents(100_000)));
//! history.save_state(cart.entries());
//!
//! cart.add_entry(CartEntry::new("Computer 2", Money::from_cents(150_000)));
//! assert_eq!(cart.len(), 2);
//!
//! // Undo: rewind to the saved snapshot.
//! cart.replace_entries(history.restore_state(0));
//! assert_eq!(cart.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod history;
pub mod money;
pub mod notify;
pub mod payment;
pub mod store;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiosk_core::CartStore` instead of
// `use kiosk_core::store::CartStore`

pub use error::{CoreError, CoreResult, ListenerError};
pub use history::{History, Snapshot};
pub use money::Money;
pub use notify::{CartListener, NotificationHub, SubscriptionId};
pub use payment::{CardTerminal, LegacyRegister, PaymentGateway, PaymentReceipt, TerminalAdapter};
pub use store::{CartStore, SharedCart};
pub use types::{CartEntry, Catalog, Product};
