//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                         │
//! │  ├── CoreError       - Domain failures (catalog miss, declined charge) │
//! │  └── ListenerError   - A listener rejected a notification              │
//! │                                                                         │
//! │  Deliberately NOT errors (see store/history/notify docs):              │
//! │  ├── Out-of-range snapshot restore  → empty sequence (silent miss)     │
//! │  └── Unsubscribing an unknown token → no-op                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, gateway name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain failures. They should be caught and
/// translated to user-facing messages at the shell layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A payment gateway refused the charge.
    ///
    /// ## When This Occurs
    /// - The amount is non-positive (nothing to charge)
    /// - The underlying terminal rejects the authorization
    #[error("Payment declined by {gateway}: {reason}")]
    PaymentDeclined { gateway: String, reason: String },
}

// =============================================================================
// Listener Error
// =============================================================================

/// A notification listener failed to handle a message.
///
/// The hub contains this error: it is logged and delivery continues to the
/// remaining listeners. It never propagates back to the mutation that
/// triggered the broadcast.
#[derive(Debug, Error)]
#[error("listener failed: {reason}")]
pub struct ListenerError {
    reason: String,
}

impl ListenerError {
    /// Creates a listener error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        ListenerError {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PaymentDeclined {
            gateway: "card-terminal".to_string(),
            reason: "amount must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Payment declined by card-terminal: amount must be positive"
        );

        let err = CoreError::ProductNotFound("PC-1000".to_string());
        assert_eq!(err.to_string(), "Product not found: PC-1000");
    }

    #[test]
    fn test_listener_error_message() {
        let err = ListenerError::new("display offline");
        assert_eq!(err.to_string(), "listener failed: display offline");
    }
}
