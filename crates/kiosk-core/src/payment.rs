//! # Payment Gateways
//!
//! The checkout seam. Callers charge through the [`PaymentGateway`] trait
//! and never care which device sits behind it.
//!
//! ## Gateway Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payment Gateway Seam                                 │
//! │                                                                         │
//! │  checkout(total) ──► dyn PaymentGateway::charge(total)                 │
//! │                            │                                            │
//! │             ┌──────────────┴──────────────┐                            │
//! │             ▼                             ▼                            │
//! │   ┌──────────────────┐        ┌─────────────────────┐                  │
//! │   │  LegacyRegister  │        │   TerminalAdapter   │                  │
//! │   │  (native trait   │        │   wraps             │                  │
//! │   │   implementation)│        │   CardTerminal's    │                  │
//! │   └──────────────────┘        │   authorize() API   │                  │
//! │                               └─────────────────────┘                  │
//! │                                                                         │
//! │  CardTerminal ships its own vocabulary (authorize → auth code);        │
//! │  the adapter translates it to the charge/receipt contract.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Payment Receipt
// =============================================================================

/// Proof of a successful charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Which gateway took the charge.
    pub gateway: String,

    /// Amount charged.
    pub amount: Money,

    /// External reference (auth code, register tape number).
    pub reference: String,

    /// When the charge completed.
    pub paid_at: DateTime<Utc>,
}

// =============================================================================
// Payment Gateway Trait
// =============================================================================

/// Anything that can take money for a cart total.
pub trait PaymentGateway {
    /// Human-readable gateway name (used on receipts and in errors).
    fn name(&self) -> &str;

    /// Charges `amount`, returning a receipt on success.
    ///
    /// Non-positive amounts are declined: there is nothing to charge.
    fn charge(&self, amount: Money) -> CoreResult<PaymentReceipt>;
}

// =============================================================================
// Legacy Register
// =============================================================================

/// The old cash register. Its interface already matches the gateway
/// contract, so it implements the trait directly.
#[derive(Debug, Clone, Default)]
pub struct LegacyRegister;

impl LegacyRegister {
    pub fn new() -> Self {
        LegacyRegister
    }
}

impl PaymentGateway for LegacyRegister {
    fn name(&self) -> &str {
        "legacy-register"
    }

    fn charge(&self, amount: Money) -> CoreResult<PaymentReceipt> {
        if amount.is_zero() || amount.is_negative() {
            return Err(CoreError::PaymentDeclined {
                gateway: self.name().to_string(),
                reason: "amount must be positive".to_string(),
            });
        }
        debug!(%amount, "legacy register rang up sale");
        Ok(PaymentReceipt {
            gateway: self.name().to_string(),
            amount,
            reference: format!("tape-{}", Uuid::new_v4().simple()),
            paid_at: Utc::now(),
        })
    }
}

// =============================================================================
// Card Terminal + Adapter
// =============================================================================

/// The new card terminal. Ships a vendor API that speaks in authorizations
/// and auth codes, not in charges and receipts.
#[derive(Debug, Clone, Default)]
pub struct CardTerminal;

impl CardTerminal {
    pub fn new() -> Self {
        CardTerminal
    }

    /// Authorizes a card payment, returning the auth code.
    ///
    /// The terminal refuses non-positive amounts with a plain-text reason;
    /// translating that into a domain error is the adapter's job.
    pub fn authorize(&self, amount_cents: i64) -> Result<String, String> {
        if amount_cents <= 0 {
            return Err("amount must be positive".to_string());
        }
        Ok(format!("auth-{}", Uuid::new_v4().simple()))
    }
}

/// Adapts [`CardTerminal`]'s authorize API to the [`PaymentGateway`]
/// contract.
#[derive(Debug, Clone, Default)]
pub struct TerminalAdapter {
    terminal: CardTerminal,
}

impl TerminalAdapter {
    pub fn new(terminal: CardTerminal) -> Self {
        TerminalAdapter { terminal }
    }
}

impl PaymentGateway for TerminalAdapter {
    fn name(&self) -> &str {
        "card-terminal"
    }

    fn charge(&self, amount: Money) -> CoreResult<PaymentReceipt> {
        let auth_code =
            self.terminal
                .authorize(amount.cents())
                .map_err(|reason| CoreError::PaymentDeclined {
                    gateway: self.name().to_string(),
                    reason,
                })?;
        debug!(%amount, auth_code = %auth_code, "card terminal authorized charge");
        Ok(PaymentReceipt {
            gateway: self.name().to_string(),
            amount,
            reference: auth_code,
            paid_at: Utc::now(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_register_charges() {
        let register = LegacyRegister::new();
        let receipt = register.charge(Money::from_cents(1000)).unwrap();

        assert_eq!(receipt.gateway, "legacy-register");
        assert_eq!(receipt.amount, Money::from_cents(1000));
        assert!(receipt.reference.starts_with("tape-"));
    }

    #[test]
    fn test_adapter_translates_terminal_api() {
        let gateway = TerminalAdapter::new(CardTerminal::new());
        let receipt = gateway.charge(Money::from_cents(250_000)).unwrap();

        assert_eq!(receipt.gateway, "card-terminal");
        assert_eq!(receipt.amount, Money::from_cents(250_000));
        assert!(receipt.reference.starts_with("auth-"));
    }

    #[test]
    fn test_non_positive_amounts_declined() {
        let gateways: Vec<Box<dyn PaymentGateway>> = vec![
            Box::new(LegacyRegister::new()),
            Box::new(TerminalAdapter::new(CardTerminal::new())),
        ];

        for gateway in &gateways {
            let err = gateway.charge(Money::zero()).unwrap_err();
            assert!(matches!(err, CoreError::PaymentDeclined { .. }));

            let err = gateway.charge(Money::from_cents(-100)).unwrap_err();
            assert!(matches!(err, CoreError::PaymentDeclined { .. }));
        }
    }

    #[test]
    fn test_gateways_are_interchangeable_behind_the_trait() {
        fn checkout(gateway: &dyn PaymentGateway, total: Money) -> CoreResult<PaymentReceipt> {
            gateway.charge(total)
        }

        let total = Money::from_cents(4999);
        let a = checkout(&LegacyRegister::new(), total).unwrap();
        let b = checkout(&TerminalAdapter::new(CardTerminal::new()), total).unwrap();

        assert_eq!(a.amount, b.amount);
        assert_ne!(a.gateway, b.gateway);
    }
}
