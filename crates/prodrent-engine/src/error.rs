//! # Engine Error Types
//!
//! The refusal taxonomy and the run-fatal error type.
//!
//! ## Two Very Different Kinds of Failure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Refusal (expected, per movement)      EngineError (run-fatal)          │
//! │  ────────────────────────────────      ───────────────────────          │
//! │  • invalid client / product id         • audit-log write failure        │
//! │  • no stock / not enough funds         • store open/close failure       │
//! │  • roster full / product not held      • movements-file read failure    │
//! │  • non-positive price/stock/balance                                     │
//! │                                                                         │
//! │  → one "ERROR: ..." audit line,        → the run stops with a           │
//! │    processing continues                   non-zero exit                 │
//! │                                                                         │
//! │  Refusals are VALUES routed to the log by the processor - never         │
//! │  stack unwinding, never process state.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use prodrent_core::ValidationError;
use prodrent_store::StoreError;

// =============================================================================
// Refusals
// =============================================================================

/// Every named business refusal the processor can report.
///
/// The Display string of each variant is the exact text of its audit-log
/// event (after the `ERROR: ` prefix).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Refusal {
    /// The client identifier addresses no record.
    #[error("invalid client id: {0}")]
    InvalidClientId(i64),

    /// The product identifier addresses no record.
    #[error("invalid product id: {0}")]
    InvalidProductId(i64),

    /// Rent refused: the product's stock is exhausted.
    ///
    /// Reachable only for records seeded with stock <= 0, since
    /// `decrement_stock` floors at 1.
    #[error("cannot rent product with no stock: \"{description}\" (product {product_id})")]
    NoStock {
        product_id: i64,
        description: String,
    },

    /// Rent refused: the client's balance does not cover the price.
    #[error(
        "client \"{name}\" (client {client_id}) has not enough funds: balance {balance}, price {price}"
    )]
    NotEnoughFunds {
        client_id: i64,
        name: String,
        balance: i32,
        price: i32,
    },

    /// Rent refused: all roster slots are occupied by other products.
    #[error("client \"{name}\" (client {client_id}) cannot add product {product_id}")]
    CannotAddProduct {
        client_id: i64,
        name: String,
        product_id: i64,
    },

    /// Return refused: no roster slot holds the product.
    #[error("client \"{name}\" (client {client_id}) has not product {product_id}")]
    HasNotProduct {
        client_id: i64,
        name: String,
        product_id: i64,
    },

    /// Creation refused by a business rule (non-positive price, stock or
    /// balance).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Run-Fatal Errors
// =============================================================================

/// Failures that abort the run.
///
/// Per-movement store I/O failures never reach this type: the processor
/// downgrades them to the unknown-operation audit event at the line
/// boundary. What remains fatal is resource setup/teardown and the audit
/// log itself becoming unwritable.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A record store failed outside the per-line downgrade boundary
    /// (open, reset, close).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reading the movements file or writing the audit log failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_messages_are_audit_event_texts() {
        assert_eq!(
            Refusal::InvalidClientId(9).to_string(),
            "invalid client id: 9"
        );
        assert_eq!(
            Refusal::NoStock {
                product_id: 2,
                description: "Drill".to_string(),
            }
            .to_string(),
            "cannot rent product with no stock: \"Drill\" (product 2)"
        );
        assert_eq!(
            Refusal::NotEnoughFunds {
                client_id: 1,
                name: "Alice".to_string(),
                balance: 5,
                price: 10,
            }
            .to_string(),
            "client \"Alice\" (client 1) has not enough funds: balance 5, price 10"
        );
    }

    #[test]
    fn validation_errors_pass_through_transparently() {
        let refusal: Refusal = ValidationError::NonPositivePrice {
            description: "Drill".to_string(),
            price: 0,
        }
        .into();
        assert_eq!(
            refusal.to_string(),
            "price cannot be negative or zero: \"Drill\" with price 0"
        );
    }
}
