//! # Error Types
//!
//! Domain-specific error types for prodrent-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  prodrent-core errors (this file)                                      │
//! │  └── ValidationError  - creation-time business rule failures           │
//! │                                                                         │
//! │  prodrent-store errors (separate crate)                                │
//! │  └── StoreError       - invalid identifiers, file I/O                  │
//! │                                                                         │
//! │  prodrent-engine errors (separate crate)                               │
//! │  ├── Refusal          - every named business refusal (wraps            │
//! │  │                      ValidationError)                               │
//! │  └── EngineError      - run-fatal failures (wraps StoreError)          │
//! │                                                                         │
//! │  Flow: ValidationError → Refusal → audit log line, never a panic       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, description, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each variant's Display string IS the audit-log event text

use thiserror::Error;

/// Creation-time business rule failures.
///
/// These never escalate: the movement processor turns them into named
/// audit-log refusal events and carries on with the next movement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A product was submitted with a non-positive price.
    #[error("price cannot be negative or zero: \"{description}\" with price {price}")]
    NonPositivePrice { description: String, price: i32 },

    /// A product was submitted with a non-positive stock count.
    #[error("stock cannot be negative or zero: \"{description}\" with stock {stock}")]
    NonPositiveStock { description: String, stock: i32 },

    /// A client was submitted with a non-positive opening balance.
    #[error("balance cannot be negative or zero: \"{name}\" with balance {balance}")]
    NonPositiveBalance { name: String, balance: i32 },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_values() {
        let err = ValidationError::NonPositivePrice {
            description: "Drill".to_string(),
            price: -3,
        };
        assert_eq!(
            err.to_string(),
            "price cannot be negative or zero: \"Drill\" with price -3"
        );

        let err = ValidationError::NonPositiveBalance {
            name: "Alice".to_string(),
            balance: 0,
        };
        assert_eq!(
            err.to_string(),
            "balance cannot be negative or zero: \"Alice\" with balance 0"
        );
    }
}
