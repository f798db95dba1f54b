//! # Validation Module
//!
//! Creation-time business rule validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Movement parser                                              │
//! │  ├── Token counts and numeric syntax                                   │
//! │  └── Failures surface as the unknown-operation event                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── price > 0, stock > 0, balance > 0                                 │
//! │  └── Failures surface as named refusal events                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Entities self-protect                                        │
//! │  └── Roster capacity, balance floor, stock floor                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use prodrent_core::validation::{validate_new_client, validate_new_product};
//!
//! assert!(validate_new_product("Drill", 10, 5).is_ok());
//! assert!(validate_new_product("Drill", 0, 5).is_err());
//! assert!(validate_new_client("Alice", 25).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Validates a new product before it is allocated an identifier.
///
/// ## Rules (checked in order)
/// - price must be strictly positive
/// - stock must be strictly positive
pub fn validate_new_product(description: &str, price: i32, stock: i32) -> ValidationResult<()> {
    if price <= 0 {
        return Err(ValidationError::NonPositivePrice {
            description: description.to_string(),
            price,
        });
    }

    if stock <= 0 {
        return Err(ValidationError::NonPositiveStock {
            description: description.to_string(),
            stock,
        });
    }

    Ok(())
}

/// Validates a new client before it is allocated an identifier.
///
/// ## Rules
/// - opening balance must be strictly positive
pub fn validate_new_client(name: &str, balance: i32) -> ValidationResult<()> {
    if balance <= 0 {
        return Err(ValidationError::NonPositiveBalance {
            name: name.to_string(),
            balance,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_price_and_stock() {
        assert!(validate_new_product("Drill", 1, 1).is_ok());
    }

    #[test]
    fn rejects_non_positive_price() {
        assert_eq!(
            validate_new_product("Drill", 0, 5),
            Err(ValidationError::NonPositivePrice {
                description: "Drill".to_string(),
                price: 0,
            })
        );
        assert!(validate_new_product("Drill", -10, 5).is_err());
    }

    #[test]
    fn rejects_non_positive_stock() {
        assert_eq!(
            validate_new_product("Drill", 10, 0),
            Err(ValidationError::NonPositiveStock {
                description: "Drill".to_string(),
                stock: 0,
            })
        );
    }

    #[test]
    fn price_is_checked_before_stock() {
        // Both invalid: the price refusal wins
        assert!(matches!(
            validate_new_product("Drill", 0, 0),
            Err(ValidationError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_balance() {
        assert!(validate_new_client("Alice", 25).is_ok());
        assert_eq!(
            validate_new_client("Alice", 0),
            Err(ValidationError::NonPositiveBalance {
                name: "Alice".to_string(),
                balance: 0,
            })
        );
    }
}
