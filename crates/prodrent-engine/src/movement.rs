//! # Movement Vocabulary & Parser
//!
//! One movement per input line, comma-separated, operation name first:
//!
//! ```text
//! ALTA_PRODUCTO, description, price, stock
//! ALTA_CLIENTE, name, balance
//! INFO_PRODUCTO, id
//! INFO_CLIENTE, id
//! ALQUILAR, clientId, productId
//! DEVOLVER, clientId, productId
//! ```
//!
//! ## Parse Outcomes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ok(Some(movement))  - a complete, well-formed command                  │
//! │  Ok(None)            - blank line or missing arguments: SILENTLY        │
//! │                        skipped without any log event                    │
//! │  Err(ParseError)     - unknown operation or unparsable number:          │
//! │                        reported as the unknown-operation audit event    │
//! │                        (which deliberately conflates parse failures     │
//! │                        with processing failures, see the processor)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The operation name is case-insensitive; every token is trimmed.

use thiserror::Error;

// =============================================================================
// Movement
// =============================================================================

/// A parsed movement command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Movement {
    /// `ALTA_PRODUCTO, description, price, stock`
    NewProduct {
        description: String,
        price: i32,
        stock: i32,
    },
    /// `ALTA_CLIENTE, name, balance`
    NewClient { name: String, balance: i32 },
    /// `INFO_PRODUCTO, id`
    ProductInfo { id: i64 },
    /// `INFO_CLIENTE, id`
    ClientInfo { id: i64 },
    /// `ALQUILAR, clientId, productId`
    Rent { client_id: i64, product_id: i64 },
    /// `DEVOLVER, clientId, productId`
    Return { client_id: i64, product_id: i64 },
}

/// Movement line parse failures.
///
/// Both variants carry the (uppercased) operation token so the processor
/// can report the unknown-operation event with it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The operation token matches no known command.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// A numeric argument did not parse.
    #[error("invalid number in {operation}: \"{token}\"")]
    InvalidNumber { operation: String, token: String },
}

impl ParseError {
    /// The operation token this failure belongs to.
    pub fn operation(&self) -> &str {
        match self {
            ParseError::UnknownOperation(operation) => operation,
            ParseError::InvalidNumber { operation, .. } => operation,
        }
    }
}

impl Movement {
    /// Parses one movement line.
    pub fn parse(line: &str) -> Result<Option<Movement>, ParseError> {
        let mut tokens = line.split(',').map(str::trim);

        let operation = match tokens.next() {
            Some(op) if !op.is_empty() => op.to_uppercase(),
            _ => return Ok(None),
        };

        // Missing arguments mean Ok(None) throughout: short lines are
        // dropped without a log event.
        macro_rules! next_token {
            () => {
                match tokens.next() {
                    Some(token) => token,
                    None => return Ok(None),
                }
            };
        }

        let movement = match operation.as_str() {
            "ALTA_PRODUCTO" => {
                let description = next_token!().to_string();
                let price = parse_number(&operation, next_token!())?;
                let stock = parse_number(&operation, next_token!())?;
                Movement::NewProduct {
                    description,
                    price,
                    stock,
                }
            }
            "ALTA_CLIENTE" => {
                let name = next_token!().to_string();
                let balance = parse_number(&operation, next_token!())?;
                Movement::NewClient { name, balance }
            }
            "INFO_PRODUCTO" => Movement::ProductInfo {
                id: parse_number(&operation, next_token!())?,
            },
            "INFO_CLIENTE" => Movement::ClientInfo {
                id: parse_number(&operation, next_token!())?,
            },
            "ALQUILAR" => Movement::Rent {
                client_id: parse_number(&operation, next_token!())?,
                product_id: parse_number(&operation, next_token!())?,
            },
            "DEVOLVER" => Movement::Return {
                client_id: parse_number(&operation, next_token!())?,
                product_id: parse_number(&operation, next_token!())?,
            },
            _ => return Err(ParseError::UnknownOperation(operation)),
        };

        Ok(Some(movement))
    }

    /// The uppercased operation name, used for conflated failure reporting.
    pub fn operation_name(&self) -> &'static str {
        match self {
            Movement::NewProduct { .. } => "ALTA_PRODUCTO",
            Movement::NewClient { .. } => "ALTA_CLIENTE",
            Movement::ProductInfo { .. } => "INFO_PRODUCTO",
            Movement::ClientInfo { .. } => "INFO_CLIENTE",
            Movement::Rent { .. } => "ALQUILAR",
            Movement::Return { .. } => "DEVOLVER",
        }
    }
}

fn parse_number<N: std::str::FromStr>(operation: &str, token: &str) -> Result<N, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        operation: operation.to_string(),
        token: token.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operation() {
        assert_eq!(
            Movement::parse("ALTA_PRODUCTO, Power drill, 10, 5"),
            Ok(Some(Movement::NewProduct {
                description: "Power drill".to_string(),
                price: 10,
                stock: 5,
            }))
        );
        assert_eq!(
            Movement::parse("ALTA_CLIENTE, Alice, 25"),
            Ok(Some(Movement::NewClient {
                name: "Alice".to_string(),
                balance: 25,
            }))
        );
        assert_eq!(
            Movement::parse("INFO_PRODUCTO, 3"),
            Ok(Some(Movement::ProductInfo { id: 3 }))
        );
        assert_eq!(
            Movement::parse("INFO_CLIENTE, 2"),
            Ok(Some(Movement::ClientInfo { id: 2 }))
        );
        assert_eq!(
            Movement::parse("ALQUILAR, 1, 2"),
            Ok(Some(Movement::Rent {
                client_id: 1,
                product_id: 2,
            }))
        );
        assert_eq!(
            Movement::parse("DEVOLVER, 1, 2"),
            Ok(Some(Movement::Return {
                client_id: 1,
                product_id: 2,
            }))
        );
    }

    #[test]
    fn operation_name_is_case_insensitive() {
        assert_eq!(
            Movement::parse("alquilar, 1, 2"),
            Ok(Some(Movement::Rent {
                client_id: 1,
                product_id: 2,
            }))
        );
        assert_eq!(
            Movement::parse("Alta_Cliente, Bob, 10"),
            Ok(Some(Movement::NewClient {
                name: "Bob".to_string(),
                balance: 10,
            }))
        );
    }

    #[test]
    fn tokens_are_trimmed() {
        assert_eq!(
            Movement::parse("  ALQUILAR ,  7 ,  9  "),
            Ok(Some(Movement::Rent {
                client_id: 7,
                product_id: 9,
            }))
        );
    }

    #[test]
    fn blank_lines_are_skipped_silently() {
        assert_eq!(Movement::parse(""), Ok(None));
        assert_eq!(Movement::parse("   "), Ok(None));
        assert_eq!(Movement::parse(" , 1, 2"), Ok(None));
    }

    #[test]
    fn missing_arguments_are_skipped_silently() {
        assert_eq!(Movement::parse("ALQUILAR"), Ok(None));
        assert_eq!(Movement::parse("ALQUILAR, 1"), Ok(None));
        assert_eq!(Movement::parse("ALTA_PRODUCTO, Drill, 10"), Ok(None));
    }

    #[test]
    fn unknown_operation_is_an_error() {
        let err = Movement::parse("FOO, 1").unwrap_err();
        assert_eq!(err, ParseError::UnknownOperation("FOO".to_string()));
        assert_eq!(err.operation(), "FOO");
    }

    #[test]
    fn bad_number_is_an_error_carrying_the_operation() {
        let err = Movement::parse("ALQUILAR, one, 2").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                operation: "ALQUILAR".to_string(),
                token: "one".to_string(),
            }
        );
        assert_eq!(err.operation(), "ALQUILAR");
    }

    #[test]
    fn negative_numbers_parse() {
        // Non-positive values are a validation refusal, not a parse error
        assert_eq!(
            Movement::parse("ALTA_CLIENTE, Bob, -5"),
            Ok(Some(Movement::NewClient {
                name: "Bob".to_string(),
                balance: -5,
            }))
        );
    }
}
