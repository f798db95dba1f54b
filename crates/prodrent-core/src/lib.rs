//! # prodrent-core: Pure Domain Logic for ProdRent
//!
//! This crate is the **heart** of ProdRent. It contains the binary record
//! contract and the entity mutation rules as pure code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ProdRent Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       apps/cli                                  │   │
//! │  │    file-name prompts ──► wiring ──► run loop                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     prodrent-engine                             │   │
//! │  │    movement parsing, rent/return rules, audit log               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     prodrent-store                              │   │
//! │  │    RecordStore<R>: id ──► byte offset in a flat file            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ prodrent-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   codec   │  │  client   │  │  product  │  │ validation│  │   │
//! │  │   │ pack/     │  │  roster   │  │  stock    │  │ creation  │  │   │
//! │  │   │ unpack    │  │  balance  │  │  price    │  │ checks    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`codec`] - Fixed-width big-endian pack/unpack primitives
//! - [`client`] - Rental customer with a bounded rental roster
//! - [`product`] - Rentable item with price and stock
//! - [`error`] - Validation error types
//! - [`validation`] - Creation-time business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File, database and network access is FORBIDDEN here
//! 3. **Exact Binary Contract**: `from_bytes(to_bytes(e))` equals `e` by value
//! 4. **Refusals Are Values**: Business rules return booleans or typed errors,
//!    never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use prodrent_core::{Client, Product};
//!
//! let mut client = Client::new(1, "Alice", 25);
//! let product = Product::new(1, "Power drill", 10, 1);
//!
//! assert!(client.can_add_product());
//! assert!(client.rent_product(product.id()));
//! client.sub_balance(product.price());
//!
//! assert_eq!(client.balance(), 15);
//! assert_eq!(client.rented_units(1), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod codec;
pub mod error;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use prodrent_core::Client` instead of
// `use prodrent_core::client::Client`

pub use client::{Client, RosterSlot, MAX_RENTALS, NAME_LIMIT};
pub use error::{ValidationError, ValidationResult};
pub use product::{Product, DESCRIPTION_LIMIT};
