//! # Product Entity
//!
//! A rentable item with an immutable price and a mutable stock count.
//!
//! ## Record Layout (56 bytes)
//! ```text
//! offset  size  field
//!      0     8  id           i64, big-endian
//!      8    40  description  20 UTF-16 units, zero-padded
//!     48     4  price        i32
//!     52     4  stock        i32
//! ```
//!
//! ## The Stock Floor
//! `decrement_stock` only acts while stock is strictly greater than 1, so
//! stock never reaches 0 through rentals. A product can only sit at stock 0
//! if it was constructed that way (the creation path validates stock > 0, so
//! in practice the no-stock rental refusal fires only for records seeded
//! directly into the store).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec;

/// Character limit of the product description field.
///
/// Descriptions longer than this are silently truncated when encoded.
pub const DESCRIPTION_LIMIT: usize = 20;

/// A rentable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: i64,
    description: String,
    price: i32,
    stock: i32,
}

impl Product {
    /// Encoded record size in bytes: id + description + price + stock.
    pub const SIZE: usize = 8 + DESCRIPTION_LIMIT * 2 + 4 + 4;

    /// Creates a product.
    ///
    /// Creation-time business rules (positive price and stock) live in
    /// [`crate::validation`]; the constructor itself accepts any values so
    /// that decoding never fails.
    pub fn new(id: i64, description: impl Into<String>, price: i32, stock: i32) -> Self {
        Product {
            id,
            description: description.into(),
            price,
            stock,
        }
    }

    /// Returns the product identifier (1-based, assigned by the store).
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the product description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the rental price.
    #[inline]
    pub fn price(&self) -> i32 {
        self.price
    }

    /// Returns the units currently in stock.
    #[inline]
    pub fn stock(&self) -> i32 {
        self.stock
    }

    /// Adds one unit to stock, unconditionally.
    pub fn increment_stock(&mut self) {
        self.stock += 1;
    }

    /// Removes one unit from stock, but only while more than one unit
    /// remains - stock floors at 1 through this path.
    pub fn decrement_stock(&mut self) {
        if self.stock > 1 {
            self.stock -= 1;
        }
    }

    /// Encodes the product into its fixed-size 56-byte record.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; Self::SIZE];
        let mut offset = 0;

        codec::pack_i64(self.id, &mut bytes, offset);
        offset += 8;

        codec::pack_str(&self.description, DESCRIPTION_LIMIT, &mut bytes, offset);
        offset += DESCRIPTION_LIMIT * 2;

        codec::pack_i32(self.price, &mut bytes, offset);
        offset += 4;

        codec::pack_i32(self.stock, &mut bytes, offset);

        bytes
    }

    /// Decodes a product from its fixed-size record. Exact inverse of
    /// [`Product::to_bytes`].
    pub fn from_bytes(record: &[u8]) -> Self {
        let mut offset = 0;

        let id = codec::unpack_i64(record, offset);
        offset += 8;

        let description = codec::unpack_str(DESCRIPTION_LIMIT, record, offset);
        offset += DESCRIPTION_LIMIT * 2;

        let price = codec::unpack_i32(record, offset);
        offset += 4;

        let stock = codec::unpack_i32(record, offset);

        Product::new(id, description, price, stock)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product {{ id: {}, description: \"{}\", price: {}, stock: {} }}",
            self.id, self.description, self.price, self.stock
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn constructor_and_getters() {
        let product = Product::new(1, "Power drill", 10, 5);
        assert_eq!(product.id(), 1);
        assert_eq!(product.description(), "Power drill");
        assert_eq!(product.price(), 10);
        assert_eq!(product.stock(), 5);
    }

    #[test]
    fn increment_stock_is_unconditional() {
        let mut product = Product::new(1, "Drill", 10, 0);
        product.increment_stock();
        product.increment_stock();
        assert_eq!(product.stock(), 2);
    }

    #[test]
    fn decrement_stock_floors_at_one() {
        let mut product = Product::new(1, "Drill", 10, 3);
        product.decrement_stock();
        product.decrement_stock();
        assert_eq!(product.stock(), 1);
        // Floor: no-op from here on
        product.decrement_stock();
        assert_eq!(product.stock(), 1);
    }

    #[test]
    fn decrement_stock_never_reaches_zero_from_one() {
        let mut product = Product::new(1, "Drill", 10, 1);
        product.decrement_stock();
        assert_eq!(product.stock(), 1);
    }

    #[test]
    fn record_size_is_56_bytes() {
        assert_eq!(Product::SIZE, 56);
        assert_eq!(Product::new(1, "Drill", 10, 5).to_bytes().len(), 56);
    }

    #[test]
    fn round_trip_by_value() {
        let product = Product::new(42, "Angle grinder", 15, 2);
        let decoded = Product::from_bytes(&product.to_bytes());
        assert_eq!(decoded, product);
    }

    #[test]
    fn round_trip_truncates_long_description() {
        let product = Product::new(1, "a very long product description", 10, 1);
        let decoded = Product::from_bytes(&product.to_bytes());
        assert_eq!(decoded.description().chars().count(), DESCRIPTION_LIMIT);
        assert_eq!(decoded.description(), "a very long product ");
    }

    #[test]
    fn round_trip_zero_stock() {
        // The no-stock refusal path depends on stock 0 surviving the codec
        let product = Product::new(1, "Drill", 10, 0);
        let decoded = Product::from_bytes(&product.to_bytes());
        assert_eq!(decoded.stock(), 0);
        assert_eq!(decoded, product);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            id in 1i64..1_000_000,
            description in "[a-z ]{0,20}",
            price: i32,
            stock: i32,
        ) {
            let product = Product::new(id, description, price, stock);
            let decoded = Product::from_bytes(&product.to_bytes());
            prop_assert_eq!(decoded, product);
        }
    }
}
