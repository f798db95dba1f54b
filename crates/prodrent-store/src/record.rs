//! # Record Trait
//!
//! Ties an entity type to its fixed encoded size so [`crate::RecordStore`]
//! can map identifiers to byte offsets generically.

use prodrent_core::{Client, Product};

/// A fixed-size, identifier-addressed entity.
///
/// ## Contract
/// - `to_bytes` always returns exactly [`Record::SIZE`] bytes
/// - `from_bytes` is its exact inverse given a [`Record::SIZE`]-byte slice
/// - `id()` is 1-based and immutable for the entity's lifetime
///
/// The store trusts these laws; they are enforced by the entity round-trip
/// tests in prodrent-core.
pub trait Record: Sized {
    /// Encoded record size in bytes.
    const SIZE: usize;

    /// Entity name used in error and log context ("client", "product").
    const ENTITY: &'static str;

    /// The record's 1-based identifier.
    fn id(&self) -> i64;

    /// Encodes the entity into its fixed-size record.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decodes the entity from a fixed-size record.
    fn from_bytes(record: &[u8]) -> Self;
}

impl Record for Client {
    const SIZE: usize = Client::SIZE;
    const ENTITY: &'static str = "client";

    fn id(&self) -> i64 {
        Client::id(self)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Client::to_bytes(self)
    }

    fn from_bytes(record: &[u8]) -> Self {
        Client::from_bytes(record)
    }
}

impl Record for Product {
    const SIZE: usize = Product::SIZE;
    const ENTITY: &'static str = "product";

    fn id(&self) -> i64 {
        Product::id(self)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Product::to_bytes(self)
    }

    fn from_bytes(record: &[u8]) -> Self {
        Product::from_bytes(record)
    }
}
