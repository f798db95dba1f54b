//! # Client Entity
//!
//! A rental customer with a balance and a bounded rental roster.
//!
//! ## The Roster
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rental Roster (capacity 3)                          │
//! │                                                                         │
//! │   slot 0: Some { product_id: 4, units: 2 }   ← occupied, active        │
//! │   slot 1: Some { product_id: 7, units: 0 }   ← occupied, fully         │
//! │   slot 2: None                                  returned (still         │
//! │                                                 consumes capacity!)     │
//! │                                                                         │
//! │   A slot becomes occupied on the first rental of a product and is      │
//! │   NEVER freed; only its unit count changes. A client who has ever      │
//! │   rented 3 distinct products can never rent a 4th distinct one.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Occupancy vs. the On-Disk Sentinel
//! In memory a slot is `Option<RosterSlot>`, so occupancy is explicit and a
//! product id of 0 carries no special meaning. On disk an unoccupied slot is
//! written as the pair `(0, 0)` and a nonzero product id decodes as occupied,
//! keeping the record format byte-compatible with existing data files.
//!
//! ## Record Layout (68 bytes)
//! ```text
//! offset  size  field
//!      0     8  id            i64, big-endian
//!      8    20  name          10 UTF-16 units, zero-padded
//!     28     4  balance       i32
//!     32    24  rented ids    3 × i64 (0 = unoccupied slot)
//!     56    12  rented units  3 × i32
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec;

// =============================================================================
// Constants
// =============================================================================

/// Maximum number of roster slots per client.
///
/// ## Business Reason
/// A client may hold at most 3 distinct products at any point in their
/// lifetime (slots are never reclaimed, see the module docs).
pub const MAX_RENTALS: usize = 3;

/// Character limit of the client name field.
///
/// Names longer than this are silently truncated when encoded.
pub const NAME_LIMIT: usize = 10;

// =============================================================================
// Roster Slot
// =============================================================================

/// One occupied roster position: a product identifier and how many units of
/// it the client currently holds.
///
/// `units` may legally reach zero (fully returned) and even go negative
/// through repeated unmatched returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub product_id: i64,
    pub units: i32,
}

// =============================================================================
// Client
// =============================================================================

/// A rental customer.
///
/// ## Mutability Contract
/// - `id` and `name` are immutable after creation
/// - `balance` changes only through [`Client::add_balance`] / [`Client::sub_balance`],
///   which silently ignore amounts that would break their invariants
/// - the roster changes only through [`Client::rent_product`] / [`Client::return_product`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    id: i64,
    name: String,
    balance: i32,
    roster: [Option<RosterSlot>; MAX_RENTALS],
}

impl Client {
    /// Encoded record size in bytes: id + name + balance + roster ids + roster units.
    pub const SIZE: usize = 8 + NAME_LIMIT * 2 + 4 + MAX_RENTALS * 8 + MAX_RENTALS * 4;

    /// Creates a client with an empty roster.
    pub fn new(id: i64, name: impl Into<String>, balance: i32) -> Self {
        Client {
            id,
            name: name.into(),
            balance,
            roster: [None; MAX_RENTALS],
        }
    }

    /// Returns the client identifier (1-based, assigned by the store).
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the client name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current balance.
    #[inline]
    pub fn balance(&self) -> i32 {
        self.balance
    }

    // -------------------------------------------------------------------------
    // Balance Arithmetic
    // -------------------------------------------------------------------------

    /// Adds `amount` to the balance.
    ///
    /// Non-positive amounts are silently ignored - not an error.
    pub fn add_balance(&mut self, amount: i32) {
        if amount > 0 {
            self.balance += amount;
        }
    }

    /// Subtracts `amount` from the balance.
    ///
    /// Silently ignored unless `amount` is positive AND the balance covers it;
    /// the balance never goes negative through this path.
    pub fn sub_balance(&mut self, amount: i32) {
        if amount > 0 && self.balance >= amount {
            self.balance -= amount;
        }
    }

    // -------------------------------------------------------------------------
    // Roster Operations
    // -------------------------------------------------------------------------

    /// Whether the client can rent a product they do not already hold.
    ///
    /// True iff fewer than [`MAX_RENTALS`] slots are occupied. Note this
    /// checks slot *occupancy*, not active rentals: a fully returned product
    /// still pins its slot.
    pub fn can_add_product(&self) -> bool {
        self.roster.iter().filter(|slot| slot.is_some()).count() < MAX_RENTALS
    }

    /// Whether some roster slot holds `product_id` (at any unit count,
    /// including zero).
    pub fn has_product(&self, product_id: i64) -> bool {
        self.roster
            .iter()
            .flatten()
            .any(|slot| slot.product_id == product_id)
    }

    /// Rents one unit of `product_id`.
    ///
    /// If a slot already holds the product its unit count is incremented;
    /// otherwise the first free slot is assigned `(product_id, 1)`. Returns
    /// false when the roster is full and the product is not already held -
    /// callers enforce policy via [`Client::can_add_product`] first, but the
    /// entity self-protects too.
    pub fn rent_product(&mut self, product_id: i64) -> bool {
        for slot in self.roster.iter_mut().flatten() {
            if slot.product_id == product_id {
                slot.units += 1;
                return true;
            }
        }

        for slot in self.roster.iter_mut() {
            if slot.is_none() {
                *slot = Some(RosterSlot { product_id, units: 1 });
                return true;
            }
        }

        false
    }

    /// Returns one unit of `product_id`.
    ///
    /// Decrements the matching slot's unit count **unconditionally** - there
    /// is no floor at zero, so unmatched returns drive the count negative.
    /// Returns false only when no slot holds the product.
    pub fn return_product(&mut self, product_id: i64) -> bool {
        for slot in self.roster.iter_mut().flatten() {
            if slot.product_id == product_id {
                slot.units -= 1;
                return true;
            }
        }
        false
    }

    /// Unit count currently held for `product_id`, or 0 if no slot matches.
    pub fn rented_units(&self, product_id: i64) -> i32 {
        self.roster
            .iter()
            .flatten()
            .find(|slot| slot.product_id == product_id)
            .map_or(0, |slot| slot.units)
    }

    /// Identifiers of products with a strictly positive unit count, in roster
    /// storage order. Each call produces a fresh, independently owned vector.
    pub fn rented_ids(&self) -> Vec<i64> {
        self.roster
            .iter()
            .flatten()
            .filter(|slot| slot.units > 0)
            .map(|slot| slot.product_id)
            .collect()
    }

    /// Sorted `(product_id, units)` pairs restricted to positive unit counts.
    ///
    /// This is the view used by equality and display; occupied-but-zero slots
    /// are invisible here even though they still consume capacity.
    fn active_rentals(&self) -> Vec<(i64, i32)> {
        let mut rentals: Vec<(i64, i32)> = self
            .roster
            .iter()
            .flatten()
            .filter(|slot| slot.units > 0)
            .map(|slot| (slot.product_id, slot.units))
            .collect();
        rentals.sort_unstable();
        rentals
    }

    // -------------------------------------------------------------------------
    // Binary Round Trip
    // -------------------------------------------------------------------------

    /// Encodes the client into its fixed-size 68-byte record.
    ///
    /// Unoccupied slots encode as `(0, 0)`; names longer than [`NAME_LIMIT`]
    /// are silently truncated by the codec.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; Self::SIZE];
        let mut offset = 0;

        codec::pack_i64(self.id, &mut bytes, offset);
        offset += 8;

        codec::pack_str(&self.name, NAME_LIMIT, &mut bytes, offset);
        offset += NAME_LIMIT * 2;

        codec::pack_i32(self.balance, &mut bytes, offset);
        offset += 4;

        for slot in &self.roster {
            let product_id = slot.map_or(0, |s| s.product_id);
            codec::pack_i64(product_id, &mut bytes, offset);
            offset += 8;
        }
        for slot in &self.roster {
            let units = slot.map_or(0, |s| s.units);
            codec::pack_i32(units, &mut bytes, offset);
            offset += 4;
        }

        bytes
    }

    /// Decodes a client from its fixed-size record.
    ///
    /// A nonzero product id marks a slot as occupied, whatever its unit
    /// count. Exact inverse of [`Client::to_bytes`] for every field,
    /// including slot order.
    pub fn from_bytes(record: &[u8]) -> Self {
        let mut offset = 0;

        let id = codec::unpack_i64(record, offset);
        offset += 8;

        let name = codec::unpack_str(NAME_LIMIT, record, offset);
        offset += NAME_LIMIT * 2;

        let balance = codec::unpack_i32(record, offset);
        offset += 4;

        let mut product_ids = [0i64; MAX_RENTALS];
        for product_id in product_ids.iter_mut() {
            *product_id = codec::unpack_i64(record, offset);
            offset += 8;
        }

        let mut client = Client::new(id, name, balance);
        for (i, &product_id) in product_ids.iter().enumerate() {
            let units = codec::unpack_i32(record, offset);
            offset += 4;
            if product_id != 0 {
                client.roster[i] = Some(RosterSlot { product_id, units });
            }
        }

        client
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Clients are equal when id, name and balance match and their sorted
/// active rentals (positive unit counts only) match.
///
/// Occupied-but-zero slots deliberately do NOT participate: two clients may
/// be equal while differing in which dead slots they carry.
impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.balance == other.balance
            && self.active_rentals() == other.active_rentals()
    }
}

/// Debug-friendly rendering showing only active rentals, sorted by product id.
impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client {{ id: {}, name: \"{}\", balance: {}, rented: [",
            self.id, self.name, self.balance
        )?;
        for (i, (product_id, units)) in self.active_rentals().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({product_id}, {units})")?;
        }
        write!(f, "] }}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
