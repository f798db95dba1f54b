//! # prodrent-store: Fixed-Record Flat Files
//!
//! Identifier-indexed flat-file storage for ProdRent entities.
//!
//! ## The Addressing Scheme
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Flat File Per Entity Type                        │
//! │                                                                         │
//! │  clientsDB.dat (68-byte records)                                        │
//! │  +-------------+-------------+-------------+                            │
//! │  | record 1    | record 2    | record 3    | ...                        │
//! │  +-------------+-------------+-------------+                            │
//! │  ^ offset 0    ^ offset 68   ^ offset 136                               │
//! │                                                                         │
//! │  record i (1-based) ⇔ bytes [(i-1)*SIZE, i*SIZE)                       │
//! │  next id            =  file_len / SIZE + 1                             │
//! │  valid id           ⇔  1 <= id <= file_len / SIZE                      │
//! │                                                                         │
//! │  No tombstones, no free list: identifiers are dense and permanent.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`] - the [`Record`] trait tying an entity to its fixed size
//! - [`store`]  - the generic [`RecordStore`] and its two instantiations
//! - [`error`]  - store error taxonomy

pub mod error;
pub mod record;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use record::Record;
pub use store::{ClientStore, ProductStore, RecordStore};
