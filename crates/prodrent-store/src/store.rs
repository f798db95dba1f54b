//! # Record Store
//!
//! The generic fixed-record store, instantiated twice: [`ClientStore`] and
//! [`ProductStore`].
//!
//! ## Identifier Allocation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Dense, Permanent Identifiers                         │
//! │                                                                         │
//! │  next_id() = file_len / SIZE + 1                                        │
//! │                                                                         │
//! │  The intended protocol is next_id() followed by write(), which keeps   │
//! │  the file gapless. The store does NOT enforce density: writing to an   │
//! │  arbitrary future id extends the file, and the zero-filled gap then    │
//! │  decodes as all-zero records that is_valid() considers valid. That     │
//! │  sparse-fill behavior is part of the contract, not an accident.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Single-threaded by design. One process, one writer, no locking - the
//! paired client/product writes of a rent or return are NOT transactional
//! and a crash between them leaves the two files mutually inconsistent.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::record::Record;
use prodrent_core::{Client, Product};

/// Flat-file store mapping 1-based identifiers to fixed byte ranges.
///
/// ## Usage
/// ```rust,no_run
/// use prodrent_store::ProductStore;
/// use prodrent_core::Product;
///
/// # fn main() -> Result<(), prodrent_store::StoreError> {
/// let mut store = ProductStore::open("productsDB.dat")?;
/// store.reset()?;
///
/// let id = store.next_id()?;
/// store.write(&Product::new(id, "Drill", 10, 5))?;
///
/// let product = store.read(id)?;
/// assert_eq!(product.stock(), 5);
/// # Ok(())
/// # }
/// ```
pub struct RecordStore<R: Record> {
    /// Open handle, held for the store's lifetime and released on drop.
    file: File,
    /// Path kept for log and error context.
    path: PathBuf,
    _marker: PhantomData<R>,
}

/// Store for client records.
pub type ClientStore = RecordStore<Client>;

/// Store for product records.
pub type ProductStore = RecordStore<Product>;

impl<R: Record> RecordStore<R> {
    /// Opens (or creates) the record file in read/write mode.
    ///
    /// The handle stays open until the store is dropped or [`Self::close`]d.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        debug!(entity = R::ENTITY, path = %path.display(), "opened record store");

        Ok(RecordStore {
            file,
            path,
            _marker: PhantomData,
        })
    }

    /// Returns the path of the underlying record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of whole records currently in the file.
    fn record_count(&self) -> StoreResult<i64> {
        let len = self.file.metadata()?.len();
        Ok((len / R::SIZE as u64) as i64)
    }

    /// Writes the whole fixed-size record at `(id - 1) * SIZE`.
    ///
    /// Overwrites in place; writing past the current end extends the file,
    /// with any gap reading back as zero-filled records.
    pub fn write(&mut self, record: &R) -> StoreResult<()> {
        let id = record.id();
        let offset = (id - 1) as u64 * R::SIZE as u64;

        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(&record.to_bytes())?;

        debug!(entity = R::ENTITY, id, offset, "wrote record");
        Ok(())
    }

    /// Reads the record with the given identifier.
    ///
    /// ## Errors
    /// [`StoreError::InvalidId`] unless `1 <= id <= record_count`.
    pub fn read(&mut self, id: i64) -> StoreResult<R> {
        if !self.is_valid(id)? {
            return Err(StoreError::InvalidId {
                entity: R::ENTITY,
                id,
            });
        }

        let offset = (id - 1) as u64 * R::SIZE as u64;
        self.file.seek(SeekFrom::Start(offset))?;

        let mut buf = vec![0u8; R::SIZE];
        self.file.read_exact(&mut buf)?;

        debug!(entity = R::ENTITY, id, offset, "read record");
        Ok(R::from_bytes(&buf))
    }

    /// The next identifier a caller should allocate: `file_len / SIZE + 1`.
    ///
    /// Assumes the dense `next_id()`-then-`write()` protocol (see module
    /// docs); the store does not enforce it.
    pub fn next_id(&self) -> StoreResult<i64> {
        Ok(self.record_count()? + 1)
    }

    /// Whether `id` addresses an existing record: `1 <= id <= record_count`.
    pub fn is_valid(&self, id: i64) -> StoreResult<bool> {
        if id < 1 {
            return Ok(false);
        }
        Ok(id <= self.record_count()?)
    }

    /// Truncates the store to zero records.
    ///
    /// Used once at startup so every run begins from an empty database.
    pub fn reset(&mut self) -> StoreResult<()> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        debug!(entity = R::ENTITY, path = %self.path.display(), "reset record store");
        Ok(())
    }

    /// Flushes and releases the file handle.
    ///
    /// Dropping the store releases the handle too; `close` exists so that
    /// shutdown can observe a flush failure, which is fatal to the run.
    pub fn close(self) -> StoreResult<()> {
        self.file.sync_all()?;
        debug!(entity = R::ENTITY, path = %self.path.display(), "closed record store");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use prodrent_core::{Client, Product};
    use tempfile::TempDir;

    fn scratch() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    #[test]
    fn next_id_starts_at_one_on_empty_file() {
        let dir = scratch();
        let store = ProductStore::open(dir.path().join("products.dat")).unwrap();
        assert_eq!(store.next_id().unwrap(), 1);
        assert!(!store.is_valid(1).unwrap());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = scratch();
        let mut store = ProductStore::open(dir.path().join("products.dat")).unwrap();

        let product = Product::new(1, "Drill", 10, 5);
        store.write(&product).unwrap();

        assert_eq!(store.read(1).unwrap(), product);
    }

    #[test]
    fn dense_allocation_protocol() {
        // After writing ids 1..=N via next_id()-then-write(), next_id() is
        // N+1 and is_valid(k) holds exactly for 1 <= k <= N
        let dir = scratch();
        let mut store = ClientStore::open(dir.path().join("clients.dat")).unwrap();

        const N: i64 = 5;
        for expected in 1..=N {
            let id = store.next_id().unwrap();
            assert_eq!(id, expected);
            store.write(&Client::new(id, format!("c{id}"), 10)).unwrap();
        }

        assert_eq!(store.next_id().unwrap(), N + 1);
        assert!(!store.is_valid(0).unwrap());
        assert!(!store.is_valid(-1).unwrap());
        for k in 1..=N {
            assert!(store.is_valid(k).unwrap());
        }
        assert!(!store.is_valid(N + 1).unwrap());
    }

    #[test]
    fn read_invalid_id_is_a_typed_error() {
        let dir = scratch();
        let mut store = ProductStore::open(dir.path().join("products.dat")).unwrap();
        store.write(&Product::new(1, "Drill", 10, 5)).unwrap();

        for bad in [0, -1, 2] {
            match store.read(bad) {
                Err(StoreError::InvalidId { entity, id }) => {
                    assert_eq!(entity, "product");
                    assert_eq!(id, bad);
                }
                other => panic!("expected InvalidId, got {other:?}"),
            }
        }
    }

    #[test]
    fn overwrite_in_place_keeps_record_count() {
        let dir = scratch();
        let mut store = ProductStore::open(dir.path().join("products.dat")).unwrap();

        store.write(&Product::new(1, "Drill", 10, 5)).unwrap();
        store.write(&Product::new(1, "Drill", 10, 4)).unwrap();

        assert_eq!(store.next_id().unwrap(), 2);
        assert_eq!(store.read(1).unwrap().stock(), 4);
    }

    #[test]
    fn sparse_write_extends_file_with_zero_filled_records() {
        let dir = scratch();
        let mut store = ClientStore::open(dir.path().join("clients.dat")).unwrap();

        // Violate density on purpose: write id 3 into an empty store
        store.write(&Client::new(3, "Carol", 30)).unwrap();

        assert_eq!(store.next_id().unwrap(), 4);
        assert!(store.is_valid(1).unwrap());

        // The gap reads back as an all-zero record
        let ghost = store.read(1).unwrap();
        assert_eq!(ghost.id(), 0);
        assert_eq!(ghost.name(), "");
        assert_eq!(ghost.balance(), 0);
    }

    #[test]
    fn reset_truncates_to_zero_records() {
        let dir = scratch();
        let mut store = ProductStore::open(dir.path().join("products.dat")).unwrap();
        store.write(&Product::new(1, "Drill", 10, 5)).unwrap();
        store.write(&Product::new(2, "Saw", 7, 2)).unwrap();

        store.reset().unwrap();

        assert_eq!(store.next_id().unwrap(), 1);
        assert!(!store.is_valid(1).unwrap());
        assert!(store.read(1).is_err());
    }

    #[test]
    fn state_survives_reopen() {
        let dir = scratch();
        let path = dir.path().join("products.dat");

        {
            let mut store = ProductStore::open(&path).unwrap();
            store.write(&Product::new(1, "Drill", 10, 5)).unwrap();
            store.close().unwrap();
        }

        let mut reopened = ProductStore::open(&path).unwrap();
        assert_eq!(reopened.next_id().unwrap(), 2);
        assert_eq!(reopened.read(1).unwrap(), Product::new(1, "Drill", 10, 5));
    }
}
