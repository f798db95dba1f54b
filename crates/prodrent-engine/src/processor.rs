//! # Movement Processor
//!
//! Orchestrates each parsed movement: validity checks against the two
//! stores, entity mutation, paired write-back, and exactly one audit event
//! per processed movement.
//!
//! ## The ALQUILAR Check Ladder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Each rung refuses with a named event and NO mutation:                  │
//! │                                                                         │
//! │  1. client id invalid        → ERROR: invalid client id                 │
//! │  2. product id invalid       → ERROR: invalid product id                │
//! │  3. product stock == 0       → ERROR: cannot rent ... no stock          │
//! │  4. balance < price          → ERROR: ... has not enough funds          │
//! │  5. !can_add_product()       → ERROR: ... cannot add product            │
//! │  6. otherwise: rent into the roster, subtract the price, decrement      │
//! │     stock, write client record, write product record, log OK            │
//! │                                                                         │
//! │  The two writes in step 6 are a PAIRED, NON-ATOMIC write: a crash       │
//! │  between them leaves the files mutually inconsistent. Deliberate -      │
//! │  adding a transaction layer here would change observable behavior.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Downgrade at the Line Boundary
//! Store failures inside a movement (including I/O) are downgraded to the
//! unknown-operation audit event and the run continues - the same event an
//! unparsable line produces. Only the audit log itself failing, or the
//! movements file becoming unreadable, aborts the run.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::error::{EngineError, Refusal};
use crate::log::AuditLog;
use crate::movement::Movement;
use prodrent_core::validation::{validate_new_client, validate_new_product};
use prodrent_core::{Client, Product};
use prodrent_store::{ClientStore, ProductStore, StoreError};

/// Replays movements against the client and product stores.
///
/// Owns both stores and the audit log for the duration of the run; single
/// threaded, one movement fully processed and persisted before the next.
pub struct MovementProcessor {
    clients: ClientStore,
    products: ProductStore,
    log: AuditLog,
}

/// Internal failure channel for one movement.
///
/// Store failures get downgraded at the line boundary; audit-log failures
/// are fatal to the run.
enum ApplyError {
    Store(StoreError),
    Log(io::Error),
}

impl From<StoreError> for ApplyError {
    fn from(err: StoreError) -> Self {
        ApplyError::Store(err)
    }
}

impl From<io::Error> for ApplyError {
    fn from(err: io::Error) -> Self {
        ApplyError::Log(err)
    }
}

impl MovementProcessor {
    /// Creates a processor over already opened stores and audit log.
    pub fn new(clients: ClientStore, products: ProductStore, log: AuditLog) -> Self {
        MovementProcessor {
            clients,
            products,
            log,
        }
    }

    /// Truncates both stores so the run starts from an empty database.
    pub fn reset_stores(&mut self) -> Result<(), EngineError> {
        self.products.reset()?;
        self.clients.reset()?;
        Ok(())
    }

    /// Processes every line of the movements reader in order.
    pub fn run(&mut self, reader: impl BufRead) -> Result<(), EngineError> {
        for line in reader.lines() {
            self.process_line(&line?)?;
        }
        Ok(())
    }

    /// Processes one movement line: parse, apply, report.
    ///
    /// Never fails for anything a single movement can cause; the returned
    /// error means the run itself can no longer make progress (audit log
    /// unwritable).
    pub fn process_line(&mut self, line: &str) -> Result<(), EngineError> {
        let movement = match Movement::parse(line) {
            Ok(Some(movement)) => movement,
            Ok(None) => return Ok(()),
            Err(err) => {
                warn!(line, %err, "movement line failed to parse");
                self.log.unknown_operation(err.operation())?;
                return Ok(());
            }
        };

        debug!(operation = movement.operation_name(), "processing movement");

        match self.apply(&movement) {
            Ok(()) => Ok(()),
            Err(ApplyError::Store(err)) => {
                // Conflated on purpose: a store failure mid-movement reports
                // exactly like an unrecognized operation, keeping audit output
                // compatible with existing consumers. The operational log
                // keeps the real cause.
                warn!(
                    operation = movement.operation_name(),
                    %err,
                    "movement failed; reported as unknown operation"
                );
                self.log.unknown_operation(movement.operation_name())?;
                Ok(())
            }
            Err(ApplyError::Log(err)) => Err(EngineError::Io(err)),
        }
    }

    /// Flushes the audit log and releases both store handles.
    ///
    /// Failures here are fatal to the run; per-movement failures never are.
    pub fn close(self) -> Result<(), EngineError> {
        self.log.close()?;
        self.clients.close()?;
        self.products.close()?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Per-Movement Rules
    // -------------------------------------------------------------------------

    fn apply(&mut self, movement: &Movement) -> Result<(), ApplyError> {
        match movement {
            Movement::NewProduct {
                description,
                price,
                stock,
            } => self.new_product(description, *price, *stock),
            Movement::NewClient { name, balance } => self.new_client(name, *balance),
            Movement::ProductInfo { id } => self.product_info(*id),
            Movement::ClientInfo { id } => self.client_info(*id),
            Movement::Rent {
                client_id,
                product_id,
            } => self.rent(*client_id, *product_id),
            Movement::Return {
                client_id,
                product_id,
            } => self.return_product(*client_id, *product_id),
        }
    }

    fn new_product(&mut self, description: &str, price: i32, stock: i32) -> Result<(), ApplyError> {
        if let Err(err) = validate_new_product(description, price, stock) {
            self.log.refusal(&err.into())?;
            return Ok(());
        }

        let id = self.products.next_id()?;
        let product = Product::new(id, description, price, stock);
        self.products.write(&product)?;
        self.log.ok_new_product(&product)?;
        Ok(())
    }

    fn new_client(&mut self, name: &str, balance: i32) -> Result<(), ApplyError> {
        if let Err(err) = validate_new_client(name, balance) {
            self.log.refusal(&err.into())?;
            return Ok(());
        }

        let id = self.clients.next_id()?;
        let client = Client::new(id, name, balance);
        self.clients.write(&client)?;
        self.log.ok_new_client(&client)?;
        Ok(())
    }

    fn product_info(&mut self, id: i64) -> Result<(), ApplyError> {
        if !self.products.is_valid(id)? {
            self.log.refusal(&Refusal::InvalidProductId(id))?;
            return Ok(());
        }

        let product = self.products.read(id)?;
        self.log.info_product(&product)?;
        Ok(())
    }

    fn client_info(&mut self, id: i64) -> Result<(), ApplyError> {
        if !self.clients.is_valid(id)? {
            self.log.refusal(&Refusal::InvalidClientId(id))?;
            return Ok(());
        }

        let client = self.clients.read(id)?;
        let mut rented = Vec::new();
        for product_id in client.rented_ids() {
            rented.push(self.products.read(product_id)?);
        }
        self.log.info_client(&client, &rented)?;
        Ok(())
    }

    fn rent(&mut self, client_id: i64, product_id: i64) -> Result<(), ApplyError> {
        if !self.clients.is_valid(client_id)? {
            self.log.refusal(&Refusal::InvalidClientId(client_id))?;
            return Ok(());
        }
        if !self.products.is_valid(product_id)? {
            self.log.refusal(&Refusal::InvalidProductId(product_id))?;
            return Ok(());
        }

        let mut client = self.clients.read(client_id)?;
        let mut product = self.products.read(product_id)?;

        if product.stock() == 0 {
            self.log.refusal(&Refusal::NoStock {
                product_id,
                description: product.description().to_string(),
            })?;
            return Ok(());
        }
        if client.balance() < product.price() {
            self.log.refusal(&Refusal::NotEnoughFunds {
                client_id,
                name: client.name().to_string(),
                balance: client.balance(),
                price: product.price(),
            })?;
            return Ok(());
        }
        // Slot occupancy, not active rentals: a full roster refuses even
        // another unit of an already-held product
        if !client.can_add_product() {
            self.log.refusal(&Refusal::CannotAddProduct {
                client_id,
                name: client.name().to_string(),
                product_id,
            })?;
            return Ok(());
        }

        client.rent_product(product_id);
        client.sub_balance(product.price());
        product.decrement_stock();

        // Paired, non-atomic write-back
        self.clients.write(&client)?;
        self.products.write(&product)?;

        self.log.ok_rent(&client, &product)?;
        Ok(())
    }

    fn return_product(&mut self, client_id: i64, product_id: i64) -> Result<(), ApplyError> {
        if !self.clients.is_valid(client_id)? {
            self.log.refusal(&Refusal::InvalidClientId(client_id))?;
            return Ok(());
        }
        if !self.products.is_valid(product_id)? {
            self.log.refusal(&Refusal::InvalidProductId(product_id))?;
            return Ok(());
        }

        let mut client = self.clients.read(client_id)?;
        let mut product = self.products.read(product_id)?;

        if !client.has_product(product_id) {
            self.log.refusal(&Refusal::HasNotProduct {
                client_id,
                name: client.name().to_string(),
                product_id,
            })?;
            return Ok(());
        }

        client.return_product(product_id);
        product.increment_stock();

        // Paired, non-atomic write-back
        self.clients.write(&client)?;
        self.products.write(&product)?;

        self.log.ok_return(&client, &product)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
