//! # Audit Log Writer
//!
//! The plain-text event log of a run: one line per movement outcome.
//!
//! ## Event Shapes
//! ```text
//! # prodrent run started 2024-05-12 09:30:01
//! OK: new product Product { id: 1, description: "Drill", price: 10, stock: 5 }
//! OK: new client Client { id: 1, name: "Alice", balance: 25, rented: [] }
//! INFO: Product { id: 1, description: "Drill", price: 10, stock: 5 }
//! INFO: Client { id: 1, name: "Alice", balance: 15, rented: [(1, 1)] }
//! INFO:   rented Product { id: 1, description: "Drill", price: 10, stock: 5 }
//! OK: rent Client { ... } <- Product { ... }
//! OK: return Client { ... } -> Product { ... }
//! ERROR: invalid client id: 9
//! UNKNOWN OPERATION: FOO
//! ```
//!
//! This writer is pure formatting over a buffered file; which events fire,
//! and in which order, is the processor's business.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::error::Refusal;
use prodrent_core::{Client, Product};

/// Buffered plain-text audit log.
///
/// Created fresh for every run (truncating any previous file) and flushed
/// on [`AuditLog::close`].
pub struct AuditLog {
    out: BufWriter<File>,
}

impl AuditLog {
    /// Creates (or truncates) the log file and writes the run header.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut log = AuditLog {
            out: BufWriter::new(file),
        };
        writeln!(
            log.out,
            "# prodrent run started {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        Ok(log)
    }

    /// A product was created and persisted.
    pub fn ok_new_product(&mut self, product: &Product) -> io::Result<()> {
        writeln!(self.out, "OK: new product {product}")
    }

    /// A client was created and persisted.
    pub fn ok_new_client(&mut self, client: &Client) -> io::Result<()> {
        writeln!(self.out, "OK: new client {client}")
    }

    /// An INFO_PRODUCTO query result.
    pub fn info_product(&mut self, product: &Product) -> io::Result<()> {
        writeln!(self.out, "INFO: {product}")
    }

    /// An INFO_CLIENTE query result: the client, then one line per product
    /// the client actively rents.
    pub fn info_client(&mut self, client: &Client, rented: &[Product]) -> io::Result<()> {
        writeln!(self.out, "INFO: {client}")?;
        for product in rented {
            writeln!(self.out, "INFO:   rented {product}")?;
        }
        Ok(())
    }

    /// A rent succeeded; both entities shown in their persisted state.
    pub fn ok_rent(&mut self, client: &Client, product: &Product) -> io::Result<()> {
        writeln!(self.out, "OK: rent {client} <- {product}")
    }

    /// A return succeeded; both entities shown in their persisted state.
    pub fn ok_return(&mut self, client: &Client, product: &Product) -> io::Result<()> {
        writeln!(self.out, "OK: return {client} -> {product}")
    }

    /// A named business refusal.
    pub fn refusal(&mut self, refusal: &Refusal) -> io::Result<()> {
        writeln!(self.out, "ERROR: {refusal}")
    }

    /// The conflated catch-all: an unrecognized operation token, or any
    /// failure that escaped the named-refusal paths of a recognized one.
    pub fn unknown_operation(&mut self, operation: &str) -> io::Result<()> {
        writeln!(self.out, "UNKNOWN OPERATION: {operation}")
    }

    /// Flushes buffered events to disk.
    pub fn close(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn events_render_one_line_each() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.out");

        let mut log = AuditLog::create(&path).unwrap();
        log.ok_new_product(&Product::new(1, "Drill", 10, 5)).unwrap();
        log.refusal(&Refusal::InvalidClientId(9)).unwrap();
        log.unknown_operation("FOO").unwrap();
        log.close().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("# prodrent run started "));
        assert_eq!(
            lines[1],
            "OK: new product Product { id: 1, description: \"Drill\", price: 10, stock: 5 }"
        );
        assert_eq!(lines[2], "ERROR: invalid client id: 9");
        assert_eq!(lines[3], "UNKNOWN OPERATION: FOO");
    }

    #[test]
    fn info_client_lists_rented_products() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.out");

        let mut client = Client::new(1, "Alice", 15);
        client.rent_product(1);

        let mut log = AuditLog::create(&path).unwrap();
        log.info_client(&client, &[Product::new(1, "Drill", 10, 5)])
            .unwrap();
        log.close().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(
            "INFO: Client { id: 1, name: \"Alice\", balance: 15, rented: [(1, 1)] }"
        ));
        assert!(text.contains("INFO:   rented Product { id: 1"));
    }

    #[test]
    fn create_truncates_a_previous_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.out");

        let log = AuditLog::create(&path).unwrap();
        log.close().unwrap();
        let log = AuditLog::create(&path).unwrap();
        log.close().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
