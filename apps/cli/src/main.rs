//! # ProdRent Command-Line Entry Point
//!
//! Replays a movements file against the two record databases and writes the
//! audit log.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (operational logging, `RUST_LOG` controlled)
//! 2. Resolve the movements and audit-log file names (positional arguments,
//!    or interactive prompts when absent)
//! 3. Open the movements reader, the audit log, and both record stores
//! 4. Reset both stores - every run starts from an empty database
//! 5. Process every movement line
//! 6. Close everything; open/close failures are fatal, per-line failures
//!    never are
//!
//! ## Usage
//! ```text
//! prodrent movements.txt run.out
//! prodrent                  # prompts for both file names
//! ```
//!
//! The record databases default to `productsDB.dat` / `clientsDB.dat` in the
//! working directory, overridable via `PRODRENT_PRODUCTS_DB` /
//! `PRODRENT_CLIENTS_DB`.

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use prodrent_engine::{AuditLog, EngineError, MovementProcessor};
use prodrent_store::{ClientStore, ProductStore};

/// Default product record database.
const PRODUCTS_DB: &str = "productsDB.dat";

/// Default client record database.
const CLIENTS_DB: &str = "clientsDB.dat";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), EngineError> {
    let mut args = env::args().skip(1);
    let (movements_path, log_path) = match (args.next(), args.next()) {
        (Some(movements), Some(log)) => (movements, log),
        _ => (
            prompt("Movements file name (.txt): ")?,
            prompt("Audit log file name (.out): ")?,
        ),
    };

    let products_db =
        env::var("PRODRENT_PRODUCTS_DB").unwrap_or_else(|_| PRODUCTS_DB.to_string());
    let clients_db = env::var("PRODRENT_CLIENTS_DB").unwrap_or_else(|_| CLIENTS_DB.to_string());

    info!(%movements_path, %log_path, %products_db, %clients_db, "starting run");

    let movements = BufReader::new(File::open(&movements_path)?);
    let log = AuditLog::create(&log_path)?;
    let clients = ClientStore::open(&clients_db)?;
    let products = ProductStore::open(&products_db)?;

    // If anything below fails, dropping the processor still releases every
    // file handle; the explicit close exists to surface flush failures
    let mut processor = MovementProcessor::new(clients, products, log);
    processor.reset_stores()?;
    processor.run(movements)?;
    processor.close()?;

    info!("run complete");
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
