//! # prodrent-engine: Movement Processing for ProdRent
//!
//! Parses text movement lines, applies the rent/return business rules
//! against the two record stores, and reports every outcome to the audit
//! log.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Movement Line                                │
//! │                                                                         │
//! │  "ALQUILAR, 1, 2"                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Movement::parse ──► Movement::Rent { client_id: 1, product_id: 2 }    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MovementProcessor                                                      │
//! │  ├── validity checks against both stores (ordered, no mutation on      │
//! │  │   failure)                                                           │
//! │  ├── entity mutations (roster, balance, stock)                         │
//! │  └── paired write-back: client record, then product record             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AuditLog: "OK: rent ..." or "ERROR: <named refusal>"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`movement`]  - the movement command vocabulary and its parser
//! - [`processor`] - the movement processor (rent/return rules live here)
//! - [`log`]       - the plain-text audit log writer
//! - [`error`]     - refusal taxonomy and run-fatal errors

pub mod error;
pub mod log;
pub mod movement;
pub mod processor;

pub use error::{EngineError, Refusal};
pub use log::AuditLog;
pub use movement::{Movement, ParseError};
pub use processor::MovementProcessor;
