//! # Store Error Types
//!
//! Error types for record-file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (seek, read, write, metadata)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the entity/identifier context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  prodrent-engine:                                                       │
//! │  ├── InvalidId  → named refusal event in the audit log                 │
//! │  └── Io         → fatal at open/close, downgraded to the               │
//! │                   unknown-operation event at the per-line boundary     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Record-file operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier falls outside `[1, record_count]`.
    ///
    /// Always recoverable by the caller; the movement processor surfaces it
    /// as a named refusal carrying the offending id.
    #[error("invalid {entity} id: {id}")]
    InvalidId { entity: &'static str, id: i64 },

    /// Underlying file I/O failed.
    #[error("record file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_message_names_the_entity() {
        let err = StoreError::InvalidId {
            entity: "client",
            id: 9,
        };
        assert_eq!(err.to_string(), "invalid client id: 9");
    }
}
