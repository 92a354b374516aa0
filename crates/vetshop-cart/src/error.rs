//! # Storage Error Types
//!
//! Error types for the persistence port.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  I/O or JSON error (std::io::Error, serde_json::Error)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore swallows it:                                                 │
//! │    • load failure  → warn! + empty cart                                 │
//! │    • save failure  → warn! + in-memory state stays authoritative        │
//! │                                                                         │
//! │  Nothing reaches the UI layer. The storefront degrades silently.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence port errors.
///
/// Custom `CartStorage` implementations map their failures onto these
/// variants; the store logs them and carries on with in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the storage medium failed.
    ///
    /// ## When This Occurs
    /// - Data directory not writable
    /// - Disk full (the local-storage quota analog)
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored payload is not a valid cart item array.
    ///
    /// ## When This Occurs
    /// - Hand-edited or truncated cart file
    /// - Payload written by an incompatible schema version
    #[error("malformed cart payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = StorageError::from(io);
        assert_eq!(err.to_string(), "storage I/O failed: read-only");

        let parse = serde_json::from_str::<Vec<i32>>("nope").unwrap_err();
        let err = StorageError::from(parse);
        assert!(err.to_string().starts_with("malformed cart payload"));
    }
}
