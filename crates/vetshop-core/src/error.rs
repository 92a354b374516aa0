//! # Error Types
//!
//! Domain-specific error types for vetshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vetshop-core errors (this file)                                        │
//! │  ├── ValidationError  - Catalog record validation failures              │
//! │  └── CatalogError     - Inbound catalog payload failures                │
//! │                                                                         │
//! │  vetshop-cart errors (separate crate)                                   │
//! │  └── StorageError     - Persistence port failures                       │
//! │                                                                         │
//! │  Note: cart MUTATIONS never error. Removing an absent item, paging      │
//! │  out of range, or loading a corrupt cart all degrade to no-ops per      │
//! │  the storefront's silent-degradation contract.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog record validation errors.
///
/// These occur when an inbound product record doesn't meet requirements.
/// Invalid records are dropped during catalog intake; the error carries
/// enough context to log which record was skipped and why.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised while parsing an inbound catalog payload.
///
/// The product list arrives from an external HTTP collaborator as a JSON
/// array. A payload that is not valid JSON (or not an array of products)
/// is rejected wholesale; individually invalid records are merely dropped.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload is not a valid JSON product array.
    #[error("invalid catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
