//! # Validation Module
//!
//! Catalog intake validation.
//!
//! ## Where This Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Placement                               │
//! │                                                                         │
//! │  Backend product JSON                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog::parse_catalog                                                 │
//! │       ├── serde deserialization (type/shape errors → CatalogError)      │
//! │       └── THIS MODULE: per-record business checks                       │
//! │              │                                                          │
//! │              └── invalid record → dropped, valid records kept           │
//! │                                                                         │
//! │  Cart mutations do NOT validate: their bad inputs are defined to be     │
//! │  no-ops (quantity <= 0 removes, absent id ignored), never errors.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Product;

/// Maximum product name length accepted from the backend.
const MAX_NAME_LEN: usize = 200;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// Zero is allowed (promotional items); negative is not.
pub fn validate_price(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(())
}

/// Validates a category or sub-category value.
///
/// The value is opaque (label or backend code), but it must exist:
/// filtering has nothing to match against otherwise.
pub fn validate_category(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(())
}

/// Validates a whole inbound product record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_name(&product.name)?;
    validate_price(product.price.cents())?;
    validate_category("category", &product.category)?;
    validate_category("subCategory", &product.sub_category)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
