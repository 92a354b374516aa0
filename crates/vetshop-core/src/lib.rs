//! # vetshop-core: Pure Business Logic for the Vetshop Storefront
//!
//! This crate is the **heart** of the veterinary storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Vetshop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Page / UI Layer (external)                     │   │
//! │  │    Catalog page ──► Cart drawer ──► Checkout (out of scope)    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vetshop-cart (store layer)                   │   │
//! │  │    CartStore, CartStorage port, JsonFileStorage                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vetshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  filters  │  │   │
//! │  │   │  CartItem │  │  (cents)  │  │  (keyed)  │  │  paging   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart aggregate (keyed mapping with quantity rules)
//! - [`catalog`] - Category filtering, pagination, catalog intake
//! - [`labels`] - Backend enum code → display label mapping
//! - [`validation`] - Catalog intake validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Persistence, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Silent Degradation**: Cart mutations on absent items are no-ops, never errors
//!
//! ## Example Usage
//!
//! ```rust
//! use vetshop_core::catalog::{filter_products, total_pages, CatalogFilter};
//! use vetshop_core::money::Money;
//!
//! // Prices are cents, never floats
//! let price = Money::from_cents(4599); // 45,99 €
//! assert_eq!(price.to_string(), "45,99 €");
//!
//! // Filters match case- and diacritic-insensitively
//! let filter = CatalogFilter::by_sub_category("complement");
//! let visible = filter_products(&[], &filter);
//! assert!(visible.is_empty());
//! assert_eq!(total_pages(&visible, 9), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod labels;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vetshop_core::Money` instead of
// `use vetshop_core::money::Money`

pub use cart::Cart;
pub use catalog::{CatalogFilter, Pager};
pub use error::{CatalogError, ValidationError};
pub use money::Money;
pub use types::{CartItem, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of products shown per catalog page.
///
/// ## Why 9?
/// The catalog grid renders three columns; three full rows per page keeps
/// the pagination controls above the fold on the reference layout.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;
