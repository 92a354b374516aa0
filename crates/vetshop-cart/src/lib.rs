//! # vetshop-cart: Cart Store & Persistence Port
//!
//! This crate turns the pure [`vetshop_core::Cart`] aggregate into the
//! single source of truth every page shares: a store that broadcasts each
//! mutation to all observers and mirrors the cart into persistent storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vetshop Data Flow                                │
//! │                                                                         │
//! │  Page event (add to cart, change quantity, ...)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   vetshop-cart (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   CartStore   │    │  CartStorage  │    │  StoreConfig │  │   │
//! │  │   │  (store.rs)   │    │ (storage.rs)  │    │ (config.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Mutex<Cart>   │───►│ JsonFile /    │    │ data dir,    │  │   │
//! │  │   │ watch signals │    │ Memory        │    │ page size    │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │                                                     │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              │ watch::Receiver (items, count)                           │
//! │              ▼                                                          │
//! │  Every subscribed view re-renders with the latest snapshot              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `CartStore`: mutations, broadcast, write-through persistence
//! - [`storage`] - `CartStorage` port with file and in-memory backends
//! - [`config`] - `StoreConfig` (defaults + `VETSHOP_*` env overrides)
//! - [`error`] - `StorageError`
//!
//! ## Usage
//!
//! ```rust
//! use vetshop_cart::CartStore;
//! use vetshop_core::{Money, Product};
//!
//! let store = CartStore::in_memory();
//! let mut count = store.subscribe_count();
//! assert_eq!(*count.borrow(), 0); // latest value replayed immediately
//!
//! let product = Product {
//!     id: 1,
//!     name: "Croquettes Premium Chien Adulte".to_string(),
//!     price: Money::from_cents(4599),
//!     image: "/assets/images/croquettes-chien.jpg".to_string(),
//!     category: "Chien".to_string(),
//!     sub_category: "Aliment".to_string(),
//!     description: String::new(),
//!     in_stock: true,
//! };
//!
//! store.add_to_cart(&product);
//! store.add_to_cart(&product);
//! assert_eq!(*count.borrow(), 2);
//! assert_eq!(store.total(), Money::from_cents(9198));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::StorageError;
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, CART_STORAGE_KEY};
pub use store::CartStore;
