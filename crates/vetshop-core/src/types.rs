//! # Domain Types
//!
//! Core domain types for the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │    Product      │  add   │    CartItem     │                         │
//! │  │  ─────────────  │ ─────► │  ─────────────  │                         │
//! │  │  id (i64)       │        │  id (i64)       │                         │
//! │  │  name           │        │  name (frozen)  │                         │
//! │  │  price (Money)  │        │  price (frozen) │                         │
//! │  │  category       │        │  quantity ≥ 1   │                         │
//! │  │  sub_category   │        │  category       │                         │
//! │  │  in_stock       │        │  sub_category   │                         │
//! │  └─────────────────┘        └─────────────────┘                         │
//! │                                                                         │
//! │  Products come from an external catalog source and are read-only.       │
//! │  CartItems copy the product's display fields at add time.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Both types serialize with camelCase field names so the persisted cart
//! payload and the inbound catalog JSON read:
//! `{ "id": 1, "name": "...", "price": 4599, "quantity": 2, "image": "...",
//!    "category": "Chien", "subCategory": "Aliment" }`

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Supplied externally (HTTP collaborator or fixture data); read-only to
/// this core. `category` and `sub_category` are opaque strings: the backend
/// sends enum-style codes (`"CHIEN"`, `"TEST_RAPIDE"`) while fixtures carry
/// human labels (`"Chien"`, `"Test rapide"`). Filtering normalizes both,
/// see [`crate::catalog::normalize_label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Price in cents.
    pub price: Money,

    /// Image reference (path or URL), passed through to the UI layer.
    pub image: String,

    /// Animal category ("Chien", "Chat", or backend codes thereof).
    pub category: String,

    /// Product type ("Aliment", "Complément", "Test rapide", or codes).
    pub sub_category: String,

    /// Short description shown on the product card.
    pub description: String,

    /// Whether the product can currently be ordered.
    pub in_stock: bool,
}

// =============================================================================
// Cart Item
// =============================================================================

/// One line of the shopping cart.
///
/// ## Design Notes
/// - `id` is the product id and the unique key: at most one CartItem per
///   product, adding the same product again increments `quantity`.
/// - Display fields are frozen copies taken when the item is first added,
///   so the cart keeps rendering consistently even if the catalog record
///   changes afterwards.
///
/// ## Invariant
/// `quantity >= 1`. A mutation that would drop the quantity to zero or
/// below removes the item instead (enforced by [`crate::cart::Cart`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id (unique key within the cart).
    pub id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub price: Money,

    /// Quantity in cart, always >= 1.
    pub quantity: u32,

    /// Image reference at time of adding (frozen).
    pub image: String,

    /// Animal category at time of adding (frozen).
    pub category: String,

    /// Product type at time of adding (frozen).
    pub sub_category: String,
}

impl CartItem {
    /// Creates a cart item from a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            image: product.image.clone(),
            category: product.category.clone(),
            sub_category: product.sub_category.clone(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
