//! # Cart Aggregate
//!
//! The pure in-memory shopping cart: a keyed mapping from product id to
//! cart line, with the quantity rules of the storefront.
//!
//! ## Mutation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Mutation Rules                               │
//! │                                                                         │
//! │  add_product(p)          p.id in cart?  ──► quantity += 1               │
//! │                          otherwise      ──► insert line, quantity 1     │
//! │                                                                         │
//! │  update_quantity(id, q)  q <= 0         ──► remove line                 │
//! │                          q > 0, present ──► quantity = q                │
//! │                          id absent      ──► no-op                       │
//! │                                                                         │
//! │  remove(id)              id absent      ──► no-op (NOT an error)        │
//! │                                                                         │
//! │  clear()                 always         ──► empty cart                  │
//! │                                                                         │
//! │  Nothing here ever fails: every bad input degrades to "no effect".      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This module is pure state + math. Persistence and change notification
//! live in the `vetshop-cart` crate, which owns exactly one `Cart` per
//! running session and funnels every mutation through it.

use crate::money::Money;
use crate::types::{CartItem, Product};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id (adding the same product increments
///   its quantity)
/// - Every line's quantity is >= 1 (a quantity that would reach 0 removes
///   the line instead)
///
/// Line order is insertion order, but nothing in the contract depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from previously persisted lines.
    ///
    /// Lines with a zero quantity are discarded so a hand-edited or stale
    /// payload cannot violate the quantity invariant.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Cart { items };
        cart.items.retain(|i| i.quantity >= 1);
        cart
    }

    /// Adds a product to the cart or increments its quantity if present.
    pub fn add_product(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::from_product(product));
        }
    }

    /// Removes the line with the given product id.
    ///
    /// Removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, product_id: i64) {
        self.items.retain(|i| i.id != product_id);
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line (same as [`Cart::remove`])
    /// - `quantity > 0` and line present: sets the quantity exactly
    /// - line absent: no-op
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == product_id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the cart lines.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    ///
    /// This is the badge number next to the cart icon.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the cart total: Σ unit price × quantity.
    ///
    /// Computed fresh on every call so it always reflects the current
    /// lines, never a cached value.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Produit {id}"),
            price: Money::from_cents(price_cents),
            image: format!("/assets/images/produit-{id}.jpg"),
            category: "Chien".to_string(),
            sub_category: "Aliment".to_string(),
            description: String::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_add_product() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 4599));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total(), Money::from_cents(4599));
    }

    #[test]
    fn test_repeated_add_increments_single_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 4599);

        for _ in 0..5 {
            cart.add_product(&product);
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 4599));

        cart.update_quantity(1, 4);
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.total(), Money::from_cents(4 * 4599));
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 4599));
        cart.update_quantity(1, 0);
        assert!(cart.is_empty());

        cart.add_product(&test_product(1, 4599));
        cart.update_quantity(1, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_mutations_on_absent_id_are_noops() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 4599));

        cart.remove(99);
        cart.update_quantity(99, 3);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_total_reflects_mutation_history() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 4599));
        cart.add_product(&test_product(2, 2999));
        cart.add_product(&test_product(2, 2999));
        cart.update_quantity(1, 3);
        cart.remove(2);
        cart.add_product(&test_product(3, 3550));

        // 3 × 45,99 + 1 × 35,50
        assert_eq!(cart.total(), Money::from_cents(3 * 4599 + 3550));
        assert_eq!(cart.total_quantity(), 4);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 4599));
        cart.add_product(&test_product(2, 2999));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_from_items_drops_zero_quantity_lines() {
        let mut stale = CartItem::from_product(&test_product(1, 4599));
        stale.quantity = 0;
        let good = CartItem::from_product(&test_product(2, 2999));

        let cart = Cart::from_items(vec![stale, good.clone()]);
        assert_eq!(cart.items(), &[good]);
    }
}
