//! # Catalog Filtering & Pagination
//!
//! Pure functions that derive the visible product subset and page slice
//! from the full catalog and the current filter/pagination state.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Derivation Pipeline                          │
//! │                                                                         │
//! │  all products          filter state            pager state              │
//! │  (external)            (from nav params)       (Pager)                  │
//! │       │                      │                      │                   │
//! │       ▼                      ▼                      │                   │
//! │  filter_products(all, &filter) ──► filtered         │                   │
//! │                                       │             ▼                   │
//! │                                       ├──► paginate(filtered, page, n)  │
//! │                                       │                                 │
//! │                                       └──► total_pages(filtered, n)     │
//! │                                                                         │
//! │  Everything re-derivable from inputs; safe to call on every render.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching Rule
//! - neither filter set → all products, order preserved
//! - only sub-category  → match sub-category regardless of category
//! - only category      → match category regardless of sub-category
//! - both               → both must match (logical AND)
//!
//! Comparison goes through [`normalize_label`], so `"Complément"`,
//! `"complement"` and `"COMPLEMENT"` all mean the same thing.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::CatalogError;
use crate::types::Product;
use crate::validation::validate_product;

// =============================================================================
// Label Normalization
// =============================================================================

/// Normalizes a category label for comparison.
///
/// Lower-cases, strips combining diacritical marks (NFD decomposition,
/// then drop U+0300..U+036F), and unifies underscores, spaces and hyphens
/// to a single separator. This lets human labels and backend enum codes
/// compare equal:
///
/// ```rust
/// use vetshop_core::catalog::normalize_label;
///
/// assert_eq!(normalize_label("Complément"), "complement");
/// assert_eq!(normalize_label("TEST_RAPIDE"), normalize_label("Test rapide"));
/// assert_eq!(normalize_label("CHIEN"), normalize_label("Chien"));
/// ```
pub fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(|c| if c == '_' || c.is_whitespace() { '-' } else { c })
        .collect()
}

// =============================================================================
// Catalog Filter
// =============================================================================

/// The current category/sub-category selection.
///
/// Derived externally from navigation query parameters (`?animal=Chien`,
/// `?type=Aliment`); this core only consumes it. An unset field means
/// "don't filter on this axis".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    /// Selected animal category, if any.
    pub category: Option<String>,

    /// Selected product type, if any.
    pub sub_category: Option<String>,
}

impl CatalogFilter {
    /// A filter that matches everything.
    pub fn all() -> Self {
        CatalogFilter::default()
    }

    /// Filters by category only.
    pub fn by_category(category: impl Into<String>) -> Self {
        CatalogFilter {
            category: Some(category.into()),
            sub_category: None,
        }
    }

    /// Filters by sub-category only.
    pub fn by_sub_category(sub_category: impl Into<String>) -> Self {
        CatalogFilter {
            category: None,
            sub_category: Some(sub_category.into()),
        }
    }

    /// Filters by both axes (logical AND).
    pub fn new(
        category: Option<impl Into<String>>,
        sub_category: Option<impl Into<String>>,
    ) -> Self {
        CatalogFilter {
            category: category.map(Into::into),
            sub_category: sub_category.map(Into::into),
        }
    }

    /// Checks whether both axes are unset.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.sub_category.is_none()
    }

    /// Checks whether a product matches this filter.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| normalize_label(c) == normalize_label(&product.category));

        let sub_category_ok = self.sub_category.as_deref().map_or(true, |s| {
            normalize_label(s) == normalize_label(&product.sub_category)
        });

        category_ok && sub_category_ok
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Returns the subsequence of `products` matching `filter`.
///
/// With an empty filter the whole catalog comes back unchanged, order
/// preserved. Filtering an already-filtered list with the same filter
/// returns the same list (idempotent).
pub fn filter_products(products: &[Product], filter: &CatalogFilter) -> Vec<Product> {
    if filter.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

// =============================================================================
// Pagination
// =============================================================================

/// Returns the page slice `[(page-1)*per_page, page*per_page)` of `filtered`.
///
/// Out-of-range bounds silently yield a shorter or empty slice, never an
/// error. Page numbers are 1-based; page 0 yields an empty slice.
pub fn paginate(filtered: &[Product], current_page: usize, items_per_page: usize) -> &[Product] {
    if current_page == 0 || items_per_page == 0 {
        return &[];
    }

    // Checked math: absurd page numbers are just another out-of-range
    // request and must yield an empty slice, not overflow.
    let start = match (current_page - 1).checked_mul(items_per_page) {
        Some(start) if start < filtered.len() => start,
        _ => return &[],
    };

    let end = start.saturating_add(items_per_page).min(filtered.len());
    &filtered[start..end]
}

/// Returns the number of pages: `ceil(len / items_per_page)`, minimum 0.
pub fn total_pages(filtered: &[Product], items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    filtered.len().div_ceil(items_per_page)
}

// =============================================================================
// Pager
// =============================================================================

/// Tracks the current page of the catalog view.
///
/// The pager never clamps on its own: a navigation request outside
/// `1..=total_pages` leaves the current page unchanged (silent rejection).
/// When the filter changes, the caller resets to page 1 via
/// [`Pager::reset`] - that policy lives with the integration, not here,
/// but the reset operation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Current page, 1-based.
    pub current_page: usize,

    /// Page size.
    pub items_per_page: usize,
}

impl Pager {
    /// Creates a pager on page 1 with the given page size.
    pub fn new(items_per_page: usize) -> Self {
        Pager {
            current_page: 1,
            items_per_page,
        }
    }

    /// Navigates to `page` if `1 <= page <= total_pages`; otherwise the
    /// current page is unchanged.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        if page >= 1 && page <= total_pages {
            self.current_page = page;
        }
    }

    /// Advances one page if not already on the last one.
    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to_page(self.current_page + 1, total_pages);
    }

    /// Goes back one page if not already on the first one.
    pub fn previous_page(&mut self, total_pages: usize) {
        if self.current_page > 1 {
            self.go_to_page(self.current_page - 1, total_pages);
        }
    }

    /// Returns to page 1. Called by the integration whenever the filter
    /// changes.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Returns the slice of `filtered` for the current page.
    pub fn page_of<'a>(&self, filtered: &'a [Product]) -> &'a [Product] {
        paginate(filtered, self.current_page, self.items_per_page)
    }

    /// Returns the page count for `filtered` at this pager's page size.
    pub fn total_pages(&self, filtered: &[Product]) -> usize {
        total_pages(filtered, self.items_per_page)
    }

    /// Lists all page numbers, for rendering pagination controls.
    pub fn page_numbers(&self, filtered: &[Product]) -> Vec<usize> {
        (1..=self.total_pages(filtered)).collect()
    }
}

// =============================================================================
// Catalog Intake
// =============================================================================

/// Parses an inbound catalog payload (a JSON array of products).
///
/// A payload that is not a JSON product array is rejected with
/// [`CatalogError::Parse`]. Individually invalid records (empty name,
/// negative price, missing category) are dropped, matching the
/// storefront's tolerance for partially dirty backend data.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let mut products: Vec<Product> = serde_json::from_str(json)?;
    products.retain(|p| validate_product(p).is_ok());
    Ok(products)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: i64, category: &str, sub_category: &str) -> Product {
        Product {
            id,
            name: format!("Produit {id}"),
            price: Money::from_cents(2999),
            image: String::new(),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            description: String::new(),
            in_stock: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Chien", "Aliment"),
            product(2, "Chat", "Complément"),
            product(3, "Chat", "Test rapide"),
            product(4, "Chien", "Complément"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    // -------------------------------------------------------------------------
    // Normalization
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Complément"), "complement");
        assert_eq!(normalize_label("CHIEN"), "chien");
        assert_eq!(normalize_label("Test rapide"), "test-rapide");
        assert_eq!(normalize_label("TEST_RAPIDE"), "test-rapide");
        assert_eq!(normalize_label("Stérilisé"), "sterilise");
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let all = catalog();
        let filtered = filter_products(&all, &CatalogFilter::all());
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_filter_by_category() {
        let filtered = filter_products(&catalog(), &CatalogFilter::by_category("Chien"));
        assert_eq!(ids(&filtered), vec![1, 4]);
    }

    #[test]
    fn test_filter_by_sub_category_diacritic_insensitive() {
        // "complement" without accent, lowercase, still matches "Complément"
        let filtered = filter_products(&catalog(), &CatalogFilter::by_sub_category("complement"));
        assert_eq!(ids(&filtered), vec![2, 4]);
    }

    #[test]
    fn test_filter_both_axes_is_logical_and() {
        let filter = CatalogFilter::new(Some("chat"), Some("complement"));
        let filtered = filter_products(&catalog(), &filter);
        assert_eq!(ids(&filtered), vec![2]);
    }

    #[test]
    fn test_filter_tolerates_backend_enum_codes() {
        let all = vec![product(3, "CHAT", "TEST_RAPIDE")];
        let filter = CatalogFilter::new(Some("Chat"), Some("Test rapide"));
        assert_eq!(ids(&filter_products(&all, &filter)), vec![3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = CatalogFilter::by_category("Chien");
        let once = filter_products(&catalog(), &filter);
        let twice = filter_products(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_matching_nothing() {
        let filtered = filter_products(&catalog(), &CatalogFilter::by_category("Lapin"));
        assert!(filtered.is_empty());
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    fn n_products(n: i64) -> Vec<Product> {
        (1..=n).map(|id| product(id, "Chien", "Aliment")).collect()
    }

    #[test]
    fn test_paginate_slices_by_page() {
        let all = n_products(20);
        assert_eq!(ids(paginate(&all, 1, 9)), (1..=9).collect::<Vec<_>>());
        assert_eq!(ids(paginate(&all, 2, 9)), (10..=18).collect::<Vec<_>>());
        assert_eq!(ids(paginate(&all, 3, 9)), vec![19, 20]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let all = n_products(9);
        // Exactly one full page: page 2 is past the end
        assert!(paginate(&all, 2, 9).is_empty());
        assert!(paginate(&all, 99, 9).is_empty());
        assert!(paginate(&all, 0, 9).is_empty());
        assert!(paginate(&[], 1, 9).is_empty());
    }

    #[test]
    fn test_paginate_extreme_bounds_are_empty() {
        let all = n_products(9);
        // Page/size combinations whose start index would overflow still
        // count as out of range, never as a panic or a wrapped-around slice
        assert!(paginate(&all, usize::MAX, 9).is_empty());
        assert!(paginate(&all, usize::MAX, usize::MAX).is_empty());
        assert_eq!(ids(paginate(&all, 1, usize::MAX)), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(&n_products(9), 9), 1);
        assert_eq!(total_pages(&n_products(10), 9), 2);
        assert_eq!(total_pages(&n_products(1), 9), 1);
        assert_eq!(total_pages(&[], 9), 0);
        assert_eq!(total_pages(&n_products(5), 0), 0);
    }

    #[test]
    fn test_pager_rejects_out_of_range_silently() {
        let mut pager = Pager::new(9);
        pager.go_to_page(2, 3);
        assert_eq!(pager.current_page, 2);

        pager.go_to_page(0, 3);
        assert_eq!(pager.current_page, 2);

        pager.go_to_page(4, 3);
        assert_eq!(pager.current_page, 2);
    }

    #[test]
    fn test_pager_next_previous() {
        let mut pager = Pager::new(9);
        pager.next_page(3);
        pager.next_page(3);
        assert_eq!(pager.current_page, 3);

        // Already on the last page
        pager.next_page(3);
        assert_eq!(pager.current_page, 3);

        pager.previous_page(3);
        assert_eq!(pager.current_page, 2);

        pager.reset();
        assert_eq!(pager.current_page, 1);
        pager.previous_page(3);
        assert_eq!(pager.current_page, 1);
    }

    #[test]
    fn test_pager_page_of_and_numbers() {
        let all = n_products(12);
        let mut pager = Pager::new(9);

        assert_eq!(pager.page_numbers(&all), vec![1, 2]);
        pager.go_to_page(2, pager.total_pages(&all));
        assert_eq!(ids(pager.page_of(&all)), vec![10, 11, 12]);

        // Empty catalog: zero pages, empty slice for any page
        assert_eq!(pager.total_pages(&[]), 0);
        assert!(pager.page_of(&[]).is_empty());
    }

    // -------------------------------------------------------------------------
    // Catalog Intake
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_catalog() {
        let payload = r#"[
            {"id": 1, "name": "Croquettes Premium Chien Adulte", "price": 4599,
             "image": "/assets/images/croquettes-chien.jpg", "category": "CHIEN",
             "subCategory": "ALIMENT", "description": "Croquettes haute qualité",
             "inStock": true},
            {"id": 2, "name": "", "price": 2999, "image": "",
             "category": "CHAT", "subCategory": "COMPLEMENT",
             "description": "nom manquant", "inStock": true},
            {"id": 3, "name": "Test Rapide FIV/FeLV", "price": -1, "image": "",
             "category": "CHAT", "subCategory": "TEST_RAPIDE",
             "description": "prix négatif", "inStock": false}
        ]"#;

        // Records 2 and 3 are invalid and silently dropped
        let products = parse_catalog(payload).unwrap();
        assert_eq!(ids(&products), vec![1]);
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_payload() {
        assert!(parse_catalog("{ not json").is_err());
        assert!(parse_catalog(r#"{"id": 1}"#).is_err());
    }
}
