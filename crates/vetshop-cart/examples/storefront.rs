//! End-to-end walkthrough of the storefront core: parse a catalog, filter
//! and paginate it, then drive the cart store and watch the signals move.
//!
//! ```text
//! RUST_LOG=debug cargo run -p vetshop-cart --example storefront
//! ```

use vetshop_cart::{CartStore, StoreConfig};
use vetshop_core::catalog::{self, CatalogFilter, Pager};
use vetshop_core::labels;

const CATALOG_JSON: &str = r#"[
    {"id": 1, "name": "Croquettes Premium Chien Adulte", "price": 4599,
     "image": "/assets/images/croquettes-chien.jpg", "category": "CHIEN",
     "subCategory": "ALIMENT", "description": "Croquettes haute qualité pour chien adulte",
     "inStock": true},
    {"id": 2, "name": "Complément Vitaminé Chat", "price": 2999,
     "image": "/assets/images/vitamines-chat.jpg", "category": "CHAT",
     "subCategory": "COMPLEMENT", "description": "Vitamines essentielles pour chat",
     "inStock": true},
    {"id": 3, "name": "Test Rapide FIV/FeLV", "price": 3550,
     "image": "/assets/images/test-fiv.jpg", "category": "CHAT",
     "subCategory": "TEST_RAPIDE", "description": "Test de dépistage rapide",
     "inStock": false},
    {"id": 4, "name": "Pâtée Premium Chien Senior", "price": 3899,
     "image": "/assets/images/patee-chien.jpg", "category": "CHIEN",
     "subCategory": "ALIMENT", "description": "Alimentation adaptée aux chiens âgés",
     "inStock": true},
    {"id": 5, "name": "Probiotiques Chat Digestif", "price": 4200,
     "image": "/assets/images/probiotiques.jpg", "category": "CHAT",
     "subCategory": "COMPLEMENT", "description": "Soutien de la flore intestinale",
     "inStock": true}
]"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = StoreConfig::from_env();
    let store = CartStore::from_config(&config);

    // Catalog intake, the way the product page receives backend data
    let all_products = catalog::parse_catalog(CATALOG_JSON).expect("demo catalog is valid");
    println!("catalog: {} products", all_products.len());

    // Filter by sub-category, accent-free the way a query param arrives
    let filter = CatalogFilter::by_sub_category("complement");
    let filtered = catalog::filter_products(&all_products, &filter);
    let mut pager = Pager::new(config.items_per_page);
    pager.reset(); // filter changed

    println!(
        "filtered: {} products over {} page(s)",
        filtered.len(),
        pager.total_pages(&filtered)
    );
    for product in pager.page_of(&filtered) {
        println!(
            "  [{}/{}] {} - {}",
            labels::category_label(&product.category),
            labels::sub_category_label(&product.sub_category),
            product.name,
            product.price
        );
    }

    // Drive the cart and observe the count signal
    let count = store.subscribe_count();
    for product in &filtered {
        store.add_to_cart(product);
    }
    if let Some(first) = filtered.first() {
        store.update_quantity(first.id, 3);
    }

    println!(
        "cart: {} item(s), total {}",
        *count.borrow(),
        store.total()
    );
}
