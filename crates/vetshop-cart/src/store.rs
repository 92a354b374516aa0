//! # Cart Store
//!
//! The single source of truth for cart contents, shared by every page
//! that displays or mutates the cart.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Page Action              Store Method            State Change          │
//! │  ───────────              ────────────            ────────────          │
//! │                                                                         │
//! │  Click Product ──────────► add_to_cart() ───────► qty += 1 / insert    │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ───► qty = n / remove     │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► drop line            │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ────────► empty cart           │
//! │                                                                         │
//! │  After EVERY mutation, in this order:                                   │
//! │    1. in-memory cart updated (under the mutex)                          │
//! │    2. item collection + summed count broadcast to all subscribers       │
//! │    3. full item set written through to storage                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Broadcast Contract
//! The two `watch` channels behave like broadcast variables: a new
//! subscriber immediately observes the current value, then every
//! subsequent one, in mutation order. Notification is synchronous with
//! the mutation - a reader that subscribes after `add_to_cart` returns
//! can never see the pre-mutation snapshot.
//!
//! ## Thread Safety
//! The cart lives in a `Mutex` because pages share one store instance.
//! There is exactly one logical writer (the UI event loop), so a plain
//! `Mutex` rather than `RwLock` keeps things simple; operations are quick.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::{debug, warn};

use vetshop_core::{Cart, CartItem, Money, Product};

use crate::config::StoreConfig;
use crate::storage::{CartStorage, JsonFileStorage, MemoryStorage};

// =============================================================================
// Cart Store
// =============================================================================

/// Reactive, persistent cart store.
///
/// Exactly one instance per running session, constructed explicitly and
/// handed to consumers (no global state). Cheap to share via [`Arc`].
pub struct CartStore {
    cart: Mutex<Cart>,
    storage: Arc<dyn CartStorage>,
    items_tx: watch::Sender<Vec<CartItem>>,
    count_tx: watch::Sender<u32>,
}

impl CartStore {
    /// Creates a store backed by the given storage.
    ///
    /// Attempts to load the persisted item set; a missing or malformed
    /// payload yields an empty cart. Corrupt storage is treated as
    /// absence, not as an error - the warn log is the only trace of it.
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        let cart = match storage.load() {
            Ok(Some(items)) => {
                debug!(lines = items.len(), "restored persisted cart");
                Cart::from_items(items)
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "could not restore persisted cart, starting empty");
                Cart::new()
            }
        };

        let (items_tx, _) = watch::channel(cart.items().to_vec());
        let (count_tx, _) = watch::channel(cart.total_quantity());

        CartStore {
            cart: Mutex::new(cart),
            storage,
            items_tx,
            count_tx,
        }
    }

    /// Creates a store persisting to `<data_dir>/cart.json` per the config.
    pub fn from_config(config: &StoreConfig) -> Self {
        CartStore::new(Arc::new(JsonFileStorage::new(&config.data_dir)))
    }

    /// Creates a store with in-memory storage (tests, demos).
    pub fn in_memory() -> Self {
        CartStore::new(Arc::new(MemoryStorage::new()))
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product to the cart, or increments its quantity by 1 if a
    /// line with the same product id already exists.
    pub fn add_to_cart(&self, product: &Product) {
        debug!(product_id = product.id, name = %product.name, "add_to_cart");

        let mut cart = self.lock();
        cart.add_product(product);
        self.publish(&cart);
    }

    /// Removes the line with the given product id. No-op if absent.
    pub fn remove_from_cart(&self, product_id: i64) {
        debug!(product_id, "remove_from_cart");

        let mut cart = self.lock();
        cart.remove(product_id);
        self.publish(&cart);
    }

    /// Sets the quantity of a line; `quantity <= 0` removes it instead.
    /// No-op if the line does not exist.
    pub fn update_quantity(&self, product_id: i64, quantity: i64) {
        debug!(product_id, quantity, "update_quantity");

        let mut cart = self.lock();
        cart.update_quantity(product_id, quantity);
        self.publish(&cart);
    }

    /// Empties the cart.
    ///
    /// Also called by the session layer when credentials are cleared on
    /// logout, so a shared machine never shows the previous user's cart.
    pub fn clear_cart(&self) {
        debug!("clear_cart");

        let mut cart = self.lock();
        cart.clear();
        self.publish(&cart);
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Returns a snapshot of the current cart lines.
    ///
    /// A copy, so consumers can never mutate shared state through it.
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().items().to_vec()
    }

    /// Returns the summed quantity across all lines (the badge number).
    pub fn count(&self) -> u32 {
        self.lock().total_quantity()
    }

    /// Checks whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Calculates the cart total: Σ unit price × quantity.
    ///
    /// Computed fresh on each call, never cached, so it reflects the
    /// latest state even between notifications.
    pub fn total(&self) -> Money {
        self.lock().total()
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Subscribes to the full item collection.
    ///
    /// The receiver immediately holds the current snapshot and observes
    /// every subsequent mutation in order.
    pub fn subscribe_items(&self) -> watch::Receiver<Vec<CartItem>> {
        self.items_tx.subscribe()
    }

    /// Subscribes to the item-count signal (sum of quantities).
    pub fn subscribe_count(&self) -> watch::Receiver<u32> {
        self.count_tx.subscribe()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().expect("cart mutex poisoned")
    }

    /// Broadcasts the post-mutation state and writes it through to storage.
    ///
    /// Runs while the mutex is still held so subscribers and storage see
    /// mutations in the order they were applied. A failed save is logged
    /// and otherwise ignored: the in-memory cart stays authoritative for
    /// the rest of the session.
    fn publish(&self, cart: &Cart) {
        self.items_tx.send_replace(cart.items().to_vec());
        self.count_tx.send_replace(cart.total_quantity());

        if let Err(e) = self.storage.save(cart.items()) {
            warn!(error = %e, "could not persist cart, keeping in-memory state");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lock().line_count())
            .field("count", &self.count())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
