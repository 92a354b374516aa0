//! # Cart Storage Port
//!
//! The persistence abstraction behind the cart store.
//!
//! ## Why a Port?
//! The original storefront wrote the cart straight into browser local
//! storage - persistence by side channel. Here the medium hides behind a
//! small trait so it is swappable (file, memory, embedded KV store)
//! without touching store logic.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storage Layout                                    │
//! │                                                                         │
//! │  CartStore ──► dyn CartStorage                                          │
//! │                   │                                                     │
//! │         ┌─────────┴──────────┐                                          │
//! │         ▼                    ▼                                          │
//! │  JsonFileStorage       MemoryStorage                                    │
//! │  <data>/cart.json      Mutex<Option<String>>                            │
//! │  (survives restart)    (one string slot, like localStorage)             │
//! │                                                                         │
//! │  Payload: JSON array of CartItem, camelCase fields                      │
//! │  [{"id":1,"name":"...","price":4599,"quantity":2,"image":"...",         │
//! │    "category":"Chien","subCategory":"Aliment"}]                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No schema version is stored; a future payload change must either
//! tolerate missing fields or move to a new key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use vetshop_core::CartItem;

use crate::error::StorageError;

/// Fixed key under which the cart is persisted.
///
/// For [`JsonFileStorage`] this becomes the file name `cart.json`.
pub const CART_STORAGE_KEY: &str = "cart";

// =============================================================================
// Port
// =============================================================================

/// Load/save port for the serialized cart item set.
///
/// ## Contract
/// - `load` returns `Ok(None)` when nothing was ever stored; a present but
///   unreadable payload is an `Err` (the store maps both to an empty cart)
/// - `save` replaces the whole set atomically from the caller's view:
///   the store always writes the full item list, never a delta
pub trait CartStorage: Send + Sync {
    /// Loads the persisted item set, if any.
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError>;

    /// Persists the full item set under the fixed key.
    fn save(&self, items: &[CartItem]) -> Result<(), StorageError>;
}

// =============================================================================
// File Backend
// =============================================================================

/// File-backed storage: one JSON file per cart, `<dir>/cart.json`.
///
/// The stand-in for browser local storage on the desktop/server side.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at `dir`. The directory is created lazily
    /// on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        JsonFileStorage {
            path: dir.as_ref().join(format!("{CART_STORAGE_KEY}.json")),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let items = serde_json::from_str(&raw)?;
        Ok(Some(items))
    }

    fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string(items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// In-memory storage: a single string slot, mirroring how browser local
/// storage holds one serialized value per key.
///
/// Used by tests and as the backend of [`crate::CartStore::in_memory`].
/// Keeping the slot as a *string* (not a parsed `Vec`) means the
/// serialize/deserialize path is exercised exactly like the file backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Creates a storage pre-seeded with a raw payload.
    ///
    /// Lets tests plant a malformed payload and assert the store treats
    /// it as absence.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemoryStorage {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Returns the raw stored payload, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().expect("storage mutex poisoned").clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        let slot = self.slot.lock().expect("storage mutex poisoned");
        match slot.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        *self.slot.lock().expect("storage mutex poisoned") = Some(raw);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vetshop_core::{Money, Product};

    fn item(id: i64, quantity: u32) -> CartItem {
        let product = Product {
            id,
            name: format!("Produit {id}"),
            price: Money::from_cents(4599),
            image: String::new(),
            category: "Chien".to_string(),
            sub_category: "Aliment".to_string(),
            description: String::new(),
            in_stock: true,
        };
        let mut item = CartItem::from_product(&product);
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        assert!(storage.load().unwrap().is_none());

        let items = vec![item(1, 2), item(2, 1)];
        storage.save(&items).unwrap();

        assert_eq!(storage.load().unwrap(), Some(items));
        assert!(storage.path().ends_with("cart.json"));
    }

    #[test]
    fn test_file_storage_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested/data"));

        storage.save(&[item(1, 1)]).unwrap();
        assert_eq!(storage.load().unwrap().map(|i| i.len()), Some(1));
    }

    #[test]
    fn test_file_storage_rejects_corrupt_payload() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        fs::write(storage.path(), "{ definitely not a cart").unwrap();
        assert!(matches!(
            storage.load(),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let items = vec![item(1, 3)];
        storage.save(&items).unwrap();
        assert_eq!(storage.load().unwrap(), Some(items));

        // The slot holds the documented wire format
        let raw = storage.raw().unwrap();
        assert!(raw.contains("\"subCategory\":\"Aliment\""));
        assert!(raw.contains("\"quantity\":3"));
    }

    #[test]
    fn test_memory_storage_with_raw_corrupt() {
        let storage = MemoryStorage::with_raw("not json at all");
        assert!(matches!(
            storage.load(),
            Err(StorageError::Serialization(_))
        ));
    }
}
