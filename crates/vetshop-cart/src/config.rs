//! # Store Configuration
//!
//! Runtime configuration for the storefront core.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VETSHOP_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use vetshop_core::DEFAULT_ITEMS_PER_PAGE;

/// Storefront configuration.
///
/// Most deployments only ever override the data directory; the page size
/// is a layout decision and rarely changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding persisted state (the cart file lives here).
    pub data_dir: PathBuf,

    /// Products per catalog page.
    pub items_per_page: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: PathBuf::from("data"),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl StoreConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VETSHOP_DATA_DIR`: Override the data directory
    /// - `VETSHOP_ITEMS_PER_PAGE`: Override the catalog page size
    ///
    /// Unparsable values fall back to the default rather than failing
    /// startup.
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(dir) = std::env::var("VETSHOP_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(per_page) = std::env::var("VETSHOP_ITEMS_PER_PAGE") {
            if let Ok(n) = per_page.parse::<usize>() {
                if n > 0 {
                    config.items_per_page = n;
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.items_per_page, 9);
    }
}
