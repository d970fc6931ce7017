//! # Item Repository
//!
//! An in-memory `ItemRepository`.
//!
//! ## Locking
//! ```text
//! insert_many ──► write lock ──► overwrite by SKU
//! select_one  ──► read lock  ──► clone out
//!
//! Poisoned lock ──► CheckoutError::Internal (never a silent miss)
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, error};

use till_core::{CheckoutError, Item, ItemRepository, Output};

/// Items keyed by SKU, held for the life of the process.
///
/// ## Usage
/// ```rust
/// use till_core::{Item, ItemRepository};
/// use till_store::MemoryItemRepository;
///
/// let repo = MemoryItemRepository::new();
/// repo.insert_many(vec![Item::new("t01", "Toothbrush", 199)]);
///
/// assert_eq!(repo.select_one("t01").data.map(|i| i.price_cents), Some(199));
/// assert!(repo.select_one("zz99").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    items: RwLock<HashMap<String, Item>>,
}

impl MemoryItemRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `items` (later duplicates win).
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let map = items
            .into_iter()
            .map(|item| (item.sku.clone(), item))
            .collect();

        MemoryItemRepository {
            items: RwLock::new(map),
        }
    }

    /// Number of distinct SKUs stored.
    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored SKUs, sorted.
    pub fn skus(&self) -> Vec<String> {
        let mut skus: Vec<String> = self
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        skus.sort();
        skus
    }
}

impl ItemRepository for MemoryItemRepository {
    fn insert_many(&self, items: Vec<Item>) -> Output<bool> {
        let mut map = match self.items.write() {
            Ok(map) => map,
            Err(_) => {
                error!("Item repository lock poisoned during insert");
                return Output::failed(false, CheckoutError::internal("item repository lock poisoned"));
            }
        };

        let count = items.len();
        for item in items {
            let sku = item.sku.clone();
            if map.insert(sku.clone(), item).is_some() {
                debug!(sku = %sku, "Overwrote existing item");
            }
        }

        debug!(inserted = count, total = map.len(), "Items inserted");
        Output::ok(true)
    }

    fn select_one(&self, sku: &str) -> Output<Item> {
        let map = match self.items.read() {
            Ok(map) => map,
            Err(_) => {
                error!(sku = %sku, "Item repository lock poisoned during lookup");
                return Output::err(CheckoutError::internal("item repository lock poisoned"));
            }
        };

        match map.get(sku) {
            Some(item) => Output::ok(item.clone()),
            None => {
                debug!(sku = %sku, "No item for SKU");
                Output::empty()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_and_select() {
        let repo = MemoryItemRepository::new();
        assert!(repo.is_empty());

        let out = repo.insert_many(vec![
            Item::new("t01", "Toothbrush", 199),
            Item::new("t02", "Floss", 200),
        ]);
        assert_eq!(out, Output::ok(true));
        assert_eq!(repo.len(), 2);

        let found = repo.select_one("t02");
        assert_eq!(found, Output::ok(Item::new("t02", "Floss", 200)));
    }

    #[test]
    fn test_missing_sku_is_empty_not_error() {
        let repo = MemoryItemRepository::from_items(vec![Item::new("t01", "Toothbrush", 199)]);

        let missing = repo.select_one("t99");
        assert!(missing.is_empty());
        assert_eq!(missing.error, None);
    }

    #[test]
    fn test_duplicate_sku_overwrites() {
        let repo = MemoryItemRepository::new();
        repo.insert_many(vec![Item::new("t01", "Toothbrush", 199)]);
        repo.insert_many(vec![
            Item::new("t01", "Toothbrush Deluxe", 299),
            Item::new("t02", "Floss", 200),
        ]);

        assert_eq!(repo.len(), 2);
        let latest = repo.select_one("t01").data.unwrap();
        assert_eq!(latest.name, "Toothbrush Deluxe");
        assert_eq!(latest.price_cents, 299);
    }

    #[test]
    fn test_duplicates_within_one_batch() {
        let repo = MemoryItemRepository::from_items(vec![
            Item::new("t01", "First", 100),
            Item::new("t01", "Second", 150),
        ]);

        assert_eq!(repo.skus(), vec!["t01".to_string()]);
        assert_eq!(repo.select_one("t01").data.unwrap().name, "Second");
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let repo = Arc::new(MemoryItemRepository::from_items(vec![Item::new(
            "t01",
            "Toothbrush",
            199,
        )]));

        let poisoner = Arc::clone(&repo);
        let _ = thread::spawn(move || {
            let _guard = poisoner.items.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let lookup = repo.select_one("t01");
        assert!(lookup.error.unwrap().is_internal());

        let insert = repo.insert_many(vec![Item::new("t02", "Floss", 200)]);
        assert_eq!(insert.data, Some(false));
        assert!(insert.error.unwrap().is_internal());

        // Counting still works on a poisoned map.
        assert_eq!(repo.len(), 1);
    }
}
