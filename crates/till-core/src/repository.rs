//! # Item Repository Contract
//!
//! The lookup a checkout session needs from item storage.
//!
//! ## Repository Pattern
//! ```text
//! CheckoutSession::scan("t01")
//!      │
//!      │  repository.select_one("t01")
//!      ▼
//! ItemRepository (this trait)
//! ├── insert_many(&self, items)
//! └── select_one(&self, sku)
//!      │
//!      ▼
//! MemoryItemRepository (till-store)
//! ```
//!
//! Both methods take `&self`. Implementations keep their own locking so a
//! single repository can sit behind an `Arc` and serve several sessions.

use std::sync::Arc;

use crate::output::Output;
use crate::types::Item;

/// Storage of items keyed by SKU.
pub trait ItemRepository {
    /// Inserts every item, overwriting any record with the same SKU.
    ///
    /// Returns `data = true`. The only failure is an internal fault.
    fn insert_many(&self, items: Vec<Item>) -> Output<bool>;

    /// Looks up an item.
    ///
    /// A miss is an *empty* envelope (no data, no error); the caller decides
    /// what absence means.
    fn select_one(&self, sku: &str) -> Output<Item>;
}

impl<R: ItemRepository + ?Sized> ItemRepository for &R {
    fn insert_many(&self, items: Vec<Item>) -> Output<bool> {
        (**self).insert_many(items)
    }

    fn select_one(&self, sku: &str) -> Output<Item> {
        (**self).select_one(sku)
    }
}

impl<R: ItemRepository + ?Sized> ItemRepository for Arc<R> {
    fn insert_many(&self, items: Vec<Item>) -> Output<bool> {
        (**self).insert_many(items)
    }

    fn select_one(&self, sku: &str) -> Output<Item> {
        (**self).select_one(sku)
    }
}

impl<R: ItemRepository + ?Sized> ItemRepository for Box<R> {
    fn insert_many(&self, items: Vec<Item>) -> Output<bool> {
        (**self).insert_many(items)
    }

    fn select_one(&self, sku: &str) -> Output<Item> {
        (**self).select_one(sku)
    }
}
