//! # Repository Module
//!
//! Item storage behind the `till_core::ItemRepository` contract.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CheckoutSession                                                       │
//! │       │                                                                 │
//! │       │  repository.select_one("t01")                                  │
//! │       ▼                                                                 │
//! │  MemoryItemRepository                                                  │
//! │  ├── insert_many(&self, items)                                         │
//! │  └── select_one(&self, sku)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RwLock<HashMap<sku, Item>>                                            │
//! │                                                                         │
//! │  Sessions only see the trait, so tests can swap in any storage.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`MemoryItemRepository`](item::MemoryItemRepository) - process-local item map

pub mod item;
