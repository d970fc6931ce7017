//! # till-core: Pure Checkout Logic for Till
//!
//! This crate is the **heart** of Till. It holds the checkout session, the
//! promotion engine and every type they share, with no filesystem or network
//! access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-cli                                     │   │
//! │  │    parse args ──► build repository ──► scan ──► total          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  session  │  │ promotion │  │   cart    │  │   types   │  │   │
//! │  │   │ Checkout  │  │  Bundle   │  │   Cart    │  │   Item    │  │   │
//! │  │   │ Session   │  │ Promotion │  │  Receipt  │  │ RuleItem  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ItemRepository (trait) ◄──── implemented by till-store       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    till-store                                   │   │
//! │  │           MemoryItemRepository, catalog files, demo data        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item and PromotionRuleItem
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart and Receipt
//! - [`promotion`] - Promotion trait and BundlePromotion
//! - [`repository`] - ItemRepository contract
//! - [`session`] - CheckoutSession
//! - [`output`] - Output envelope
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::collections::HashMap;
//! use till_core::{CheckoutSession, Item, ItemRepository, Output};
//!
//! #[derive(Default)]
//! struct Shelf(RefCell<HashMap<String, Item>>);
//!
//! impl ItemRepository for Shelf {
//!     fn insert_many(&self, items: Vec<Item>) -> Output<bool> {
//!         let mut shelf = self.0.borrow_mut();
//!         for item in items {
//!             shelf.insert(item.sku.clone(), item);
//!         }
//!         Output::ok(true)
//!     }
//!
//!     fn select_one(&self, sku: &str) -> Output<Item> {
//!         self.0.borrow().get(sku).cloned().map_or_else(Output::empty, Output::ok)
//!     }
//! }
//!
//! let shelf = Shelf::default();
//! shelf.insert_many(vec![Item::new("t01", "Toothbrush", 199)]);
//!
//! let mut session = CheckoutSession::new(shelf);
//! session.scan("t01");
//! session.scan("t01");
//!
//! assert_eq!(
//!     session.summary().data.as_deref(),
//!     Some("SKUs Scanned: t01, t01\nTotal expected: $3.98")
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod output;
pub mod promotion;
pub mod repository;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, Receipt};
pub use error::{CheckoutError, CoreResult, ValidationError};
pub use money::Money;
pub use output::Output;
pub use promotion::{BundlePromotion, Promotion};
pub use repository::ItemRepository;
pub use session::CheckoutSession;
pub use types::{Item, PromotionRuleItem};
