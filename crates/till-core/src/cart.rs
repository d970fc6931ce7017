//! # Cart
//!
//! The ordered list of scanned items, and the receipt folded from it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Session Call              Cart Change                                  │
//! │  ────────────              ───────────                                  │
//! │                                                                         │
//! │  scan("t01") ────────────► items.push(item)                            │
//! │                                                                         │
//! │  clear() ────────────────► items.clear(), created_at = now             │
//! │                                                                         │
//! │  summary() ──────────────► (read only: promotions run on a copy)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike a quantity-based cart, every scan is its own entry: scanning `t01`
//! twice gives two `t01` lines, and the summary lists both.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Item;

/// The shopping cart.
///
/// ## Invariants
/// - Items are in scan order
/// - Duplicates are kept, one entry per scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Item>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a scanned item.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes every item and restarts the cart clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of entries (not distinct SKUs).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A computed summary of a list of items.
///
/// ## Display Format
/// ```text
/// SKUs Scanned: t01, t02, t01
/// Total expected: $5.98
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Every item that was totalled, promotion output included.
    pub items: Vec<Item>,

    /// Sum of prices.
    pub subtotal: Money,

    /// Sum of discounts.
    pub discount: Money,

    /// subtotal - discount
    pub total: Money,
}

impl Receipt {
    /// Folds price and discount over `items`.
    pub fn from_items(items: Vec<Item>) -> Self {
        let subtotal: Money = items.iter().map(Item::price).sum();
        let discount: Money = items.iter().map(Item::discount).sum();

        Receipt {
            items,
            subtotal,
            discount,
            total: subtotal - discount,
        }
    }

    /// SKUs in list order.
    pub fn skus(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.sku.as_str()).collect()
    }

    /// The comma-separated SKU list used in the summary.
    pub fn sku_list(&self) -> String {
        self.skus().join(", ")
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SKUs Scanned: {}\nTotal expected: {}",
            self.sku_list(),
            self.total
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
