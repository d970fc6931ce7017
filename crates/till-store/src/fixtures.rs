//! # Demo Fixture
//!
//! A small fixed catalog for demos and tests.
//!
//! ## Contents
//! ```text
//! ┌──────┬──────────────┬─────────┬──────────┬───────────────────────────┐
//! │ SKU  │ Name         │ Price   │ Discount │ Promotion                 │
//! ├──────┼──────────────┼─────────┼──────────┼───────────────────────────┤
//! │ t01  │ Toothbrush   │ $1.99   │          │                           │
//! │ t02  │ Dental Floss │ $2.00   │          │                           │
//! │ t03  │ Mouthwash    │ $4.50   │ $0.50    │                           │
//! │ p01  │ Pasta        │ $1.00   │          │ every 2 → free p02        │
//! │ p02  │ Pasta Sauce  │ $0.50   │          │                           │
//! └──────┴──────────────┴─────────┴──────────┴───────────────────────────┘
//! ```
//!
//! Nothing here is global: the entry point builds the fixture and injects it.

use std::sync::Arc;

use till_core::{BundlePromotion, Item, Promotion, PromotionRuleItem};

use crate::error::StoreResult;
use crate::repository::item::MemoryItemRepository;
use crate::storefront::Storefront;

/// SKUs scanned when the CLI is given none.
pub const DEMO_SCAN: &[&str] = &["t01", "t02", "t01"];

/// Plain demo items.
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new("t01", "Toothbrush", 199),
        Item::new("t02", "Dental Floss", 200),
        Item::new("t03", "Mouthwash", 450).with_discount(50),
        Item::new("p01", "Pasta", 100),
        Item::new("p02", "Pasta Sauce", 50),
    ]
}

/// Buy two pasta, get a sauce free.
pub fn demo_rules() -> StoreResult<Vec<PromotionRuleItem>> {
    let rule = PromotionRuleItem::new(
        Item::new("p01", "Pasta", 100),
        vec![Item::new("p02", "Pasta Sauce", 0)],
        2,
    )?;
    Ok(vec![rule])
}

/// A repository holding the demo items.
pub fn demo_repository() -> MemoryItemRepository {
    MemoryItemRepository::from_items(demo_items())
}

/// The demo repository with the demo bundle promotion.
pub fn demo_storefront() -> StoreResult<Storefront> {
    let bundle: Arc<dyn Promotion> = Arc::new(BundlePromotion::new(demo_rules()?)?);
    Ok(Storefront::new(demo_repository(), vec![bundle]))
}

// =============================================================================
// Unit Tests
// =============================================================================
//
// End-to-end checkout scenarios against the demo fixture.
