//! # Catalog Files
//!
//! Loads items and promotions from JSON.
//!
//! ## File Format
//! ```json
//! {
//!   "items": [
//!     { "sku": "t01", "name": "Toothbrush", "price_cents": 199 },
//!     { "sku": "t03", "name": "Mouthwash", "price_cents": 450, "discount_cents": 50 }
//!   ],
//!   "promotions": [
//!     { "type": "bundle",
//!       "rules": [
//!         { "sku": "p01", "name": "Pasta", "price_cents": 100,
//!           "minimum_quantity": 2,
//!           "bundle_items": [ { "sku": "p02", "name": "Pasta Sauce", "price_cents": 0 } ] }
//!       ] }
//!   ]
//! }
//! ```
//!
//! ## Load Sequence
//! ```text
//! read file ──► serde_json ──► validate items ──► build promotions
//!                                                      │
//!                                                      ▼
//!                              repository ◄── items, then rule trigger items
//! ```
//!
//! A rule's trigger item is inserted after the plain items, so a catalog can
//! define `p01` only inside its rule and still scan it.

use std::fs;
use std::iter;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use till_core::validation::validate_item;
use till_core::{BundlePromotion, CoreResult, Item, ItemRepository, Promotion, PromotionRuleItem};

use crate::error::{StoreError, StoreResult};
use crate::repository::item::MemoryItemRepository;
use crate::storefront::Storefront;

/// A promotion as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionConfig {
    Bundle { rules: Vec<PromotionRuleItem> },
}

impl PromotionConfig {
    /// Builds the promotion, validating its rules.
    pub fn build(&self) -> CoreResult<Arc<dyn Promotion>> {
        match self {
            PromotionConfig::Bundle { rules } => Ok(Arc::new(BundlePromotion::new(rules.clone())?)),
        }
    }

    /// Trigger items defined by this promotion.
    fn trigger_items(&self) -> impl Iterator<Item = &Item> {
        match self {
            PromotionConfig::Bundle { rules } => rules.iter().map(|rule| &rule.item),
        }
    }

    /// Every item a rule names: trigger first, then its bundle items.
    fn rule_items(&self) -> impl Iterator<Item = &Item> {
        match self {
            PromotionConfig::Bundle { rules } => rules
                .iter()
                .flat_map(|rule| iter::once(&rule.item).chain(&rule.bundle_items)),
        }
    }
}

/// Parsed catalog contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<Item>,

    #[serde(default)]
    pub promotions: Vec<PromotionConfig>,
}

impl Catalog {
    /// Parses and validates a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads, parses and validates a catalog file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let catalog = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            items = catalog.items.len(),
            promotions = catalog.promotions.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Checks every item and promotion rule.
    ///
    /// Rule items (triggers and bundle items) get the same record checks as
    /// plain items.
    pub fn validate(&self) -> StoreResult<()> {
        let rule_items = self.promotions.iter().flat_map(PromotionConfig::rule_items);

        for item in self.items.iter().chain(rule_items) {
            validate_item(item).map_err(|source| StoreError::InvalidItem {
                sku: item.sku.clone(),
                source,
            })?;
        }

        for promotion in &self.promotions {
            promotion.build()?;
        }

        Ok(())
    }

    /// Plain items followed by every rule's trigger item.
    pub fn all_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .chain(self.promotions.iter().flat_map(PromotionConfig::trigger_items))
            .cloned()
            .collect()
    }

    /// Fills a repository and builds the promotions.
    pub fn into_storefront(self) -> StoreResult<Storefront> {
        let repository = MemoryItemRepository::new();
        repository.insert_many(self.all_items()).into_result()?;

        let promotions = self
            .promotions
            .iter()
            .map(PromotionConfig::build)
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Storefront::new(repository, promotions))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
