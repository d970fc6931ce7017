//! # Promotion Engine
//!
//! Promotions look at the cart and return extra items to append.
//!
//! ## How Promotions Run During a Summary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  working = cart.items.clone()                                          │
//! │                                                                         │
//! │  for promotion in registration order:                                  │
//! │      added = promotion.apply(&working)     ← pure, sees earlier output │
//! │      working.extend(added)                                             │
//! │                                                                         │
//! │  The session's own cart is never touched.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::CoreResult;
use crate::types::{Item, PromotionRuleItem};

/// A pricing strategy applied at summary time.
pub trait Promotion: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns the items to append to `cart`. Must not depend on anything
    /// but `cart` and the promotion's own configuration.
    fn apply(&self, cart: &[Item]) -> Vec<Item>;
}

impl<P: Promotion + ?Sized> Promotion for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, cart: &[Item]) -> Vec<Item> {
        (**self).apply(cart)
    }
}

// =============================================================================
// Bundle Promotion
// =============================================================================

/// Grants bundle items for every group of trigger items.
///
/// ## Output Order
/// Rule registration order, then group, then bundle-item order:
/// ```text
/// rules: [A(min 2) → [x, y], B(min 1) → [z]]
/// cart:  A A A A B
///
/// emit:  x y x y z
///        └─A g1┘└A g2┘ └B g1
/// ```
#[derive(Debug, Clone)]
pub struct BundlePromotion {
    rules: Vec<PromotionRuleItem>,
}

impl BundlePromotion {
    /// Creates a bundle promotion, validating every rule.
    pub fn new(rules: Vec<PromotionRuleItem>) -> CoreResult<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(BundlePromotion { rules })
    }

    pub fn rules(&self) -> &[PromotionRuleItem] {
        &self.rules
    }
}

impl Promotion for BundlePromotion {
    fn name(&self) -> &str {
        "bundle"
    }

    fn apply(&self, cart: &[Item]) -> Vec<Item> {
        let mut added = Vec::new();

        for rule in &self.rules {
            let groups = rule.qualifying_groups(cart);
            if groups == 0 {
                continue;
            }

            trace!(sku = %rule.sku(), groups, "Bundle rule qualified");

            for _ in 0..groups {
                added.extend(rule.bundle_items.iter().cloned());
            }
        }

        added
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
