//! # Domain Types
//!
//! Item records and the promotion rules built from them.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌──────────────────────────┐             │
//! │  │      Item       │◄─────────│    PromotionRuleItem     │             │
//! │  │  ─────────────  │ flatten  │  ──────────────────────  │             │
//! │  │  sku            │          │  item (base SKU)         │             │
//! │  │  name           │          │  bundle_items: [Item]    │             │
//! │  │  price_cents    │          │  minimum_quantity ≥ 1    │             │
//! │  │  discount_cents?│          └──────────────────────────┘             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::validate_minimum_quantity;

// =============================================================================
// Item
// =============================================================================

/// An item that can be scanned.
///
/// Items are immutable once looked up; the cart and promotions work with
/// clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stock Keeping Unit - unique key within a repository.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Per-unit discount in cents. Absent means no discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_cents: Option<i64>,
}

impl Item {
    /// Creates an item without a discount.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Item {
            sku: sku.into(),
            name: name.into(),
            price_cents,
            discount_cents: None,
        }
    }

    /// Sets a per-unit discount.
    pub fn with_discount(mut self, discount_cents: i64) -> Self {
        self.discount_cents = Some(discount_cents);
        self
    }

    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the discount as Money (zero when absent).
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents.unwrap_or(0))
    }

    /// Price minus discount.
    #[inline]
    pub fn net(&self) -> Money {
        self.price() - self.discount()
    }
}

// =============================================================================
// Promotion Rule Item
// =============================================================================

/// An item extended with a bundle rule.
///
/// For every `minimum_quantity` units of `item.sku` in the cart, one copy of
/// each entry in `bundle_items` is added.
///
/// ## Example
/// ```text
/// p01 × 3 in cart, minimum_quantity = 2, bundle_items = [p02 @ $0.00]
///      │
///      ▼
/// groups = 3 / 2 = 1  →  emit [p02]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRuleItem {
    /// The trigger item.
    #[serde(flatten)]
    pub item: Item,

    /// Items granted per qualifying group, in order.
    pub bundle_items: Vec<Item>,

    /// Units of the trigger SKU that make one group.
    pub minimum_quantity: u32,
}

impl PromotionRuleItem {
    /// Creates a validated rule.
    ///
    /// ## Errors
    /// - `InvalidPromotionRule` when `minimum_quantity` is zero
    /// - `Validation` when the trigger item or a bundle item has a blank SKU
    pub fn new(item: Item, bundle_items: Vec<Item>, minimum_quantity: u32) -> CoreResult<Self> {
        let rule = PromotionRuleItem {
            item,
            bundle_items,
            minimum_quantity,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Checks a rule that was built without `new` (e.g. deserialized).
    ///
    /// Only what the bundle arithmetic needs is checked here. SKU format,
    /// names and prices are catalog concerns (`validate_item`).
    pub fn validate(&self) -> CoreResult<()> {
        validate_minimum_quantity(self.minimum_quantity).map_err(|e| {
            CheckoutError::InvalidPromotionRule {
                sku: self.item.sku.clone(),
                reason: e.to_string(),
            }
        })?;

        for item in std::iter::once(&self.item).chain(&self.bundle_items) {
            if item.sku.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "sku".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// The trigger SKU.
    #[inline]
    pub fn sku(&self) -> &str {
        &self.item.sku
    }

    /// Number of qualifying groups in `cart`.
    pub fn qualifying_groups(&self, cart: &[Item]) -> usize {
        // validate() guarantees a non-zero divisor; max(1) keeps a
        // hand-built rule from panicking.
        let per_group = self.minimum_quantity.max(1) as usize;
        let count = cart.iter().filter(|i| i.sku == self.item.sku).count();
        count / per_group
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pasta_rule(minimum_quantity: u32) -> CoreResult<PromotionRuleItem> {
        PromotionRuleItem::new(
            Item::new("p01", "Pasta", 100),
            vec![Item::new("p02", "Sauce", 0)],
            minimum_quantity,
        )
    }

    #[test]
    fn test_item_net_price() {
        let plain = Item::new("t01", "Toothbrush", 199);
        assert_eq!(plain.discount(), Money::zero());
        assert_eq!(plain.net(), Money::from_cents(199));

        let discounted = Item::new("t03", "Mouthwash", 450).with_discount(50);
        assert_eq!(discounted.net(), Money::from_cents(400));
    }

    #[test]
    fn test_rule_rejects_zero_minimum() {
        let err = pasta_rule(0).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InvalidPromotionRule { ref sku, .. } if sku == "p01"
        ));
    }

    #[test]
    fn test_rule_rejects_blank_bundle_sku() {
        let err = PromotionRuleItem::new(
            Item::new("p01", "Pasta", 100),
            vec![Item::new(" ", "Nothing", 0)],
            2,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::Validation(ValidationError::Required {
                field: "sku".to_string()
            })
        );
    }

    #[test]
    fn test_rule_accepts_free_form_skus_and_names() {
        let rule = PromotionRuleItem::new(
            Item::new("p01 large", "Pasta", 100),
            vec![Item::new("p.02", "", 0)],
            2,
        )
        .unwrap();

        assert_eq!(rule.sku(), "p01 large");
        assert_eq!(rule.bundle_items[0].sku, "p.02");
    }

    #[test]
    fn test_qualifying_groups() {
        let rule = pasta_rule(2).unwrap();
        let p01 = Item::new("p01", "Pasta", 100);
        let other = Item::new("t01", "Toothbrush", 199);

        assert_eq!(rule.qualifying_groups(&[]), 0);
        assert_eq!(rule.qualifying_groups(&[p01.clone(), other.clone()]), 0);
        assert_eq!(
            rule.qualifying_groups(&[p01.clone(), other, p01.clone(), p01.clone()]),
            1
        );
        assert_eq!(rule.qualifying_groups(&vec![p01; 4]), 2);
    }

    #[test]
    fn test_rule_deserializes_flattened() {
        let json = r#"{
            "sku": "p01",
            "name": "Pasta",
            "price_cents": 100,
            "minimum_quantity": 2,
            "bundle_items": [{ "sku": "p02", "name": "Sauce", "price_cents": 0 }]
        }"#;

        let rule: PromotionRuleItem = serde_json::from_str(json).unwrap();
        assert_eq!(rule.sku(), "p01");
        assert_eq!(rule.item.discount_cents, None);
        assert_eq!(rule.bundle_items, vec![Item::new("p02", "Sauce", 0)]);
        assert!(rule.validate().is_ok());
    }
}
