//! # Checkout Session
//!
//! Owns one cart, the promotions that price it, and a handle to item
//! storage.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │          scan(valid)              scan(valid)                           │
//! │   ┌───────┐ ───────────► ┌───────────┐ ◄──┐                             │
//! │   │ Empty │              │ Populated │ ───┘  summary() (cart unchanged) │
//! │   └───────┘ ◄─────────── └───────────┘                                  │
//! │     │  ▲       clear()                                                  │
//! │     │  │                                                                │
//! │     └──┘ summary() → EmptyCart                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//! Expected outcomes (bad input, unknown SKU, empty cart) are returned in
//! the [`Output`] envelope and logged at `debug`. Internal faults reported
//! by the repository are passed through as well but logged at `error`.
//! Only [`CheckoutSession::total`] swallows errors, after logging them.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, error, info};
use uuid::Uuid;

use crate::cart::{Cart, Receipt};
use crate::error::{CheckoutError, CoreResult};
use crate::output::Output;
use crate::promotion::Promotion;
use crate::repository::ItemRepository;
use crate::validation::scan_input;

/// A single checkout.
///
/// Mutating calls take `&mut self`; one session serves one caller at a time.
/// Share the repository (not the session) when several checkouts run side by
/// side.
pub struct CheckoutSession<R> {
    id: Uuid,
    cart: Cart,
    promotions: Vec<Box<dyn Promotion>>,
    repository: R,
}

impl<R: ItemRepository> CheckoutSession<R> {
    /// Creates a session with no promotions.
    pub fn new(repository: R) -> Self {
        Self::with_promotions(repository, Vec::new())
    }

    /// Creates a session with a fixed, ordered list of promotions.
    pub fn with_promotions(repository: R, promotions: Vec<Box<dyn Promotion>>) -> Self {
        let id = Uuid::new_v4();
        debug!(session_id = %id, promotions = promotions.len(), "Checkout session created");

        CheckoutSession {
            id,
            cart: Cart::new(),
            promotions,
            repository,
        }
    }

    /// Registers one more promotion after the existing ones.
    pub fn with_promotion(mut self, promotion: impl Promotion + 'static) -> Self {
        self.promotions.push(Box::new(promotion));
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Scanned entries, promotion output excluded.
    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Registered promotions, in the order they run.
    pub fn promotions(&self) -> &[Box<dyn Promotion>] {
        &self.promotions
    }

    /// Empties the cart. Safe to call repeatedly.
    pub fn clear(&mut self) -> Output<bool> {
        self.cart.clear();
        debug!(session_id = %self.id, "Cart cleared");
        Output::ok(true)
    }

    /// Looks up `sku` and appends the item to the cart.
    ///
    /// The SKU is looked up exactly as given; only blank input is rejected.
    ///
    /// ## Flow
    /// ```text
    /// scan(sku)
    ///   │
    ///   ├── None / "" / "   " ──────────► { false, InvalidInput }
    ///   │
    ///   ├── repository error ───────────► { false, <that error> }
    ///   │
    ///   ├── repository miss ────────────► { false, ItemNotFound(sku) }
    ///   │
    ///   └── found ─► cart.push(item) ───► { true }
    /// ```
    ///
    /// Accepts `&str` or `Option<&str>`:
    /// ```rust,ignore
    /// session.scan("t01");
    /// session.scan(None);
    /// ```
    pub fn scan<'a>(&mut self, sku: impl Into<Option<&'a str>>) -> Output<bool> {
        let Some(sku) = scan_input(sku.into()) else {
            debug!(session_id = %self.id, "Scan rejected: missing SKU");
            return Output::failed(false, CheckoutError::InvalidInput);
        };

        let found = self.repository.select_one(sku);

        if let Some(err) = found.error {
            if err.is_internal() {
                error!(session_id = %self.id, sku = %sku, error = %err, "Repository fault during scan");
            } else {
                debug!(session_id = %self.id, sku = %sku, error = %err, "Repository rejected scan");
            }
            return Output::failed(false, err);
        }

        match found.data {
            Some(item) => {
                debug!(session_id = %self.id, sku = %sku, price_cents = item.price_cents, "Item scanned");
                self.cart.push(item);
                Output::ok(true)
            }
            None => {
                debug!(session_id = %self.id, sku = %sku, "Item not found");
                Output::failed(false, CheckoutError::item_not_found(sku))
            }
        }
    }

    /// Prices the cart with every promotion applied.
    ///
    /// Promotions run in registration order over a working copy. Each one
    /// sees the scanned items plus the output of the promotions before it.
    /// The session cart itself is left as scanned, so repeated calls give the
    /// same receipt.
    pub fn receipt(&self) -> CoreResult<Receipt> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut working = self.cart.items().to_vec();

        for promotion in &self.promotions {
            let added = promotion.apply(&working);
            if !added.is_empty() {
                debug!(
                    session_id = %self.id,
                    promotion = promotion.name(),
                    added = added.len(),
                    "Promotion applied"
                );
            }
            working.extend(added);
        }

        Ok(Receipt::from_items(working))
    }

    /// The two-line summary.
    ///
    /// ```text
    /// SKUs Scanned: t01, t02, t01
    /// Total expected: $5.98
    /// ```
    pub fn summary(&self) -> Output<String> {
        self.receipt().map(|receipt| receipt.to_string()).into()
    }

    /// Prints the summary to stdout.
    ///
    /// Nothing is returned: failures are logged and nothing is printed.
    pub fn total(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_total(&mut handle);
    }

    /// [`total`](Self::total) against any writer.
    pub fn write_total<W: Write>(&self, out: &mut W) {
        match self.summary().into_result() {
            Ok(summary) => {
                if let Err(e) = writeln!(out, "{}", summary) {
                    error!(session_id = %self.id, error = %e, "Failed to write summary");
                    return;
                }
                info!(
                    session_id = %self.id,
                    items = self.cart.len(),
                    cart_opened_at = %self.cart.created_at(),
                    "Total reported"
                );
            }
            Err(e) => {
                error!(session_id = %self.id, error = %e, "Could not compute total");
            }
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for CheckoutSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutSession")
            .field("id", &self.id)
            .field("cart", &self.cart)
            .field("promotions", &self.promotions)
            .field("repository", &self.repository)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promotion::BundlePromotion;
    use crate::types::{Item, PromotionRuleItem};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct StubRepository {
        items: RefCell<HashMap<String, Item>>,
    }

    impl StubRepository {
        fn with(items: Vec<Item>) -> Self {
            let repo = StubRepository::default();
            repo.insert_many(items);
            repo
        }
    }

    impl ItemRepository for StubRepository {
        fn insert_many(&self, items: Vec<Item>) -> Output<bool> {
            let mut map = self.items.borrow_mut();
            for item in items {
                map.insert(item.sku.clone(), item);
            }
            Output::ok(true)
        }

        fn select_one(&self, sku: &str) -> Output<Item> {
            match self.items.borrow().get(sku) {
                Some(item) => Output::ok(item.clone()),
                None => Output::empty(),
            }
        }
    }

    #[derive(Debug)]
    struct BrokenRepository;

    impl ItemRepository for BrokenRepository {
        fn insert_many(&self, _items: Vec<Item>) -> Output<bool> {
            Output::failed(false, CheckoutError::internal("broken"))
        }

        fn select_one(&self, _sku: &str) -> Output<Item> {
            Output::err(CheckoutError::internal("broken"))
        }
    }

    /// Emits one "rcpt" item per p02 it can see.
    #[derive(Debug)]
    struct SauceReceiptPromotion;

    impl Promotion for SauceReceiptPromotion {
        fn name(&self) -> &str {
            "sauce-receipt"
        }

        fn apply(&self, cart: &[Item]) -> Vec<Item> {
            cart.iter()
                .filter(|i| i.sku == "p02")
                .map(|_| Item::new("rcpt", "Receipt Stamp", 0))
                .collect()
        }
    }

    fn catalog() -> StubRepository {
        StubRepository::with(vec![
            Item::new("t01", "Toothbrush", 199),
            Item::new("t02", "Floss", 200),
            Item::new("t03", "Mouthwash", 450).with_discount(50),
            Item::new("p01", "Pasta", 100),
            Item::new("p02", "Sauce", 50),
        ])
    }

    fn pasta_promotion() -> BundlePromotion {
        BundlePromotion::new(vec![PromotionRuleItem::new(
            Item::new("p01", "Pasta", 100),
            vec![Item::new("p02", "Sauce", 0)],
            2,
        )
        .unwrap()])
        .unwrap()
    }

    #[test]
    fn test_scan_rejects_missing_sku() {
        let mut session = CheckoutSession::new(catalog());

        for out in [session.scan(""), session.scan("   "), session.scan(None)] {
            assert_eq!(out, Output::failed(false, CheckoutError::InvalidInput));
        }
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_scan_unknown_sku() {
        let mut session = CheckoutSession::new(catalog());

        assert_eq!(
            session.scan("zz99"),
            Output::failed(false, CheckoutError::item_not_found("zz99"))
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_scan_uses_sku_as_given() {
        let repo = catalog();
        repo.insert_many(vec![Item::new("a ", "Padded", 125)]);
        let mut session = CheckoutSession::new(repo);

        assert_eq!(session.scan("a "), Output::ok(true));
        assert_eq!(session.scan(Some("t02")), Output::ok(true));
        assert_eq!(
            session.scan(" t01 "),
            Output::failed(false, CheckoutError::item_not_found(" t01 "))
        );
        assert_eq!(
            session.scan("a"),
            Output::failed(false, CheckoutError::item_not_found("a"))
        );

        let skus: Vec<&str> = session.cart().items().iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["a ", "t02"]);
    }

    #[test]
    fn test_scan_propagates_repository_fault() {
        let mut session = CheckoutSession::new(BrokenRepository);

        let out = session.scan("t01");
        assert_eq!(out.data, Some(false));
        assert!(out.error.unwrap().is_internal());
    }

    #[test]
    fn test_summary_on_empty_cart() {
        let mut session = CheckoutSession::new(catalog()).with_promotion(pasta_promotion());

        assert_eq!(session.clear(), Output::ok(true));
        assert_eq!(session.summary(), Output::err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_summary_basic() {
        let mut session = CheckoutSession::new(catalog());
        session.scan("t01");
        session.scan("t02");
        session.scan("t01");

        assert_eq!(
            session.summary(),
            Output::ok("SKUs Scanned: t01, t02, t01\nTotal expected: $5.98".to_string())
        );
    }

    #[test]
    fn test_summary_with_bundle() {
        let mut session = CheckoutSession::new(catalog()).with_promotion(pasta_promotion());
        for sku in ["p01", "p01", "p01", "p02"] {
            assert!(session.scan(sku).is_ok());
        }

        let receipt = session.receipt().unwrap();
        assert_eq!(receipt.skus(), vec!["p01", "p01", "p01", "p02", "p02"]);
        assert_eq!(receipt.total.cents(), 350);
        assert_eq!(
            session.summary().data.as_deref(),
            Some("SKUs Scanned: p01, p01, p01, p02, p02\nTotal expected: $3.50")
        );
    }

    #[test]
    fn test_summary_does_not_grow_cart() {
        let mut session = CheckoutSession::new(catalog()).with_promotion(pasta_promotion());
        for sku in ["p01", "p01", "p01", "p01"] {
            session.scan(sku);
        }

        let first = session.summary();
        let second = session.summary();
        assert_eq!(first, second);
        assert_eq!(session.item_count(), 4);
        assert_eq!(
            session.receipt().unwrap().skus(),
            vec!["p01", "p01", "p01", "p01", "p02", "p02"]
        );
    }

    #[test]
    fn test_later_promotion_sees_earlier_output() {
        let mut session = CheckoutSession::new(catalog())
            .with_promotion(pasta_promotion())
            .with_promotion(SauceReceiptPromotion);
        session.scan("p01");
        session.scan("p01");

        // bundle adds one p02, the second promotion stamps it
        assert_eq!(
            session.receipt().unwrap().skus(),
            vec!["p01", "p01", "p02", "rcpt"]
        );
    }

    #[test]
    fn test_discount_is_subtracted() {
        let mut session = CheckoutSession::new(catalog());
        session.scan("t03");
        session.scan("t02");

        assert_eq!(
            session.summary().data.as_deref(),
            Some("SKUs Scanned: t03, t02\nTotal expected: $6.00")
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut session = CheckoutSession::new(catalog());
        session.scan("t01");

        assert!(!session.is_empty());
        assert_eq!(session.clear(), Output::ok(true));
        assert!(session.is_empty());
        assert_eq!(session.clear(), Output::ok(true));
        assert!(session.is_empty());
    }

    #[test]
    fn test_write_total() {
        let mut session = CheckoutSession::new(catalog());
        session.scan("t01");
        session.scan("t02");
        session.scan("t01");

        let mut out = Vec::new();
        session.write_total(&mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "SKUs Scanned: t01, t02, t01\nTotal expected: $5.98\n"
        );
    }

    #[test]
    fn test_write_total_on_empty_cart_prints_nothing() {
        let session = CheckoutSession::new(catalog());

        let mut out = Vec::new();
        session.write_total(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_shared_repository_by_reference() {
        let repo = catalog();
        let mut a = CheckoutSession::new(&repo);
        let mut b = CheckoutSession::new(&repo);

        a.scan("t01");
        b.scan("t02");
        b.scan("t02");

        assert_ne!(a.id(), b.id());
        assert_eq!(a.cart().len(), 1);
        assert_eq!(b.cart().len(), 2);
    }
}
