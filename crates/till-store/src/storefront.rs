//! # Storefront
//!
//! A repository plus the promotions that apply to it: everything needed to
//! open checkout sessions.

use std::sync::Arc;

use till_core::{CheckoutSession, Promotion};

use crate::repository::item::MemoryItemRepository;

/// A session backed by a shared in-memory repository.
pub type StoreSession = CheckoutSession<Arc<MemoryItemRepository>>;

/// Shared item storage and promotions.
///
/// Every session opened here reads the same repository and runs the same
/// promotions, but owns its own cart.
#[derive(Debug, Clone)]
pub struct Storefront {
    repository: Arc<MemoryItemRepository>,
    promotions: Vec<Arc<dyn Promotion>>,
}

impl Storefront {
    pub fn new(repository: MemoryItemRepository, promotions: Vec<Arc<dyn Promotion>>) -> Self {
        Storefront {
            repository: Arc::new(repository),
            promotions,
        }
    }

    pub fn repository(&self) -> &Arc<MemoryItemRepository> {
        &self.repository
    }

    pub fn promotion_names(&self) -> Vec<&str> {
        self.promotions.iter().map(|p| p.name()).collect()
    }

    /// Opens a new session with an empty cart.
    pub fn open_session(&self) -> StoreSession {
        let promotions = self
            .promotions
            .iter()
            .map(|p| Box::new(Arc::clone(p)) as Box<dyn Promotion>)
            .collect();

        CheckoutSession::with_promotions(Arc::clone(&self.repository), promotions)
    }
}
