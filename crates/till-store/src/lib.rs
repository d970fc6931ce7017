//! # till-store: Item Storage for Till
//!
//! Implements the `till_core::ItemRepository` contract in memory and loads
//! catalogs from JSON.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Till Data Flow                                   │
//! │                                                                         │
//! │  till-cli (--catalog or demo)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     till-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Catalog     │    │  Repository   │    │   Fixtures   │  │   │
//! │  │   │ (catalog.rs)  │───►│  (item.rs)    │◄───│ (demo data)  │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                        ┌───────▼───────┐                       │   │
//! │  │                        │  Storefront   │ ──► open_session()    │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - `MemoryItemRepository`
//! - [`catalog`] - JSON catalog files
//! - [`storefront`] - Shared repository + promotions, opens sessions
//! - [`fixtures`] - Demo data
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use till_store::fixtures;
//!
//! let storefront = fixtures::demo_storefront()?;
//! let mut session = storefront.open_session();
//! session.scan("t01");
//! session.scan("t02");
//! session.scan("t01");
//!
//! assert_eq!(
//!     session.summary().data.as_deref(),
//!     Some("SKUs Scanned: t01, t02, t01\nTotal expected: $5.98")
//! );
//! # Ok::<(), till_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod repository;
pub mod storefront;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{Catalog, PromotionConfig};
pub use error::{StoreError, StoreResult};
pub use repository::item::MemoryItemRepository;
pub use storefront::{StoreSession, Storefront};
