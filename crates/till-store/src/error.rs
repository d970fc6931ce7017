//! # Store Error Types
//!
//! Error types for catalog loading.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / ValidationError / CheckoutError  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path or SKU that failed           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  till-cli reports it and exits non-zero                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repository lookups never produce a `StoreError`; they answer with the
//! core `Output` envelope like any other `ItemRepository`.

use std::path::PathBuf;

use thiserror::Error;
use till_core::{CheckoutError, ValidationError};

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or has the wrong shape.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// An item record failed validation.
    #[error("Invalid catalog item {sku}: {source}")]
    InvalidItem {
        sku: String,
        #[source]
        source: ValidationError,
    },

    /// A domain error (bad promotion rule, repository fault).
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl StoreError {
    /// Creates an Io error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
