//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CheckoutError    - Scan / summary / promotion failures            │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  till-store errors (separate crate)                                    │
//! │  └── StoreError       - Catalog loading failures                       │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → Output<T> → caller            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Expected vs Unexpected
//! `InvalidInput`, `ItemNotFound` and `EmptyCart` are expected outcomes of
//! normal use. `Internal` marks a real fault (a poisoned lock, an envelope
//! that was never filled in) and is always logged at `error`.

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors produced by checkout operations.
///
/// None of these are retryable; a caller fixes the input and tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Scan was called with a missing, empty or blank SKU.
    #[error("Invalid input: a non-empty SKU is required")]
    InvalidInput,

    /// The repository has no item for this SKU.
    ///
    /// ## User Workflow
    /// ```text
    /// scan("zz99")
    ///      │
    ///      ▼
    /// repository.select_one("zz99") → no data, no error
    ///      │
    ///      ▼
    /// ItemNotFound("zz99")
    /// ```
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Summary was requested before anything was scanned.
    #[error("Cart is empty")]
    EmptyCart,

    /// A promotion rule cannot be used as configured.
    #[error("Invalid promotion rule for {sku}: {reason}")]
    InvalidPromotionRule { sku: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An unexpected internal fault.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CheckoutError {
    /// Creates an ItemNotFound error for a SKU.
    pub fn item_not_found(sku: impl Into<String>) -> Self {
        CheckoutError::ItemNotFound(sku.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CheckoutError::Internal(message.into())
    }

    /// Returns true for faults that indicate a bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, CheckoutError::Internal(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when item records or promotion rules are built from
/// untrusted input (catalog files, CLI arguments).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CoreResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CheckoutError::item_not_found("zz99").to_string(),
            "Item not found: zz99"
        );
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Cart is empty");

        let err = CheckoutError::InvalidPromotionRule {
            sku: "p01".to_string(),
            reason: "minimum_quantity must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid promotion rule for p01: minimum_quantity must be at least 1"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::MustBePositive {
            field: "minimum_quantity".to_string(),
        };
        assert_eq!(err.to_string(), "minimum_quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_checkout_error() {
        let validation_err = ValidationError::Required {
            field: "sku".to_string(),
        };
        let err: CheckoutError = validation_err.into();
        assert!(matches!(err, CheckoutError::Validation(_)));
        assert!(!err.is_internal());
        assert!(CheckoutError::internal("lock poisoned").is_internal());
    }
}
