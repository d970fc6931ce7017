//! # Validation Module
//!
//! Input validation for item records, promotion rules and scanned SKUs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog load (till-store)                                    │
//! │  ├── validate_item: sku, name, price, discount                         │
//! │  └── validate_minimum_quantity for every bundle rule                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Scan (CheckoutSession::scan)                                 │
//! │  └── scan_input: present and non-blank                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repository lookup                                            │
//! │  └── Unknown SKU → ItemNotFound                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scanning is deliberately lenient: any non-blank string is looked up, and a
//! malformed SKU simply isn't found. The stricter `validate_sku` only guards
//! what goes *into* a repository.
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_sku, validate_minimum_quantity};
//!
//! assert!(validate_sku("t01").is_ok());
//! assert!(validate_minimum_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Item;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest SKU accepted into a repository.
pub const MAX_SKU_LEN: usize = 50;

/// Longest item name accepted into a repository.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit) stored in a repository.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_sku;
///
/// assert!(validate_sku("p01").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Checks a scanned SKU.
///
/// Returns the SKU exactly as given, or `None` when the input is absent or
/// blank. Surrounding whitespace is kept: it is part of the lookup key.
///
/// ## Example
/// ```rust
/// use till_core::validation::scan_input;
///
/// assert_eq!(scan_input(Some("t01")), Some("t01"));
/// assert_eq!(scan_input(Some("a ")), Some("a "));
/// assert_eq!(scan_input(Some("   ")), None);
/// assert_eq!(scan_input(None), None);
/// ```
pub fn scan_input(sku: Option<&str>) -> Option<&str> {
    sku.filter(|s| !s.trim().is_empty())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price or discount in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free bundle items)
pub fn validate_amount_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a bundle rule's minimum quantity.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_minimum_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "minimum_quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of an item record.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_sku(&item.sku)?;
    validate_item_name(&item.name)?;
    validate_amount_cents("price", item.price_cents)?;
    if let Some(discount) = item.discount_cents {
        validate_amount_cents("discount", discount)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("t01").is_ok());
        assert!(validate_sku("COKE-330").is_ok());
        assert!(validate_sku("product_1").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Toothbrush").is_ok());
        assert!(validate_item_name(" ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_scan_input() {
        assert_eq!(scan_input(Some("t01")), Some("t01"));
        assert_eq!(scan_input(Some("\tt01\n")), Some("\tt01\n"));
        assert_eq!(scan_input(Some("")), None);
        assert_eq!(scan_input(Some(" \t")), None);
        assert_eq!(scan_input(None), None);
    }

    #[test]
    fn test_validate_amount_cents() {
        assert!(validate_amount_cents("price", 0).is_ok());
        assert!(validate_amount_cents("price", 199).is_ok());
        assert!(validate_amount_cents("discount", -1).is_err());
    }

    #[test]
    fn test_validate_minimum_quantity() {
        assert!(validate_minimum_quantity(1).is_ok());
        assert!(validate_minimum_quantity(3).is_ok());
        assert_eq!(
            validate_minimum_quantity(0),
            Err(ValidationError::MustBePositive {
                field: "minimum_quantity".to_string()
            })
        );
    }

    #[test]
    fn test_validate_item() {
        let mut item = Item::new("t01", "Toothbrush", 199);
        assert!(validate_item(&item).is_ok());

        item.discount_cents = Some(-5);
        assert!(matches!(
            validate_item(&item),
            Err(ValidationError::OutOfRange { .. })
        ));

        let nameless = Item::new("t02", "", 100);
        assert!(validate_item(&nameless).is_err());
    }
}
