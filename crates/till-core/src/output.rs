//! # Output Envelope
//!
//! The result type returned by session and repository operations.
//!
//! ## Three States
//! ```text
//! ┌───────────────────┬──────────────┬──────────────────────────────────┐
//! │ State             │ data / error │ Meaning                          │
//! ├───────────────────┼──────────────┼──────────────────────────────────┤
//! │ Success           │ Some / None  │ Operation produced a payload     │
//! │ Failure           │ any  / Some  │ Operation failed (data may carry │
//! │                   │              │ a default such as `false`)       │
//! │ Uninitialized     │ None / None  │ Nothing produced, nothing wrong  │
//! │                   │              │ (e.g. repository miss)           │
//! └───────────────────┴──────────────┴──────────────────────────────────┘
//! ```
//!
//! Callers that only care about pass/fail convert with
//! [`Output::into_result`]; an uninitialized envelope becomes
//! `CheckoutError::Internal` there, so it can never pass as success.

use crate::error::{CheckoutError, CoreResult};

/// Optional payload plus optional error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output<T> {
    pub data: Option<T>,
    pub error: Option<CheckoutError>,
}

impl<T> Output<T> {
    /// A successful envelope.
    pub fn ok(data: T) -> Self {
        Output {
            data: Some(data),
            error: None,
        }
    }

    /// A failed envelope with no payload.
    pub fn err(error: CheckoutError) -> Self {
        Output {
            data: None,
            error: Some(error),
        }
    }

    /// A failed envelope that still carries a default payload.
    pub fn failed(data: T, error: CheckoutError) -> Self {
        Output {
            data: Some(data),
            error: Some(error),
        }
    }

    /// Neither payload nor error.
    pub fn empty() -> Self {
        Output {
            data: None,
            error: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.data.is_some()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.data.is_none()
    }

    /// Collapses the envelope into a `Result`.
    ///
    /// An error always wins over data. An uninitialized envelope is an
    /// internal fault.
    pub fn into_result(self) -> CoreResult<T> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            (None, None) => Err(CheckoutError::internal("operation produced no data")),
        }
    }

    /// Maps the payload, leaving the error untouched.
    pub fn map<U, F>(self, f: F) -> Output<U>
    where
        F: FnOnce(T) -> U,
    {
        Output {
            data: self.data.map(f),
            error: self.error,
        }
    }
}

impl<T> Default for Output<T> {
    fn default() -> Self {
        Output::empty()
    }
}

impl<T> From<CoreResult<T>> for Output<T> {
    fn from(result: CoreResult<T>) -> Self {
        match result {
            Ok(data) => Output::ok(data),
            Err(error) => Output::err(error),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
