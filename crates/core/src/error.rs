//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every fallible operation in this workspace fails before it mutates
/// anything, so an `Err` always leaves the collection as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An ordering policy was handed a value that lacks a field it inspects
    /// (e.g. a search key with no title given to a by-title ordering).
    #[error("{policy} ordering requires `{field}`, but the value has none")]
    MissingField {
        policy: &'static str,
        field: &'static str,
    },
}

impl DomainError {
    pub fn missing_field(policy: &'static str, field: &'static str) -> Self {
        Self::MissingField { policy, field }
    }
}
