//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, caller-visible failures. An order that
/// cannot be fulfilled is *not* an error: the allocator reports it as an empty
/// plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request violated the allocator's input contract (negative quantity,
    /// blank warehouse name, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An identifier was invalid (e.g. blank item identifier).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = DomainError::invalid_input("quantity for apple is negative");
        assert_eq!(
            err.to_string(),
            "invalid input: quantity for apple is negative"
        );

        let err = DomainError::invalid_id("ItemId: blank");
        assert_eq!(err.to_string(), "invalid identifier: ItemId: blank");
    }
}
