//! Domain Layer - Core Entity Trait
//!
//! Every mock record is a flat struct keyed by a string id.

use thiserror::Error;

/// Core trait for all domain records
pub trait Entity: Sized + Send + Sync + Clone {
    /// Prefix used when the repository has to mint an id ("user" -> "user-7")
    const ID_PREFIX: &'static str;

    /// Returns the record's unique identifier
    fn id(&self) -> &str;

    /// Replaces the identifier (used when a new record is created without one)
    fn set_id(&mut self, id: String);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not allowed: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound { entity, id: id.into() }
    }
}

/// Implements [`Entity`] for a struct with a `pub id: String` field.
macro_rules! impl_entity {
    ($ty:ty, $prefix:literal) => {
        impl $crate::domain::Entity for $ty {
            const ID_PREFIX: &'static str = $prefix;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

pub(crate) use impl_entity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found("Invoice", "inv-9");
        assert_eq!(err.to_string(), "Invoice 'inv-9' not found");
    }
}
