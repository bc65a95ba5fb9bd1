//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The portal ships with in-memory fixtures; a real backend would add
//! another implementation behind the same trait.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Predicate used by [`Repository::list_where`]
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Core repository trait for CRUD operations
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new record, minting an id when it has none
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find record by id
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>>;

    /// List all records in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace an existing record
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete record by id
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// List the records matching `predicate`, in insertion order
    async fn list_where(&self, predicate: Predicate<'_, T>) -> DomainResult<Vec<T>> {
        Ok(self.list().await?.into_iter().filter(|e| predicate(e)).collect())
    }
}
