//! In-Memory Repository
//!
//! Fixture-backed implementation of `Repository<T>`. State lives for as long
//! as the backend handle does, which in the browser is one tab.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::traits::{Predicate, Repository};
use crate::domain::{DomainError, DomainResult, Entity};

pub struct InMemoryRepository<T: Entity> {
    records: RwLock<Vec<T>>,
    next_id: AtomicU32,
    entity_name: &'static str,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new(entity_name: &'static str) -> Self {
        Self::seeded(entity_name, Vec::new())
    }

    /// Create a repository pre-filled with fixtures
    pub fn seeded(entity_name: &'static str, records: Vec<T>) -> Self {
        let next_id = records.len() as u32 + 1;
        Self {
            records: RwLock::new(records),
            next_id: AtomicU32::new(next_id),
            entity_name,
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Vec<T>>> {
        self.records
            .read()
            .map_err(|e| DomainError::Internal(format!("{} store poisoned: {}", self.entity_name, e)))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.records
            .write()
            .map_err(|e| DomainError::Internal(format!("{} store poisoned: {}", self.entity_name, e)))
    }

    /// Mint the next free id, skipping any that fixtures already use
    fn mint_id(&self, existing: &[T]) -> String {
        loop {
            let n = self.next_id.fetch_add(1, Ordering::Relaxed);
            let candidate = format!("{}-{}", T::ID_PREFIX, n);
            if !existing.iter().any(|e| e.id() == candidate) {
                return candidate;
            }
        }
    }

    /// Apply `f` to the record with `id` and return the updated copy
    pub fn modify<F>(&self, id: &str, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut T) -> DomainResult<()>,
    {
        let mut records = self.write()?;
        let record = records
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| DomainError::not_found(self.entity_name, id))?;
        f(record)?;
        Ok(record.clone())
    }

    /// Apply `f` to every record matching `predicate`, returning how many changed
    pub fn modify_where<P, F>(&self, predicate: P, mut f: F) -> DomainResult<usize>
    where
        P: Fn(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut records = self.write()?;
        let mut changed = 0;
        for record in records.iter_mut() {
            if predicate(&*record) {
                f(record);
                changed += 1;
            }
        }
        Ok(changed)
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        let mut records = self.write()?;
        let mut created = entity.clone();
        if created.id().is_empty() {
            let id = self.mint_id(&records);
            created.set_id(id);
        } else if records.iter().any(|e| e.id() == created.id()) {
            return Err(DomainError::Conflict(format!(
                "{} '{}' already exists",
                self.entity_name,
                created.id()
            )));
        }
        records.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>> {
        Ok(self.read()?.iter().find(|e| e.id() == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    async fn update(&self, entity: &T) -> DomainResult<T> {
        let mut records = self.write()?;
        let slot = records
            .iter_mut()
            .find(|e| e.id() == entity.id())
            .ok_or_else(|| DomainError::not_found(self.entity_name, entity.id()))?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|e| e.id() != id);
        if records.len() == before {
            return Err(DomainError::not_found(self.entity_name, id));
        }
        Ok(())
    }

    async fn list_where(&self, predicate: Predicate<'_, T>) -> DomainResult<Vec<T>> {
        Ok(self.read()?.iter().filter(|e| predicate(*e)).cloned().collect())
    }
}
