//! Repository Layer
//!
//! Data access abstraction plus the in-memory implementation the portal
//! runs on.

mod traits;
mod memory;

#[cfg(test)]
mod tests;

pub use traits::{Predicate, Repository};
pub use memory::InMemoryRepository;
