//! Mock Service Layer
//!
//! `MockBackend` plays the part of the portal's API. Each call waits out a
//! simulated network delay, then reads or mutates the fixture repositories.
//! Mutations last as long as the backend handle (one browser tab).

mod auth;
mod users;
mod classes;
mod assignments;
mod grades;
mod billing;
mod messages;
mod resources;
mod bookings;
mod dashboard;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::*;
use crate::fixtures;
use crate::latency::Latency;
use crate::repository::InMemoryRepository;

pub use billing::outstanding_cents;
pub use dashboard::{ActivityCounts, AdminOverview, ChildOverview, StudentOverview, TutorOverview};
pub use grades::{overall_average, subject_averages};

/// Delays applied per kind of call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub reads: Latency,
    pub writes: Latency,
    pub reports: Latency,
}

impl LatencyProfile {
    pub const fn uniform(latency: Latency) -> Self {
        Self { reads: latency, writes: latency, reports: latency }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            reads: Latency::FAST,
            writes: Latency::STANDARD,
            reports: Latency::SLOW,
        }
    }
}

pub(crate) struct Stores {
    pub users: InMemoryRepository<UserAccount>,
    pub children: InMemoryRepository<Child>,
    pub classes: InMemoryRepository<ClassSession>,
    pub assignments: InMemoryRepository<Assignment>,
    pub grades: InMemoryRepository<Grade>,
    pub invoices: InMemoryRepository<Invoice>,
    pub messages: InMemoryRepository<Message>,
    pub notifications: InMemoryRepository<Notification>,
    pub resources: InMemoryRepository<Resource>,
    pub bookings: InMemoryRepository<Booking>,
}

impl Stores {
    fn seeded() -> Self {
        Self {
            users: InMemoryRepository::seeded("User", fixtures::users()),
            children: InMemoryRepository::seeded("Child", fixtures::children()),
            classes: InMemoryRepository::seeded("Class", fixtures::classes()),
            assignments: InMemoryRepository::seeded("Assignment", fixtures::assignments()),
            grades: InMemoryRepository::seeded("Grade", fixtures::grades()),
            invoices: InMemoryRepository::seeded("Invoice", fixtures::invoices()),
            messages: InMemoryRepository::seeded("Message", fixtures::messages()),
            notifications: InMemoryRepository::seeded("Notification", fixtures::notifications()),
            resources: InMemoryRepository::seeded("Resource", fixtures::resources()),
            bookings: InMemoryRepository::seeded("Booking", fixtures::bookings()),
        }
    }
}

/// Handle to the in-memory API. Cloning shares the same data.
#[derive(Clone)]
pub struct MockBackend {
    stores: Arc<Stores>,
    latency: LatencyProfile,
    today: NaiveDate,
}

impl MockBackend {
    /// Fixture data, default latencies, fixture "today"
    pub fn seeded() -> Self {
        Self {
            stores: Arc::new(Stores::seeded()),
            latency: LatencyProfile::default(),
            today: fixtures::fixture_today(),
        }
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The date overdue checks and new records are measured against
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    pub(crate) fn now(&self) -> NaiveDateTime {
        self.today.and_time(chrono::Local::now().time())
    }

    pub(crate) fn stores(&self) -> &Stores {
        &self.stores
    }

    pub(crate) async fn read_delay(&self) {
        self.latency.reads.simulate().await;
    }

    pub(crate) async fn write_delay(&self) {
        self.latency.writes.simulate().await;
    }

    pub(crate) async fn report_delay(&self) {
        self.latency.reports.simulate().await;
    }

    /// Look up an account by id, `NotFound` when absent
    pub(crate) async fn require_user(&self, id: &str) -> DomainResult<UserAccount> {
        use crate::repository::Repository;
        self.stores
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }
}

/// Collect the names of required fields left blank
pub(crate) fn require_fields(fields: &[(&str, &str)]) -> DomainResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::InvalidInput(format!("{} required", missing.join(", "))))
    }
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBackend")
            .field("latency", &self.latency)
            .field("today", &self.today)
            .finish()
    }
}
