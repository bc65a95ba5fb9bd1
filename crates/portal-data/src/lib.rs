//! Brightpath Portal Data
//!
//! Layered like a backend, but everything lives in memory:
//! - domain: plain records and the error type
//! - repository: data access abstraction with an in-memory implementation
//! - service: `MockBackend`, the async API the portals call
//!
//! Nothing survives a page reload.

pub mod domain;
pub mod repository;
pub mod fixtures;
pub mod latency;
pub mod service;

pub use domain::*;
pub use latency::Latency;
pub use service::{
    outstanding_cents, overall_average, subject_averages, ActivityCounts, AdminOverview, ChildOverview, LatencyProfile,
    MockBackend, StudentOverview, TutorOverview,
};
