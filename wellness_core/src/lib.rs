#![forbid(unsafe_code)]

//! Core domain model and business logic for the wellness journal.
//!
//! This crate provides:
//! - Domain types (daily entries, metrics)
//! - Key-value storage backends and the entry store
//! - Trailing-window queries and aggregates
//! - Rule-based diagnosis of a day's entry
//! - Built-in self-help resources

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod storage;
pub mod store;
pub mod query;
pub mod aggregate;
pub mod advisor;
pub mod resources;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::EntryStore;
pub use query::{entries_in_window, Window};
pub use aggregate::{compute_aggregates, Aggregates};
pub use advisor::{diagnose, Diagnosis, MetricAssessment, Tier};
pub use resources::{default_catalog, resources_for_mood, Resource, ResourceCategory, UrgentContact};
