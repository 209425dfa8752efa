#![forbid(unsafe_code)]

//! Core domain model and business logic for the Lamp study tracker.
//!
//! This crate provides:
//! - The reference catalog and built-in verse table
//! - Verse resolution (cache, built-in table, remote lookup, placeholder)
//! - The persisted study plan with its daily memorization rotation
//! - Configuration and logging shared by front ends

pub mod types;
pub mod error;
pub mod catalog;
pub mod verses;
pub mod config;
pub mod logging;
pub mod persist;
pub mod cache;
pub mod source;
pub mod resolver;
pub mod plan;
pub mod devotion;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use cache::VerseCache;
pub use source::{GetBibleSource, LookupError, OfflineSource, VerseSource};
pub use resolver::VerseResolver;
pub use plan::PlanStore;
pub use devotion::{compose_devotion, DailyDevotion, MemorizationOfDay};
