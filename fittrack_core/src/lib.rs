#![forbid(unsafe_code)]

//! Core domain model and business logic for the Fittrack system.
//!
//! This crate provides:
//! - Domain types (activity ledger, measurements, personal records)
//! - Streak computation
//! - Unit conversion and energy-expenditure estimates
//! - Workout planning and templates
//! - Calorie log
//! - Persistence (key-value JSON store, CSV export)

pub mod types;
pub mod error;
pub mod units;
pub mod streak;
pub mod ledger;
pub mod energy;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod store;
pub mod planner;
pub mod calories;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::build_default_catalog;
pub use config::Config;
pub use store::KvStore;
pub use energy::{recommend_calories, CalorieEstimate, UserProfile};
pub use planner::{WorkoutDraft, WorkoutTemplate};
pub use calories::{CalorieEntry, CalorieLog};
