//! Core domain logic for the time tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Dates: canonical `YYYY/MM/DD` handling and the "today" token
//! - Durations: minutes elapsed between two times of day
//! - Queries: the matching strategies and the classifier that picks one
//! - Aggregation: per-tag totals for the priority report

mod aggregate;
pub mod date;
pub mod duration;
mod error;
pub mod query;
mod record;

pub use aggregate::{TagTotal, aggregate_by_tag};
pub use duration::duration_minutes;
pub use error::InputError;
pub use query::{Query, classify};
pub use record::{NewRecord, TimeRecord};
