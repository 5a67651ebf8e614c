//! CLI subcommand implementations.

pub mod clear;
pub mod priority;
pub mod query;
pub mod record;
pub mod report;
mod util;
