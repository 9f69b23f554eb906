//! Aggregations and derived views over the listing table.
//!
//! This module cleans the raw table, computes per-column summary statistics,
//! and derives the insight sections of the console report: averages, top
//! hosts by review score, premium listings, and per-location counts.

pub mod clean;
pub mod insights;
pub mod summary;
pub mod types;
pub mod utility;
