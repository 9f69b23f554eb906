//! Typed errors for the report pipeline.
//!
//! The library uses `thiserror` (not `anyhow`) so callers and tests can
//! match on the failure kind; the binary wraps these in `anyhow` at the edge.

use thiserror::Error;

/// Errors that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Source file missing or unreadable, or a row failed to parse as the
    /// expected columns.
    #[error("failed to load listings: {0}")]
    Load(#[source] csv::Error),

    /// An aggregation was requested over zero records.
    #[error("no records to aggregate")]
    EmptyInput,

    /// The output file could not be written.
    #[error("failed to write output: {0}")]
    Write(#[source] csv::Error),
}
