//! Console report emission and CSV export.
//!
//! Report sections go to the log (structured fields, one record per line);
//! the cleaned table is written back out as CSV with a header row.

use anyhow::Result;
use tracing::info;

use crate::error::ReportError;
use crate::listing::{Listing, RawListing};
use crate::report::types::{ColumnSummary, LocationCount, PremiumListing, TopHost};
use csv::WriterBuilder;
use std::path::Path;

/// Logs the first `limit` raw rows of the table, before cleaning.
pub fn print_preview(rows: &[RawListing], limit: usize) {
    info!(total_rows = rows.len(), shown = limit.min(rows.len()), "Data preview");
    for row in rows.iter().take(limit) {
        info!(
            host_name = row.host_name.as_deref().unwrap_or(""),
            location = row.location.as_deref().unwrap_or(""),
            price_per_night = row.price_per_night,
            review_score = row.review_score,
            availability_365 = row.availability_365,
            "Row"
        );
    }
}

/// Logs one summary-statistics line per numeric column.
pub fn print_summary(summaries: &[ColumnSummary]) {
    for s in summaries {
        info!(
            column = %s.column,
            count = s.count,
            mean = s.mean,
            std = s.std,
            min = s.min,
            q25 = s.q25,
            median = s.median,
            q75 = s.q75,
            max = s.max,
            "Summary statistics"
        );
    }
}

/// Logs summary statistics as pretty-printed JSON.
pub fn print_summary_json(summaries: &[ColumnSummary]) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summaries)?);
    Ok(())
}

/// Logs the host(s) holding the highest review score.
pub fn print_top_hosts(top: &[TopHost]) {
    info!(count = top.len(), "Hosts with highest review score");
    for host in top {
        info!(
            host_name = %host.host_name,
            location = %host.location,
            review_score = host.review_score,
            "Top host"
        );
    }
}

/// Logs the premium listing subset.
pub fn print_premium(premium: &[PremiumListing]) {
    info!(count = premium.len(), "Premium listings with high availability");
    for listing in premium {
        info!(
            host_name = %listing.host_name,
            location = %listing.location,
            price_per_night = listing.price_per_night,
            availability_365 = listing.availability_365,
            "Premium listing"
        );
    }
}

/// Logs listing counts per location, highest first.
pub fn print_location_counts(counts: &[LocationCount]) {
    info!(locations = counts.len(), "Listings count by location");
    for entry in counts {
        info!(location = %entry.location, count = entry.count, "Location");
    }
}

/// Writes the cleaned table to `path` as CSV.
///
/// The header row is always written, even for an empty table.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the path is not writable or a row fails
/// to serialize.
pub fn export_table(path: &Path, listings: &[Listing]) -> Result<(), ReportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(ReportError::Write)?;

    writer
        .write_record(Listing::HEADERS)
        .map_err(ReportError::Write)?;
    for listing in listings {
        writer.serialize(listing).map_err(ReportError::Write)?;
    }
    writer.flush().map_err(|e| ReportError::Write(e.into()))?;

    Ok(())
}
