//! The one-shot report pipeline: load, clean, aggregate, print, export.

use crate::error::ReportError;
use crate::listing::NumericField;
use crate::loader::load_listings;
use crate::output;
use crate::report::clean::clean;
use crate::report::insights::{average, count_by_location, filter_premium, top_by_score};
use crate::report::summary::summarize;
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

/// Number of rows shown in the preview section.
const PREVIEW_ROWS: usize = 5;

/// Runs the full report over `input` and writes the cleaned table to `output`.
///
/// Steps run in a fixed order: preview, cleaning, summary statistics,
/// averages, top hosts, premium listings, location counts, export. Any
/// failure aborts the remaining steps, since each later step depends on the
/// cleaned table.
#[tracing::instrument(fields(input = %input.display(), output = %output.display()))]
pub fn run_pipeline(input: &Path, output: &Path) -> Result<(), ReportError> {
    let raw = load_listings(input)?;
    output::print_preview(&raw, PREVIEW_ROWS);

    let listings = clean(&raw);
    let dropped = raw.len() - listings.len();
    if dropped > 0 {
        warn!(dropped, kept = listings.len(), "Dropped rows with missing values");
    }

    let summaries = summarize(&listings)?;
    output::print_summary(&summaries);

    let avg_price = average(&listings, NumericField::PricePerNight)?;
    let avg_score = average(&listings, NumericField::ReviewScore)?;
    info!(average_price = avg_price, "Average price per night");
    info!(average_score = avg_score, "Average review score");

    output::print_top_hosts(&top_by_score(&listings));
    output::print_premium(&filter_premium(&listings));
    output::print_location_counts(&count_by_location(&listings));

    output::export_table(output, &listings)?;
    info!(
        rows = listings.len(),
        generated_at = %Utc::now().to_rfc3339(),
        "Report complete, cleaned table exported"
    );

    Ok(())
}
