//! Per-column summary statistics over the cleaned table.

use crate::error::ReportError;
use crate::listing::{Listing, NumericField};
use crate::report::types::ColumnSummary;
use crate::report::utility::{mean, quantile, stddev};

/// Builds a describe-style summary for every numeric column: count, mean,
/// sample standard deviation, min, quartiles, and max.
///
/// # Errors
///
/// Returns [`ReportError::EmptyInput`] for a zero-record table.
pub fn summarize(listings: &[Listing]) -> Result<Vec<ColumnSummary>, ReportError> {
    if listings.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let summaries = NumericField::ALL
        .iter()
        .map(|&field| {
            let mut values: Vec<f64> = listings.iter().map(|l| field.value(l)).collect();
            values.sort_by(f64::total_cmp);

            let avg = mean(&values);
            ColumnSummary {
                column: field.name().to_string(),
                count: values.len(),
                mean: avg,
                std: stddev(&values, avg),
                min: values[0],
                q25: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q75: quantile(&values, 0.75),
                max: values[values.len() - 1],
            }
        })
        .collect();

    Ok(summaries)
}
