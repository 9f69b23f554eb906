//! Record shapes for the report's output sections.

use serde::Serialize;

/// A listing projected to the fields shown in the top-hosts section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopHost {
    pub host_name: String,
    pub location: String,
    pub review_score: f64,
}

/// A listing that clears both premium thresholds, projected for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiumListing {
    pub host_name: String,
    pub location: String,
    pub price_per_night: f64,
    pub availability_365: u16,
}

/// Number of listings sharing one exact location string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

/// Summary statistics for a single numeric column.
#[derive(Debug, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}
