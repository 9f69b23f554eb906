//! CSV loading for the listings dataset.

use crate::error::ReportError;
use crate::listing::RawListing;
use std::path::Path;
use tracing::debug;

/// Reads the source CSV into raw rows.
///
/// # Errors
///
/// Returns [`ReportError::Load`] if the file is missing or a row's non-blank
/// cells fail to parse as their column types. Blank cells become `None` and
/// are left for cleaning.
pub fn load_listings(path: &Path) -> Result<Vec<RawListing>, ReportError> {
    let mut rdr = csv::Reader::from_path(path).map_err(ReportError::Load)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: RawListing = result.map_err(ReportError::Load)?;
        rows.push(record);
    }

    debug!(rows = rows.len(), path = %path.display(), "Listings CSV loaded");
    Ok(rows)
}
