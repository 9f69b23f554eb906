use crate::listing::{Listing, RawListing};

/// Drops every row with a missing value in any field.
///
/// Kept rows are converted field-for-field, in input order. The output is
/// the fully-typed table all downstream aggregations run over.
pub fn clean(rows: &[RawListing]) -> Vec<Listing> {
    rows.iter()
        .filter_map(|row| {
            Some(Listing {
                host_name: row.host_name.clone()?,
                location: row.location.clone()?,
                price_per_night: row.price_per_night?,
                review_score: row.review_score?,
                availability_365: row.availability_365?,
            })
        })
        .collect()
}
