//! Derived views over the cleaned table: averages, top hosts, premium
//! listings, and per-location counts.

use crate::error::ReportError;
use crate::listing::{Listing, NumericField};
use crate::report::types::{LocationCount, PremiumListing, TopHost};
use std::collections::HashMap;

/// A premium listing costs strictly more than this per night.
pub const PREMIUM_MIN_PRICE: f64 = 100.0;
/// A premium listing is available strictly more than this many days a year.
pub const PREMIUM_MIN_AVAILABILITY: u16 = 200;

/// Arithmetic mean of one numeric column over all records.
///
/// # Errors
///
/// Returns [`ReportError::EmptyInput`] for a zero-record table rather than
/// reporting 0 or NaN.
pub fn average(listings: &[Listing], field: NumericField) -> Result<f64, ReportError> {
    if listings.is_empty() {
        return Err(ReportError::EmptyInput);
    }
    let sum: f64 = listings.iter().map(|l| field.value(l)).sum();
    Ok(sum / listings.len() as f64)
}

/// Every listing tied at the maximum review score, in input order.
pub fn top_by_score(listings: &[Listing]) -> Vec<TopHost> {
    let max_score = listings
        .iter()
        .map(|l| l.review_score)
        .fold(f64::NEG_INFINITY, f64::max);

    listings
        .iter()
        .filter(|l| l.review_score == max_score)
        .map(|l| TopHost {
            host_name: l.host_name.clone(),
            location: l.location.clone(),
            review_score: l.review_score,
        })
        .collect()
}

/// Listings clearing both premium thresholds (strict inequalities), in
/// input order.
pub fn filter_premium(listings: &[Listing]) -> Vec<PremiumListing> {
    listings
        .iter()
        .filter(|l| {
            l.price_per_night > PREMIUM_MIN_PRICE && l.availability_365 > PREMIUM_MIN_AVAILABILITY
        })
        .map(|l| PremiumListing {
            host_name: l.host_name.clone(),
            location: l.location.clone(),
            price_per_night: l.price_per_night,
            availability_365: l.availability_365,
        })
        .collect()
}

/// Counts listings per exact location string (case-sensitive).
///
/// Ordered by descending count; ties break by ascending location name so the
/// report is deterministic run to run.
pub fn count_by_location(listings: &[Listing]) -> Vec<LocationCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for listing in listings {
        *counts.entry(listing.location.as_str()).or_default() += 1;
    }

    let mut out: Vec<LocationCount> = counts
        .into_iter()
        .map(|(location, count)| LocationCount {
            location: location.to_string(),
            count,
        })
        .collect();

    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.location.cmp(&b.location)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(host: &str, location: &str, price: f64, score: f64, availability: u16) -> Listing {
        Listing {
            host_name: host.to_string(),
            location: location.to_string(),
            price_per_night: price,
            review_score: score,
            availability_365: availability,
        }
    }

    #[test]
    fn test_average_price() {
        let listings = vec![
            listing("Alice", "NYC", 100.0, 4.0, 300),
            listing("Bob", "LA", 200.0, 5.0, 100),
        ];

        let avg = average(&listings, NumericField::PricePerNight).unwrap();
        assert_eq!(avg, 150.0);
    }

    #[test]
    fn test_average_is_order_invariant() {
        let mut listings = vec![
            listing("Alice", "NYC", 80.0, 4.1, 300),
            listing("Bob", "LA", 120.0, 4.9, 100),
            listing("Cara", "SF", 310.0, 3.7, 250),
        ];

        let forward = average(&listings, NumericField::ReviewScore).unwrap();
        listings.reverse();
        let backward = average(&listings, NumericField::ReviewScore).unwrap();

        assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn test_average_empty_table_is_an_error() {
        let result = average(&[], NumericField::PricePerNight);
        assert!(matches!(result, Err(ReportError::EmptyInput)));
    }

    #[test]
    fn test_top_by_score_includes_all_ties() {
        let listings = vec![
            listing("Alice", "NYC", 100.0, 5.0, 300),
            listing("Bob", "LA", 200.0, 3.0, 100),
            listing("Cara", "SF", 150.0, 5.0, 250),
        ];

        let top = top_by_score(&listings);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].host_name, "Alice");
        assert_eq!(top[1].host_name, "Cara");
        assert!(top.iter().all(|t| t.review_score == 5.0));
    }

    #[test]
    fn test_top_by_score_empty_table() {
        assert!(top_by_score(&[]).is_empty());
    }

    #[test]
    fn test_filter_premium_boundaries_are_strict() {
        let listings = vec![
            listing("In", "NYC", 150.0, 4.0, 250),
            listing("PriceAtLimit", "LA", 100.0, 4.0, 250),
            listing("AvailAtLimit", "SF", 150.0, 4.0, 200),
            listing("BothBelow", "NYC", 90.0, 4.0, 100),
        ];

        let premium = filter_premium(&listings);
        assert_eq!(premium.len(), 1);
        assert_eq!(premium[0].host_name, "In");
    }

    #[test]
    fn test_count_by_location() {
        let listings = vec![
            listing("Alice", "NYC", 100.0, 4.0, 300),
            listing("Bob", "NYC", 200.0, 5.0, 100),
            listing("Cara", "LA", 150.0, 4.5, 250),
        ];

        let counts = count_by_location(&listings);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].location, "NYC");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].location, "LA");
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn test_count_by_location_is_case_sensitive_and_ties_sort_by_name() {
        let listings = vec![
            listing("Alice", "nyc", 100.0, 4.0, 300),
            listing("Bob", "NYC", 200.0, 5.0, 100),
        ];

        let counts = count_by_location(&listings);
        assert_eq!(counts.len(), 2);
        // Equal counts: ascending location order, uppercase before lowercase
        assert_eq!(counts[0].location, "NYC");
        assert_eq!(counts[1].location, "nyc");
    }
}
