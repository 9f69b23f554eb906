//! Row types for the listings dataset.

use serde::{Deserialize, Serialize};

/// A row as parsed from the source CSV.
///
/// Every field is optional so that blank cells survive parsing and are
/// handled by cleaning instead of failing the whole load. A non-blank cell
/// that does not parse as its column's type is still a load error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    #[serde(rename = "Host_Name")]
    pub host_name: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Price_per_Night")]
    pub price_per_night: Option<f64>,
    #[serde(rename = "Review_Score")]
    pub review_score: Option<f64>,
    #[serde(rename = "Availability_365")]
    pub availability_365: Option<u16>,
}

/// A fully-typed listing row. Produced only by cleaning, so no field is
/// missing. Serializes back to the source column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Host_Name")]
    pub host_name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Price_per_Night")]
    pub price_per_night: f64,
    #[serde(rename = "Review_Score")]
    pub review_score: f64,
    #[serde(rename = "Availability_365")]
    pub availability_365: u16,
}

impl Listing {
    /// Column headers in source order, used when writing the export file.
    pub const HEADERS: [&'static str; 5] = [
        "Host_Name",
        "Location",
        "Price_per_Night",
        "Review_Score",
        "Availability_365",
    ];
}

/// Selects one of the numeric columns for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    PricePerNight,
    ReviewScore,
    Availability365,
}

impl NumericField {
    /// All numeric columns, in source order.
    pub const ALL: [NumericField; 3] = [
        NumericField::PricePerNight,
        NumericField::ReviewScore,
        NumericField::Availability365,
    ];

    /// Source CSV header for this column.
    pub fn name(self) -> &'static str {
        match self {
            NumericField::PricePerNight => "Price_per_Night",
            NumericField::ReviewScore => "Review_Score",
            NumericField::Availability365 => "Availability_365",
        }
    }

    /// Reads this column's value from a listing as an `f64`.
    pub fn value(self, listing: &Listing) -> f64 {
        match self {
            NumericField::PricePerNight => listing.price_per_night,
            NumericField::ReviewScore => listing.review_score,
            NumericField::Availability365 => f64::from(listing.availability_365),
        }
    }
}
