use serde::{Deserialize, Serialize};

/// Where the visitor wants us to ship. Immutable once built for a check;
/// `region` stays `None` until the geocode step resolves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub postal_code: String,
    pub country: String,
    pub region: Option<String>,
}

impl Destination {
    pub fn new(postal_code: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            country: country.into(),
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// One postal-code lookup result. Used once, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub region_code: String,
    pub region_name: String,
    pub locality: String,
}

/// A single shipping method the rate engine offered for a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateQuote {
    pub method_id: String,
    pub label: String,
    pub cost: Option<f64>,
}

/// The answer we render. Quotes keep the engine's own ordering; a quote set
/// is only meaningful paired with the destination that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    pub can_ship: bool,
    pub quotes: Vec<RateQuote>,
    pub disclosure: Option<String>,
}
