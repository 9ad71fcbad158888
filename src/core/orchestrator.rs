use crate::domain::model::{AvailabilityVerdict, Destination};
use crate::domain::ports::{GeocodeClient, RateClient};
use crate::utils::error::Result;
use std::collections::HashMap;

pub const DEFAULT_COUNTRY: &str = "US";

/// Runs the two-step availability check: postal code -> region via the
/// geocode client, then region + postal code -> quotes via the rate engine.
/// Stateless; every check stands alone.
pub struct AvailabilityOrchestrator<G: GeocodeClient, R: RateClient> {
    geocode: G,
    rates: R,
    /// region code -> disclosure text appended to any verdict for that region.
    restrictions: HashMap<String, String>,
}

impl<G: GeocodeClient, R: RateClient> AvailabilityOrchestrator<G, R> {
    pub fn new(geocode: G, rates: R, restrictions: HashMap<String, String>) -> Self {
        Self {
            geocode,
            rates,
            restrictions,
        }
    }

    pub async fn check(&self, postal_code: &str, country: &str) -> Result<AvailabilityVerdict> {
        let postal_code = postal_code.trim();
        if postal_code.is_empty() {
            return Err(crate::utils::error::CheckError::MissingPostalCode);
        }

        // No rate lookup without a resolved region: the engine keys off the
        // region, so a geocode failure fails the whole check.
        let geocode = self.geocode.resolve(postal_code).await?;
        tracing::info!(
            "Resolved {} to {} ({}, {})",
            postal_code,
            geocode.region_code,
            geocode.locality,
            geocode.region_name
        );

        let destination =
            Destination::new(postal_code, country).with_region(geocode.region_code.clone());

        let quotes = self.rates.quote(&destination).await?;
        tracing::info!(
            "Rate engine offered {} method(s) for {}",
            quotes.len(),
            postal_code
        );

        let disclosure = self.restrictions.get(&geocode.region_code).cloned();

        Ok(AvailabilityVerdict {
            can_ship: !quotes.is_empty(),
            quotes,
            disclosure,
        })
    }
}
