use crate::domain::model::{Destination, GeocodeResult, RateQuote};
use crate::utils::error::{GeocodeError, RateError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Resolves a postal code to a state/region via some external lookup.
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    async fn resolve(&self, postal_code: &str) -> Result<GeocodeResult, GeocodeError>;
}

/// Asks an external rate engine which shipping methods apply to a
/// destination. Returns quotes in the engine's own order; an empty vec means
/// "no methods serve this destination", not a failure.
#[async_trait]
pub trait RateClient: Send + Sync {
    async fn quote(&self, destination: &Destination) -> Result<Vec<RateQuote>, RateError>;
}

pub trait ConfigProvider: Send + Sync {
    fn geocode_endpoint(&self) -> &str;
    fn rate_engine_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn cart_item(&self) -> &str;
    fn cart_quantity(&self) -> u32;
    /// Region code -> disclosure text shown alongside any verdict for that
    /// region (e.g. a restricted-catalog notice).
    fn restrictions(&self) -> HashMap<String, String>;
}
