use crate::core::geocode::HttpGeocodeClient;
use crate::core::orchestrator::AvailabilityOrchestrator;
use crate::core::rates::HttpRateClient;
use crate::domain::ports::ConfigProvider;
use crate::server::nonce::NonceStore;
use crate::utils::error::{CheckError, Result};
use std::time::Duration;

/// Shared, read-only service state. Checks themselves are stateless; only
/// the nonce store mutates, and it handles its own synchronization.
pub struct AppState {
    pub orchestrator: AvailabilityOrchestrator<HttpGeocodeClient, HttpRateClient>,
    pub nonces: NonceStore,
}

impl AppState {
    pub fn from_config(config: &impl ConfigProvider, nonce_ttl: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CheckError::ConfigError {
                field: "http_client".to_string(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        let geocode = HttpGeocodeClient::new(client.clone(), config.geocode_endpoint());
        let rates = HttpRateClient::new(
            client,
            config.rate_engine_endpoint(),
            config.cart_item(),
            config.cart_quantity(),
        );
        let orchestrator = AvailabilityOrchestrator::new(geocode, rates, config.restrictions());

        Ok(Self {
            orchestrator,
            nonces: NonceStore::new(nonce_ttl),
        })
    }
}
