use crate::domain::model::GeocodeResult;
use crate::domain::ports::GeocodeClient;
use crate::utils::error::GeocodeError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// One record from the ZIP lookup API. The API returns an array of these,
/// most specific locality first.
#[derive(Debug, Deserialize)]
struct ZipRecord {
    state_id: Option<String>,
    #[serde(default)]
    state_name: String,
    #[serde(default)]
    city: String,
}

/// Geocode adapter over a sipcode-style lookup API:
/// `GET {endpoint}/{postal_code}` -> `[{state_id, state_name, city}, ...]`.
pub struct HttpGeocodeClient {
    client: Client,
    endpoint: String,
}

impl HttpGeocodeClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GeocodeClient for HttpGeocodeClient {
    async fn resolve(&self, postal_code: &str) -> Result<GeocodeResult, GeocodeError> {
        let url = format!("{}/{}", self.endpoint, postal_code);
        tracing::debug!("Geocode lookup: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(GeocodeError::ConnectionFailed)?;

        tracing::debug!("Geocode response status: {}", response.status());

        // The provider answers errors with a JSON body too, so the status is
        // not checked separately: anything that fails to decode into a
        // non-empty record list is "not found".
        let records: Vec<ZipRecord> = response.json().await.map_err(|e| {
            tracing::debug!("Geocode body not decodable: {}", e);
            GeocodeError::NotFound
        })?;

        let first = records.into_iter().next().ok_or(GeocodeError::NotFound)?;
        let region_code = first.state_id.ok_or(GeocodeError::NotFound)?;

        Ok(GeocodeResult {
            region_code,
            region_name: first.state_name,
            locality: first.city,
        })
    }
}
