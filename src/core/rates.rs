use crate::domain::model::{Destination, RateQuote};
use crate::domain::ports::RateClient;
use crate::utils::error::RateError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct CartLine<'a> {
    item: &'a str,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct RateRequest<'a> {
    destination: &'a Destination,
    contents: Vec<CartLine<'a>>,
}

#[derive(Debug, Deserialize)]
struct RateResponse {
    // serde_json's preserve_order keeps the engine's method ordering here.
    #[serde(default)]
    rates: serde_json::Map<String, serde_json::Value>,
}

/// Rate-engine adapter: POSTs the destination plus a synthetic one-item cart
/// and decodes whatever methods the engine offers.
///
/// The synthetic cart matters: rate rules that key off cart contents produce
/// zero methods for an empty cart even where shipping is possible, so probing
/// with a single nominal unit of a generic product avoids that false
/// negative.
pub struct HttpRateClient {
    client: Client,
    endpoint: String,
    cart_item: String,
    cart_quantity: u32,
}

impl HttpRateClient {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        cart_item: impl Into<String>,
        cart_quantity: u32,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            cart_item: cart_item.into(),
            cart_quantity,
        }
    }
}

#[async_trait]
impl RateClient for HttpRateClient {
    async fn quote(&self, destination: &Destination) -> Result<Vec<RateQuote>, RateError> {
        let request = RateRequest {
            destination,
            contents: vec![CartLine {
                item: &self.cart_item,
                quantity: self.cart_quantity,
            }],
        };

        tracing::debug!(
            "Rate request to {} for postal code {}",
            self.endpoint,
            destination.postal_code
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| RateError::EngineUnavailable {
                reason: format!("request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::EngineUnavailable {
                reason: format!("engine returned status {}", status),
            });
        }

        let body: RateResponse =
            response
                .json()
                .await
                .map_err(|e| RateError::EngineUnavailable {
                    reason: format!("undecodable engine response: {}", e),
                })?;

        // Keep the engine's own ordering; ties are the engine's business.
        let quotes = body
            .rates
            .into_iter()
            .map(|(method_id, method)| {
                let label = method
                    .get("label")
                    .and_then(|v| v.as_str())
                    .unwrap_or(method_id.as_str())
                    .to_string();
                let cost = method.get("cost").and_then(|v| v.as_f64());
                RateQuote {
                    method_id,
                    label,
                    cost,
                }
            })
            .collect();

        Ok(quotes)
    }
}
