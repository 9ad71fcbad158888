use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "shipping-checker")]
#[command(about = "Check whether the store ships to a postal code")]
pub struct CliConfig {
    /// Postal code to check
    pub postal_code: String,

    #[arg(long, default_value = "US")]
    pub country: String,

    #[arg(long, default_value = crate::config::DEFAULT_GEOCODE_ENDPOINT)]
    pub geocode_endpoint: String,

    #[arg(long, default_value = "http://localhost:8081/rates")]
    pub rate_engine_endpoint: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "generic-product")]
    pub cart_item: String,

    #[arg(long, default_value = "1")]
    pub cart_quantity: u32,

    /// Region restriction as REGION=NOTICE, repeatable. Defaults to the
    /// built-in California notice when omitted.
    #[arg(long = "restriction")]
    pub restrictions: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn geocode_endpoint(&self) -> &str {
        &self.geocode_endpoint
    }

    fn rate_engine_endpoint(&self) -> &str {
        &self.rate_engine_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn cart_item(&self) -> &str {
        &self.cart_item
    }

    fn cart_quantity(&self) -> u32 {
        self.cart_quantity
    }

    fn restrictions(&self) -> HashMap<String, String> {
        if self.restrictions.is_empty() {
            return crate::config::default_restrictions();
        }
        self.restrictions
            .iter()
            .filter_map(|entry| {
                entry
                    .split_once('=')
                    .map(|(region, notice)| (region.trim().to_string(), notice.to_string()))
            })
            .collect()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("geocode_endpoint", &self.geocode_endpoint)?;
        validate_url("rate_engine_endpoint", &self.rate_engine_endpoint)?;
        validate_non_empty_string("country", &self.country)?;
        validate_non_empty_string("cart_item", &self.cart_item)?;
        crate::utils::validation::validate_range(
            "timeout_seconds",
            self.timeout_seconds,
            1,
            300,
        )?;
        Ok(())
    }
}
