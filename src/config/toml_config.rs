use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub geocode: GeocodeConfig,
    pub rate_engine: RateEngineConfig,
    pub cart: Option<CartConfig>,
    pub security: Option<SecurityConfig>,
    /// Region code -> disclosure text. Absent table falls back to the
    /// built-in California notice.
    pub restrictions: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEngineConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    pub item: Option<String>,
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub nonce_ttl_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute ${VAR_NAME} with the environment value; unknown variables
    /// are left as-is so validation can flag them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn nonce_ttl(&self) -> Duration {
        let secs = self
            .security
            .as_ref()
            .and_then(|s| s.nonce_ttl_seconds)
            .unwrap_or(600);
        Duration::from_secs(secs)
    }
}

impl ConfigProvider for TomlConfig {
    fn geocode_endpoint(&self) -> &str {
        &self.geocode.endpoint
    }

    fn rate_engine_endpoint(&self) -> &str {
        &self.rate_engine.endpoint
    }

    fn request_timeout(&self) -> Duration {
        let secs = self
            .geocode
            .timeout_seconds
            .or(self.rate_engine.timeout_seconds)
            .unwrap_or(10);
        Duration::from_secs(secs)
    }

    fn cart_item(&self) -> &str {
        self.cart
            .as_ref()
            .and_then(|c| c.item.as_deref())
            .unwrap_or("generic-product")
    }

    fn cart_quantity(&self) -> u32 {
        self.cart.as_ref().and_then(|c| c.quantity).unwrap_or(1)
    }

    fn restrictions(&self) -> HashMap<String, String> {
        match &self.restrictions {
            Some(map) => map.clone(),
            None => crate::config::default_restrictions(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("service.name", &self.service.name)?;
        validate_non_empty_string("service.bind_addr", &self.service.bind_addr)?;
        validate_url("geocode.endpoint", &self.geocode.endpoint)?;
        validate_url("rate_engine.endpoint", &self.rate_engine.endpoint)?;

        if let Some(secs) = self.geocode.timeout_seconds {
            validate_range("geocode.timeout_seconds", secs, 1, 300)?;
        }
        if let Some(secs) = self.rate_engine.timeout_seconds {
            validate_range("rate_engine.timeout_seconds", secs, 1, 300)?;
        }
        if let Some(secs) = self.security.as_ref().and_then(|s| s.nonce_ttl_seconds) {
            validate_range("security.nonce_ttl_seconds", secs, 10, 86_400)?;
        }
        if let Some(restrictions) = &self.restrictions {
            for (region, notice) in restrictions {
                validate_non_empty_string("restrictions.<region>", region)?;
                validate_non_empty_string(&format!("restrictions.{}", region), notice)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[service]
name = "shipping-checker"
bind_addr = "127.0.0.1:8080"

[geocode]
endpoint = "https://api.sipcode.dev/zip"
timeout_seconds = 10

[rate_engine]
endpoint = "http://rates.internal:8081/rates"

[cart]
item = "generic-product"
quantity = 1

[security]
nonce_ttl_seconds = 600

[restrictions]
CA = "California shipping is restricted to select categories."
"#;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.service.name, "shipping-checker");
        assert_eq!(config.geocode_endpoint(), "https://api.sipcode.dev/zip");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.cart_item(), "generic-product");
        assert_eq!(config.cart_quantity(), 1);
        assert_eq!(config.nonce_ttl(), Duration::from_secs(600));
        assert!(config.restrictions().contains_key("CA"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let minimal = r#"
[service]
name = "shipping-checker"
bind_addr = "127.0.0.1:8080"

[geocode]
endpoint = "https://api.sipcode.dev/zip"

[rate_engine]
endpoint = "http://localhost:8081/rates"
"#;
        let config = TomlConfig::from_toml_str(minimal).unwrap();
        assert_eq!(config.cart_item(), "generic-product");
        assert_eq!(config.cart_quantity(), 1);
        assert_eq!(config.nonce_ttl(), Duration::from_secs(600));
        // default restriction table still covers California
        assert!(config.restrictions().contains_key("CA"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SC_TEST_RATE_ENDPOINT", "http://rates.test:9090/rates");
        let content = r#"
[service]
name = "shipping-checker"
bind_addr = "127.0.0.1:8080"

[geocode]
endpoint = "https://api.sipcode.dev/zip"

[rate_engine]
endpoint = "${SC_TEST_RATE_ENDPOINT}"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.rate_engine.endpoint, "http://rates.test:9090/rates");
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let content = SAMPLE.replace("https://api.sipcode.dev/zip", "not-a-url");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.service.bind_addr, "127.0.0.1:8080");
    }
}
