pub mod cli;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Default lookup endpoint, same provider the storefront has always used.
pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://api.sipcode.dev/zip";

/// Built-in restricted-region notice, applied when no restriction table is
/// configured. Only California carries a catalog restriction out of the box.
pub const DEFAULT_CA_DISCLOSURE: &str = "ATTENTION CALIFORNIA CUSTOMERS: California shipping is only available for tobacco flavors and vape hardware.";

pub fn default_restrictions() -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();
    map.insert("CA".to_string(), DEFAULT_CA_DISCLOSURE.to_string());
    map
}
