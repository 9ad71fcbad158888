pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{CliConfig, TomlConfig};
pub use core::geocode::HttpGeocodeClient;
pub use core::orchestrator::AvailabilityOrchestrator;
pub use core::rates::HttpRateClient;
pub use domain::model::{AvailabilityVerdict, Destination, GeocodeResult, RateQuote};
pub use domain::ports::{ConfigProvider, GeocodeClient, RateClient};
pub use utils::error::{CheckError, GeocodeError, RateError, Result};
