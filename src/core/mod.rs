pub mod geocode;
pub mod orchestrator;
pub mod rates;

pub use crate::domain::model::{AvailabilityVerdict, Destination, GeocodeResult, RateQuote};
pub use crate::domain::ports::{ConfigProvider, GeocodeClient, RateClient};
pub use crate::utils::error::Result;
