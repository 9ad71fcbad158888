use thiserror::Error;

/// Failures while resolving a postal code to a region.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("geocode request failed: {0}")]
    ConnectionFailed(#[source] reqwest::Error),

    #[error("postal code not recognized by the geocoding service")]
    NotFound,
}

/// Failures while asking the rate engine for quotes.
///
/// Zero quotes is NOT an error and never appears here; an empty quote list
/// is the legitimate "does not ship" outcome.
#[derive(Error, Debug)]
pub enum RateError {
    #[error("rate engine unavailable: {reason}")]
    EngineUnavailable { reason: String },
}

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("postal code is required")]
    MissingPostalCode,

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Rate(#[from] RateError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CheckError {
    /// Storefront-facing wording for each failure class. These texts are
    /// shown verbatim to the visitor; internal detail stays in the logs.
    pub fn user_friendly_message(&self) -> &'static str {
        match self {
            CheckError::MissingPostalCode => "Please enter a ZIP code.",
            CheckError::Geocode(GeocodeError::ConnectionFailed(_)) => {
                "Error connecting to ZIP code service. Please try again."
            }
            CheckError::Geocode(GeocodeError::NotFound) => {
                "Invalid ZIP code or state information not found."
            }
            CheckError::Rate(RateError::EngineUnavailable { .. }) => {
                "Shipping availability could not be determined right now. Please try again."
            }
            CheckError::ConfigError { .. } => "The shipping checker is misconfigured.",
            CheckError::IoError(_) | CheckError::SerializationError(_) => {
                "An internal error occurred. Please try again."
            }
        }
    }

    /// Exit code for the CLI: 2 for user-correctable input, 1 for remote or
    /// internal failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::MissingPostalCode => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
