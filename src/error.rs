//! Error types for the Seasonal Horizon service
//!
//! Provider failures never surface here: they are logged and turned into
//! missing data. What remains is startup trouble and a failed narrative.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HorizonError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream forecast or geocoding request failed
    #[error("API error: {message}")]
    Api { message: String },

    /// The engine produced no usable text
    #[error("Narrative error: {message}")]
    Narrative { message: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl HorizonError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn narrative<S: Into<String>>(message: S) -> Self {
        Self::Narrative {
            message: message.into(),
        }
    }

    /// Message safe to hand to API clients
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            HorizonError::Config { .. } => "The service is misconfigured.".to_string(),
            HorizonError::Api { .. } => {
                "Unable to reach the weather and daylight services right now.".to_string()
            }
            HorizonError::Narrative { .. } => {
                "Could not generate today's text. Please try again.".to_string()
            }
            HorizonError::Io { .. } => "Internal I/O failure.".to_string(),
        }
    }
}
