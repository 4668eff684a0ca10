//! Error types for Okta application lookups

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OktaError {
    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("No match: {message}")]
    NoMatch { message: String },

    #[error("Okta API error: {message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl OktaError {
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }

    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn no_match(message: impl Into<String>) -> Self {
        Self::NoMatch {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            status: None,
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status reported by the Okta API, if the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }

    /// Wrap any error as an upstream failure of the named step.
    ///
    /// Errors that already identify a lookup outcome (not found, no match,
    /// invalid filter) pass through untouched.
    pub fn in_step(self, step: &str) -> Self {
        match self {
            Self::Upstream { status, message } => Self::Upstream {
                status,
                message: format!("{}: {}", step, message),
            },
            Self::Config { message } => Self::Upstream {
                status: None,
                message: format!("{}: {}", step, message),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, OktaError>;
