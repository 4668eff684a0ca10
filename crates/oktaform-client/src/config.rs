//! Okta client configuration

use serde::{Deserialize, Serialize};

use oktaform_core::{OktaError, Result};

pub const DEFAULT_BASE_URL: &str = "okta.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 5;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Connection settings for one Okta org
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OktaConfig {
    /// Org URL (e.g., "https://acme.okta.com")
    pub org_url: String,
    /// API token for the management API
    #[serde(skip_serializing)]
    pub api_token: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Retries on rate limiting and transport failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay for exponential backoff between retries
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

impl OktaConfig {
    pub fn new(org_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            org_url: org_url.into(),
            api_token: api_token.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }

    /// Build the org URL from an org name and base domain, as in
    /// `acme` + `okta.com` -> `https://acme.okta.com`
    pub fn for_org(org_name: &str, base_url: &str, api_token: impl Into<String>) -> Self {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };
        Self::new(format!("https://{}.{}", org_name, base), api_token)
    }

    pub fn with_retries(mut self, max_retries: u32, retry_delay_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Base URL for the management API
    pub fn api_base(&self) -> String {
        format!("{}/api/v1", self.org_url.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(OktaError::config_error("Okta API token is required"));
        }
        if !(self.org_url.starts_with("https://") || self.org_url.starts_with("http://")) {
            return Err(OktaError::config_error(format!(
                "Okta org URL must include a scheme, got '{}'",
                self.org_url
            )));
        }
        Ok(())
    }
}
