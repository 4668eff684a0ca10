//! CLI configuration

use anyhow::Result;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;

use oktaform_client::config::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRY_DELAY_MS,
};
use oktaform_client::OktaConfig;
use oktaform_core::OktaError;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub okta: OktaSettings,
    pub http: HttpSettings,
    #[serde(default)]
    pub read: ReadSettings,
}

#[derive(Debug, Deserialize)]
pub struct OktaSettings {
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Full org URL; takes precedence over `org_name` + `base_url`
    #[serde(default)]
    pub org_url: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReadSettings {
    /// Overall deadline for one read
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
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

impl Settings {
    pub fn load() -> Result<Self> {
        let config = Self::defaults()?
            // Load from config file if present
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables with OKTAFORM_ prefix
            .add_source(
                Environment::with_prefix("OKTAFORM")
                    .separator("__")
                    .try_parsing(true),
            )
            // The provider's own variables win over everything else
            .set_override_option("okta.org_name", env::var("OKTA_ORG_NAME").ok())?
            .set_override_option("okta.base_url", env::var("OKTA_BASE_URL").ok())?
            .set_override_option("okta.api_token", env::var("OKTA_API_TOKEN").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("okta.base_url", DEFAULT_BASE_URL)?
            .set_default("http.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("http.max_retries", DEFAULT_MAX_RETRIES)?
            .set_default("http.retry_delay_ms", DEFAULT_RETRY_DELAY_MS)?)
    }

    /// Client configuration for the configured org
    pub fn okta_config(&self) -> oktaform_core::Result<OktaConfig> {
        let token = self
            .okta
            .api_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                OktaError::config_error("API token is not set (OKTA_API_TOKEN or okta.api_token)")
            })?;

        let config = match (self.okta.org_url.as_deref(), self.okta.org_name.as_deref()) {
            (Some(url), _) if !url.is_empty() => OktaConfig::new(url, token),
            (_, Some(org)) if !org.is_empty() => {
                OktaConfig::for_org(org, &self.okta.base_url, token)
            }
            _ => {
                return Err(OktaError::config_error(
                    "Okta org is not set (OKTA_ORG_NAME, okta.org_name or okta.org_url)",
                ))
            }
        };

        Ok(config
            .with_request_timeout(self.http.request_timeout_secs)
            .with_retries(self.http.max_retries, self.http.retry_delay_ms))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            okta: OktaSettings {
                org_name: None,
                base_url: default_base_url(),
                org_url: None,
                api_token: None,
            },
            http: HttpSettings {
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                max_retries: DEFAULT_MAX_RETRIES,
                retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            },
            read: ReadSettings::default(),
        }
    }
}
