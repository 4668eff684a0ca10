//! Okta application and client secret models
//!
//! These mirror the JSON shapes of the Okta Management API closely enough to
//! deserialize `GET /api/v1/apps` responses directly. Fields the lookup never
//! reads are left out; serde ignores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{AppId, SecretId};

// =============================================================================
// Applications
// =============================================================================

/// An Okta application as returned by the apps API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: AppId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub settings: ApplicationSettings,
    #[serde(default)]
    pub credentials: ApplicationCredentials,
    /// HAL links, kept opaque
    #[serde(rename = "_links", default)]
    pub links: serde_json::Value,
}

impl ApplicationRecord {
    /// OAuth client settings, absent for non-OIDC application shapes
    pub fn oauth_client(&self) -> Option<&OAuthClientSettings> {
        self.settings.oauth_client.as_ref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.credentials
            .oauth_client
            .as_ref()
            .and_then(|c| c.client_id.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Visibility {
    #[serde(rename = "autoSubmitToolbar", default)]
    pub auto_submit_toolbar: bool,
    #[serde(default)]
    pub hide: VisibilityHide,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisibilityHide {
    #[serde(rename = "iOS", default)]
    pub ios: bool,
    #[serde(default)]
    pub web: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationSettings {
    #[serde(rename = "oauthClient", default, skip_serializing_if = "Option::is_none")]
    pub oauth_client: Option<OAuthClientSettings>,
}

/// `settings.oauthClient` block of an OIDC application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuthClientSettings {
    #[serde(default)]
    pub application_type: Option<String>,
    #[serde(default)]
    pub client_uri: Option<String>,
    #[serde(default)]
    pub logo_uri: Option<String>,
    #[serde(default)]
    pub initiate_login_uri: Option<String>,
    #[serde(default)]
    pub policy_uri: Option<String>,
    #[serde(default)]
    pub wildcard_redirect: Option<String>,
    #[serde(default)]
    pub grant_types: Vec<String>,
    #[serde(default)]
    pub response_types: Vec<String>,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
    #[serde(default)]
    pub post_logout_redirect_uris: Vec<String>,
    #[serde(default)]
    pub idp_initiated_login: Option<IdpInitiatedLogin>,
}

/// Dashboard-initiated login settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdpInitiatedLogin {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub default_scope: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationCredentials {
    #[serde(rename = "oauthClient", default, skip_serializing_if = "Option::is_none")]
    pub oauth_client: Option<OAuthClientCredentials>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuthClientCredentials {
    #[serde(default)]
    pub client_id: Option<String>,
}

// =============================================================================
// Client Secrets
// =============================================================================

/// Lifecycle status of an OAuth client secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecretStatus {
    Active,
    Inactive,
    Expired,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for SecretStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Inactive => write!(f, "INACTIVE"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// An OAuth client secret from `GET /api/v1/apps/{id}/credentials/secrets`
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientSecret {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SecretId>,
    #[serde(rename = "client_secret", default)]
    pub value: String,
    pub status: SecretStatus,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl ClientSecret {
    pub fn is_active(&self) -> bool {
        self.status == SecretStatus::Active
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSecret")
            .field("id", &self.id)
            .field("value", &"[REDACTED]")
            .field("status", &self.status)
            .field("created", &self.created)
            .finish()
    }
}
