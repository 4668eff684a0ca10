//! Raw data source configuration and its validation into [`FilterCriteria`]

use serde::{Deserialize, Serialize};

use oktaform_core::{FilterCriteria, Result};

/// User-supplied attributes of the data source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppOauthConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub label_prefix: Option<String>,
    /// Search only ACTIVE applications
    #[serde(default = "default_active_only")]
    pub active_only: bool,
    #[serde(default)]
    pub skip_users: bool,
    #[serde(default)]
    pub skip_groups: bool,
}

fn default_active_only() -> bool {
    true
}

impl Default for AppOauthConfig {
    fn default() -> Self {
        Self {
            id: None,
            label: None,
            label_prefix: None,
            active_only: default_active_only(),
            skip_users: false,
            skip_groups: false,
        }
    }
}

impl AppOauthConfig {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn by_label_prefix(prefix: impl Into<String>) -> Self {
        Self {
            label_prefix: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Validate the attributes into lookup criteria
    pub fn criteria(&self) -> Result<FilterCriteria> {
        Ok(FilterCriteria::from_fields(
            self.id.as_deref(),
            self.label.as_deref(),
            self.label_prefix.as_deref(),
            self.active_only,
        )?
        .with_skip_users(self.skip_users)
        .with_skip_groups(self.skip_groups))
    }
}
