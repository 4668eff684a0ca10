//! Output assembly
//!
//! Flattens an [`ApplicationRecord`] plus the resolved secret and assignments
//! into the attribute mapping the data source reports. Ordered API lists
//! become sets, since consumers diff these collections without regard to
//! order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use oktaform_core::{AppFilter, ApplicationRecord, FilterCriteria, GroupId, UserId};

use crate::schema;

/// Placeholder written in place of sensitive values
pub const SENSITIVE_PLACEHOLDER: &str = "(sensitive)";

/// Group and user ids assigned to an application
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    pub groups: Vec<GroupId>,
    pub users: Vec<UserId>,
}

/// Flattened attributes of one resolved OAuth application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOutput {
    pub id: String,
    pub label: String,
    pub label_prefix: Option<String>,
    pub active_only: bool,
    pub skip_users: bool,
    pub skip_groups: bool,

    pub name: String,
    pub status: String,
    #[serde(rename = "type")]
    pub app_type: Option<String>,
    pub auto_submit_toolbar: bool,
    pub hide_ios: bool,
    pub hide_web: bool,

    pub grant_types: BTreeSet<String>,
    pub response_types: BTreeSet<String>,
    pub redirect_uris: BTreeSet<String>,
    pub post_logout_redirect_uris: BTreeSet<String>,
    pub logo_uri: Option<String>,
    pub login_uri: Option<String>,
    pub login_mode: Option<String>,
    pub login_scopes: BTreeSet<String>,
    pub client_uri: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub policy_uri: Option<String>,
    pub wildcard_redirect: Option<String>,

    /// Canonical JSON text of the application's `_links`
    pub links: String,

    /// Deprecated; kept populated for existing configurations
    pub groups: BTreeSet<String>,
    /// Deprecated; kept populated for existing configurations
    pub users: BTreeSet<String>,
}

fn to_set(values: &[String]) -> BTreeSet<String> {
    values.iter().cloned().collect()
}

impl ResolvedOutput {
    /// Assemble the output for a located application.
    ///
    /// `client_secret` is only meaningful for applications with an OAuth
    /// client block and is ignored otherwise.
    pub fn assemble(
        criteria: &FilterCriteria,
        app: &ApplicationRecord,
        client_secret: Option<String>,
        assignments: Assignments,
    ) -> Self {
        let mut output = Self {
            id: app.id.to_string(),
            label: app.label.clone(),
            label_prefix: match &criteria.filter {
                AppFilter::ByLabelPrefix(prefix) => Some(prefix.clone()),
                _ => None,
            },
            active_only: criteria.active_only,
            skip_users: criteria.skip_users,
            skip_groups: criteria.skip_groups,
            name: app.name.clone(),
            status: app.status.clone(),
            auto_submit_toolbar: app.visibility.auto_submit_toolbar,
            hide_ios: app.visibility.hide.ios,
            hide_web: app.visibility.hide.web,
            links: app.links.to_string(),
            groups: assignments.groups.into_iter().map(GroupId::into_string).collect(),
            users: assignments.users.into_iter().map(UserId::into_string).collect(),
            ..Self::default()
        };

        if let Some(oauth) = app.oauth_client() {
            output.app_type = oauth.application_type.clone();
            output.client_uri = oauth.client_uri.clone();
            output.logo_uri = oauth.logo_uri.clone();
            output.login_uri = oauth.initiate_login_uri.clone();
            output.client_id = app.client_id().map(str::to_string);
            output.client_secret = client_secret;
            output.policy_uri = oauth.policy_uri.clone();
            output.wildcard_redirect = oauth.wildcard_redirect.clone();
            output.grant_types = to_set(&oauth.grant_types);
            output.response_types = to_set(&oauth.response_types);
            output.redirect_uris = to_set(&oauth.redirect_uris);
            output.post_logout_redirect_uris = to_set(&oauth.post_logout_redirect_uris);

            if let Some(login) = &oauth.idp_initiated_login {
                output.login_mode = login.mode.clone();
                output.login_scopes = to_set(&login.default_scope);
            }
        }

        output
    }

    /// Attribute map for display or state storage.
    ///
    /// Sensitive attributes that carry a value are replaced with a placeholder
    /// unless `show_sensitive` is set.
    pub fn to_state(&self, show_sensitive: bool) -> serde_json::Result<Value> {
        let mut state = serde_json::to_value(self)?;
        if show_sensitive {
            return Ok(state);
        }

        if let Value::Object(map) = &mut state {
            for name in schema::sensitive_attributes() {
                if let Some(value) = map.get_mut(name) {
                    let has_value = value.as_str().map(|s| !s.is_empty()).unwrap_or(false);
                    if has_value {
                        *value = Value::String(SENSITIVE_PLACEHOLDER.to_string());
                    }
                }
            }
        }
        Ok(state)
    }
}
