//! Attribute schema of the `okta_app_oauth` data source

use serde::Serialize;

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Bool,
    /// Unordered set of strings
    StringSet,
}

/// Whether the user supplies the attribute or the read fills it in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
    Optional,
    Computed,
    /// Optional input that the read also echoes back
    OptionalComputed,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub mode: AttributeMode,
    #[serde(skip_serializing_if = "is_false")]
    pub sensitive: bool,
    #[serde(skip_serializing_if = "no_conflicts")]
    pub conflicts_with: &'static [&'static str],
    #[serde(skip_serializing_if = "no_description")]
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<&'static str>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn no_conflicts(value: &&'static [&'static str]) -> bool {
    value.is_empty()
}

fn no_description(value: &&'static str) -> bool {
    value.is_empty()
}

const fn attr(name: &'static str, kind: AttributeKind, mode: AttributeMode) -> AttributeSchema {
    AttributeSchema {
        name,
        kind,
        mode,
        sensitive: false,
        conflicts_with: &[],
        description: "",
        deprecated: None,
    }
}

const fn computed(name: &'static str, kind: AttributeKind, description: &'static str) -> AttributeSchema {
    AttributeSchema {
        description,
        ..attr(name, kind, AttributeMode::Computed)
    }
}

use AttributeKind::{Bool, String as Str, StringSet};

pub static APP_OAUTH_SCHEMA: &[AttributeSchema] = &[
    AttributeSchema {
        conflicts_with: &["label", "label_prefix"],
        ..attr("id", Str, AttributeMode::OptionalComputed)
    },
    AttributeSchema {
        conflicts_with: &["id", "label_prefix"],
        ..attr("label", Str, AttributeMode::OptionalComputed)
    },
    AttributeSchema {
        conflicts_with: &["id", "label"],
        ..attr("label_prefix", Str, AttributeMode::Optional)
    },
    AttributeSchema {
        description: "Search only ACTIVE applications.",
        ..attr("active_only", Bool, AttributeMode::Optional)
    },
    AttributeSchema {
        description: "Indicator that allows a user to skip users",
        ..attr("skip_users", Bool, AttributeMode::Optional)
    },
    AttributeSchema {
        description: "Indicator that allows a user to skip groups",
        ..attr("skip_groups", Bool, AttributeMode::Optional)
    },
    computed("type", Str, ""),
    computed("name", Str, ""),
    computed("status", Str, ""),
    computed("auto_submit_toolbar", Bool, "Display auto submit toolbar"),
    computed("hide_ios", Bool, "Do not display application icon on mobile app"),
    computed("hide_web", Bool, "Do not display application icon to users"),
    computed("grant_types", StringSet, "List of OAuth 2.0 grant types"),
    computed("response_types", StringSet, "List of OAuth 2.0 response type strings."),
    computed("redirect_uris", StringSet, "List of URIs for use in the redirect-based flow."),
    computed("post_logout_redirect_uris", StringSet, "List of URIs for redirection after logout"),
    computed("logo_uri", Str, "URI that references a logo for the client."),
    computed("login_uri", Str, "URI that initiates login."),
    computed("login_mode", Str, "The type of Idp-Initiated login that the client supports, if any"),
    computed("login_scopes", StringSet, "List of scopes to use for the request when 'login_mode' == OKTA"),
    computed("client_uri", Str, "URI to a web page providing information about the client."),
    computed("client_id", Str, "OAuth client ID"),
    AttributeSchema {
        sensitive: true,
        ..computed("client_secret", Str, "OAuth client secret")
    },
    computed("policy_uri", Str, "URI to web page providing client policy document."),
    computed("links", Str, "Discoverable resources related to the app"),
    AttributeSchema {
        deprecated: Some("The `groups` field is now deprecated for the data source `okta_app_oauth`, please replace all uses of this with: `okta_app_group_assignments`"),
        ..computed("groups", StringSet, "Groups associated with the application")
    },
    AttributeSchema {
        deprecated: Some("The `users` field is now deprecated for the data source `okta_app_oauth`, please replace all uses of this with: `okta_app_user_assignments`"),
        ..computed("users", StringSet, "Users associated with the application")
    },
    computed("wildcard_redirect", Str, "Indicates if the client is allowed to use wildcard matching of redirect_uris"),
];

/// Look up one attribute by name
pub fn attribute(name: &str) -> Option<&'static AttributeSchema> {
    APP_OAUTH_SCHEMA.iter().find(|a| a.name == name)
}

/// Names of attributes whose values must not be displayed
pub fn sensitive_attributes() -> impl Iterator<Item = &'static str> {
    APP_OAUTH_SCHEMA
        .iter()
        .filter(|a| a.sensitive)
        .map(|a| a.name)
}
