//! Unit tests for oktaform-core

use super::*;

// =============================================================================
// Filter Tests
// =============================================================================

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_single_field_selects_variant() {
        let by_id = FilterCriteria::from_fields(Some("0oa123"), None, None, true).unwrap();
        assert_eq!(by_id.filter, AppFilter::ById(AppId::new("0oa123")));

        let by_label = FilterCriteria::from_fields(None, Some("My App"), None, true).unwrap();
        assert_eq!(by_label.filter, AppFilter::ByLabel("My App".to_string()));

        let by_prefix = FilterCriteria::from_fields(None, None, Some("My"), false).unwrap();
        assert_eq!(by_prefix.filter, AppFilter::ByLabelPrefix("My".to_string()));
        assert!(!by_prefix.active_only);
    }

    #[test]
    fn test_no_fields_is_any() {
        let criteria = FilterCriteria::from_fields(None, None, None, true).unwrap();
        assert_eq!(criteria.filter, AppFilter::Any);
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let criteria = FilterCriteria::from_fields(Some(""), Some("App"), Some(""), true).unwrap();
        assert_eq!(criteria.filter, AppFilter::ByLabel("App".to_string()));
    }

    #[test]
    fn test_conflicting_fields_rejected() {
        let combos = [
            (Some("0oa1"), Some("App"), None),
            (Some("0oa1"), None, Some("Ap")),
            (None, Some("App"), Some("Ap")),
            (Some("0oa1"), Some("App"), Some("Ap")),
        ];

        for (id, label, prefix) in combos {
            let err = FilterCriteria::from_fields(id, label, prefix, true).unwrap_err();
            assert!(matches!(err, OktaError::InvalidFilter { .. }), "got {:?}", err);
        }
    }

    #[test]
    fn test_conflict_message_echoes_values() {
        let err = FilterCriteria::from_fields(Some("0oa1"), Some("App"), None, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("id=\"0oa1\""));
        assert!(message.contains("label=\"App\""));
    }

    #[test]
    fn test_search_query_for_label() {
        let criteria = FilterCriteria::from_fields(None, Some("My App"), None, true).unwrap();
        let query = criteria.search_query();
        assert_eq!(query.limit, Some(1));
        assert_eq!(query.filter.as_deref(), Some(ACTIVE_STATUS_FILTER));
        assert_eq!(query.q.as_deref(), Some("My App"));
    }

    #[test]
    fn test_search_query_without_active_only() {
        let criteria = FilterCriteria::from_fields(None, None, Some("My"), false).unwrap();
        let query = criteria.search_query();
        assert_eq!(query.filter, None);
        assert_eq!(query.q.as_deref(), Some("My"));
    }

    #[test]
    fn test_query_string_encoding() {
        let query = AppQuery {
            limit: Some(1),
            filter: Some(ACTIVE_STATUS_FILTER.to_string()),
            q: Some("My App".to_string()),
        };
        assert_eq!(
            query.to_query_string(),
            "?limit=1&filter=status%20eq%20%22ACTIVE%22&q=My%20App"
        );
        assert_eq!(AppQuery::default().to_query_string(), "");
    }

    #[test]
    fn test_criteria_display() {
        let criteria = FilterCriteria::from_fields(None, None, Some("dev-"), true).unwrap();
        assert_eq!(
            criteria.to_string(),
            "id: , label: , label_prefix: dev-, active_only: true"
        );
    }
}

// =============================================================================
// Model Tests
// =============================================================================

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn test_oidc_application_deserialization() {
        let json = r#"{
            "id": "0oa1abc",
            "name": "oidc_client",
            "label": "Example",
            "status": "ACTIVE",
            "signOnMode": "OPENID_CONNECT",
            "visibility": {"autoSubmitToolbar": true, "hide": {"iOS": true, "web": false}},
            "credentials": {"oauthClient": {"client_id": "abc123", "token_endpoint_auth_method": "client_secret_basic"}},
            "settings": {
                "app": {},
                "oauthClient": {
                    "application_type": "web",
                    "grant_types": ["authorization_code", "refresh_token"],
                    "response_types": ["code"],
                    "redirect_uris": ["https://example.com/cb"],
                    "idp_initiated_login": {"mode": "OKTA", "default_scope": ["openid"]}
                }
            },
            "_links": {"self": {"href": "https://acme.okta.com/api/v1/apps/0oa1abc"}}
        }"#;

        let app: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(app.id.as_str(), "0oa1abc");
        assert!(app.visibility.auto_submit_toolbar);
        assert!(app.visibility.hide.ios);
        assert_eq!(app.client_id(), Some("abc123"));

        let oauth = app.oauth_client().unwrap();
        assert_eq!(oauth.application_type.as_deref(), Some("web"));
        assert_eq!(oauth.grant_types.len(), 2);
        let login = oauth.idp_initiated_login.as_ref().unwrap();
        assert_eq!(login.mode.as_deref(), Some("OKTA"));
    }

    #[test]
    fn test_application_without_oauth_block() {
        let json = r#"{"id": "0oa2", "name": "bookmark", "label": "Link", "status": "ACTIVE"}"#;
        let app: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert!(app.oauth_client().is_none());
        assert!(app.client_id().is_none());
        assert!(app.links.is_null());
    }

    #[test]
    fn test_application_missing_id_fails() {
        let json = r#"{"name": "oidc_client", "label": "Example"}"#;
        assert!(serde_json::from_str::<ApplicationRecord>(json).is_err());
    }

    #[test]
    fn test_secret_status_parsing() {
        let json = r#"[
            {"id": "ocs1", "client_secret": "a", "status": "ACTIVE", "created": "2023-01-01T00:00:00.000Z"},
            {"id": "ocs2", "client_secret": "b", "status": "INACTIVE", "created": "2023-02-01T00:00:00.000Z"},
            {"id": "ocs3", "client_secret": "c", "status": "SOMETHING_NEW"}
        ]"#;
        let secrets: Vec<ClientSecret> = serde_json::from_str(json).unwrap();
        assert_eq!(secrets[0].status, SecretStatus::Active);
        assert!(secrets[0].is_active());
        assert_eq!(secrets[1].status, SecretStatus::Inactive);
        assert_eq!(secrets[2].status, SecretStatus::Unknown);
        assert!(secrets[2].created.is_none());
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = ClientSecret {
            id: Some(SecretId::new("ocs1")),
            value: "super-secret".to_string(),
            status: SecretStatus::Active,
            created: None,
        };
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}

// =============================================================================
// Error Tests
// =============================================================================

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_in_step_prefixes_upstream() {
        let err = OktaError::http_status(500, "boom").in_step("failed to list OAuth apps");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Okta API error: failed to list OAuth apps: boom");
    }

    #[test]
    fn test_in_step_keeps_lookup_outcomes() {
        let err = OktaError::not_found("application", "0oa1").in_step("failed get app by ID");
        assert!(matches!(err, OktaError::NotFound { .. }));
    }
}
