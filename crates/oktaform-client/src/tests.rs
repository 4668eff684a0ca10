//! Unit tests for oktaform-client

use crate::config::OktaConfig;
use crate::http::{backoff_delay, rate_limit_reset_delay, MAX_RETRY_DELAY};
use crate::okta::parse_okta_link_header;

// =============================================================================
// Link Header Tests
// =============================================================================

#[cfg(test)]
mod link_header_tests {
    use super::*;

    #[test]
    fn test_parse_next_link() {
        let header = r#"<https://acme.okta.com/api/v1/apps/0oa1/users?limit=200>; rel="self", <https://acme.okta.com/api/v1/apps/0oa1/users?after=00u9&limit=200>; rel="next""#;
        assert_eq!(
            parse_okta_link_header(header).as_deref(),
            Some("https://acme.okta.com/api/v1/apps/0oa1/users?after=00u9&limit=200")
        );
    }

    #[test]
    fn test_self_only_has_no_next() {
        let header = r#"<https://acme.okta.com/api/v1/apps/0oa1/users?limit=200>; rel="self""#;
        assert!(parse_okta_link_header(header).is_none());
    }

    #[test]
    fn test_next_link_may_come_first() {
        let header = r#" <https://acme.okta.com/api/v1/apps/0oa1/groups?after=00g9>; rel="next" , <https://acme.okta.com/api/v1/apps/0oa1/groups>; rel="self""#;
        assert_eq!(
            parse_okta_link_header(header).as_deref(),
            Some("https://acme.okta.com/api/v1/apps/0oa1/groups?after=00g9")
        );
    }

    #[test]
    fn test_malformed_link_ignored() {
        assert!(parse_okta_link_header("https://no-brackets; rel=\"next\"").is_none());
        assert!(parse_okta_link_header("").is_none());
    }
}

// =============================================================================
// Config Tests
// =============================================================================

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_for_org_builds_url() {
        let config = OktaConfig::for_org("acme", "oktapreview.com", "token");
        assert_eq!(config.org_url, "https://acme.oktapreview.com");
        assert_eq!(config.api_base(), "https://acme.oktapreview.com/api/v1");
    }

    #[test]
    fn test_for_org_defaults_base_url() {
        let config = OktaConfig::for_org("acme", "", "token");
        assert_eq!(config.org_url, "https://acme.okta.com");
    }

    #[test]
    fn test_api_base_trims_trailing_slash() {
        let config = OktaConfig::new("https://acme.okta.com/", "token");
        assert_eq!(config.api_base(), "https://acme.okta.com/api/v1");
    }

    #[test]
    fn test_validate_requires_token() {
        let config = OktaConfig::new("https://acme.okta.com", "  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_scheme() {
        let config = OktaConfig::new("acme.okta.com", "token");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_not_serialized() {
        let config = OktaConfig::new("https://acme.okta.com", "secret-token");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-token"));
    }
}

// =============================================================================
// Retry Delay Tests
// =============================================================================

#[cfg(test)]
mod retry_delay_tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use reqwest::header::{HeaderMap, HeaderValue};
    use std::time::Duration;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        assert_eq!(backoff_delay(1000, 1), Duration::from_millis(1000));
        assert_eq!(backoff_delay(1000, 2), Duration::from_millis(2000));
        assert_eq!(backoff_delay(1000, 4), Duration::from_millis(8000));
    }

    #[test]
    fn test_backoff_is_capped() {
        assert_eq!(backoff_delay(1000, 10), MAX_RETRY_DELAY);
        assert_eq!(backoff_delay(u64::MAX, 2), MAX_RETRY_DELAY);
    }

    #[test]
    fn test_backoff_survives_huge_attempt_counts() {
        assert_eq!(backoff_delay(1, 70), MAX_RETRY_DELAY);
        assert_eq!(backoff_delay(1, u32::MAX), MAX_RETRY_DELAY);
        assert_eq!(backoff_delay(0, 70), Duration::ZERO);
    }

    #[test]
    fn test_reset_header_sets_wait() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-rate-limit-reset",
            HeaderValue::from_str(&(now.timestamp() + 7).to_string()).unwrap(),
        );
        assert_eq!(
            rate_limit_reset_delay(&headers, now),
            Some(Duration::from_secs(7))
        );
    }

    #[test]
    fn test_reset_header_in_past_or_far_future() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut headers = HeaderMap::new();

        headers.insert("x-rate-limit-reset", HeaderValue::from_static("0"));
        assert_eq!(rate_limit_reset_delay(&headers, now), Some(Duration::ZERO));

        headers.insert(
            "x-rate-limit-reset",
            HeaderValue::from_str(&(now.timestamp() + 3600).to_string()).unwrap(),
        );
        assert_eq!(rate_limit_reset_delay(&headers, now), Some(MAX_RETRY_DELAY));
    }

    #[test]
    fn test_missing_or_garbled_reset_header() {
        let now = Utc::now();
        assert!(rate_limit_reset_delay(&HeaderMap::new(), now).is_none());

        let mut headers = HeaderMap::new();
        headers.insert("x-rate-limit-reset", HeaderValue::from_static("soon"));
        assert!(rate_limit_reset_delay(&headers, now).is_none());
    }
}
