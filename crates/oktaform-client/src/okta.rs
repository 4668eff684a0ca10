//! Okta Management API client
//!
//! This client supports:
//! - Application fetch by id and filtered application search
//! - Client secret listing for OAuth applications
//! - Group/user assignment listing with Link-header pagination

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

use oktaform_core::{
    AppId, AppQuery, ApplicationRecord, ApplicationsApi, AssignmentsApi, ClientSecret, GroupId,
    OktaError, Result, UserId,
};

use crate::config::OktaConfig;
use crate::http::HttpClient;

/// Page size used when walking assignment lists
const ASSIGNMENT_PAGE_LIMIT: u32 = 200;

/// Okta Management API client
pub struct OktaClient {
    config: OktaConfig,
    http_client: HttpClient,
}

impl OktaClient {
    /// Create a new client for one org
    pub fn new(config: OktaConfig) -> Result<Self> {
        config.validate()?;

        let http_client = HttpClient::new(
            Duration::from_secs(config.request_timeout_secs),
            config.max_retries,
            config.retry_delay_ms,
        )?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn org_url(&self) -> &str {
        &self.config.org_url
    }

    /// Make an authenticated GET request against an absolute URL
    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!("GET {}", url);
        self.http_client
            .execute_with_retry(
                self.http_client
                    .inner()
                    .get(url)
                    .header("Authorization", format!("SSWS {}", self.config.api_token))
                    .header("Accept", "application/json"),
            )
            .await
    }

    /// Make an authenticated request to the Okta Management API
    async fn api_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.config.api_base(), endpoint);
        let response = self.get(&url).await?;
        decode_body(endpoint, response).await
    }

    /// Make a paginated request, following `Link: <…>; rel="next"` headers
    async fn api_request_paginated<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut url = format!("{}{}", self.config.api_base(), endpoint);
        let mut pages = 0usize;

        loop {
            let response = self.get(&url).await?;

            let next_link = response
                .headers()
                .get_all("link")
                .iter()
                .filter_map(|h| h.to_str().ok())
                .find_map(parse_okta_link_header);

            let items: Vec<T> = decode_body(endpoint, response).await?;
            all_items.extend(items);
            pages += 1;

            match next_link {
                Some(next) => url = next,
                None => break,
            }
        }

        debug!("Fetched {} items from {} in {} page(s)", all_items.len(), endpoint, pages);
        Ok(all_items)
    }
}

#[async_trait]
impl ApplicationsApi for OktaClient {
    #[instrument(skip(self), fields(org = %self.config.org_url))]
    async fn get_application(&self, id: &AppId) -> Result<ApplicationRecord> {
        let endpoint = format!("/apps/{}", urlencoding::encode(id.as_str()));
        match self.api_request(&endpoint).await {
            Ok(app) => Ok(app),
            Err(e) if e.status() == Some(404) => Err(OktaError::not_found("application", id.as_str())),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self), fields(org = %self.config.org_url))]
    async fn list_applications(&self, query: &AppQuery) -> Result<Vec<ApplicationRecord>> {
        let endpoint = format!("/apps{}", query.to_query_string());
        let apps: Vec<ApplicationRecord> = self.api_request(&endpoint).await?;
        info!("Okta returned {} application(s)", apps.len());
        Ok(apps)
    }

    #[instrument(skip(self), fields(org = %self.config.org_url))]
    async fn list_client_secrets(&self, app_id: &AppId) -> Result<Vec<ClientSecret>> {
        let endpoint = format!(
            "/apps/{}/credentials/secrets",
            urlencoding::encode(app_id.as_str())
        );
        self.api_request(&endpoint).await
    }
}

#[async_trait]
impl AssignmentsApi for OktaClient {
    #[instrument(skip(self), fields(org = %self.config.org_url))]
    async fn list_group_ids(&self, app_id: &AppId) -> Result<Vec<GroupId>> {
        let endpoint = format!(
            "/apps/{}/groups?limit={}",
            urlencoding::encode(app_id.as_str()),
            ASSIGNMENT_PAGE_LIMIT
        );
        let assignments: Vec<OktaAssignment> = self.api_request_paginated(&endpoint).await?;
        Ok(assignments.into_iter().map(|a| GroupId::new(a.id)).collect())
    }

    #[instrument(skip(self), fields(org = %self.config.org_url))]
    async fn list_user_ids(&self, app_id: &AppId) -> Result<Vec<UserId>> {
        let endpoint = format!(
            "/apps/{}/users?limit={}",
            urlencoding::encode(app_id.as_str()),
            ASSIGNMENT_PAGE_LIMIT
        );
        let assignments: Vec<OktaAssignment> = self.api_request_paginated(&endpoint).await?;
        Ok(assignments.into_iter().map(|a| UserId::new(a.id)).collect())
    }
}

// =============================================================================
// Okta API Types
// =============================================================================

/// Group or user assignment entry; only the id is used
#[derive(Debug, Deserialize)]
struct OktaAssignment {
    id: String,
}

/// Decode a JSON body against a known shape, naming the endpoint on failure
async fn decode_body<T: DeserializeOwned>(endpoint: &str, response: reqwest::Response) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|e| OktaError::upstream(format!("Failed to read Okta response: {}", e)))?;

    serde_json::from_str(&body).map_err(|e| {
        OktaError::upstream(format!(
            "Failed to decode Okta response from {}: {}",
            endpoint, e
        ))
    })
}

/// URL of the `rel="next"` entry in an Okta `Link` header, if any
pub(crate) fn parse_okta_link_header(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let (target, rel) = entry.split_once(';')?;
        if rel.trim() != "rel=\"next\"" {
            return None;
        }
        target
            .trim()
            .strip_prefix('<')?
            .strip_suffix('>')
            .map(str::to_string)
    })
}
