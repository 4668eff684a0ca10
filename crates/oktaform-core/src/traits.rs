//! Collaborator traits for the application lookup
//!
//! The read path only talks to Okta through these seams, so the lookup rules
//! can be exercised against in-memory fakes and the HTTP client can be
//! swapped without touching them.

use crate::{error::Result, filter::AppQuery, ids::*, models::*};
use async_trait::async_trait;

// =============================================================================
// Application Traits
// =============================================================================

/// Okta apps API operations used by the lookup
#[async_trait]
pub trait ApplicationsApi: Send + Sync {
    /// Fetch one application by id.
    ///
    /// Returns [`crate::OktaError::NotFound`] when Okta has no such application.
    async fn get_application(&self, id: &AppId) -> Result<ApplicationRecord>;

    /// List applications matching a query, in the order Okta returns them
    async fn list_applications(&self, query: &AppQuery) -> Result<Vec<ApplicationRecord>>;

    /// List the OAuth client secrets of an application
    async fn list_client_secrets(&self, app_id: &AppId) -> Result<Vec<ClientSecret>>;
}

// =============================================================================
// Assignment Traits
// =============================================================================

/// Group and user assignments of an application
#[async_trait]
pub trait AssignmentsApi: Send + Sync {
    async fn list_group_ids(&self, app_id: &AppId) -> Result<Vec<GroupId>>;

    async fn list_user_ids(&self, app_id: &AppId) -> Result<Vec<UserId>>;
}
