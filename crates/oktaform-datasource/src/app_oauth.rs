//! `okta_app_oauth` data source read

use std::sync::Arc;
use tracing::{info, instrument};

use oktaform_core::{
    ApplicationRecord, ApplicationsApi, AssignmentsApi, FilterCriteria, Result,
};

use crate::filter::AppOauthConfig;
use crate::locator::locate_application;
use crate::output::{Assignments, ResolvedOutput};
use crate::secret::resolve_active_secret;

/// Read handler for the OAuth application data source
pub struct AppOauthDataSource {
    apps: Arc<dyn ApplicationsApi>,
    assignments: Arc<dyn AssignmentsApi>,
}

impl AppOauthDataSource {
    pub fn new(apps: Arc<dyn ApplicationsApi>, assignments: Arc<dyn AssignmentsApi>) -> Self {
        Self { apps, assignments }
    }

    /// Use one client for both the apps and assignments APIs
    pub fn from_client<C>(client: Arc<C>) -> Self
    where
        C: ApplicationsApi + AssignmentsApi + 'static,
    {
        Self {
            apps: client.clone(),
            assignments: client,
        }
    }

    /// Validate raw attributes and read
    pub async fn read_config(&self, config: &AppOauthConfig) -> Result<ResolvedOutput> {
        let criteria = config.criteria()?;
        self.read(&criteria).await
    }

    /// Locate one OAuth application and resolve its full output
    #[instrument(skip(self), fields(filter = %criteria))]
    pub async fn read(&self, criteria: &FilterCriteria) -> Result<ResolvedOutput> {
        let app = locate_application(self.apps.as_ref(), criteria).await?;
        info!(app_id = %app.id, label = %app.label, "Located OAuth application");

        let assignments = self
            .fetch_assignments(criteria, &app)
            .await
            .map_err(|e| e.in_step("failed to list OAuth's app groups and users"))?;

        let client_secret = match app.oauth_client() {
            Some(_) => Some(resolve_active_secret(self.apps.as_ref(), &app.id).await?),
            None => None,
        };

        Ok(ResolvedOutput::assemble(criteria, &app, client_secret, assignments))
    }

    async fn fetch_assignments(
        &self,
        criteria: &FilterCriteria,
        app: &ApplicationRecord,
    ) -> Result<Assignments> {
        let mut assignments = Assignments::default();
        if !criteria.skip_groups {
            assignments.groups = self.assignments.list_group_ids(&app.id).await?;
        }
        if !criteria.skip_users {
            assignments.users = self.assignments.list_user_ids(&app.id).await?;
        }
        Ok(assignments)
    }
}
