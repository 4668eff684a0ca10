//! Application locator: direct fetch or single-result search

use tracing::{debug, info};

use oktaform_core::{
    AppFilter, ApplicationRecord, ApplicationsApi, FilterCriteria, OktaError, Result,
};

/// Locate exactly one application for the criteria.
///
/// `ById` fetches directly and never searches. Every other filter issues one
/// `limit=1` search and takes the first result, which Okta orders by creation
/// date; an exact `ByLabel` filter additionally requires that result to carry
/// the requested label, since Okta's `q` matches by prefix.
pub async fn locate_application(
    api: &dyn ApplicationsApi,
    criteria: &FilterCriteria,
) -> Result<ApplicationRecord> {
    if let AppFilter::ById(id) = &criteria.filter {
        debug!("Fetching OAuth application {} by id", id);
        return api
            .get_application(id)
            .await
            .map_err(|e| e.in_step(&format!("failed get app by ID {}", id)));
    }

    let query = criteria.search_query();
    let apps = api
        .list_applications(&query)
        .await
        .map_err(|e| e.in_step(&format!("failed to list OAuth apps ({})", criteria)))?;

    let first = apps.into_iter().next().ok_or_else(|| {
        OktaError::no_match(format!(
            "no OAuth application found with provided filter: {}",
            criteria
        ))
    })?;

    if let AppFilter::ByLabel(label) = &criteria.filter {
        if first.label != *label {
            return Err(OktaError::no_match(format!(
                "no OAuth application found with the provided label: {}",
                label
            )));
        }
    }

    info!(
        app_id = %first.id,
        "Using the first OAuth application matching the criteria, sorted by creation date"
    );
    Ok(first)
}
