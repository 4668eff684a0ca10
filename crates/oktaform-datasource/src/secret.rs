//! Client secret resolution

use tracing::debug;

use oktaform_core::{AppId, ApplicationsApi, ClientSecret, Result};

/// Pick the ACTIVE secret with the latest creation time.
///
/// Okta allows at most two secrets per application. A later entry replaces
/// the current pick only when it was created strictly later, so equal
/// timestamps keep the earlier entry.
pub fn select_active_secret(secrets: &[ClientSecret]) -> Option<&ClientSecret> {
    let mut current: Option<&ClientSecret> = None;
    for secret in secrets.iter().filter(|s| s.is_active()) {
        match current {
            None => current = Some(secret),
            Some(best) if best.created < secret.created => current = Some(secret),
            Some(_) => {}
        }
    }
    current
}

/// Value of the currently active client secret, or an empty string when the
/// application has none
pub async fn resolve_active_secret(api: &dyn ApplicationsApi, app_id: &AppId) -> Result<String> {
    let secrets = api
        .list_client_secrets(app_id)
        .await
        .map_err(|e| e.in_step("failed to fetch OAuth client secret"))?;

    match select_active_secret(&secrets) {
        Some(secret) => {
            debug!(secret_id = ?secret.id, "Selected active client secret");
            Ok(secret.value.clone())
        }
        None => {
            debug!("No active client secret among {} secret(s)", secrets.len());
            Ok(String::new())
        }
    }
}
