//! Oktaform Client - Okta Management API access
//!
//! Provides [`OktaClient`], an implementation of the lookup's collaborator
//! traits on top of the Okta REST API:
//! - `GET /api/v1/apps/{id}` and `GET /api/v1/apps?…` for applications
//! - `GET /api/v1/apps/{id}/credentials/secrets` for client secrets
//! - `GET /api/v1/apps/{id}/groups` and `/users` for assignments, across pages

pub mod config;
pub mod http;
pub mod okta;

#[cfg(test)]
mod tests;

pub use config::OktaConfig;
pub use http::HttpClient;
pub use okta::OktaClient;
