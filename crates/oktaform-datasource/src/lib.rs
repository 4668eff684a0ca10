//! Oktaform Data Source - the `okta_app_oauth` read path
//!
//! A read runs these steps in order:
//! 1. Filter resolution: raw attributes become a validated [`FilterCriteria`]
//! 2. Application lookup: direct fetch by id, or a single-result search
//! 3. Assignment lookup: group and user ids (deprecated attributes)
//! 4. Secret resolution: newest ACTIVE client secret, OAuth apps only
//! 5. Output assembly: a flat [`ResolvedOutput`]
//!
//! Either every step succeeds and a complete output is returned, or the read
//! fails as a whole.

pub mod app_oauth;
pub mod filter;
pub mod locator;
pub mod output;
pub mod schema;
pub mod secret;


pub use app_oauth::AppOauthDataSource;
pub use filter::AppOauthConfig;
pub use output::{Assignments, ResolvedOutput};
pub use schema::{AttributeKind, AttributeMode, AttributeSchema, APP_OAUTH_SCHEMA};

pub use oktaform_core::FilterCriteria;
