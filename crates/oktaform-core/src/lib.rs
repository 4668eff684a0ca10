//! Oktaform Core - Domain types and traits for Okta application lookups

pub mod error;
pub mod filter;
pub mod ids;
pub mod models;
pub mod traits;

#[cfg(test)]
mod tests;

pub use error::*;
pub use filter::*;
pub use ids::*;
pub use models::*;
pub use traits::*;
