//! Shopify Admin GraphQL client and the product / inventory operations
//! exposed by the `shopify` MCP tool set.
//!
//! Operations return the JSON payload handed back to the assistant on
//! success (always carrying `"success": true`). Failures are a
//! [`ShopifyError`], which renders its own `"success": false` payload via
//! [`ShopifyError::to_payload`].

pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod inventory;
pub mod products;
pub mod queries;
pub mod types;

pub use client::ShopifyClient;
pub use config::ShopifyConfig;
pub use error::ShopifyError;
