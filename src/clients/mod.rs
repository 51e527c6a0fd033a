//! Outbound client types for Shopify API communication.
//!
//! This module provides the client handle an [`App`](crate::App) owns.
//!
//! - [`ApiClient`]: The handle bound to the app's host URL and client id
//! - [`ClientConfig`]: The parameters a client is bound to
//! - [`ClientError`]: Why a client could not be constructed
//!
//! The retry budget configured on the app
//! ([`AppConfig::retries`](crate::AppConfig::retries)) is data for whoever
//! executes requests through the client; the handle itself never retries.

mod api_client;
mod errors;

pub use api_client::{ApiClient, ClientConfig, SDK_VERSION};
pub use errors::ClientError;
