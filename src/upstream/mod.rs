/// Upstream module
///
/// Talks to the Feishu open API: exchanges app credentials for a
/// short-lived access token and reads the bitable records with it.
/// Every call fails fast on a bounded timeout; failures are typed in
/// [`crate::errors::UpstreamError`] and degrade to empty content at
/// the pipeline boundary.
use std::time::Duration;

use reqwest::Client;

use crate::utils::constants::HTTP_TIMEOUT_SECS;

pub mod records;
pub mod token;
pub mod types;

/// Shared HTTP client with the fixed upstream timeout applied.
pub fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .expect("reqwest client with static config")
}
