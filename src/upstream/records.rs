use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::config::settings::Settings;
use crate::errors::UpstreamError;
use crate::observability::metrics::get_metrics;
use crate::upstream::token::TokenProvider;
use crate::upstream::types::{RawRecord, RecordsResponse};
use crate::utils::constants::FEISHU_OK_CODE;

/// Reads the raw bitable rows for the configured base/table pair.
///
/// A token is requested fresh on every call; if the provider fails,
/// no records request is attempted and the error propagates to the
/// pipeline boundary. No retry happens inside a call — the next
/// cache-expiry-triggered call is the retry.
#[derive(Debug, Clone)]
pub struct RecordFetcher {
    client: Client,
    provider: TokenProvider,
    settings: Arc<Settings>,
}

impl RecordFetcher {
    pub fn new(client: Client, settings: Arc<Settings>) -> Self {
        let provider = TokenProvider::new(client.clone(), settings.clone());
        Self {
            client,
            provider,
            settings,
        }
    }

    pub async fn fetch(&self) -> Result<Vec<RawRecord>, UpstreamError> {
        let token = self.provider.obtain_token().await?;

        let metrics = get_metrics().await;
        metrics
            .upstream_requests
            .with_label_values(&["records"])
            .inc();

        let url = format!(
            "{}/bitable/v1/apps/{}/tables/{}/records",
            self.settings.api_base, self.settings.base_id, self.settings.table_id
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token.value)
            .send()
            .await?;
        let records: RecordsResponse = response.json().await?;

        if records.code != FEISHU_OK_CODE {
            return Err(UpstreamError::FetchRejected {
                code: records.code,
                msg: records.msg.unwrap_or_default(),
            });
        }

        let items = records.into_items();
        debug!(count = items.len(), "fetched bitable records");
        Ok(items)
    }
}
