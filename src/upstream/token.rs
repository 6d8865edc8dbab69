use std::sync::Arc;

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::settings::Settings;
use crate::errors::UpstreamError;
use crate::helpers::time::now_i64;
use crate::observability::metrics::get_metrics;
use crate::upstream::types::AuthResponse;
use crate::utils::constants::FEISHU_OK_CODE;

/// App access token as handed out by the auth endpoint. Short-lived;
/// requested fresh for every fetch and never persisted.
#[derive(Clone)]
pub struct AccessToken {
    pub value: String,
    pub obtained_at: i64,
}

// The token value must never end up in logs.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

/// Exchanges app credentials for an access token.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    client: Client,
    settings: Arc<Settings>,
}

impl TokenProvider {
    pub fn new(client: Client, settings: Arc<Settings>) -> Self {
        Self { client, settings }
    }

    pub async fn obtain_token(&self) -> Result<AccessToken, UpstreamError> {
        if !self.settings.has_credentials() {
            return Err(UpstreamError::CredentialsMissing);
        }

        let metrics = get_metrics().await;
        metrics.upstream_requests.with_label_values(&["auth"]).inc();

        let url = format!("{}/auth/v3/app_access_token/internal", self.settings.api_base);
        let body = json!({
            "app_id": self.settings.app_id,
            "app_secret": self.settings.app_secret,
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let auth: AuthResponse = response.json().await?;

        if auth.code != FEISHU_OK_CODE {
            return Err(UpstreamError::AuthRejected {
                code: auth.code,
                msg: auth.msg.unwrap_or_default(),
            });
        }

        let value = auth.app_access_token.ok_or(UpstreamError::AuthRejected {
            code: FEISHU_OK_CODE,
            msg: "response carried no app_access_token".to_string(),
        })?;

        debug!("obtained app access token");
        Ok(AccessToken {
            value,
            obtained_at: now_i64(),
        })
    }
}
