use thiserror::Error;

/// Failures talking to the Feishu open API.
///
/// All of these are caught at the pipeline boundary and degrade to an
/// empty record set; they never reach the serving layer.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("application credentials are not configured")]
    CredentialsMissing,

    /// Network-level failure: timeout, connect error, bad transport.
    #[error("upstream request failed: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// Auth endpoint answered with a non-zero code.
    #[error("token request rejected (code {code}): {msg}")]
    AuthRejected { code: i64, msg: String },

    /// Records endpoint answered with a non-zero code.
    #[error("record fetch rejected (code {code}): {msg}")]
    FetchRejected { code: i64, msg: String },
}

impl UpstreamError {
    /// Stable label for the failure-reason metric.
    pub fn reason(&self) -> &'static str {
        match self {
            UpstreamError::CredentialsMissing => "credentials_missing",
            UpstreamError::Unavailable(_) => "unavailable",
            UpstreamError::AuthRejected { .. } => "auth_rejected",
            UpstreamError::FetchRejected { .. } => "fetch_rejected",
        }
    }
}

/// Facade-level errors, the only kind surfaced to callers.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("record '{0}' not found")]
    RecordNotFound(String),
}
