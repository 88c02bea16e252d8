//! The lookup client.

use std::time::Duration;

use kartela_core::{LookupSpec, OptionId, OptionItem};
use reqwest::header::CONTENT_TYPE;

use crate::error::LookupError;
use crate::response::parse_options;

/// Default request timeout. Expiry is a network failure like any other.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration of a [`LookupClient`].
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    pub csrf_token: String,
    pub timeout: Duration,
}

impl LookupConfig {
    pub fn new(base_url: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            csrf_token: csrf_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client fetching child options for a parent selection.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
    csrf_token: String,
}

impl LookupClient {
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            csrf_token: config.csrf_token,
        })
    }

    /// Fetch the options of the child level behind `lookup`, keyed by the
    /// parent's id.
    pub async fn child_options(
        &self,
        lookup: &LookupSpec,
        parent: &OptionId,
    ) -> Result<Vec<OptionItem>, LookupError> {
        let url = format!("{}/{}", self.base_url, lookup.path.trim_start_matches('/'));
        tracing::debug!(%url, parent = parent.as_str(), "fetching child options");

        let response = self
            .http
            .get(&url)
            .query(&[(lookup.parent_param.as_str(), parent.as_str())])
            .header("X-CSRFToken", &self.csrf_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let body = response
            .json()
            .await
            .map_err(|err| LookupError::Malformed(err.to_string()))?;
        parse_options(body)
    }
}
