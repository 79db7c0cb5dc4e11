use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::RecommendationService;
use crate::domain::{BatchQuery, BatchResult, DomainError, HealthStatus, Query, RecommendationResult};

/// Default target: the recommendation API running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const RECOMMEND_PATH: &str = "/recommend";
const BATCH_RECOMMEND_PATH: &str = "/batch_recommend";
const HEALTH_PATH: &str = "/health";

/// Error body the service sends alongside non-success statuses.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP client for the recommendation API.
///
/// Implements [`RecommendationService`] so the client use case stays
/// decoupled from reqwest and the wire format. One call is one request: no
/// retries and no cancellation beyond dropping the future.
///
/// Failures map onto [`DomainError`]:
/// - non-2xx status -> [`DomainError::Http`], with the service's own error
///   text as detail when the body carries one
/// - connection failure or undecodable body -> [`DomainError::Transport`]
pub struct HttpRecommendationService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecommendationService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, DomainError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{path} returned {status}: {body}");
            return Err(DomainError::http(status.as_u16(), error_detail(&body)));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::transport(format!("failed to parse response from {path}: {e}")))
    }
}

impl Default for HttpRecommendationService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Pulls a human-readable message out of an error body, preferring the
/// detailed `message` over the generic `error`.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}

fn transport_error(path: &str, err: reqwest::Error) -> DomainError {
    DomainError::transport(format!("request to {path} failed: {err}"))
}

#[async_trait]
impl RecommendationService for HttpRecommendationService {
    async fn recommend(&self, query: &Query) -> Result<RecommendationResult, DomainError> {
        debug!("POST {}", self.url(RECOMMEND_PATH));

        let response = self
            .client
            .post(self.url(RECOMMEND_PATH))
            .json(query)
            .send()
            .await
            .map_err(|e| transport_error(RECOMMEND_PATH, e))?;

        self.decode(RECOMMEND_PATH, response).await
    }

    async fn batch_recommend(&self, batch: &BatchQuery) -> Result<BatchResult, DomainError> {
        debug!("POST {}", self.url(BATCH_RECOMMEND_PATH));

        let response = self
            .client
            .post(self.url(BATCH_RECOMMEND_PATH))
            .json(batch)
            .send()
            .await
            .map_err(|e| transport_error(BATCH_RECOMMEND_PATH, e))?;

        self.decode(BATCH_RECOMMEND_PATH, response).await
    }

    async fn health(&self) -> Result<HealthStatus, DomainError> {
        debug!("GET {}", self.url(HEALTH_PATH));

        let response = self
            .client
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| transport_error(HEALTH_PATH, e))?;

        self.decode(HEALTH_PATH, response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
