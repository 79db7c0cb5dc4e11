use serde::{Deserialize, Serialize};

/// Body of the service's `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recommender_initialized: Option<bool>,
}

impl HealthStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: None,
            version: None,
            timestamp: None,
            recommender_initialized: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_recommender_initialized(mut self, initialized: bool) -> Self {
        self.recommender_initialized = Some(initialized);
        self
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn recommender_initialized(&self) -> Option<bool> {
        self.recommender_initialized
    }

    /// Healthy means the service says so and has not reported a missing
    /// recommender.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.recommender_initialized != Some(false)
    }
}
