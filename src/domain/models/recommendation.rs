use serde::{Deserialize, Serialize};

/// One assessment suggested by the recommendation service.
///
/// `relevance_score` is taken as sent: the service normalizes it to `[0, 1]`
/// and the client neither clamps nor rejects values outside that range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    name: String,
    test_type: String,
    duration: u32,
    url: String,
    relevance_score: f64,
}

impl Recommendation {
    pub fn new(
        name: impl Into<String>,
        test_type: impl Into<String>,
        duration: u32,
        url: impl Into<String>,
        relevance_score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            test_type: test_type.into(),
            duration,
            url: url.into(),
            relevance_score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test_type(&self) -> &str {
        &self.test_type
    }

    /// Duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn relevance_score(&self) -> f64 {
        self.relevance_score
    }
}

/// Body of a successful `/recommend` response.
///
/// Entries keep the order the service returned them in, which is relevance
/// order. Nothing here re-sorts them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(default)]
    recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl RecommendationResult {
    pub fn new(recommendations: Vec<Recommendation>) -> Self {
        let count = recommendations.len();
        Self {
            recommendations,
            count: Some(count),
            query: None,
            timestamp: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Count reported by the service, or the list length when it sent none.
    pub fn count(&self) -> usize {
        self.count.unwrap_or(self.recommendations.len())
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Query text as echoed back by the service.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}
