use serde::{Deserialize, Serialize};

use super::{Recommendation, RecommendationResult};
use crate::domain::ValidationError;

/// Largest batch the service accepts in one request.
pub const MAX_BATCH_QUERIES: usize = 100;

/// A validated `/batch_recommend` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchQuery {
    queries: Vec<String>,
    top_k: u32,
}

impl BatchQuery {
    /// Trims every query. A blank entry rejects the whole batch, reporting
    /// its 1-based position.
    pub fn new<I, S>(queries: I, top_k: u32) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let queries: Vec<String> = queries
            .into_iter()
            .map(|q| q.as_ref().trim().to_string())
            .collect();

        if let Some(index) = queries.iter().position(|q| q.is_empty()) {
            return Err(ValidationError::BlankBatchQuery { position: index + 1 });
        }
        if queries.is_empty() {
            return Err(ValidationError::EmptyBatch);
        }
        if queries.len() > MAX_BATCH_QUERIES {
            return Err(ValidationError::BatchTooLarge {
                max: MAX_BATCH_QUERIES,
                actual: queries.len(),
            });
        }
        if top_k == 0 {
            return Err(ValidationError::InvalidTopK);
        }

        Ok(Self { queries, top_k })
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }
}

/// Outcome for a single query inside a batch. The service reports per-query
/// failures inline instead of failing the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recommendations: Option<Vec<Recommendation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl BatchEntry {
    pub fn succeeded(query: impl Into<String>, recommendations: Vec<Recommendation>) -> Self {
        Self {
            query: query.into(),
            recommendations: Some(recommendations),
            error: None,
        }
    }

    pub fn failed(query: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            recommendations: None,
            error: Some(error.into()),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The per-query outcome. An entry carrying neither field is an empty
    /// result.
    pub fn outcome(&self) -> Result<RecommendationResult, String> {
        match (&self.error, &self.recommendations) {
            (Some(err), _) => Err(err.clone()),
            (None, Some(recs)) => Ok(RecommendationResult::new(recs.clone()).with_query(&self.query)),
            (None, None) => Ok(RecommendationResult::default().with_query(&self.query)),
        }
    }
}

/// Body of a successful `/batch_recommend` response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchResult {
    #[serde(default)]
    results: Vec<BatchEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

impl BatchResult {
    pub fn new(results: Vec<BatchEntry>) -> Self {
        let count = results.len();
        Self {
            results,
            count: Some(count),
        }
    }

    pub fn results(&self) -> &[BatchEntry] {
        &self.results
    }

    pub fn count(&self) -> usize {
        self.count.unwrap_or(self.results.len())
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_are_trimmed() {
        let batch = BatchQuery::new(["  first query ", "second query\n"], 5).unwrap();
        assert_eq!(batch.queries(), &["first query", "second query"]);
    }

    #[test]
    fn test_blank_query_rejects_batch() {
        assert_eq!(
            BatchQuery::new(["first query", "", "   "], 5),
            Err(ValidationError::BlankBatchQuery { position: 2 })
        );
    }

    #[test]
    fn test_empty_batch_rejected() {
        assert_eq!(
            BatchQuery::new(Vec::<String>::new(), 5),
            Err(ValidationError::EmptyBatch)
        );
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let queries = vec!["query"; MAX_BATCH_QUERIES + 1];
        assert_eq!(
            BatchQuery::new(queries, 5),
            Err(ValidationError::BatchTooLarge {
                max: MAX_BATCH_QUERIES,
                actual: MAX_BATCH_QUERIES + 1
            })
        );
    }

    #[test]
    fn test_parses_mixed_batch_response() {
        let body = r#"{
            "results": [
                {"query": "java", "recommendations": [
                    {"name": "Java 8", "test_type": "K", "duration": 30,
                     "url": "https://example.com/java8", "relevance_score": 0.9}
                ]},
                {"query": "broken", "error": "index unavailable"}
            ],
            "count": 2
        }"#;

        let batch: BatchResult = serde_json::from_str(body).unwrap();
        assert_eq!(batch.count(), 2);
        assert_eq!(batch.failed_count(), 1);

        let first = batch.results()[0].outcome().unwrap();
        assert_eq!(first.count(), 1);
        assert_eq!(first.query(), Some("java"));

        assert_eq!(
            batch.results()[1].outcome().unwrap_err(),
            "index unavailable"
        );
    }
}
