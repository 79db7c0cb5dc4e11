use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use crate::application::RecommendationService;
use crate::domain::{
    BatchEntry, BatchQuery, BatchResult, DomainError, HealthStatus, Query, Recommendation,
    RecommendationResult,
};

const MOCK_BASE_URL: &str = "mock://recommendations";

/// (name, test type, duration in minutes, slug)
const CATALOG: &[(&str, &str, u32, &str)] = &[
    ("Core Java (Entry Level)", "Knowledge & Skills", 30, "core-java-entry-level"),
    ("Core Java (Advanced Level)", "Knowledge & Skills", 40, "core-java-advanced-level"),
    ("Python (New)", "Knowledge & Skills", 11, "python-new"),
    ("SQL Server (New)", "Knowledge & Skills", 15, "sql-server-new"),
    ("Automata - Fix (New)", "Simulations", 20, "automata-fix-new"),
    ("Verify - Numerical Ability", "Ability & Aptitude", 18, "verify-numerical-ability"),
    ("Verify - Verbal Ability - Next Generation", "Ability & Aptitude", 15, "verify-verbal-ability-next-generation"),
    ("Occupational Personality Questionnaire OPQ32r", "Personality & Behavior", 25, "occupational-personality-questionnaire-opq32r"),
    ("Interpersonal Communications", "Knowledge & Skills", 10, "interpersonal-communications"),
    ("Sales Representative Solution", "Personality & Behavior", 35, "sales-representative-solution"),
    ("Entry Level Sales 7.1", "Biodata & Situational Judgement", 20, "entry-level-sales-7-1"),
    ("Data Warehousing Concepts", "Knowledge & Skills", 9, "data-warehousing-concepts"),
];

/// Offline stand-in for the recommendation API.
///
/// Scores are derived from a hash of the query, so the same query always
/// yields the same ranking. Results are sorted by score, highest first, and
/// truncated to `top_k`.
pub struct MockRecommendationService;

impl MockRecommendationService {
    pub fn new() -> Self {
        Self
    }

    fn rank(&self, text: &str, top_k: u32) -> Vec<Recommendation> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut rng = rand::rngs::StdRng::seed_from_u64(hasher.finish());

        let mut ranked: Vec<Recommendation> = CATALOG
            .iter()
            .map(|(name, test_type, duration, slug)| {
                let score: f64 = rng.gen_range(0.3..0.95);
                Recommendation::new(
                    *name,
                    *test_type,
                    *duration,
                    format!("https://www.shl.com/solutions/products/product-catalog/view/{slug}/"),
                    (score * 10_000.0).round() / 10_000.0,
                )
            })
            .collect();

        ranked.sort_by(|a, b| b.relevance_score().total_cmp(&a.relevance_score()));
        ranked.truncate(top_k as usize);
        ranked
    }
}

impl Default for MockRecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecommendationService for MockRecommendationService {
    async fn recommend(&self, query: &Query) -> Result<RecommendationResult, DomainError> {
        let recommendations = self.rank(query.text(), query.top_k());
        debug!(
            "Generated {} mock recommendations for \"{}\"",
            recommendations.len(),
            query.preview()
        );
        Ok(RecommendationResult::new(recommendations).with_query(query.text()))
    }

    async fn batch_recommend(&self, batch: &BatchQuery) -> Result<BatchResult, DomainError> {
        let results = batch
            .queries()
            .iter()
            .map(|q| BatchEntry::succeeded(q.as_str(), self.rank(q, batch.top_k())))
            .collect();
        Ok(BatchResult::new(results))
    }

    async fn health(&self) -> Result<HealthStatus, DomainError> {
        Ok(HealthStatus::new("healthy")
            .with_message("Mock recommendation service")
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_recommender_initialized(true))
    }

    fn base_url(&self) -> &str {
        MOCK_BASE_URL
    }
}
