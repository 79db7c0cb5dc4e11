use async_trait::async_trait;

use crate::domain::{BatchQuery, BatchResult, DomainError, HealthStatus, Query, RecommendationResult};

/// The remote recommendation API.
///
/// Implementors own transport and serialization. Each call maps to exactly
/// one HTTP request; implementors never retry.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, query: &Query) -> Result<RecommendationResult, DomainError>;

    async fn batch_recommend(&self, batch: &BatchQuery) -> Result<BatchResult, DomainError>;

    async fn health(&self) -> Result<HealthStatus, DomainError>;

    /// Base URL the service is reached at, shown in error hints.
    fn base_url(&self) -> &str;
}
