use std::sync::Arc;

use tracing::info;

use crate::application::RecommendationService;
use crate::domain::{DomainError, HealthStatus};

pub struct CheckHealthUseCase {
    service: Arc<dyn RecommendationService>,
}

impl CheckHealthUseCase {
    pub fn new(service: Arc<dyn RecommendationService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self) -> Result<HealthStatus, DomainError> {
        let health = self.service.health().await?;
        info!(
            "Service at {} reports status \"{}\"",
            self.service.base_url(),
            health.status()
        );
        Ok(health)
    }
}
