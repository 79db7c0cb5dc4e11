use std::sync::Arc;

use tracing::debug;

use crate::application::{CheckHealthUseCase, RecommendationClient, RecommendationService, ResultRenderer};
use crate::connector::adapter::{HttpRecommendationService, MockRecommendationService, DEFAULT_BASE_URL};

pub struct ContainerConfig {
    pub base_url: String,
    /// Answer from the built-in offline catalog instead of the network.
    pub mock: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mock: false,
        }
    }
}

/// Wires the recommendation service into the client, renderer and use cases.
pub struct Container {
    service: Arc<dyn RecommendationService>,
    client: Arc<RecommendationClient>,
    renderer: ResultRenderer,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let service: Arc<dyn RecommendationService> = if config.mock {
            debug!("Using mock recommendation service");
            Arc::new(MockRecommendationService::new())
        } else {
            debug!("Using recommendation API at {}", config.base_url);
            Arc::new(HttpRecommendationService::new(config.base_url))
        };

        Self::with_service(service)
    }

    pub fn with_service(service: Arc<dyn RecommendationService>) -> Self {
        let renderer = ResultRenderer::new(service.base_url());
        let client = Arc::new(RecommendationClient::new(service.clone()));
        Self {
            service,
            client,
            renderer,
        }
    }

    pub fn client(&self) -> Arc<RecommendationClient> {
        self.client.clone()
    }

    pub fn renderer(&self) -> &ResultRenderer {
        &self.renderer
    }

    pub fn health_use_case(&self) -> CheckHealthUseCase {
        CheckHealthUseCase::new(self.service.clone())
    }

    pub fn base_url(&self) -> &str {
        self.service.base_url()
    }
}
