pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CheckHealthUseCase, ClientState, RecommendationClient, RecommendationService, ResultRenderer,
    ResultView,
};

pub use connector::{
    HtmlPresenter, HttpRecommendationService, MockRecommendationService, TextPresenter,
    DEFAULT_BASE_URL,
};

pub use domain::{
    BatchEntry, BatchQuery, BatchResult, DomainError, HealthStatus, Query, Recommendation,
    RecommendationResult, ValidationError,
};
