mod http_recommendation_service;
mod mock_recommendation_service;

pub use http_recommendation_service::*;
pub use mock_recommendation_service::*;
