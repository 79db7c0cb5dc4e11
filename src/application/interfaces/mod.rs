mod recommendation_service;

pub use recommendation_service::*;
