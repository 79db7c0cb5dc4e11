mod check_health;
mod recommendation_client;

pub use check_health::*;
pub use recommendation_client::*;
