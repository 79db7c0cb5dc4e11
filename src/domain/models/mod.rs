mod batch;
mod health;
mod query;
mod recommendation;

pub use batch::*;
pub use health::*;
pub use query::*;
pub use recommendation::*;
