//! # Domain Layer
//!
//! Queries, recommendations and the error taxonomy shared by every surface.
//! This layer is independent of HTTP clients and terminals.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
