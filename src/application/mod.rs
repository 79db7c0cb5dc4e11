//! # Application Layer
//!
//! Use cases coordinating the domain with the recommendation service port,
//! plus the view-model renderer shared by every output surface.

pub mod interfaces;
pub mod render;
pub mod use_cases;

pub use interfaces::*;
pub use render::*;
pub use use_cases::*;
