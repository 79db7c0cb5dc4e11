//! # Connector Layer
//!
//! Everything that touches the outside world:
//! - HTTP and offline implementations of the recommendation service
//! - Presenters for text and HTML output
//! - CLI wiring (container, router, controllers)
//! - The interactive terminal interface

pub mod adapter;
pub mod api;
pub mod presenter;
pub mod tui;

pub use adapter::*;
pub use presenter::*;
