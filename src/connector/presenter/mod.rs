//! Presenters turn [`crate::application::ResultView`]s into output for a
//! particular surface.

mod html;
mod text;

pub use html::*;
pub use text::*;
