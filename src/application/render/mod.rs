mod result_renderer;
mod view_model;

pub use result_renderer::*;
pub use view_model::*;
