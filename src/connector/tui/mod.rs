//! Terminal interface: query area, result count selector, character counter,
//! loading indicator and a scrollable results panel.

pub mod app;
pub mod events;
pub mod input_field;

pub use app::TuiApp;
pub use events::{Event, EventHandler};
pub use input_field::{QueryInput, TopKSelector, TOP_K_CHOICES};

use anyhow::Result;

use crate::connector::api::Container;

pub async fn run(container: &Container, top_k: u32) -> Result<()> {
    let mut app = TuiApp::new(container.client(), container.renderer().clone(), top_k);
    app.run().await
}
