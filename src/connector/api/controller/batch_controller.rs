use anyhow::Result;

use crate::cli::OutputFormat;
use crate::connector::presenter::{HtmlPresenter, TextPresenter};

use super::super::{CommandOutput, Container};
use super::busy_indicator;

pub struct BatchController<'a> {
    container: &'a Container,
}

impl<'a> BatchController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Succeeds when the batch request itself succeeded, even if some
    /// queries inside it failed.
    pub async fn batch(
        &self,
        queries: Vec<String>,
        top_k: u32,
        format: OutputFormat,
    ) -> Result<CommandOutput> {
        let client = self.container.client();

        let spinner = busy_indicator("Fetching batch recommendations...");
        let outcome = client.batch(&queries, top_k).await;
        spinner.finish_and_clear();

        let sections = self.container.renderer().render_batch(&outcome);

        let text = match format {
            OutputFormat::Json => match &outcome {
                Ok(result) => serde_json::to_string_pretty(result)?,
                Err(_) => serde_json::to_string_pretty(&sections)?,
            },
            OutputFormat::Html => sections
                .iter()
                .map(|s| HtmlPresenter::present(&s.view))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Text => TextPresenter::present_batch(&sections),
        };

        Ok(CommandOutput::new(text, outcome.is_ok()))
    }
}
