use anyhow::Result;

use crate::cli::OutputFormat;
use crate::connector::presenter::{HtmlPresenter, TextPresenter};

use super::super::{CommandOutput, Container};
use super::busy_indicator;

pub struct RecommendController<'a> {
    container: &'a Container,
}

impl<'a> RecommendController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Failures are rendered into the output rather than returned, so the
    /// caller always has something to show. The output is marked failed.
    pub async fn recommend(
        &self,
        query: String,
        top_k: u32,
        format: OutputFormat,
    ) -> Result<CommandOutput> {
        let client = self.container.client();

        let spinner = busy_indicator("Fetching recommendations...");
        let outcome = client.submit(&query, top_k).await;
        spinner.finish_and_clear();

        let view = self.container.renderer().render(&outcome);

        let text = match format {
            OutputFormat::Json => match &outcome {
                Ok(result) => serde_json::to_string_pretty(result)?,
                Err(_) => serde_json::to_string_pretty(&view)?,
            },
            OutputFormat::Html => HtmlPresenter::present(&view),
            OutputFormat::Text => TextPresenter::present(&view),
        };

        Ok(CommandOutput::new(text, outcome.is_ok()))
    }
}
