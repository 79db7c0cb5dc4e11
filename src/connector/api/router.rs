use anyhow::Result;

use crate::cli::Commands;

use super::container::Container;

/// Rendered output of a command and whether the command succeeded.
///
/// Failures still carry a rendered error view to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn failure(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }

    pub fn new(text: String, success: bool) -> Self {
        Self { text, success }
    }
}
use super::controller::{BatchController, HealthController, RecommendController};

pub struct Router<'a> {
    recommend_controller: RecommendController<'a>,
    batch_controller: BatchController<'a>,
    health_controller: HealthController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            recommend_controller: RecommendController::new(container),
            batch_controller: BatchController::new(container),
            health_controller: HealthController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<CommandOutput> {
        match command {
            Commands::Recommend {
                query,
                top_k,
                format,
            } => self.recommend_controller.recommend(query, top_k, format).await,
            Commands::Batch {
                queries,
                top_k,
                format,
            } => self.batch_controller.batch(queries, top_k, format).await,
            Commands::Health => self.health_controller.health().await,
            Commands::Tui { .. } => unreachable!("TUI command is handled separately in main"),
        }
    }
}
