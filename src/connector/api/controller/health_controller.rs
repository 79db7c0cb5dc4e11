use anyhow::Result;

use crate::connector::presenter::TextPresenter;
use crate::domain::HealthStatus;

use super::super::{CommandOutput, Container};

pub struct HealthController<'a> {
    container: &'a Container,
}

impl<'a> HealthController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Succeeds only when the service reports itself healthy.
    pub async fn health(&self) -> Result<CommandOutput> {
        let use_case = self.container.health_use_case();

        Ok(match use_case.execute().await {
            Ok(health) => CommandOutput::new(self.format_health(&health), health.is_healthy()),
            Err(e) => CommandOutput::failure(TextPresenter::present(
                &self.container.renderer().render_error(&e),
            )),
        })
    }

    fn format_health(&self, health: &HealthStatus) -> String {
        let mut output = format!(
            "Recommendation API\n==================\nURL:         {}\nStatus:      {}",
            self.container.base_url(),
            health.status()
        );

        if let Some(version) = health.version() {
            output.push_str(&format!("\nVersion:     {version}"));
        }
        if let Some(initialized) = health.recommender_initialized() {
            output.push_str(&format!(
                "\nRecommender: {}",
                if initialized { "initialized" } else { "not initialized" }
            ));
        }
        if let Some(message) = health.message() {
            output.push_str(&format!("\nMessage:     {message}"));
        }
        if let Some(timestamp) = health.timestamp() {
            output.push_str(&format!("\nTimestamp:   {timestamp}"));
        }

        output
    }
}
