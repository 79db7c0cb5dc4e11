pub mod batch_controller;
pub mod health_controller;
pub mod recommend_controller;

pub use batch_controller::BatchController;
pub use health_controller::HealthController;
pub use recommend_controller::RecommendController;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while a request is in flight. Hidden when stderr
/// is not a terminal.
fn busy_indicator(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
