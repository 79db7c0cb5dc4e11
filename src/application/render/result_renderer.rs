use crate::domain::{BatchResult, DomainError, RecommendationResult};

use super::{
    BatchSection, ErrorView, OutboundLink, RecommendationCard, RelevanceBadge, ResultView,
    ResultsView,
};

pub const RESULTS_TITLE: &str = "Recommended Assessments";
pub const NO_RESULTS_MESSAGE: &str = "No recommendations found.";
const LINK_LABEL: &str = "View Assessment Details";

/// Maps query outcomes onto [`ResultView`]s.
///
/// Pure: no I/O, no terminal, no markup. Presenters turn the view into text,
/// HTML or terminal widgets.
#[derive(Debug, Clone)]
pub struct ResultRenderer {
    base_url: String,
}

impl ResultRenderer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn render(&self, outcome: &Result<RecommendationResult, DomainError>) -> ResultView {
        match outcome {
            Ok(result) => self.render_result(result),
            Err(err) => self.render_error(err),
        }
    }

    pub fn render_result(&self, result: &RecommendationResult) -> ResultView {
        if result.is_empty() {
            return ResultView::NoResults {
                message: NO_RESULTS_MESSAGE.to_string(),
            };
        }

        let cards = result
            .recommendations()
            .iter()
            .enumerate()
            .map(|(index, rec)| RecommendationCard {
                rank: index + 1,
                name: rec.name().to_string(),
                test_type: rec.test_type().to_string(),
                duration_minutes: rec.duration(),
                badge: RelevanceBadge::from_score(rec.relevance_score()),
                link: OutboundLink {
                    href: rec.url().to_string(),
                    label: LINK_LABEL,
                    new_window: true,
                },
            })
            .collect();

        ResultView::Results(ResultsView {
            title: RESULTS_TITLE.to_string(),
            count: result.count(),
            cards,
            scroll_into_view: true,
        })
    }

    pub fn render_error(&self, err: &DomainError) -> ResultView {
        self.error_view(&err.to_string())
    }

    pub fn render_batch(&self, outcome: &Result<BatchResult, DomainError>) -> Vec<BatchSection> {
        match outcome {
            Ok(batch) => batch
                .results()
                .iter()
                .map(|entry| BatchSection {
                    query: entry.query().to_string(),
                    view: match entry.outcome() {
                        Ok(result) => self.render_result(&result),
                        Err(message) => self.error_view(&message),
                    },
                })
                .collect(),
            Err(err) => vec![BatchSection {
                query: String::new(),
                view: self.render_error(err),
            }],
        }
    }

    fn error_view(&self, description: &str) -> ResultView {
        ResultView::Error(ErrorView {
            message: format!("Error: {description}"),
            hint: Some(format!(
                "Make sure the API server is running at {}",
                self.base_url
            )),
        })
    }
}
