use crate::application::{BatchSection, RecommendationCard, ResultView};

/// Plain terminal rendering.
pub struct TextPresenter;

impl TextPresenter {
    pub fn present(view: &ResultView) -> String {
        match view {
            ResultView::NoResults { message } => message.clone(),
            ResultView::Error(error) => error.full_message(),
            ResultView::Results(results) => {
                let mut output = format!("{} ({})\n\n", results.title, results.count_label());
                for card in &results.cards {
                    output.push_str(&Self::present_card(card));
                    output.push('\n');
                }
                output.trim_end().to_string()
            }
        }
    }

    pub fn present_batch(sections: &[BatchSection]) -> String {
        sections
            .iter()
            .map(|section| {
                if section.query.is_empty() {
                    Self::present(&section.view)
                } else {
                    format!("Query: {}\n\n{}", section.query, Self::present(&section.view))
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn present_card(card: &RecommendationCard) -> String {
        format!(
            "{} {}\n   {} | {} | {} ({})\n   {}: {}\n",
            card.rank_label(),
            card.name,
            card.test_type,
            card.duration_label(),
            card.badge.label(),
            card.badge.tier.as_str(),
            card.link.label,
            card.link.href
        )
    }
}
