use std::fmt::Write;

use crate::application::{RecommendationCard, RelevanceTier, ResultView};

/// Card markup for embedding in a web page.
///
/// Every value that came from the service is escaped before it is written,
/// including link targets.
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn present(view: &ResultView) -> String {
        match view {
            ResultView::NoResults { message } => {
                format!("<div class=\"error-message\">{}</div>", escape(message))
            }
            ResultView::Error(error) => format!(
                "<div class=\"error-message\">\n  <p>{}</p>\n</div>",
                escape(&error.full_message())
            ),
            ResultView::Results(results) => {
                let mut html = String::new();
                let _ = writeln!(html, "<div class=\"results-header\">");
                let _ = writeln!(html, "  <h2>{}</h2>", escape(&results.title));
                let _ = writeln!(
                    html,
                    "  <span class=\"result-count\">{}</span>",
                    escape(&results.count_label())
                );
                let _ = writeln!(html, "</div>");
                let _ = writeln!(html, "<div class=\"results-grid\">");
                for card in &results.cards {
                    Self::write_card(&mut html, card);
                }
                html.push_str("</div>");
                html
            }
        }
    }

    fn write_card(html: &mut String, card: &RecommendationCard) {
        let target = if card.link.new_window {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };

        let _ = writeln!(html, "  <div class=\"result-card\">");
        let _ = writeln!(html, "    <div class=\"result-rank\">{}</div>", card.rank_label());
        let _ = writeln!(html, "    <h3>{}</h3>", escape(&card.name));
        let _ = writeln!(html, "    <div class=\"result-metadata\">");
        let _ = writeln!(html, "      <span class=\"badge\">{}</span>", escape(&card.test_type));
        let _ = writeln!(html, "      <span class=\"badge\">{}</span>", card.duration_label());
        let _ = writeln!(
            html,
            "      <span class=\"badge {}\">{}</span>",
            tier_class(card.badge.tier),
            escape(&card.badge.label())
        );
        let _ = writeln!(html, "    </div>");
        let _ = writeln!(
            html,
            "    <a href=\"{}\"{} class=\"result-link\">{}</a>",
            escape(&card.link.href),
            target,
            escape(card.link.label)
        );
        let _ = writeln!(html, "  </div>");
    }
}

fn tier_class(tier: RelevanceTier) -> &'static str {
    match tier {
        RelevanceTier::High => "match-high",
        RelevanceTier::Medium => "match-medium",
        RelevanceTier::Low => "match-low",
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
