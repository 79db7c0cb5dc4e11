use serde::Serialize;

/// Relevance badge category, chosen from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    High,
    Medium,
    Low,
}

impl RelevanceTier {
    pub const HIGH_THRESHOLD: f64 = 0.80;
    pub const MEDIUM_THRESHOLD: f64 = 0.60;

    /// Both thresholds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::High => "✓",
            Self::Medium => "≈",
            Self::Low => "!",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelevanceBadge {
    pub tier: RelevanceTier,
    pub percent: f64,
}

impl RelevanceBadge {
    pub fn from_score(score: f64) -> Self {
        Self {
            tier: RelevanceTier::from_score(score),
            percent: score * 100.0,
        }
    }

    /// Percentage with one decimal place, e.g. `85.0%`. Ties round away
    /// from zero.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", round_tenths(self.percent))
    }

    /// Marker followed by the percentage, e.g. `✓ 85.0%`.
    pub fn label(&self) -> String {
        format!("{} {}", self.tier.marker(), self.percent_label())
    }
}

/// `{:.1}` rounds exact ties to even. A value halfway between two tenths is
/// always a multiple of 0.25, and scaling by 4 is exact, so only those values
/// are rounded here; everything else is left to the formatter.
fn round_tenths(value: f64) -> f64 {
    if (value * 4.0).fract() == 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    }
}

/// Link to the assessment's page. Always meant to open in a new browsing
/// context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    pub href: String,
    pub label: &'static str,
    pub new_window: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationCard {
    /// 1-based position in the service's ordering.
    pub rank: usize,
    pub name: String,
    pub test_type: String,
    pub duration_minutes: u32,
    pub badge: RelevanceBadge,
    pub link: OutboundLink,
}

impl RecommendationCard {
    pub fn rank_label(&self) -> String {
        format!("#{}", self.rank)
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub title: String,
    pub count: usize,
    pub cards: Vec<RecommendationCard>,
    /// Surfaces should bring the results into view once shown.
    pub scroll_into_view: bool,
}

impl ResultsView {
    pub fn count_label(&self) -> String {
        format!("{} Results", self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub message: String,
    pub hint: Option<String>,
}

impl ErrorView {
    /// Message and hint joined into one sentence.
    pub fn full_message(&self) -> String {
        match &self.hint {
            Some(hint) => format!("{}. {}", self.message.trim_end_matches('.'), hint),
            None => self.message.clone(),
        }
    }
}

/// Everything a surface needs to show the outcome of one query, independent
/// of how it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultView {
    NoResults { message: String },
    Results(ResultsView),
    Error(ErrorView),
}

impl ResultView {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn cards(&self) -> &[RecommendationCard] {
        match self {
            Self::Results(results) => &results.cards,
            _ => &[],
        }
    }

    pub fn scroll_into_view(&self) -> bool {
        matches!(self, Self::Results(r) if r.scroll_into_view)
    }
}

/// One query's section within a rendered batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSection {
    pub query: String,
    pub view: ResultView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(RelevanceTier::from_score(0.85), RelevanceTier::High);
        assert_eq!(RelevanceTier::from_score(0.80), RelevanceTier::High);
        assert_eq!(RelevanceTier::from_score(0.7999), RelevanceTier::Medium);
        assert_eq!(RelevanceTier::from_score(0.60), RelevanceTier::Medium);
        assert_eq!(RelevanceTier::from_score(0.599), RelevanceTier::Low);
        assert_eq!(RelevanceTier::from_score(0.0), RelevanceTier::Low);
    }

    #[test]
    fn test_badge_labels() {
        let badge = RelevanceBadge::from_score(0.85);
        assert_eq!(badge.percent_label(), "85.0%");
        assert_eq!(badge.label(), "✓ 85.0%");

        assert_eq!(RelevanceBadge::from_score(0.6).label(), "≈ 60.0%");
        assert_eq!(RelevanceBadge::from_score(0.12345).label(), "! 12.3%");
    }

    #[test]
    fn test_percent_ties_round_up() {
        for (score, expected) in [
            (0.8725, "87.3%"),
            (0.1225, "12.3%"),
            (0.0025, "0.3%"),
            (0.3625, "36.3%"),
            (0.875, "87.5%"),
        ] {
            assert_eq!(RelevanceBadge::from_score(score).percent_label(), expected, "{score}");
        }
    }

    #[test]
    fn test_near_ties_keep_exact_rounding() {
        // 0.15 is stored just below the tie.
        let badge = RelevanceBadge {
            tier: RelevanceTier::Low,
            percent: 0.15,
        };
        assert_eq!(badge.percent_label(), "0.1%");
    }

    #[test]
    fn test_error_full_message() {
        let view = ErrorView {
            message: "Error: HTTP error! status: 500".to_string(),
            hint: Some("Make sure the API server is running at http://localhost:5000".to_string()),
        };
        assert_eq!(
            view.full_message(),
            "Error: HTTP error! status: 500. Make sure the API server is running at http://localhost:5000"
        );
    }
}
