use serde::Serialize;

use crate::domain::ValidationError;

/// Minimum query length, in characters, after trimming.
pub const MIN_QUERY_CHARS: usize = 10;

/// Number of results requested when the caller does not choose one.
pub const DEFAULT_TOP_K: u32 = 10;

/// A validated recommendation request.
///
/// The only way to obtain a `Query` is through [`Query::new`], so holding one
/// means the text is trimmed, at least [`MIN_QUERY_CHARS`] long, and `top_k`
/// is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    #[serde(rename = "query")]
    text: String,
    top_k: u32,
}

impl Query {
    pub fn new(text: &str, top_k: u32) -> Result<Self, ValidationError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        let actual = text.chars().count();
        if actual < MIN_QUERY_CHARS {
            return Err(ValidationError::TooShort {
                min: MIN_QUERY_CHARS,
                actual,
            });
        }

        if top_k == 0 {
            return Err(ValidationError::InvalidTopK);
        }

        Ok(Self {
            text: text.to_string(),
            top_k,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }

    /// Shortened form of the query for log lines.
    pub fn preview(&self) -> String {
        const PREVIEW_CHARS: usize = 50;
        if self.text.chars().count() <= PREVIEW_CHARS {
            return self.text.clone();
        }
        let head: String = self.text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_trimmed() {
        let query = Query::new("   Java developer with SQL skills  \n", 5).unwrap();
        assert_eq!(query.text(), "Java developer with SQL skills");
        assert_eq!(query.top_k(), 5);
    }

    #[test]
    fn test_blank_query_is_empty() {
        assert_eq!(Query::new("   \t ", 10), Err(ValidationError::EmptyQuery));
        assert_eq!(Query::new("", 10), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_short_query_rejected_after_trimming() {
        // 9 characters once the padding is gone
        let err = Query::new("    analytics    ", 10).unwrap_err();
        assert_eq!(err, ValidationError::TooShort { min: 10, actual: 9 });
    }

    #[test]
    fn test_ten_characters_is_enough() {
        assert!(Query::new("0123456789", 10).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 9 multi-byte characters
        assert!(Query::new("ééééééééé", 10).is_err());
        assert!(Query::new("éééééééééé", 10).is_ok());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        assert_eq!(
            Query::new("a long enough description", 0),
            Err(ValidationError::InvalidTopK)
        );
    }

    #[test]
    fn test_serializes_as_request_body() {
        let query = Query::new("Looking for a sales manager", 7).unwrap();
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query": "Looking for a sales manager", "top_k": 7})
        );
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "x".repeat(80);
        let query = Query::new(&text, 10).unwrap();
        assert_eq!(query.preview().chars().count(), 53);
        assert!(query.preview().ends_with("..."));
    }
}
