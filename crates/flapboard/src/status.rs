//! Listing status classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phrases that mark a listing as needing an application.
const APPLICATION_KEYWORDS: &[&str] = &["application required", "apply", "contact", "interview"];

/// Status flag shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusCode {
    /// Open to anyone.
    #[default]
    #[serde(rename = "A")]
    Open,
    /// Requires an application or contact first.
    #[serde(rename = "B")]
    ApplicationRequired,
}

impl StatusCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Open => "A",
            StatusCode::ApplicationRequired => "B",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a listing from its status text and notes, case-insensitively.
pub fn classify(status_text: Option<&str>, notes: Option<&str>) -> StatusCode {
    let mentions_application = |text: Option<&str>| {
        let text = text.unwrap_or_default().to_lowercase();
        APPLICATION_KEYWORDS
            .iter()
            .any(|keyword| text.contains(keyword))
    };

    if mentions_application(status_text) || mentions_application(notes) {
        StatusCode::ApplicationRequired
    } else {
        StatusCode::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_required_any_case() {
        for text in ["Application Required", "APPLICATION REQUIRED", "application required"] {
            assert_eq!(
                classify(Some(text), None),
                StatusCode::ApplicationRequired,
                "{text}"
            );
        }
    }

    #[test]
    fn test_keywords_in_notes() {
        assert_eq!(
            classify(Some("Open"), Some("Contact the landlord")),
            StatusCode::ApplicationRequired
        );
        assert_eq!(
            classify(None, Some("Interview on Friday")),
            StatusCode::ApplicationRequired
        );
        assert_eq!(
            classify(None, Some("Please apply online")),
            StatusCode::ApplicationRequired
        );
    }

    #[test]
    fn test_open_listings() {
        assert_eq!(classify(Some("Open"), Some("Pet friendly")), StatusCode::Open);
        assert_eq!(classify(None, Some("Pet friendly")), StatusCode::Open);
        assert_eq!(classify(None, None), StatusCode::Open);
        assert_eq!(classify(Some(""), Some("")), StatusCode::Open);
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(StatusCode::Open.to_string(), "A");
        assert_eq!(StatusCode::ApplicationRequired.to_string(), "B");
        assert_eq!(
            serde_json::to_string(&StatusCode::ApplicationRequired).unwrap(),
            "\"B\""
        );
    }
}
