//! Greeting and interest-area detection over lowercased utterances.

use serde::{Deserialize, Serialize};
use std::fmt;

const GREETING_TOKENS: [&str; 4] = ["hello", "hi", "hey", "greetings"];

/// Topic areas a visitor can lean towards. The tag doubles as the relevance probe
/// against knowledge base keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestArea {
    DataAnalytics,
    Design,
    Projects,
    Skills,
}

/// Detection order; the first area with a hit wins.
pub const INTEREST_AREAS: [InterestArea; 4] = [
    InterestArea::DataAnalytics,
    InterestArea::Design,
    InterestArea::Projects,
    InterestArea::Skills,
];

impl InterestArea {
    #[inline]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::DataAnalytics => "data analytics",
            Self::Design => "design",
            Self::Projects => "projects",
            Self::Skills => "skills",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::DataAnalytics => &["data", "analytics", "analysis", "statistics", "python", "sql"],
            Self::Design => &["design", "graphic", "creative", "visual", "adobe", "photoshop"],
            Self::Projects => &["project", "portfolio", "work", "case study", "example"],
            Self::Skills => &["skill", "ability", "proficiency", "capable", "experience"],
        }
    }
}

impl fmt::Display for InterestArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// True if the message contains any greeting token (substring match, so "this" counts).
pub fn is_greeting(message: &str) -> bool {
    GREETING_TOKENS.iter().any(|t| message.contains(t))
}

/// First area whose keyword set overlaps the message.
pub fn detect_interest(message: &str) -> Option<InterestArea> {
    INTEREST_AREAS
        .into_iter()
        .find(|area| area.keywords().iter().any(|k| message.contains(k)))
}
