//! Per-session conversation state.

use super::interest::InterestArea;
use serde::{Deserialize, Serialize};

/// Upper bound on remembered topic words.
pub const MAX_TOPICS: usize = 10;

/// Words longer than three characters that never become topics.
const STOPWORDS: [&str; 6] = ["what", "when", "where", "which", "would", "could"];

/// Mutable state of one chat session. Fresh on every open; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Significant words seen so far, oldest first, at most [`MAX_TOPICS`].
    pub topics: Vec<String>,
    /// First significant word of the latest turn that had one.
    pub recent_focus: Option<String>,
    pub greeting_acknowledged: bool,
    pub question_count: u32,
    pub preferred_area: Option<InterestArea>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the empty initial values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Folds one (already lowercased) utterance into the topic memory.
    ///
    /// A turn without significant words leaves `recent_focus` untouched so the
    /// focus fallback can keep referring to the last substantive topic.
    pub fn update(&mut self, utterance: &str) {
        let words: Vec<&str> = utterance
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .filter(|w| !STOPWORDS.contains(w))
            .collect();

        if let Some(first) = words.first() {
            self.recent_focus = Some((*first).to_string());
        }

        for word in words {
            if !self.topics.iter().any(|t| t == word) {
                self.topics.push(word.to_string());
            }
        }

        if self.topics.len() > MAX_TOPICS {
            let excess = self.topics.len() - MAX_TOPICS;
            self.topics.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_significant_words() {
        let mut ctx = ConversationContext::new();
        ctx.update("what about your python projects");
        assert_eq!(ctx.topics, vec!["about", "your", "python", "projects"]);
        assert_eq!(ctx.recent_focus.as_deref(), Some("about"));
    }

    #[test]
    fn test_stopwords_and_short_words_are_dropped() {
        let mut ctx = ConversationContext::new();
        ctx.update("which one would you pick");
        assert_eq!(ctx.topics, vec!["pick"]);
        assert_eq!(ctx.recent_focus.as_deref(), Some("pick"));
    }

    #[test]
    fn test_turn_without_topics_keeps_previous_focus() {
        let mut ctx = ConversationContext::new();
        ctx.update("tableau dashboards");
        ctx.update("ok so why");
        assert_eq!(ctx.recent_focus.as_deref(), Some("tableau"));
        ctx.update("");
        assert_eq!(ctx.recent_focus.as_deref(), Some("tableau"));
    }

    #[test]
    fn test_duplicates_collapse_without_reordering() {
        let mut ctx = ConversationContext::new();
        ctx.update("design branding");
        ctx.update("logos design");
        assert_eq!(ctx.topics, vec!["design", "branding", "logos"]);
        assert_eq!(ctx.recent_focus.as_deref(), Some("logos"));
    }

    #[test]
    fn test_topics_bounded_oldest_evicted_first() {
        let mut ctx = ConversationContext::new();
        for i in 0..25 {
            ctx.update(&format!("word{:02}", i));
            assert!(ctx.topics.len() <= MAX_TOPICS);
        }
        assert_eq!(ctx.topics.len(), MAX_TOPICS);
        assert_eq!(ctx.topics.first().map(String::as_str), Some("word15"));
        assert_eq!(ctx.topics.last().map(String::as_str), Some("word24"));
    }

    #[test]
    fn test_single_turn_overflow_keeps_tail() {
        let mut ctx = ConversationContext::new();
        let words: Vec<String> = (0..12).map(|i| format!("topic{:02}", i)).collect();
        ctx.update(&words.join(" "));
        assert_eq!(ctx.topics.len(), MAX_TOPICS);
        assert_eq!(ctx.topics[0], "topic02");
        // Focus is the first word of the turn even when it was evicted.
        assert_eq!(ctx.recent_focus.as_deref(), Some("topic00"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ctx = ConversationContext::new();
        ctx.update("python statistics");
        ctx.question_count = 4;
        ctx.greeting_acknowledged = true;
        ctx.preferred_area = Some(InterestArea::Design);
        ctx.reset();
        assert_eq!(ctx, ConversationContext::default());
    }
}
