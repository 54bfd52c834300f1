//! Static rule set for the site assistant.
//!
//! Two rule subsets are concatenated at load time:
//!
//! | Subset     | Module        | Covers                                              |
//! |------------|---------------|-----------------------------------------------------|
//! | General    | `general`     | greetings, design, education, contact, small talk  |
//! | Analytics  | `analytics`   | data analytics practice, tools and projects        |
//!
//! Concatenation order does not affect matching: the selector sorts by relevance.

mod analytics;
mod general;
mod store;

pub use store::{KnowledgeBase, KnowledgeEntry, DEFAULT_KEYWORD};

/// Placeholder replaced by the site owner's name when the built-in rules are loaded.
pub(crate) const OWNER_PLACEHOLDER: &str = "{owner}";
