//! Knowledge base entries and the validated, immutable rule set.

use super::{analytics, general, OWNER_PLACEHOLDER};
use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Keyword marking the fallback entry. Exactly one entry carries it.
pub const DEFAULT_KEYWORD: &str = "default";

/// One rule: trigger keywords mapped to a canned response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Lowercase trigger strings, matched by substring containment.
    pub keywords: Vec<String>,
    pub response: String,
}

impl KnowledgeEntry {
    pub fn new<K, S>(keywords: K, response: impl Into<String>) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(|k| k.into().to_lowercase()).collect(),
            response: response.into(),
        }
    }

    /// Character length of the keywords joined by single spaces; longer means more specific.
    pub fn specificity(&self) -> usize {
        let chars: usize = self.keywords.iter().map(|k| k.chars().count()).sum();
        chars + self.keywords.len().saturating_sub(1)
    }

    /// True if any keyword occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// True if any keyword contains `needle` (e.g. an interest-area tag or a focus word).
    pub fn mentions(&self, needle: &str) -> bool {
        self.keywords.iter().any(|k| k.contains(needle))
    }

    pub fn is_default(&self) -> bool {
        self.keywords.iter().any(|k| k == DEFAULT_KEYWORD)
    }
}

/// Ordered, validated rule set. Immutable after construction.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    default_index: usize,
}

impl KnowledgeBase {
    /// Validates and wraps `entries`. Keywords are lowercased; every entry needs at least
    /// one keyword and exactly one entry must carry [`DEFAULT_KEYWORD`].
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self, FolioError> {
        let entries: Vec<KnowledgeEntry> = entries
            .into_iter()
            .map(|e| KnowledgeEntry::new(e.keywords, e.response))
            .collect();

        if let Some(pos) = entries.iter().position(|e| e.keywords.is_empty()) {
            return Err(FolioError::InvalidKnowledge(format!("entry {} has no keywords", pos)));
        }
        // A blank keyword would be a substring of every utterance.
        if let Some(pos) = entries
            .iter()
            .position(|e| e.keywords.iter().any(|k| k.trim().is_empty()))
        {
            return Err(FolioError::InvalidKnowledge(format!("entry {} has a blank keyword", pos)));
        }

        let defaults: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_default())
            .map(|(i, _)| i)
            .collect();
        let default_index = match defaults.as_slice() {
            [one] => *one,
            [] => {
                return Err(FolioError::InvalidKnowledge(
                    "missing the 'default' fallback entry".to_string(),
                ))
            }
            many => {
                return Err(FolioError::InvalidKnowledge(format!(
                    "{} entries carry the 'default' keyword",
                    many.len()
                )))
            }
        };

        Ok(Self { entries, default_index })
    }

    /// The site's built-in rules: the general subset followed by the analytics subset,
    /// with `{owner}` replaced by `owner`.
    pub fn builtin(owner: &str) -> Self {
        let entries: Vec<KnowledgeEntry> = general::RULES
            .iter()
            .chain(analytics::RULES.iter())
            .map(|(keywords, response)| {
                KnowledgeEntry::new(keywords.iter().copied(), response.replace(OWNER_PLACEHOLDER, owner))
            })
            .collect();
        // The general subset ends with the single default entry.
        let default_index = entries
            .iter()
            .position(KnowledgeEntry::is_default)
            .unwrap_or(general::RULES.len() - 1);
        Self { entries, default_index }
    }

    /// Loads a JSON array of `{ "keywords": [...], "response": "..." }` objects.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, FolioError> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, FolioError> {
        let entries: Vec<KnowledgeEntry> = serde_json::from_slice(bytes)?;
        Self::new(entries)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// The designated fallback entry.
    pub fn default_entry(&self) -> &KnowledgeEntry {
        &self.entries[self.default_index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with a keyword containing the area tag, in insertion order.
    pub fn entries_related_to(&self, area: &str) -> Vec<&KnowledgeEntry> {
        self.entries.iter().filter(|e| e.mentions(area)).collect()
    }

    /// First entry (insertion order) with a keyword containing `focus`.
    pub fn first_containing(&self, focus: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.mentions(focus))
    }
}
