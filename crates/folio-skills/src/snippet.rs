//! Result snippets with highlighted matches.

use regex::{Regex, RegexBuilder};

/// Default snippet window in characters.
pub const SNIPPET_LENGTH: usize = 150;

/// Excerpt of `text` around the first case-insensitive occurrence of `term`.
///
/// Takes `snippet_length / 2` characters on either side of the match, widens both ends to
/// the next space, marks truncated sides with `...` and wraps every occurrence in `<mark>`.
/// Returns an empty string when `term` is empty or absent.
pub fn get_snippet(text: &str, term: &str, snippet_length: usize) -> String {
    let Some(pattern) = term_pattern(term) else {
        return String::new();
    };
    let Some(found) = pattern.find(text) else {
        return String::new();
    };

    let chars: Vec<char> = text.chars().collect();
    let index = text[..found.start()].chars().count();
    let matched = found.as_str().chars().count();
    let half = snippet_length / 2;

    let mut start = index.saturating_sub(half);
    let mut end = (index + matched + half).min(chars.len());
    while start > 0 && chars[start] != ' ' {
        start -= 1;
    }
    while end < chars.len() && chars[end] != ' ' {
        end += 1;
    }

    let window: String = chars[start..end].iter().collect();
    let mut snippet = window.trim().to_string();
    if start > 0 {
        snippet.insert_str(0, "...");
    }
    if end < chars.len() {
        snippet.push_str("...");
    }

    highlight(&pattern, &snippet)
}

fn term_pattern(term: &str) -> Option<Regex> {
    if term.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

fn highlight(pattern: &Regex, snippet: &str) -> String {
    pattern.replace_all(snippet, "<mark>$0</mark>").into_owned()
}
