//! Lexical simplification.
//!
//! Swaps verbose words and phrases from [`SIMPLE_REPLACEMENTS`] for plainer
//! ones. Matching is whole-word and case-insensitive, and the replacement is
//! inserted as written in the table (lowercase).
//!
//! Entries are applied in table order over a single working copy. An entry
//! whose output happens to match a later pattern will be rewritten again and
//! counted for both.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::reports::ReplacementSuggestion;
use crate::text;
use crate::word_lists::SIMPLE_REPLACEMENTS;

/// Maximum characters in a simplified-text preview.
pub const PREVIEW_MAX_CHARS: usize = 1200;

struct ReplacementRule {
    from: &'static str,
    to: &'static str,
    pattern: Regex,
}

static REPLACEMENT_RULES: LazyLock<Vec<ReplacementRule>> = LazyLock::new(|| {
    SIMPLE_REPLACEMENTS
        .iter()
        .map(|&(from, to)| ReplacementRule {
            from,
            to,
            pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from)))
                .expect("valid regex"),
        })
        .collect()
});

/// Fully simplified text plus what changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Simplification {
    /// The text after every substitution.
    pub text: String,
    /// One entry per table phrase that matched, most frequent first.
    pub replacements: Vec<ReplacementSuggestion>,
}

impl Simplification {
    /// Whether the simplified text differs from `original` beyond whitespace.
    pub fn changes(&self, original: &str) -> bool {
        text::normalize_whitespace(&self.text) != text::normalize_whitespace(original)
    }

    /// Truncated preview of the simplified text, if it differs from `original`.
    pub fn preview(&self, original: &str) -> Option<String> {
        self.changes(original)
            .then(|| text::truncate_with_ellipsis(&self.text, PREVIEW_MAX_CHARS))
    }
}

/// Apply the replacement table to `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn simplify_text(text: &str) -> Simplification {
    let mut working = text.to_string();
    let mut replacements = Vec::new();

    for rule in REPLACEMENT_RULES.iter() {
        let count = rule.pattern.find_iter(&working).count();
        if count == 0 {
            continue;
        }
        working = rule
            .pattern
            .replace_all(&working, NoExpand(rule.to))
            .into_owned();
        tracing::trace!(from = rule.from, to = rule.to, count, "applied replacement");
        replacements.push(ReplacementSuggestion {
            from: rule.from.to_string(),
            to: rule.to.to_string(),
            count,
        });
    }

    replacements.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.from.cmp(&b.from)));

    Simplification {
        text: working,
        replacements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_words_and_phrases() {
        let original = "We need to utilize this tool prior to launch.";
        let result = simplify_text(original);
        assert_eq!(result.text, "We need to use this tool before launch.");
        assert_eq!(result.replacements.len(), 2);
        assert_eq!(
            result.preview(original).as_deref(),
            Some("We need to use this tool before launch.")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = simplify_text("Utilize it. UTILIZE it again.");
        assert_eq!(result.text, "use it. use it again.");
        assert_eq!(result.replacements[0].count, 2);
    }

    #[test]
    fn matching_is_whole_word() {
        let result = simplify_text("The utilizer obtained nothing.");
        assert!(result.replacements.is_empty());
        assert_eq!(result.text, "The utilizer obtained nothing.");
    }

    #[test]
    fn sorted_by_count_then_name() {
        let result = simplify_text(
            "Obtain numerous apples. Obtain numerous pears. Utilize them. Obtain more.",
        );
        let order: Vec<(&str, usize)> = result
            .replacements
            .iter()
            .map(|r| (r.from.as_str(), r.count))
            .collect();
        assert_eq!(
            order,
            vec![("obtain", 3), ("numerous", 2), ("utilize", 1)]
        );
    }

    #[test]
    fn ties_break_alphabetically() {
        let result = simplify_text("Subsequent steps commence prior to noon.");
        let names: Vec<&str> = result.replacements.iter().map(|r| r.from.as_str()).collect();
        assert_eq!(names, vec!["commence", "prior to", "subsequent"]);
    }

    #[test]
    fn no_matches_means_no_preview() {
        let original = "The cat sat.";
        let result = simplify_text(original);
        assert!(result.replacements.is_empty());
        assert!(!result.changes(original));
        assert!(result.preview(original).is_none());
    }

    #[test]
    fn phrase_must_match_single_space() {
        let result = simplify_text("We stopped prior\nto launch.");
        assert!(result.replacements.is_empty());
    }

    #[test]
    fn long_preview_is_truncated() {
        let original = "We utilize tools. ".repeat(100);
        let result = simplify_text(&original);
        let preview = result.preview(&original).expect("text changed");
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS);
        assert!(preview.ends_with("..."));
    }
}
