//! Report structs for readability analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. Optional fields are
//! omitted from the JSON entirely rather than emitted as `null`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full readability report for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease, rounded to 2 decimals.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level, rounded to 2 decimals.
    pub flesch_kincaid_grade: f64,
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of sentences, regardless of how many were flagged.
    pub sentence_count: usize,
    /// Number of paragraphs.
    pub paragraph_count: usize,
    /// Average words per sentence.
    pub avg_words_per_sentence: f64,
    /// Average words per paragraph.
    pub avg_words_per_paragraph: f64,
    /// Average sentences per paragraph.
    pub avg_sentences_per_paragraph: f64,
    /// One entry per paragraph, in document order.
    pub paragraphs: Vec<ParagraphReport>,
    /// Over-length sentences, in document order, capped at the configured maximum.
    pub complex_sentences: Vec<ComplexSentence>,
    /// Plain-word substitutions, most frequent first.
    pub replacement_suggestions: Vec<ReplacementSuggestion>,
    /// Preview of the fully simplified text, present only when it changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_text_preview: Option<String>,
}

// -- Paragraphs -------------------------------------------------------------

/// Structure analysis for a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParagraphReport {
    /// 1-based paragraph number.
    pub index: usize,
    /// Words in this paragraph.
    pub word_count: usize,
    /// Sentences in this paragraph.
    pub sentence_count: usize,
    /// Human-readable structural flags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    /// Suggested restructuring, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

// -- Complex Sentences ------------------------------------------------------

/// A sentence longer than the configured word threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplexSentence {
    /// 1-based position among all sentences in the document.
    pub index: usize,
    /// Words in the full, untruncated sentence.
    pub word_count: usize,
    /// The sentence text, truncated for display.
    pub sentence: String,
    /// Advice for simplifying the sentence. Never empty.
    pub suggestions: Vec<String>,
    /// Punctuation-based rewrite, serialized as `split_suggestion`.
    #[serde(
        rename = "split_suggestion",
        default,
        skip_serializing_if = "SplitOutcome::is_no_split"
    )]
    #[schemars(with = "Option<String>")]
    pub split: SplitOutcome,
}

/// Result of trying to break a long sentence at punctuation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum SplitOutcome {
    /// No usable separator; nothing to propose.
    #[default]
    NoSplitFound,
    /// The sentence rewritten as several shorter ones.
    Proposal(String),
}

impl SplitOutcome {
    /// True when no rewrite was found.
    pub const fn is_no_split(&self) -> bool {
        matches!(self, Self::NoSplitFound)
    }

    /// The proposed rewrite, if any.
    pub fn proposal(&self) -> Option<&str> {
        match self {
            Self::NoSplitFound => None,
            Self::Proposal(text) => Some(text),
        }
    }
}

impl From<Option<String>> for SplitOutcome {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::NoSplitFound, Self::Proposal)
    }
}

impl From<SplitOutcome> for Option<String> {
    fn from(value: SplitOutcome) -> Self {
        match value {
            SplitOutcome::NoSplitFound => None,
            SplitOutcome::Proposal(text) => Some(text),
        }
    }
}

// -- Lexical Simplification -------------------------------------------------

/// A verbose phrase found in the text and its plainer replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReplacementSuggestion {
    /// The verbose phrase, as listed in the replacement table.
    pub from: String,
    /// The plainer equivalent.
    pub to: String,
    /// How many times the phrase was replaced.
    pub count: usize,
}
