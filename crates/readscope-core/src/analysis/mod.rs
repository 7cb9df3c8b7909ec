//! Readability analysis.
//!
//! Decomposes the report into independent stages, orchestrated by
//! [`score_text`]:
//!
//! - [`crate::readability`] for counts and the two Flesch indices
//! - [`complex_sentences`] for over-length sentences and rewrite proposals
//! - [`paragraphs`] for paragraph length and density flags
//! - [`crate::simplify`] for plain-word substitutions
//!
//! Every stage is a pure function of the segmented text, so callers can also
//! invoke them individually.

pub mod complex_sentences;
pub mod paragraphs;
pub mod reports;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use reports::{
    ComplexSentence, ParagraphReport, ReadabilityReport, ReplacementSuggestion, SplitOutcome,
};

use crate::readability::{self, DocumentStats};
use crate::simplify;
use crate::text;

/// Default word count above which a sentence is flagged.
pub const DEFAULT_MAX_SENTENCE_WORDS: usize = 25;

/// Default word count above which a paragraph is flagged.
pub const DEFAULT_MAX_PARAGRAPH_WORDS: usize = 120;

/// Default cap on reported complex sentences.
pub const DEFAULT_MAX_COMPLEX_SENTENCES: usize = 10;

/// Thresholds for [`score_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Sentences with more words than this are reported as complex.
    pub max_sentence_words: usize,
    /// Paragraphs with more words than this are flagged as long.
    pub max_paragraph_words: usize,
    /// Maximum number of complex sentences to report.
    pub max_complex_sentences: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_sentence_words: DEFAULT_MAX_SENTENCE_WORDS,
            max_paragraph_words: DEFAULT_MAX_PARAGRAPH_WORDS,
            max_complex_sentences: DEFAULT_MAX_COMPLEX_SENTENCES,
        }
    }
}

impl AnalysisOptions {
    /// Set the sentence word threshold.
    pub const fn with_max_sentence_words(mut self, words: usize) -> Self {
        self.max_sentence_words = words;
        self
    }

    /// Set the paragraph word threshold.
    pub const fn with_max_paragraph_words(mut self, words: usize) -> Self {
        self.max_paragraph_words = words;
        self
    }

    /// Set the complex sentence cap.
    pub const fn with_max_complex_sentences(mut self, count: usize) -> Self {
        self.max_complex_sentences = count;
        self
    }
}

/// Score `input` and collect structural and lexical suggestions.
///
/// Never fails: empty input yields zero counts, zero scores, empty lists,
/// and no preview. The same input and options always produce the same
/// report.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn score_text(input: &str, options: &AnalysisOptions) -> ReadabilityReport {
    let sentences = text::split_sentences(input);
    let paragraph_texts = text::split_paragraphs(input);
    let words = text::tokenize_words(input);

    let stats = DocumentStats::from_segments(&words, &sentences, &paragraph_texts);
    let scores = stats.scores();

    let complex_sentences = complex_sentences::analyze_complex_sentences(
        &sentences,
        options.max_sentence_words,
        options.max_complex_sentences,
    );
    let paragraphs = paragraphs::analyze_paragraphs(&paragraph_texts, options.max_paragraph_words);
    let simplification = simplify::simplify_text(input);

    tracing::debug!(
        words = stats.words,
        sentences = stats.sentences,
        paragraphs = stats.paragraphs,
        complex = complex_sentences.len(),
        replacements = simplification.replacements.len(),
        "scored document"
    );

    ReadabilityReport {
        flesch_reading_ease: scores.flesch_reading_ease,
        flesch_kincaid_grade: scores.flesch_kincaid_grade,
        word_count: stats.words,
        sentence_count: stats.sentences,
        paragraph_count: stats.paragraphs,
        avg_words_per_sentence: readability::ratio(stats.words, stats.scoring_sentences()),
        avg_words_per_paragraph: readability::ratio(stats.words, stats.paragraphs),
        avg_sentences_per_paragraph: readability::ratio(stats.sentences, stats.paragraphs),
        paragraphs,
        complex_sentences,
        simplified_text_preview: simplification.preview(input),
        replacement_suggestions: simplification.replacements,
    }
}
