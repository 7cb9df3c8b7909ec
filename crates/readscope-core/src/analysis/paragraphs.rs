//! Paragraph structure analysis.

use std::fmt;

use crate::text;

use super::reports::ParagraphReport;

/// Sentence count at which a paragraph is flagged as crowded.
pub const MANY_SENTENCES: usize = 7;

/// Paragraphs with fewer words than this are flagged as very short.
pub const SHORT_PARAGRAPH_WORDS: usize = 20;

const SPLIT_AT_TOPIC_SHIFT: &str = "Consider splitting this paragraph into 2 paragraphs around a sentence boundary where the topic shifts.";
const REDUCE_COGNITIVE_LOAD: &str = "Consider breaking this paragraph to reduce cognitive load.";

/// A structural problem with a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphFlag {
    /// More words than the configured maximum.
    Long {
        /// Words in the paragraph.
        words: usize,
    },
    /// At least [`MANY_SENTENCES`] sentences.
    ManySentences {
        /// Sentences in the paragraph.
        sentences: usize,
    },
    /// Fewer than [`SHORT_PARAGRAPH_WORDS`] words in a multi-paragraph document.
    VeryShort {
        /// Words in the paragraph.
        words: usize,
    },
}

impl fmt::Display for ParagraphFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long { words } => write!(f, "Long paragraph ({words} words)"),
            Self::ManySentences { sentences } => write!(f, "Many sentences ({sentences})"),
            Self::VeryShort { words } => write!(f, "Very short paragraph ({words} words)"),
        }
    }
}

/// Flag length and density problems in each paragraph.
///
/// Each paragraph is re-segmented on its own for its sentence count. A
/// paragraph keeps every flag that applies but only the first suggestion
/// set. The short-paragraph check only fires when there is more than one
/// paragraph to compare against.
#[tracing::instrument(skip(paragraphs), fields(paragraph_count = paragraphs.len()))]
pub fn analyze_paragraphs(paragraphs: &[String], max_words: usize) -> Vec<ParagraphReport> {
    let multi_paragraph = paragraphs.len() > 1;

    paragraphs
        .iter()
        .enumerate()
        .map(|(idx, paragraph)| {
            let word_count = text::count_words(paragraph);
            let sentence_count = text::split_sentences(paragraph).len();
            let (flags, suggestion) =
                assess(word_count, sentence_count, max_words, multi_paragraph);

            ParagraphReport {
                index: idx + 1,
                word_count,
                sentence_count,
                flags: flags.iter().map(ToString::to_string).collect(),
                suggestion: suggestion.map(str::to_string),
            }
        })
        .collect()
}

fn assess(
    words: usize,
    sentences: usize,
    max_words: usize,
    multi_paragraph: bool,
) -> (Vec<ParagraphFlag>, Option<&'static str>) {
    let mut flags = Vec::new();
    let mut suggestion = None;

    if words > max_words {
        flags.push(ParagraphFlag::Long { words });
        if sentences >= 2 {
            suggestion = Some(SPLIT_AT_TOPIC_SHIFT);
        }
    }

    if sentences >= MANY_SENTENCES {
        flags.push(ParagraphFlag::ManySentences { sentences });
        suggestion = suggestion.or(Some(REDUCE_COGNITIVE_LOAD));
    }

    if words < SHORT_PARAGRAPH_WORDS && multi_paragraph {
        flags.push(ParagraphFlag::VeryShort { words });
    }

    (flags, suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences_of(count: usize, words_each: usize) -> String {
        (0..count)
            .map(|_| format!("{}.", vec!["word"; words_each].join(" ")))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn empty_input() {
        assert!(analyze_paragraphs(&[], 120).is_empty());
    }

    #[test]
    fn healthy_paragraph_has_no_flags() {
        let paragraphs = vec![sentences_of(3, 10), sentences_of(3, 10)];
        let report = analyze_paragraphs(&paragraphs, 120);
        assert_eq!(report.len(), 2);
        assert_eq!(report[1].index, 2);
        assert_eq!(report[1].word_count, 30);
        assert_eq!(report[1].sentence_count, 3);
        assert!(report[1].flags.is_empty());
        assert!(report[1].suggestion.is_none());
    }

    #[test]
    fn long_paragraph_with_several_sentences_gets_split_suggestion() {
        let report = analyze_paragraphs(&[sentences_of(5, 30)], 120);
        assert_eq!(report[0].flags, vec!["Long paragraph (150 words)"]);
        assert_eq!(report[0].suggestion.as_deref(), Some(SPLIT_AT_TOPIC_SHIFT));
    }

    #[test]
    fn long_single_sentence_paragraph_has_no_suggestion() {
        let report = analyze_paragraphs(&[sentences_of(1, 130)], 120);
        assert_eq!(report[0].flags, vec!["Long paragraph (130 words)"]);
        assert!(report[0].suggestion.is_none());
    }

    #[test]
    fn many_sentences_sets_generic_suggestion() {
        let report = analyze_paragraphs(&[sentences_of(7, 5)], 120);
        assert_eq!(report[0].flags, vec!["Many sentences (7)"]);
        assert_eq!(report[0].suggestion.as_deref(), Some(REDUCE_COGNITIVE_LOAD));
    }

    #[test]
    fn first_suggestion_wins() {
        let report = analyze_paragraphs(&[sentences_of(8, 20)], 120);
        assert_eq!(
            report[0].flags,
            vec!["Long paragraph (160 words)", "Many sentences (8)"]
        );
        assert_eq!(report[0].suggestion.as_deref(), Some(SPLIT_AT_TOPIC_SHIFT));
    }

    #[test]
    fn short_paragraph_only_flagged_with_company() {
        let short = "Too brief to matter.".to_string();

        let alone = analyze_paragraphs(std::slice::from_ref(&short), 120);
        assert!(alone[0].flags.is_empty());

        let together = analyze_paragraphs(&[short, sentences_of(3, 10)], 120);
        assert_eq!(together[0].flags, vec!["Very short paragraph (4 words)"]);
        assert!(together[0].suggestion.is_none());
        assert!(together[1].flags.is_empty());
    }

    #[test]
    fn flag_display() {
        assert_eq!(
            ParagraphFlag::VeryShort { words: 3 }.to_string(),
            "Very short paragraph (3 words)"
        );
    }
}
