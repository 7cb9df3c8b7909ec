//! Over-length sentence detection with rewrite suggestions.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;
use crate::word_lists::CLAUSE_CONNECTORS;

use super::reports::{ComplexSentence, SplitOutcome};

/// Maximum characters of a flagged sentence shown in the report.
pub const SENTENCE_DISPLAY_MAX_CHARS: usize = 400;

/// Maximum characters of a proposed rewrite.
pub const PROPOSAL_MAX_CHARS: usize = 600;

/// Strong clause separators: semicolon, em dash, or double hyphen.
static CLAUSE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:;|—|--)\s*").expect("valid regex"));

/// Any connector from [`CLAUSE_CONNECTORS`] as a whole word.
static CONNECTOR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    let mut words: Vec<&str> = CLAUSE_CONNECTORS.iter().copied().collect();
    words.sort_unstable();
    Regex::new(&format!(r"(?i)\b(?:{})\b", words.join("|"))).expect("valid regex")
});

const PUNCTUATION_ADVICE: &str = "Try splitting at commas/semicolons where ideas change.";
const CLAUSE_ADVICE: &str =
    "Consider removing or rewriting subordinate clauses (e.g., 'which/that/because') for clarity.";

/// Flag sentences longer than `max_words` words.
///
/// `sentences` must be the whole-document segmentation so that each entry's
/// index is its position among all sentences. At most `max_flagged` entries
/// are returned; later over-length sentences are dropped silently.
#[tracing::instrument(skip(sentences), fields(sentence_count = sentences.len()))]
pub fn analyze_complex_sentences(
    sentences: &[String],
    max_words: usize,
    max_flagged: usize,
) -> Vec<ComplexSentence> {
    let mut flagged = Vec::new();

    for (idx, sentence) in sentences.iter().enumerate() {
        if flagged.len() >= max_flagged {
            tracing::debug!(cap = max_flagged, "complex sentence cap reached");
            break;
        }

        let word_count = text::count_words(sentence);
        if word_count <= max_words {
            continue;
        }

        flagged.push(ComplexSentence {
            index: idx + 1,
            word_count,
            sentence: text::truncate_with_ellipsis(sentence, SENTENCE_DISPLAY_MAX_CHARS),
            suggestions: suggestions_for(sentence, word_count),
            split: propose_split(sentence),
        });
    }

    flagged
}

fn suggestions_for(sentence: &str, word_count: usize) -> Vec<String> {
    let mut suggestions = vec![format!(
        "Sentence is {word_count} words; consider splitting into 2–3 shorter sentences."
    )];

    let commas = sentence.matches(',').count();
    let semicolons = sentence.matches(';').count();
    if commas >= 2 || semicolons >= 1 {
        suggestions.push(PUNCTUATION_ADVICE.to_string());
    }

    if CONNECTOR_WORD.is_match(sentence) {
        suggestions.push(CLAUSE_ADVICE.to_string());
    }

    suggestions
}

/// Break a sentence at its strongest punctuation.
///
/// Semicolons and dashes are tried first; commas only when those yield a
/// single piece. Fewer than two non-empty pieces means no proposal.
pub fn propose_split(sentence: &str) -> SplitOutcome {
    // Pieces are trimmed and empties dropped before counting, so a trailing
    // separator never makes a piece of its own.
    let mut pieces = non_empty_pieces(CLAUSE_SEPARATOR.split(sentence));
    if pieces.len() < 2 && sentence.contains(',') {
        pieces = non_empty_pieces(sentence.split(','));
    }
    if pieces.len() < 2 {
        return SplitOutcome::NoSplitFound;
    }

    let mut proposal = pieces.join(". ");
    if !proposal.ends_with(['.', '!', '?']) {
        proposal.push('.');
    }
    SplitOutcome::Proposal(text::truncate_with_ellipsis(&proposal, PROPOSAL_MAX_CHARS))
}

fn non_empty_pieces<'a>(pieces: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    pieces.map(str::trim).filter(|p| !p.is_empty()).collect()
}
