//! Text segmentation.
//!
//! Splits a document into paragraphs, sentences, and word tokens. The rules
//! are deliberately plain punctuation and whitespace heuristics: there is no
//! abbreviation or decimal-number handling, and every count the analyzers
//! report is defined relative to these exact rules.
//!
//! All functions are total. Empty or whitespace-only input yields empty
//! sequences.

use regex::Regex;
use std::sync::LazyLock;

/// A blank line: newline, optional whitespace, then one or more newlines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n+").expect("valid regex"));

/// Any run of whitespace.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A sentence terminator followed by whitespace.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

/// Letters, optionally joined by internal apostrophes ("don't", "o'clock").
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*").expect("valid regex"));

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Split text into paragraphs separated by one or more blank lines.
///
/// Line endings are normalized first. Each paragraph is trimmed and empty
/// spans are dropped, so the result preserves input order with no blanks.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    PARAGRAPH_BREAK
        .split(&text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into sentences.
///
/// Whitespace is normalized, then the text is cut immediately after every
/// `.`, `!`, or `?` that is followed by whitespace. A trailing fragment with
/// no terminator still counts as a sentence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = normalize_whitespace(text);
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(&text) {
        // Terminators are ASCII, so the sentence ends one byte into the match.
        push_trimmed(&mut sentences, &text[start..=m.start()]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

/// Extract word tokens, preserving case and internal apostrophes.
///
/// Digits and punctuation never appear in a token.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Count word tokens without collecting them.
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Truncate to at most `limit` characters, marking the cut with `...`.
///
/// Counts characters rather than bytes so multi-byte text is never split
/// inside a code point.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
