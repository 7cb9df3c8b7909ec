//! Readability scoring.
//!
//! Two classical indices over word, sentence, and syllable counts:
//!
//! - Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//! - Flesch-Kincaid Grade: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Neither score is clamped. Pathological input can push reading ease below
//! zero or above 100, and callers are expected to read the magnitude.

use crate::syllables;

/// Aggregate counts for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of word tokens.
    pub words: usize,
    /// Number of sentences produced by the segmenter.
    pub sentences: usize,
    /// Number of paragraphs.
    pub paragraphs: usize,
    /// Total estimated syllables.
    pub syllables: usize,
}

impl DocumentStats {
    /// Build stats from an already-segmented document.
    pub fn from_segments(words: &[&str], sentences: &[String], paragraphs: &[String]) -> Self {
        Self {
            words: words.len(),
            sentences: sentences.len(),
            paragraphs: paragraphs.len(),
            syllables: syllables::count_syllables(words),
        }
    }

    /// Sentence count used as the scoring denominator.
    ///
    /// At least 1 whenever there is a word, so text without any terminator
    /// still scores as a single sentence. 0 for wordless text.
    pub fn scoring_sentences(&self) -> usize {
        if self.words == 0 {
            0
        } else {
            self.sentences.max(1)
        }
    }

    /// Compute both readability indices from these counts.
    pub fn scores(&self) -> ReadabilityScores {
        let sentences = self.scoring_sentences();
        ReadabilityScores {
            flesch_reading_ease: round2(flesch_reading_ease(
                self.words,
                sentences,
                self.syllables,
            )),
            flesch_kincaid_grade: round2(flesch_kincaid_grade(
                self.words,
                sentences,
                self.syllables,
            )),
        }
    }
}

/// The two readability indices, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadabilityScores {
    /// Flesch Reading Ease (higher is easier).
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level (approximate US school grade).
    pub flesch_kincaid_grade: f64,
}

/// Flesch Reading Ease. Returns 0.0 when either count is zero.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    (-1.015f64).mul_add(words_per_sentence, (-84.6f64).mul_add(syllables_per_word, 206.835))
}

/// Flesch-Kincaid Grade Level. Returns 0.0 when either count is zero.
pub fn flesch_kincaid_grade(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59
}

/// `numerator / denominator` rounded to two decimals, or 0.0 for a zero denominator.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round2(numerator as f64 / denominator as f64)
}

/// Round to two decimal places, ties to even.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}
