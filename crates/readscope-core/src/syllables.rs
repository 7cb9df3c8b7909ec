//! Heuristic syllable estimation.
//!
//! Counts vowel groups (`y` included) and applies two ending adjustments:
//! a silent trailing `e` loses a syllable, and a consonant followed by `le`
//! ("table", "simple") gains one. The result approximates spoken syllables
//! and is not checked against any dictionary.

/// Estimate the syllables in a single word.
///
/// Non-letters are ignored. Returns 0 for input without ASCII letters and
/// at least 1 otherwise.
pub fn estimate_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if word.is_empty() {
        return 0;
    }

    // Very short words are almost always one syllable.
    if word.len() <= 3 {
        return 1;
    }

    let bytes = word.as_bytes();
    let mut syllables: isize = 0;
    let mut previous_was_vowel = false;
    for &b in bytes {
        let vowel = is_vowel(b);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }

    if word.ends_with('e') && !word.ends_with("le") {
        syllables -= 1;
    }

    if word.ends_with("le") && !is_vowel(bytes[bytes.len() - 3]) {
        syllables += 1;
    }

    syllables.max(1).unsigned_abs()
}

/// Total estimated syllables across a slice of words.
pub fn count_syllables<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| estimate_syllables(w.as_ref())).sum()
}

const fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}
