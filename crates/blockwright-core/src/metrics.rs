// SPDX-License-Identifier: AGPL-3.0-or-later
//! Writing metrics derived from body text

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Average reading speed used for reading-time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Metrics for a body of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub word_count: usize,
    pub reading_time_minutes: usize,
    /// User-perceived characters (grapheme clusters)
    pub char_count: usize,
}

impl Metrics {
    pub fn of(text: &str) -> Self {
        let words = word_count(text);
        Self {
            word_count: words,
            reading_time_minutes: reading_time_minutes(words),
            char_count: text.graphemes(true).count(),
        }
    }
}

/// Number of whitespace-delimited tokens; 0 for blank text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes to read `words` words, rounded up
pub fn reading_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}
