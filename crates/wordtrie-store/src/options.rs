// Load-time limits for the trie store.

use wordtrie_core::MAX_WORD_LENGTH;

/// Options applied while loading a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Longest word (in characters) accepted from a word source. Longer
    /// words fail the load with [`LoadError::WordTooLong`](crate::LoadError::WordTooLong).
    pub max_word_length: usize,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted word length.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_word_length: MAX_WORD_LENGTH,
        }
    }
}
