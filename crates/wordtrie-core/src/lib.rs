//! Shared building blocks for the wordtrie dictionary index.
//!
//! - [`alphabet`] -- the 27-symbol dictionary alphabet and its edge mapping
//!
//! The store crate (`wordtrie-store`) and the command-line tools both depend
//! on these definitions, so that the word scanner and the trie agree on which
//! characters may appear in a word and how long a word may be.

pub mod alphabet;

/// Maximum number of characters in a dictionary word.
///
/// Word sources and the store agree on this limit; the longest word in the
/// standard English word lists ("pneumonoultramicroscopicsilicovolcanoconiosis")
/// is exactly this long.
pub const MAX_WORD_LENGTH: usize = 45;
