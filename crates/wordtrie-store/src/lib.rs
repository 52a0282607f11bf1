//! Trie-backed word membership store.
//!
//! This crate builds a prefix tree over the 27-symbol dictionary alphabet
//! from a stream of words and answers exact membership queries in time
//! proportional to the length of the query.
//!
//! # Architecture
//!
//! - [`node`] -- Node layout and arena handles
//! - [`trie`] -- The arena-backed trie: insertion and lookup
//! - [`source`] -- Word sources (token readers over files, in-memory lists)
//! - [`options`] -- Load-time limits
//! - [`store`] -- The caller-owned store handle (load / check / size / unload)
//!
//! ```
//! use wordtrie_store::{TrieStore, WordList};
//!
//! let mut store = TrieStore::new();
//! store.load_from(WordList::new(["cat", "car", "care", "dog"])).unwrap();
//! assert!(store.check("Care"));
//! assert!(!store.check("ca"));
//! assert_eq!(store.size(), 4);
//! store.unload();
//! assert_eq!(store.size(), 0);
//! ```

use std::io;
use std::path::PathBuf;

pub mod node;
pub mod options;
pub mod source;
pub mod store;
pub mod trie;

pub use options::LoadOptions;
pub use source::{TokenReader, WordList, WordSource};
pub use store::TrieStore;
pub use trie::{InsertError, Trie, TrieStats};

/// Error type for dictionary loading.
///
/// Whatever the variant, the store that reported it is left empty and can
/// be loaded again.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The dictionary could not be opened, or names a directory.
    #[error("cannot open dictionary {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word source failed after it was opened (I/O error, invalid UTF-8).
    #[error("failed to read dictionary at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Growing the node arena failed.
    #[error("out of memory while building the trie")]
    OutOfMemory,

    /// A word contains a character outside the dictionary alphabet.
    #[error(
        "word {word:?} on line {line} contains {ch:?}, which is outside the dictionary alphabet"
    )]
    InvalidCharacter { word: String, ch: char, line: usize },

    /// A word exceeds the configured maximum length.
    #[error("word on line {line} is {len} characters long (limit is {max})")]
    WordTooLong {
        word: String,
        len: usize,
        max: usize,
        line: usize,
    },
}
