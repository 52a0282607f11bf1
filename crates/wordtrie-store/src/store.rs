// TrieStore: the caller-owned dictionary handle.
//
// Lifecycle: a store starts empty, `load`/`load_from` build a trie from a
// word source, `check` and `size` read it, and `unload` drops it again.
//
// Design notes:
// - Loading builds a fresh `Trie` off to the side and installs it only after
//   the whole source was consumed. Any error drops the partial trie, so a
//   failed load never leaves a half-built tree behind.
// - `load_from` first unloads whatever was loaded before; there is no
//   incremental loading into an existing tree.
// - Reads take `&self` and loading/unloading takes `&mut self`, so the
//   borrow checker sequences load -> reads -> unload. A loaded store can be
//   shared across threads for concurrent `check` calls.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::options::LoadOptions;
use crate::source::{TokenReader, WordSource};
use crate::trie::{InsertError, Trie, TrieStats};
use crate::LoadError;

/// Word membership store backed by a trie.
#[derive(Debug, Default)]
pub struct TrieStore {
    /// The loaded trie; `None` before the first load and after `unload`.
    trie: Option<Trie>,

    /// Limits applied while loading.
    options: LoadOptions,
}

impl TrieStore {
    /// Create an empty store with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given load options.
    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            trie: None,
            options,
        }
    }

    /// Limits applied by the next load.
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load the dictionary file at `path`.
    ///
    /// The file is read as whitespace-delimited words. Fails with
    /// [`LoadError::SourceUnavailable`] if it cannot be opened or is a
    /// directory; the file is closed again before this returns, on success
    /// and failure alike.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        self.unload();

        debug!(path = %path.display(), "Opening dictionary");
        let file = match open_dictionary(path) {
            Ok(file) => file,
            Err(source) => {
                warn!(path = %path.display(), error = %source, "Cannot open dictionary");
                return Err(LoadError::SourceUnavailable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        self.load_from(TokenReader::new(BufReader::new(file)))
    }

    /// Load the words of `source`, replacing any previously loaded words.
    ///
    /// Every word is inserted in order. Duplicate words each count towards
    /// [`size`](Self::size). On error the store is left empty.
    pub fn load_from<S: WordSource>(&mut self, mut source: S) -> Result<(), LoadError> {
        self.unload();

        match build_trie(&mut source, &self.options) {
            Ok(trie) => {
                info!(
                    words = trie.word_count(),
                    distinct = trie.distinct_words(),
                    nodes = trie.node_count(),
                    "Dictionary loaded"
                );
                self.trie = Some(trie);
                Ok(())
            }
            Err(err) => {
                warn!(error = ?err, "Dictionary load failed");
                Err(err)
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check whether `word` is in the dictionary (case-insensitively).
    ///
    /// Returns `false` when nothing is loaded, for the empty string, and for
    /// words with characters outside the dictionary alphabet.
    pub fn check(&self, word: &str) -> bool {
        self.trie.as_ref().is_some_and(|trie| trie.contains(word))
    }

    /// Number of words loaded, counting duplicates; 0 when nothing is loaded.
    pub fn size(&self) -> usize {
        self.trie.as_ref().map_or(0, Trie::word_count)
    }

    /// Whether a dictionary is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.trie.is_some()
    }

    /// Size figures of the loaded trie.
    pub fn stats(&self) -> Option<TrieStats> {
        self.trie.as_ref().map(Trie::stats)
    }

    /// Borrow the loaded trie.
    pub fn trie(&self) -> Option<&Trie> {
        self.trie.as_ref()
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Release the loaded trie and return to the empty state.
    ///
    /// Unloading an empty store does nothing.
    pub fn unload(&mut self) {
        if let Some(trie) = self.trie.take() {
            debug!(nodes = trie.node_count(), "Unloading dictionary");
        }
    }
}

/// Open `path` for reading, rejecting directories up front.
///
/// Opening a directory succeeds on some platforms and only fails at the
/// first read, which would otherwise surface as a mid-stream read error.
fn open_dictionary(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            "dictionary path is a directory",
        ));
    }
    Ok(file)
}

/// Build a trie from every word of `source`.
fn build_trie<S: WordSource>(source: &mut S, options: &LoadOptions) -> Result<Trie, LoadError> {
    let mut trie = Trie::new().map_err(|_| LoadError::OutOfMemory)?;
    let mut word = String::new();

    loop {
        match source.next_word(&mut word) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                return Err(LoadError::Read {
                    line: source.line(),
                    source: err,
                });
            }
        }

        let len = word.chars().count();
        if len > options.max_word_length {
            return Err(LoadError::WordTooLong {
                word,
                len,
                max: options.max_word_length,
                line: source.line(),
            });
        }

        if let Err(err) = trie.insert(&word) {
            return Err(match err {
                InsertError::InvalidCharacter { ch, .. } => LoadError::InvalidCharacter {
                    word,
                    ch,
                    line: source.line(),
                },
                InsertError::OutOfMemory => LoadError::OutOfMemory,
            });
        }
    }

    Ok(trie)
}
