// wordtrie-cli: shared utilities for the command-line tools.

pub mod report;
pub mod text;

use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordtrie_store::TrieStore;

use crate::text::TextWords;

/// Environment variable naming the dictionary file.
pub const DICTIONARY_ENV: &str = "WORDTRIE_DICTIONARY";

/// Default dictionary, relative to the current directory.
const DEFAULT_DICTIONARY: &str = "dictionaries/large";

/// System word list used as the last fallback.
const SYSTEM_DICTIONARY: &str = "/usr/share/dict/words";

/// Install the tracing subscriber for a CLI process.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Output goes to
/// stderr so it never mixes with program output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Locate the dictionary and load it into a new store.
///
/// An explicit `dict_path` is used as given, so a missing file is reported
/// instead of silently falling back. Otherwise the first existing file of
/// [`search_paths`] is loaded.
///
/// Returns the store together with the time spent loading.
pub fn load_store(dict_path: Option<&str>) -> Result<(TrieStore, Duration), String> {
    let path = match dict_path {
        Some(p) => PathBuf::from(p),
        None => {
            let candidates = search_paths();
            match candidates.iter().find(|p| p.is_file()) {
                Some(found) => found.clone(),
                None => {
                    return Err(format!(
                        "could not find a dictionary in any of the search paths:\n{}",
                        candidates
                            .iter()
                            .map(|p| format!("  - {}", p.display()))
                            .collect::<Vec<_>>()
                            .join("\n")
                    ));
                }
            }
        }
    };

    debug!(path = %path.display(), "Using dictionary");
    let mut store = TrieStore::new();
    let start = Instant::now();
    store.load(&path).map_err(|e| error_chain(&e))?;
    Ok((store, start.elapsed()))
}

/// Render an error and its chain of causes as `outer: cause: root`.
pub fn error_chain(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

/// Words of `text` that are not in the dictionary, in order of appearance.
pub fn misspelled_words<'a>(
    store: &'a TrieStore,
    text: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    TextWords::new(text).filter(|word| !store.check(word))
}

/// Build the list of dictionary files to try, in order.
///
/// 1. `WORDTRIE_DICTIONARY` environment variable
/// 2. `dictionaries/large` in the current directory
/// 3. The system word list
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(DICTIONARY_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_DICTIONARY));
    }

    paths.push(PathBuf::from(SYSTEM_DICTIONARY));
    paths
}

/// Parse a `--dictionary=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dictionary_arg(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dictionary=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dictionary" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dictionary_short_flag() {
        let (dict, rest) = parse_dictionary_arg(&args(&["-d", "dict.txt", "text.txt"]));
        assert_eq!(dict.as_deref(), Some("dict.txt"));
        assert_eq!(rest, args(&["text.txt"]));
    }

    #[test]
    fn dictionary_long_flag_with_equals() {
        let (dict, rest) = parse_dictionary_arg(&args(&["text.txt", "--dictionary=small"]));
        assert_eq!(dict.as_deref(), Some("small"));
        assert_eq!(rest, args(&["text.txt"]));
    }

    #[test]
    fn no_dictionary_flag() {
        let (dict, rest) = parse_dictionary_arg(&args(&["a", "b"]));
        assert_eq!(dict, None);
        assert_eq!(rest, args(&["a", "b"]));
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["x", "--help"])));
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["-d", "h"])));
    }

    #[test]
    fn search_paths_end_with_system_list() {
        let paths = search_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from(SYSTEM_DICTIONARY)));
    }

    #[test]
    fn explicit_missing_dictionary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing-dictionary");
        let err = load_store(missing.to_str()).unwrap_err();
        assert!(err.starts_with("cannot open dictionary"), "{err}");
        // The path is named once and the OS cause follows it.
        assert_eq!(err.matches("missing-dictionary").count(), 1, "{err}");
        assert!(err.len() > format!("cannot open dictionary {}", missing.display()).len());
    }

    #[test]
    fn misspelled_words_skip_known_and_numeric() {
        let mut store = TrieStore::new();
        store
            .load_from(wordtrie_store::WordList::new(["the", "cat", "sat"]))
            .unwrap();
        let found: Vec<&str> = misspelled_words(&store, "The cat sta on 3rd mat.").collect();
        assert_eq!(found, vec!["sta", "on", "mat"]);
    }

    #[test]
    fn error_chain_joins_causes() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = wordtrie_store::LoadError::Read {
            line: 3,
            source: inner,
        };
        assert_eq!(error_chain(&err), "failed to read dictionary at line 3: gone");
    }
}
