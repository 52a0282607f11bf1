//! End-to-end spell checking through the CLI helpers: load a dictionary file,
//! scan a text, and count misspellings.

use std::path::PathBuf;

use tempfile::TempDir;
use wordtrie_cli::load_store;
use wordtrie_cli::text::TextWords;

/// Write `contents` to a file named `name` inside `dir`.
fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn misspelled_words_of_a_text() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write_file(&dir, "dict", "a\ncat\nsat\non\nthe\nmat\nit's\n");
    let (mut store, _) = load_store(dict.to_str()).expect("load");
    assert_eq!(store.size(), 7);

    let text = "The cat sat on teh mat. It's a caat, 2nd time!";
    let misspelled: Vec<&str> = TextWords::new(text).filter(|w| !store.check(w)).collect();
    assert_eq!(misspelled, vec!["teh", "caat", "time"]);
    assert_eq!(TextWords::new(text).count(), 10);

    store.unload();
    assert_eq!(store.size(), 0);
}

#[test]
fn dictionary_with_bad_entry_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write_file(&dir, "bad-dict", "good\nna\u{00EF}ve\n");
    let err = load_store(dict.to_str()).unwrap_err();
    assert!(err.contains("outside the dictionary alphabet"), "{err}");
}
