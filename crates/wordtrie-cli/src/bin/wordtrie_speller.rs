// wordtrie-speller: Spell-check a text file against a dictionary.
//
// Loads the dictionary into a trie, scans the text for words, and prints
// every word that is not in the dictionary, followed by a summary of word
// counts and the time spent in load, check, size, and unload.
//
// Usage:
//   wordtrie-speller [-d DICTIONARY] TEXT
//
// Options:
//   -d, --dictionary PATH   Dictionary file (one word per line)
//   -h, --help              Print help

use std::io::{self, Write};
use std::time::Instant;

use wordtrie_cli::report::{SpellReport, Timings};
use wordtrie_cli::text::TextWords;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordtrie_cli::parse_dictionary_arg(&args);

    if wordtrie_cli::wants_help(&args) {
        println!("wordtrie-speller: Spell-check a text file against a dictionary.");
        println!();
        println!("Usage: wordtrie-speller [-d DICTIONARY] TEXT");
        println!();
        println!("Prints each misspelled word of TEXT on its own line, then a summary.");
        println!();
        println!("Options:");
        println!(
            "  -d, --dictionary PATH   Dictionary file (default: ${}, then dictionaries/large)",
            wordtrie_cli::DICTIONARY_ENV
        );
        println!("  -h, --help              Print this help");
        return;
    }

    let [text_path] = args.as_slice() else {
        wordtrie_cli::fatal("usage: wordtrie-speller [-d DICTIONARY] TEXT");
    };

    wordtrie_cli::init_tracing();

    let (mut store, load_time) = wordtrie_cli::load_store(dict_path.as_deref())
        .unwrap_or_else(|e| wordtrie_cli::fatal(&e));
    let mut timings = Timings {
        load: load_time,
        ..Timings::default()
    };

    let bytes = match std::fs::read(text_path) {
        Ok(b) => b,
        Err(e) => {
            store.unload();
            wordtrie_cli::fatal(&format!("could not open {text_path}: {e}"));
        }
    };
    let text = String::from_utf8_lossy(&bytes);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = writeln!(out, "\nMISSPELLED WORDS\n");

    let mut report = SpellReport::default();
    for word in TextWords::new(&text) {
        report.text_words += 1;

        let start = Instant::now();
        let found = store.check(word);
        timings.check += start.elapsed();

        if !found {
            report.misspelled += 1;
            let _ = writeln!(out, "{word}");
        }
    }

    let start = Instant::now();
    report.dictionary_words = store.size();
    timings.size = start.elapsed();

    let start = Instant::now();
    store.unload();
    timings.unload = start.elapsed();

    report.timings = timings;
    if let Err(e) = report.write_to(&mut out).and_then(|()| out.flush()) {
        wordtrie_cli::fatal(&format!("could not write report: {e}"));
    }
}
