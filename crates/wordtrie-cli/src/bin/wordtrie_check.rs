// wordtrie-check: List the misspelled words of text read from stdin.
//
// Scans each input line for words the same way wordtrie-speller scans a
// text file (runs with digits are skipped, punctuation ends a word) and
// prints one `LINE:WORD` entry per word missing from the dictionary. The
// exit status is 0 when every word was found and 2 otherwise, so the tool
// works as a filter in scripts.
//
// Usage:
//   wordtrie-check [-d DICTIONARY] [--count]
//
// Options:
//   -d, --dictionary PATH   Dictionary file (one word per line)
//   -c, --count             Only print the number of misspelled words
//   -h, --help              Print help

use std::io::{self, BufRead, Write};
use std::process;

use tracing::debug;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordtrie_cli::parse_dictionary_arg(&args);

    if wordtrie_cli::wants_help(&args) {
        println!("wordtrie-check: List the misspelled words of text read from stdin.");
        println!();
        println!("Usage: wordtrie-check [-d DICTIONARY] [--count]");
        println!();
        println!("Prints LINE:WORD for each word not in the dictionary.");
        println!("Exits with status 2 if any word was misspelled.");
        println!();
        println!("Options:");
        println!("  -d, --dictionary PATH   Dictionary file");
        println!("  -c, --count             Only print the number of misspelled words");
        println!("  -h, --help              Print this help");
        return;
    }

    let mut count_only = false;
    for arg in &args {
        match arg.as_str() {
            "-c" | "--count" => count_only = true,
            other => wordtrie_cli::fatal(&format!("unexpected argument: {other}")),
        }
    }

    wordtrie_cli::init_tracing();

    let (store, _) = wordtrie_cli::load_store(dict_path.as_deref())
        .unwrap_or_else(|e| wordtrie_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut misspelled = 0usize;
    let mut buf = Vec::new();
    let mut lineno = 0usize;
    let mut input = stdin.lock();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => wordtrie_cli::fatal(&format!("error reading stdin: {e}")),
        }
        lineno += 1;

        let line = String::from_utf8_lossy(&buf);
        for word in wordtrie_cli::misspelled_words(&store, &line) {
            misspelled += 1;
            if !count_only {
                let _ = writeln!(out, "{lineno}:{word}");
            }
        }
    }

    if count_only {
        let _ = writeln!(out, "{misspelled}");
    }
    let _ = out.flush();
    debug!(lines = lineno, misspelled, "Input checked");

    if misspelled > 0 {
        process::exit(2);
    }
}
