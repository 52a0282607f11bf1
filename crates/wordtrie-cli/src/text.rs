// Word scanning for running text.
//
// Splits prose into candidate words for spell checking:
// - a word is a run of ASCII letters and apostrophes, where an apostrophe
//   may not start a word;
// - a run that contains a digit is skipped entirely;
// - a run longer than the word length limit is skipped entirely;
// - every other character (punctuation, whitespace, non-ASCII) ends a word.

use wordtrie_core::MAX_WORD_LENGTH;

/// Iterator over the words of a text, as borrowed slices.
pub struct TextWords<'a> {
    text: &'a str,
    pos: usize,
    max_len: usize,
}

impl<'a> TextWords<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_max_len(text, MAX_WORD_LENGTH)
    }

    /// Scan with a custom word length limit.
    pub fn with_max_len(text: &'a str, max_len: usize) -> Self {
        Self {
            text,
            pos: 0,
            max_len,
        }
    }
}

impl<'a> Iterator for TextWords<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();

        while self.pos < bytes.len() {
            let start = self.pos;
            if !bytes[start].is_ascii_alphanumeric() {
                self.pos += 1;
                continue;
            }

            let mut end = start;
            let mut has_digit = false;
            while end < bytes.len() {
                let b = bytes[end];
                if b.is_ascii_alphabetic() || (b == b'\'' && end > start) {
                    end += 1;
                } else if b.is_ascii_digit() {
                    has_digit = true;
                    end += 1;
                } else {
                    break;
                }
            }
            self.pos = end;

            if has_digit || end - start > self.max_len {
                continue;
            }
            // Both bounds sit on ASCII bytes, so the slice is valid UTF-8.
            return Some(&self.text[start..end]);
        }

        None
    }
}
