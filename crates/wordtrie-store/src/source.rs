// Word sources: sequential providers of dictionary words.
//
// A source yields whitespace-delimited tokens one at a time. The store pulls
// words with `next_word`, which writes into a caller-owned buffer so that a
// whole dictionary is read without a per-word allocation.

use std::io::{self, BufRead};

/// A sequential provider of dictionary words.
pub trait WordSource {
    /// Write the next word into `word`, replacing its contents.
    ///
    /// Returns `Ok(false)` once the source is exhausted; `word` is then
    /// unspecified.
    fn next_word(&mut self, word: &mut String) -> io::Result<bool>;

    /// 1-based line of the most recently returned word (or of the line that
    /// failed to read), for diagnostics. Returns 0 when the source has no
    /// notion of lines.
    fn line(&self) -> usize {
        0
    }
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn next_word(&mut self, word: &mut String) -> io::Result<bool> {
        (**self).next_word(word)
    }

    fn line(&self) -> usize {
        (**self).line()
    }
}

// ---------------------------------------------------------------------------
// TokenReader
// ---------------------------------------------------------------------------

/// Splits a buffered reader into whitespace-delimited tokens.
///
/// Input is read one line at a time; any amount of ASCII whitespace
/// (including blank lines) separates tokens. Other Unicode spaces such as
/// U+00A0 stay inside the token, so the store rejects them as characters
/// outside the alphabet. Input that is not valid UTF-8 surfaces as
/// an `InvalidData` error from [`next_word`](WordSource::next_word).
pub struct TokenReader<R> {
    reader: R,
    buffer: String,
    offset: usize,
    line: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            offset: 0,
            line: 0,
        }
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> WordSource for TokenReader<R> {
    fn next_word(&mut self, word: &mut String) -> io::Result<bool> {
        loop {
            let rest = &self.buffer[self.offset..];
            if let Some(start) = rest.find(|c: char| !c.is_ascii_whitespace()) {
                let token = &rest[start..];
                let len = token
                    .find(|c: char| c.is_ascii_whitespace())
                    .unwrap_or(token.len());
                word.clear();
                word.push_str(&token[..len]);
                self.offset += start + len;
                return Ok(true);
            }

            self.buffer.clear();
            self.offset = 0;
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return Ok(false),
                Ok(_) => self.line += 1,
                Err(err) => {
                    self.line += 1;
                    return Err(err);
                }
            }
        }
    }

    fn line(&self) -> usize {
        self.line
    }
}

// ---------------------------------------------------------------------------
// WordList
// ---------------------------------------------------------------------------

/// Adapts an iterator of strings into a word source.
///
/// Each item is taken as one word, as given; item `n` reports line `n`.
pub struct WordList<I> {
    words: I,
    position: usize,
}

impl<I> WordList<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<T>(words: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            words: words.into_iter(),
            position: 0,
        }
    }
}

impl<I> WordSource for WordList<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    fn next_word(&mut self, word: &mut String) -> io::Result<bool> {
        match self.words.next() {
            Some(next) => {
                self.position += 1;
                word.clear();
                word.push_str(next.as_ref());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn line(&self) -> usize {
        self.position
    }
}
