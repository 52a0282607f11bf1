// Dictionary alphabet and character-to-edge mapping
//
// Words are stored over a closed alphabet of 27 symbols: the Latin letters
// a-z (case-insensitive) and the apostrophe. Each symbol owns one child slot
// in a trie node; `edge_index` is the only place that knows the layout.

/// Number of symbols in the dictionary alphabet (and child slots per node).
pub const ALPHABET_SIZE: usize = 27;

/// Edge index of the apostrophe, the last slot after the 26 letters.
pub const APOSTROPHE_EDGE: u8 = 26;

// ---------------------------------------------------------------------------
// Edge mapping
// ---------------------------------------------------------------------------

/// Returns the child slot for a character.
///
/// `'a'..='z'` map to `0..=25` and their uppercase forms map to the same
/// slots; the apostrophe maps to [`APOSTROPHE_EDGE`]. Every other character
/// returns `None`, so callers decide how to treat input outside the alphabet
/// instead of indexing out of range.
#[inline]
pub fn edge_index(c: char) -> Option<u8> {
    match c {
        'a'..='z' => Some(c as u8 - b'a'),
        'A'..='Z' => Some(c as u8 - b'A'),
        '\'' => Some(APOSTROPHE_EDGE),
        _ => None,
    }
}

/// Returns the canonical (lowercase) symbol for an edge index.
///
/// This is the inverse of [`edge_index`] restricted to lowercase input.
#[inline]
pub fn edge_symbol(index: u8) -> Option<char> {
    match index {
        0..=25 => Some((b'a' + index) as char),
        APOSTROPHE_EDGE => Some('\''),
        _ => None,
    }
}

/// Check whether a character belongs to the dictionary alphabet.
#[inline]
pub fn is_word_char(c: char) -> bool {
    edge_index(c).is_some()
}

/// Find the first character of `word` that is outside the alphabet.
///
/// Returns the character position (not byte offset) and the character.
pub fn find_invalid(word: &str) -> Option<(usize, char)> {
    word.chars().enumerate().find(|&(_, c)| !is_word_char(c))
}
