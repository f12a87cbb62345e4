// Word tokenizer used by the separated cases (snake_case, kebab-case).
//
// Classification is ASCII only. Every token starts and ends on an ASCII
// byte, so slicing the source by byte offsets is always on a char boundary.

use std::fmt;

/// A word unit borrowed from the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    text: &'a str,
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Split `input` into word tokens, left to right.
///
/// At each position the first matching rule wins:
///
/// 1. an acronym: two or more uppercase letters, ending either at a word
///    boundary or just before an uppercase letter that starts a lowercase word
///    (`"XMLParser"` yields `XML`, `Parser`)
/// 2. a word: an optional uppercase letter, lowercase letters, then any
///    trailing digits (`"sha256"` is a single token)
/// 3. a lone uppercase letter
/// 4. a run of digits
///
/// Everything else is a separator and is dropped.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Tokens::new(input).collect()
}

/// Lazy iterator behind [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn match_at(&self, start: usize) -> Option<usize> {
        let bytes = self.src.as_bytes();

        let upper = run_len(bytes, start, |b| b.is_ascii_uppercase());
        if upper >= 2 {
            if let Some(end) = acronym_end(bytes, start, upper) {
                return Some(end);
            }
        }

        let lead = usize::from(upper > 0);
        let lower = run_len(bytes, start + lead, |b| b.is_ascii_lowercase());
        if lower > 0 {
            let end = start + lead + lower;
            return Some(end + run_len(bytes, end, |b| b.is_ascii_digit()));
        }

        if upper > 0 {
            return Some(start + 1);
        }

        match run_len(bytes, start, |b| b.is_ascii_digit()) {
            0 => None,
            digits => Some(start + digits),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.src.len() {
            let start = self.pos;
            if let Some(end) = self.match_at(start) {
                self.pos = end;
                return Some(Token {
                    text: &self.src[start..end],
                });
            }
            self.pos += 1;
        }
        None
    }
}

/// End of an acronym starting at `start` whose uppercase run is `upper` long.
fn acronym_end(bytes: &[u8], start: usize, upper: usize) -> Option<usize> {
    let after = start + upper;
    match bytes.get(after) {
        None => Some(after),
        Some(&b) if !is_word_byte(b) => Some(after),
        // The last capital belongs to the following word.
        Some(&b) if b.is_ascii_lowercase() && upper > 2 => Some(after - 1),
        _ => None,
    }
}

fn run_len(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| pred(b)).count())
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
