use super::CharacterSource;
use encoding_rs::Encoding;

/// In-memory [`CharacterSource`] over decoded characters.
#[derive(Debug, Clone, Default)]
pub struct StrSource {
    chars: Vec<char>,
    next_pos: usize,
}

impl StrSource {
    #[must_use]
    pub fn new(input: &str) -> Self {
        StrSource {
            chars: input.chars().collect(),
            next_pos: 0,
        }
    }

    /// Decodes `bytes` with the given encoding.
    ///
    /// The encoding is taken as is: only a BOM of that same encoding is removed.
    /// Malformed sequences are replaced with U+FFFD.
    #[must_use]
    pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Self {
        let (text, _) = encoding.decode_with_bom_removal(bytes);

        StrSource::new(&text)
    }

    /// Number of characters left to read.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.next_pos
    }

    #[inline]
    fn peek_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    fn next_equals_by(&self, s: &str, eq: impl Fn(char, char) -> bool) -> bool {
        let mut pos = self.next_pos;

        for expected in s.chars() {
            match self.peek_at(pos) {
                Some(ch) if eq(ch, expected) => pos += 1,
                _ => return false,
            }
        }

        true
    }
}

impl From<&str> for StrSource {
    #[inline]
    fn from(input: &str) -> Self {
        StrSource::new(input)
    }
}

impl From<String> for StrSource {
    #[inline]
    fn from(input: String) -> Self {
        StrSource::new(&input)
    }
}

impl CharacterSource for StrSource {
    #[inline]
    fn read(&mut self) -> Option<char> {
        let ch = self.peek_at(self.next_pos);

        if ch.is_some() {
            self.next_pos += 1;
        }

        ch
    }

    #[inline]
    fn unread(&mut self, count: usize) {
        self.next_pos = self.next_pos.saturating_sub(count);
    }

    #[inline]
    fn skip(&mut self, count: usize) {
        self.next_pos = self.next_pos.saturating_add(count).min(self.chars.len());
    }

    #[inline]
    fn next_equals(&self, s: &str) -> bool {
        self.next_equals_by(s, |a, b| a == b)
    }

    #[inline]
    fn next_equals_ignore_case(&self, s: &str) -> bool {
        self.next_equals_by(s, |a, b| a.eq_ignore_ascii_case(&b))
    }

    #[inline]
    fn next_matches(&self, offset: usize, pattern: fn(char) -> bool) -> bool {
        self.next_pos
            .checked_add(offset)
            .and_then(|pos| self.peek_at(pos))
            .is_some_and(pattern)
    }

    #[inline]
    fn current_position(&self) -> usize {
        self.next_pos.saturating_sub(1)
    }
}
