//! Character sources consumed by the [`Tokenizer`].
//!
//! The tokenizer never manages buffering or decoding itself: it reads one
//! character at a time, peeks ahead with constant-length lookahead and returns
//! characters it doesn't want with [`CharacterSource::unread`].
//!
//! [`Tokenizer`]: crate::tokenizer::Tokenizer

mod str_source;

pub use self::str_source::StrSource;

/// The reserved character that is always a protocol violation when consumed.
pub const NULL_CHAR: char = '\0';

/// An ordered, re-windable view over input characters.
///
/// `read` returns `None` as the end-of-input sentinel. [`NULL_CHAR`] is never a
/// valid character of the input.
pub trait CharacterSource {
    /// Consumes the next character.
    fn read(&mut self) -> Option<char>;

    /// Returns the last `count` consumed characters to the front of the stream.
    fn unread(&mut self, count: usize);

    /// Consumes `count` characters without returning them.
    fn skip(&mut self, count: usize);

    /// Checks whether the characters following the last consumed one are exactly `s`.
    fn next_equals(&self, s: &str) -> bool;

    /// Same as [`CharacterSource::next_equals`], but ignores ASCII case.
    fn next_equals_ignore_case(&self, s: &str) -> bool;

    /// Checks the character at `offset` after the last consumed one against `pattern`.
    ///
    /// Offset `0` is the character that the next [`CharacterSource::read`] would return.
    fn next_matches(&self, offset: usize, pattern: fn(char) -> bool) -> bool;

    /// Position of the most recently consumed character.
    fn current_position(&self) -> usize;
}

impl<S: CharacterSource + ?Sized> CharacterSource for &mut S {
    #[inline]
    fn read(&mut self) -> Option<char> {
        (**self).read()
    }

    #[inline]
    fn unread(&mut self, count: usize) {
        (**self).unread(count);
    }

    #[inline]
    fn skip(&mut self, count: usize) {
        (**self).skip(count);
    }

    #[inline]
    fn next_equals(&self, s: &str) -> bool {
        (**self).next_equals(s)
    }

    #[inline]
    fn next_equals_ignore_case(&self, s: &str) -> bool {
        (**self).next_equals_ignore_case(s)
    }

    #[inline]
    fn next_matches(&self, offset: usize, pattern: fn(char) -> bool) -> bool {
        (**self).next_matches(offset, pattern)
    }

    #[inline]
    fn current_position(&self) -> usize {
        (**self).current_position()
    }
}
