//! Error types produced by the tokenizer, the emitter and the element assembler.

use thiserror::Error;

pub use crate::memory::MemoryLimitExceededError;

/// Fatal error produced when the character source yields the reserved null character.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("Parse error at position {position}: {message}")]
pub struct ParseError {
    /// Position of the offending character in the character source.
    pub position: usize,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ParseError {
    #[inline]
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        ParseError {
            position,
            message: message.into(),
        }
    }
}

/// An error that terminates the current parse.
///
/// Errors are never retried internally: a new tokenizer over a fresh character
/// source should be used to restart the parse from scratch.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TokenizerError {
    /// The character source yielded the null sentinel.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The accumulation buffer outgrew the configured memory limit.
    #[error(transparent)]
    MemoryLimitExceeded(#[from] MemoryLimitExceededError),
}

impl TokenizerError {
    /// Position of the offending character, if the error is a parse error.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            TokenizerError::Parse(err) => Some(err.position),
            TokenizerError::MemoryLimitExceeded(_) => None,
        }
    }
}

/// An error that occurs when a start tag can't be assembled into an [`Element`]
/// or when an element is modified with an invalid name.
///
/// [`Element`]: crate::element::Element
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ElementError {
    /// The given text does not form a complete start tag.
    #[error("Not a valid start tag: {0:?}.")]
    InvalidStartTag(String),

    /// Tag or attribute name is empty.
    #[error("Name can't be empty.")]
    EmptyName,

    /// Tag or attribute name contains a character that would break serialization.
    #[error("{0:?} character is forbidden in the name.")]
    ForbiddenCharacter(char),
}
