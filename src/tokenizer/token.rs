use bitflags::bitflags;
use std::fmt::{self, Display};

bitflags! {
    /// Token kinds that are delivered to the consumer of a [`TokenEmitter`].
    ///
    /// Kinds that are not captured are still tokenized, they are just not emitted.
    ///
    /// [`TokenEmitter`]: crate::TokenEmitter
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct TokenCaptureFlags: u8 {
        const TEXT = 0b0000_0001;
        const COMMENTS = 0b0000_0010;
        const START_TAGS = 0b0000_0100;
        const END_TAGS = 0b0000_1000;
        const DOCTYPES = 0b0001_0000;
    }
}

impl Default for TokenCaptureFlags {
    #[inline]
    fn default() -> Self {
        TokenCaptureFlags::all()
    }
}

/// Kind of a lexical unit. Also identifies the tokenizer state that produces it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    DocType,
    StartTag,
    EndTag,
    Comment,
    Text,
    EndOfInput,
}

impl TokenKind {
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == TokenKind::EndOfInput
    }

    /// Creates a token of this kind.
    #[inline]
    pub fn token(self, text: impl Into<String>) -> Token {
        Token {
            kind: self,
            text: text.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn capture_flag(self) -> TokenCaptureFlags {
        match self {
            TokenKind::DocType => TokenCaptureFlags::DOCTYPES,
            TokenKind::StartTag => TokenCaptureFlags::START_TAGS,
            TokenKind::EndTag => TokenCaptureFlags::END_TAGS,
            TokenKind::Comment => TokenCaptureFlags::COMMENTS,
            TokenKind::Text => TokenCaptureFlags::TEXT,
            TokenKind::EndOfInput => TokenCaptureFlags::empty(),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::DocType => "DocType",
            TokenKind::StartTag => "StartTag",
            TokenKind::EndTag => "EndTag",
            TokenKind::Comment => "Comment",
            TokenKind::Text => "Text",
            TokenKind::EndOfInput => "EndOfInput",
        })
    }
}

/// A lexical unit of the input together with its verbatim source text,
/// delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

impl Display for Token {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
