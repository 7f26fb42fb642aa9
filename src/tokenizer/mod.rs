//! Character-level HTML tokenizer.
//!
//! The tokenizer is a pull-style state machine: every [`Tokenizer::read`] call
//! runs the handler of the current state, which consumes one character (or a
//! short run of characters confirmed by lookahead) and reports whether the
//! current token is complete. Driving the machine is up to the caller, see
//! [`TokenEmitter`].
//!
//! [`TokenEmitter`]: crate::TokenEmitter

mod states;
mod token;

pub use self::token::{Token, TokenCaptureFlags, TokenKind};

pub(crate) use self::states::{is_tag_name_start, COMMENT_CLOSER, DIRECTIVE_OPENER};

use crate::errors::{ParseError, TokenizerError};
use crate::memory::{MemoryLimiter, TokenBuffer};
use crate::settings::MemorySettings;
use crate::source::{CharacterSource, NULL_CHAR};

/// Result of a state handler invocation: `true` if the current token is complete.
pub type StateResult = Result<bool, TokenizerError>;

pub struct Tokenizer<S: CharacterSource> {
    source: S,
    buffer: TokenBuffer,
    state: TokenKind,
    previous_state: Option<TokenKind>,
    pending_state: Option<TokenKind>,
}

impl<S: CharacterSource> Tokenizer<S> {
    #[inline]
    pub fn new(source: S) -> Self {
        Self::with_memory_settings(source, &MemorySettings::default())
    }

    pub fn with_memory_settings(source: S, memory_settings: &MemorySettings) -> Self {
        Tokenizer {
            source,
            buffer: TokenBuffer::new(
                MemoryLimiter::new(memory_settings.max_allowed_memory_usage),
                memory_settings.preallocated_buffer_size,
            ),
            state: TokenKind::Text,
            previous_state: None,
            pending_state: None,
        }
    }

    /// Runs the handler of the current state once.
    ///
    /// # Panics
    ///
    /// Panics if the tokenizer has already reached the end of input.
    pub fn read(&mut self) -> StateResult {
        match self.state {
            TokenKind::Text => self.text_state(),
            TokenKind::StartTag | TokenKind::EndTag => self.tag_state(),
            TokenKind::Comment => self.comment_state(),
            TokenKind::DocType => self.doctype_state(),
            TokenKind::EndOfInput => {
                unreachable!("The tokenizer has been read after reaching the end of input.")
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn has_pending_transition(&self) -> bool {
        self.pending_state.is_some()
    }

    /// Commits the state requested by the last handler invocation.
    pub fn apply_transition(&mut self) {
        if let Some(state) = self.pending_state.take() {
            trace!(@transition self.state, state);

            self.previous_state = Some(self.state);
            self.state = state;
        }
    }

    /// Hands off the accumulated text as a token of the current state's kind.
    ///
    /// Returns `None` if nothing has been accumulated: empty tokens are never produced.
    pub fn take_token(&mut self) -> Option<Token> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.state.token(self.buffer.take()))
        }
    }

    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.state.is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> TokenKind {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn previous_state(&self) -> Option<TokenKind> {
        self.previous_state
    }

    /// Position of the most recently consumed character.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.source.current_position()
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[inline]
    pub fn into_source(self) -> S {
        self.source
    }

    // Handler helpers
    #[inline]
    fn transition_to(&mut self, state: TokenKind) {
        self.pending_state = if state == self.state {
            None
        } else {
            Some(state)
        };
    }

    #[inline]
    fn consume_ch(&mut self) -> Result<Option<char>, ParseError> {
        let ch = self.source.read();

        trace!(@chars "consume", ch);

        match ch {
            Some(NULL_CHAR) => Err(ParseError::new(
                self.source.current_position(),
                "Unexpected null character.",
            )),
            ch => Ok(ch),
        }
    }

    #[inline]
    fn unconsume_ch(&mut self) {
        self.source.unread(1);

        trace!(@chars "unconsume");
    }

    #[inline]
    fn consume_several(&mut self, count: usize) {
        self.source.skip(count);

        trace!(@chars "consume several", count);
    }

    #[inline]
    fn append(&mut self, ch: char) -> Result<(), TokenizerError> {
        Ok(self.buffer.push(ch)?)
    }

    #[inline]
    fn append_str(&mut self, s: &str) -> Result<(), TokenizerError> {
        Ok(self.buffer.push_str(s)?)
    }

    #[inline]
    fn finish_at_end_of_input(&mut self) -> bool {
        self.transition_to(TokenKind::EndOfInput);

        true
    }

    /// Gives up on the current markup: the offending character is returned to
    /// the source and the text accumulated so far is continued as text.
    #[inline]
    fn fall_back_to_text(&mut self) -> bool {
        trace!(@abort self.state, self.buffer.as_str());

        self.unconsume_ch();
        self.transition_to(TokenKind::Text);

        false
    }
}
