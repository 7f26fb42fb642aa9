//! Emission driver: turns the pull-style [`Tokenizer`] into a token sequence.
//!
//! There is a single drive loop, [`TokenEmitter::next_token`]. Iterating the
//! emitter pulls one token per demand, which is the backpressure-aware way of
//! consuming large documents. A [`Subscription`] pushes tokens into a
//! [`TokenSink`] either in bounded batches or until the input is exhausted.

mod cancellation;
mod subscription;

pub use self::cancellation::CancellationToken;
pub use self::subscription::{SinkDirective, Subscription, TokenSink};

use crate::errors::TokenizerError;
use crate::settings::Settings;
use crate::source::{CharacterSource, StrSource};
use crate::tokenizer::{Token, TokenCaptureFlags, Tokenizer};
use std::iter::FusedIterator;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EmitterState {
    Running,
    Completed,
    Failed,
    Cancelled,
}

pub struct TokenEmitter<S: CharacterSource> {
    tokenizer: Tokenizer<S>,
    capture_flags: TokenCaptureFlags,
    cancellation: CancellationToken,
    state: EmitterState,
}

impl TokenEmitter<StrSource> {
    /// Creates an emitter over an in-memory HTML string with default settings.
    #[inline]
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        TokenEmitter::new(StrSource::new(html))
    }
}

impl<S: CharacterSource> TokenEmitter<S> {
    #[inline]
    pub fn new(source: S) -> Self {
        Self::with_settings(source, &Settings::default())
    }

    pub fn with_settings(source: S, settings: &Settings) -> Self {
        TokenEmitter {
            tokenizer: Tokenizer::with_memory_settings(source, &settings.memory_settings),
            capture_flags: settings.capture_flags,
            cancellation: CancellationToken::default(),
            state: EmitterState::Running,
        }
    }

    /// Produces the next token.
    ///
    /// Returns `None` once the input is exhausted, after an error has been
    /// returned or once the emitter has been cancelled. Cancellation is checked
    /// before every character read; a partially accumulated token is dropped.
    pub fn next_token(&mut self) -> Option<Result<Token, TokenizerError>> {
        while self.state == EmitterState::Running {
            if self.cancellation.is_cancelled() {
                trace!(@cancel self.tokenizer.position());

                self.state = EmitterState::Cancelled;
                break;
            }

            let token_finished = match self.tokenizer.read() {
                Ok(token_finished) => token_finished,
                Err(err) => {
                    self.state = EmitterState::Failed;

                    return Some(Err(err));
                }
            };

            let token = if token_finished {
                self.tokenizer.take_token()
            } else {
                None
            };

            if self.tokenizer.has_pending_transition() {
                self.tokenizer.apply_transition();
            }

            if self.tokenizer.is_eof() {
                trace!(@end);

                self.state = EmitterState::Completed;
            }

            if let Some(token) = token {
                if self.capture_flags.contains(token.kind().capture_flag()) {
                    trace!(@output token);

                    return Some(Ok(token));
                }

                trace!(@skip token);
            }
        }

        None
    }

    /// Returns a handle that cancels this emitter from anywhere, including other threads.
    #[inline]
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    #[inline]
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Checks whether the emitter will never produce anything again.
    ///
    /// A pending cancellation counts, even if it hasn't been observed by the drive loop yet.
    #[inline]
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state != EmitterState::Running || self.cancellation.is_cancelled()
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state == EmitterState::Cancelled
            || (self.state == EmitterState::Running && self.cancellation.is_cancelled())
    }

    #[inline]
    pub fn tokenizer(&self) -> &Tokenizer<S> {
        &self.tokenizer
    }

    /// Starts pushing tokens into `sink`. Nothing is produced until demand is
    /// signalled on the returned subscription.
    #[inline]
    pub fn subscribe<K: TokenSink>(self, sink: K) -> Subscription<S, K> {
        Subscription::new(self, sink)
    }
}

impl<S: CharacterSource> Iterator for TokenEmitter<S> {
    type Item = Result<Token, TokenizerError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<S: CharacterSource> FusedIterator for TokenEmitter<S> {}

/// Tokenizes the whole HTML string.
///
/// # Errors
///
/// Returns the first error that terminates the parse.
pub fn tokenize(html: &str) -> Result<Vec<Token>, TokenizerError> {
    TokenEmitter::from_html(html).collect()
}

/// Tokenizes the whole HTML string with the given settings.
///
/// # Errors
///
/// Returns the first error that terminates the parse.
pub fn tokenize_with_settings(
    html: &str,
    settings: &Settings,
) -> Result<Vec<Token>, TokenizerError> {
    TokenEmitter::with_settings(StrSource::new(html), settings).collect()
}
