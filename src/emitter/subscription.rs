use super::{EmitterState, TokenEmitter};
use crate::errors::TokenizerError;
use crate::source::CharacterSource;
use crate::tokenizer::Token;

/// Tells the emitter whether the consumer wants more tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SinkDirective {
    Continue,
    Cancel,
}

/// Consumer of a [`Subscription`].
///
/// Exactly one of [`TokenSink::handle_error`] and [`TokenSink::handle_end`] is
/// called, unless the subscription is cancelled first: a cancelled sink receives
/// no further signals.
pub trait TokenSink {
    fn handle_token(&mut self, token: Token) -> SinkDirective;

    #[inline]
    fn handle_error(&mut self, _error: TokenizerError) {}

    #[inline]
    fn handle_end(&mut self) {}
}

impl<F: FnMut(Token) -> SinkDirective> TokenSink for F {
    #[inline]
    fn handle_token(&mut self, token: Token) -> SinkDirective {
        self(token)
    }
}

/// Push adapter over a [`TokenEmitter`].
///
/// The emitter doesn't run ahead of the sink: tokens are produced only to
/// satisfy demand signalled with [`Subscription::request`] or
/// [`Subscription::request_unbounded`].
pub struct Subscription<S: CharacterSource, K: TokenSink> {
    emitter: TokenEmitter<S>,
    sink: K,
    signalled: bool,
}

impl<S: CharacterSource, K: TokenSink> Subscription<S, K> {
    pub(super) fn new(emitter: TokenEmitter<S>, sink: K) -> Self {
        Subscription {
            emitter,
            sink,
            signalled: false,
        }
    }

    /// Delivers at most `count` tokens to the sink and returns how many were delivered.
    ///
    /// Completion is signalled within the same call if the last delivered token
    /// ended at the end of input.
    pub fn request(&mut self, count: usize) -> usize {
        let mut delivered = 0;

        while delivered < count && !self.emitter.is_terminated() {
            match self.emitter.next_token() {
                Some(Ok(token)) => {
                    delivered += 1;

                    if self.sink.handle_token(token) == SinkDirective::Cancel {
                        self.emitter.cancel();
                    }
                }
                Some(Err(err)) => self.signal(|sink| sink.handle_error(err)),
                None => break,
            }
        }

        if self.emitter.state() == EmitterState::Completed {
            self.signal(TokenSink::handle_end);
        }

        delivered
    }

    /// Delivers tokens until the input is exhausted, an error occurs or the
    /// subscription is cancelled.
    #[inline]
    pub fn request_unbounded(&mut self) -> usize {
        self.request(usize::MAX)
    }

    #[inline]
    pub fn cancel(&self) {
        self.emitter.cancel();
    }

    #[inline]
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.emitter.is_terminated()
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.emitter.is_cancelled()
    }

    #[inline]
    pub fn emitter(&self) -> &TokenEmitter<S> {
        &self.emitter
    }

    #[inline]
    pub fn sink(&self) -> &K {
        &self.sink
    }

    #[inline]
    pub fn into_sink(self) -> K {
        self.sink
    }

    #[inline]
    fn signal(&mut self, signal: impl FnOnce(&mut K)) {
        if !self.signalled {
            self.signalled = true;
            signal(&mut self.sink);
        }
    }
}
