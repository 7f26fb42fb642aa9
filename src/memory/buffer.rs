use super::{MemoryLimitExceededError, MemoryLimiter};
use std::mem;

/// Accumulation buffer of the token that is currently being built.
///
/// Every appended byte is charged to the limiter. Completed text is swapped out
/// of the buffer, so a handed-off token never aliases the storage that the
/// tokenizer keeps writing into.
#[derive(Debug)]
pub(crate) struct TokenBuffer {
    text: String,
    limiter: MemoryLimiter,
    preallocated_size: usize,
}

impl TokenBuffer {
    pub fn new(limiter: MemoryLimiter, preallocated_size: usize) -> Self {
        TokenBuffer {
            text: String::with_capacity(preallocated_size),
            limiter,
            preallocated_size,
        }
    }

    #[inline]
    pub fn push(&mut self, ch: char) -> Result<(), MemoryLimitExceededError> {
        self.limiter.increase_usage(ch.len_utf8())?;
        self.text.push(ch);

        Ok(())
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) -> Result<(), MemoryLimitExceededError> {
        self.limiter.increase_usage(s.len())?;
        self.text.push_str(s);

        Ok(())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Hands off the accumulated text and starts a fresh buffer.
    pub fn take(&mut self) -> String {
        let text = mem::replace(&mut self.text, String::with_capacity(self.preallocated_size));

        self.limiter.decrease_usage(text.len());

        text
    }
}
