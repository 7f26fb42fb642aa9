use thiserror::Error;

/// An error that occurs when the accumulated token text exceeds the memory limit
/// configured in [`MemorySettings`].
///
/// [`MemorySettings`]: crate::MemorySettings
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
#[error("Memory limit of {max} bytes has been exceeded: {current_usage} bytes were used.")]
pub struct MemoryLimitExceededError {
    pub current_usage: usize,
    pub max: usize,
}

#[derive(Debug)]
pub struct MemoryLimiter {
    current_usage: usize,
    max: usize,
}

impl MemoryLimiter {
    #[inline]
    #[must_use]
    pub fn new(max: usize) -> Self {
        MemoryLimiter {
            current_usage: 0,
            max,
        }
    }

    #[inline]
    #[must_use]
    pub fn current_usage(&self) -> usize {
        self.current_usage
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    #[inline]
    pub fn increase_usage(&mut self, byte_count: usize) -> Result<(), MemoryLimitExceededError> {
        self.current_usage = self.current_usage.saturating_add(byte_count);

        if self.current_usage > self.max {
            Err(MemoryLimitExceededError {
                current_usage: self.current_usage,
                max: self.max,
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn decrease_usage(&mut self, byte_count: usize) {
        self.current_usage = self.current_usage.saturating_sub(byte_count);
    }
}
