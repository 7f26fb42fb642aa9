use crate::tokenizer::TokenCaptureFlags;

/// Specifies the memory settings of the tokenizer's accumulation buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySettings {
    /// Capacity the accumulation buffer is allocated with each time a token
    /// is handed off.
    ///
    /// ### Default
    ///
    /// `1024` bytes.
    pub preallocated_buffer_size: usize,

    /// Maximum amount of memory the text of a single token can occupy.
    ///
    /// Exceeding it terminates the parse with
    /// [`TokenizerError::MemoryLimitExceeded`](crate::errors::TokenizerError::MemoryLimitExceeded).
    ///
    /// ### Default
    ///
    /// [`usize::MAX`] bytes.
    pub max_allowed_memory_usage: usize,
}

impl Default for MemorySettings {
    #[inline]
    fn default() -> Self {
        MemorySettings {
            preallocated_buffer_size: 1024,
            max_allowed_memory_usage: usize::MAX,
        }
    }
}

/// Specifies settings for the [`TokenEmitter`](crate::TokenEmitter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Memory settings.
    pub memory_settings: MemorySettings,

    /// Token kinds that are delivered to the consumer.
    ///
    /// ### Default
    ///
    /// All kinds.
    pub capture_flags: TokenCaptureFlags,
}
