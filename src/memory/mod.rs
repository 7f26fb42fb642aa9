mod buffer;
mod limiter;

pub(crate) use self::buffer::TokenBuffer;
pub use self::limiter::{MemoryLimitExceededError, MemoryLimiter};
