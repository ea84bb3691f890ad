//! Thread-safe FIFO transport for logger messages.
//!
//! A [`MsgQueue`] is the sole channel between producer threads (device
//! readers) and consumer threads (file writers, relays). It guarantees FIFO
//! ordering of everything appended to one queue instance, non-blocking pops,
//! and a cooperative shutdown that permanently refuses new writers while
//! draining whatever remains.

pub mod error;
pub mod queue;

pub use error::{PushError, QueueError, Result};
pub use queue::MsgQueue;
