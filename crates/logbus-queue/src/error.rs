use logbus_msg::Message;

/// Errors from queue lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// `init` was called on a queue that is already valid.
    #[error("queue is already initialised")]
    AlreadyValid,

    /// `init` was called on a queue still holding undelivered messages.
    #[error("queue still holds undelivered messages")]
    NotEmpty,

    /// The queue lock was poisoned by a thread that panicked while holding it.
    #[error("queue lock poisoned")]
    Poisoned,
}

/// Returned by [`push`](crate::MsgQueue::push) when a message cannot be
/// queued. The rejected message is handed back so the producer can decide
/// whether to retry, log or drop it.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The queue has been shut down; no further messages are accepted.
    #[error("queue is shut down")]
    Closed(Message),

    /// The queue lock was poisoned; this single push was aborted.
    #[error("queue lock poisoned")]
    Poisoned(Message),
}

impl PushError {
    /// Recover the rejected message.
    pub fn into_message(self) -> Message {
        match self {
            PushError::Closed(msg) | PushError::Poisoned(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, QueueError>;
