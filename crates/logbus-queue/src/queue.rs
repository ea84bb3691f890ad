//! Mutex-guarded FIFO queue of owned messages.
//!
//! One queue instance links any number of producer threads (device readers)
//! to any number of consumer threads (file writers, relays). Ownership of a
//! message moves into the queue on a successful push and out to the caller
//! on pop; after either transfer exactly one party is responsible for it,
//! which the move-only API enforces at compile time.
//!
//! Every structural change happens inside a single critical section, so the
//! append position is correct by construction and a consumer can never
//! observe a half-linked chain. The lock guards only the queue structure:
//! payload construction happens before a message reaches [`push`], and a
//! popped message is exclusively owned by the popping thread.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use logbus_msg::Message;

use crate::error::{PushError, QueueError, Result};

/// A FIFO queue of owned [`Message`] values, shared between threads.
///
/// Messages pop in exactly the order their pushes entered the critical
/// section, regardless of which thread pushed them. [`pop`](MsgQueue::pop)
/// never blocks: an empty queue is a normal result, and any wait-for-data
/// behaviour belongs to the consumer loop.
///
/// Shutdown is cooperative: [`shutdown`](MsgQueue::shutdown) makes the queue
/// permanently unusable for new writers and drains whatever remains; worker
/// threads observe the failure and exit their loops.
#[derive(Debug)]
pub struct MsgQueue {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    items: VecDeque<Message>,
    valid: bool,
}

impl MsgQueue {
    /// Create a fresh, valid, empty queue.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::new(),
                valid: true,
            }),
        }
    }

    /// Re-initialise a queue that has been shut down.
    ///
    /// Refuses to touch a queue that is still valid or still holds
    /// undelivered messages, so live data can never be discarded by an
    /// accidental re-initialisation.
    pub fn init(&self) -> Result<()> {
        let mut inner = self.inner.lock().map_err(|_| {
            tracing::warn!("queue lock poisoned during init");
            QueueError::Poisoned
        })?;
        if inner.valid {
            return Err(QueueError::AlreadyValid);
        }
        if !inner.items.is_empty() {
            return Err(QueueError::NotEmpty);
        }
        inner.valid = true;
        Ok(())
    }

    /// Append a message to the queue.
    ///
    /// Ownership of the message transfers to the queue on success. After
    /// [`shutdown`](MsgQueue::shutdown) every push fails and hands the
    /// message back to the caller. The validity check happens inside the
    /// critical section, so a push observed as successful is guaranteed to
    /// be drained by either a consumer or the shutdown itself.
    pub fn push(&self, msg: Message) -> std::result::Result<(), PushError> {
        match self.inner.lock() {
            Ok(mut inner) => {
                if !inner.valid {
                    return Err(PushError::Closed(msg));
                }
                inner.items.push_back(msg);
                Ok(())
            }
            Err(_) => {
                tracing::warn!("queue lock poisoned; push aborted");
                Err(PushError::Poisoned(msg))
            }
        }
    }

    /// Remove and return the oldest message, without blocking.
    ///
    /// Returns `None` if the queue is empty or has been shut down.
    /// Ownership of the returned message transfers to the caller.
    pub fn pop(&self) -> Option<Message> {
        match self.inner.lock() {
            Ok(mut inner) => {
                if !inner.valid {
                    return None;
                }
                inner.items.pop_front()
            }
            Err(_) => {
                tracing::warn!("queue lock poisoned; pop aborted");
                None
            }
        }
    }

    /// Number of queued messages, or -1 once the queue is shut down.
    ///
    /// Under concurrent pushes and pops this is a point-in-time estimate;
    /// exact-ordering guarantees attach to push/pop, not to this number.
    pub fn count(&self) -> isize {
        match self.inner.lock() {
            Ok(inner) => {
                if !inner.valid {
                    return -1;
                }
                inner.items.len() as isize
            }
            Err(_) => {
                tracing::warn!("queue lock poisoned; count unavailable");
                -1
            }
        }
    }

    /// True while the queue accepts new messages.
    pub fn is_valid(&self) -> bool {
        match self.inner.lock() {
            Ok(inner) => inner.valid,
            Err(_) => false,
        }
    }

    /// Shut the queue down: refuse all further pushes, then drain and drop
    /// every remaining message.
    ///
    /// Proceeds through a poisoned lock rather than aborting - leaking the
    /// queued messages would be worse than continuing past a panicked
    /// writer, so the poison is logged and the guard recovered. Idempotent;
    /// a shut-down queue stays shut down until [`init`](MsgQueue::init).
    pub fn shutdown(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|poison: PoisonError<_>| {
            tracing::warn!("queue lock poisoned; shutting down regardless");
            poison.into_inner()
        });
        inner.valid = false;
        let drained = inner.items.len();
        inner.items.clear();
        if drained > 0 {
            tracing::debug!(drained, "queue shut down with undelivered messages");
        }
        self.inner.clear_poison();
    }
}

impl Default for MsgQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use logbus_msg::MsgData;

    use super::*;

    #[test]
    fn fresh_queue_is_empty_and_valid() {
        let q = MsgQueue::new();
        assert!(q.is_valid());
        assert_eq!(q.count(), 0);
        assert!(q.pop().is_none());
    }

    #[test]
    fn push_pop_single_message() {
        let q = MsgQueue::new();
        q.push(Message::new_float(1, 5, 13.0)).unwrap();
        assert_eq!(q.count(), 1);

        let out = q.pop().expect("queued message");
        assert_eq!(out.data, MsgData::Float(13.0));
        assert_eq!(q.count(), 0);
    }

    #[test]
    fn fifo_ordering() {
        let q = MsgQueue::new();
        for v in 1..=5 {
            q.push(Message::new_float(1, 5, v as f32)).unwrap();
        }
        assert_eq!(q.count(), 5);

        for v in 1..=5 {
            let out = q.pop().expect("queued message");
            assert_eq!(out.data, MsgData::Float(v as f32));
        }
        assert_eq!(q.count(), 0);
    }

    #[test]
    fn count_tracks_pushes_and_pops() {
        let q = MsgQueue::new();
        for v in 0..8 {
            q.push(Message::new_float(1, 5, v as f32)).unwrap();
        }
        for _ in 0..3 {
            q.pop().unwrap();
        }
        assert_eq!(q.count(), 5);
    }

    #[test]
    fn shutdown_contract() {
        let q = MsgQueue::new();
        q.push(Message::new_string(1, 6, 20, b"Test Message - 5678"))
            .unwrap();
        q.push(Message::new_string(1, 7, 20, b"Test Message - ABCD"))
            .unwrap();

        // Shutdown with items still queued drains them.
        q.shutdown();
        assert_eq!(q.count(), -1);
        assert!(q.pop().is_none());

        let err = q
            .push(Message::new_float(1, 5, 1.0))
            .expect_err("push to shut-down queue");
        let returned = err.into_message();
        assert_eq!(returned.data, MsgData::Float(1.0));
    }

    #[test]
    fn shutdown_is_idempotent() {
        let q = MsgQueue::new();
        q.shutdown();
        q.shutdown();
        assert_eq!(q.count(), -1);
    }

    #[test]
    fn reinit_rejected_while_valid() {
        let q = MsgQueue::new();
        q.push(Message::new_float(1, 5, 2.5)).unwrap();

        let err = q.init().expect_err("re-init of a valid queue");
        assert!(matches!(err, QueueError::AlreadyValid));

        // Existing state untouched.
        assert_eq!(q.count(), 1);
        assert_eq!(q.pop().unwrap().data, MsgData::Float(2.5));
    }

    #[test]
    fn reinit_after_shutdown() {
        let q = MsgQueue::new();
        q.push(Message::new_float(1, 5, 9.0)).unwrap();
        q.shutdown();

        q.init().expect("re-init of a drained queue");
        assert!(q.is_valid());
        assert_eq!(q.count(), 0);

        q.push(Message::new_float(1, 5, 10.0)).unwrap();
        assert_eq!(q.pop().unwrap().data, MsgData::Float(10.0));
    }

    #[test]
    fn ownership_round_trip() {
        let q = MsgQueue::new();
        q.push(Message::new_string(1, 5, 20, b"Test Message - 1234"))
            .unwrap();

        let out = q.pop().expect("queued message");
        match &out.data {
            MsgData::Str(s) => assert_eq!(s.as_bytes(), b"Test Message - 1234"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn poisoned_lock_aborts_push_and_pop() {
        let q = Arc::new(MsgQueue::new());
        q.push(Message::new_float(1, 5, 1.0)).unwrap();

        let poisoner = Arc::clone(&q);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the queue lock");
        })
        .join();

        let err = q
            .push(Message::new_float(1, 5, 2.0))
            .expect_err("push through poisoned lock");
        assert!(matches!(err, PushError::Poisoned(_)));
        assert!(q.pop().is_none());
        assert_eq!(q.count(), -1);

        // Shutdown recovers the guard and drains regardless.
        q.shutdown();
        assert_eq!(q.count(), -1);

        // A full restart brings the queue back into service.
        q.init().unwrap();
        q.push(Message::new_float(1, 5, 3.0)).unwrap();
        assert_eq!(q.pop().unwrap().data, MsgData::Float(3.0));
    }
}
