//! The transportable unit of data.
//!
//! Every reading a device produces is wrapped in a [`Message`]: a source id
//! naming the producing unit, a channel id naming the reading within that
//! source, and exactly one payload. The payload is a closed sum type, so a
//! consumer can never read a field that the active variant does not carry.

use bytes::Bytes;

use crate::strarray::StrArray;
use crate::strbuf::StrBuf;

/// Payload carried by a [`Message`].
///
/// Exactly one variant is active for the lifetime of the message; clearing
/// the message resets it to [`Undefined`](MsgData::Undefined).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MsgData {
    /// Initial/cleared state. Carries no data.
    #[default]
    Undefined,
    /// Generic numeric reading, single precision.
    Float(f32),
    /// Millisecond counter from an arbitrary epoch.
    Timestamp(u32),
    /// Single text value (device names, log lines).
    Str(StrBuf),
    /// Channel-name list for a source.
    StrArray(StrArray),
    /// Raw binary data. The buffer length is the only record of its size.
    Bytes(Bytes),
    /// Multi-value numeric reading.
    FloatArray(Vec<f32>),
    /// Failure indication from a reader, carrying a small status code.
    Error(u8),
}

/// Payload variant tag, usable without borrowing the payload itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    Undefined,
    Float,
    Timestamp,
    Str,
    StrArray,
    Bytes,
    FloatArray,
    Error,
}

/// A queueable message from one data source.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Identifies the originating device or unit.
    pub source: u8,
    /// Identifies the reading within that source.
    pub channel: u8,
    /// The payload.
    pub data: MsgData,
}

impl Message {
    /// Create a message carrying a single numeric value.
    pub fn new_float(source: u8, channel: u8, value: f32) -> Self {
        Self {
            source,
            channel,
            data: MsgData::Float(value),
        }
    }

    /// Create a timestamp message (milliseconds from an arbitrary epoch).
    pub fn new_timestamp(source: u8, channel: u8, millis: u32) -> Self {
        Self {
            source,
            channel,
            data: MsgData::Timestamp(millis),
        }
    }

    /// Create a message carrying a single string.
    ///
    /// The text is taken with the bounded-copy rules of [`StrBuf::new`]:
    /// at most `bound` bytes, stopping at the first NUL. Intended for
    /// source and device names.
    pub fn new_string(source: u8, channel: u8, bound: usize, text: &[u8]) -> Self {
        Self {
            source,
            channel,
            data: MsgData::Str(StrBuf::new(bound, text)),
        }
    }

    /// Create a message carrying a channel-name list.
    ///
    /// The array is deep-copied; the caller keeps ownership of `names`.
    /// The message length reports the number of entries - the individual
    /// string lengths live inside the array itself.
    pub fn new_string_array(source: u8, channel: u8, names: &StrArray) -> Self {
        Self {
            source,
            channel,
            data: MsgData::StrArray(names.clone()),
        }
    }

    /// Create a message carrying raw binary data.
    ///
    /// The buffer is copied; its length is the only reliable record of how
    /// much data the message holds.
    pub fn new_bytes(source: u8, channel: u8, bytes: &[u8]) -> Self {
        Self {
            source,
            channel,
            data: MsgData::Bytes(Bytes::copy_from_slice(bytes)),
        }
    }

    /// Create a message carrying an array of numeric values.
    ///
    /// The slice is copied; the caller's array can be reused afterwards.
    pub fn new_float_array(source: u8, channel: u8, values: &[f32]) -> Self {
        Self {
            source,
            channel,
            data: MsgData::FloatArray(values.to_vec()),
        }
    }

    /// Create a message signalling a reader failure.
    pub fn new_error(source: u8, channel: u8, code: u8) -> Self {
        Self {
            source,
            channel,
            data: MsgData::Error(code),
        }
    }

    /// The active payload variant tag.
    pub fn kind(&self) -> MsgKind {
        match self.data {
            MsgData::Undefined => MsgKind::Undefined,
            MsgData::Float(_) => MsgKind::Float,
            MsgData::Timestamp(_) => MsgKind::Timestamp,
            MsgData::Str(_) => MsgKind::Str,
            MsgData::StrArray(_) => MsgKind::StrArray,
            MsgData::Bytes(_) => MsgKind::Bytes,
            MsgData::FloatArray(_) => MsgKind::FloatArray,
            MsgData::Error(_) => MsgKind::Error,
        }
    }

    /// Payload length; the meaning depends on the variant.
    ///
    /// Scalar variants report 1. For strings this duplicates the length
    /// embedded in the string; for byte and float arrays it is the
    /// authoritative element count. Undefined and error messages report 0.
    pub fn len(&self) -> usize {
        match &self.data {
            MsgData::Undefined | MsgData::Error(_) => 0,
            MsgData::Float(_) | MsgData::Timestamp(_) => 1,
            MsgData::Str(s) => s.len(),
            MsgData::StrArray(sa) => sa.entries(),
            MsgData::Bytes(b) => b.len(),
            MsgData::FloatArray(f) => f.len(),
        }
    }

    /// True if the message carries no payload data.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release the payload and reset the message to the undefined state.
    ///
    /// Idempotent: clearing an already-cleared message changes nothing.
    /// Dropping a message releases its payload without needing this.
    pub fn clear(&mut self) {
        self.data = MsgData::Undefined;
    }
}
