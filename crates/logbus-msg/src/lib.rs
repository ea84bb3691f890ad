//! Message representation and payload primitives for multi-source data logging.
//!
//! Every reading a device produces - a number, a timestamp, a name, a channel
//! map, a raw frame - is wrapped in a [`Message`] tagged with a source id and
//! a channel id. Payloads are a closed sum type, so a consumer can never read
//! a payload field the active variant does not carry, and every message
//! exclusively owns its payload for its whole lifetime.

pub mod error;
pub mod ids;
pub mod message;
pub mod render;
pub mod strarray;
pub mod strbuf;

pub use error::{MsgError, Result};
pub use message::{Message, MsgData, MsgKind};
pub use strarray::StrArray;
pub use strbuf::StrBuf;
