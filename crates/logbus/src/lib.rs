//! In-process message transport for multi-source data-acquisition loggers.
//!
//! logbus carries discrete readings from independent device readers (GPS,
//! IMU, serial NMEA feeds, network sources, timers) to consumer threads
//! without loss or per-producer reordering.
//!
//! # Crate Structure
//!
//! - [`msg`] — Message representation, payload primitives, well-known IDs
//! - [`queue`] — Mutex-guarded FIFO queue transporting owned messages
//! - [`logging`] — `tracing` subscriber setup for binaries and examples

/// Re-export message types.
pub mod msg {
    pub use logbus_msg::*;
}

/// Re-export queue types.
pub mod queue {
    pub use logbus_queue::*;
}

pub mod logging;
