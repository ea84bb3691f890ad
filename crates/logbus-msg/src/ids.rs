//! Well-known source and channel IDs.
//!
//! Source ids 0x00-0x0F are reserved for the logger itself and its tools;
//! each hardware family owns a 16-id block so multiple devices of one kind
//! can coexist. Channel ids 0x00-0x03 are mandatory for every source, and
//! the 0x7D-0x7F block carries log messages relayed from the source.

use crate::strarray::StrArray;

/// Messages generated by the logging software itself.
pub const SOURCE_LOCAL: u8 = 0x00;
/// Messages generated by data conversion tools.
pub const SOURCE_CONV: u8 = 0x01;
/// Local/software timers.
pub const SOURCE_TIMER: u8 = 0x02;
/// Test data source (1/3).
pub const SOURCE_TEST1: u8 = 0x05;
/// Test data source (2/3).
pub const SOURCE_TEST2: u8 = 0x06;
/// Test data source (3/3).
pub const SOURCE_TEST3: u8 = 0x07;
/// GPS and other satellite navigation receivers.
pub const SOURCE_GPS: u8 = 0x10;
/// Generic analogue inputs.
pub const SOURCE_ADC: u8 = 0x20;
/// NMEA bus devices.
pub const SOURCE_NMEA: u8 = 0x30;
/// NMEA2000 bus devices.
pub const SOURCE_N2K: u8 = 0x38;
/// I2C bus devices.
pub const SOURCE_I2C: u8 = 0x40;
/// Other external data sources.
pub const SOURCE_EXT: u8 = 0x60;
/// MQTT-derived data.
pub const SOURCE_MQTT: u8 = 0x68;
/// Devices speaking the single-value serial protocol.
pub const SOURCE_MP: u8 = 0x70;

/// Name of the source device.
pub const CHAN_NAME: u8 = 0x00;
/// Channel name map (excludes the log channels).
pub const CHAN_MAP: u8 = 0x01;
/// Source timestamp (milliseconds, arbitrary epoch).
pub const CHAN_TSTAMP: u8 = 0x02;
/// Raw device data. Not mandatory to populate.
pub const CHAN_RAW: u8 = 0x03;
/// Information messages relayed from the source.
pub const CHAN_LOG_INFO: u8 = 0x7D;
/// Warning messages relayed from the source.
pub const CHAN_LOG_WARN: u8 = 0x7E;
/// Error messages relayed from the source.
pub const CHAN_LOG_ERR: u8 = 0x7F;

/// Returns a human-readable name for the block a source id falls in.
pub fn source_name(id: u8) -> &'static str {
    match id {
        SOURCE_LOCAL => "LOCAL",
        SOURCE_CONV => "CONV",
        SOURCE_TIMER => "TIMER",
        SOURCE_TEST1..=SOURCE_TEST3 => "TEST",
        0x10..=0x1F => "GPS",
        0x20..=0x2F => "ADC",
        0x30..=0x37 => "NMEA",
        0x38..=0x3F => "N2K",
        0x40..=0x4F => "I2C",
        0x60..=0x67 => "EXT",
        0x68..=0x6F => "MQTT",
        0x70..=0x7F => "MP",
        _ => "RESERVED",
    }
}

/// True if the id belongs to the block reserved for the logger and tools.
pub fn is_reserved(id: u8) -> bool {
    id < SOURCE_GPS
}

/// Build the standard channel-name list a source advertises on [`CHAN_MAP`].
///
/// Slots 0-3 carry the mandatory channel names; any source-specific channel
/// names follow from slot 4 in the order given.
pub fn default_channel_map(extra: &[&str]) -> StrArray {
    let mut channels = StrArray::new(4 + extra.len());
    // The mandatory slots line up with CHAN_NAME..CHAN_RAW.
    channels.create_entry(CHAN_NAME as usize, 4, b"Name").ok();
    channels.create_entry(CHAN_MAP as usize, 8, b"Channels").ok();
    channels
        .create_entry(CHAN_TSTAMP as usize, 9, b"Timestamp")
        .ok();
    channels.create_entry(CHAN_RAW as usize, 3, b"Raw").ok();
    for (ix, name) in extra.iter().enumerate() {
        channels.create_entry(4 + ix, name.len(), name.as_bytes()).ok();
    }
    channels
}
