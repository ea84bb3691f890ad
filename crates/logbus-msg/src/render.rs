//! Human-readable message rendering.
//!
//! These renderers produce the text forms used by file writers and
//! diagnostic tools. Array entries are joined with `/` rather than commas so
//! the output can be dropped into a CSV field unquoted. Binary payloads are
//! never hex-dumped at this layer; only their size is reported.

use std::fmt;

use crate::message::{Message, MsgData};

/// Rendered in place of payloads that carry no data.
const PLACEHOLDER: &str = "Message data not valid";

/// Separator for array payloads, chosen to keep the output CSV-safe.
const ARRAY_SEPARATOR: char = '/';

impl Message {
    /// Render the payload alone, without the source/channel prefix.
    ///
    /// The output grows to fit the payload; large arrays are rendered in
    /// full rather than truncated.
    pub fn data_display(&self) -> String {
        match &self.data {
            MsgData::Float(v) => format!("{v:.6}"),
            MsgData::Timestamp(ts) => format!("{ts:09}"),
            MsgData::Str(s) => s.to_string_lossy(),
            MsgData::StrArray(sa) => {
                let mut out = String::new();
                for (ix, entry) in sa.iter().enumerate() {
                    if ix > 0 {
                        out.push(ARRAY_SEPARATOR);
                    }
                    out.push_str(&entry.to_string_lossy());
                }
                out
            }
            MsgData::Bytes(b) => format!("Binary data, {} bytes", b.len()),
            MsgData::FloatArray(values) => {
                let mut out = String::new();
                for (ix, v) in values.iter().enumerate() {
                    if ix > 0 {
                        out.push(ARRAY_SEPARATOR);
                    }
                    out.push_str(&format!("{v:.6}"));
                }
                out
            }
            MsgData::Error(code) => format!("Error code 0x{code:02x}"),
            MsgData::Undefined => {
                // Not reachable through the message constructors.
                tracing::warn!(
                    source = self.source,
                    channel = self.channel,
                    "rendering message with undefined payload"
                );
                PLACEHOLDER.to_string()
            }
        }
    }
}

impl fmt::Display for Message {
    /// Full rendering: source and channel ids as two-digit hex, then the
    /// payload, e.g. `0x01:0x05 13.000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}:0x{:02x} {}",
            self.source,
            self.channel,
            self.data_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strarray::StrArray;

    #[test]
    fn float_fixed_six_decimals() {
        let m = Message::new_float(1, 5, 13.0);
        assert_eq!(m.data_display(), "13.000000");
        assert_eq!(m.to_string(), "0x01:0x05 13.000000");
    }

    #[test]
    fn timestamp_zero_padded_nine_digits() {
        let m = Message::new_timestamp(2, 2, 3600);
        assert_eq!(m.data_display(), "000003600");

        let m = Message::new_timestamp(2, 2, 123456789);
        assert_eq!(m.data_display(), "123456789");
    }

    #[test]
    fn string_rendered_raw() {
        let m = Message::new_string(1, 5, 20, b"Test Message - 1234");
        assert_eq!(m.data_display(), "Test Message - 1234");
        assert_eq!(m.to_string(), "0x01:0x05 Test Message - 1234");
    }

    #[test]
    fn bytes_report_count_only() {
        let m = Message::new_bytes(0x5f, 3, &[0xAA; 20]);
        assert_eq!(m.data_display(), "Binary data, 20 bytes");
    }

    #[test]
    fn string_array_joined_with_slashes() {
        let mut names = StrArray::new(3);
        names.create_entry(0, 4, b"Name").unwrap();
        names.create_entry(1, 8, b"Channels").unwrap();
        names.create_entry(2, 9, b"Timestamp").unwrap();

        let m = Message::new_string_array(0x10, 1, &names);
        assert_eq!(m.data_display(), "Name/Channels/Timestamp");
    }

    #[test]
    fn empty_array_slots_keep_their_position() {
        let mut names = StrArray::new(3);
        names.create_entry(0, 1, b"a").unwrap();
        names.create_entry(2, 1, b"c").unwrap();

        let m = Message::new_string_array(0x10, 1, &names);
        assert_eq!(m.data_display(), "a//c");
    }

    #[test]
    fn float_array_joined_with_slashes() {
        let m = Message::new_float_array(5, 4, &[1.0, 1.5, 2.0]);
        assert_eq!(m.data_display(), "1.000000/1.500000/2.000000");
    }

    #[test]
    fn large_float_array_rendered_in_full() {
        let values = vec![0.5f32; 512];
        let m = Message::new_float_array(5, 4, &values);
        let out = m.data_display();
        assert_eq!(out.matches('/').count(), 511);
        assert!(out.ends_with("0.500000"));
    }

    #[test]
    fn error_and_undefined_render_placeholders() {
        let m = Message::new_error(0x70, 3, 0xFD);
        assert_eq!(m.data_display(), "Error code 0xfd");

        let mut m = Message::new_float(1, 1, 0.0);
        m.clear();
        assert_eq!(m.data_display(), PLACEHOLDER);
    }

    #[test]
    fn display_prefix_is_two_digit_hex() {
        let m = Message::new_float(0x70, 0x0a, 0.5);
        assert_eq!(m.to_string(), "0x70:0x0a 0.500000");
    }
}
