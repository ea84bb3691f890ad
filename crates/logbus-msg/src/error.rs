/// Errors that can occur when building or manipulating message payloads.
#[derive(Debug, thiserror::Error)]
pub enum MsgError {
    /// A string-array index was outside the allocated slot range.
    #[error("index {index} out of range for array with {entries} entries")]
    OutOfRange { index: usize, entries: usize },
}

pub type Result<T> = std::result::Result<T, MsgError>;
