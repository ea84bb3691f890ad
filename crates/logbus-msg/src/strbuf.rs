//! Length-tagged owned byte buffer for names and text payloads.
//!
//! Device readers hand over text as raw bytes with a declared upper bound,
//! which may be longer than the actual content and may contain a NUL
//! terminator partway through. `StrBuf` normalises that on the way in: the
//! stored content always ends at the first NUL within the bound, and the
//! stored length always matches the content actually kept.

/// An owned text buffer with bounded-copy construction.
///
/// The length reported by [`len`](StrBuf::len) is always the post-copy
/// content length, never the bound the caller requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrBuf {
    data: Vec<u8>,
}

impl StrBuf {
    /// Create an empty buffer without allocating.
    pub const fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a buffer from at most `bound` bytes of `src`.
    ///
    /// Copying stops at the first NUL byte found within the bound, or at the
    /// end of `src` if it is shorter than the bound. A zero bound or an empty
    /// source yields a valid empty buffer.
    pub fn new(bound: usize, src: &[u8]) -> Self {
        let mut s = Self::empty();
        s.update(bound, src);
        s
    }

    /// Replace the current contents with at most `bound` bytes of `src`.
    ///
    /// Previous contents are released first, so this is also safe on a
    /// buffer that already holds text. Same truncation rules as
    /// [`new`](StrBuf::new).
    pub fn update(&mut self, bound: usize, src: &[u8]) {
        self.data.clear();
        if bound == 0 || src.is_empty() {
            return;
        }
        let limit = bound.min(src.len());
        let end = src[..limit]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(limit);
        self.data.extend_from_slice(&src[..end]);
    }

    /// Replace the current contents with a deep copy of `src`.
    ///
    /// An empty source yields a valid empty destination rather than an
    /// error.
    pub fn copy_from(&mut self, src: &StrBuf) {
        self.data.clear();
        self.data.extend_from_slice(&src.data);
    }

    /// Release the contents and reset the length to zero.
    ///
    /// A no-op on an already-empty buffer.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Render the content as text, replacing invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

impl From<&str> for StrBuf {
    fn from(s: &str) -> Self {
        Self::new(s.len(), s.as_bytes())
    }
}
