//! Owned, fixed-length collections of [`StrBuf`] values.
//!
//! Used for the channel-name list a data source advertises: slot N holds the
//! name of channel N. The slot count is fixed at creation; individual slots
//! are populated, overwritten or cleared in place.

use crate::error::{MsgError, Result};
use crate::strbuf::StrBuf;

/// A fixed-length ordered sequence of owned strings.
///
/// Every slot is always a valid (possibly empty) [`StrBuf`], so a partially
/// populated array can be rendered or copied at any point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrArray {
    slots: Vec<StrBuf>,
}

impl StrArray {
    /// Allocate an array of `entries` empty slots.
    pub fn new(entries: usize) -> Self {
        Self {
            slots: vec![StrBuf::empty(); entries],
        }
    }

    /// Destroy any existing contents and re-allocate `entries` empty slots.
    pub fn init(&mut self, entries: usize) {
        self.clear();
        self.slots = vec![StrBuf::empty(); entries];
    }

    /// Replace the contents with a deep copy of `src`.
    ///
    /// Every slot is copied independently; the destination's previous
    /// contents are destroyed first and cannot be recovered.
    pub fn copy_from(&mut self, src: &StrArray) {
        self.clear();
        self.slots = src.slots.clone();
    }

    /// Transfer `src`'s slot storage into `self` without reallocation.
    ///
    /// The destination's previous contents are dropped. The source is left
    /// valid but empty (`entries() == 0`) and can be reused or dropped
    /// safely without affecting the destination.
    pub fn take_from(&mut self, src: &mut StrArray) {
        self.clear();
        self.slots = std::mem::take(&mut src.slots);
    }

    /// Overwrite one slot with a copy of `value`.
    ///
    /// Fails without mutating anything if `index` is out of range.
    pub fn set_entry(&mut self, index: usize, value: &StrBuf) -> Result<()> {
        let entries = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.copy_from(value);
                Ok(())
            }
            None => Err(MsgError::OutOfRange { index, entries }),
        }
    }

    /// Overwrite one slot with a bounded copy of raw bytes.
    ///
    /// Same truncation rules as [`StrBuf::update`]; fails without mutating
    /// anything if `index` is out of range.
    pub fn create_entry(&mut self, index: usize, bound: usize, src: &[u8]) -> Result<()> {
        let entries = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.update(bound, src);
                Ok(())
            }
            None => Err(MsgError::OutOfRange { index, entries }),
        }
    }

    /// Empty one slot. A no-op if `index` is out of range.
    pub fn clear_entry(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.clear();
        }
    }

    /// Destroy every slot and release the slot storage.
    ///
    /// Idempotent; the array is left with zero entries.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
    }

    /// Number of allocated slots.
    pub fn entries(&self) -> usize {
        self.slots.len()
    }

    /// True if the array has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Borrow one slot, or `None` if `index` is out of range.
    pub fn get(&self, index: usize) -> Option<&StrBuf> {
        self.slots.get(index)
    }

    /// Iterate over the slots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StrBuf> {
        self.slots.iter()
    }
}

impl<'a> IntoIterator for &'a StrArray {
    type Item = &'a StrBuf;
    type IntoIter = std::slice::Iter<'a, StrBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
