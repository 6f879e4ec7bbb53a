//! Carry-over slot for a high surrogate whose partner has not arrived yet.
//!
//! The [`PendingSurrogate`] holds at most one UTF-16 code unit, and only ever
//! a high surrogate. Encoders take the unit out at the start of every call,
//! prepend it to the new chunk, and may hand it back when the chunk still ends
//! in an unpaired high surrogate.

use crate::unit::is_high_surrogate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Zero or one buffered high surrogate.
pub(crate) struct PendingSurrogate {
    unit: Option<u16>,
}

impl PendingSurrogate {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self { unit: None }
    }

    /// The buffered unit, if any.
    pub fn get(&self) -> Option<u16> {
        self.unit
    }

    /// Number of buffered units: 0 or 1.
    pub fn len(&self) -> usize {
        usize::from(self.unit.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.unit.is_none()
    }

    /// Buffers `unit` if it is a high surrogate.
    ///
    /// Returns `false` and leaves the slot unchanged for any other unit.
    pub fn hold(&mut self, unit: u16) -> bool {
        debug_assert!(self.unit.is_none(), "pending surrogate overwritten");
        if !is_high_surrogate(unit) {
            return false;
        }
        self.unit = Some(unit);
        true
    }

    /// Empties the slot, returning what it held.
    pub fn take(&mut self) -> Option<u16> {
        self.unit.take()
    }

    /// Puts back a unit previously returned by [`take`](Self::take).
    pub fn restore(&mut self, unit: Option<u16>) {
        debug_assert!(unit.is_none_or(is_high_surrogate));
        self.unit = unit;
    }
}
