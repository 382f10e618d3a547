//! The compiled-in table corpus.
//!
//! Each family is described with [`TableWriter`] calls and serialized once per process,
//! so the decoder only ever sees tables that went through the same blob format an
//! external table file would.

/// A fixed-size array of [`Entry`] from anything convertible into one.
macro_rules! entries {
    ($($entry:expr),* $(,)?) => {
        [$(::core::convert::Into::<$crate::tables::Entry>::into($entry)),*]
    };
}

mod evex;
mod legacy;
mod vex;
mod xop;

use super::{Entry, TableBlobs, ROOT_TABLE_LEN};
use crate::error::TableError;

/// A 256-entry opcode map under construction. Unset opcodes are invalid.
#[derive(Debug, Clone)]
pub(super) struct OpcodeMap {
    entries: Vec<Entry>,
}

impl OpcodeMap {
    pub(super) fn new() -> Self {
        OpcodeMap { entries: vec![Entry::Invalid; ROOT_TABLE_LEN] }
    }

    pub(super) fn set(&mut self, opcode: u8, entry: impl Into<Entry>) {
        self.entries[opcode as usize] = entry.into();
    }

    /// Sets consecutive opcodes starting at `first`.
    pub(super) fn set_all<E: Into<Entry>>(&mut self, first: u8, entries: impl IntoIterator<Item = E>) {
        for (n, entry) in entries.into_iter().enumerate() {
            self.entries[first as usize + n] = entry.into();
        }
    }

    pub(super) fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// An 8-entry ModRM.reg group with every entry invalid.
pub(super) fn invalid_group() -> [Entry; 8] {
    std::array::from_fn(|_| Entry::Invalid)
}

/// A 64-entry fine group table with every entry falling back to the coarse table.
pub(super) fn null_group64() -> Vec<Entry> {
    vec![Entry::Null; 64]
}

pub(super) fn blobs() -> Result<TableBlobs, TableError> {
    let blobs =
        TableBlobs { legacy: legacy::blob()?, vex: vex::blob()?, xop: xop::blob()?, evex: evex::blob()? };
    tracing::trace!(
        legacy = blobs.legacy.len(),
        vex = blobs.vex.len(),
        xop = blobs.xop.len(),
        evex = blobs.evex.len(),
        "serialized built-in tables"
    );
    Ok(blobs)
}
