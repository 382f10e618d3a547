//! Encoder for the table blob format read by [`TableDeserializer`](super::TableDeserializer).

use super::{FamilyTags, RECORD_ARRAY, RECORD_HANDLER};
use crate::code::Code;
use crate::error::{TableError, TableFamily};
use crate::register::Register;
use crate::tuple_type::TupleType;

/// A record previously written to a [`TableWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u8);

impl SlotId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One handler position in the blob.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A freshly constructed node.
    Node(NodeSpec),
    /// The node written earlier as a handler record.
    Ref(SlotId),
    Invalid,
    InvalidNoModrm,
    Null,
    /// `n` consecutive array positions sharing one node.
    Dup(u32, Box<Entry>),
    /// Two consecutive invalid array positions.
    Invalid2,
}

impl From<NodeSpec> for Entry {
    fn from(spec: NodeSpec) -> Entry {
        Entry::Node(spec)
    }
}

impl From<SlotId> for Entry {
    fn from(slot: SlotId) -> Entry {
        Entry::Ref(slot)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Field {
    Code(Code),
    Codes(Vec<Code>),
    Register(Register),
    Tuple(TupleType),
    Bool(bool),
    U32(u32),
    Byte(u8),
    Handler(Entry),
    Array(SlotId),
}

/// A node's tag plus its payload fields, in the order the reader consumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    tag: u8,
    fields: Vec<Field>,
}

impl NodeSpec {
    pub fn new(tag: impl Into<u8>) -> NodeSpec {
        NodeSpec { tag: tag.into(), fields: Vec::new() }
    }

    pub fn code(mut self, code: Code) -> Self {
        self.fields.push(Field::Code(code));
        self
    }

    /// Two consecutive codes; only the first is written.
    pub fn code2(mut self, c0: Code, c1: Code) -> Self {
        self.fields.push(Field::Codes(vec![c0, c1]));
        self
    }

    /// Three consecutive codes; only the first is written.
    pub fn code3(mut self, c0: Code, c1: Code, c2: Code) -> Self {
        self.fields.push(Field::Codes(vec![c0, c1, c2]));
        self
    }

    pub fn reg(mut self, register: Register) -> Self {
        self.fields.push(Field::Register(register));
        self
    }

    pub fn tuple(mut self, tuple_type: TupleType) -> Self {
        self.fields.push(Field::Tuple(tuple_type));
        self
    }

    pub fn flag(mut self, value: bool) -> Self {
        self.fields.push(Field::Bool(value));
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.fields.push(Field::U32(value));
        self
    }

    pub fn byte(mut self, value: u8) -> Self {
        self.fields.push(Field::Byte(value));
        self
    }

    pub fn handler(mut self, entry: impl Into<Entry>) -> Self {
        self.fields.push(Field::Handler(entry.into()));
        self
    }

    pub fn handlers<E: Into<Entry>>(mut self, entries: impl IntoIterator<Item = E>) -> Self {
        self.fields.extend(entries.into_iter().map(|e| Field::Handler(e.into())));
        self
    }

    pub fn array(mut self, slot: SlotId) -> Self {
        self.fields.push(Field::Array(slot));
        self
    }
}

/// Writes one family's records. Slots are numbered in write order, so an entry can only
/// reference a record written before it.
#[derive(Debug)]
pub struct TableWriter {
    family: TableFamily,
    tags: FamilyTags,
    out: Vec<u8>,
    /// `true` for array records.
    slots: Vec<bool>,
}

impl TableWriter {
    pub fn new(family: TableFamily) -> Self {
        TableWriter { family, tags: family.tags(), out: Vec::new(), slots: Vec::new() }
    }

    pub fn family(&self) -> TableFamily {
        self.family
    }

    /// Appends a single-handler record.
    pub fn handler(&mut self, entry: impl Into<Entry>) -> Result<SlotId, TableError> {
        let slot = self.next_slot()?;
        self.out.push(RECORD_HANDLER);
        self.write_scalar(&entry.into())?;
        self.slots.push(false);
        Ok(slot)
    }

    /// Appends an array record. Runs of equal entries are written once as a repeat, so
    /// every position of a run shares one node.
    pub fn array(&mut self, entries: &[Entry]) -> Result<SlotId, TableError> {
        let slot = self.next_slot()?;
        self.out.push(RECORD_ARRAY);
        let count = entries.iter().map(entry_width).sum::<u32>();
        write_u32(&mut self.out, count);

        let mut i = 0;
        while i < entries.len() {
            let entry = &entries[i];
            let run = match entry {
                Entry::Dup(..) | Entry::Invalid2 => 1,
                _ => entries[i..].iter().take_while(|e| *e == entry).count(),
            };
            match (entry, run) {
                (_, 1) => self.write_entry(entry)?,
                (Entry::Invalid, 2) => self.out.push(self.tags.invalid2),
                _ => {
                    self.out.push(self.tags.dup);
                    write_u32(&mut self.out, run as u32);
                    self.write_scalar(entry)?;
                }
            }
            i += run;
        }
        self.slots.push(true);
        Ok(slot)
    }

    pub fn finish(self) -> Vec<u8> {
        self.out
    }

    fn next_slot(&self) -> Result<SlotId, TableError> {
        u8::try_from(self.slots.len()).map(SlotId).map_err(|_| TableError::TooManySlots)
    }

    fn write_scalar(&mut self, entry: &Entry) -> Result<(), TableError> {
        match entry {
            Entry::Dup(..) | Entry::Invalid2 => Err(TableError::DupInScalarContext),
            _ => self.write_entry(entry),
        }
    }

    fn write_entry(&mut self, entry: &Entry) -> Result<(), TableError> {
        match entry {
            Entry::Node(spec) => self.write_node(spec),
            Entry::Ref(slot) => {
                self.check_slot(*slot, false)?;
                self.out.push(self.tags.handler_reference);
                self.out.push(slot.0);
                Ok(())
            }
            Entry::Invalid => {
                self.out.push(self.tags.invalid);
                Ok(())
            }
            Entry::InvalidNoModrm => {
                let tag = self.tags.invalid_no_modrm.ok_or(TableError::UnsupportedEntry {
                    family: self.family,
                    entry: "Invalid_NoModRM",
                })?;
                self.out.push(tag);
                Ok(())
            }
            Entry::Null => {
                let tag = self.tags.null.ok_or(TableError::UnsupportedEntry { family: self.family, entry: "Null" })?;
                self.out.push(tag);
                Ok(())
            }
            Entry::Dup(count, inner) => {
                self.out.push(self.tags.dup);
                write_u32(&mut self.out, *count);
                self.write_scalar(inner)
            }
            Entry::Invalid2 => {
                self.out.push(self.tags.invalid2);
                Ok(())
            }
        }
    }

    fn write_node(&mut self, spec: &NodeSpec) -> Result<(), TableError> {
        self.out.push(spec.tag);
        for field in &spec.fields {
            match field {
                Field::Code(code) => write_u32(&mut self.out, *code as u32),
                Field::Codes(codes) => {
                    let base = codes[0] as u32;
                    if codes.iter().enumerate().any(|(n, code)| *code as u32 != base + n as u32) {
                        return Err(TableError::CodesNotAdjacent { base });
                    }
                    write_u32(&mut self.out, base);
                }
                Field::Register(register) => self.out.push(*register as u8),
                Field::Tuple(tuple_type) => self.out.push(*tuple_type as u8),
                Field::Bool(value) => self.out.push(u8::from(*value)),
                Field::U32(value) => write_u32(&mut self.out, *value),
                Field::Byte(value) => self.out.push(*value),
                Field::Handler(entry) => self.write_scalar(entry)?,
                Field::Array(slot) => {
                    self.check_slot(*slot, true)?;
                    self.out.push(self.tags.array_reference);
                    self.out.push(slot.0);
                }
            }
        }
        Ok(())
    }

    fn check_slot(&self, slot: SlotId, want_array: bool) -> Result<(), TableError> {
        let is_array = *self
            .slots
            .get(slot.index())
            .ok_or(TableError::BadSlot { slot: slot.0 as u32, available: self.slots.len() })?;
        if is_array != want_array {
            let name = |array: bool| if array { "array" } else { "handler" };
            return Err(TableError::SlotKindMismatch {
                slot: slot.0 as u32,
                expected: name(want_array),
                found: name(is_array),
            });
        }
        Ok(())
    }
}

/// Number of array positions an entry fills.
fn entry_width(entry: &Entry) -> u32 {
    match entry {
        Entry::Dup(n, _) => *n,
        Entry::Invalid2 => 2,
        _ => 1,
    }
}

fn write_u32(out: &mut Vec<u8>, mut value: u32) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tables::{LegacyTag, VexTag};

    #[test]
    fn compressed_integer_encoding() {
        let mut out = Vec::new();
        write_u32(&mut out, 0x7F);
        write_u32(&mut out, 0x80);
        write_u32(&mut out, u32::MAX);
        assert_eq!(out, vec![0x7F, 0x80, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn runs_become_repeats() {
        let mut w = TableWriter::new(TableFamily::Vex);
        w.array(&[Entry::Invalid, Entry::Invalid, Entry::Null, Entry::Null, Entry::Null]).unwrap();
        let tags = TableFamily::Vex.tags();
        assert_eq!(
            w.finish(),
            vec![RECORD_ARRAY, 5, u8::from(VexTag::Invalid2), tags.dup, 3, u8::from(VexTag::Null)]
        );
    }

    #[test]
    fn split_codes_are_rejected() {
        let mut w = TableWriter::new(TableFamily::Legacy);
        let spec = NodeSpec::new(LegacyTag::Ev).code3(Code::Add_rm16_r16, Code::Add_rm32_r32, Code::Hlt).u32(0);
        assert_eq!(w.handler(spec), Err(TableError::CodesNotAdjacent { base: Code::Add_rm16_r16 as u32 }));
    }

    #[test]
    fn evex_has_no_null() {
        let mut w = TableWriter::new(TableFamily::Evex);
        assert_eq!(
            w.handler(Entry::Null),
            Err(TableError::UnsupportedEntry { family: TableFamily::Evex, entry: "Null" })
        );
    }

    #[test]
    fn references_are_kind_checked() {
        let mut w = TableWriter::new(TableFamily::Legacy);
        let group = w.array(&vec![Entry::Invalid; 8]).unwrap();
        assert_eq!(
            w.handler(Entry::Ref(group)),
            Err(TableError::SlotKindMismatch { slot: 0, expected: "handler", found: "array" })
        );
        assert_eq!(
            w.handler(Entry::Ref(SlotId(7))),
            Err(TableError::BadSlot { slot: 7, available: 1 })
        );
    }

    #[test]
    fn repeats_are_not_scalars() {
        let mut w = TableWriter::new(TableFamily::Legacy);
        assert_eq!(w.handler(Entry::Invalid2), Err(TableError::DupInScalarContext));
    }
}
