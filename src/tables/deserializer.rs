use std::marker::PhantomData;

use super::{RECORD_ARRAY, RECORD_HANDLER, ROOT_TABLE_LEN};
use crate::code::Code;
use crate::error::{TableError, TableFamily};
use crate::handlers::{Forest, Node, NodeId};
use crate::register::Register;
use crate::tuple_type::TupleType;

/// A blob never holds more records than a one-byte back-reference can name.
const MAX_SLOTS: usize = 256;

/// Result of reading one handler entry. `Repeated` only appears for the `Dup` and
/// `Invalid2` forms and is only legal while filling an array record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constructed {
    Node(NodeId),
    Repeated(NodeId, u32),
}

/// Family-specific half of deserialization: turns a tag into a node, reading the tag's
/// payload through the deserializer's typed primitives.
pub trait HandlerReader: Sized {
    const FAMILY: TableFamily;

    fn construct(de: &mut TableDeserializer<'_, Self>, tag: u8) -> Result<Constructed, TableError>;
}

#[derive(Debug, Clone)]
enum Slot {
    Node(NodeId),
    Array(Vec<NodeId>),
}

impl Slot {
    fn kind_name(&self) -> &'static str {
        match self {
            Slot::Node(_) => "handler",
            Slot::Array(_) => "array",
        }
    }
}

/// Streams one table blob into a [`Forest`].
///
/// The blob is a sequence of records, each either a single handler or an array of
/// handlers. Every record becomes a numbered slot that later entries may back-reference,
/// so shared subtrees are built once and their ids reused.
pub struct TableDeserializer<'a, R> {
    data: &'a [u8],
    pos: usize,
    forest: &'a mut Forest,
    slots: Vec<Slot>,
    reader: PhantomData<R>,
}

impl<'a, R: HandlerReader> TableDeserializer<'a, R> {
    pub fn new(data: &'a [u8], forest: &'a mut Forest) -> Self {
        TableDeserializer { data, pos: 0, forest, slots: Vec::new(), reader: PhantomData }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Reads every record and returns the trailing `root_count` slots, each of which must
    /// be a full 256-entry table.
    pub fn deserialize(mut self, root_count: usize) -> Result<Vec<Vec<NodeId>>, TableError> {
        let start_nodes = self.forest.len();
        while self.pos < self.data.len() {
            if self.slots.len() == MAX_SLOTS {
                return Err(TableError::TooManySlots);
            }
            let offset = self.pos;
            let kind = self.read_u8()?;
            let slot = match kind {
                RECORD_HANDLER => Slot::Node(self.read_handler()?),
                RECORD_ARRAY => Slot::Array(self.read_array_record()?),
                _ => return Err(TableError::UnknownRecordKind { kind, offset }),
            };
            tracing::trace!(family = %R::FAMILY, slot = self.slots.len(), offset, kind = slot.kind_name(), "table record");
            self.slots.push(slot);
        }

        if self.slots.len() < root_count {
            return Err(TableError::MissingRoots { expected: root_count, found: self.slots.len() });
        }
        let first_root = self.slots.len() - root_count;
        let mut roots = Vec::with_capacity(root_count);
        for (i, slot) in self.slots.drain(first_root..).enumerate() {
            match slot {
                Slot::Array(entries) if entries.len() == ROOT_TABLE_LEN => roots.push(entries),
                Slot::Array(entries) => {
                    return Err(TableError::ArrayLength { expected: ROOT_TABLE_LEN, found: entries.len() })
                }
                Slot::Node(_) => {
                    return Err(TableError::SlotKindMismatch {
                        slot: (first_root + i) as u32,
                        expected: "array",
                        found: "handler",
                    })
                }
            }
        }

        tracing::debug!(
            family = %R::FAMILY,
            bytes = self.data.len(),
            nodes = self.forest.len() - start_nodes,
            "deserialized table blob"
        );
        Ok(roots)
    }

    fn read_array_record(&mut self) -> Result<Vec<NodeId>, TableError> {
        let declared = self.read_u32()?;
        let mut entries = Vec::with_capacity((declared as usize).min(ROOT_TABLE_LEN));
        while (entries.len() as u32) < declared {
            match self.read_entry()? {
                Constructed::Node(id) => entries.push(id),
                Constructed::Repeated(id, count) => {
                    let filled = (entries.len() as u32).saturating_add(count);
                    if filled > declared {
                        return Err(TableError::ArrayOverflow { declared, filled });
                    }
                    entries.extend(std::iter::repeat(id).take(count as usize));
                }
            }
        }
        Ok(entries)
    }

    /// Reads one tagged entry, which may be a repeat run.
    pub fn read_entry(&mut self) -> Result<Constructed, TableError> {
        let tag = self.read_u8()?;
        R::construct(self, tag)
    }

    /// Reads one tagged entry that must denote exactly one node.
    pub fn read_handler(&mut self) -> Result<NodeId, TableError> {
        match self.read_entry()? {
            Constructed::Node(id) => Ok(id),
            Constructed::Repeated(..) => Err(TableError::DupInScalarContext),
        }
    }

    pub fn read_handlers<const N: usize>(&mut self) -> Result<[NodeId; N], TableError> {
        let mut handlers = [NodeId::INVALID; N];
        for handler in &mut handlers {
            *handler = self.read_handler()?;
        }
        Ok(handlers)
    }

    /// Reads an array back-reference and checks it holds exactly `N` entries.
    pub fn read_array<const N: usize>(&mut self) -> Result<[NodeId; N], TableError> {
        let entries = self.read_array_ref()?;
        entries.try_into().map_err(|entries: Vec<NodeId>| TableError::ArrayLength { expected: N, found: entries.len() })
    }

    pub fn read_array_boxed<const N: usize>(&mut self) -> Result<Box<[NodeId; N]>, TableError> {
        let entries = self.read_array_ref()?;
        entries
            .into_boxed_slice()
            .try_into()
            .map_err(|entries: Box<[NodeId]>| TableError::ArrayLength { expected: N, found: entries.len() })
    }

    fn read_array_ref(&mut self) -> Result<Vec<NodeId>, TableError> {
        let expected = R::FAMILY.tags().array_reference;
        let found = self.read_u8()?;
        if found != expected {
            return Err(TableError::ArrayKindMismatch { expected, found });
        }
        let slot = self.read_u8()? as u32;
        match self.slot(slot)? {
            Slot::Array(entries) => Ok(entries.clone()),
            other => Err(TableError::SlotKindMismatch { slot, expected: "array", found: other.kind_name() }),
        }
    }

    /// Payload of a handler back-reference tag.
    pub fn read_handler_reference(&mut self) -> Result<NodeId, TableError> {
        let slot = self.read_u8()? as u32;
        match self.slot(slot)? {
            Slot::Node(id) => Ok(*id),
            other => Err(TableError::SlotKindMismatch { slot, expected: "handler", found: other.kind_name() }),
        }
    }

    /// An array back-reference where a handler was expected.
    pub fn misplaced_array_reference(&mut self) -> TableError {
        let slot = self.read_u8().map(u32::from).unwrap_or(u32::MAX);
        TableError::SlotKindMismatch { slot, expected: "handler", found: "array" }
    }

    /// Payload of a `Dup` tag: a count followed by the handler it repeats.
    pub fn read_dup(&mut self) -> Result<Constructed, TableError> {
        let count = self.read_u32()?;
        let id = self.read_handler()?;
        Ok(Constructed::Repeated(id, count))
    }

    fn slot(&self, slot: u32) -> Result<&Slot, TableError> {
        self.slots.get(slot as usize).ok_or(TableError::BadSlot { slot, available: self.slots.len() })
    }

    pub fn push(&mut self, node: impl Into<Node>) -> NodeId {
        self.forest.push(node)
    }

    pub fn unknown_tag(&self, tag: u8) -> TableError {
        TableError::UnknownTag { family: R::FAMILY, tag, offset: self.pos.saturating_sub(1) }
    }

    // ---- typed primitives -----------------------------------------------------------

    pub fn read_u8(&mut self) -> Result<u8, TableError> {
        let b = *self.data.get(self.pos).ok_or(TableError::UnexpectedEof { offset: self.pos })?;
        self.pos += 1;
        Ok(b)
    }

    /// Little-endian base-128 integer, at most five bytes.
    pub fn read_u32(&mut self) -> Result<u32, TableError> {
        let offset = self.pos;
        let mut value = 0u32;
        let mut shift = 0;
        loop {
            let b = self.read_u8()?;
            if shift == 28 && b > 0x0F {
                return Err(TableError::IntegerOverflow { offset });
            }
            value |= ((b & 0x7F) as u32) << shift;
            if b & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
    }

    pub fn read_code(&mut self) -> Result<Code, TableError> {
        let offset = self.pos;
        let value = self.read_u32()?;
        Code::from_u32(value).ok_or(TableError::UnknownCode { value, offset })
    }

    /// A base code followed by its `N - 1` consecutive successors.
    pub fn read_codes<const N: usize>(&mut self) -> Result<[Code; N], TableError> {
        let offset = self.pos;
        let base = self.read_code()?;
        let mut codes = [base; N];
        for (n, code) in codes.iter_mut().enumerate().skip(1) {
            *code = base
                .offset(n as u32)
                .ok_or(TableError::UnknownCode { value: base as u32 + n as u32, offset })?;
        }
        Ok(codes)
    }

    /// Two consecutive codes widened to the 16/32/64 layout; 64-bit operand size reuses
    /// the 32-bit code.
    pub fn read_codes_2_as_3(&mut self) -> Result<[Code; 3], TableError> {
        let [c16, c32] = self.read_codes::<2>()?;
        Ok([c16, c32, c32])
    }

    pub fn read_register(&mut self) -> Result<Register, TableError> {
        let offset = self.pos;
        let value = self.read_u8()?;
        Register::from_u8(value).ok_or(TableError::UnknownRegister { value, offset })
    }

    pub fn read_tuple_type(&mut self) -> Result<TupleType, TableError> {
        let offset = self.pos;
        let value = self.read_u8()?;
        TupleType::from_u8(value).ok_or(TableError::UnknownTupleType { value, offset })
    }

    pub fn read_bool(&mut self) -> Result<bool, TableError> {
        let offset = self.pos;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(TableError::InvalidBool { value, offset }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::LegacyReader;

    fn de(data: &[u8], forest: &mut Forest, f: impl FnOnce(&mut TableDeserializer<'_, LegacyReader>)) {
        let mut de = TableDeserializer::<LegacyReader>::new(data, forest);
        f(&mut de);
    }

    #[test]
    fn compressed_integers() {
        let mut forest = Forest::new();
        de(&[0x00, 0x7F, 0x80, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F], &mut forest, |de| {
            assert_eq!(de.read_u32(), Ok(0));
            assert_eq!(de.read_u32(), Ok(0x7F));
            assert_eq!(de.read_u32(), Ok(0x80));
            assert_eq!(de.read_u32(), Ok(u32::MAX));
            assert_eq!(de.position(), 9);
        });
    }

    #[test]
    fn compressed_integer_overflow() {
        let mut forest = Forest::new();
        de(&[0xFF, 0xFF, 0xFF, 0xFF, 0x10], &mut forest, |de| {
            assert_eq!(de.read_u32(), Err(TableError::IntegerOverflow { offset: 0 }));
        });
        de(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01], &mut forest, |de| {
            assert_eq!(de.read_u32(), Err(TableError::IntegerOverflow { offset: 0 }));
        });
    }

    #[test]
    fn truncated_integer_reports_eof() {
        let mut forest = Forest::new();
        de(&[0x80, 0x80], &mut forest, |de| {
            assert_eq!(de.read_u32(), Err(TableError::UnexpectedEof { offset: 2 }));
        });
    }

    #[test]
    fn bools_and_registers() {
        let mut forest = Forest::new();
        de(&[0, 1, 2], &mut forest, |de| {
            assert_eq!(de.read_bool(), Ok(false));
            assert_eq!(de.read_bool(), Ok(true));
            assert_eq!(de.read_bool(), Err(TableError::InvalidBool { value: 2, offset: 2 }));
        });
        de(&[0xFF], &mut forest, |de| {
            assert_eq!(de.read_register(), Err(TableError::UnknownRegister { value: 0xFF, offset: 0 }));
        });
        de(&[0xFF], &mut forest, |de| {
            assert_eq!(de.read_tuple_type(), Err(TableError::UnknownTupleType { value: 0xFF, offset: 0 }));
        });
    }

    #[test]
    fn code_groups_are_consecutive() {
        let mut forest = Forest::new();
        let base = Code::Add_rm16_r16 as u32;
        let data = [base as u8 | 0x80, (base >> 7) as u8];
        let data = if base < 0x80 { vec![base as u8] } else { data.to_vec() };
        de(&data, &mut forest, |de| {
            assert_eq!(de.read_codes::<3>(), Ok([Code::Add_rm16_r16, Code::Add_rm32_r32, Code::Add_rm64_r64]));
        });
    }
}
