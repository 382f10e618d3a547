//! Per-instruction decode state and the primitive readers decode nodes call back into.

mod memory;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::handlers::{HandlerFlags, NodeId};
use crate::instruction::{Instruction, PrefixFlags};
use crate::register::Register;
use crate::tables::Tables;

/// x86 instructions are never longer than this; reads past it fail.
pub const MAX_INSTRUCTION_LENGTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bitness {
    Bits16,
    Bits32,
    Bits64,
}

impl Bitness {
    pub fn from_bits(bits: u32) -> Option<Bitness> {
        match bits {
            16 => Some(Bitness::Bits16),
            32 => Some(Bitness::Bits32),
            64 => Some(Bitness::Bits64),
            _ => None,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Bitness::Bits16 => 16,
            Bitness::Bits32 => 32,
            Bitness::Bits64 => 64,
        }
    }
}

/// Operand- or address-size class. Used as the index into a `Code3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum OpSize {
    #[default]
    Size16 = 0,
    Size32 = 1,
    Size64 = 2,
}

/// Classification of the last 66/F3/F2 prefix seen, or the VEX/EVEX/XOP `pp` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MandatoryPrefix {
    #[default]
    None = 0,
    P66 = 1,
    PF3 = 2,
    PF2 = 3,
}

impl MandatoryPrefix {
    pub(crate) fn from_pp(pp: u32) -> MandatoryPrefix {
        match pp & 3 {
            0 => MandatoryPrefix::None,
            1 => MandatoryPrefix::P66,
            2 => MandatoryPrefix::PF3,
            _ => MandatoryPrefix::PF2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) enum EncodingKind {
    #[default]
    Legacy,
    Vex,
    Xop,
    Evex,
    D3now,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct DecoderOptions: u32 {
        /// Lenient mode: skip the reserved-bit and illegal-combination checks.
        const NO_INVALID_CHECK = 1 << 0;
        /// AMD near-branch rules: 66h is honoured on 64-bit near branches.
        const AMD = 1 << 1;
        /// Decode 0F 18-1F reserved-nop space as `reservednop` even when a real opcode exists.
        const FORCE_RESERVED_NOP = 1 << 2;
        /// MPX (BND registers) instead of reserved nops at 0F 1A/1B.
        const MPX = 1 << 3;
        /// `umov` at 0F 10-13 (386/486 only).
        const UMOV = 1 << 4;
        /// Decode F3 90 as `nop` instead of `pause`.
        const NO_PAUSE = 1 << 5;
        /// Decode F3 0F 09 as `wbinvd` instead of `wbnoinvd`.
        const NO_WBNOINVD = 1 << 6;
        /// `jmpe` (IA-64 escape) at 0F 00 /6 and 0F B8.
        const JMPE = 1 << 7;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub(crate) struct StateFlags: u32 {
        const HAS_REX = 1 << 0;
        const W = 1 << 1;
        const Z = 1 << 2;
        const B = 1 << 3;
        const IS_INVALID = 1 << 4;
        const LOCK = 1 << 5;
        const ALLOW_LOCK = 1 << 6;
        const NO_MORE_BYTES = 1 << 7;
        const HAS_66 = 1 << 8;
        const IP_REL64 = 1 << 9;
        const IP_REL32 = 1 << 10;
    }
}

/// Mutable state for the instruction currently being decoded.
#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    pub(crate) modrm: u32,
    pub(crate) mod_: u32,
    pub(crate) reg: u32,
    pub(crate) rm: u32,
    /// REX.R / VEX.R / EVEX.R, pre-shifted to 8.
    pub(crate) extra_register_base: u32,
    /// REX.X, pre-shifted to 8.
    pub(crate) extra_index_register_base: u32,
    /// REX.B, pre-shifted to 8.
    pub(crate) extra_base_register_base: u32,
    /// EVEX.V', extends a VSIB index to 32 registers.
    pub(crate) extra_index_register_base_vsib: u32,
    /// EVEX.R', pre-shifted to 16.
    pub(crate) extra_register_base_evex: u32,
    /// EVEX.X reused for register r/m operands, pre-shifted to 16.
    pub(crate) extra_base_register_base_evex: u32,
    pub(crate) vvvv: u32,
    /// Full, unmasked vvvv; zero when the encoding reserves the field.
    pub(crate) vvvv_invalid_check: u32,
    pub(crate) aaa: u32,
    pub(crate) vector_length: u32,
    pub(crate) mandatory_prefix: MandatoryPrefix,
    pub(crate) operand_size: OpSize,
    pub(crate) address_size: OpSize,
    pub(crate) segment_prio: u8,
    pub(crate) flags: StateFlags,
    pub(crate) encoding: EncodingKind,
}

/// Decodes x86 instructions from a byte slice using a prebuilt decode forest.
pub struct Decoder<'a> {
    tables: &'a Tables,
    data: &'a [u8],
    pos: usize,
    instr_start: usize,
    max_pos: usize,
    ip: u64,
    bitness: Bitness,
    options: DecoderOptions,
    /// `u32::MAX` in strict mode, `0` with `NO_INVALID_CHECK`.
    pub(crate) invalid_check_mask: u32,
    pub(crate) is64b_mode: bool,
    default_operand_size: OpSize,
    default_inverted_operand_size: OpSize,
    default_address_size: OpSize,
    default_inverted_address_size: OpSize,
    pub(crate) state: State,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over the built-in tables.
    pub fn new(bitness: Bitness, data: &'a [u8], ip: u64, options: DecoderOptions) -> Decoder<'a> {
        Decoder::with_tables(Tables::builtin(), bitness, data, ip, options)
    }

    pub fn with_tables(
        tables: &'a Tables,
        bitness: Bitness,
        data: &'a [u8],
        ip: u64,
        options: DecoderOptions,
    ) -> Decoder<'a> {
        let (default_operand_size, default_inverted_operand_size, default_address_size, default_inverted_address_size) =
            match bitness {
                Bitness::Bits16 => (OpSize::Size16, OpSize::Size32, OpSize::Size16, OpSize::Size32),
                Bitness::Bits32 => (OpSize::Size32, OpSize::Size16, OpSize::Size32, OpSize::Size16),
                Bitness::Bits64 => (OpSize::Size32, OpSize::Size16, OpSize::Size64, OpSize::Size32),
            };
        let invalid_check_mask = if options.contains(DecoderOptions::NO_INVALID_CHECK) { 0 } else { u32::MAX };
        Decoder {
            tables,
            data,
            pos: 0,
            instr_start: 0,
            max_pos: 0,
            ip,
            bitness,
            options,
            invalid_check_mask,
            is64b_mode: bitness == Bitness::Bits64,
            default_operand_size,
            default_inverted_operand_size,
            default_address_size,
            default_inverted_address_size,
            state: State::default(),
        }
    }

    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    pub fn can_decode(&self) -> bool {
        self.pos < self.data.len()
    }

    pub fn decode(&mut self) -> Instruction {
        let mut instruction = Instruction::default();
        self.decode_out(&mut instruction);
        instruction
    }

    /// Decodes the next instruction into `instruction`. Malformed input never fails:
    /// the result is `Code::Invalid` with the length the encoding consumed.
    pub fn decode_out(&mut self, instruction: &mut Instruction) {
        *instruction = Instruction::default();
        self.state = State {
            operand_size: self.default_operand_size,
            address_size: self.default_address_size,
            ..State::default()
        };
        self.instr_start = self.pos;
        self.max_pos = self.data.len().min(self.pos + MAX_INSTRUCTION_LENGTH);

        let b = self.read_u8();
        let tables = self.tables;
        self.decode_table(&tables.legacy.map0, b, instruction);

        let flags = self.state.flags;
        if flags.contains(StateFlags::LOCK) && !flags.contains(StateFlags::ALLOW_LOCK) {
            self.mark_invalid_if_strict(true);
        }
        if flags.contains(StateFlags::NO_MORE_BYTES) {
            self.pos = self.max_pos;
        }
        let len = self.pos - self.instr_start;
        let ip = self.ip;
        let next_ip = ip.wrapping_add(len as u64);
        self.ip = next_ip;

        if self.state.flags.intersects(StateFlags::IS_INVALID | StateFlags::NO_MORE_BYTES) {
            tracing::trace!(ip, len, "invalid instruction");
            *instruction = Instruction { code: Code::Invalid, len: len as u8, ip, ..Instruction::default() };
            return;
        }

        instruction.len = len as u8;
        instruction.ip = ip;
        if flags.contains(StateFlags::IP_REL64) {
            instruction.memory.displacement = instruction.memory.displacement.wrapping_add(next_ip);
        } else if flags.contains(StateFlags::IP_REL32) {
            instruction.memory.displacement =
                (instruction.memory.displacement as u32).wrapping_add(next_ip as u32) as u64;
        }
    }

    // ---- dispatch -------------------------------------------------------------------

    pub(crate) fn decode_node(&mut self, id: NodeId, instruction: &mut Instruction) {
        let tables = self.tables;
        tables.forest.get(id).decode(self, instruction);
    }

    /// Delegates to `id`. ModRM is read here only when the child needs it and the parent
    /// has not already consumed it, so it is read exactly once per instruction.
    pub(crate) fn decode_child(&mut self, parent_has_modrm: bool, id: NodeId, instruction: &mut Instruction) {
        let tables = self.tables;
        let node = tables.forest.get(id);
        if !parent_has_modrm && node.has_modrm() {
            self.read_modrm();
        }
        node.decode(self, instruction);
    }

    pub(crate) fn decode_table(&mut self, table: &[NodeId], opcode: u32, instruction: &mut Instruction) {
        self.decode_child(false, table[opcode as usize], instruction);
    }

    /// Used by prefix nodes: reads the next byte and dispatches it through the one-byte map.
    pub(crate) fn decode_next_map0(&mut self, instruction: &mut Instruction) {
        let b = self.read_u8();
        let tables = self.tables;
        self.decode_table(&tables.legacy.map0, b, instruction);
    }

    // ---- primitive readers ----------------------------------------------------------

    pub(crate) fn read_u8(&mut self) -> u32 {
        if self.pos < self.max_pos {
            let b = self.data[self.pos];
            self.pos += 1;
            b as u32
        } else {
            self.state.flags |= StateFlags::NO_MORE_BYTES;
            0
        }
    }

    pub(crate) fn read_u16(&mut self) -> u32 {
        let lo = self.read_u8();
        let hi = self.read_u8();
        lo | (hi << 8)
    }

    pub(crate) fn read_u32(&mut self) -> u32 {
        let lo = self.read_u16();
        let hi = self.read_u16();
        lo | (hi << 16)
    }

    pub(crate) fn read_u64(&mut self) -> u64 {
        let lo = self.read_u32() as u64;
        let hi = self.read_u32() as u64;
        lo | (hi << 32)
    }

    pub(crate) fn read_modrm(&mut self) {
        let m = self.read_u8();
        self.state.modrm = m;
        self.state.mod_ = m >> 6;
        self.state.reg = (m >> 3) & 7;
        self.state.rm = m & 7;
    }

    /// IP of the byte following everything read so far.
    pub(crate) fn current_ip(&self) -> u64 {
        self.ip.wrapping_add((self.pos - self.instr_start) as u64)
    }

    pub(crate) fn has_option(&self, option: DecoderOptions) -> bool {
        self.options.contains(option)
    }

    // ---- validity -------------------------------------------------------------------

    pub(crate) fn mark_invalid(&mut self) {
        self.state.flags |= StateFlags::IS_INVALID;
    }

    /// Marks the instruction invalid unless the decoder runs in lenient mode.
    pub(crate) fn mark_invalid_if_strict(&mut self, bad: bool) {
        if bad && self.invalid_check_mask != 0 {
            self.mark_invalid();
        }
    }

    pub(crate) fn has_flag(&self, flag: StateFlags) -> bool {
        self.state.flags.contains(flag)
    }

    pub(crate) fn is_rex_w(&self) -> bool {
        self.state.flags.contains(StateFlags::W)
    }

    // ---- prefix bookkeeping ---------------------------------------------------------

    pub(crate) fn clear_mandatory_prefix(&mut self, instruction: &mut Instruction) {
        match self.state.mandatory_prefix {
            MandatoryPrefix::P66 => instruction.prefixes.remove(PrefixFlags::OPERAND_SIZE),
            MandatoryPrefix::PF3 => instruction.prefixes.remove(PrefixFlags::REP),
            MandatoryPrefix::PF2 => instruction.prefixes.remove(PrefixFlags::REPNE),
            MandatoryPrefix::None => {}
        }
    }

    pub(crate) fn clear_mandatory_prefix_f3(&mut self, instruction: &mut Instruction) {
        instruction.prefixes.remove(PrefixFlags::REP);
    }

    pub(crate) fn clear_mandatory_prefix_f2(&mut self, instruction: &mut Instruction) {
        instruction.prefixes.remove(PrefixFlags::REPNE);
    }

    /// Drops REX state when a legacy prefix follows it; REX only counts directly before the opcode.
    pub(crate) fn reset_rex_prefix_state(&mut self) {
        self.state.flags.remove(StateFlags::HAS_REX | StateFlags::W);
        self.state.operand_size = if self.state.flags.contains(StateFlags::HAS_66) {
            self.default_inverted_operand_size
        } else {
            self.default_operand_size
        };
        self.state.extra_register_base = 0;
        self.state.extra_index_register_base = 0;
        self.state.extra_base_register_base = 0;
    }

    pub(crate) fn apply_operand_size_prefix(&mut self, instruction: &mut Instruction) {
        self.state.flags |= StateFlags::HAS_66;
        self.state.operand_size = self.default_inverted_operand_size;
        if self.state.mandatory_prefix == MandatoryPrefix::None {
            self.state.mandatory_prefix = MandatoryPrefix::P66;
        }
        instruction.prefixes |= PrefixFlags::OPERAND_SIZE;
    }

    pub(crate) fn apply_address_size_prefix(&mut self, instruction: &mut Instruction) {
        self.state.address_size = self.default_inverted_address_size;
        instruction.prefixes |= PrefixFlags::ADDRESS_SIZE;
    }

    pub(crate) fn apply_rex(&mut self, rex: u32) {
        self.state.flags |= StateFlags::HAS_REX;
        if rex & 8 != 0 {
            self.state.flags |= StateFlags::W;
            self.state.operand_size = OpSize::Size64;
        } else {
            self.state.flags.remove(StateFlags::W);
            self.state.operand_size = if self.state.flags.contains(StateFlags::HAS_66) {
                OpSize::Size16
            } else {
                OpSize::Size32
            };
        }
        self.state.extra_register_base = (rex & 4) << 1;
        self.state.extra_index_register_base = (rex & 2) << 2;
        self.state.extra_base_register_base = (rex & 1) << 3;
    }

    pub(crate) fn set_segment_prefix(&mut self, instruction: &mut Instruction, segment: Register, prio: u8) {
        if !self.is64b_mode || prio > 0 || self.state.segment_prio == 0 {
            instruction.segment_prefix = segment;
        }
        self.state.segment_prio = self.state.segment_prio.max(prio);
    }

    /// Turns a REPNE/REP prefix on a lockable memory instruction into XACQUIRE/XRELEASE.
    pub(crate) fn set_xacquire_xrelease(&mut self, instruction: &mut Instruction, flags: HandlerFlags) {
        if instruction.prefixes.contains(PrefixFlags::LOCK)
            || flags.contains(HandlerFlags::XACQUIRE_XRELEASE_NO_LOCK)
        {
            match self.state.mandatory_prefix {
                MandatoryPrefix::PF2 if flags.contains(HandlerFlags::XACQUIRE) => {
                    self.clear_mandatory_prefix_f2(instruction);
                    instruction.prefixes |= PrefixFlags::XACQUIRE;
                }
                MandatoryPrefix::PF3 if flags.contains(HandlerFlags::XRELEASE) => {
                    self.clear_mandatory_prefix_f3(instruction);
                    instruction.prefixes |= PrefixFlags::XRELEASE;
                }
                _ => {}
            }
        }
    }

    /// Shared tail of every lockable read-modify-write node.
    pub(crate) fn apply_handler_flags(&mut self, instruction: &mut Instruction, flags: HandlerFlags) {
        if self.state.mod_ == 3 || flags.is_empty() {
            return;
        }
        if flags.intersects(HandlerFlags::XACQUIRE | HandlerFlags::XRELEASE) {
            self.set_xacquire_xrelease(instruction, flags);
        }
        if flags.contains(HandlerFlags::LOCK) {
            self.state.flags |= StateFlags::ALLOW_LOCK;
        }
    }

    // ---- VEX / XOP / EVEX payloads --------------------------------------------------

    fn check_vex_prefix_legality(&mut self) {
        let bad = self.state.flags.contains(StateFlags::HAS_REX)
            || self.state.mandatory_prefix != MandatoryPrefix::None;
        self.mark_invalid_if_strict(bad);
    }

    /// Two-byte VEX (C5). The payload byte was read as ModRM by the escape node.
    pub(crate) fn vex2(&mut self, instruction: &mut Instruction) {
        self.check_vex_prefix_legality();
        self.state.flags.remove(StateFlags::W);
        self.state.encoding = EncodingKind::Vex;
        let b = self.state.modrm;
        if self.is64b_mode {
            self.state.extra_register_base = (!b >> 4) & 8;
        }
        self.state.vector_length = (b >> 2) & 1;
        self.state.mandatory_prefix = MandatoryPrefix::from_pp(b);
        self.state.vvvv_invalid_check = (!b >> 3) & 0x0F;
        self.state.vvvv = if self.is64b_mode { self.state.vvvv_invalid_check } else { self.state.vvvv_invalid_check & 7 };

        let opcode = self.read_u8();
        let tables = self.tables;
        self.decode_table(&tables.vex[0], opcode, instruction);
    }

    /// Three-byte VEX (C4).
    pub(crate) fn vex3(&mut self, instruction: &mut Instruction) {
        self.check_vex_prefix_legality();
        self.state.encoding = EncodingKind::Vex;
        let b1 = self.state.modrm;
        let b2 = self.read_u8();
        self.apply_vex3_payload(b1, b2);

        let map = match b1 & 0x1F {
            1 => 0,
            2 => 1,
            3 => 2,
            _ => {
                self.mark_invalid();
                return;
            }
        };
        let opcode = self.read_u8();
        let tables = self.tables;
        self.decode_table(&tables.vex[map], opcode, instruction);
    }

    /// XOP (8F with mmmmm >= 8).
    pub(crate) fn xop(&mut self, instruction: &mut Instruction) {
        self.check_vex_prefix_legality();
        self.state.encoding = EncodingKind::Xop;
        let b1 = self.state.modrm;
        let b2 = self.read_u8();
        self.apply_vex3_payload(b1, b2);

        let map = match b1 & 0x1F {
            8 => 0,
            9 => 1,
            10 => 2,
            _ => {
                self.mark_invalid();
                return;
            }
        };
        let opcode = self.read_u8();
        let tables = self.tables;
        self.decode_table(&tables.xop[map], opcode, instruction);
    }

    fn apply_vex3_payload(&mut self, b1: u32, b2: u32) {
        if b2 & 0x80 != 0 {
            self.state.flags |= StateFlags::W;
        } else {
            self.state.flags.remove(StateFlags::W);
        }
        self.state.vector_length = (b2 >> 2) & 1;
        self.state.mandatory_prefix = MandatoryPrefix::from_pp(b2);
        self.state.vvvv_invalid_check = (!b2 >> 3) & 0x0F;
        if self.is64b_mode {
            self.state.vvvv = self.state.vvvv_invalid_check;
            self.state.extra_register_base = (!b1 >> 4) & 8;
            self.state.extra_index_register_base = (!b1 >> 3) & 8;
            self.state.extra_base_register_base = (!b1 >> 2) & 8;
        } else {
            self.state.vvvv = self.state.vvvv_invalid_check & 7;
        }
    }

    /// EVEX (62). P0 was read as ModRM by the escape node; P1, P2, the opcode and the
    /// real ModRM follow.
    pub(crate) fn evex(&mut self, instruction: &mut Instruction) {
        self.check_vex_prefix_legality();
        self.state.encoding = EncodingKind::Evex;
        let p0 = self.state.modrm;
        let p1 = self.read_u8();
        let p2 = self.read_u8();

        if p1 & 4 == 0 {
            // MVEX (Knights Corner) is not supported.
            self.mark_invalid();
            return;
        }
        self.mark_invalid_if_strict(p0 & 8 != 0);

        if p1 & 0x80 != 0 {
            self.state.flags |= StateFlags::W;
        } else {
            self.state.flags.remove(StateFlags::W);
        }
        self.state.mandatory_prefix = MandatoryPrefix::from_pp(p1);
        self.state.vector_length = (p2 >> 5) & 3;
        self.state.aaa = p2 & 7;
        if p2 & 0x80 != 0 {
            self.state.flags |= StateFlags::Z;
            self.mark_invalid_if_strict(self.state.aaa == 0);
        }
        if p2 & 0x10 != 0 {
            self.state.flags |= StateFlags::B;
        }
        instruction.op_mask = if self.state.aaa == 0 { Register::None } else { Register::K0.offset(self.state.aaa) };
        instruction.zeroing_masking = self.state.flags.contains(StateFlags::Z);

        let vvvv = (!p1 >> 3) & 0x0F;
        if self.is64b_mode {
            let v_prime = (!p2 & 8) << 1;
            self.state.vvvv = vvvv + v_prime;
            self.state.vvvv_invalid_check = self.state.vvvv;
            self.state.extra_register_base = (!p0 >> 4) & 8;
            self.state.extra_index_register_base = (!p0 >> 3) & 8;
            self.state.extra_base_register_base = (!p0 >> 2) & 8;
            self.state.extra_register_base_evex = !p0 & 0x10;
            self.state.extra_base_register_base_evex = (!p0 >> 2) & 0x10;
            self.state.extra_index_register_base_vsib = v_prime;
        } else {
            self.state.vvvv = vvvv & 7;
            self.state.vvvv_invalid_check = vvvv | ((!p2 & 8) << 1);
            self.mark_invalid_if_strict(p2 & 8 == 0);
        }

        let map = match p0 & 7 {
            1 => 0,
            2 => 1,
            3 => 2,
            _ => {
                self.mark_invalid();
                return;
            }
        };
        let opcode = self.read_u8();
        self.read_modrm();
        let tables = self.tables;
        let id = tables.evex[map][opcode as usize];
        self.decode_node(id, instruction);
    }

    pub(crate) fn set_d3now_encoding(&mut self) {
        self.state.encoding = EncodingKind::D3now;
    }
}

impl Iterator for Decoder<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        if self.can_decode() {
            Some(self.decode())
        } else {
            None
        }
    }
}
