//! Dispatch, escape and prefix nodes shared by every encoding family.

use super::{DecodeNode, LegacyHandlerFlags, MandatoryPrefix4Flags, NodeId};
use crate::code::Code;
use crate::decoder::{Decoder, DecoderOptions, MandatoryPrefix as PrefixKind, StateFlags};
use crate::instruction::{Instruction, OpKind, PrefixFlags};
use crate::register::Register;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalid {
    pub has_modrm: bool,
}

impl DecodeNode for Invalid {
    fn has_modrm(&self) -> bool {
        self.has_modrm
    }

    fn decode(&self, decoder: &mut Decoder<'_>, _instruction: &mut Instruction) {
        decoder.mark_invalid();
    }
}

/// Placeholder in a fine-grained group table. Never dispatched to directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Null;

impl DecodeNode for Null {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, _instruction: &mut Instruction) {
        decoder.mark_invalid();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simple {
    pub code: Code,
}

impl DecodeNode for Simple {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, _decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
    }
}

/// Operand-less instruction whose ModRM byte is part of the opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleModRM {
    pub code: Code,
}

impl DecodeNode for SimpleModRM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, _decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
    }
}

/// Routes on processor mode. The 64-bit child is never touched outside 64-bit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitness {
    pub handler1632: NodeId,
    pub handler64: NodeId,
}

impl DecodeNode for Bitness {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = if decoder.is64b_mode { self.handler64 } else { self.handler1632 };
        decoder.decode_child(false, child, instruction);
    }
}

/// Like [`Bitness`] but the parent has already read ModRM for both children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitnessDontReadModRM {
    pub handler1632: NodeId,
    pub handler64: NodeId,
}

impl DecodeNode for BitnessDontReadModRM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = if decoder.is64b_mode { self.handler64 } else { self.handler1632 };
        decoder.decode_child(true, child, instruction);
    }
}

/// Register form (`mod == 3`) vs memory form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rm {
    pub reg: NodeId,
    pub mem: NodeId,
}

impl DecodeNode for Rm {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = if decoder.state.mod_ == 3 { self.reg } else { self.mem };
        decoder.decode_child(true, child, instruction);
    }
}

/// Picks the first alternative whose decoder option is enabled, else `default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub default: NodeId,
    pub alternatives: Vec<(NodeId, DecoderOptions)>,
}

fn select_option(default: NodeId, alternatives: &[(NodeId, DecoderOptions)], decoder: &Decoder<'_>) -> NodeId {
    alternatives
        .iter()
        .find(|(_, option)| decoder.has_option(*option))
        .map_or(default, |(node, _)| *node)
}

impl DecodeNode for Options {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = select_option(self.default, &self.alternatives, decoder);
        decoder.decode_child(false, child, instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsDontReadModRM {
    pub default: NodeId,
    pub alternatives: Vec<(NodeId, DecoderOptions)>,
}

impl DecodeNode for OptionsDontReadModRM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = select_option(self.default, &self.alternatives, decoder);
        decoder.decode_child(true, child, instruction);
    }
}

/// Escape byte: the next opcode byte indexes another 256-entry map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnotherTable {
    pub table: Box<[NodeId; 256]>,
}

impl DecodeNode for AnotherTable {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let b = decoder.read_u8();
        decoder.decode_table(&self.table[..], b, instruction);
    }
}

/// Opcode extension in ModRM.reg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub table: [NodeId; 8],
}

impl DecodeNode for Group {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = self.table[decoder.state.reg as usize];
        decoder.decode_child(true, child, instruction);
    }
}

/// Group with separate register-form and memory-form tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group8x8 {
    pub table_low: [NodeId; 8],
    pub table_high: [NodeId; 8],
}

impl DecodeNode for Group8x8 {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let reg = decoder.state.reg as usize;
        let child = if decoder.state.mod_ == 3 { self.table_high[reg] } else { self.table_low[reg] };
        decoder.decode_child(true, child, instruction);
    }
}

/// Group whose register form is dispatched on the low six ModRM bits; a `Null` entry
/// falls back to the coarse ModRM.reg table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group8x64 {
    pub table_low: [NodeId; 8],
    pub table_high: Box<[NodeId; 64]>,
}

impl DecodeNode for Group8x64 {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let mut child = self.table_low[decoder.state.reg as usize];
        if decoder.state.mod_ == 3 {
            let fine = self.table_high[(decoder.state.modrm & 0x3F) as usize];
            if fine != NodeId::NULL {
                child = fine;
            }
        }
        decoder.decode_child(true, child, instruction);
    }
}

/// Legacy opcode selected by the 66/F3/F2 prefix. The prefix is consumed and no longer
/// shows on the instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryPrefix {
    /// Indexed by the prefix kind: none, 66, F3, F2.
    pub handlers: [NodeId; 4],
}

impl DecodeNode for MandatoryPrefix {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        decoder.clear_mandatory_prefix(instruction);
        let child = self.handlers[decoder.state.mandatory_prefix as usize];
        decoder.decode_child(true, child, instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryPrefixNoModRM {
    pub handlers: [NodeId; 4],
}

impl DecodeNode for MandatoryPrefixNoModRM {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        decoder.clear_mandatory_prefix(instruction);
        let child = self.handlers[decoder.state.mandatory_prefix as usize];
        decoder.decode_child(false, child, instruction);
    }
}

/// Mandatory-prefix dispatch split by register and memory form. Each entry states
/// whether its prefix is consumed; a non-consumed prefix stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryPrefix3 {
    pub handlers_reg: [(NodeId, bool); 4],
    pub handlers_mem: [(NodeId, bool); 4],
}

impl MandatoryPrefix3 {
    pub fn new(reg: [NodeId; 4], mem: [NodeId; 4], flags: LegacyHandlerFlags) -> Self {
        let reg_flags = [
            LegacyHandlerFlags::HANDLER_REG,
            LegacyHandlerFlags::HANDLER_66_REG,
            LegacyHandlerFlags::HANDLER_F3_REG,
            LegacyHandlerFlags::HANDLER_F2_REG,
        ];
        let mem_flags = [
            LegacyHandlerFlags::HANDLER_MEM,
            LegacyHandlerFlags::HANDLER_66_MEM,
            LegacyHandlerFlags::HANDLER_F3_MEM,
            LegacyHandlerFlags::HANDLER_F2_MEM,
        ];
        MandatoryPrefix3 {
            handlers_reg: std::array::from_fn(|i| (reg[i], flags.contains(reg_flags[i]))),
            handlers_mem: std::array::from_fn(|i| (mem[i], flags.contains(mem_flags[i]))),
        }
    }
}

impl DecodeNode for MandatoryPrefix3 {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let table = if decoder.state.mod_ == 3 { &self.handlers_reg } else { &self.handlers_mem };
        let (child, consumes_prefix) = table[decoder.state.mandatory_prefix as usize];
        if consumes_prefix {
            decoder.clear_mandatory_prefix(instruction);
        }
        decoder.decode_child(true, child, instruction);
    }
}

/// Mandatory-prefix dispatch where only F3 and/or F2 are consumed, as flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryPrefix4 {
    pub handler_np: NodeId,
    pub handler_66: NodeId,
    pub handler_f3: NodeId,
    pub handler_f2: NodeId,
    pub flags: MandatoryPrefix4Flags,
}

impl DecodeNode for MandatoryPrefix4 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = match decoder.state.mandatory_prefix {
            PrefixKind::None => self.handler_np,
            PrefixKind::P66 => self.handler_66,
            PrefixKind::PF3 => {
                if self.flags.contains(MandatoryPrefix4Flags::CLEAR_F3) {
                    decoder.clear_mandatory_prefix_f3(instruction);
                }
                self.handler_f3
            }
            PrefixKind::PF2 => {
                if self.flags.contains(MandatoryPrefix4Flags::CLEAR_F2) {
                    decoder.clear_mandatory_prefix_f2(instruction);
                }
                self.handler_f2
            }
        };
        if self.flags.contains(MandatoryPrefix4Flags::READ_MODRM) {
            decoder.decode_child(false, child, instruction);
        } else {
            decoder.decode_node(child, instruction);
        }
    }
}

/// VEX/EVEX/XOP `pp` dispatch. `pp` is part of the payload, so nothing is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryPrefix2 {
    pub handlers: [NodeId; 4],
}

impl DecodeNode for MandatoryPrefix2 {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = self.handlers[decoder.state.mandatory_prefix as usize];
        decoder.decode_child(true, child, instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryPrefix2NoModRM {
    pub handlers: [NodeId; 4],
}

impl DecodeNode for MandatoryPrefix2NoModRM {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = self.handlers[decoder.state.mandatory_prefix as usize];
        decoder.decode_child(false, child, instruction);
    }
}

/// VEX/EVEX/XOP `W` bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct W {
    pub w0: NodeId,
    pub w1: NodeId,
}

impl DecodeNode for W {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = if decoder.is_rex_w() { self.w1 } else { self.w0 };
        decoder.decode_child(true, child, instruction);
    }
}

/// Vector length (`L` for VEX/XOP, `L'L` for EVEX).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorLength {
    pub handlers: [NodeId; 4],
}

impl DecodeNode for VectorLength {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = self.handlers[decoder.state.vector_length as usize & 3];
        decoder.decode_child(true, child, instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorLengthNoModRM {
    pub handlers: [NodeId; 4],
}

impl DecodeNode for VectorLengthNoModRM {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let child = self.handlers[decoder.state.vector_length as usize & 3];
        decoder.decode_child(false, child, instruction);
    }
}

/// EVEX vector length where a register form with `b` set reuses `L'L` as the rounding
/// mode and implies 512-bit operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorLengthEr {
    pub handlers: [NodeId; 4],
}

impl DecodeNode for VectorLengthEr {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let index = if decoder.state.mod_ == 3 && decoder.has_flag(StateFlags::B) {
            2
        } else {
            decoder.state.vector_length as usize & 3
        };
        decoder.decode_child(true, self.handlers[index], instruction);
    }
}

/// C5: VEX2 in 64-bit mode or with a register-form byte, else `lds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vex2Escape {
    pub handler_mem: NodeId,
}

impl DecodeNode for Vex2Escape {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        if decoder.is64b_mode || decoder.state.mod_ == 3 {
            decoder.vex2(instruction);
        } else {
            decoder.decode_child(true, self.handler_mem, instruction);
        }
    }
}

/// C4: VEX3 in 64-bit mode or with a register-form byte, else `les`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vex3Escape {
    pub handler_mem: NodeId,
}

impl DecodeNode for Vex3Escape {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        if decoder.is64b_mode || decoder.state.mod_ == 3 {
            decoder.vex3(instruction);
        } else {
            decoder.decode_child(true, self.handler_mem, instruction);
        }
    }
}

/// 8F: XOP when the map-select bits are at least 8, else `pop r/m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XopEscape {
    pub handler_reg0: NodeId,
}

impl DecodeNode for XopEscape {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        if decoder.state.modrm & 0x1F < 8 {
            decoder.decode_child(true, self.handler_reg0, instruction);
        } else {
            decoder.xop(instruction);
        }
    }
}

/// 62: EVEX in 64-bit mode or with a register-form byte, else `bound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexEscape {
    pub handler_mem: NodeId,
}

impl DecodeNode for EvexEscape {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        if decoder.is64b_mode || decoder.state.mod_ == 3 {
            decoder.evex(instruction);
        } else {
            decoder.decode_child(true, self.handler_mem, instruction);
        }
    }
}

/// 0F 0F: 3DNow!. The opcode is the trailing imm8 byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct D3Now {
    pub codes: Box<[Code; 256]>,
}

impl DecodeNode for D3Now {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        decoder.set_d3now_encoding();
        instruction.set_op_register(0, Register::MM0.offset(decoder.state.reg));
        if decoder.state.mod_ == 3 {
            instruction.set_op_register(1, Register::MM0.offset(decoder.state.rm));
        } else {
            instruction.set_op_kind(1, OpKind::Memory);
            decoder.read_op_mem(instruction);
        }
        let ib = decoder.read_u8();
        let code = self.codes[ib as usize];
        if code == Code::Invalid {
            decoder.mark_invalid();
        }
        instruction.code = code;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixEsCsSsDs {
    pub segment: Register,
}

impl DecodeNode for PrefixEsCsSsDs {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        decoder.set_segment_prefix(instruction, self.segment, 0);
        decoder.reset_rex_prefix_state();
        decoder.decode_next_map0(instruction);
    }
}

/// FS/GS override. Takes priority over ES/CS/SS/DS in 64-bit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFsGs {
    pub segment: Register,
}

impl DecodeNode for PrefixFsGs {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        decoder.set_segment_prefix(instruction, self.segment, 1);
        decoder.reset_rex_prefix_state();
        decoder.decode_next_map0(instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix66;

impl DecodeNode for Prefix66 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        decoder.apply_operand_size_prefix(instruction);
        decoder.reset_rex_prefix_state();
        decoder.decode_next_map0(instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix67;

impl DecodeNode for Prefix67 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        decoder.apply_address_size_prefix(instruction);
        decoder.reset_rex_prefix_state();
        decoder.decode_next_map0(instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixF0;

impl DecodeNode for PrefixF0 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.prefixes |= PrefixFlags::LOCK;
        decoder.state.flags |= StateFlags::LOCK;
        decoder.reset_rex_prefix_state();
        decoder.decode_next_map0(instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixF2;

impl DecodeNode for PrefixF2 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.prefixes.remove(PrefixFlags::REP);
        instruction.prefixes |= PrefixFlags::REPNE;
        decoder.state.mandatory_prefix = PrefixKind::PF2;
        decoder.reset_rex_prefix_state();
        decoder.decode_next_map0(instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixF3;

impl DecodeNode for PrefixF3 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.prefixes.remove(PrefixFlags::REPNE);
        instruction.prefixes |= PrefixFlags::REP;
        decoder.state.mandatory_prefix = PrefixKind::PF3;
        decoder.reset_rex_prefix_state();
        decoder.decode_next_map0(instruction);
    }
}

/// 40-4F: REX in 64-bit mode, otherwise `handler` (`inc`/`dec`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRex {
    pub handler: NodeId,
    pub rex: u32,
}

impl DecodeNode for PrefixRex {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        if decoder.is64b_mode {
            decoder.apply_rex(self.rex);
            decoder.decode_next_map0(instruction);
        } else {
            decoder.decode_child(false, self.handler, instruction);
        }
    }
}
