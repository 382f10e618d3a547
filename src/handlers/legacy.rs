//! Legacy-encoded (non-VEX) instruction nodes.
//!
//! Naming follows the operand patterns of the Intel opcode tables: `E` is the ModRM r/m
//! operand, `G` the ModRM reg operand, `I` an immediate, `b`/`w`/`d`/`v`/`z` the operand
//! width (byte, word, dword, operand-size, operand-size capped at 32 bits).

use super::{code3_for, gpr_base, Code3, DecodeNode, HandlerFlags};
use crate::code::Code;
use crate::decoder::{Decoder, DecoderOptions, MandatoryPrefix, OpSize, StateFlags};
use crate::instruction::{Instruction, OpKind, PrefixFlags};
use crate::register::Register;

fn reg_index(decoder: &Decoder<'_>) -> u32 {
    decoder.state.reg + decoder.state.extra_register_base
}

fn rm_index(decoder: &Decoder<'_>) -> u32 {
    decoder.state.rm + decoder.state.extra_base_register_base
}

/// 8-bit register `index`. With any REX prefix, 4-7 select SPL..DIL instead of AH..BH.
fn gpr8(decoder: &Decoder<'_>, index: u32) -> Register {
    if decoder.has_flag(StateFlags::HAS_REX) && index >= 4 {
        Register::AL.offset(index + 4)
    } else {
        Register::AL.offset(index)
    }
}

fn op_size(decoder: &Decoder<'_>) -> OpSize {
    decoder.state.operand_size
}

/// Push/pop width: 64-bit by default in 64-bit mode, 16-bit with 66h.
fn stack_size(decoder: &Decoder<'_>) -> OpSize {
    if decoder.is64b_mode {
        if decoder.state.operand_size == OpSize::Size16 {
            OpSize::Size16
        } else {
            OpSize::Size64
        }
    } else {
        decoder.state.operand_size
    }
}

/// Near-branch width. Intel ignores 66h in 64-bit mode; AMD honours it.
fn branch_size(decoder: &Decoder<'_>) -> OpSize {
    if decoder.is64b_mode {
        if decoder.has_option(DecoderOptions::AMD) && decoder.state.operand_size == OpSize::Size16 {
            OpSize::Size16
        } else {
            OpSize::Size64
        }
    } else {
        decoder.state.operand_size
    }
}

fn rm_or_mem(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize, base: Register) {
    if decoder.state.mod_ == 3 {
        instruction.set_op_register(operand, base.offset(rm_index(decoder)));
    } else {
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem(instruction);
    }
}

fn rm8_or_mem(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    if decoder.state.mod_ == 3 {
        let reg = gpr8(decoder, rm_index(decoder));
        instruction.set_op_register(operand, reg);
    } else {
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem(instruction);
    }
}

/// Memory-only operand. The register form is invalid.
fn mem_only(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    if decoder.state.mod_ == 3 {
        decoder.mark_invalid();
    } else {
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem(instruction);
    }
}

fn imm8(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    let value = decoder.read_u8();
    instruction.set_immediate(operand, OpKind::Immediate8, value as u64);
}

/// imm16/imm32, sign-extended to 64 bits for 64-bit operands.
fn imm_z(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize, size: OpSize) {
    match size {
        OpSize::Size16 => {
            let value = decoder.read_u16();
            instruction.set_immediate(operand, OpKind::Immediate16, value as u64);
        }
        OpSize::Size32 => {
            let value = decoder.read_u32();
            instruction.set_immediate(operand, OpKind::Immediate32, value as u64);
        }
        OpSize::Size64 => {
            let value = decoder.read_u32();
            instruction.set_immediate(operand, OpKind::Immediate32to64, value as u64);
        }
    }
}

fn imm8_sext(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize, size: OpSize) {
    let kind = match size {
        OpSize::Size16 => OpKind::Immediate8to16,
        OpSize::Size32 => OpKind::Immediate8to32,
        OpSize::Size64 => OpKind::Immediate8to64,
    };
    let value = decoder.read_u8();
    instruction.set_immediate(operand, kind, value as u64);
}

fn set_near_branch(decoder: &Decoder<'_>, instruction: &mut Instruction, size: OpSize, displacement: u64) {
    let target = decoder.current_ip().wrapping_add(displacement);
    match size {
        OpSize::Size16 => instruction.set_near_branch(0, OpKind::NearBranch16, target & 0xFFFF),
        OpSize::Size32 => instruction.set_near_branch(0, OpKind::NearBranch32, target & 0xFFFF_FFFF),
        OpSize::Size64 => instruction.set_near_branch(0, OpKind::NearBranch64, target),
    }
}

fn string_src(decoder: &Decoder<'_>) -> OpKind {
    match decoder.state.address_size {
        OpSize::Size16 => OpKind::MemorySegSI,
        OpSize::Size32 => OpKind::MemorySegESI,
        OpSize::Size64 => OpKind::MemorySegRSI,
    }
}

fn string_dst(decoder: &Decoder<'_>) -> OpKind {
    match decoder.state.address_size {
        OpSize::Size16 => OpKind::MemoryESDI,
        OpSize::Size32 => OpKind::MemoryESEDI,
        OpSize::Size64 => OpKind::MemoryESRDI,
    }
}

/// Width selected by REX.W/VEX.W for instructions that only come in 32 and 64 bits.
fn w_size(decoder: &Decoder<'_>) -> (usize, Register) {
    if decoder.is_rex_w() {
        (1, Register::RAX)
    } else {
        (0, Register::EAX)
    }
}

fn xmm_reg(decoder: &Decoder<'_>) -> Register {
    Register::XMM0.offset(reg_index(decoder))
}

fn mm_reg(decoder: &Decoder<'_>) -> Register {
    Register::MM0.offset(decoder.state.reg)
}

// ---- single r/m operand -------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eb {
    pub code: Code,
    pub flags: HandlerFlags,
}

impl DecodeNode for Eb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        rm8_or_mem(decoder, instruction, 0);
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ev {
    pub codes: Code3,
    pub flags: HandlerFlags,
}

impl DecodeNode for Ev {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

/// r/m16 in memory, operand-size register in the register form (`sldt`, `str`, `smsw`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ew {
    pub codes: Code3,
}

impl DecodeNode for Ew {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed {
    pub code: Code,
}

impl DecodeNode for Ed {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        rm_or_mem(decoder, instruction, 0, Register::EAX);
    }
}

/// Descriptor-table operand (`sgdt`, `lidt`). Always 64-bit in 64-bit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ms {
    pub codes: Code3,
}

impl DecodeNode for Ms {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = if decoder.is64b_mode { OpSize::Size64 } else { op_size(decoder) };
        instruction.code = code3_for(&self.codes, size);
        mem_only(decoder, instruction, 0);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct M {
    pub code: Code,
}

impl DecodeNode for M {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        mem_only(decoder, instruction, 0);
    }
}

/// Memory operand whose width doubles with REX.W (`cmpxchg8b` / `cmpxchg16b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MRexW {
    pub codes: [Code; 2],
    pub flags: HandlerFlags,
}

impl DecodeNode for MRexW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, _) = w_size(decoder);
        instruction.code = self.codes[w];
        mem_only(decoder, instruction, 0);
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

/// Register-only operand-size destination (`rdrand`, `rdseed`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rv {
    pub codes: Code3,
}

impl DecodeNode for Rv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        if decoder.state.mod_ != 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_register(0, gpr_base(size).offset(rm_index(decoder)));
    }
}

/// Register-only r32/r64 selected by REX.W (`rdfsbase`, `wrgsbase`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RvW {
    pub codes: [Code; 2],
}

impl DecodeNode for RvW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, base) = w_size(decoder);
        instruction.code = self.codes[w];
        if decoder.state.mod_ != 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_register(0, base.offset(rm_index(decoder)));
    }
}

// ---- r/m, reg -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbGb {
    pub code: Code,
    pub flags: HandlerFlags,
}

impl DecodeNode for EbGb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(1, gpr8(decoder, reg_index(decoder)));
        rm8_or_mem(decoder, instruction, 0);
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvGv {
    pub codes: Code3,
    pub flags: HandlerFlags,
}

impl DecodeNode for EvGv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(1, gpr_base(size).offset(reg_index(decoder)));
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GbEb {
    pub code: Code,
}

impl DecodeNode for GbEb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, gpr8(decoder, reg_index(decoder)));
        rm8_or_mem(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvEv {
    pub codes: Code3,
}

impl DecodeNode for GvEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(reg_index(decoder)));
        rm_or_mem(decoder, instruction, 1, gpr_base(size));
    }
}

/// `movzx`/`movsx` from a byte source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvEb {
    pub codes: Code3,
}

impl DecodeNode for GvEb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(reg_index(decoder)));
        rm8_or_mem(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvEw {
    pub codes: Code3,
}

impl DecodeNode for GvEw {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(reg_index(decoder)));
        rm_or_mem(decoder, instruction, 1, Register::AX);
    }
}

/// `lea`: the address itself, never a register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvM {
    pub codes: Code3,
}

impl DecodeNode for GvM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(reg_index(decoder)));
        mem_only(decoder, instruction, 1);
    }
}

/// `bound`. Only exists outside 64-bit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvMa {
    pub codes: [Code; 2],
}

impl DecodeNode for GvMa {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (code, base) = if op_size(decoder) == OpSize::Size16 {
            (self.codes[0], Register::AX)
        } else {
            (self.codes[1], Register::EAX)
        };
        instruction.code = code;
        instruction.set_op_register(0, base.offset(reg_index(decoder)));
        mem_only(decoder, instruction, 1);
    }
}

/// Far pointer load (`les`, `lds`, `lss`, `lfs`, `lgs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvMp {
    pub codes: Code3,
}

impl DecodeNode for GvMp {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(reg_index(decoder)));
        mem_only(decoder, instruction, 1);
    }
}

/// `movbe` load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvMv {
    pub codes: Code3,
}

impl DecodeNode for GvMv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(reg_index(decoder)));
        mem_only(decoder, instruction, 1);
    }
}

/// `movbe` store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MvGv {
    pub codes: Code3,
}

impl DecodeNode for MvGv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        mem_only(decoder, instruction, 0);
        instruction.set_op_register(1, gpr_base(size).offset(reg_index(decoder)));
    }
}

/// `crc32 r32/r64, r/m8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdEb {
    pub codes: [Code; 2],
}

impl DecodeNode for GdEb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, base) = w_size(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, base.offset(reg_index(decoder)));
        rm8_or_mem(decoder, instruction, 1);
    }
}

/// `crc32 r32, r/m16/32` and `crc32 r64, r/m64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdEv {
    pub codes: Code3,
}

impl DecodeNode for GdEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        let dst = if size == OpSize::Size64 { Register::RAX } else { Register::EAX };
        instruction.set_op_register(0, dst.offset(reg_index(decoder)));
        rm_or_mem(decoder, instruction, 1, gpr_base(size));
    }
}

// ---- r/m, immediate -----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbIb {
    pub code: Code,
    pub flags: HandlerFlags,
}

impl DecodeNode for EbIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        rm8_or_mem(decoder, instruction, 0);
        imm8(decoder, instruction, 1);
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvIz {
    pub codes: Code3,
    pub flags: HandlerFlags,
}

impl DecodeNode for EvIz {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        imm_z(decoder, instruction, 1, size);
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

/// Sign-extended imm8 (opcode 83).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvIb {
    pub codes: Code3,
    pub flags: HandlerFlags,
}

impl DecodeNode for EvIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        imm8_sext(decoder, instruction, 1, size);
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

/// Zero-extended imm8 (shift counts, bit indexes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvIb2 {
    pub codes: Code3,
    pub flags: HandlerFlags,
}

impl DecodeNode for EvIb2 {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        imm8(decoder, instruction, 1);
        decoder.apply_handler_flags(instruction, self.flags);
    }
}

/// Shift by one. The count is an implicit immediate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eb1 {
    pub code: Code,
}

impl DecodeNode for Eb1 {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        rm8_or_mem(decoder, instruction, 0);
        instruction.set_immediate(1, OpKind::Immediate8, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ev1 {
    pub codes: Code3,
}

impl DecodeNode for Ev1 {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        instruction.set_immediate(1, OpKind::Immediate8, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbCL {
    pub code: Code,
}

impl DecodeNode for EbCL {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        rm8_or_mem(decoder, instruction, 0);
        instruction.set_op_register(1, Register::CL);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvCL {
    pub codes: Code3,
}

impl DecodeNode for EvCL {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        instruction.set_op_register(1, Register::CL);
    }
}

/// Double shift by immediate (`shld`, `shrd`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvGvIb {
    pub codes: Code3,
}

impl DecodeNode for EvGvIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        instruction.set_op_register(1, gpr_base(size).offset(reg_index(decoder)));
        imm8(decoder, instruction, 2);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvGvCL {
    pub codes: Code3,
}

impl DecodeNode for EvGvCL {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        instruction.set_op_register(1, gpr_base(size).offset(reg_index(decoder)));
        instruction.set_op_register(2, Register::CL);
    }
}

/// Three-operand `imul` with a sign-extended imm8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvEvIb {
    pub codes: Code3,
}

impl DecodeNode for GvEvIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(reg_index(decoder)));
        rm_or_mem(decoder, instruction, 1, gpr_base(size));
        imm8_sext(decoder, instruction, 2, size);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvEvIz {
    pub codes: Code3,
}

impl DecodeNode for GvEvIz {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(reg_index(decoder)));
        rm_or_mem(decoder, instruction, 1, gpr_base(size));
        imm_z(decoder, instruction, 2, size);
    }
}

// ---- segment registers --------------------------------------------------------------

/// `mov r/m, Sreg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvSw {
    pub codes: Code3,
}

impl DecodeNode for EvSw {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        if decoder.state.reg > 5 {
            decoder.mark_invalid();
        }
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
        instruction.set_op_register(1, Register::ES.offset(decoder.state.reg));
    }
}

/// `mov Sreg, r/m16`. Loading CS is not encodable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwEw {
    pub code: Code,
}

impl DecodeNode for SwEw {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        let sreg = decoder.state.reg;
        if sreg > 5 || sreg == 1 {
            decoder.mark_invalid();
        }
        instruction.set_op_register(0, Register::ES.offset(sreg));
        rm_or_mem(decoder, instruction, 1, Register::AX);
    }
}

// ---- fixed registers and immediates -------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegIb {
    pub code: Code,
    pub reg: Register,
}

impl DecodeNode for RegIb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, self.reg);
        imm8(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbReg {
    pub code: Code,
    pub reg: Register,
}

impl DecodeNode for IbReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        imm8(decoder, instruction, 0);
        instruction.set_op_register(1, self.reg);
    }
}

/// Accumulator with an operand-size immediate (`add eax, imm32`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegIz {
    pub codes: Code3,
}

impl DecodeNode for RegIz {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size));
        imm_z(decoder, instruction, 1, size);
    }
}

/// B0-B7: `mov r8, imm8` with the register in the opcode's low bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegIb3 {
    pub code: Code,
    pub index: u32,
}

impl DecodeNode for RegIb3 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        let reg = gpr8(decoder, self.index + decoder.state.extra_base_register_base);
        instruction.set_op_register(0, reg);
        imm8(decoder, instruction, 1);
    }
}

/// B8-BF: `mov r, imm`. The only legacy form with a full 64-bit immediate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegIz2 {
    pub codes: Code3,
    pub index: u32,
}

impl DecodeNode for RegIz2 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        let reg = gpr_base(size).offset(self.index + decoder.state.extra_base_register_base);
        instruction.set_op_register(0, reg);
        match size {
            OpSize::Size16 => {
                let value = decoder.read_u16();
                instruction.set_immediate(1, OpKind::Immediate16, value as u64);
            }
            OpSize::Size32 => {
                let value = decoder.read_u32();
                instruction.set_immediate(1, OpKind::Immediate32, value as u64);
            }
            OpSize::Size64 => {
                let value = decoder.read_u64();
                instruction.set_immediate(1, OpKind::Immediate64, value);
            }
        }
    }
}

/// Two fixed registers (`in al, dx`, `out dx, al`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegReg {
    pub code: Code,
    pub reg1: Register,
    pub reg2: Register,
}

impl DecodeNode for RegReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, _decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, self.reg1);
        instruction.set_op_register(1, self.reg2);
    }
}

fn ax_or_eax(decoder: &Decoder<'_>) -> Register {
    if op_size(decoder) == OpSize::Size16 {
        Register::AX
    } else {
        Register::EAX
    }
}

/// `in eAX, dx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EaxDx {
    pub codes: Code3,
}

impl DecodeNode for EaxDx {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        instruction.set_op_register(0, ax_or_eax(decoder));
        instruction.set_op_register(1, Register::DX);
    }
}

/// `out dx, eAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxEax {
    pub codes: Code3,
}

impl DecodeNode for DxEax {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        instruction.set_op_register(0, Register::DX);
        instruction.set_op_register(1, ax_or_eax(decoder));
    }
}

/// `in eAX, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EaxIb {
    pub codes: Code3,
}

impl DecodeNode for EaxIb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        instruction.set_op_register(0, ax_or_eax(decoder));
        imm8(decoder, instruction, 1);
    }
}

/// `out imm8, eAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbEax {
    pub codes: Code3,
}

impl DecodeNode for IbEax {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        imm8(decoder, instruction, 0);
        instruction.set_op_register(1, ax_or_eax(decoder));
    }
}

// ---- stack --------------------------------------------------------------------------

/// 50-5F: push/pop with the register in the opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPopReg {
    pub codes: Code3,
    pub index: u32,
}

impl DecodeNode for PushPopReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = stack_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        let reg = gpr_base(size).offset(self.index + decoder.state.extra_base_register_base);
        instruction.set_op_register(0, reg);
    }
}

/// Push/pop of a segment register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSimpleReg {
    pub codes: Code3,
    pub reg: Register,
}

impl DecodeNode for PushSimpleReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, stack_size(decoder));
        instruction.set_op_register(0, self.reg);
    }
}

/// `push r/m` (FF /6) and `pop r/m` (8F /0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPopEv {
    pub codes: Code3,
}

impl DecodeNode for PushPopEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = stack_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushIz {
    pub codes: Code3,
}

impl DecodeNode for PushIz {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = stack_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        imm_z(decoder, instruction, 0, size);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushIb2 {
    pub codes: Code3,
}

impl DecodeNode for PushIb2 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = stack_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        imm8_sext(decoder, instruction, 0, size);
    }
}

/// 90-97: `xchg r, rAX`. Opcode 90 without REX.B is `nop`, and `pause` with F3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XchgRegRax {
    pub codes: Code3,
    pub index: u32,
}

impl DecodeNode for XchgRegRax {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        if self.index == 0
            && decoder.state.mandatory_prefix == MandatoryPrefix::PF3
            && !decoder.has_option(DecoderOptions::NO_PAUSE)
        {
            decoder.clear_mandatory_prefix_f3(instruction);
            instruction.code = Code::Pause;
            return;
        }
        let size = op_size(decoder);
        let index = self.index + decoder.state.extra_base_register_base;
        if index == 0 {
            instruction.code = code3_for(&[Code::Nopw, Code::Nopd, Code::Nopq], size);
            return;
        }
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size).offset(index));
        instruction.set_op_register(1, gpr_base(size));
    }
}

/// Register encoded in the opcode's low bits (`bswap`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleReg {
    pub codes: Code3,
    pub index: u32,
}

impl DecodeNode for SimpleReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        let reg = gpr_base(size).offset(self.index + decoder.state.extra_base_register_base);
        instruction.set_op_register(0, reg);
    }
}

/// Operand-less, code selected by operand size (`cwde`, `cqo`, `iretq`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simple2 {
    pub codes: Code3,
}

impl DecodeNode for Simple2 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
    }
}

/// Operand-less stack instruction (`pushf`, `popf`, `leave`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simple3 {
    pub codes: Code3,
}

impl DecodeNode for Simple3 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, stack_size(decoder));
    }
}

// ---- branches -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jb {
    pub codes: Code3,
}

impl DecodeNode for Jb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = branch_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        let disp = decoder.read_u8() as u8 as i8 as i64 as u64;
        set_near_branch(decoder, instruction, size, disp);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jz {
    pub codes: Code3,
}

impl DecodeNode for Jz {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = branch_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        let disp = if size == OpSize::Size16 {
            decoder.read_u16() as u16 as i16 as i64 as u64
        } else {
            decoder.read_u32() as i32 as i64 as u64
        };
        set_near_branch(decoder, instruction, size, disp);
    }
}

/// `loop*`/`jcxz`: the counter register follows the address size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jb2 {
    pub codes: Code3,
}

impl DecodeNode for Jb2 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, decoder.state.address_size);
        let size = branch_size(decoder);
        let disp = decoder.read_u8() as u8 as i8 as i64 as u64;
        set_near_branch(decoder, instruction, size, disp);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xbegin {
    pub codes: Code3,
}

impl DecodeNode for Xbegin {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        let disp = if size == OpSize::Size16 {
            decoder.read_u16() as u16 as i16 as i64 as u64
        } else {
            decoder.read_u32() as i32 as i64 as u64
        };
        let branch = if decoder.is64b_mode { OpSize::Size64 } else { size };
        set_near_branch(decoder, instruction, branch, disp);
    }
}

/// Direct far branch `ptr16:16` / `ptr16:32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ap {
    pub codes: [Code; 2],
}

impl DecodeNode for Ap {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        if op_size(decoder) == OpSize::Size16 {
            instruction.code = self.codes[0];
            instruction.far_branch = decoder.read_u16();
            instruction.set_op_kind(0, OpKind::FarBranch16);
        } else {
            instruction.code = self.codes[1];
            instruction.far_branch = decoder.read_u32();
            instruction.set_op_kind(0, OpKind::FarBranch32);
        }
        instruction.far_branch_selector = decoder.read_u16() as u16;
    }
}

/// Indirect far branch through memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ep {
    pub codes: Code3,
}

impl DecodeNode for Ep {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        mem_only(decoder, instruction, 0);
    }
}

/// Near `ret`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSimple {
    pub codes: Code3,
}

impl DecodeNode for BranchSimple {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, branch_size(decoder));
    }
}

/// Near `ret imm16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchIw {
    pub codes: Code3,
}

impl DecodeNode for BranchIw {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, branch_size(decoder));
        let value = decoder.read_u16();
        instruction.set_immediate(0, OpKind::Immediate16, value as u64);
    }
}

/// Indirect near `call`/`jmp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEv {
    pub codes: Code3,
}

impl DecodeNode for BranchEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = branch_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        rm_or_mem(decoder, instruction, 0, gpr_base(size));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ib {
    pub code: Code,
}

impl DecodeNode for Ib {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        imm8(decoder, instruction, 0);
    }
}

/// Far `ret imm16`. The width follows the operand size, not the near-branch rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iw {
    pub codes: Code3,
}

impl DecodeNode for Iw {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        let value = decoder.read_u16();
        instruction.set_immediate(0, OpKind::Immediate16, value as u64);
    }
}

/// `enter imm16, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IwIb {
    pub codes: Code3,
}

impl DecodeNode for IwIb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, stack_size(decoder));
        let frame = decoder.read_u16();
        instruction.set_immediate(0, OpKind::Immediate16, frame as u64);
        instruction.immediate2 = decoder.read_u8() as u8;
        instruction.set_op_kind(1, OpKind::Immediate8Second);
    }
}

// ---- string instructions ------------------------------------------------------------
// X is [seg:rSI], Y is ES:[rDI]; both follow the address size.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YbReg {
    pub code: Code,
    pub reg: Register,
}

impl DecodeNode for YbReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_kind(0, string_dst(decoder));
        instruction.set_op_register(1, self.reg);
    }
}

/// `stos` with the operand-size accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YvReg {
    pub codes: Code3,
}

impl DecodeNode for YvReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_kind(0, string_dst(decoder));
        instruction.set_op_register(1, gpr_base(size));
    }
}

/// `ins` from DX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YvReg2 {
    pub codes: Code3,
}

impl DecodeNode for YvReg2 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        instruction.set_op_kind(0, string_dst(decoder));
        instruction.set_op_register(1, Register::DX);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegXb {
    pub code: Code,
    pub reg: Register,
}

impl DecodeNode for RegXb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, self.reg);
        instruction.set_op_kind(1, string_src(decoder));
    }
}

/// `lods` into the operand-size accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegXv {
    pub codes: Code3,
}

impl DecodeNode for RegXv {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size));
        instruction.set_op_kind(1, string_src(decoder));
    }
}

/// `outs` to DX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegXv2 {
    pub codes: Code3,
}

impl DecodeNode for RegXv2 {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        instruction.set_op_register(0, Register::DX);
        instruction.set_op_kind(1, string_src(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XbYb {
    pub code: Code,
}

impl DecodeNode for XbYb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_kind(0, string_src(decoder));
        instruction.set_op_kind(1, string_dst(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XvYv {
    pub codes: Code3,
}

impl DecodeNode for XvYv {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        instruction.set_op_kind(0, string_src(decoder));
        instruction.set_op_kind(1, string_dst(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YbXb {
    pub code: Code,
}

impl DecodeNode for YbXb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_kind(0, string_dst(decoder));
        instruction.set_op_kind(1, string_src(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YvXv {
    pub codes: Code3,
}

impl DecodeNode for YvXv {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = code3_for(&self.codes, op_size(decoder));
        instruction.set_op_kind(0, string_dst(decoder));
        instruction.set_op_kind(1, string_src(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegYb {
    pub code: Code,
    pub reg: Register,
}

impl DecodeNode for RegYb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, self.reg);
        instruction.set_op_kind(1, string_dst(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegYv {
    pub codes: Code3,
}

impl DecodeNode for RegYv {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size));
        instruction.set_op_kind(1, string_dst(decoder));
    }
}

// ---- moffs --------------------------------------------------------------------------

/// A0-A3 absolute offset; its width is the address size.
fn moffs(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    let (displacement, size) = match decoder.state.address_size {
        OpSize::Size16 => (decoder.read_u16() as u64, 2),
        OpSize::Size32 => (decoder.read_u32() as u64, 4),
        OpSize::Size64 => (decoder.read_u64(), 8),
    };
    instruction.set_op_kind(operand, OpKind::Memory);
    let memory = &mut instruction.memory;
    memory.base = Register::None;
    memory.index = Register::None;
    memory.scale = 1;
    memory.displacement = displacement;
    memory.displ_size = size;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegOb {
    pub code: Code,
    pub reg: Register,
}

impl DecodeNode for RegOb {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, self.reg);
        moffs(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegOv {
    pub codes: Code3,
}

impl DecodeNode for RegOv {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        instruction.set_op_register(0, gpr_base(size));
        moffs(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObReg {
    pub code: Code,
    pub reg: Register,
}

impl DecodeNode for ObReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        moffs(decoder, instruction, 0);
        instruction.set_op_register(1, self.reg);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvReg {
    pub codes: Code3,
}

impl DecodeNode for OvReg {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let size = op_size(decoder);
        instruction.code = code3_for(&self.codes, size);
        moffs(decoder, instruction, 0);
        instruction.set_op_register(1, gpr_base(size));
    }
}

/// `xlatb`: `[rBX + AL]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemBx {
    pub code: Code,
}

impl DecodeNode for MemBx {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_kind(0, OpKind::Memory);
        let memory = &mut instruction.memory;
        memory.base = match decoder.state.address_size {
            OpSize::Size16 => Register::BX,
            OpSize::Size32 => Register::EBX,
            OpSize::Size64 => Register::RBX,
        };
        memory.index = Register::AL;
        memory.scale = 1;
    }
}

// ---- control and debug registers ----------------------------------------------------

fn is_valid_cr(index: u32) -> bool {
    matches!(index, 0 | 2 | 3 | 4 | 8)
}

/// Control/debug register operand. `lock mov cr0` is the AMD alias for CR8 outside 64-bit mode.
fn control_register(decoder: &mut Decoder<'_>, instruction: &mut Instruction, base: Register) -> Register {
    let mut index = reg_index(decoder);
    if base == Register::CR0 {
        if !decoder.is64b_mode && index == 0 && instruction.prefixes.contains(PrefixFlags::LOCK) {
            instruction.prefixes.remove(PrefixFlags::LOCK);
            decoder.state.flags |= StateFlags::ALLOW_LOCK;
            index = 8;
        }
        decoder.mark_invalid_if_strict(!is_valid_cr(index));
    } else {
        decoder.mark_invalid_if_strict(index > 7);
    }
    base.offset(index)
}

/// `mov r32/r64, cr/dr`. ModRM.mod is ignored; r/m is always a register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdCr {
    pub codes: [Code; 2],
    pub base: Register,
}

impl DecodeNode for RdCr {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (code, gpr) = if decoder.is64b_mode {
            (self.codes[1], Register::RAX)
        } else {
            (self.codes[0], Register::EAX)
        };
        instruction.code = code;
        instruction.set_op_register(0, gpr.offset(rm_index(decoder)));
        let reg = control_register(decoder, instruction, self.base);
        instruction.set_op_register(1, reg);
    }
}

/// `mov cr/dr, r32/r64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrRd {
    pub codes: [Code; 2],
    pub base: Register,
}

impl DecodeNode for CrRd {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (code, gpr) = if decoder.is64b_mode {
            (self.codes[1], Register::RAX)
        } else {
            (self.codes[0], Register::EAX)
        };
        instruction.code = code;
        let reg = control_register(decoder, instruction, self.base);
        instruction.set_op_register(0, reg);
        instruction.set_op_register(1, gpr.offset(rm_index(decoder)));
    }
}

// ---- x87 ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mf {
    pub code: Code,
}

impl DecodeNode for Mf {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        mem_only(decoder, instruction, 0);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StSti {
    pub code: Code,
}

impl DecodeNode for StSti {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, Register::ST0);
        instruction.set_op_register(1, Register::ST0.offset(decoder.state.rm));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StiSt {
    pub code: Code,
}

impl DecodeNode for StiSt {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, Register::ST0.offset(decoder.state.rm));
        instruction.set_op_register(1, Register::ST0);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sti {
    pub code: Code,
}

impl DecodeNode for Sti {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, Register::ST0.offset(decoder.state.rm));
    }
}

// ---- SSE ----------------------------------------------------------------------------

fn xmm_rm_or_mem(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    rm_or_mem(decoder, instruction, operand, Register::XMM0);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VW {
    pub code: Code,
}

impl DecodeNode for VW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, xmm_reg(decoder));
        xmm_rm_or_mem(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WV {
    pub code: Code,
}

impl DecodeNode for WV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        xmm_rm_or_mem(decoder, instruction, 0);
        instruction.set_op_register(1, xmm_reg(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VM {
    pub code: Code,
}

impl DecodeNode for VM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, xmm_reg(decoder));
        mem_only(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MV {
    pub code: Code,
}

impl DecodeNode for MV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        mem_only(decoder, instruction, 0);
        instruction.set_op_register(1, xmm_reg(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VWIb {
    pub code: Code,
}

impl DecodeNode for VWIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, xmm_reg(decoder));
        xmm_rm_or_mem(decoder, instruction, 1);
        imm8(decoder, instruction, 2);
    }
}

/// XMM destination, MMX or m64 source (`cvtpi2ps`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VQ {
    pub code: Code,
}

impl DecodeNode for VQ {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, xmm_reg(decoder));
        if decoder.state.mod_ == 3 {
            instruction.set_op_register(1, Register::MM0.offset(decoder.state.rm));
        } else {
            instruction.set_op_kind(1, OpKind::Memory);
            decoder.read_op_mem(instruction);
        }
    }
}

/// XMM destination, r/m32 or r/m64 source selected by REX.W.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEv {
    pub codes: [Code; 2],
}

impl DecodeNode for VEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = w_size(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, xmm_reg(decoder));
        rm_or_mem(decoder, instruction, 1, gpr);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvV {
    pub codes: [Code; 2],
}

impl DecodeNode for EvV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = w_size(decoder);
        instruction.code = self.codes[w];
        rm_or_mem(decoder, instruction, 0, gpr);
        instruction.set_op_register(1, xmm_reg(decoder));
    }
}

/// `pinsrd`/`pinsrq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvIb {
    pub codes: [Code; 2],
}

impl DecodeNode for VEvIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = w_size(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, xmm_reg(decoder));
        rm_or_mem(decoder, instruction, 1, gpr);
        imm8(decoder, instruction, 2);
    }
}

/// `pextrd`/`pextrq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvVIb {
    pub codes: [Code; 2],
}

impl DecodeNode for EvVIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = w_size(decoder);
        instruction.code = self.codes[w];
        rm_or_mem(decoder, instruction, 0, gpr);
        instruction.set_op_register(1, xmm_reg(decoder));
        imm8(decoder, instruction, 2);
    }
}

/// r32/r64 destination, XMM or memory source (`cvttss2si`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvW {
    pub codes: [Code; 2],
}

impl DecodeNode for GvW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = w_size(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, gpr.offset(reg_index(decoder)));
        xmm_rm_or_mem(decoder, instruction, 1);
    }
}

/// XMM shift by immediate (register form only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RIb {
    pub code: Code,
}

impl DecodeNode for RIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        if decoder.state.mod_ != 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_register(0, Register::XMM0.offset(rm_index(decoder)));
        imm8(decoder, instruction, 1);
    }
}

/// `extrq xmm, imm8, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RIbIb {
    pub code: Code,
}

impl DecodeNode for RIbIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        if decoder.state.mod_ != 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_register(0, Register::XMM0.offset(rm_index(decoder)));
        imm8(decoder, instruction, 1);
        instruction.immediate2 = decoder.read_u8() as u8;
        instruction.set_op_kind(2, OpKind::Immediate8Second);
    }
}

// ---- MMX ----------------------------------------------------------------------------
// MMX registers ignore REX extension bits.

fn mm_rm_or_mem(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    if decoder.state.mod_ == 3 {
        instruction.set_op_register(operand, Register::MM0.offset(decoder.state.rm));
    } else {
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem(instruction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PQ {
    pub code: Code,
}

impl DecodeNode for PQ {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, mm_reg(decoder));
        mm_rm_or_mem(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QP {
    pub code: Code,
}

impl DecodeNode for QP {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        mm_rm_or_mem(decoder, instruction, 0);
        instruction.set_op_register(1, mm_reg(decoder));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PQIb {
    pub code: Code,
}

impl DecodeNode for PQIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, mm_reg(decoder));
        mm_rm_or_mem(decoder, instruction, 1);
        imm8(decoder, instruction, 2);
    }
}

/// MMX shift by immediate (register form only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NIb {
    pub code: Code,
}

impl DecodeNode for NIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        if decoder.state.mod_ != 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_register(0, Register::MM0.offset(decoder.state.rm));
        imm8(decoder, instruction, 1);
    }
}

/// `movd mm, r/m32` / `movq mm, r/m64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PEv {
    pub codes: [Code; 2],
}

impl DecodeNode for PEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = w_size(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, mm_reg(decoder));
        rm_or_mem(decoder, instruction, 1, gpr);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvP {
    pub codes: [Code; 2],
}

impl DecodeNode for EvP {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = w_size(decoder);
        instruction.code = self.codes[w];
        rm_or_mem(decoder, instruction, 0, gpr);
        instruction.set_op_register(1, mm_reg(decoder));
    }
}

/// `movntq m64, mm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MP {
    pub code: Code,
}

impl DecodeNode for MP {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        mem_only(decoder, instruction, 0);
        instruction.set_op_register(1, mm_reg(decoder));
    }
}

// ---- MPX ----------------------------------------------------------------------------

fn bnd_reg(decoder: &mut Decoder<'_>) -> Register {
    let index = reg_index(decoder);
    decoder.mark_invalid_if_strict(index > 3);
    Register::BND0.offset(index & 3)
}

fn bnd_rm_or_mem(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    if decoder.state.mod_ == 3 {
        let index = rm_index(decoder);
        decoder.mark_invalid_if_strict(index > 3);
        instruction.set_op_register(operand, Register::BND0.offset(index & 3));
    } else {
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem(instruction);
    }
}

fn mpx_code(decoder: &Decoder<'_>, codes: &[Code; 2]) -> Code {
    if decoder.is64b_mode {
        codes[1]
    } else {
        codes[0]
    }
}

/// `bndmov bnd, bnd/m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BM {
    pub codes: [Code; 2],
}

impl DecodeNode for BM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = mpx_code(decoder, &self.codes);
        let reg = bnd_reg(decoder);
        instruction.set_op_register(0, reg);
        bnd_rm_or_mem(decoder, instruction, 1);
    }
}

/// `bndmov bnd/m, bnd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MB {
    pub codes: [Code; 2],
}

impl DecodeNode for MB {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = mpx_code(decoder, &self.codes);
        bnd_rm_or_mem(decoder, instruction, 0);
        let reg = bnd_reg(decoder);
        instruction.set_op_register(1, reg);
    }
}

/// `bndcl`/`bndcu`/`bndcn bnd, r/m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BEv {
    pub codes: [Code; 2],
}

impl DecodeNode for BEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = mpx_code(decoder, &self.codes);
        let reg = bnd_reg(decoder);
        instruction.set_op_register(0, reg);
        let gpr = if decoder.is64b_mode { Register::RAX } else { Register::EAX };
        rm_or_mem(decoder, instruction, 1, gpr);
    }
}

/// MIB operand: SIB memory without RIP-relative or 16-bit addressing.
fn mib(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    decoder.mark_invalid_if_strict(decoder.state.address_size == OpSize::Size16);
    mem_only(decoder, instruction, operand);
    let rip_relative = decoder.has_flag(StateFlags::IP_REL64) || decoder.has_flag(StateFlags::IP_REL32);
    decoder.mark_invalid_if_strict(rip_relative);
}

/// `bndldx bnd, mib`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BMib {
    pub code: Code,
}

impl DecodeNode for BMib {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        let reg = bnd_reg(decoder);
        instruction.set_op_register(0, reg);
        mib(decoder, instruction, 1);
    }
}

/// `bndstx mib, bnd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MibB {
    pub code: Code,
}

impl DecodeNode for MibB {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        mib(decoder, instruction, 0);
        let reg = bnd_reg(decoder);
        instruction.set_op_register(1, reg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_registers_follow_rex_rules() {
        let tables = crate::tables::Tables::builtin();
        let mut decoder = Decoder::with_tables(tables, crate::decoder::Bitness::Bits64, &[], 0, DecoderOptions::empty());
        assert_eq!(gpr8(&decoder, 4), Register::AH);
        decoder.state.flags |= StateFlags::HAS_REX;
        assert_eq!(gpr8(&decoder, 4), Register::SPL);
        assert_eq!(gpr8(&decoder, 8), Register::R8L);
        assert_eq!(gpr8(&decoder, 15), Register::R15L);
    }
}
