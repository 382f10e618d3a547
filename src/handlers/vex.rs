//! VEX- and XOP-encoded instruction nodes.
//!
//! Vector operands use the base register carried by the node (`XMM0` or `YMM0`); the
//! surrounding `VectorLength` node picks the node for the encoded `L`. `H` is the
//! register named by `vvvv`.

use super::DecodeNode;
use crate::code::Code;
use crate::decoder::Decoder;
use crate::instruction::{Instruction, OpKind};
use crate::register::Register;
use crate::tuple_type::TupleType;

fn reg(decoder: &Decoder<'_>, base: Register) -> Register {
    base.offset(decoder.state.reg + decoder.state.extra_register_base)
}

fn vvvv(decoder: &Decoder<'_>, base: Register) -> Register {
    base.offset(decoder.state.vvvv)
}

fn rm_reg(decoder: &Decoder<'_>, base: Register) -> Register {
    base.offset(decoder.state.rm + decoder.state.extra_base_register_base)
}

fn rm_or_mem(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize, base: Register) {
    if decoder.state.mod_ == 3 {
        instruction.set_op_register(operand, rm_reg(decoder, base));
    } else {
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem(instruction);
    }
}

fn mem_only(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    if decoder.state.mod_ == 3 {
        decoder.mark_invalid();
    } else {
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem(instruction);
    }
}

/// Register-only r/m operand. Returns `false` (and marks invalid) for a memory ModRM.
fn reg_only(decoder: &mut Decoder<'_>) -> bool {
    if decoder.state.mod_ != 3 {
        decoder.mark_invalid();
        return false;
    }
    true
}

/// `vvvv` is reserved (must encode 1111b).
fn no_vvvv(decoder: &mut Decoder<'_>) {
    decoder.mark_invalid_if_strict(decoder.state.vvvv_invalid_check != 0);
}

fn imm8(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    let value = decoder.read_u8();
    instruction.set_immediate(operand, OpKind::Immediate8, value as u64);
}

/// 32- or 64-bit GPR; `W` only widens in 64-bit mode.
fn gpr_w(decoder: &Decoder<'_>) -> (usize, Register) {
    if decoder.is64b_mode && decoder.is_rex_w() {
        (1, Register::RAX)
    } else {
        (0, Register::EAX)
    }
}

/// Register named by bits 7:4 of a trailing imm8 (`/is4`).
fn is4(decoder: &mut Decoder<'_>, base: Register) -> Register {
    let index = decoder.read_u8() >> 4;
    let index = if decoder.is64b_mode { index } else { index & 7 };
    base.offset(index)
}

// ---- plain vector forms -------------------------------------------------------------

/// `vzeroupper`, `vzeroall`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexSimple {
    pub code: Code,
}

impl DecodeNode for VexSimple {
    fn has_modrm(&self) -> bool {
        false
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVHW {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub base_reg3: Register,
}

impl DecodeNode for VexVHW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg2));
        rm_or_mem(decoder, instruction, 2, self.base_reg3);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVW {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
}

impl DecodeNode for VexVW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        rm_or_mem(decoder, instruction, 1, self.base_reg2);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexWV {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
}

impl DecodeNode for VexWV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        rm_or_mem(decoder, instruction, 0, self.base_reg1);
        instruction.set_op_register(1, reg(decoder, self.base_reg2));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVM {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for VexVM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        mem_only(decoder, instruction, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexMV {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for VexMV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        mem_only(decoder, instruction, 0);
        instruction.set_op_register(1, reg(decoder, self.base_reg));
    }
}

/// `vldmxcsr`, `vstmxcsr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexM {
    pub code: Code,
}

impl DecodeNode for VexM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        mem_only(decoder, instruction, 0);
    }
}

/// Masked load (`vmaskmovps xmm1, xmm2, m128`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVHM {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for VexVHM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        mem_only(decoder, instruction, 2);
    }
}

/// Masked store (`vmaskmovps m128, xmm1, xmm2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexMHV {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for VexMHV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        mem_only(decoder, instruction, 0);
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        instruction.set_op_register(2, reg(decoder, self.base_reg));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVHWIb {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub base_reg3: Register,
}

impl DecodeNode for VexVHWIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg2));
        rm_or_mem(decoder, instruction, 2, self.base_reg3);
        imm8(decoder, instruction, 3);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVWIb {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
}

impl DecodeNode for VexVWIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        rm_or_mem(decoder, instruction, 1, self.base_reg2);
        imm8(decoder, instruction, 2);
    }
}

/// XOP shift/rotate by register (`vprotd xmm1, xmm2/m128, xmm3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVWH {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for VexVWH {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 1, self.base_reg);
        instruction.set_op_register(2, vvvv(decoder, self.base_reg));
    }
}

/// Four-operand blend with the last register in imm8[7:4] (`vblendvps`, XOP `vpcmov` W0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVHWIs4 {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for VexVHWIs4 {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, self.base_reg);
        let last = is4(decoder, self.base_reg);
        instruction.set_op_register(3, last);
    }
}

/// XOP W1 form: the r/m and is4 operands swap places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVHIs4W {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for VexVHIs4W {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 3, self.base_reg);
        let third = is4(decoder, self.base_reg);
        instruction.set_op_register(2, third);
    }
}

/// Shift by immediate with the destination in `vvvv` (`vpsrlw xmm1, xmm2, imm8`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexHRIb {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for VexHRIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        if !reg_only(decoder) {
            return;
        }
        instruction.set_op_register(0, vvvv(decoder, self.base_reg));
        instruction.set_op_register(1, rm_reg(decoder, self.base_reg));
        imm8(decoder, instruction, 2);
    }
}

// ---- general-purpose operands -------------------------------------------------------

/// `vcvtsi2ss xmm1, xmm2, r/m32|r/m64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVHEv {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for VexVHEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, gpr);
    }
}

/// `vpinsrd`/`vpinsrq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVHEvIb {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for VexVHEvIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, gpr);
        imm8(decoder, instruction, 3);
    }
}

/// `vpextrd`/`vpextrq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexEvVIb {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for VexEvVIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        rm_or_mem(decoder, instruction, 0, gpr);
        instruction.set_op_register(1, reg(decoder, self.base_reg));
        imm8(decoder, instruction, 2);
    }
}

/// `vcvttss2si r32|r64, xmm/m32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexGvW {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for VexGvW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, reg(decoder, gpr));
        rm_or_mem(decoder, instruction, 1, self.base_reg);
    }
}

/// `vmovmskps r32|r64, xmm` (register form only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexGvRx {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for VexGvRx {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        if !reg_only(decoder) {
            return;
        }
        instruction.set_op_register(0, reg(decoder, gpr));
        instruction.set_op_register(1, rm_reg(decoder, self.base_reg));
    }
}

// ---- opmask registers ---------------------------------------------------------------
// k0-k7 only: REX-style extension bits and vvvv[3] must be clear.

fn k_reg(decoder: &mut Decoder<'_>) -> Register {
    decoder.mark_invalid_if_strict(decoder.state.extra_register_base != 0);
    Register::K0.offset(decoder.state.reg)
}

fn k_vvvv(decoder: &mut Decoder<'_>) -> Register {
    decoder.mark_invalid_if_strict(decoder.state.vvvv_invalid_check > 7);
    Register::K0.offset(decoder.state.vvvv & 7)
}

fn k_rm(decoder: &Decoder<'_>) -> Register {
    Register::K0.offset(decoder.state.rm)
}

/// `kandw k1, k2, k3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVkHkRk {
    pub code: Code,
}

impl DecodeNode for VexVkHkRk {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        if !reg_only(decoder) {
            return;
        }
        let dst = k_reg(decoder);
        let src1 = k_vvvv(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, src1);
        instruction.set_op_register(2, k_rm(decoder));
    }
}

/// `knotw k1, k2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVkRk {
    pub code: Code,
}

impl DecodeNode for VexVkRk {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        if !reg_only(decoder) {
            return;
        }
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, k_rm(decoder));
    }
}

/// `kmovw k1, k2/m16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVkWk {
    pub code: Code,
}

impl DecodeNode for VexVkWk {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        if decoder.state.mod_ == 3 {
            instruction.set_op_register(1, k_rm(decoder));
        } else {
            instruction.set_op_kind(1, OpKind::Memory);
            decoder.read_op_mem(instruction);
        }
    }
}

/// `kmovw m16, k1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexMVk {
    pub code: Code,
}

impl DecodeNode for VexMVk {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        mem_only(decoder, instruction, 0);
        let src = k_reg(decoder);
        instruction.set_op_register(1, src);
    }
}

/// `kmovw k1, r32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVkR {
    pub code: Code,
    pub gpr: Register,
}

impl DecodeNode for VexVkR {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        if !reg_only(decoder) {
            return;
        }
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, rm_reg(decoder, self.gpr));
    }
}

/// `kmovw r32, k1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexGVk {
    pub code: Code,
    pub gpr: Register,
}

impl DecodeNode for VexGVk {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        if !reg_only(decoder) {
            return;
        }
        instruction.set_op_register(0, reg(decoder, self.gpr));
        instruction.set_op_register(1, k_rm(decoder));
    }
}

/// `kshiftrw k1, k2, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVkRkIb {
    pub code: Code,
}

impl DecodeNode for VexVkRkIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        if !reg_only(decoder) {
            return;
        }
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, k_rm(decoder));
        imm8(decoder, instruction, 2);
    }
}

// ---- BMI / TBM ----------------------------------------------------------------------

/// `andn r, r, r/m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexGvHvEv {
    pub codes: [Code; 2],
}

impl DecodeNode for VexGvHvEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, reg(decoder, gpr));
        instruction.set_op_register(1, vvvv(decoder, gpr));
        rm_or_mem(decoder, instruction, 2, gpr);
    }
}

/// `bextr`, `shlx`, `bzhi`: the count register is in `vvvv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexGvEvHv {
    pub codes: [Code; 2],
}

impl DecodeNode for VexGvEvHv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, reg(decoder, gpr));
        rm_or_mem(decoder, instruction, 1, gpr);
        instruction.set_op_register(2, vvvv(decoder, gpr));
    }
}

/// `blsr`, `blsmsk`, `blsi` and the TBM group: destination in `vvvv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexHvEv {
    pub codes: [Code; 2],
}

impl DecodeNode for VexHvEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, vvvv(decoder, gpr));
        rm_or_mem(decoder, instruction, 1, gpr);
    }
}

/// `rorx r, r/m, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexGvEvIb {
    pub codes: [Code; 2],
}

impl DecodeNode for VexGvEvIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, reg(decoder, gpr));
        rm_or_mem(decoder, instruction, 1, gpr);
        imm8(decoder, instruction, 2);
    }
}

/// XOP `bextr r, r/m, imm32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexGvEvId {
    pub codes: [Code; 2],
}

impl DecodeNode for VexGvEvId {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        let (w, gpr) = gpr_w(decoder);
        instruction.code = self.codes[w];
        instruction.set_op_register(0, reg(decoder, gpr));
        rm_or_mem(decoder, instruction, 1, gpr);
        let value = decoder.read_u32();
        instruction.set_immediate(2, OpKind::Immediate32, value as u64);
    }
}

// ---- gathers ------------------------------------------------------------------------

/// `vpgatherdd xmm1, vm32x, xmm2`. Destination, index and mask must be distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVXVsibHX {
    pub code: Code,
    pub vsib_base: Register,
    pub base_reg: Register,
}

impl DecodeNode for VexVXVsibHX {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        if decoder.state.mod_ == 3 {
            decoder.mark_invalid();
            return;
        }
        let dest = decoder.state.reg + decoder.state.extra_register_base;
        let mask = decoder.state.vvvv;
        instruction.set_op_register(0, self.base_reg.offset(dest));
        instruction.set_op_kind(1, OpKind::Memory);
        decoder.read_op_mem_vsib(instruction, self.vsib_base, TupleType::N1);
        instruction.set_op_register(2, self.base_reg.offset(mask));
        let index = instruction.memory.index.index().wrapping_sub(self.vsib_base.index());
        decoder.mark_invalid_if_strict(dest == index || dest == mask || index == mask);
    }
}

// ---- AMX ----------------------------------------------------------------------------

fn tmm_reg(decoder: &mut Decoder<'_>) -> Register {
    decoder.mark_invalid_if_strict(decoder.state.extra_register_base != 0);
    Register::TMM0.offset(decoder.state.reg)
}

/// `tileloadd tmm, sibmem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVTSibmem {
    pub code: Code,
}

impl DecodeNode for VexVTSibmem {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        let tile = tmm_reg(decoder);
        instruction.set_op_register(0, tile);
        if decoder.state.mod_ == 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_kind(1, OpKind::Memory);
        decoder.read_op_mem_sib(instruction);
    }
}

/// `tilestored sibmem, tmm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexSibmemVT {
    pub code: Code,
}

impl DecodeNode for VexSibmemVT {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        if decoder.state.mod_ == 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_kind(0, OpKind::Memory);
        decoder.read_op_mem_sib(instruction);
        let tile = tmm_reg(decoder);
        instruction.set_op_register(1, tile);
    }
}

/// `tdpbssd tmm1, tmm2, tmm3`. All three tiles must differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVTRTHT {
    pub code: Code,
}

impl DecodeNode for VexVTRTHT {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        if !reg_only(decoder) {
            return;
        }
        let state = &decoder.state;
        let (dst, src1, src2) = (state.reg, state.rm, state.vvvv_invalid_check);
        let extended = state.extra_register_base != 0 || state.extra_base_register_base != 0;
        decoder.mark_invalid_if_strict(extended || src2 > 7 || dst == src1 || dst == src2 || src1 == src2);
        instruction.set_op_register(0, Register::TMM0.offset(dst));
        instruction.set_op_register(1, Register::TMM0.offset(src1));
        instruction.set_op_register(2, Register::TMM0.offset(src2 & 7));
    }
}

/// `tilezero tmm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VexVT {
    pub code: Code,
}

impl DecodeNode for VexVT {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        no_vvvv(decoder);
        instruction.code = self.code;
        if !reg_only(decoder) {
            return;
        }
        let tile = tmm_reg(decoder);
        instruction.set_op_register(0, tile);
    }
}
