//! EVEX-encoded (AVX-512) instruction nodes.
//!
//! Every node checks the EVEX attribute bits it does not support: `z` (zeroing), `aaa`
//! (op-mask), `b` (broadcast on memory forms, rounding/SAE on register forms) and a
//! reserved `vvvv`. An unsupported combination marks the instruction invalid in strict
//! mode but the operands are still read, so the length stays correct.

use super::DecodeNode;
use crate::code::Code;
use crate::decoder::{Decoder, StateFlags};
use crate::instruction::{Instruction, OpKind, RoundingControl};
use crate::register::Register;
use crate::tuple_type::TupleType;

fn reg(decoder: &Decoder<'_>, base: Register) -> Register {
    let state = &decoder.state;
    base.offset(state.reg + state.extra_register_base + state.extra_register_base_evex)
}

fn vvvv(decoder: &Decoder<'_>, base: Register) -> Register {
    base.offset(decoder.state.vvvv)
}

fn rm_reg(decoder: &Decoder<'_>, base: Register) -> Register {
    let state = &decoder.state;
    base.offset(state.rm + state.extra_base_register_base + state.extra_base_register_base_evex)
}

fn has_b(decoder: &Decoder<'_>) -> bool {
    decoder.has_flag(StateFlags::B)
}

fn has_z(decoder: &Decoder<'_>) -> bool {
    decoder.has_flag(StateFlags::Z)
}

/// Vector r/m operand. `b` on memory requests an embedded broadcast, which must be set
/// before the displacement is read since it changes the disp8 scale.
fn rm_or_mem(
    decoder: &mut Decoder<'_>,
    instruction: &mut Instruction,
    operand: usize,
    base: Register,
    tuple_type: TupleType,
    can_broadcast: bool,
) {
    if decoder.state.mod_ == 3 {
        instruction.set_op_register(operand, rm_reg(decoder, base));
    } else {
        if has_b(decoder) {
            if can_broadcast {
                instruction.broadcast = true;
            } else {
                decoder.mark_invalid_if_strict(true);
            }
        }
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem_tuple(instruction, tuple_type);
    }
}

fn mem_only(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize, tuple_type: TupleType) {
    if decoder.state.mod_ == 3 {
        decoder.mark_invalid();
        return;
    }
    decoder.mark_invalid_if_strict(has_b(decoder));
    instruction.set_op_kind(operand, OpKind::Memory);
    decoder.read_op_mem_tuple(instruction, tuple_type);
}

/// `b` on a register form of a node without rounding or SAE.
fn no_reg_b(decoder: &mut Decoder<'_>) {
    decoder.mark_invalid_if_strict(decoder.state.mod_ == 3 && has_b(decoder));
}

/// Register form with `b`: `L'L` is a static rounding mode, or just SAE.
fn rounding(decoder: &Decoder<'_>, instruction: &mut Instruction, only_sae: bool) {
    if decoder.state.mod_ == 3 && has_b(decoder) {
        if only_sae {
            instruction.suppress_all_exceptions = true;
        } else {
            instruction.rounding_control = RoundingControl::from_evex_ll(decoder.state.vector_length);
        }
    }
}

fn no_vvvv(decoder: &mut Decoder<'_>) {
    decoder.mark_invalid_if_strict(decoder.state.vvvv_invalid_check != 0);
}

fn no_mask(decoder: &mut Decoder<'_>) {
    decoder.mark_invalid_if_strict(decoder.state.aaa != 0 || has_z(decoder));
}

fn no_zeroing(decoder: &mut Decoder<'_>) {
    decoder.mark_invalid_if_strict(has_z(decoder));
}

fn imm8(decoder: &mut Decoder<'_>, instruction: &mut Instruction, operand: usize) {
    let value = decoder.read_u8();
    instruction.set_immediate(operand, OpKind::Immediate8, value as u64);
}

/// Mask-register destination; only k0-k7 exist.
fn k_reg(decoder: &mut Decoder<'_>) -> Register {
    let state = &decoder.state;
    let extended = state.extra_register_base | state.extra_register_base_evex;
    decoder.mark_invalid_if_strict(extended != 0);
    Register::K0.offset(decoder.state.reg)
}

/// 32- or 64-bit GPR plus the matching scalar tuple type; `W` only widens in 64-bit mode.
fn gpr_w(decoder: &Decoder<'_>) -> (usize, Register, TupleType) {
    if decoder.is64b_mode && decoder.is_rex_w() {
        (1, Register::RAX, TupleType::N8)
    } else {
        (0, Register::EAX, TupleType::N4)
    }
}

fn gpr_reg(decoder: &Decoder<'_>, base: Register) -> Register {
    base.offset(decoder.state.reg + decoder.state.extra_register_base)
}

fn gpr_rm_or_mem(
    decoder: &mut Decoder<'_>,
    instruction: &mut Instruction,
    operand: usize,
    base: Register,
    tuple_type: TupleType,
) {
    if decoder.state.mod_ == 3 {
        let index = decoder.state.rm + decoder.state.extra_base_register_base;
        instruction.set_op_register(operand, base.offset(index));
    } else {
        instruction.set_op_kind(operand, OpKind::Memory);
        decoder.read_op_mem_tuple(instruction, tuple_type);
    }
}

// ---- masked vector destination ------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkHW {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub base_reg3: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexVkHW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_reg_b(decoder);
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg2));
        rm_or_mem(decoder, instruction, 2, self.base_reg3, self.tuple_type, self.can_broadcast);
    }
}

/// `vaddps zmm1{k1}{z}, zmm2, zmm3/m512/m32bcst{er}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkHWEr {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
    pub only_sae: bool,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexVkHWEr {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, self.base_reg, self.tuple_type, self.can_broadcast);
        rounding(decoder, instruction, self.only_sae);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkHWIb {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub base_reg3: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexVkHWIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_reg_b(decoder);
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg2));
        rm_or_mem(decoder, instruction, 2, self.base_reg3, self.tuple_type, self.can_broadcast);
        imm8(decoder, instruction, 3);
    }
}

/// `vrangeps zmm1{k1}{z}, zmm2, zmm3/m512/m32bcst{sae}, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkHWIbEr {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexVkHWIbEr {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, self.base_reg, self.tuple_type, true);
        rounding(decoder, instruction, true);
        imm8(decoder, instruction, 3);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkW {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexVkW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_reg_b(decoder);
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        rm_or_mem(decoder, instruction, 1, self.base_reg2, self.tuple_type, self.can_broadcast);
    }
}

/// `vsqrtps`, `vcvtdq2ps`: rounding (or SAE) on the register form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkWEr {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub tuple_type: TupleType,
    pub only_sae: bool,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexVkWEr {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        rm_or_mem(decoder, instruction, 1, self.base_reg2, self.tuple_type, self.can_broadcast);
        rounding(decoder, instruction, self.only_sae);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkWIb {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexVkWIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_reg_b(decoder);
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        rm_or_mem(decoder, instruction, 1, self.base_reg2, self.tuple_type, self.can_broadcast);
        imm8(decoder, instruction, 2);
    }
}

/// `vrndscaleps zmm1{k1}{z}, zmm2/m512/m32bcst{sae}, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkWIbEr {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexVkWIbEr {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        rm_or_mem(decoder, instruction, 1, self.base_reg2, self.tuple_type, true);
        rounding(decoder, instruction, true);
        imm8(decoder, instruction, 2);
    }
}

/// Masked store (`vmovups zmm2/m512{k1}{z}, zmm1`). Zeroing never applies to a memory
/// destination; on a register destination only if the instruction allows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexWkV {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub tuple_type: TupleType,
    pub allow_zeroing_masking: bool,
}

impl DecodeNode for EvexWkV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        decoder.mark_invalid_if_strict(has_b(decoder));
        if has_z(decoder) && (decoder.state.mod_ != 3 || !self.allow_zeroing_masking) {
            decoder.mark_invalid_if_strict(true);
        }
        rm_or_mem(decoder, instruction, 0, self.base_reg1, self.tuple_type, false);
        instruction.set_op_register(1, reg(decoder, self.base_reg2));
    }
}

/// Shift by immediate with the destination in `vvvv` (`vpsrld zmm1{k1}{z}, zmm2/m512, imm8`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexHkWIb {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexHkWIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_reg_b(decoder);
        instruction.set_op_register(0, vvvv(decoder, self.base_reg1));
        rm_or_mem(decoder, instruction, 1, self.base_reg2, self.tuple_type, self.can_broadcast);
        imm8(decoder, instruction, 2);
    }
}

// ---- mask-register destination ------------------------------------------------------
// A k destination takes merge masking from aaa but never zeroing.

/// `vpcmpeqd k1{k2}, zmm2, zmm3/m512/m32bcst`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexKkHW {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexKkHW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_zeroing(decoder);
        no_reg_b(decoder);
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, self.base_reg, self.tuple_type, self.can_broadcast);
    }
}

/// `vpcmpd k1{k2}, zmm2, zmm3/m512/m32bcst, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexKkHWIb {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexKkHWIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_zeroing(decoder);
        no_reg_b(decoder);
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, self.base_reg, self.tuple_type, self.can_broadcast);
        imm8(decoder, instruction, 3);
    }
}

/// `vcmpps k1{k2}, zmm2, zmm3/m512/m32bcst{sae}, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexKkHWIbSae {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexKkHWIbSae {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_zeroing(decoder);
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, self.base_reg, self.tuple_type, self.can_broadcast);
        rounding(decoder, instruction, true);
        imm8(decoder, instruction, 3);
    }
}

/// `vfpclassps k1{k2}, zmm2/m512/m32bcst, imm8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexKkWIb {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexKkWIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_zeroing(decoder);
        no_reg_b(decoder);
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        rm_or_mem(decoder, instruction, 1, self.base_reg, self.tuple_type, self.can_broadcast);
        imm8(decoder, instruction, 2);
    }
}

/// `vp2intersectd k1+1, zmm2, zmm3/m512/m32bcst`: writes a mask-register pair, unmasked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexKP1HW {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
    pub can_broadcast: bool,
}

impl DecodeNode for EvexKP1HW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_mask(decoder);
        no_reg_b(decoder);
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        rm_or_mem(decoder, instruction, 2, self.base_reg, self.tuple_type, self.can_broadcast);
    }
}

// ---- memory-only and unmasked forms -------------------------------------------------

/// `vbroadcastf32x4 zmm1{k1}{z}, m128`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkM {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexVkM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        mem_only(decoder, instruction, 1, self.tuple_type);
    }
}

/// `vmovntdqa zmm1, m512`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVM {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexVM {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_mask(decoder);
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        mem_only(decoder, instruction, 1, self.tuple_type);
    }
}

/// `vmovntps m512, zmm1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexMV {
    pub code: Code,
    pub base_reg: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexMV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_mask(decoder);
        mem_only(decoder, instruction, 0, self.tuple_type);
        instruction.set_op_register(1, reg(decoder, self.base_reg));
    }
}

/// Unmasked two-operand form, optionally with SAE (`vucomiss xmm1, xmm2/m32{sae}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVW {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub tuple_type: TupleType,
    pub sae: bool,
}

impl DecodeNode for EvexVW {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_mask(decoder);
        if !self.sae {
            no_reg_b(decoder);
        }
        instruction.set_op_register(0, reg(decoder, self.base_reg1));
        rm_or_mem(decoder, instruction, 1, self.base_reg2, self.tuple_type, false);
        if self.sae {
            rounding(decoder, instruction, true);
        }
    }
}

/// `vmovq xmm1/m64, xmm2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexWV {
    pub code: Code,
    pub base_reg1: Register,
    pub base_reg2: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexWV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_mask(decoder);
        no_reg_b(decoder);
        rm_or_mem(decoder, instruction, 0, self.base_reg1, self.tuple_type, false);
        instruction.set_op_register(1, reg(decoder, self.base_reg2));
    }
}

// ---- general-purpose operands -------------------------------------------------------

/// `vpbroadcastd zmm1{k1}{z}, r32` (register source only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkEv {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for EvexVkEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr, _) = gpr_w(decoder);
        instruction.code = self.codes[w];
        no_vvvv(decoder);
        no_reg_b(decoder);
        if decoder.state.mod_ != 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        let index = decoder.state.rm + decoder.state.extra_base_register_base;
        instruction.set_op_register(1, gpr.offset(index));
    }
}

/// `vmovd xmm1, r/m32` / `vmovq xmm1, r/m64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVXEv {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for EvexVXEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr, tuple_type) = gpr_w(decoder);
        instruction.code = self.codes[w];
        no_vvvv(decoder);
        no_mask(decoder);
        decoder.mark_invalid_if_strict(has_b(decoder));
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        gpr_rm_or_mem(decoder, instruction, 1, gpr, tuple_type);
    }
}

/// `vmovd r/m32, xmm1` / `vmovq r/m64, xmm1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexEvVX {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for EvexEvVX {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr, tuple_type) = gpr_w(decoder);
        instruction.code = self.codes[w];
        no_vvvv(decoder);
        no_mask(decoder);
        decoder.mark_invalid_if_strict(has_b(decoder));
        gpr_rm_or_mem(decoder, instruction, 0, gpr, tuple_type);
        instruction.set_op_register(1, reg(decoder, self.base_reg));
    }
}

/// `vcvtusi2sd xmm1, xmm2, r/m32` (no rounding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVHEv {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for EvexVHEv {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr, tuple_type) = gpr_w(decoder);
        instruction.code = self.codes[w];
        no_mask(decoder);
        decoder.mark_invalid_if_strict(has_b(decoder));
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        gpr_rm_or_mem(decoder, instruction, 2, gpr, tuple_type);
    }
}

/// `vcvtsi2ss xmm1, xmm2, r/m32{er}`. Rounding only on the register form; `b` with a
/// memory source is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVHEvEr {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for EvexVHEvEr {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr, tuple_type) = gpr_w(decoder);
        instruction.code = self.codes[w];
        no_mask(decoder);
        decoder.mark_invalid_if_strict(decoder.state.mod_ != 3 && has_b(decoder));
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        gpr_rm_or_mem(decoder, instruction, 2, gpr, tuple_type);
        rounding(decoder, instruction, false);
    }
}

/// `vpinsrd`/`vpinsrq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVHEvIb {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for EvexVHEvIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr, tuple_type) = gpr_w(decoder);
        instruction.code = self.codes[w];
        no_mask(decoder);
        decoder.mark_invalid_if_strict(has_b(decoder));
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, vvvv(decoder, self.base_reg));
        gpr_rm_or_mem(decoder, instruction, 2, gpr, tuple_type);
        imm8(decoder, instruction, 3);
    }
}

/// `vpextrd`/`vpextrq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexEdVIb {
    pub codes: [Code; 2],
    pub base_reg: Register,
}

impl DecodeNode for EvexEdVIb {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr, tuple_type) = gpr_w(decoder);
        instruction.code = self.codes[w];
        no_vvvv(decoder);
        no_mask(decoder);
        decoder.mark_invalid_if_strict(has_b(decoder));
        gpr_rm_or_mem(decoder, instruction, 0, gpr, tuple_type);
        instruction.set_op_register(1, reg(decoder, self.base_reg));
        imm8(decoder, instruction, 2);
    }
}

/// `vcvtss2si r32|r64, xmm1/m32{er}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexGvWEr {
    pub codes: [Code; 2],
    pub base_reg: Register,
    pub tuple_type: TupleType,
    pub only_sae: bool,
}

impl DecodeNode for EvexGvWEr {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        let (w, gpr, _) = gpr_w(decoder);
        instruction.code = self.codes[w];
        no_vvvv(decoder);
        no_mask(decoder);
        instruction.set_op_register(0, gpr_reg(decoder, gpr));
        rm_or_mem(decoder, instruction, 1, self.base_reg, self.tuple_type, false);
        rounding(decoder, instruction, self.only_sae);
    }
}

// ---- gathers and scatters -----------------------------------------------------------
// These need a non-zero mask (it doubles as the completion mask) and forbid zeroing.

fn vsib_mask(decoder: &mut Decoder<'_>) {
    decoder.mark_invalid_if_strict(decoder.state.aaa == 0 || has_z(decoder) || has_b(decoder));
}

/// `vpgatherdd zmm1{k1}, vm32z`. The destination must differ from the index register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVkVsib {
    pub code: Code,
    pub base_reg: Register,
    pub vsib_base: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexVkVsib {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        vsib_mask(decoder);
        if decoder.state.mod_ == 3 {
            decoder.mark_invalid();
            return;
        }
        let dest = decoder.state.reg + decoder.state.extra_register_base + decoder.state.extra_register_base_evex;
        instruction.set_op_register(0, self.base_reg.offset(dest));
        instruction.set_op_kind(1, OpKind::Memory);
        decoder.read_op_mem_vsib(instruction, self.vsib_base, self.tuple_type);
        let index = instruction.memory.index.index().wrapping_sub(self.vsib_base.index());
        decoder.mark_invalid_if_strict(dest == index);
    }
}

/// `vpscatterdd vm32z{k1}, zmm1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVsibkV {
    pub code: Code,
    pub vsib_base: Register,
    pub base_reg: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexVsibkV {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        vsib_mask(decoder);
        if decoder.state.mod_ == 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_kind(0, OpKind::Memory);
        decoder.read_op_mem_vsib(instruction, self.vsib_base, self.tuple_type);
        instruction.set_op_register(1, reg(decoder, self.base_reg));
    }
}

/// Gather/scatter prefetch (`vgatherpf0dps vm32z{k1}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVsibk {
    pub code: Code,
    pub vsib_base: Register,
    pub tuple_type: TupleType,
}

impl DecodeNode for EvexVsibk {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        vsib_mask(decoder);
        if decoder.state.mod_ == 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_kind(0, OpKind::Memory);
        decoder.read_op_mem_vsib(instruction, self.vsib_base, self.tuple_type);
    }
}

// ---- mask <-> vector ----------------------------------------------------------------

/// `vpmovm2d zmm1, k1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexVRk {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for EvexVRk {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_mask(decoder);
        no_reg_b(decoder);
        if decoder.state.mod_ != 3 {
            decoder.mark_invalid();
            return;
        }
        instruction.set_op_register(0, reg(decoder, self.base_reg));
        instruction.set_op_register(1, Register::K0.offset(decoder.state.rm));
    }
}

/// `vpmovd2m k1, zmm1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvexKR {
    pub code: Code,
    pub base_reg: Register,
}

impl DecodeNode for EvexKR {
    fn has_modrm(&self) -> bool {
        true
    }

    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
        instruction.code = self.code;
        no_vvvv(decoder);
        no_mask(decoder);
        no_reg_b(decoder);
        if decoder.state.mod_ != 3 {
            decoder.mark_invalid();
            return;
        }
        let dst = k_reg(decoder);
        instruction.set_op_register(0, dst);
        instruction.set_op_register(1, rm_reg(decoder, self.base_reg));
    }
}
