//! Plain-text rendering of decoded instructions: `Code op0, op1, ...`.

use std::fmt::Write as _;

use crate::instruction::{Instruction, OpKind, PrefixFlags, RoundingControl};
use crate::register::Register;

pub fn fmt_register(register: Register) -> String {
    format!("{register:?}").to_ascii_lowercase()
}

/// Renders an instruction. Invalid instructions render as `(bad)`.
pub fn fmt_instruction(instr: &Instruction) -> String {
    if instr.is_invalid() {
        return "(bad)".to_string();
    }
    let mut out = String::new();
    for (flag, name) in [
        (PrefixFlags::LOCK, "lock "),
        (PrefixFlags::XACQUIRE, "xacquire "),
        (PrefixFlags::XRELEASE, "xrelease "),
        (PrefixFlags::REP, "rep "),
        (PrefixFlags::REPNE, "repne "),
    ] {
        if instr.prefixes.contains(flag) {
            out.push_str(name);
        }
    }
    let _ = write!(out, "{:?}", instr.code);
    for n in 0..instr.op_count as usize {
        out.push_str(if n == 0 { " " } else { ", " });
        out.push_str(&fmt_operand(instr, n));
        if n == 0 {
            decorate_first(instr, &mut out);
        }
    }
    match instr.rounding_control {
        RoundingControl::None if instr.suppress_all_exceptions => out.push_str(", {sae}"),
        RoundingControl::None => {}
        RoundingControl::RoundToNearest => out.push_str(", {rn-sae}"),
        RoundingControl::RoundDown => out.push_str(", {rd-sae}"),
        RoundingControl::RoundUp => out.push_str(", {ru-sae}"),
        RoundingControl::RoundTowardZero => out.push_str(", {rz-sae}"),
    }
    out
}

fn decorate_first(instr: &Instruction, out: &mut String) {
    if instr.op_mask != Register::None {
        let _ = write!(out, "{{{}}}", fmt_register(instr.op_mask));
    }
    if instr.zeroing_masking {
        out.push_str("{z}");
    }
}

fn fmt_operand(instr: &Instruction, n: usize) -> String {
    let kind = instr.op_kind(n);
    match kind {
        OpKind::Register => fmt_register(instr.op_register(n)),
        OpKind::NearBranch16 | OpKind::NearBranch32 | OpKind::NearBranch64 => format!("{:#x}", instr.near_branch),
        OpKind::FarBranch16 | OpKind::FarBranch32 => {
            format!("{:#x}:{:#x}", instr.far_branch_selector, instr.far_branch)
        }
        OpKind::MemorySegSI => string_operand(instr, "si"),
        OpKind::MemorySegESI => string_operand(instr, "esi"),
        OpKind::MemorySegRSI => string_operand(instr, "rsi"),
        OpKind::MemorySegDI => string_operand(instr, "di"),
        OpKind::MemorySegEDI => string_operand(instr, "edi"),
        OpKind::MemorySegRDI => string_operand(instr, "rdi"),
        OpKind::MemoryESDI => "es:[di]".to_string(),
        OpKind::MemoryESEDI => "es:[edi]".to_string(),
        OpKind::MemoryESRDI => "es:[rdi]".to_string(),
        OpKind::Memory => fmt_memory(instr),
        _ => match instr.immediate_value(kind) {
            Some(value) => format!("{value:#x}"),
            None => "?".to_string(),
        },
    }
}

fn string_operand(instr: &Instruction, reg: &str) -> String {
    let seg = match instr.segment_prefix {
        Register::None => "ds".to_string(),
        seg => fmt_register(seg),
    };
    format!("{seg}:[{reg}]")
}

fn fmt_memory(instr: &Instruction) -> String {
    let mem = &instr.memory;
    let mut out = String::new();
    if instr.segment_prefix != Register::None {
        let _ = write!(out, "{}:", fmt_register(instr.segment_prefix));
    }
    out.push('[');
    if matches!(mem.base, Register::RIP | Register::EIP) {
        // Already resolved to the absolute target.
        let _ = write!(out, "{:#x}", mem.displacement);
    } else {
        let mut terms = Vec::new();
        if mem.base != Register::None {
            terms.push(fmt_register(mem.base));
        }
        if mem.index != Register::None {
            terms.push(if mem.scale > 1 {
                format!("{}*{}", fmt_register(mem.index), mem.scale)
            } else {
                fmt_register(mem.index)
            });
        }
        out.push_str(&terms.join("+"));
        let disp = mem.displacement as i64;
        if terms.is_empty() {
            let _ = write!(out, "{:#x}", mem.displacement);
        } else if mem.displ_size != 0 && disp < 0 {
            let _ = write!(out, "-{:#x}", disp.unsigned_abs());
        } else if mem.displ_size != 0 && disp != 0 {
            let _ = write!(out, "+{disp:#x}");
        }
    }
    out.push(']');
    if instr.broadcast {
        out.push_str("{bcst}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Code;
    use crate::instruction::MemoryOperand;

    #[test]
    fn invalid_renders_bad() {
        assert_eq!(fmt_instruction(&Instruction::default()), "(bad)");
    }

    #[test]
    fn memory_with_negative_displacement() {
        let mut instr = Instruction { code: Code::Add_rm32_r32, ..Instruction::default() };
        instr.set_op_kind(0, OpKind::Memory);
        instr.set_op_register(1, Register::ECX);
        instr.memory = MemoryOperand {
            base: Register::EBP,
            index: Register::ESI,
            scale: 4,
            displacement: (-8i64) as u64,
            displ_size: 1,
        };
        assert_eq!(fmt_instruction(&instr), "Add_rm32_r32 [ebp+esi*4-0x8], ecx");
    }

    #[test]
    fn mask_and_zeroing_follow_first_operand() {
        let mut instr = Instruction { code: Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er, ..Instruction::default() };
        instr.set_op_register(0, Register::ZMM1);
        instr.set_op_register(1, Register::ZMM2);
        instr.set_op_register(2, Register::ZMM3);
        instr.op_mask = Register::K1;
        instr.zeroing_masking = true;
        instr.rounding_control = RoundingControl::RoundUp;
        assert_eq!(fmt_instruction(&instr), "EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er zmm1{k1}{z}, zmm2, zmm3, {ru-sae}");
    }
}
