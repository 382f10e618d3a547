use pretty_assertions::assert_eq;
use x86_rs::{Bitness, Code, Decoder, DecoderOptions, Instruction, OpKind, Register, RoundingControl};

fn decode(bitness: Bitness, bytes: &[u8]) -> Instruction {
    Decoder::new(bitness, bytes, 0, DecoderOptions::empty()).decode()
}

fn regs(i: &Instruction) -> Vec<Register> {
    (0..i.op_count as usize).map(|n| i.op_register(n)).collect()
}

#[test]
fn vex2_and_vex3() {
    // vaddps xmm1, xmm1, xmm2
    for bitness in [Bitness::Bits32, Bitness::Bits64] {
        let i = decode(bitness, &[0xc5, 0xf0, 0x58, 0xca]);
        assert_eq!(i.code, Code::VEX_Vaddps_xmm_xmm_xmmm128);
        assert_eq!(regs(&i), vec![Register::XMM1, Register::XMM1, Register::XMM2]);
        assert_eq!(i.len, 4);
    }

    // vaddps ymm1, ymm1, ymm2
    let i = decode(Bitness::Bits64, &[0xc5, 0xf4, 0x58, 0xca]);
    assert_eq!(i.code, Code::VEX_Vaddps_ymm_ymm_ymmm256);
    assert_eq!(regs(&i), vec![Register::YMM1, Register::YMM1, Register::YMM2]);

    // vaddps ymm1, ymm0, ymm2
    let i = decode(Bitness::Bits64, &[0xc4, 0xe1, 0x7c, 0x58, 0xca]);
    assert_eq!(i.code, Code::VEX_Vaddps_ymm_ymm_ymmm256);
    assert_eq!(regs(&i), vec![Register::YMM1, Register::YMM0, Register::YMM2]);
    assert_eq!(i.len, 5);
}

#[test]
fn vex_escape_is_lds_les_on_memory_forms_outside_long_mode() {
    let i = decode(Bitness::Bits32, &[0xc5, 0x06]);
    assert_eq!(i.code, Code::Lds_r32_m1632);
    assert_eq!(i.op_register(0), Register::EAX);
    assert_eq!(i.op_kind(1), OpKind::Memory);
    assert_eq!(i.memory.base, Register::ESI);
    assert_eq!(i.len, 2);

    let i = decode(Bitness::Bits32, &[0xc4, 0x06]);
    assert_eq!(i.code, Code::Les_r32_m1632);
}

#[test]
fn legacy_prefixes_before_vex_are_rejected() {
    let bytes = [0x66, 0xc5, 0xf0, 0x58, 0xca];
    let i = decode(Bitness::Bits64, &bytes);
    assert!(i.is_invalid());
    assert_eq!(i.len, 5);

    let i = Decoder::new(Bitness::Bits64, &bytes, 0, DecoderOptions::NO_INVALID_CHECK).decode();
    assert!(!i.is_invalid());
}

#[test]
fn xop_escape_and_pop() {
    // pop eax
    let i = decode(Bitness::Bits32, &[0x8f, 0xc0]);
    assert_eq!(i.code, Code::Pop_rm32);
    assert_eq!(i.op_register(0), Register::EAX);

    // blcfill eax, ebx
    let i = decode(Bitness::Bits64, &[0x8f, 0xe9, 0x78, 0x01, 0xcb]);
    assert_eq!(i.code, Code::XOP_Blcfill_r32_rm32);
    assert_eq!(regs(&i), vec![Register::EAX, Register::EBX]);
    assert_eq!(i.len, 5);

    // blcfill rax, rbx
    let i = decode(Bitness::Bits64, &[0x8f, 0xe9, 0xf8, 0x01, 0xcb]);
    assert_eq!(i.code, Code::XOP_Blcfill_r64_rm64);
    assert_eq!(regs(&i), vec![Register::RAX, Register::RBX]);
}

#[test]
fn evex_memory_operand_uses_compressed_displacement() {
    // vaddps zmm1, zmm2, [rax+0x40]
    let i = decode(Bitness::Bits64, &[0x62, 0xf1, 0x6c, 0x48, 0x58, 0x48, 0x01]);
    assert_eq!(i.code, Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
    assert_eq!(i.len, 7);
    assert_eq!(i.op_register(0), Register::ZMM1);
    assert_eq!(i.op_register(1), Register::ZMM2);
    assert_eq!(i.op_kind(2), OpKind::Memory);
    assert_eq!(i.memory.base, Register::RAX);
    assert_eq!(i.memory.displacement, 0x40);
    assert_eq!(i.memory.displ_size, 1);
    assert!(!i.broadcast);
    assert_eq!(i.op_mask, Register::None);

    // vaddps zmm1, zmm2, [rax+4]{1to16}
    let i = decode(Bitness::Bits64, &[0x62, 0xf1, 0x6c, 0x58, 0x58, 0x48, 0x01]);
    assert_eq!(i.code, Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
    assert!(i.broadcast);
    assert_eq!(i.memory.displacement, 4);
}

#[test]
fn evex_register_form_rounding_and_masking() {
    // vaddps zmm1, zmm2, zmm3, {rd-sae}
    let i = decode(Bitness::Bits64, &[0x62, 0xf1, 0x6c, 0x38, 0x58, 0xcb]);
    assert_eq!(i.code, Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
    assert_eq!(regs(&i), vec![Register::ZMM1, Register::ZMM2, Register::ZMM3]);
    assert_eq!(i.rounding_control, RoundingControl::RoundDown);

    // vaddps zmm1{k1}{z}, zmm2, zmm3
    let i = decode(Bitness::Bits64, &[0x62, 0xf1, 0x6c, 0xc9, 0x58, 0xcb]);
    assert_eq!(i.code, Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
    assert_eq!(i.op_mask, Register::K1);
    assert!(i.zeroing_masking);
    assert_eq!(i.rounding_control, RoundingControl::None);

    // {z} without a mask register
    let i = decode(Bitness::Bits64, &[0x62, 0xf1, 0x6c, 0xc8, 0x58, 0xcb]);
    assert!(i.is_invalid());
    assert_eq!(i.len, 6);
}

#[test]
fn evex_zeroing_store_to_memory_is_invalid() {
    // vmovups [rax]{k1}{z}, zmm0
    let bytes = [0x62, 0xf1, 0x7c, 0xc9, 0x11, 0x00];
    let i = decode(Bitness::Bits64, &bytes);
    assert!(i.is_invalid());
    assert_eq!(i.len, 6);

    // Merge-masking is fine.
    let i = decode(Bitness::Bits64, &[0x62, 0xf1, 0x7c, 0x49, 0x11, 0x00]);
    assert_eq!(i.code, Code::EVEX_Vmovups_zmmm512_k1z_zmm);
    assert_eq!(i.op_kind(0), OpKind::Memory);
    assert_eq!(i.op_register(1), Register::ZMM0);
    assert_eq!(i.op_mask, Register::K1);
}

#[test]
fn evex_escape_outside_long_mode() {
    // bound eax, [eax]
    let i = decode(Bitness::Bits32, &[0x62, 0x00]);
    assert_eq!(i.code, Code::Bound_r32_m3232);
    assert_eq!(i.op_register(0), Register::EAX);
    assert_eq!(i.memory.base, Register::EAX);
    assert_eq!(i.len, 2);

    let i = decode(Bitness::Bits32, &[0x62, 0xf1, 0x6c, 0x48, 0x58, 0xcb]);
    assert_eq!(i.code, Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
    assert_eq!(regs(&i), vec![Register::ZMM1, Register::ZMM2, Register::ZMM3]);
}

#[test]
fn mvex_is_not_supported() {
    let i = decode(Bitness::Bits64, &[0x62, 0xf1, 0x68, 0x48, 0x58, 0xcb]);
    assert!(i.is_invalid());
}
