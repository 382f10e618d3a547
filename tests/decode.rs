use pretty_assertions::assert_eq;
use x86_rs::{Bitness, Code, Decoder, DecoderOptions, Instruction, OpKind, PrefixFlags, Register};

fn decode_at(bitness: Bitness, ip: u64, bytes: &[u8]) -> Instruction {
    Decoder::new(bitness, bytes, ip, DecoderOptions::empty()).decode()
}

fn decode(bitness: Bitness, bytes: &[u8]) -> Instruction {
    decode_at(bitness, 0, bytes)
}

fn decode_with(bitness: Bitness, options: DecoderOptions, bytes: &[u8]) -> Instruction {
    Decoder::new(bitness, bytes, 0, options).decode()
}

#[test]
fn operand_size_follows_bitness() {
    // add eax, ebx
    let cases = [
        (Bitness::Bits16, Code::Add_rm16_r16, Register::AX, Register::BX),
        (Bitness::Bits32, Code::Add_rm32_r32, Register::EAX, Register::EBX),
        (Bitness::Bits64, Code::Add_rm32_r32, Register::EAX, Register::EBX),
    ];
    for (bitness, code, dst, src) in cases {
        let i = decode(bitness, &[0x01, 0xd8]);
        assert_eq!(i.code, code, "{bitness:?}");
        assert_eq!(i.len, 2);
        assert_eq!(i.op_count, 2);
        assert_eq!(i.op_register(0), dst);
        assert_eq!(i.op_register(1), src);
    }

    let i = decode(Bitness::Bits64, &[0x48, 0x01, 0xd8]);
    assert_eq!(i.code, Code::Add_rm64_r64);
    assert_eq!((i.op_register(0), i.op_register(1)), (Register::RAX, Register::RBX));

    let i = decode(Bitness::Bits16, &[0x66, 0x01, 0xd8]);
    assert_eq!(i.code, Code::Add_rm32_r32);
    assert!(i.prefixes.contains(PrefixFlags::OPERAND_SIZE));
}

#[test]
fn near_return_per_mode() {
    for (bitness, code) in [
        (Bitness::Bits16, Code::Retnw),
        (Bitness::Bits32, Code::Retnd),
        (Bitness::Bits64, Code::Retnq),
    ] {
        let i = decode(bitness, &[0xc3]);
        assert_eq!(i.code, code);
        assert_eq!(i.len, 1);
        assert_eq!(i.op_count, 0);
    }
}

#[test]
fn nop_xchg_and_pause() {
    assert_eq!(decode(Bitness::Bits64, &[0x90]).code, Code::Nopd);
    assert_eq!(decode(Bitness::Bits64, &[0x48, 0x90]).code, Code::Nopq);
    assert_eq!(decode(Bitness::Bits32, &[0x66, 0x90]).code, Code::Nopw);

    // REX.B turns 90 into a real exchange with r8d.
    let i = decode(Bitness::Bits64, &[0x41, 0x90]);
    assert_eq!(i.code, Code::Xchg_r32_EAX);
    assert_eq!((i.op_register(0), i.op_register(1)), (Register::R8D, Register::EAX));
    assert_eq!(i.len, 2);

    let i = decode(Bitness::Bits32, &[0x91]);
    assert_eq!(i.code, Code::Xchg_r32_EAX);
    assert_eq!((i.op_register(0), i.op_register(1)), (Register::ECX, Register::EAX));

    let i = decode(Bitness::Bits64, &[0xf3, 0x90]);
    assert_eq!(i.code, Code::Pause);
    assert!(!i.prefixes.contains(PrefixFlags::REP));

    let i = Decoder::new(Bitness::Bits64, &[0xf3, 0x90], 0, DecoderOptions::NO_PAUSE).decode();
    assert_eq!(i.code, Code::Nopd);
}

#[test]
fn bitness_dependent_opcodes() {
    assert_eq!(decode(Bitness::Bits16, &[0x06]).code, Code::Pushw_ES);
    let i = decode(Bitness::Bits32, &[0x06]);
    assert_eq!(i.code, Code::Pushd_ES);
    assert_eq!(i.op_register(0), Register::ES);

    let i = decode(Bitness::Bits64, &[0x06]);
    assert!(i.is_invalid());
    assert_eq!(i.len, 1);
}

#[test]
fn lock_is_only_legal_on_memory_destinations() {
    // lock add [eax], ebx
    let i = decode(Bitness::Bits32, &[0xf0, 0x01, 0x18]);
    assert_eq!(i.code, Code::Add_rm32_r32);
    assert!(i.prefixes.contains(PrefixFlags::LOCK));
    assert_eq!(i.op_kind(0), OpKind::Memory);
    assert_eq!(i.memory.base, Register::EAX);

    let i = decode(Bitness::Bits32, &[0xf0, 0x01, 0xd8]);
    assert!(i.is_invalid());
    assert_eq!(i.len, 3);

    let i = Decoder::new(Bitness::Bits32, &[0xf0, 0x01, 0xd8], 0, DecoderOptions::NO_INVALID_CHECK).decode();
    assert_eq!(i.code, Code::Add_rm32_r32);
}

#[test]
fn mandatory_prefix_is_consumed() {
    let i = decode(Bitness::Bits64, &[0xf3, 0x0f, 0x10, 0xc1]);
    assert_eq!(i.code, Code::Movss_xmm_xmmm32);
    assert_eq!((i.op_register(0), i.op_register(1)), (Register::XMM0, Register::XMM1));
    assert!(!i.prefixes.contains(PrefixFlags::REP));

    let i = decode(Bitness::Bits64, &[0x66, 0x0f, 0x10, 0xc1]);
    assert_eq!(i.code, Code::Movupd_xmm_xmmm128);
    assert!(!i.prefixes.contains(PrefixFlags::OPERAND_SIZE));

    assert_eq!(decode(Bitness::Bits64, &[0x0f, 0x10, 0xc1]).code, Code::Movups_xmm_xmmm128);
}

#[test]
fn rip_relative_displacement_is_absolute() {
    // mov rax, [rip+0x10]
    let i = decode_at(Bitness::Bits64, 0x1000, &[0x48, 0x8b, 0x05, 0x10, 0x00, 0x00, 0x00]);
    assert_eq!(i.code, Code::Mov_r64_rm64);
    assert_eq!(i.len, 7);
    assert_eq!(i.memory.base, Register::RIP);
    assert_eq!(i.memory.displacement, 0x1017);
    assert_eq!(i.memory.displ_size, 4);

    // The same ModRM is an absolute disp32 outside 64-bit mode.
    let i = decode_at(Bitness::Bits32, 0x1000, &[0x8b, 0x05, 0x10, 0x00, 0x00, 0x00]);
    assert_eq!(i.code, Code::Mov_r32_rm32);
    assert_eq!(i.memory.base, Register::None);
    assert_eq!(i.memory.displacement, 0x10);
}

#[test]
fn sib_and_segment_override() {
    // mov eax, fs:[ebx+ecx*4-8]
    let i = decode(Bitness::Bits32, &[0x64, 0x8b, 0x44, 0x8b, 0xf8]);
    assert_eq!(i.code, Code::Mov_r32_rm32);
    assert_eq!(i.segment_prefix, Register::FS);
    assert_eq!(i.memory.base, Register::EBX);
    assert_eq!(i.memory.index, Register::ECX);
    assert_eq!(i.memory.scale, 4);
    assert_eq!(i.memory.displacement as u32, 0xffff_fff8);
    assert_eq!(i.memory.displ_size, 1);
    assert_eq!(i.len, 5);
}

#[test]
fn relative_branch_targets() {
    let i = decode_at(Bitness::Bits64, 0x1000, &[0xe8, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(i.code, Code::Call_rel32_64);
    assert_eq!(i.op_kind(0), OpKind::NearBranch64);
    assert_eq!(i.near_branch, 0x1105);

    let i = decode_at(Bitness::Bits32, 0x2000, &[0xeb, 0xfe]);
    assert_eq!(i.code, Code::Jmp_rel8_32);
    assert_eq!(i.near_branch, 0x2000);
}

#[test]
fn amd_honours_operand_size_on_near_branches() {
    let i = decode_with(Bitness::Bits64, DecoderOptions::AMD, &[0x66, 0xe8, 0x10, 0x00]);
    assert_eq!(i.code, Code::Call_rel16);
    assert_eq!(i.len, 4);

    let i = decode(Bitness::Bits64, &[0x66, 0xe8, 0x10, 0x00, 0x00, 0x00]);
    assert_eq!(i.code, Code::Call_rel32_64);
    assert_eq!(i.len, 6);

    assert_eq!(decode_with(Bitness::Bits64, DecoderOptions::AMD, &[0x66, 0xff, 0xd0]).code, Code::Call_rm16);
    assert_eq!(decode(Bitness::Bits64, &[0x66, 0xff, 0xd0]).code, Code::Call_rm64);
}

#[test]
fn mpx_replaces_reserved_nops() {
    // bndcl bnd0, rcx
    let bytes = [0xf3, 0x0f, 0x1a, 0xc1];
    let i = decode_with(Bitness::Bits64, DecoderOptions::MPX, &bytes);
    assert_eq!(i.code, Code::Bndcl_bnd_rm64);
    assert_eq!((i.op_register(0), i.op_register(1)), (Register::BND0, Register::RCX));
    assert_eq!(i.len, 4);
    assert_eq!(decode(Bitness::Bits64, &bytes).code, Code::Reservednop_rm32_r32_0F1A);

    // bndmov bnd0, bnd1
    let bytes = [0x66, 0x0f, 0x1a, 0xc1];
    let i = decode_with(Bitness::Bits64, DecoderOptions::MPX, &bytes);
    assert_eq!(i.code, Code::Bndmov_bnd_bndm128);
    assert_eq!((i.op_register(0), i.op_register(1)), (Register::BND0, Register::BND1));
    assert_eq!(decode(Bitness::Bits64, &bytes).code, Code::Reservednop_rm16_r16_0F1A);
}

#[test]
fn opcode_variant_options() {
    // prefetcht0 [rax]
    let bytes = [0x0f, 0x18, 0x08];
    assert_eq!(decode(Bitness::Bits64, &bytes).code, Code::Prefetcht0_m8);
    let i = decode_with(Bitness::Bits64, DecoderOptions::FORCE_RESERVED_NOP, &bytes);
    assert_eq!(i.code, Code::Reservednop_rm32_r32_0F18);
    assert_eq!(i.len, 3);

    // umov cl, al
    let bytes = [0x0f, 0x10, 0xc1];
    let i = decode_with(Bitness::Bits32, DecoderOptions::UMOV, &bytes);
    assert_eq!(i.code, Code::Umov_rm8_r8);
    assert_eq!((i.op_register(0), i.op_register(1)), (Register::CL, Register::AL));
    assert_eq!(decode(Bitness::Bits32, &bytes).code, Code::Movups_xmm_xmmm128);
    assert_eq!(decode_with(Bitness::Bits32, DecoderOptions::UMOV, &[0x0f, 0x11, 0xc8]).code, Code::Umov_rm32_r32);

    // jmpe eax
    let bytes = [0x0f, 0x00, 0xf0];
    let i = decode(Bitness::Bits32, &bytes);
    assert!(i.is_invalid());
    assert_eq!(i.len, 3);
    let i = decode_with(Bitness::Bits32, DecoderOptions::JMPE, &bytes);
    assert_eq!(i.code, Code::Jmpe_rm32);
    assert_eq!(i.op_register(0), Register::EAX);

    assert_eq!(decode(Bitness::Bits64, &[0xf3, 0x0f, 0x09]).code, Code::Wbnoinvd);
    assert_eq!(decode_with(Bitness::Bits64, DecoderOptions::NO_WBNOINVD, &[0xf3, 0x0f, 0x09]).code, Code::Wbinvd);
}

#[test]
fn length_is_capped_at_fifteen_bytes() {
    let mut bytes = vec![0x66; 14];
    bytes.push(0x90);
    let i = decode(Bitness::Bits32, &bytes);
    assert_eq!(i.code, Code::Nopw);
    assert_eq!(i.len, 15);

    let mut bytes = vec![0x66; 15];
    bytes.push(0x90);
    let i = decode(Bitness::Bits32, &bytes);
    assert!(i.is_invalid());
    assert_eq!(i.len, 15);
}

#[test]
fn truncated_input_is_invalid() {
    let i = decode(Bitness::Bits64, &[0x01]);
    assert!(i.is_invalid());
    assert_eq!(i.len, 1);

    let i = decode(Bitness::Bits64, &[0x48, 0x8b, 0x05, 0x10]);
    assert!(i.is_invalid());
    assert_eq!(i.len, 4);
}

#[test]
fn iterator_walks_the_buffer() {
    // nop; add eax, ecx; ret
    let bytes = [0x90, 0x01, 0xc8, 0xc3];
    let decoded: Vec<(Code, u64)> =
        Decoder::new(Bitness::Bits32, &bytes, 0x400, DecoderOptions::empty()).map(|i| (i.code, i.ip)).collect();
    assert_eq!(decoded, vec![(Code::Nopd, 0x400), (Code::Add_rm32_r32, 0x401), (Code::Retnd, 0x403)]);
}

#[test]
fn decode_out_resets_previous_state() {
    let bytes = [0xf0, 0x01, 0x18, 0xc3];
    let mut decoder = Decoder::new(Bitness::Bits32, &bytes, 0, DecoderOptions::empty());
    let mut i = Instruction::default();
    decoder.decode_out(&mut i);
    assert!(i.prefixes.contains(PrefixFlags::LOCK));
    decoder.decode_out(&mut i);
    assert_eq!(i.code, Code::Retnd);
    assert_eq!(i.prefixes, PrefixFlags::empty());
    assert_eq!(i.op_count, 0);
    assert!(!decoder.can_decode());
}

#[test]
fn decoding_is_idempotent() {
    let bytes = [
        0x48, 0x8b, 0x05, 0x10, 0x00, 0x00, 0x00, // mov rax, [rip+0x10]
        0xf0, 0x48, 0x01, 0x18, // lock add [rax], rbx
        0x62, 0xf1, 0x6c, 0x48, 0x58, 0x48, 0x01, // vaddps zmm1, zmm2, [rax+0x40]
        0xc3,
    ];
    let first: Vec<Instruction> = Decoder::new(Bitness::Bits64, &bytes, 0x1000, DecoderOptions::empty()).collect();
    let second: Vec<Instruction> = Decoder::new(Bitness::Bits64, &bytes, 0x1000, DecoderOptions::empty()).collect();
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
    assert!(first.iter().all(|i| !i.is_invalid()));
}

#[test]
fn instruction_serializes_to_json() {
    let i = decode(Bitness::Bits64, &[0xc3]);
    let json = serde_json::to_value(i).unwrap();
    assert_eq!(json["code"], "Retnq");
    assert_eq!(json["len"], 1);
    let back: Instruction = serde_json::from_value(json).unwrap();
    assert_eq!(back, i);
}
