//! One-byte, 0F, 0F38 and 0F3A maps.

use super::{invalid_group, null_group64, OpcodeMap};
use crate::code::Code as C;
use crate::decoder::DecoderOptions;
use crate::error::{TableError, TableFamily};
use crate::handlers::{HandlerFlags, LegacyHandlerFlags, MandatoryPrefix4Flags};
use crate::register::Register as R;
use crate::tables::{Entry, LegacyTag as T, NodeSpec, TableWriter};

/// Lockable read-modify-write.
const LOCK: u32 = HandlerFlags::LOCK.bits() | HandlerFlags::XACQUIRE.bits() | HandlerFlags::XRELEASE.bits();
/// `xchg` takes XACQUIRE/XRELEASE with or without LOCK.
const XCHG: u32 = LOCK | HandlerFlags::XACQUIRE_XRELEASE_NO_LOCK.bits();
/// `mov` stores take XRELEASE only.
const MOV_STORE: u32 = HandlerFlags::XRELEASE.bits() | HandlerFlags::XACQUIRE_XRELEASE_NO_LOCK.bits();

fn c1(tag: T, code: C) -> NodeSpec {
    NodeSpec::new(tag).code(code)
}

fn c2(tag: T, c16: C, c32: C) -> NodeSpec {
    NodeSpec::new(tag).code2(c16, c32)
}

fn c3(tag: T, c16: C, c32: C, c64: C) -> NodeSpec {
    NodeSpec::new(tag).code3(c16, c32, c64)
}

fn simple(code: C) -> NodeSpec {
    c1(T::Simple, code)
}

fn bitness(handler1632: impl Into<Entry>, handler64: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::Bitness).handler(handler1632).handler(handler64)
}

/// Valid outside 64-bit mode only; the opcode has no ModRM byte.
fn not64(handler: impl Into<Entry>) -> NodeSpec {
    bitness(handler, Entry::InvalidNoModrm)
}

fn options(default: impl Into<Entry>, alternatives: Vec<(Entry, DecoderOptions)>) -> NodeSpec {
    options_with(T::Options, default, alternatives)
}

fn options_with(tag: T, default: impl Into<Entry>, alternatives: Vec<(Entry, DecoderOptions)>) -> NodeSpec {
    let mut spec = NodeSpec::new(tag).handler(default).u32(alternatives.len() as u32);
    for (handler, option) in alternatives {
        spec = spec.handler(handler).u32(option.bits());
    }
    spec
}

fn mandatory(np: impl Into<Entry>, p66: impl Into<Entry>, pf3: impl Into<Entry>, pf2: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::MandatoryPrefix).handlers(entries![np, p66, pf3, pf2])
}

fn only66(handler: impl Into<Entry>) -> NodeSpec {
    mandatory(Entry::Invalid, handler, Entry::Invalid, Entry::Invalid)
}

/// `op mm, mm/m64` without a prefix, `op xmm, xmm/m128` with 66.
fn mmx_sse2(mm: C, xmm: C) -> NodeSpec {
    mandatory(c1(T::P_Q, mm), c1(T::VW, xmm), Entry::Invalid, Entry::Invalid)
}

/// The ps/pd/ss/sd quartet.
fn sse_fp(ps: C, pd: C, ss: C, sd: C) -> NodeSpec {
    mandatory(c1(T::VW, ps), c1(T::VW, pd), c1(T::VW, ss), c1(T::VW, sd))
}

fn sse_packed(ps: C, pd: C) -> NodeSpec {
    mandatory(c1(T::VW, ps), c1(T::VW, pd), Entry::Invalid, Entry::Invalid)
}

fn group(w: &mut TableWriter, table: [Entry; 8]) -> Result<NodeSpec, TableError> {
    Ok(NodeSpec::new(T::Group).array(w.array(&table)?))
}

fn group8x8(w: &mut TableWriter, mem: [Entry; 8], reg: [Entry; 8]) -> Result<NodeSpec, TableError> {
    let low = w.array(&mem)?;
    let high = w.array(&reg)?;
    Ok(NodeSpec::new(T::Group8x8).array(low).array(high))
}

fn group8x64(w: &mut TableWriter, coarse: [Entry; 8], fine: Vec<Entry>) -> Result<NodeSpec, TableError> {
    let low = w.array(&coarse)?;
    let high = w.array(&fine)?;
    Ok(NodeSpec::new(T::Group8x64).array(low).array(high))
}

/// A fine-table row where every register operand uses the same node.
fn row(fine: &mut [Entry], reg: usize, entry: impl Into<Entry>) {
    let entry = entry.into();
    for slot in &mut fine[reg * 8..reg * 8 + 8] {
        *slot = entry.clone();
    }
}

pub(super) fn blob() -> Result<Vec<u8>, TableError> {
    let mut w = TableWriter::new(TableFamily::Legacy);

    let map0f38 = map0f38();
    let map0f3a = map0f3a();
    let mut map0f = map0f(&mut w)?;
    let mut map0 = map0(&mut w)?;

    // Roots are the last four records, in dependency order.
    let slot0f38 = w.array(map0f38.entries())?;
    let slot0f3a = w.array(map0f3a.entries())?;
    map0f.set(0x38, NodeSpec::new(T::AnotherTable).array(slot0f38));
    map0f.set(0x3A, NodeSpec::new(T::AnotherTable).array(slot0f3a));
    let slot0f = w.array(map0f.entries())?;
    map0.set(0x0F, NodeSpec::new(T::AnotherTable).array(slot0f));
    w.array(map0.entries())?;

    Ok(w.finish())
}

/// Opcodes 00-3F share one layout: `op r/m8, r8` through `op rAX, imm`.
fn alu(map: &mut OpcodeMap, base: u8, codes: [C; 12], flags: u32) {
    let [rm8_r8, rm16_r16, rm32_r32, rm64_r64, r8_rm8, r16_rm16, r32_rm32, r64_rm64, al_imm8, ax_imm16, eax_imm32, rax_imm32] =
        codes;
    map.set(base, c1(T::Eb_Gb, rm8_r8).u32(flags));
    map.set(base + 1, c3(T::Ev_Gv, rm16_r16, rm32_r32, rm64_r64).u32(flags));
    map.set(base + 2, c1(T::Gb_Eb, r8_rm8));
    map.set(base + 3, c3(T::Gv_Ev, r16_rm16, r32_rm32, r64_rm64));
    map.set(base + 4, c1(T::Reg_Ib, al_imm8).reg(R::AL));
    map.set(base + 5, c3(T::Reg_Iz, ax_imm16, eax_imm32, rax_imm32));
}

fn map0(w: &mut TableWriter) -> Result<OpcodeMap, TableError> {
    let mut map = OpcodeMap::new();

    alu(&mut map, 0x00, [C::Add_rm8_r8, C::Add_rm16_r16, C::Add_rm32_r32, C::Add_rm64_r64, C::Add_r8_rm8, C::Add_r16_rm16, C::Add_r32_rm32, C::Add_r64_rm64, C::Add_AL_imm8, C::Add_AX_imm16, C::Add_EAX_imm32, C::Add_RAX_imm32], LOCK);
    alu(&mut map, 0x08, [C::Or_rm8_r8, C::Or_rm16_r16, C::Or_rm32_r32, C::Or_rm64_r64, C::Or_r8_rm8, C::Or_r16_rm16, C::Or_r32_rm32, C::Or_r64_rm64, C::Or_AL_imm8, C::Or_AX_imm16, C::Or_EAX_imm32, C::Or_RAX_imm32], LOCK);
    alu(&mut map, 0x10, [C::Adc_rm8_r8, C::Adc_rm16_r16, C::Adc_rm32_r32, C::Adc_rm64_r64, C::Adc_r8_rm8, C::Adc_r16_rm16, C::Adc_r32_rm32, C::Adc_r64_rm64, C::Adc_AL_imm8, C::Adc_AX_imm16, C::Adc_EAX_imm32, C::Adc_RAX_imm32], LOCK);
    alu(&mut map, 0x18, [C::Sbb_rm8_r8, C::Sbb_rm16_r16, C::Sbb_rm32_r32, C::Sbb_rm64_r64, C::Sbb_r8_rm8, C::Sbb_r16_rm16, C::Sbb_r32_rm32, C::Sbb_r64_rm64, C::Sbb_AL_imm8, C::Sbb_AX_imm16, C::Sbb_EAX_imm32, C::Sbb_RAX_imm32], LOCK);
    alu(&mut map, 0x20, [C::And_rm8_r8, C::And_rm16_r16, C::And_rm32_r32, C::And_rm64_r64, C::And_r8_rm8, C::And_r16_rm16, C::And_r32_rm32, C::And_r64_rm64, C::And_AL_imm8, C::And_AX_imm16, C::And_EAX_imm32, C::And_RAX_imm32], LOCK);
    alu(&mut map, 0x28, [C::Sub_rm8_r8, C::Sub_rm16_r16, C::Sub_rm32_r32, C::Sub_rm64_r64, C::Sub_r8_rm8, C::Sub_r16_rm16, C::Sub_r32_rm32, C::Sub_r64_rm64, C::Sub_AL_imm8, C::Sub_AX_imm16, C::Sub_EAX_imm32, C::Sub_RAX_imm32], LOCK);
    alu(&mut map, 0x30, [C::Xor_rm8_r8, C::Xor_rm16_r16, C::Xor_rm32_r32, C::Xor_rm64_r64, C::Xor_r8_rm8, C::Xor_r16_rm16, C::Xor_r32_rm32, C::Xor_r64_rm64, C::Xor_AL_imm8, C::Xor_AX_imm16, C::Xor_EAX_imm32, C::Xor_RAX_imm32], LOCK);
    alu(&mut map, 0x38, [C::Cmp_rm8_r8, C::Cmp_rm16_r16, C::Cmp_rm32_r32, C::Cmp_rm64_r64, C::Cmp_r8_rm8, C::Cmp_r16_rm16, C::Cmp_r32_rm32, C::Cmp_r64_rm64, C::Cmp_AL_imm8, C::Cmp_AX_imm16, C::Cmp_EAX_imm32, C::Cmp_RAX_imm32], 0);

    map.set(0x06, not64(c2(T::PushSimpleReg_2, C::Pushw_ES, C::Pushd_ES).reg(R::ES)));
    map.set(0x07, not64(c2(T::PushSimpleReg_2, C::Popw_ES, C::Popd_ES).reg(R::ES)));
    map.set(0x0E, not64(c2(T::PushSimpleReg_2, C::Pushw_CS, C::Pushd_CS).reg(R::CS)));
    map.set(0x16, not64(c2(T::PushSimpleReg_2, C::Pushw_SS, C::Pushd_SS).reg(R::SS)));
    map.set(0x17, not64(c2(T::PushSimpleReg_2, C::Popw_SS, C::Popd_SS).reg(R::SS)));
    map.set(0x1E, not64(c2(T::PushSimpleReg_2, C::Pushw_DS, C::Pushd_DS).reg(R::DS)));
    map.set(0x1F, not64(c2(T::PushSimpleReg_2, C::Popw_DS, C::Popd_DS).reg(R::DS)));

    map.set(0x26, NodeSpec::new(T::Prefix_ES_CS_SS_DS).reg(R::ES));
    map.set(0x2E, NodeSpec::new(T::Prefix_ES_CS_SS_DS).reg(R::CS));
    map.set(0x36, NodeSpec::new(T::Prefix_ES_CS_SS_DS).reg(R::SS));
    map.set(0x3E, NodeSpec::new(T::Prefix_ES_CS_SS_DS).reg(R::DS));
    map.set(0x27, not64(simple(C::Daa)));
    map.set(0x2F, not64(simple(C::Das)));
    map.set(0x37, not64(simple(C::Aaa)));
    map.set(0x3F, not64(simple(C::Aas)));

    for n in 0..8u8 {
        let inc = c2(T::SimpleReg_2, C::Inc_r16, C::Inc_r32).u32(n as u32);
        let dec = c2(T::SimpleReg_2, C::Dec_r16, C::Dec_r32).u32(n as u32);
        map.set(0x40 + n, NodeSpec::new(T::PrefixREX).handler(inc).u32(n as u32));
        map.set(0x48 + n, NodeSpec::new(T::PrefixREX).handler(dec).u32(8 + n as u32));
        map.set(0x50 + n, c3(T::PushPopReg, C::Push_r16, C::Push_r32, C::Push_r64).u32(n as u32));
        map.set(0x58 + n, c3(T::PushPopReg, C::Pop_r16, C::Pop_r32, C::Pop_r64).u32(n as u32));
    }

    map.set(0x60, not64(c2(T::Simple2_2, C::Pushaw, C::Pushad)));
    map.set(0x61, not64(c2(T::Simple2_2, C::Popaw, C::Popad)));
    map.set(0x62, NodeSpec::new(T::EVEX).handler(c2(T::Gv_Ma, C::Bound_r16_m1616, C::Bound_r32_m3232)));
    map.set(0x63, bitness(Entry::Invalid, c3(T::Gv_Ev, C::Movsxd_r16_rm16, C::Movsxd_r32_rm32, C::Movsxd_r64_rm32)));
    map.set(0x64, NodeSpec::new(T::Prefix_FS_GS).reg(R::FS));
    map.set(0x65, NodeSpec::new(T::Prefix_FS_GS).reg(R::GS));
    map.set(0x66, NodeSpec::new(T::Prefix66));
    map.set(0x67, NodeSpec::new(T::Prefix67));
    map.set(0x68, c3(T::PushIz, C::Push_imm16, C::Pushd_imm32, C::Pushq_imm32));
    map.set(0x69, c3(T::Gv_Ev_Iz, C::Imul_r16_rm16_imm16, C::Imul_r32_rm32_imm32, C::Imul_r64_rm64_imm32));
    map.set(0x6A, c3(T::PushIb2, C::Pushw_imm8, C::Pushd_imm8, C::Pushq_imm8));
    map.set(0x6B, c3(T::Gv_Ev_Ib, C::Imul_r16_rm16_imm8, C::Imul_r32_rm32_imm8, C::Imul_r64_rm64_imm8));
    map.set(0x6C, c1(T::Yb_Reg, C::Insb_m8_DX).reg(R::DX));
    map.set(0x6D, c2(T::Yv_Reg2, C::Insw_m16_DX, C::Insd_m32_DX));
    map.set(0x6E, c1(T::Reg_Xb, C::Outsb_DX_m8).reg(R::DX));
    map.set(0x6F, c2(T::Reg_Xv2, C::Outsw_DX_m16, C::Outsd_DX_m32));

    #[rustfmt::skip]
    let jcc = [
        [C::Jo_rel8_16, C::Jo_rel8_32, C::Jo_rel8_64],
        [C::Jno_rel8_16, C::Jno_rel8_32, C::Jno_rel8_64],
        [C::Jb_rel8_16, C::Jb_rel8_32, C::Jb_rel8_64],
        [C::Jae_rel8_16, C::Jae_rel8_32, C::Jae_rel8_64],
        [C::Je_rel8_16, C::Je_rel8_32, C::Je_rel8_64],
        [C::Jne_rel8_16, C::Jne_rel8_32, C::Jne_rel8_64],
        [C::Jbe_rel8_16, C::Jbe_rel8_32, C::Jbe_rel8_64],
        [C::Ja_rel8_16, C::Ja_rel8_32, C::Ja_rel8_64],
        [C::Js_rel8_16, C::Js_rel8_32, C::Js_rel8_64],
        [C::Jns_rel8_16, C::Jns_rel8_32, C::Jns_rel8_64],
        [C::Jp_rel8_16, C::Jp_rel8_32, C::Jp_rel8_64],
        [C::Jnp_rel8_16, C::Jnp_rel8_32, C::Jnp_rel8_64],
        [C::Jl_rel8_16, C::Jl_rel8_32, C::Jl_rel8_64],
        [C::Jge_rel8_16, C::Jge_rel8_32, C::Jge_rel8_64],
        [C::Jle_rel8_16, C::Jle_rel8_32, C::Jle_rel8_64],
        [C::Jg_rel8_16, C::Jg_rel8_32, C::Jg_rel8_64],
    ];
    for (n, [c16, c32, c64]) in jcc.into_iter().enumerate() {
        map.set(0x70 + n as u8, c3(T::Jb, c16, c32, c64));
    }

    #[rustfmt::skip]
    let grp80 = group(w, entries![
        c1(T::Eb_Ib, C::Add_rm8_imm8).u32(LOCK),
        c1(T::Eb_Ib, C::Or_rm8_imm8).u32(LOCK),
        c1(T::Eb_Ib, C::Adc_rm8_imm8).u32(LOCK),
        c1(T::Eb_Ib, C::Sbb_rm8_imm8).u32(LOCK),
        c1(T::Eb_Ib, C::And_rm8_imm8).u32(LOCK),
        c1(T::Eb_Ib, C::Sub_rm8_imm8).u32(LOCK),
        c1(T::Eb_Ib, C::Xor_rm8_imm8).u32(LOCK),
        c1(T::Eb_Ib, C::Cmp_rm8_imm8).u32(0),
    ])?;
    #[rustfmt::skip]
    let grp81 = group(w, entries![
        c3(T::Ev_Iz, C::Add_rm16_imm16, C::Add_rm32_imm32, C::Add_rm64_imm32).u32(LOCK),
        c3(T::Ev_Iz, C::Or_rm16_imm16, C::Or_rm32_imm32, C::Or_rm64_imm32).u32(LOCK),
        c3(T::Ev_Iz, C::Adc_rm16_imm16, C::Adc_rm32_imm32, C::Adc_rm64_imm32).u32(LOCK),
        c3(T::Ev_Iz, C::Sbb_rm16_imm16, C::Sbb_rm32_imm32, C::Sbb_rm64_imm32).u32(LOCK),
        c3(T::Ev_Iz, C::And_rm16_imm16, C::And_rm32_imm32, C::And_rm64_imm32).u32(LOCK),
        c3(T::Ev_Iz, C::Sub_rm16_imm16, C::Sub_rm32_imm32, C::Sub_rm64_imm32).u32(LOCK),
        c3(T::Ev_Iz, C::Xor_rm16_imm16, C::Xor_rm32_imm32, C::Xor_rm64_imm32).u32(LOCK),
        c3(T::Ev_Iz, C::Cmp_rm16_imm16, C::Cmp_rm32_imm32, C::Cmp_rm64_imm32).u32(0),
    ])?;
    #[rustfmt::skip]
    let grp82 = group(w, entries![
        c1(T::Eb_Ib, C::Add_rm8_imm8_82).u32(LOCK),
        c1(T::Eb_Ib, C::Or_rm8_imm8_82).u32(LOCK),
        c1(T::Eb_Ib, C::Adc_rm8_imm8_82).u32(LOCK),
        c1(T::Eb_Ib, C::Sbb_rm8_imm8_82).u32(LOCK),
        c1(T::Eb_Ib, C::And_rm8_imm8_82).u32(LOCK),
        c1(T::Eb_Ib, C::Sub_rm8_imm8_82).u32(LOCK),
        c1(T::Eb_Ib, C::Xor_rm8_imm8_82).u32(LOCK),
        c1(T::Eb_Ib, C::Cmp_rm8_imm8_82).u32(0),
    ])?;
    #[rustfmt::skip]
    let grp83 = group(w, entries![
        c3(T::Ev_Ib, C::Add_rm16_imm8, C::Add_rm32_imm8, C::Add_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib, C::Or_rm16_imm8, C::Or_rm32_imm8, C::Or_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib, C::Adc_rm16_imm8, C::Adc_rm32_imm8, C::Adc_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib, C::Sbb_rm16_imm8, C::Sbb_rm32_imm8, C::Sbb_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib, C::And_rm16_imm8, C::And_rm32_imm8, C::And_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib, C::Sub_rm16_imm8, C::Sub_rm32_imm8, C::Sub_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib, C::Xor_rm16_imm8, C::Xor_rm32_imm8, C::Xor_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib, C::Cmp_rm16_imm8, C::Cmp_rm32_imm8, C::Cmp_rm64_imm8).u32(0),
    ])?;
    map.set(0x80, grp80);
    map.set(0x81, grp81);
    map.set(0x82, bitness(grp82, Entry::Invalid));
    map.set(0x83, grp83);
    map.set(0x84, c1(T::Eb_Gb, C::Test_rm8_r8).u32(0));
    map.set(0x85, c3(T::Ev_Gv, C::Test_rm16_r16, C::Test_rm32_r32, C::Test_rm64_r64).u32(0));
    map.set(0x86, c1(T::Eb_Gb, C::Xchg_rm8_r8).u32(XCHG));
    map.set(0x87, c3(T::Ev_Gv, C::Xchg_rm16_r16, C::Xchg_rm32_r32, C::Xchg_rm64_r64).u32(XCHG));
    map.set(0x88, c1(T::Eb_Gb, C::Mov_rm8_r8).u32(MOV_STORE));
    map.set(0x89, c3(T::Ev_Gv, C::Mov_rm16_r16, C::Mov_rm32_r32, C::Mov_rm64_r64).u32(MOV_STORE));
    map.set(0x8A, c1(T::Gb_Eb, C::Mov_r8_rm8));
    map.set(0x8B, c3(T::Gv_Ev, C::Mov_r16_rm16, C::Mov_r32_rm32, C::Mov_r64_rm64));
    map.set(0x8C, c3(T::Ev_Sw, C::Mov_rm16_Sreg, C::Mov_r32m16_Sreg, C::Mov_r64m16_Sreg));
    map.set(0x8D, c3(T::Gv_M, C::Lea_r16_m, C::Lea_r32_m, C::Lea_r64_m));
    map.set(0x8E, c1(T::Sw_Ew, C::Mov_Sreg_rm16));
    let mut grp8f = invalid_group();
    grp8f[0] = c3(T::PushPopEv, C::Pop_rm16, C::Pop_rm32, C::Pop_rm64).into();
    let grp8f = group(w, grp8f)?;
    map.set(0x8F, NodeSpec::new(T::XOP).handler(grp8f));

    for n in 0..8u8 {
        map.set(0x90 + n, c3(T::XchgRegRax, C::Xchg_r16_AX, C::Xchg_r32_EAX, C::Xchg_r64_RAX).u32(n as u32));
    }
    map.set(0x98, c3(T::Simple2, C::Cbw, C::Cwde, C::Cdqe));
    map.set(0x99, c3(T::Simple2, C::Cwd, C::Cdq, C::Cqo));
    map.set(0x9A, not64(c2(T::Ap, C::Call_ptr1616, C::Call_ptr1632)));
    map.set(0x9B, simple(C::Wait));
    map.set(0x9C, c3(T::Simple3, C::Pushfw, C::Pushfd, C::Pushfq));
    map.set(0x9D, c3(T::Simple3, C::Popfw, C::Popfd, C::Popfq));
    map.set(0x9E, simple(C::Sahf));
    map.set(0x9F, simple(C::Lahf));

    map.set(0xA0, c1(T::Reg_Ob, C::Mov_AL_moffs8).reg(R::AL));
    map.set(0xA1, c3(T::Reg_Ov, C::Mov_AX_moffs16, C::Mov_EAX_moffs32, C::Mov_RAX_moffs64));
    map.set(0xA2, c1(T::Ob_Reg, C::Mov_moffs8_AL).reg(R::AL));
    map.set(0xA3, c3(T::Ov_Reg, C::Mov_moffs16_AX, C::Mov_moffs32_EAX, C::Mov_moffs64_RAX));
    map.set(0xA4, c1(T::Yb_Xb, C::Movsb_m8_m8));
    map.set(0xA5, c3(T::Yv_Xv, C::Movsw_m16_m16, C::Movsd_m32_m32, C::Movsq_m64_m64));
    map.set(0xA6, c1(T::Xb_Yb, C::Cmpsb_m8_m8));
    map.set(0xA7, c3(T::Xv_Yv, C::Cmpsw_m16_m16, C::Cmpsd_m32_m32, C::Cmpsq_m64_m64));
    map.set(0xA8, c1(T::Reg_Ib, C::Test_AL_imm8).reg(R::AL));
    map.set(0xA9, c3(T::Reg_Iz, C::Test_AX_imm16, C::Test_EAX_imm32, C::Test_RAX_imm32));
    map.set(0xAA, c1(T::Yb_Reg, C::Stosb_m8_AL).reg(R::AL));
    map.set(0xAB, c3(T::Yv_Reg, C::Stosw_m16_AX, C::Stosd_m32_EAX, C::Stosq_m64_RAX));
    map.set(0xAC, c1(T::Reg_Xb, C::Lodsb_AL_m8).reg(R::AL));
    map.set(0xAD, c3(T::Reg_Xv, C::Lodsw_AX_m16, C::Lodsd_EAX_m32, C::Lodsq_RAX_m64));
    map.set(0xAE, c1(T::Reg_Yb, C::Scasb_AL_m8).reg(R::AL));
    map.set(0xAF, c3(T::Reg_Yv, C::Scasw_AX_m16, C::Scasd_EAX_m32, C::Scasq_RAX_m64));

    for n in 0..8u8 {
        map.set(0xB0 + n, c1(T::Reg_Ib3, C::Mov_r8_imm8).u32(n as u32));
        map.set(0xB8 + n, c3(T::Reg_Iz2, C::Mov_r16_imm16, C::Mov_r32_imm32, C::Mov_r64_imm64).u32(n as u32));
    }

    #[rustfmt::skip]
    let (grp_c0, grp_c1, grp_d0, grp_d1, grp_d2, grp_d3) = (
        group(w, entries![
            c1(T::Eb_Ib, C::Rol_rm8_imm8).u32(0), c1(T::Eb_Ib, C::Ror_rm8_imm8).u32(0),
            c1(T::Eb_Ib, C::Rcl_rm8_imm8).u32(0), c1(T::Eb_Ib, C::Rcr_rm8_imm8).u32(0),
            c1(T::Eb_Ib, C::Shl_rm8_imm8).u32(0), c1(T::Eb_Ib, C::Shr_rm8_imm8).u32(0),
            c1(T::Eb_Ib, C::Sal_rm8_imm8).u32(0), c1(T::Eb_Ib, C::Sar_rm8_imm8).u32(0),
        ])?,
        group(w, entries![
            c3(T::Ev_Ib2, C::Rol_rm16_imm8, C::Rol_rm32_imm8, C::Rol_rm64_imm8).u32(0),
            c3(T::Ev_Ib2, C::Ror_rm16_imm8, C::Ror_rm32_imm8, C::Ror_rm64_imm8).u32(0),
            c3(T::Ev_Ib2, C::Rcl_rm16_imm8, C::Rcl_rm32_imm8, C::Rcl_rm64_imm8).u32(0),
            c3(T::Ev_Ib2, C::Rcr_rm16_imm8, C::Rcr_rm32_imm8, C::Rcr_rm64_imm8).u32(0),
            c3(T::Ev_Ib2, C::Shl_rm16_imm8, C::Shl_rm32_imm8, C::Shl_rm64_imm8).u32(0),
            c3(T::Ev_Ib2, C::Shr_rm16_imm8, C::Shr_rm32_imm8, C::Shr_rm64_imm8).u32(0),
            c3(T::Ev_Ib2, C::Sal_rm16_imm8, C::Sal_rm32_imm8, C::Sal_rm64_imm8).u32(0),
            c3(T::Ev_Ib2, C::Sar_rm16_imm8, C::Sar_rm32_imm8, C::Sar_rm64_imm8).u32(0),
        ])?,
        group(w, entries![
            c1(T::Eb_1, C::Rol_rm8_1), c1(T::Eb_1, C::Ror_rm8_1), c1(T::Eb_1, C::Rcl_rm8_1), c1(T::Eb_1, C::Rcr_rm8_1),
            c1(T::Eb_1, C::Shl_rm8_1), c1(T::Eb_1, C::Shr_rm8_1), c1(T::Eb_1, C::Sal_rm8_1), c1(T::Eb_1, C::Sar_rm8_1),
        ])?,
        group(w, entries![
            c3(T::Ev_1, C::Rol_rm16_1, C::Rol_rm32_1, C::Rol_rm64_1),
            c3(T::Ev_1, C::Ror_rm16_1, C::Ror_rm32_1, C::Ror_rm64_1),
            c3(T::Ev_1, C::Rcl_rm16_1, C::Rcl_rm32_1, C::Rcl_rm64_1),
            c3(T::Ev_1, C::Rcr_rm16_1, C::Rcr_rm32_1, C::Rcr_rm64_1),
            c3(T::Ev_1, C::Shl_rm16_1, C::Shl_rm32_1, C::Shl_rm64_1),
            c3(T::Ev_1, C::Shr_rm16_1, C::Shr_rm32_1, C::Shr_rm64_1),
            c3(T::Ev_1, C::Sal_rm16_1, C::Sal_rm32_1, C::Sal_rm64_1),
            c3(T::Ev_1, C::Sar_rm16_1, C::Sar_rm32_1, C::Sar_rm64_1),
        ])?,
        group(w, entries![
            c1(T::Eb_CL, C::Rol_rm8_CL), c1(T::Eb_CL, C::Ror_rm8_CL), c1(T::Eb_CL, C::Rcl_rm8_CL), c1(T::Eb_CL, C::Rcr_rm8_CL),
            c1(T::Eb_CL, C::Shl_rm8_CL), c1(T::Eb_CL, C::Shr_rm8_CL), c1(T::Eb_CL, C::Sal_rm8_CL), c1(T::Eb_CL, C::Sar_rm8_CL),
        ])?,
        group(w, entries![
            c3(T::Ev_CL, C::Rol_rm16_CL, C::Rol_rm32_CL, C::Rol_rm64_CL),
            c3(T::Ev_CL, C::Ror_rm16_CL, C::Ror_rm32_CL, C::Ror_rm64_CL),
            c3(T::Ev_CL, C::Rcl_rm16_CL, C::Rcl_rm32_CL, C::Rcl_rm64_CL),
            c3(T::Ev_CL, C::Rcr_rm16_CL, C::Rcr_rm32_CL, C::Rcr_rm64_CL),
            c3(T::Ev_CL, C::Shl_rm16_CL, C::Shl_rm32_CL, C::Shl_rm64_CL),
            c3(T::Ev_CL, C::Shr_rm16_CL, C::Shr_rm32_CL, C::Shr_rm64_CL),
            c3(T::Ev_CL, C::Sal_rm16_CL, C::Sal_rm32_CL, C::Sal_rm64_CL),
            c3(T::Ev_CL, C::Sar_rm16_CL, C::Sar_rm32_CL, C::Sar_rm64_CL),
        ])?,
    );
    map.set(0xC0, grp_c0);
    map.set(0xC1, grp_c1);
    map.set(0xC2, c3(T::BranchIw, C::Retnw_imm16, C::Retnd_imm16, C::Retnq_imm16));
    map.set(0xC3, c3(T::BranchSimple, C::Retnw, C::Retnd, C::Retnq));
    map.set(0xC4, NodeSpec::new(T::VEX3).handler(c2(T::Gv_Mp_2, C::Les_r16_m1616, C::Les_r32_m1632)));
    map.set(0xC5, NodeSpec::new(T::VEX2).handler(c2(T::Gv_Mp_2, C::Lds_r16_m1616, C::Lds_r32_m1632)));

    let mut c6 = invalid_group();
    c6[0] = c1(T::Eb_Ib, C::Mov_rm8_imm8).u32(MOV_STORE).into();
    let mut c6_fine = null_group64();
    c6_fine[0x38] = c1(T::Ib, C::Xabort_imm8).into();
    let mut c7 = invalid_group();
    c7[0] = c3(T::Ev_Iz, C::Mov_rm16_imm16, C::Mov_rm32_imm32, C::Mov_rm64_imm32).u32(MOV_STORE).into();
    let mut c7_fine = null_group64();
    c7_fine[0x38] = c2(T::Xbegin, C::Xbegin_rel16, C::Xbegin_rel32).into();
    map.set(0xC6, group8x64(w, c6, c6_fine)?);
    map.set(0xC7, group8x64(w, c7, c7_fine)?);
    map.set(0xC8, c3(T::Iw_Ib, C::Enterw_imm16_imm8, C::Enterd_imm16_imm8, C::Enterq_imm16_imm8));
    map.set(0xC9, c3(T::Simple3, C::Leavew, C::Leaved, C::Leaveq));
    map.set(0xCA, c3(T::Iw, C::Retfw_imm16, C::Retfd_imm16, C::Retfq_imm16));
    map.set(0xCB, c3(T::Simple2, C::Retfw, C::Retfd, C::Retfq));
    map.set(0xCC, simple(C::Int3));
    map.set(0xCD, c1(T::Ib, C::Int_imm8));
    map.set(0xCE, not64(simple(C::Into)));
    map.set(0xCF, c3(T::Simple2, C::Iretw, C::Iretd, C::Iretq));

    map.set(0xD0, grp_d0);
    map.set(0xD1, grp_d1);
    map.set(0xD2, grp_d2);
    map.set(0xD3, grp_d3);
    map.set(0xD4, not64(c1(T::Ib, C::Aam_imm8)));
    map.set(0xD5, not64(c1(T::Ib, C::Aad_imm8)));
    map.set(0xD6, not64(simple(C::Salc)));
    map.set(0xD7, c1(T::MemBx, C::Xlat_m8));
    x87(w, &mut map)?;

    map.set(0xE0, c3(T::Jb2, C::Loopne_rel8_CX, C::Loopne_rel8_ECX, C::Loopne_rel8_RCX));
    map.set(0xE1, c3(T::Jb2, C::Loope_rel8_CX, C::Loope_rel8_ECX, C::Loope_rel8_RCX));
    map.set(0xE2, c3(T::Jb2, C::Loop_rel8_CX, C::Loop_rel8_ECX, C::Loop_rel8_RCX));
    map.set(0xE3, c3(T::Jb2, C::Jcxz_rel8, C::Jecxz_rel8, C::Jrcxz_rel8));
    map.set(0xE4, c1(T::Reg_Ib, C::In_AL_imm8).reg(R::AL));
    map.set(0xE5, c2(T::eAX_Ib, C::In_AX_imm8, C::In_EAX_imm8));
    map.set(0xE6, c1(T::Ib_Reg, C::Out_imm8_AL).reg(R::AL));
    map.set(0xE7, c2(T::Ib_eAX, C::Out_imm8_AX, C::Out_imm8_EAX));
    map.set(0xE8, c3(T::Jz, C::Call_rel16, C::Call_rel32_32, C::Call_rel32_64));
    map.set(0xE9, c3(T::Jz, C::Jmp_rel16, C::Jmp_rel32_32, C::Jmp_rel32_64));
    map.set(0xEA, not64(c2(T::Ap, C::Jmp_ptr1616, C::Jmp_ptr1632)));
    map.set(0xEB, c3(T::Jb, C::Jmp_rel8_16, C::Jmp_rel8_32, C::Jmp_rel8_64));
    map.set(0xEC, c1(T::Reg_Reg, C::In_AL_DX).reg(R::AL).reg(R::DX));
    map.set(0xED, c2(T::eAX_DX, C::In_AX_DX, C::In_EAX_DX));
    map.set(0xEE, c1(T::Reg_Reg, C::Out_DX_AL).reg(R::DX).reg(R::AL));
    map.set(0xEF, c2(T::DX_eAX, C::Out_DX_AX, C::Out_DX_EAX));

    map.set(0xF0, NodeSpec::new(T::PrefixF0));
    map.set(0xF1, simple(C::Int1));
    map.set(0xF2, NodeSpec::new(T::PrefixF2));
    map.set(0xF3, NodeSpec::new(T::PrefixF3));
    map.set(0xF4, simple(C::Hlt));
    map.set(0xF5, simple(C::Cmc));
    #[rustfmt::skip]
    let grp_f6 = group(w, entries![
        c1(T::Eb_Ib, C::Test_rm8_imm8).u32(0),
        c1(T::Eb_Ib, C::Test_rm8_imm8_F6r1).u32(0),
        c1(T::Eb, C::Not_rm8).u32(LOCK),
        c1(T::Eb, C::Neg_rm8).u32(LOCK),
        c1(T::Eb, C::Mul_rm8).u32(0),
        c1(T::Eb, C::Imul_rm8).u32(0),
        c1(T::Eb, C::Div_rm8).u32(0),
        c1(T::Eb, C::Idiv_rm8).u32(0),
    ])?;
    #[rustfmt::skip]
    let grp_f7 = group(w, entries![
        c3(T::Ev_Iz, C::Test_rm16_imm16, C::Test_rm32_imm32, C::Test_rm64_imm32).u32(0),
        c3(T::Ev_Iz, C::Test_rm16_imm16_F7r1, C::Test_rm32_imm32_F7r1, C::Test_rm64_imm32_F7r1).u32(0),
        c3(T::Ev, C::Not_rm16, C::Not_rm32, C::Not_rm64).u32(LOCK),
        c3(T::Ev, C::Neg_rm16, C::Neg_rm32, C::Neg_rm64).u32(LOCK),
        c3(T::Ev, C::Mul_rm16, C::Mul_rm32, C::Mul_rm64).u32(0),
        c3(T::Ev, C::Imul_rm16, C::Imul_rm32, C::Imul_rm64).u32(0),
        c3(T::Ev, C::Div_rm16, C::Div_rm32, C::Div_rm64).u32(0),
        c3(T::Ev, C::Idiv_rm16, C::Idiv_rm32, C::Idiv_rm64).u32(0),
    ])?;
    map.set(0xF6, grp_f6);
    map.set(0xF7, grp_f7);
    map.set_all(0xF8, [C::Clc, C::Stc, C::Cli, C::Sti, C::Cld, C::Std].map(simple));
    let mut fe = invalid_group();
    fe[0] = c1(T::Eb, C::Inc_rm8).u32(LOCK).into();
    fe[1] = c1(T::Eb, C::Dec_rm8).u32(LOCK).into();
    map.set(0xFE, group(w, fe)?);
    #[rustfmt::skip]
    let grp_ff = group(w, entries![
        c3(T::Ev, C::Inc_rm16, C::Inc_rm32, C::Inc_rm64).u32(LOCK),
        c3(T::Ev, C::Dec_rm16, C::Dec_rm32, C::Dec_rm64).u32(LOCK),
        c3(T::BranchEv, C::Call_rm16, C::Call_rm32, C::Call_rm64),
        c3(T::Ep, C::Call_m1616, C::Call_m1632, C::Call_m1664),
        c3(T::BranchEv, C::Jmp_rm16, C::Jmp_rm32, C::Jmp_rm64),
        c3(T::Ep, C::Jmp_m1616, C::Jmp_m1632, C::Jmp_m1664),
        c3(T::PushPopEv, C::Push_rm16, C::Push_rm32, C::Push_rm64),
        Entry::Invalid,
    ])?;
    map.set(0xFF, grp_ff);

    Ok(map)
}

/// D8-DF. Memory forms index by ModRM.reg; register forms either by ModRM.reg or, where
/// single encodings carry their own opcode, by the low six ModRM bits.
fn x87(w: &mut TableWriter, map: &mut OpcodeMap) -> Result<(), TableError> {
    let mf = |code| c1(T::Mf, code);
    let st_sti = |code| c1(T::St_Sti, code);
    let sti_st = |code| c1(T::Sti_St, code);
    let sti = |code| c1(T::Sti, code);

    #[rustfmt::skip]
    let d8 = group8x8(
        w,
        entries![
            mf(C::Fadd_m32fp), mf(C::Fmul_m32fp), mf(C::Fcom_m32fp), mf(C::Fcomp_m32fp),
            mf(C::Fsub_m32fp), mf(C::Fsubr_m32fp), mf(C::Fdiv_m32fp), mf(C::Fdivr_m32fp),
        ],
        entries![
            st_sti(C::Fadd_st0_sti), st_sti(C::Fmul_st0_sti), st_sti(C::Fcom_st0_sti), st_sti(C::Fcomp_st0_sti),
            st_sti(C::Fsub_st0_sti), st_sti(C::Fsubr_st0_sti), st_sti(C::Fdiv_st0_sti), st_sti(C::Fdivr_st0_sti),
        ],
    )?;

    let mut d9_fine = vec![Entry::Invalid; 64];
    row(&mut d9_fine, 0, sti(C::Fld_sti));
    row(&mut d9_fine, 1, st_sti(C::Fxch_st0_sti));
    d9_fine[0x10] = simple(C::Fnop).into();
    d9_fine[0x20] = simple(C::Fchs).into();
    d9_fine[0x21] = simple(C::Fabs).into();
    d9_fine[0x24] = simple(C::Ftst).into();
    d9_fine[0x25] = simple(C::Fxam).into();
    for (n, code) in [C::Fld1, C::Fldl2t, C::Fldl2e, C::Fldpi, C::Fldlg2, C::Fldln2, C::Fldz].into_iter().enumerate() {
        d9_fine[0x28 + n] = simple(code).into();
    }
    #[rustfmt::skip]
    let d9_tail = [
        C::F2xm1, C::Fyl2x, C::Fptan, C::Fpatan, C::Fxtract, C::Fprem1, C::Fdecstp, C::Fincstp,
        C::Fprem, C::Fyl2xp1, C::Fsqrt, C::Fsincos, C::Frndint, C::Fscale, C::Fsin, C::Fcos,
    ];
    for (n, code) in d9_tail.into_iter().enumerate() {
        d9_fine[0x30 + n] = simple(code).into();
    }
    #[rustfmt::skip]
    let d9 = group8x64(
        w,
        entries![
            mf(C::Fld_m32fp), Entry::Invalid, mf(C::Fst_m32fp), mf(C::Fstp_m32fp),
            mf(C::Fldenv_m), mf(C::Fldcw_m2byte), mf(C::Fnstenv_m), mf(C::Fnstcw_m2byte),
        ],
        d9_fine,
    )?;

    let mut da_fine = vec![Entry::Invalid; 64];
    row(&mut da_fine, 0, st_sti(C::Fcmovb_st0_sti));
    row(&mut da_fine, 1, st_sti(C::Fcmove_st0_sti));
    row(&mut da_fine, 2, st_sti(C::Fcmovbe_st0_sti));
    row(&mut da_fine, 3, st_sti(C::Fcmovu_st0_sti));
    da_fine[0x29] = simple(C::Fucompp).into();
    #[rustfmt::skip]
    let da = group8x64(
        w,
        entries![
            mf(C::Fiadd_m32int), mf(C::Fimul_m32int), mf(C::Ficom_m32int), mf(C::Ficomp_m32int),
            mf(C::Fisub_m32int), mf(C::Fisubr_m32int), mf(C::Fidiv_m32int), mf(C::Fidivr_m32int),
        ],
        da_fine,
    )?;

    let mut db_fine = vec![Entry::Invalid; 64];
    row(&mut db_fine, 0, st_sti(C::Fcmovnb_st0_sti));
    row(&mut db_fine, 1, st_sti(C::Fcmovne_st0_sti));
    row(&mut db_fine, 2, st_sti(C::Fcmovnbe_st0_sti));
    row(&mut db_fine, 3, st_sti(C::Fcmovnu_st0_sti));
    db_fine[0x22] = simple(C::Fnclex).into();
    db_fine[0x23] = simple(C::Fninit).into();
    row(&mut db_fine, 5, st_sti(C::Fucomi_st0_sti));
    row(&mut db_fine, 6, st_sti(C::Fcomi_st0_sti));
    #[rustfmt::skip]
    let db = group8x64(
        w,
        entries![
            mf(C::Fild_m32int), mf(C::Fisttp_m32int), mf(C::Fist_m32int), mf(C::Fistp_m32int),
            Entry::Invalid, mf(C::Fld_m80fp), Entry::Invalid, mf(C::Fstp_m80fp),
        ],
        db_fine,
    )?;

    #[rustfmt::skip]
    let dc = group8x8(
        w,
        entries![
            mf(C::Fadd_m64fp), mf(C::Fmul_m64fp), mf(C::Fcom_m64fp), mf(C::Fcomp_m64fp),
            mf(C::Fsub_m64fp), mf(C::Fsubr_m64fp), mf(C::Fdiv_m64fp), mf(C::Fdivr_m64fp),
        ],
        entries![
            sti_st(C::Fadd_sti_st0), sti_st(C::Fmul_sti_st0), Entry::Invalid, Entry::Invalid,
            sti_st(C::Fsubr_sti_st0), sti_st(C::Fsub_sti_st0), sti_st(C::Fdivr_sti_st0), sti_st(C::Fdiv_sti_st0),
        ],
    )?;

    #[rustfmt::skip]
    let dd = group8x8(
        w,
        entries![
            mf(C::Fld_m64fp), mf(C::Fisttp_m64int), mf(C::Fst_m64fp), mf(C::Fstp_m64fp),
            mf(C::Frstor_m), Entry::Invalid, mf(C::Fnsave_m), mf(C::Fnstsw_m2byte),
        ],
        entries![
            sti(C::Ffree_sti), Entry::Invalid, sti(C::Fst_sti), sti(C::Fstp_sti),
            sti(C::Fucom_sti), sti(C::Fucomp_sti), Entry::Invalid, Entry::Invalid,
        ],
    )?;

    let mut de_fine = vec![Entry::Invalid; 64];
    row(&mut de_fine, 0, sti_st(C::Faddp_sti_st0));
    row(&mut de_fine, 1, sti_st(C::Fmulp_sti_st0));
    de_fine[0x19] = simple(C::Fcompp).into();
    row(&mut de_fine, 4, sti_st(C::Fsubrp_sti_st0));
    row(&mut de_fine, 5, sti_st(C::Fsubp_sti_st0));
    row(&mut de_fine, 6, sti_st(C::Fdivrp_sti_st0));
    row(&mut de_fine, 7, sti_st(C::Fdivp_sti_st0));
    #[rustfmt::skip]
    let de = group8x64(
        w,
        entries![
            mf(C::Fiadd_m16int), mf(C::Fimul_m16int), mf(C::Ficom_m16int), mf(C::Ficomp_m16int),
            mf(C::Fisub_m16int), mf(C::Fisubr_m16int), mf(C::Fidiv_m16int), mf(C::Fidivr_m16int),
        ],
        de_fine,
    )?;

    let mut df_fine = vec![Entry::Invalid; 64];
    row(&mut df_fine, 5, st_sti(C::Fucomip_st0_sti));
    row(&mut df_fine, 6, st_sti(C::Fcomip_st0_sti));
    #[rustfmt::skip]
    let df = group8x64(
        w,
        entries![
            mf(C::Fild_m16int), mf(C::Fisttp_m16int), mf(C::Fist_m16int), mf(C::Fistp_m16int),
            mf(C::Fbld_m80bcd), mf(C::Fild_m64int), mf(C::Fbstp_m80bcd), mf(C::Fistp_m64int),
        ],
        df_fine,
    )?;

    map.set_all(0xD8, [d8, d9, da, db, dc, dd, de, df]);
    Ok(())
}

fn map0f(w: &mut TableWriter) -> Result<OpcodeMap, TableError> {
    let mut map = OpcodeMap::new();

    #[rustfmt::skip]
    let grp00 = group(w, entries![
        c3(T::Ew, C::Sldt_rm16, C::Sldt_r32m16, C::Sldt_r64m16),
        c3(T::Ew, C::Str_rm16, C::Str_r32m16, C::Str_r64m16),
        c3(T::Ew, C::Lldt_rm16, C::Lldt_r32m16, C::Lldt_r64m16),
        c3(T::Ew, C::Ltr_rm16, C::Ltr_r32m16, C::Ltr_r64m16),
        c3(T::Ew, C::Verr_rm16, C::Verr_r32m16, C::Verr_r64m16),
        c3(T::Ew, C::Verw_rm16, C::Verw_r32m16, C::Verw_r64m16),
        options_with(
            T::Options_DontReadModRM,
            Entry::Invalid,
            vec![(c3(T::Ev, C::Jmpe_rm16, C::Jmpe_rm32, C::Jmpe_rm64).u32(0).into(), DecoderOptions::JMPE)],
        ),
        Entry::Invalid,
    ])?;
    map.set(0x00, grp00);

    let mut grp01_fine = null_group64();
    #[rustfmt::skip]
    let grp01_simple = [
        (0x01, C::Vmcall), (0x02, C::Vmlaunch), (0x03, C::Vmresume), (0x04, C::Vmxoff),
        (0x08, C::Monitor), (0x09, C::Mwait), (0x0A, C::Clac), (0x0B, C::Stac), (0x0F, C::Encls),
        (0x10, C::Xgetbv), (0x11, C::Xsetbv), (0x14, C::Vmfunc), (0x15, C::Xend), (0x16, C::Xtest),
        (0x17, C::Enclu), (0x39, C::Rdtscp),
    ];
    for (index, code) in grp01_simple {
        grp01_fine[index] = simple(code).into();
    }
    grp01_fine[0x38] = NodeSpec::new(T::Bitness_DontReadModRM).handler(Entry::Invalid).handler(simple(C::Swapgs)).into();
    #[rustfmt::skip]
    let grp01 = group8x64(
        w,
        entries![
            c3(T::Ms, C::Sgdt_m1632_16, C::Sgdt_m1632, C::Sgdt_m1664),
            c3(T::Ms, C::Sidt_m1632_16, C::Sidt_m1632, C::Sidt_m1664),
            c3(T::Ms, C::Lgdt_m1632_16, C::Lgdt_m1632, C::Lgdt_m1664),
            c3(T::Ms, C::Lidt_m1632_16, C::Lidt_m1632, C::Lidt_m1664),
            c3(T::Ew, C::Smsw_rm16, C::Smsw_r32m16, C::Smsw_r64m16),
            Entry::Invalid,
            c3(T::Ew, C::Lmsw_rm16, C::Lmsw_r32m16, C::Lmsw_r64m16),
            c1(T::M, C::Invlpg_m),
        ],
        grp01_fine,
    )?;
    map.set(0x01, grp01);
    map.set(0x02, c3(T::Gv_Ev, C::Lar_r16_rm16, C::Lar_r32_r32m16, C::Lar_r64_r64m16));
    map.set(0x03, c3(T::Gv_Ev, C::Lsl_r16_rm16, C::Lsl_r32_r32m16, C::Lsl_r64_r64m16));
    map.set(0x05, simple(C::Syscall));
    map.set(0x06, simple(C::Clts));
    map.set(0x07, simple(C::Sysret));
    map.set(0x08, simple(C::Invd));
    let wbnoinvd = options(simple(C::Wbnoinvd), vec![(simple(C::Wbinvd).into(), DecoderOptions::NO_WBNOINVD)]);
    map.set(
        0x09,
        NodeSpec::new(T::MandatoryPrefix4)
            .handlers(entries![simple(C::Wbinvd), Entry::InvalidNoModrm, wbnoinvd, Entry::InvalidNoModrm])
            .u32(MandatoryPrefix4Flags::CLEAR_F3.bits()),
    );
    map.set(0x0B, simple(C::Ud2));
    let mut grp0d = invalid_group();
    grp0d[0] = c1(T::M, C::Prefetch_m8).into();
    grp0d[1] = c1(T::M, C::Prefetchw_m8).into();
    grp0d[2] = c1(T::M, C::Prefetchwt1_m8).into();
    map.set(0x0D, group(w, grp0d)?);
    map.set(0x0E, simple(C::Femms));
    #[rustfmt::skip]
    let d3now = [
        (0x0C, C::D3NOW_Pi2fw_mm_mmm64), (0x0D, C::D3NOW_Pi2fd_mm_mmm64),
        (0x1C, C::D3NOW_Pf2iw_mm_mmm64), (0x1D, C::D3NOW_Pf2id_mm_mmm64),
        (0x8A, C::D3NOW_Pfnacc_mm_mmm64), (0x8E, C::D3NOW_Pfpnacc_mm_mmm64),
        (0x90, C::D3NOW_Pfcmpge_mm_mmm64), (0x94, C::D3NOW_Pfmin_mm_mmm64),
        (0x96, C::D3NOW_Pfrcp_mm_mmm64), (0x97, C::D3NOW_Pfrsqrt_mm_mmm64),
        (0x9A, C::D3NOW_Pfsub_mm_mmm64), (0x9E, C::D3NOW_Pfadd_mm_mmm64),
        (0xA0, C::D3NOW_Pfcmpgt_mm_mmm64), (0xA4, C::D3NOW_Pfmax_mm_mmm64),
        (0xA6, C::D3NOW_Pfrcpit1_mm_mmm64), (0xA7, C::D3NOW_Pfrsqit1_mm_mmm64),
        (0xAA, C::D3NOW_Pfsubr_mm_mmm64), (0xAE, C::D3NOW_Pfacc_mm_mmm64),
        (0xB0, C::D3NOW_Pfcmpeq_mm_mmm64), (0xB4, C::D3NOW_Pfmul_mm_mmm64),
        (0xB6, C::D3NOW_Pfrcpit2_mm_mmm64), (0xB7, C::D3NOW_Pmulhrw_mm_mmm64),
        (0xBB, C::D3NOW_Pswapd_mm_mmm64), (0xBF, C::D3NOW_Pavgusb_mm_mmm64),
    ];
    let mut spec = NodeSpec::new(T::D3NOW).u32(d3now.len() as u32);
    for (ib, code) in d3now {
        spec = spec.byte(ib).code(code);
    }
    map.set(0x0F, spec);

    let movups = sse_fp(C::Movups_xmm_xmmm128, C::Movupd_xmm_xmmm128, C::Movss_xmm_xmmm32, C::Movsd_xmm_xmmm64);
    map.set(0x10, options(movups, vec![(c1(T::Eb_Gb, C::Umov_rm8_r8).u32(0).into(), DecoderOptions::UMOV)]));
    let movups_store = mandatory(
        c1(T::WV, C::Movups_xmmm128_xmm),
        c1(T::WV, C::Movupd_xmmm128_xmm),
        c1(T::WV, C::Movss_xmmm32_xmm),
        c1(T::WV, C::Movsd_xmmm64_xmm),
    );
    let umov_store = c3(T::Ev_Gv, C::Umov_rm16_r16, C::Umov_rm32_r32, C::Umov_rm64_r64).u32(0);
    map.set(0x11, options(movups_store, vec![(umov_store.into(), DecoderOptions::UMOV)]));
    let all_prefixes = LegacyHandlerFlags::all().bits();
    map.set(
        0x12,
        NodeSpec::new(T::MandatoryPrefix3)
            .handlers(entries![
                c1(T::VW, C::Movhlps_xmm_xmm),
                Entry::Invalid,
                c1(T::VW, C::Movsldup_xmm_xmmm128),
                c1(T::VW, C::Movddup_xmm_xmmm64)
            ])
            .handlers(entries![
                c1(T::VM, C::Movlps_xmm_m64),
                c1(T::VM, C::Movlpd_xmm_m64),
                c1(T::VW, C::Movsldup_xmm_xmmm128),
                c1(T::VW, C::Movddup_xmm_xmmm64)
            ])
            .u32(all_prefixes),
    );
    map.set(0x13, mandatory(c1(T::MV, C::Movlps_m64_xmm), c1(T::MV, C::Movlpd_m64_xmm), Entry::Invalid, Entry::Invalid));
    map.set(0x14, sse_packed(C::Unpcklps_xmm_xmmm128, C::Unpcklpd_xmm_xmmm128));
    map.set(0x15, sse_packed(C::Unpckhps_xmm_xmmm128, C::Unpckhpd_xmm_xmmm128));
    map.set(
        0x16,
        NodeSpec::new(T::MandatoryPrefix3)
            .handlers(entries![c1(T::VW, C::Movlhps_xmm_xmm), Entry::Invalid, c1(T::VW, C::Movshdup_xmm_xmmm128), Entry::Invalid])
            .handlers(entries![
                c1(T::VM, C::Movhps_xmm_m64),
                c1(T::VM, C::Movhpd_xmm_m64),
                c1(T::VW, C::Movshdup_xmm_xmmm128),
                Entry::Invalid
            ])
            .u32(all_prefixes),
    );
    map.set(0x17, mandatory(c1(T::MV, C::Movhps_m64_xmm), c1(T::MV, C::Movhpd_m64_xmm), Entry::Invalid, Entry::Invalid));

    let nop18 = c3(T::Ev, C::Reservednop_rm16_r16_0F18, C::Reservednop_rm32_r32_0F18, C::Reservednop_rm64_r64_0F18).u32(0);
    #[rustfmt::skip]
    let prefetch = group(w, entries![
        c1(T::M, C::Prefetchnta_m8), c1(T::M, C::Prefetcht0_m8), c1(T::M, C::Prefetcht1_m8), c1(T::M, C::Prefetcht2_m8),
        nop18.clone(), nop18.clone(), nop18.clone(), nop18.clone(),
    ])?;
    map.set(0x18, options(prefetch, vec![(nop18.into(), DecoderOptions::FORCE_RESERVED_NOP)]));

    let nop19 = c3(T::Ev, C::Reservednop_rm16_r16_0F19, C::Reservednop_rm32_r32_0F19, C::Reservednop_rm64_r64_0F19).u32(0);
    map.set(0x19, nop19);
    let nop1a = c3(T::Ev, C::Reservednop_rm16_r16_0F1A, C::Reservednop_rm32_r32_0F1A, C::Reservednop_rm64_r64_0F1A).u32(0);
    let mpx1a = mandatory(
        c1(T::B_MIB, C::Bndldx_bnd_mib),
        c2(T::B_M, C::Bndmov_bnd_bndm64, C::Bndmov_bnd_bndm128),
        c2(T::B_Ev, C::Bndcl_bnd_rm32, C::Bndcl_bnd_rm64),
        c2(T::B_Ev, C::Bndcu_bnd_rm32, C::Bndcu_bnd_rm64),
    );
    map.set(0x1A, options(nop1a, vec![(mpx1a.into(), DecoderOptions::MPX)]));
    let nop1b = c3(T::Ev, C::Reservednop_rm16_r16_0F1B, C::Reservednop_rm32_r32_0F1B, C::Reservednop_rm64_r64_0F1B).u32(0);
    let mpx1b = mandatory(
        c1(T::MIB_B, C::Bndstx_mib_bnd),
        c2(T::M_B, C::Bndmov_bndm64_bnd, C::Bndmov_bndm128_bnd),
        c2(T::B_Ev, C::Bndmk_bnd_m32, C::Bndmk_bnd_m64),
        c2(T::B_Ev, C::Bndcn_bnd_rm32, C::Bndcn_bnd_rm64),
    );
    map.set(0x1B, options(nop1b, vec![(mpx1b.into(), DecoderOptions::MPX)]));
    let nop1c = c3(T::Ev, C::Reservednop_rm16_r16_0F1C, C::Reservednop_rm32_r32_0F1C, C::Reservednop_rm64_r64_0F1C).u32(0);
    map.set(0x1C, nop1c);
    let nop1d = c3(T::Ev, C::Reservednop_rm16_r16_0F1D, C::Reservednop_rm32_r32_0F1D, C::Reservednop_rm64_r64_0F1D).u32(0);
    map.set(0x1D, nop1d);
    let nop1e = w.handler(
        c3(T::Ev, C::Reservednop_rm16_r16_0F1E, C::Reservednop_rm32_r32_0F1E, C::Reservednop_rm64_r64_0F1E).u32(0),
    )?;
    let mut cet = null_group64();
    cet[0x3A] = simple(C::Endbr64).into();
    cet[0x3B] = simple(C::Endbr32).into();
    let cet = group8x64(w, std::array::from_fn(|_| Entry::Ref(nop1e)), cet)?;
    map.set(0x1E, mandatory(nop1e, nop1e, cet, nop1e));
    let nop1f = c3(T::Ev, C::Reservednop_rm16_r16_0F1F, C::Reservednop_rm32_r32_0F1F, C::Reservednop_rm64_r64_0F1F).u32(0);
    #[rustfmt::skip]
    let grp1f = group(w, entries![
        c3(T::Ev, C::Nop_rm16, C::Nop_rm32, C::Nop_rm64).u32(0),
        nop1f.clone(), nop1f.clone(), nop1f.clone(), nop1f.clone(), nop1f.clone(), nop1f.clone(), nop1f,
    ])?;
    map.set(0x1F, grp1f);

    map.set(0x20, c2(T::Rd_Cr, C::Mov_r32_cr, C::Mov_r64_cr).reg(R::CR0));
    map.set(0x21, c2(T::Rd_Cr, C::Mov_r32_dr, C::Mov_r64_dr).reg(R::DR0));
    map.set(0x22, c2(T::Cr_Rd, C::Mov_cr_r32, C::Mov_cr_r64).reg(R::CR0));
    map.set(0x23, c2(T::Cr_Rd, C::Mov_dr_r32, C::Mov_dr_r64).reg(R::DR0));
    map.set(0x28, sse_packed(C::Movaps_xmm_xmmm128, C::Movapd_xmm_xmmm128));
    map.set(0x29, mandatory(c1(T::WV, C::Movaps_xmmm128_xmm), c1(T::WV, C::Movapd_xmmm128_xmm), Entry::Invalid, Entry::Invalid));
    map.set(
        0x2A,
        mandatory(
            c1(T::VQ, C::Cvtpi2ps_xmm_mmm64),
            c1(T::VQ, C::Cvtpi2pd_xmm_mmm64),
            c2(T::V_Ev, C::Cvtsi2ss_xmm_rm32, C::Cvtsi2ss_xmm_rm64),
            c2(T::V_Ev, C::Cvtsi2sd_xmm_rm32, C::Cvtsi2sd_xmm_rm64),
        ),
    );
    map.set(0x2B, mandatory(c1(T::MV, C::Movntps_m128_xmm), c1(T::MV, C::Movntpd_m128_xmm), Entry::Invalid, Entry::Invalid));
    map.set(
        0x2C,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            c2(T::Gv_W, C::Cvttss2si_r32_xmmm32, C::Cvttss2si_r64_xmmm32),
            c2(T::Gv_W, C::Cvttsd2si_r32_xmmm64, C::Cvttsd2si_r64_xmmm64),
        ),
    );
    map.set(
        0x2D,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            c2(T::Gv_W, C::Cvtss2si_r32_xmmm32, C::Cvtss2si_r64_xmmm32),
            c2(T::Gv_W, C::Cvtsd2si_r32_xmmm64, C::Cvtsd2si_r64_xmmm64),
        ),
    );
    map.set(0x2E, sse_packed(C::Ucomiss_xmm_xmmm32, C::Ucomisd_xmm_xmmm64));
    map.set(0x2F, sse_packed(C::Comiss_xmm_xmmm32, C::Comisd_xmm_xmmm64));

    map.set_all(0x30, [C::Wrmsr, C::Rdtsc, C::Rdmsr, C::Rdpmc, C::Sysenter, C::Sysexit].map(simple));
    map.set(0x37, simple(C::Getsec));

    #[rustfmt::skip]
    let cmovcc = [
        [C::Cmovo_r16_rm16, C::Cmovo_r32_rm32, C::Cmovo_r64_rm64],
        [C::Cmovno_r16_rm16, C::Cmovno_r32_rm32, C::Cmovno_r64_rm64],
        [C::Cmovb_r16_rm16, C::Cmovb_r32_rm32, C::Cmovb_r64_rm64],
        [C::Cmovae_r16_rm16, C::Cmovae_r32_rm32, C::Cmovae_r64_rm64],
        [C::Cmove_r16_rm16, C::Cmove_r32_rm32, C::Cmove_r64_rm64],
        [C::Cmovne_r16_rm16, C::Cmovne_r32_rm32, C::Cmovne_r64_rm64],
        [C::Cmovbe_r16_rm16, C::Cmovbe_r32_rm32, C::Cmovbe_r64_rm64],
        [C::Cmova_r16_rm16, C::Cmova_r32_rm32, C::Cmova_r64_rm64],
        [C::Cmovs_r16_rm16, C::Cmovs_r32_rm32, C::Cmovs_r64_rm64],
        [C::Cmovns_r16_rm16, C::Cmovns_r32_rm32, C::Cmovns_r64_rm64],
        [C::Cmovp_r16_rm16, C::Cmovp_r32_rm32, C::Cmovp_r64_rm64],
        [C::Cmovnp_r16_rm16, C::Cmovnp_r32_rm32, C::Cmovnp_r64_rm64],
        [C::Cmovl_r16_rm16, C::Cmovl_r32_rm32, C::Cmovl_r64_rm64],
        [C::Cmovge_r16_rm16, C::Cmovge_r32_rm32, C::Cmovge_r64_rm64],
        [C::Cmovle_r16_rm16, C::Cmovle_r32_rm32, C::Cmovle_r64_rm64],
        [C::Cmovg_r16_rm16, C::Cmovg_r32_rm32, C::Cmovg_r64_rm64],
    ];
    for (n, [c16, c32, c64]) in cmovcc.into_iter().enumerate() {
        map.set(0x40 + n as u8, c3(T::Gv_Ev, c16, c32, c64));
    }

    map.set(0x50, sse_packed_gpr(C::Movmskps_r32_xmm, C::Movmskps_r64_xmm, C::Movmskpd_r32_xmm, C::Movmskpd_r64_xmm));
    map.set(0x51, sse_fp(C::Sqrtps_xmm_xmmm128, C::Sqrtpd_xmm_xmmm128, C::Sqrtss_xmm_xmmm32, C::Sqrtsd_xmm_xmmm64));
    map.set(0x52, mandatory(c1(T::VW, C::Rsqrtps_xmm_xmmm128), Entry::Invalid, c1(T::VW, C::Rsqrtss_xmm_xmmm32), Entry::Invalid));
    map.set(0x53, mandatory(c1(T::VW, C::Rcpps_xmm_xmmm128), Entry::Invalid, c1(T::VW, C::Rcpss_xmm_xmmm32), Entry::Invalid));
    map.set(0x54, sse_packed(C::Andps_xmm_xmmm128, C::Andpd_xmm_xmmm128));
    map.set(0x55, sse_packed(C::Andnps_xmm_xmmm128, C::Andnpd_xmm_xmmm128));
    map.set(0x56, sse_packed(C::Orps_xmm_xmmm128, C::Orpd_xmm_xmmm128));
    map.set(0x57, sse_packed(C::Xorps_xmm_xmmm128, C::Xorpd_xmm_xmmm128));
    map.set(0x58, sse_fp(C::Addps_xmm_xmmm128, C::Addpd_xmm_xmmm128, C::Addss_xmm_xmmm32, C::Addsd_xmm_xmmm64));
    map.set(0x59, sse_fp(C::Mulps_xmm_xmmm128, C::Mulpd_xmm_xmmm128, C::Mulss_xmm_xmmm32, C::Mulsd_xmm_xmmm64));
    map.set(0x5A, sse_fp(C::Cvtps2pd_xmm_xmmm64, C::Cvtpd2ps_xmm_xmmm128, C::Cvtss2sd_xmm_xmmm32, C::Cvtsd2ss_xmm_xmmm64));
    map.set(0x5B, mandatory(c1(T::VW, C::Cvtdq2ps_xmm_xmmm128), c1(T::VW, C::Cvtps2dq_xmm_xmmm128), c1(T::VW, C::Cvttps2dq_xmm_xmmm128), Entry::Invalid));
    map.set(0x5C, sse_fp(C::Subps_xmm_xmmm128, C::Subpd_xmm_xmmm128, C::Subss_xmm_xmmm32, C::Subsd_xmm_xmmm64));
    map.set(0x5D, sse_fp(C::Minps_xmm_xmmm128, C::Minpd_xmm_xmmm128, C::Minss_xmm_xmmm32, C::Minsd_xmm_xmmm64));
    map.set(0x5E, sse_fp(C::Divps_xmm_xmmm128, C::Divpd_xmm_xmmm128, C::Divss_xmm_xmmm32, C::Divsd_xmm_xmmm64));
    map.set(0x5F, sse_fp(C::Maxps_xmm_xmmm128, C::Maxpd_xmm_xmmm128, C::Maxss_xmm_xmmm32, C::Maxsd_xmm_xmmm64));

    #[rustfmt::skip]
    let mmx_60 = [
        (C::Punpcklbw_mm_mmm32, C::Punpcklbw_xmm_xmmm128), (C::Punpcklwd_mm_mmm32, C::Punpcklwd_xmm_xmmm128),
        (C::Punpckldq_mm_mmm32, C::Punpckldq_xmm_xmmm128), (C::Packsswb_mm_mmm64, C::Packsswb_xmm_xmmm128),
        (C::Pcmpgtb_mm_mmm64, C::Pcmpgtb_xmm_xmmm128), (C::Pcmpgtw_mm_mmm64, C::Pcmpgtw_xmm_xmmm128),
        (C::Pcmpgtd_mm_mmm64, C::Pcmpgtd_xmm_xmmm128), (C::Packuswb_mm_mmm64, C::Packuswb_xmm_xmmm128),
        (C::Punpckhbw_mm_mmm64, C::Punpckhbw_xmm_xmmm128), (C::Punpckhwd_mm_mmm64, C::Punpckhwd_xmm_xmmm128),
        (C::Punpckhdq_mm_mmm64, C::Punpckhdq_xmm_xmmm128), (C::Packssdw_mm_mmm64, C::Packssdw_xmm_xmmm128),
    ];
    for (n, (mm, xmm)) in mmx_60.into_iter().enumerate() {
        map.set(0x60 + n as u8, mmx_sse2(mm, xmm));
    }
    map.set(0x6C, only66(c1(T::VW, C::Punpcklqdq_xmm_xmmm128)));
    map.set(0x6D, only66(c1(T::VW, C::Punpckhqdq_xmm_xmmm128)));
    map.set(
        0x6E,
        mandatory(
            c2(T::P_Ev, C::Movd_mm_rm32, C::Movq_mm_rm64),
            c2(T::V_Ev, C::Movd_xmm_rm32, C::Movq_xmm_rm64),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x6F,
        mandatory(c1(T::P_Q, C::Movq_mm_mmm64), c1(T::VW, C::Movdqa_xmm_xmmm128), c1(T::VW, C::Movdqu_xmm_xmmm128), Entry::Invalid),
    );
    map.set(
        0x70,
        mandatory(
            c1(T::P_Q_Ib, C::Pshufw_mm_mmm64_imm8),
            c1(T::VW_Ib, C::Pshufd_xmm_xmmm128_imm8),
            c1(T::VW_Ib, C::Pshufhw_xmm_xmmm128_imm8),
            c1(T::VW_Ib, C::Pshuflw_xmm_xmmm128_imm8),
        ),
    );
    let shift = |mm: C, xmm: C| mandatory(c1(T::N_Ib, mm), c1(T::R_Ib, xmm), Entry::Invalid, Entry::Invalid);
    let mut grp71 = invalid_group();
    grp71[2] = shift(C::Psrlw_mm_imm8, C::Psrlw_xmm_imm8).into();
    grp71[4] = shift(C::Psraw_mm_imm8, C::Psraw_xmm_imm8).into();
    grp71[6] = shift(C::Psllw_mm_imm8, C::Psllw_xmm_imm8).into();
    map.set(0x71, group(w, grp71)?);
    let mut grp72 = invalid_group();
    grp72[2] = shift(C::Psrld_mm_imm8, C::Psrld_xmm_imm8).into();
    grp72[4] = shift(C::Psrad_mm_imm8, C::Psrad_xmm_imm8).into();
    grp72[6] = shift(C::Pslld_mm_imm8, C::Pslld_xmm_imm8).into();
    map.set(0x72, group(w, grp72)?);
    let mut grp73 = invalid_group();
    grp73[2] = shift(C::Psrlq_mm_imm8, C::Psrlq_xmm_imm8).into();
    grp73[3] = only66(c1(T::R_Ib, C::Psrldq_xmm_imm8)).into();
    grp73[6] = shift(C::Psllq_mm_imm8, C::Psllq_xmm_imm8).into();
    grp73[7] = only66(c1(T::R_Ib, C::Pslldq_xmm_imm8)).into();
    map.set(0x73, group(w, grp73)?);
    map.set(0x74, mmx_sse2(C::Pcmpeqb_mm_mmm64, C::Pcmpeqb_xmm_xmmm128));
    map.set(0x75, mmx_sse2(C::Pcmpeqw_mm_mmm64, C::Pcmpeqw_xmm_xmmm128));
    map.set(0x76, mmx_sse2(C::Pcmpeqd_mm_mmm64, C::Pcmpeqd_xmm_xmmm128));
    map.set(0x77, simple(C::Emms));
    map.set(
        0x7E,
        mandatory(
            c2(T::Ev_P, C::Movd_rm32_mm, C::Movq_rm64_mm),
            c2(T::Ev_V, C::Movd_rm32_xmm, C::Movq_rm64_xmm),
            c1(T::VW, C::Movq_xmm_xmmm64),
            Entry::Invalid,
        ),
    );
    map.set(
        0x7F,
        mandatory(c1(T::Q_P, C::Movq_mmm64_mm), c1(T::WV, C::Movdqa_xmmm128_xmm), c1(T::WV, C::Movdqu_xmmm128_xmm), Entry::Invalid),
    );

    #[rustfmt::skip]
    let jcc = [
        [C::Jo_rel16, C::Jo_rel32_32, C::Jo_rel32_64],
        [C::Jno_rel16, C::Jno_rel32_32, C::Jno_rel32_64],
        [C::Jb_rel16, C::Jb_rel32_32, C::Jb_rel32_64],
        [C::Jae_rel16, C::Jae_rel32_32, C::Jae_rel32_64],
        [C::Je_rel16, C::Je_rel32_32, C::Je_rel32_64],
        [C::Jne_rel16, C::Jne_rel32_32, C::Jne_rel32_64],
        [C::Jbe_rel16, C::Jbe_rel32_32, C::Jbe_rel32_64],
        [C::Ja_rel16, C::Ja_rel32_32, C::Ja_rel32_64],
        [C::Js_rel16, C::Js_rel32_32, C::Js_rel32_64],
        [C::Jns_rel16, C::Jns_rel32_32, C::Jns_rel32_64],
        [C::Jp_rel16, C::Jp_rel32_32, C::Jp_rel32_64],
        [C::Jnp_rel16, C::Jnp_rel32_32, C::Jnp_rel32_64],
        [C::Jl_rel16, C::Jl_rel32_32, C::Jl_rel32_64],
        [C::Jge_rel16, C::Jge_rel32_32, C::Jge_rel32_64],
        [C::Jle_rel16, C::Jle_rel32_32, C::Jle_rel32_64],
        [C::Jg_rel16, C::Jg_rel32_32, C::Jg_rel32_64],
    ];
    for (n, [c16, c32, c64]) in jcc.into_iter().enumerate() {
        map.set(0x80 + n as u8, c3(T::Jz, c16, c32, c64));
    }
    #[rustfmt::skip]
    let setcc = [
        C::Seto_rm8, C::Setno_rm8, C::Setb_rm8, C::Setae_rm8, C::Sete_rm8, C::Setne_rm8, C::Setbe_rm8, C::Seta_rm8,
        C::Sets_rm8, C::Setns_rm8, C::Setp_rm8, C::Setnp_rm8, C::Setl_rm8, C::Setge_rm8, C::Setle_rm8, C::Setg_rm8,
    ];
    for (n, code) in setcc.into_iter().enumerate() {
        map.set(0x90 + n as u8, c1(T::Eb, code).u32(0));
    }

    map.set(0xA0, c3(T::PushSimpleReg, C::Pushw_FS, C::Pushd_FS, C::Pushq_FS).reg(R::FS));
    map.set(0xA1, c3(T::PushSimpleReg, C::Popw_FS, C::Popd_FS, C::Popq_FS).reg(R::FS));
    map.set(0xA2, simple(C::Cpuid));
    map.set(0xA3, c3(T::Ev_Gv, C::Bt_rm16_r16, C::Bt_rm32_r32, C::Bt_rm64_r64).u32(0));
    map.set(0xA4, c3(T::Ev_Gv_Ib, C::Shld_rm16_r16_imm8, C::Shld_rm32_r32_imm8, C::Shld_rm64_r64_imm8));
    map.set(0xA5, c3(T::Ev_Gv_CL, C::Shld_rm16_r16_CL, C::Shld_rm32_r32_CL, C::Shld_rm64_r64_CL));
    map.set(0xA8, c3(T::PushSimpleReg, C::Pushw_GS, C::Pushd_GS, C::Pushq_GS).reg(R::GS));
    map.set(0xA9, c3(T::PushSimpleReg, C::Popw_GS, C::Popd_GS, C::Popq_GS).reg(R::GS));
    map.set(0xAA, simple(C::Rsm));
    map.set(0xAB, c3(T::Ev_Gv, C::Bts_rm16_r16, C::Bts_rm32_r32, C::Bts_rm64_r64).u32(LOCK));
    map.set(0xAC, c3(T::Ev_Gv_Ib, C::Shrd_rm16_r16_imm8, C::Shrd_rm32_r32_imm8, C::Shrd_rm64_r64_imm8));
    map.set(0xAD, c3(T::Ev_Gv_CL, C::Shrd_rm16_r16_CL, C::Shrd_rm32_r32_CL, C::Shrd_rm64_r64_CL));
    let mut ae_fine = null_group64();
    row(&mut ae_fine, 5, simple(C::Lfence));
    row(&mut ae_fine, 6, simple(C::Mfence));
    row(&mut ae_fine, 7, simple(C::Sfence));
    #[rustfmt::skip]
    let grp_ae = group8x64(
        w,
        entries![
            c1(T::M, C::Fxsave_m512byte), c1(T::M, C::Fxrstor_m512byte), c1(T::M, C::Ldmxcsr_m32), c1(T::M, C::Stmxcsr_m32),
            c1(T::M, C::Xsave_mem), c1(T::M, C::Xrstor_mem), c1(T::M, C::Xsaveopt_mem), c1(T::M, C::Clflush_m8),
        ],
        ae_fine,
    )?;
    map.set(0xAE, grp_ae);
    map.set(0xAF, c3(T::Gv_Ev, C::Imul_r16_rm16, C::Imul_r32_rm32, C::Imul_r64_rm64));

    map.set(0xB0, c1(T::Eb_Gb, C::Cmpxchg_rm8_r8).u32(LOCK));
    map.set(0xB1, c3(T::Ev_Gv, C::Cmpxchg_rm16_r16, C::Cmpxchg_rm32_r32, C::Cmpxchg_rm64_r64).u32(LOCK));
    map.set(0xB2, c3(T::Gv_Mp, C::Lss_r16_m1616, C::Lss_r32_m1632, C::Lss_r64_m1664));
    map.set(0xB3, c3(T::Ev_Gv, C::Btr_rm16_r16, C::Btr_rm32_r32, C::Btr_rm64_r64).u32(LOCK));
    map.set(0xB4, c3(T::Gv_Mp, C::Lfs_r16_m1616, C::Lfs_r32_m1632, C::Lfs_r64_m1664));
    map.set(0xB5, c3(T::Gv_Mp, C::Lgs_r16_m1616, C::Lgs_r32_m1632, C::Lgs_r64_m1664));
    map.set(0xB6, c3(T::Gv_Eb, C::Movzx_r16_rm8, C::Movzx_r32_rm8, C::Movzx_r64_rm8));
    map.set(0xB7, c3(T::Gv_Ew, C::Movzx_r16_rm16, C::Movzx_r32_rm16, C::Movzx_r64_rm16));
    let f3_modrm = (MandatoryPrefix4Flags::CLEAR_F3 | MandatoryPrefix4Flags::READ_MODRM).bits();
    map.set(
        0xB8,
        NodeSpec::new(T::MandatoryPrefix4)
            .handlers(entries![
                Entry::Invalid,
                Entry::Invalid,
                c3(T::Gv_Ev, C::Popcnt_r16_rm16, C::Popcnt_r32_rm32, C::Popcnt_r64_rm64),
                Entry::Invalid
            ])
            .u32(f3_modrm),
    );
    map.set(0xB9, c3(T::Gv_Ev, C::Ud1_r16_rm16, C::Ud1_r32_rm32, C::Ud1_r64_rm64));
    #[rustfmt::skip]
    let grp_ba = group(w, entries![
        Entry::Invalid, Entry::Invalid, Entry::Invalid, Entry::Invalid,
        c3(T::Ev_Ib2, C::Bt_rm16_imm8, C::Bt_rm32_imm8, C::Bt_rm64_imm8).u32(0),
        c3(T::Ev_Ib2, C::Bts_rm16_imm8, C::Bts_rm32_imm8, C::Bts_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib2, C::Btr_rm16_imm8, C::Btr_rm32_imm8, C::Btr_rm64_imm8).u32(LOCK),
        c3(T::Ev_Ib2, C::Btc_rm16_imm8, C::Btc_rm32_imm8, C::Btc_rm64_imm8).u32(LOCK),
    ])?;
    map.set(0xBA, grp_ba);
    map.set(0xBB, c3(T::Ev_Gv, C::Btc_rm16_r16, C::Btc_rm32_r32, C::Btc_rm64_r64).u32(LOCK));
    let bsf = w.handler(c3(T::Gv_Ev, C::Bsf_r16_rm16, C::Bsf_r32_rm32, C::Bsf_r64_rm64))?;
    let tzcnt = c3(T::Gv_Ev, C::Tzcnt_r16_rm16, C::Tzcnt_r32_rm32, C::Tzcnt_r64_rm64);
    map.set(0xBC, NodeSpec::new(T::MandatoryPrefix4).handlers(entries![bsf, bsf, tzcnt, bsf]).u32(f3_modrm));
    let bsr = w.handler(c3(T::Gv_Ev, C::Bsr_r16_rm16, C::Bsr_r32_rm32, C::Bsr_r64_rm64))?;
    let lzcnt = c3(T::Gv_Ev, C::Lzcnt_r16_rm16, C::Lzcnt_r32_rm32, C::Lzcnt_r64_rm64);
    map.set(0xBD, NodeSpec::new(T::MandatoryPrefix4).handlers(entries![bsr, bsr, lzcnt, bsr]).u32(f3_modrm));
    map.set(0xBE, c3(T::Gv_Eb, C::Movsx_r16_rm8, C::Movsx_r32_rm8, C::Movsx_r64_rm8));
    map.set(0xBF, c3(T::Gv_Ew, C::Movsx_r16_rm16, C::Movsx_r32_rm16, C::Movsx_r64_rm16));

    map.set(0xC0, c1(T::Eb_Gb, C::Xadd_rm8_r8).u32(LOCK));
    map.set(0xC1, c3(T::Ev_Gv, C::Xadd_rm16_r16, C::Xadd_rm32_r32, C::Xadd_rm64_r64).u32(LOCK));
    map.set(
        0xC2,
        mandatory(
            c1(T::VW_Ib, C::Cmpps_xmm_xmmm128_imm8),
            c1(T::VW_Ib, C::Cmppd_xmm_xmmm128_imm8),
            c1(T::VW_Ib, C::Cmpss_xmm_xmmm32_imm8),
            c1(T::VW_Ib, C::Cmpsd_xmm_xmmm64_imm8),
        ),
    );
    map.set(
        0xC6,
        mandatory(c1(T::VW_Ib, C::Shufps_xmm_xmmm128_imm8), c1(T::VW_Ib, C::Shufpd_xmm_xmmm128_imm8), Entry::Invalid, Entry::Invalid),
    );
    #[rustfmt::skip]
    let grp_c7 = group8x8(
        w,
        entries![
            Entry::Invalid,
            c2(T::M_REXW, C::Cmpxchg8b_m64, C::Cmpxchg16b_m128).u32(LOCK),
            Entry::Invalid, Entry::Invalid, Entry::Invalid, Entry::Invalid,
            c1(T::M, C::Vmptrld_m64), c1(T::M, C::Vmptrst_m64),
        ],
        entries![
            Entry::Invalid, Entry::Invalid, Entry::Invalid, Entry::Invalid, Entry::Invalid, Entry::Invalid,
            c3(T::Rv, C::Rdrand_r16, C::Rdrand_r32, C::Rdrand_r64),
            c3(T::Rv, C::Rdseed_r16, C::Rdseed_r32, C::Rdseed_r64),
        ],
    )?;
    map.set(0xC7, grp_c7);
    for n in 0..8u8 {
        map.set(0xC8 + n, c3(T::SimpleReg, C::Bswap_r16, C::Bswap_r32, C::Bswap_r64).u32(n as u32));
    }

    #[rustfmt::skip]
    let sse2_int = [
        (0xD1, C::Psrlw_mm_mmm64, C::Psrlw_xmm_xmmm128), (0xD2, C::Psrld_mm_mmm64, C::Psrld_xmm_xmmm128),
        (0xD3, C::Psrlq_mm_mmm64, C::Psrlq_xmm_xmmm128), (0xD4, C::Paddq_mm_mmm64, C::Paddq_xmm_xmmm128),
        (0xD5, C::Pmullw_mm_mmm64, C::Pmullw_xmm_xmmm128), (0xD8, C::Psubusb_mm_mmm64, C::Psubusb_xmm_xmmm128),
        (0xD9, C::Psubusw_mm_mmm64, C::Psubusw_xmm_xmmm128), (0xDA, C::Pminub_mm_mmm64, C::Pminub_xmm_xmmm128),
        (0xDB, C::Pand_mm_mmm64, C::Pand_xmm_xmmm128), (0xDC, C::Paddusb_mm_mmm64, C::Paddusb_xmm_xmmm128),
        (0xDD, C::Paddusw_mm_mmm64, C::Paddusw_xmm_xmmm128), (0xDE, C::Pmaxub_mm_mmm64, C::Pmaxub_xmm_xmmm128),
        (0xDF, C::Pandn_mm_mmm64, C::Pandn_xmm_xmmm128), (0xE0, C::Pavgb_mm_mmm64, C::Pavgb_xmm_xmmm128),
        (0xE1, C::Psraw_mm_mmm64, C::Psraw_xmm_xmmm128), (0xE2, C::Psrad_mm_mmm64, C::Psrad_xmm_xmmm128),
        (0xE3, C::Pavgw_mm_mmm64, C::Pavgw_xmm_xmmm128), (0xE4, C::Pmulhuw_mm_mmm64, C::Pmulhuw_xmm_xmmm128),
        (0xE5, C::Pmulhw_mm_mmm64, C::Pmulhw_xmm_xmmm128), (0xE8, C::Psubsb_mm_mmm64, C::Psubsb_xmm_xmmm128),
        (0xE9, C::Psubsw_mm_mmm64, C::Psubsw_xmm_xmmm128), (0xEA, C::Pminsw_mm_mmm64, C::Pminsw_xmm_xmmm128),
        (0xEB, C::Por_mm_mmm64, C::Por_xmm_xmmm128), (0xEC, C::Paddsb_mm_mmm64, C::Paddsb_xmm_xmmm128),
        (0xED, C::Paddsw_mm_mmm64, C::Paddsw_xmm_xmmm128), (0xEE, C::Pmaxsw_mm_mmm64, C::Pmaxsw_xmm_xmmm128),
        (0xEF, C::Pxor_mm_mmm64, C::Pxor_xmm_xmmm128), (0xF1, C::Psllw_mm_mmm64, C::Psllw_xmm_xmmm128),
        (0xF2, C::Pslld_mm_mmm64, C::Pslld_xmm_xmmm128), (0xF3, C::Psllq_mm_mmm64, C::Psllq_xmm_xmmm128),
        (0xF4, C::Pmuludq_mm_mmm64, C::Pmuludq_xmm_xmmm128), (0xF5, C::Pmaddwd_mm_mmm64, C::Pmaddwd_xmm_xmmm128),
        (0xF6, C::Psadbw_mm_mmm64, C::Psadbw_xmm_xmmm128), (0xF8, C::Psubb_mm_mmm64, C::Psubb_xmm_xmmm128),
        (0xF9, C::Psubw_mm_mmm64, C::Psubw_xmm_xmmm128), (0xFA, C::Psubd_mm_mmm64, C::Psubd_xmm_xmmm128),
        (0xFB, C::Psubq_mm_mmm64, C::Psubq_xmm_xmmm128), (0xFC, C::Paddb_mm_mmm64, C::Paddb_xmm_xmmm128),
        (0xFD, C::Paddw_mm_mmm64, C::Paddw_xmm_xmmm128), (0xFE, C::Paddd_mm_mmm64, C::Paddd_xmm_xmmm128),
    ];
    for (opcode, mm, xmm) in sse2_int {
        map.set(opcode, mmx_sse2(mm, xmm));
    }
    map.set(0xD6, only66(c1(T::WV, C::Movq_xmmm64_xmm)));
    map.set(0xE7, mandatory(c1(T::M_P, C::Movntq_m64_mm), c1(T::MV, C::Movntdq_m128_xmm), Entry::Invalid, Entry::Invalid));
    map.set(0xFF, c3(T::Gv_Ev, C::Ud0_r16_rm16, C::Ud0_r32_rm32, C::Ud0_r64_rm64));

    Ok(map)
}

/// `movmskps`/`movmskpd`: GPR destination picked by REX.W.
fn sse_packed_gpr(ps32: C, ps64: C, pd32: C, pd64: C) -> NodeSpec {
    mandatory(c2(T::Gv_W, ps32, ps64), c2(T::Gv_W, pd32, pd64), Entry::Invalid, Entry::Invalid)
}

fn map0f38() -> OpcodeMap {
    let mut map = OpcodeMap::new();

    #[rustfmt::skip]
    let ssse3 = [
        (0x00, C::Pshufb_mm_mmm64, C::Pshufb_xmm_xmmm128), (0x01, C::Phaddw_mm_mmm64, C::Phaddw_xmm_xmmm128),
        (0x02, C::Phaddd_mm_mmm64, C::Phaddd_xmm_xmmm128), (0x03, C::Phaddsw_mm_mmm64, C::Phaddsw_xmm_xmmm128),
        (0x04, C::Pmaddubsw_mm_mmm64, C::Pmaddubsw_xmm_xmmm128), (0x05, C::Phsubw_mm_mmm64, C::Phsubw_xmm_xmmm128),
        (0x06, C::Phsubd_mm_mmm64, C::Phsubd_xmm_xmmm128), (0x07, C::Phsubsw_mm_mmm64, C::Phsubsw_xmm_xmmm128),
        (0x08, C::Psignb_mm_mmm64, C::Psignb_xmm_xmmm128), (0x09, C::Psignw_mm_mmm64, C::Psignw_xmm_xmmm128),
        (0x0A, C::Psignd_mm_mmm64, C::Psignd_xmm_xmmm128), (0x0B, C::Pmulhrsw_mm_mmm64, C::Pmulhrsw_xmm_xmmm128),
        (0x1C, C::Pabsb_mm_mmm64, C::Pabsb_xmm_xmmm128), (0x1D, C::Pabsw_mm_mmm64, C::Pabsw_xmm_xmmm128),
        (0x1E, C::Pabsd_mm_mmm64, C::Pabsd_xmm_xmmm128),
    ];
    for (opcode, mm, xmm) in ssse3 {
        map.set(opcode, mmx_sse2(mm, xmm));
    }

    #[rustfmt::skip]
    let sse4 = [
        (0x10, C::Pblendvb_xmm_xmmm128), (0x14, C::Blendvps_xmm_xmmm128), (0x15, C::Blendvpd_xmm_xmmm128),
        (0x17, C::Ptest_xmm_xmmm128), (0x20, C::Pmovsxbw_xmm_xmmm64), (0x21, C::Pmovsxbd_xmm_xmmm32),
        (0x22, C::Pmovsxbq_xmm_xmmm16), (0x23, C::Pmovsxwd_xmm_xmmm64), (0x24, C::Pmovsxwq_xmm_xmmm32),
        (0x25, C::Pmovsxdq_xmm_xmmm64), (0x28, C::Pmuldq_xmm_xmmm128), (0x29, C::Pcmpeqq_xmm_xmmm128),
        (0x2B, C::Packusdw_xmm_xmmm128), (0x30, C::Pmovzxbw_xmm_xmmm64), (0x31, C::Pmovzxbd_xmm_xmmm32),
        (0x32, C::Pmovzxbq_xmm_xmmm16), (0x33, C::Pmovzxwd_xmm_xmmm64), (0x34, C::Pmovzxwq_xmm_xmmm32),
        (0x35, C::Pmovzxdq_xmm_xmmm64), (0x37, C::Pcmpgtq_xmm_xmmm128), (0x38, C::Pminsb_xmm_xmmm128),
        (0x39, C::Pminsd_xmm_xmmm128), (0x3A, C::Pminuw_xmm_xmmm128), (0x3B, C::Pminud_xmm_xmmm128),
        (0x3C, C::Pmaxsb_xmm_xmmm128), (0x3D, C::Pmaxsd_xmm_xmmm128), (0x3E, C::Pmaxuw_xmm_xmmm128),
        (0x3F, C::Pmaxud_xmm_xmmm128), (0x40, C::Pmulld_xmm_xmmm128), (0x41, C::Phminposuw_xmm_xmmm128),
        (0xDB, C::Aesimc_xmm_xmmm128), (0xDC, C::Aesenc_xmm_xmmm128), (0xDD, C::Aesenclast_xmm_xmmm128),
        (0xDE, C::Aesdec_xmm_xmmm128), (0xDF, C::Aesdeclast_xmm_xmmm128),
    ];
    for (opcode, code) in sse4 {
        map.set(opcode, only66(c1(T::VW, code)));
    }
    map.set(0x2A, only66(c1(T::VM, C::Movntdqa_xmm_m128)));

    let f2_modrm = (MandatoryPrefix4Flags::CLEAR_F2 | MandatoryPrefix4Flags::READ_MODRM).bits();
    let movbe_load = c3(T::Gv_Mv, C::Movbe_r16_m16, C::Movbe_r32_m32, C::Movbe_r64_m64);
    map.set(
        0xF0,
        NodeSpec::new(T::MandatoryPrefix4)
            .handlers(entries![
                movbe_load.clone(),
                movbe_load,
                Entry::Invalid,
                c2(T::Gd_Eb, C::Crc32_r32_rm8, C::Crc32_r64_rm8)
            ])
            .u32(f2_modrm),
    );
    let movbe_store = c3(T::Mv_Gv, C::Movbe_m16_r16, C::Movbe_m32_r32, C::Movbe_m64_r64);
    map.set(
        0xF1,
        NodeSpec::new(T::MandatoryPrefix4)
            .handlers(entries![
                movbe_store.clone(),
                movbe_store,
                Entry::Invalid,
                c3(T::Gd_Ev, C::Crc32_r32_rm16, C::Crc32_r32_rm32, C::Crc32_r64_rm64)
            ])
            .u32(f2_modrm),
    );

    map
}

fn map0f3a() -> OpcodeMap {
    let mut map = OpcodeMap::new();

    #[rustfmt::skip]
    let sse4 = [
        (0x08, C::Roundps_xmm_xmmm128_imm8), (0x09, C::Roundpd_xmm_xmmm128_imm8),
        (0x0A, C::Roundss_xmm_xmmm32_imm8), (0x0B, C::Roundsd_xmm_xmmm64_imm8),
        (0x0C, C::Blendps_xmm_xmmm128_imm8), (0x0D, C::Blendpd_xmm_xmmm128_imm8),
        (0x0E, C::Pblendw_xmm_xmmm128_imm8), (0x40, C::Dpps_xmm_xmmm128_imm8),
        (0x41, C::Dppd_xmm_xmmm128_imm8), (0x42, C::Mpsadbw_xmm_xmmm128_imm8),
        (0x44, C::Pclmulqdq_xmm_xmmm128_imm8), (0x60, C::Pcmpestrm_xmm_xmmm128_imm8),
        (0x61, C::Pcmpestri_xmm_xmmm128_imm8), (0x62, C::Pcmpistrm_xmm_xmmm128_imm8),
        (0x63, C::Pcmpistri_xmm_xmmm128_imm8), (0xDF, C::Aeskeygenassist_xmm_xmmm128_imm8),
    ];
    for (opcode, code) in sse4 {
        map.set(opcode, only66(c1(T::VW_Ib, code)));
    }
    map.set(
        0x0F,
        mandatory(
            c1(T::P_Q_Ib, C::Palignr_mm_mmm64_imm8),
            c1(T::VW_Ib, C::Palignr_xmm_xmmm128_imm8),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(0x16, only66(c2(T::Ev_V_Ib, C::Pextrd_rm32_xmm_imm8, C::Pextrq_rm64_xmm_imm8)));
    map.set(0x22, only66(c2(T::V_Ev_Ib, C::Pinsrd_xmm_rm32_imm8, C::Pinsrq_xmm_rm64_imm8)));

    map
}
