//! EVEX maps 0F, 0F38 and 0F3A.

use super::{invalid_group, OpcodeMap};
use crate::code::Code as C;
use crate::error::{TableError, TableFamily};
use crate::register::Register as R;
use crate::tables::{Entry, EvexTag as T, NodeSpec, TableWriter};
use crate::tuple_type::TupleType as TT;

const VREGS: [R; 3] = [R::XMM0, R::YMM0, R::ZMM0];

const FULL: [TT; 3] = [TT::N16, TT::N32, TT::N64];
const B32: [TT; 3] = [TT::N16b4, TT::N32b4, TT::N64b4];
const B64: [TT; 3] = [TT::N16b8, TT::N32b8, TT::N64b8];

fn mandatory(
    np: impl Into<Entry>,
    p66: impl Into<Entry>,
    pf3: impl Into<Entry>,
    pf2: impl Into<Entry>,
) -> NodeSpec {
    NodeSpec::new(T::MandatoryPrefix2).handlers(entries![np, p66, pf3, pf2])
}

fn only66(handler: impl Into<Entry>) -> NodeSpec {
    mandatory(Entry::Invalid, handler, Entry::Invalid, Entry::Invalid)
}

fn w(w0: impl Into<Entry>, w1: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::W).handler(w0).handler(w1)
}

fn w0(handler: impl Into<Entry>) -> NodeSpec {
    w(handler, Entry::Invalid)
}

fn w1(handler: impl Into<Entry>) -> NodeSpec {
    w(Entry::Invalid, handler)
}

/// 128/256/512-bit handlers; `L'L = 3` is reserved.
fn vl<E: Into<Entry>>(lengths: [E; 3]) -> NodeSpec {
    NodeSpec::new(T::VectorLength).handlers(lengths).handler(Entry::Invalid)
}

/// Like [`vl`], but a register form with `b` set always takes the 512-bit handler.
fn vl_er<E: Into<Entry>>(lengths: [E; 3]) -> NodeSpec {
    NodeSpec::new(T::VectorLength_er).handlers(lengths).handler(Entry::Invalid)
}

fn l0(handler: impl Into<Entry>) -> NodeSpec {
    vl(entries![handler, Entry::Invalid, Entry::Invalid])
}

fn rm(reg: impl Into<Entry>, mem: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::RM).handler(reg).handler(mem)
}

fn per_length(codes: [C; 3], tuples: [TT; 3], node: impl Fn(C, R, TT) -> NodeSpec) -> [NodeSpec; 3] {
    std::array::from_fn(|n| node(codes[n], VREGS[n], tuples[n]))
}

fn vk_hw(codes: [C; 3], tuples: [TT; 3], broadcast: bool) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::VkHW_3).code(code).reg(reg).tuple(tuple).flag(broadcast)
    }))
}

fn vk_hw_er(codes: [C; 3], tuples: [TT; 3], only_sae: bool) -> NodeSpec {
    vl_er(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::VkHW_er).code(code).reg(reg).tuple(tuple).flag(only_sae).flag(true)
    }))
}

fn vk_hwib(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::VkHWIb_3).code(code).reg(reg).tuple(tuple).flag(true)
    }))
}

fn vk_hwib_er(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl_er(per_length(codes, tuples, |code, reg, tuple| NodeSpec::new(T::VkHWIb_er).code(code).reg(reg).tuple(tuple)))
}

fn vk_w(codes: [C; 3], tuples: [TT; 3], broadcast: bool) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::VkW).code(code).reg(reg).reg(reg).tuple(tuple).flag(broadcast)
    }))
}

fn vk_w_er(codes: [C; 3], tuples: [TT; 3], only_sae: bool) -> NodeSpec {
    vl_er(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::VkW_er).code(code).reg(reg).reg(reg).tuple(tuple).flag(only_sae).flag(true)
    }))
}

fn vk_wib(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::VkWIb).code(code).reg(reg).reg(reg).tuple(tuple).flag(true)
    }))
}

fn vk_wib_er(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl_er(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::VkWIb_er).code(code).reg(reg).reg(reg).tuple(tuple)
    }))
}

/// Full-vector masked store.
fn wk_v(codes: [C; 3]) -> NodeSpec {
    vl(per_length(codes, FULL, |code, reg, tuple| {
        NodeSpec::new(T::WkV).code(code).reg(reg).reg(reg).tuple(tuple).flag(true)
    }))
}

fn hk_wib(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::HkWIb).code(code).reg(reg).reg(reg).tuple(tuple).flag(true)
    }))
}

fn kk_hw(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| NodeSpec::new(T::KkHW).code(code).reg(reg).tuple(tuple).flag(true)))
}

fn kk_hwib(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::KkHWIb).code(code).reg(reg).tuple(tuple).flag(true)
    }))
}

fn kk_hwib_sae(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl_er(per_length(codes, tuples, |code, reg, tuple| {
        NodeSpec::new(T::KkHWIb_sae).code(code).reg(reg).tuple(tuple).flag(true)
    }))
}

fn kk_wib(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| NodeSpec::new(T::KkWIb).code(code).reg(reg).tuple(tuple).flag(true)))
}

fn kp1_hw(codes: [C; 3], tuples: [TT; 3]) -> NodeSpec {
    vl(per_length(codes, tuples, |code, reg, tuple| NodeSpec::new(T::KP1HW).code(code).reg(reg).tuple(tuple).flag(true)))
}

fn vr_k(codes: [C; 3]) -> NodeSpec {
    vl(per_length(codes, FULL, |code, reg, _| NodeSpec::new(T::VRk).code(code).reg(reg)))
}

fn k_r(codes: [C; 3]) -> NodeSpec {
    vl(per_length(codes, FULL, |code, reg, _| NodeSpec::new(T::KR).code(code).reg(reg)))
}

/// Scalar op on the low element; rounding or SAE on the register form.
fn scalar_er(code: C, tuple: TT, only_sae: bool) -> NodeSpec {
    NodeSpec::new(T::VkHW_er).code(code).reg(R::XMM0).tuple(tuple).flag(only_sae).flag(false)
}

/// `ps`/`pd`/`ss`/`sd` arithmetic with rounding control.
fn fp_arith(ps: [C; 3], pd: [C; 3], ss: C, sd: C, only_sae: bool) -> NodeSpec {
    mandatory(
        w0(vk_hw_er(ps, B32, only_sae)),
        w1(vk_hw_er(pd, B64, only_sae)),
        w0(scalar_er(ss, TT::N4, only_sae)),
        w1(scalar_er(sd, TT::N8, only_sae)),
    )
}

pub(super) fn blob() -> Result<Vec<u8>, TableError> {
    let mut tw = TableWriter::new(TableFamily::Evex);
    let map0f = map0f(&mut tw)?;
    let map0f38 = map0f38(&mut tw)?;
    let map0f3a = map0f3a();
    tw.array(map0f.entries())?;
    tw.array(map0f38.entries())?;
    tw.array(map0f3a.entries())?;
    Ok(tw.finish())
}

fn map0f(tw: &mut TableWriter) -> Result<OpcodeMap, TableError> {
    let mut map = OpcodeMap::new();

    map.set(
        0x10,
        mandatory(
            w0(vk_w([C::EVEX_Vmovups_xmm_k1z_xmmm128, C::EVEX_Vmovups_ymm_k1z_ymmm256, C::EVEX_Vmovups_zmm_k1z_zmmm512], FULL, false)),
            w1(vk_w([C::EVEX_Vmovupd_xmm_k1z_xmmm128, C::EVEX_Vmovupd_ymm_k1z_ymmm256, C::EVEX_Vmovupd_zmm_k1z_zmmm512], FULL, false)),
            w0(rm(
                NodeSpec::new(T::VkHW_3).code(C::EVEX_Vmovss_xmm_k1z_xmm_xmm).reg(R::XMM0).tuple(TT::N4).flag(false),
                NodeSpec::new(T::VkM).code(C::EVEX_Vmovss_xmm_k1z_m32).reg(R::XMM0).tuple(TT::N4),
            )),
            w1(rm(
                NodeSpec::new(T::VkHW_3).code(C::EVEX_Vmovsd_xmm_k1z_xmm_xmm).reg(R::XMM0).tuple(TT::N8).flag(false),
                NodeSpec::new(T::VkM).code(C::EVEX_Vmovsd_xmm_k1z_m64).reg(R::XMM0).tuple(TT::N8),
            )),
        ),
    );
    map.set(
        0x11,
        mandatory(
            w0(wk_v([C::EVEX_Vmovups_xmmm128_k1z_xmm, C::EVEX_Vmovups_ymmm256_k1z_ymm, C::EVEX_Vmovups_zmmm512_k1z_zmm])),
            w1(wk_v([C::EVEX_Vmovupd_xmmm128_k1z_xmm, C::EVEX_Vmovupd_ymmm256_k1z_ymm, C::EVEX_Vmovupd_zmmm512_k1z_zmm])),
            w0(rm(
                Entry::Invalid,
                NodeSpec::new(T::WkV).code(C::EVEX_Vmovss_m32_k1_xmm).reg(R::XMM0).reg(R::XMM0).tuple(TT::N4).flag(false),
            )),
            w1(rm(
                Entry::Invalid,
                NodeSpec::new(T::WkV).code(C::EVEX_Vmovsd_m64_k1_xmm).reg(R::XMM0).reg(R::XMM0).tuple(TT::N8).flag(false),
            )),
        ),
    );
    map.set(
        0x14,
        mandatory(
            w0(vk_hw([C::EVEX_Vunpcklps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vunpcklps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vunpcklps_zmm_k1z_zmm_zmmm512b32], B32, true)),
            w1(vk_hw([C::EVEX_Vunpcklpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vunpcklpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vunpcklpd_zmm_k1z_zmm_zmmm512b64], B64, true)),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x28,
        mandatory(
            w0(vk_w([C::EVEX_Vmovaps_xmm_k1z_xmmm128, C::EVEX_Vmovaps_ymm_k1z_ymmm256, C::EVEX_Vmovaps_zmm_k1z_zmmm512], FULL, false)),
            w1(vk_w([C::EVEX_Vmovapd_xmm_k1z_xmmm128, C::EVEX_Vmovapd_ymm_k1z_ymmm256, C::EVEX_Vmovapd_zmm_k1z_zmmm512], FULL, false)),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x29,
        mandatory(
            w0(wk_v([C::EVEX_Vmovaps_xmmm128_k1z_xmm, C::EVEX_Vmovaps_ymmm256_k1z_ymm, C::EVEX_Vmovaps_zmmm512_k1z_zmm])),
            w1(wk_v([C::EVEX_Vmovapd_xmmm128_k1z_xmm, C::EVEX_Vmovapd_ymmm256_k1z_ymm, C::EVEX_Vmovapd_zmmm512_k1z_zmm])),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x2A,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            NodeSpec::new(T::VHEv_er).code2(C::EVEX_Vcvtsi2ss_xmm_xmm_rm32_er, C::EVEX_Vcvtsi2ss_xmm_xmm_rm64_er).reg(R::XMM0),
            NodeSpec::new(T::VHEv_er).code2(C::EVEX_Vcvtsi2sd_xmm_xmm_rm32_er, C::EVEX_Vcvtsi2sd_xmm_xmm_rm64_er).reg(R::XMM0),
        ),
    );
    map.set(
        0x2B,
        mandatory(
            w0(vl(per_length([C::EVEX_Vmovntps_m128_xmm, C::EVEX_Vmovntps_m256_ymm, C::EVEX_Vmovntps_m512_zmm], FULL, |code, reg, tuple| {
                NodeSpec::new(T::MV).code(code).reg(reg).tuple(tuple)
            }))),
            w1(vl(per_length([C::EVEX_Vmovntpd_m128_xmm, C::EVEX_Vmovntpd_m256_ymm, C::EVEX_Vmovntpd_m512_zmm], FULL, |code, reg, tuple| {
                NodeSpec::new(T::MV).code(code).reg(reg).tuple(tuple)
            }))),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    let to_gpr = |ss: [C; 2], sd: [C; 2], only_sae: bool| {
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            NodeSpec::new(T::Gv_W_er).code2(ss[0], ss[1]).reg(R::XMM0).tuple(TT::N4).flag(only_sae),
            NodeSpec::new(T::Gv_W_er).code2(sd[0], sd[1]).reg(R::XMM0).tuple(TT::N8).flag(only_sae),
        )
    };
    map.set(
        0x2C,
        to_gpr(
            [C::EVEX_Vcvttss2si_r32_xmmm32_sae, C::EVEX_Vcvttss2si_r64_xmmm32_sae],
            [C::EVEX_Vcvttsd2si_r32_xmmm64_sae, C::EVEX_Vcvttsd2si_r64_xmmm64_sae],
            true,
        ),
    );
    map.set(
        0x2D,
        to_gpr(
            [C::EVEX_Vcvtss2si_r32_xmmm32_er, C::EVEX_Vcvtss2si_r64_xmmm32_er],
            [C::EVEX_Vcvtsd2si_r32_xmmm64_er, C::EVEX_Vcvtsd2si_r64_xmmm64_er],
            false,
        ),
    );
    #[rustfmt::skip]
    let compares = [
        (0x2E, C::EVEX_Vucomiss_xmm_xmmm32_sae, C::EVEX_Vucomisd_xmm_xmmm64_sae),
        (0x2F, C::EVEX_Vcomiss_xmm_xmmm32_sae, C::EVEX_Vcomisd_xmm_xmmm64_sae),
    ];
    for (opcode, ss, sd) in compares {
        map.set(
            opcode,
            mandatory(
                w0(NodeSpec::new(T::VW).code(ss).reg(R::XMM0).reg(R::XMM0).tuple(TT::N4).flag(true)),
                w1(NodeSpec::new(T::VW).code(sd).reg(R::XMM0).reg(R::XMM0).tuple(TT::N8).flag(true)),
                Entry::Invalid,
                Entry::Invalid,
            ),
        );
    }

    map.set(
        0x51,
        mandatory(
            w0(vk_w_er([C::EVEX_Vsqrtps_xmm_k1z_xmmm128b32, C::EVEX_Vsqrtps_ymm_k1z_ymmm256b32, C::EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er], B32, false)),
            w1(vk_w_er([C::EVEX_Vsqrtpd_xmm_k1z_xmmm128b64, C::EVEX_Vsqrtpd_ymm_k1z_ymmm256b64, C::EVEX_Vsqrtpd_zmm_k1z_zmmm512b64_er], B64, false)),
            w0(scalar_er(C::EVEX_Vsqrtss_xmm_k1z_xmm_xmmm32_er, TT::N4, false)),
            w1(scalar_er(C::EVEX_Vsqrtsd_xmm_k1z_xmm_xmmm64_er, TT::N8, false)),
        ),
    );
    #[rustfmt::skip]
    let logic = [
        (0x54, [C::EVEX_Vandps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vandps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vandps_zmm_k1z_zmm_zmmm512b32],
               [C::EVEX_Vandpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vandpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vandpd_zmm_k1z_zmm_zmmm512b64]),
        (0x57, [C::EVEX_Vxorps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vxorps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vxorps_zmm_k1z_zmm_zmmm512b32],
               [C::EVEX_Vxorpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vxorpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vxorpd_zmm_k1z_zmm_zmmm512b64]),
    ];
    for (opcode, ps, pd) in logic {
        map.set(opcode, mandatory(w0(vk_hw(ps, B32, true)), w1(vk_hw(pd, B64, true)), Entry::Invalid, Entry::Invalid));
    }
    #[rustfmt::skip]
    let arith = [
        (0x58, [C::EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er],
               [C::EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er],
               C::EVEX_Vaddss_xmm_k1z_xmm_xmmm32_er, C::EVEX_Vaddsd_xmm_k1z_xmm_xmmm64_er, false),
        (0x59, [C::EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er],
               [C::EVEX_Vmulpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vmulpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vmulpd_zmm_k1z_zmm_zmmm512b64_er],
               C::EVEX_Vmulss_xmm_k1z_xmm_xmmm32_er, C::EVEX_Vmulsd_xmm_k1z_xmm_xmmm64_er, false),
        (0x5C, [C::EVEX_Vsubps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vsubps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vsubps_zmm_k1z_zmm_zmmm512b32_er],
               [C::EVEX_Vsubpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vsubpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vsubpd_zmm_k1z_zmm_zmmm512b64_er],
               C::EVEX_Vsubss_xmm_k1z_xmm_xmmm32_er, C::EVEX_Vsubsd_xmm_k1z_xmm_xmmm64_er, false),
        (0x5D, [C::EVEX_Vminps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vminps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vminps_zmm_k1z_zmm_zmmm512b32_sae],
               [C::EVEX_Vminpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vminpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vminpd_zmm_k1z_zmm_zmmm512b64_sae],
               C::EVEX_Vminss_xmm_k1z_xmm_xmmm32_sae, C::EVEX_Vminsd_xmm_k1z_xmm_xmmm64_sae, true),
        (0x5E, [C::EVEX_Vdivps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vdivps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vdivps_zmm_k1z_zmm_zmmm512b32_er],
               [C::EVEX_Vdivpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vdivpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vdivpd_zmm_k1z_zmm_zmmm512b64_er],
               C::EVEX_Vdivss_xmm_k1z_xmm_xmmm32_er, C::EVEX_Vdivsd_xmm_k1z_xmm_xmmm64_er, false),
        (0x5F, [C::EVEX_Vmaxps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vmaxps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae],
               [C::EVEX_Vmaxpd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vmaxpd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vmaxpd_zmm_k1z_zmm_zmmm512b64_sae],
               C::EVEX_Vmaxss_xmm_k1z_xmm_xmmm32_sae, C::EVEX_Vmaxsd_xmm_k1z_xmm_xmmm64_sae, true),
    ];
    for (opcode, ps, pd, ss, sd, only_sae) in arith {
        map.set(opcode, fp_arith(ps, pd, ss, sd, only_sae));
    }
    map.set(
        0x5B,
        mandatory(
            w0(vk_w_er([C::EVEX_Vcvtdq2ps_xmm_k1z_xmmm128b32, C::EVEX_Vcvtdq2ps_ymm_k1z_ymmm256b32, C::EVEX_Vcvtdq2ps_zmm_k1z_zmmm512b32_er], B32, false)),
            w0(vk_w_er([C::EVEX_Vcvtps2dq_xmm_k1z_xmmm128b32, C::EVEX_Vcvtps2dq_ymm_k1z_ymmm256b32, C::EVEX_Vcvtps2dq_zmm_k1z_zmmm512b32_er], B32, false)),
            w0(vk_w_er([C::EVEX_Vcvttps2dq_xmm_k1z_xmmm128b32, C::EVEX_Vcvttps2dq_ymm_k1z_ymmm256b32, C::EVEX_Vcvttps2dq_zmm_k1z_zmmm512b32_sae], B32, true)),
            Entry::Invalid,
        ),
    );

    map.set(
        0x66,
        only66(w0(kk_hw([C::EVEX_Vpcmpgtd_kr_k1_xmm_xmmm128b32, C::EVEX_Vpcmpgtd_kr_k1_ymm_ymmm256b32, C::EVEX_Vpcmpgtd_kr_k1_zmm_zmmm512b32], B32))),
    );
    map.set(
        0x6E,
        only66(l0(NodeSpec::new(T::VX_Ev).code2(C::EVEX_Vmovd_xmm_rm32, C::EVEX_Vmovq_xmm_rm64).reg(R::XMM0))),
    );
    map.set(
        0x6F,
        mandatory(
            Entry::Invalid,
            w(
                vk_w([C::EVEX_Vmovdqa32_xmm_k1z_xmmm128, C::EVEX_Vmovdqa32_ymm_k1z_ymmm256, C::EVEX_Vmovdqa32_zmm_k1z_zmmm512], FULL, false),
                vk_w([C::EVEX_Vmovdqa64_xmm_k1z_xmmm128, C::EVEX_Vmovdqa64_ymm_k1z_ymmm256, C::EVEX_Vmovdqa64_zmm_k1z_zmmm512], FULL, false),
            ),
            w(
                vk_w([C::EVEX_Vmovdqu32_xmm_k1z_xmmm128, C::EVEX_Vmovdqu32_ymm_k1z_ymmm256, C::EVEX_Vmovdqu32_zmm_k1z_zmmm512], FULL, false),
                vk_w([C::EVEX_Vmovdqu64_xmm_k1z_xmmm128, C::EVEX_Vmovdqu64_ymm_k1z_ymmm256, C::EVEX_Vmovdqu64_zmm_k1z_zmmm512], FULL, false),
            ),
            w(
                vk_w([C::EVEX_Vmovdqu8_xmm_k1z_xmmm128, C::EVEX_Vmovdqu8_ymm_k1z_ymmm256, C::EVEX_Vmovdqu8_zmm_k1z_zmmm512], FULL, false),
                vk_w([C::EVEX_Vmovdqu16_xmm_k1z_xmmm128, C::EVEX_Vmovdqu16_ymm_k1z_ymmm256, C::EVEX_Vmovdqu16_zmm_k1z_zmmm512], FULL, false),
            ),
        ),
    );
    map.set(
        0x70,
        only66(w0(vk_wib([C::EVEX_Vpshufd_xmm_k1z_xmmm128b32_imm8, C::EVEX_Vpshufd_ymm_k1z_ymmm256b32_imm8, C::EVEX_Vpshufd_zmm_k1z_zmmm512b32_imm8], B32))),
    );

    let mut grp72 = invalid_group();
    grp72[1] = w(
        hk_wib([C::EVEX_Vprord_xmm_k1z_xmmm128b32_imm8, C::EVEX_Vprord_ymm_k1z_ymmm256b32_imm8, C::EVEX_Vprord_zmm_k1z_zmmm512b32_imm8], B32),
        hk_wib([C::EVEX_Vprorq_xmm_k1z_xmmm128b64_imm8, C::EVEX_Vprorq_ymm_k1z_ymmm256b64_imm8, C::EVEX_Vprorq_zmm_k1z_zmmm512b64_imm8], B64),
    )
    .into();
    grp72[2] = w0(hk_wib([C::EVEX_Vpsrld_xmm_k1z_xmmm128b32_imm8, C::EVEX_Vpsrld_ymm_k1z_ymmm256b32_imm8, C::EVEX_Vpsrld_zmm_k1z_zmmm512b32_imm8], B32)).into();
    grp72[4] = w(
        hk_wib([C::EVEX_Vpsrad_xmm_k1z_xmmm128b32_imm8, C::EVEX_Vpsrad_ymm_k1z_ymmm256b32_imm8, C::EVEX_Vpsrad_zmm_k1z_zmmm512b32_imm8], B32),
        hk_wib([C::EVEX_Vpsraq_xmm_k1z_xmmm128b64_imm8, C::EVEX_Vpsraq_ymm_k1z_ymmm256b64_imm8, C::EVEX_Vpsraq_zmm_k1z_zmmm512b64_imm8], B64),
    )
    .into();
    grp72[6] = w0(hk_wib([C::EVEX_Vpslld_xmm_k1z_xmmm128b32_imm8, C::EVEX_Vpslld_ymm_k1z_ymmm256b32_imm8, C::EVEX_Vpslld_zmm_k1z_zmmm512b32_imm8], B32)).into();
    let grp72 = tw.array(&grp72)?;
    map.set(0x72, only66(NodeSpec::new(T::Group).array(grp72)));

    map.set(
        0x76,
        only66(w0(kk_hw([C::EVEX_Vpcmpeqd_kr_k1_xmm_xmmm128b32, C::EVEX_Vpcmpeqd_kr_k1_ymm_ymmm256b32, C::EVEX_Vpcmpeqd_kr_k1_zmm_zmmm512b32], B32))),
    );
    map.set(
        0x7B,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            NodeSpec::new(T::VHEv_er).code2(C::EVEX_Vcvtusi2ss_xmm_xmm_rm32_er, C::EVEX_Vcvtusi2ss_xmm_xmm_rm64_er).reg(R::XMM0),
            // The 32-bit source is exact, so only W1 takes a rounding mode.
            w(
                NodeSpec::new(T::VHEv).code2(C::EVEX_Vcvtusi2sd_xmm_xmm_rm32, C::EVEX_Vcvtusi2sd_xmm_xmm_rm64_er).reg(R::XMM0),
                NodeSpec::new(T::VHEv_er).code2(C::EVEX_Vcvtusi2sd_xmm_xmm_rm32, C::EVEX_Vcvtusi2sd_xmm_xmm_rm64_er).reg(R::XMM0),
            ),
        ),
    );
    map.set(
        0x7E,
        mandatory(
            Entry::Invalid,
            l0(NodeSpec::new(T::Ev_VX).code2(C::EVEX_Vmovd_rm32_xmm, C::EVEX_Vmovq_rm64_xmm).reg(R::XMM0)),
            l0(w1(NodeSpec::new(T::VW).code(C::EVEX_Vmovq_xmm_xmmm64).reg(R::XMM0).reg(R::XMM0).tuple(TT::N8).flag(false))),
            Entry::Invalid,
        ),
    );
    map.set(
        0x7F,
        mandatory(
            Entry::Invalid,
            w(
                wk_v([C::EVEX_Vmovdqa32_xmmm128_k1z_xmm, C::EVEX_Vmovdqa32_ymmm256_k1z_ymm, C::EVEX_Vmovdqa32_zmmm512_k1z_zmm]),
                wk_v([C::EVEX_Vmovdqa64_xmmm128_k1z_xmm, C::EVEX_Vmovdqa64_ymmm256_k1z_ymm, C::EVEX_Vmovdqa64_zmmm512_k1z_zmm]),
            ),
            w(
                wk_v([C::EVEX_Vmovdqu32_xmmm128_k1z_xmm, C::EVEX_Vmovdqu32_ymmm256_k1z_ymm, C::EVEX_Vmovdqu32_zmmm512_k1z_zmm]),
                wk_v([C::EVEX_Vmovdqu64_xmmm128_k1z_xmm, C::EVEX_Vmovdqu64_ymmm256_k1z_ymm, C::EVEX_Vmovdqu64_zmmm512_k1z_zmm]),
            ),
            w(
                wk_v([C::EVEX_Vmovdqu8_xmmm128_k1z_xmm, C::EVEX_Vmovdqu8_ymmm256_k1z_ymm, C::EVEX_Vmovdqu8_zmmm512_k1z_zmm]),
                wk_v([C::EVEX_Vmovdqu16_xmmm128_k1z_xmm, C::EVEX_Vmovdqu16_ymmm256_k1z_ymm, C::EVEX_Vmovdqu16_zmmm512_k1z_zmm]),
            ),
        ),
    );

    map.set(
        0xC2,
        mandatory(
            w0(kk_hwib_sae([C::EVEX_Vcmpps_kr_k1_xmm_xmmm128b32_imm8, C::EVEX_Vcmpps_kr_k1_ymm_ymmm256b32_imm8, C::EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae], B32)),
            w1(kk_hwib_sae([C::EVEX_Vcmppd_kr_k1_xmm_xmmm128b64_imm8, C::EVEX_Vcmppd_kr_k1_ymm_ymmm256b64_imm8, C::EVEX_Vcmppd_kr_k1_zmm_zmmm512b64_imm8_sae], B64)),
            w0(NodeSpec::new(T::KkHWIb_sae).code(C::EVEX_Vcmpss_kr_k1_xmm_xmmm32_imm8_sae).reg(R::XMM0).tuple(TT::N4).flag(false)),
            w1(NodeSpec::new(T::KkHWIb_sae).code(C::EVEX_Vcmpsd_kr_k1_xmm_xmmm64_imm8_sae).reg(R::XMM0).tuple(TT::N8).flag(false)),
        ),
    );
    map.set(
        0xC6,
        mandatory(
            w0(vk_hwib([C::EVEX_Vshufps_xmm_k1z_xmm_xmmm128b32_imm8, C::EVEX_Vshufps_ymm_k1z_ymm_ymmm256b32_imm8, C::EVEX_Vshufps_zmm_k1z_zmm_zmmm512b32_imm8], B32)),
            w1(vk_hwib([C::EVEX_Vshufpd_xmm_k1z_xmm_xmmm128b64_imm8, C::EVEX_Vshufpd_ymm_k1z_ymm_ymmm256b64_imm8, C::EVEX_Vshufpd_zmm_k1z_zmm_zmmm512b64_imm8], B64)),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0xD4,
        only66(w1(vk_hw([C::EVEX_Vpaddq_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vpaddq_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vpaddq_zmm_k1z_zmm_zmmm512b64], B64, true))),
    );
    map.set(
        0xD6,
        only66(l0(w1(NodeSpec::new(T::WV).code(C::EVEX_Vmovq_xmmm64_xmm).reg(R::XMM0).reg(R::XMM0).tuple(TT::N8)))),
    );
    map.set(
        0xDB,
        only66(w(
            vk_hw([C::EVEX_Vpandd_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vpandd_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vpandd_zmm_k1z_zmm_zmmm512b32], B32, true),
            vk_hw([C::EVEX_Vpandq_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vpandq_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vpandq_zmm_k1z_zmm_zmmm512b64], B64, true),
        )),
    );
    map.set(
        0xE7,
        only66(w0(vl(per_length([C::EVEX_Vmovntdq_m128_xmm, C::EVEX_Vmovntdq_m256_ymm, C::EVEX_Vmovntdq_m512_zmm], FULL, |code, reg, tuple| {
            NodeSpec::new(T::MV).code(code).reg(reg).tuple(tuple)
        })))),
    );
    map.set(
        0xEF,
        only66(w(
            vk_hw([C::EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32], B32, true),
            vk_hw([C::EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64], B64, true),
        )),
    );
    map.set(
        0xFE,
        only66(w0(vk_hw([C::EVEX_Vpaddd_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vpaddd_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32], B32, true))),
    );

    Ok(map)
}

fn map0f38(tw: &mut TableWriter) -> Result<OpcodeMap, TableError> {
    let mut map = OpcodeMap::new();

    map.set(
        0x00,
        only66(vk_hw([C::EVEX_Vpshufb_xmm_k1z_xmm_xmmm128, C::EVEX_Vpshufb_ymm_k1z_ymm_ymmm256, C::EVEX_Vpshufb_zmm_k1z_zmm_zmmm512], FULL, false)),
    );

    // Broadcasts read one element (or one 128-bit lane) whatever the destination width.
    let broadcast = |tag: T, codes: [C; 3], source: R, tuple: TT, from_128: bool| {
        let node = |code: C, dest: R| {
            let spec = NodeSpec::new(tag).code(code).reg(dest);
            if tag == T::VkM { spec.tuple(tuple) } else { spec.reg(source).tuple(tuple).flag(false) }
        };
        if from_128 {
            vl(entries![Entry::Invalid, node(codes[1], R::YMM0), node(codes[2], R::ZMM0)])
        } else {
            vl(entries![node(codes[0], R::XMM0), node(codes[1], R::YMM0), node(codes[2], R::ZMM0)])
        }
    };
    map.set(
        0x18,
        only66(w0(broadcast(T::VkW, [C::EVEX_Vbroadcastss_xmm_k1z_xmmm32, C::EVEX_Vbroadcastss_ymm_k1z_xmmm32, C::EVEX_Vbroadcastss_zmm_k1z_xmmm32], R::XMM0, TT::N4, false))),
    );
    map.set(
        0x19,
        only66(w1(broadcast(T::VkW, [C::Invalid, C::EVEX_Vbroadcastsd_ymm_k1z_xmmm64, C::EVEX_Vbroadcastsd_zmm_k1z_xmmm64], R::XMM0, TT::N8, true))),
    );
    map.set(
        0x1A,
        only66(w(
            broadcast(T::VkM, [C::Invalid, C::EVEX_Vbroadcastf32x4_ymm_k1z_m128, C::EVEX_Vbroadcastf32x4_zmm_k1z_m128], R::XMM0, TT::N16, true),
            broadcast(T::VkM, [C::Invalid, C::EVEX_Vbroadcastf64x2_ymm_k1z_m128, C::EVEX_Vbroadcastf64x2_zmm_k1z_m128], R::XMM0, TT::N16, true),
        )),
    );
    map.set(
        0x28,
        mandatory(
            Entry::Invalid,
            w1(vk_hw([C::EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vpmuldq_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vpmuldq_zmm_k1z_zmm_zmmm512b64], B64, true)),
            w(
                vr_k([C::EVEX_Vpmovm2b_xmm_kr, C::EVEX_Vpmovm2b_ymm_kr, C::EVEX_Vpmovm2b_zmm_kr]),
                vr_k([C::EVEX_Vpmovm2w_xmm_kr, C::EVEX_Vpmovm2w_ymm_kr, C::EVEX_Vpmovm2w_zmm_kr]),
            ),
            Entry::Invalid,
        ),
    );
    map.set(
        0x29,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            w(
                k_r([C::EVEX_Vpmovb2m_kr_xmm, C::EVEX_Vpmovb2m_kr_ymm, C::EVEX_Vpmovb2m_kr_zmm]),
                k_r([C::EVEX_Vpmovw2m_kr_xmm, C::EVEX_Vpmovw2m_kr_ymm, C::EVEX_Vpmovw2m_kr_zmm]),
            ),
            Entry::Invalid,
        ),
    );
    map.set(
        0x2A,
        only66(w0(vl(per_length([C::EVEX_Vmovntdqa_xmm_m128, C::EVEX_Vmovntdqa_ymm_m256, C::EVEX_Vmovntdqa_zmm_m512], FULL, |code, reg, tuple| {
            NodeSpec::new(T::VM).code(code).reg(reg).tuple(tuple)
        })))),
    );
    map.set(
        0x38,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            w(
                vr_k([C::EVEX_Vpmovm2d_xmm_kr, C::EVEX_Vpmovm2d_ymm_kr, C::EVEX_Vpmovm2d_zmm_kr]),
                vr_k([C::EVEX_Vpmovm2q_xmm_kr, C::EVEX_Vpmovm2q_ymm_kr, C::EVEX_Vpmovm2q_zmm_kr]),
            ),
            Entry::Invalid,
        ),
    );
    map.set(
        0x39,
        mandatory(
            Entry::Invalid,
            w(
                vk_hw([C::EVEX_Vpminsd_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vpminsd_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vpminsd_zmm_k1z_zmm_zmmm512b32], B32, true),
                vk_hw([C::EVEX_Vpminsq_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vpminsq_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vpminsq_zmm_k1z_zmm_zmmm512b64], B64, true),
            ),
            w(
                k_r([C::EVEX_Vpmovd2m_kr_xmm, C::EVEX_Vpmovd2m_kr_ymm, C::EVEX_Vpmovd2m_kr_zmm]),
                k_r([C::EVEX_Vpmovq2m_kr_xmm, C::EVEX_Vpmovq2m_kr_ymm, C::EVEX_Vpmovq2m_kr_zmm]),
            ),
            Entry::Invalid,
        ),
    );
    map.set(
        0x58,
        only66(w0(broadcast(T::VkW, [C::EVEX_Vpbroadcastd_xmm_k1z_xmmm32, C::EVEX_Vpbroadcastd_ymm_k1z_xmmm32, C::EVEX_Vpbroadcastd_zmm_k1z_xmmm32], R::XMM0, TT::N4, false))),
    );
    map.set(
        0x68,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
            w(
                kp1_hw([C::EVEX_Vp2intersectd_kp1_xmm_xmmm128b32, C::EVEX_Vp2intersectd_kp1_ymm_ymmm256b32, C::EVEX_Vp2intersectd_kp1_zmm_zmmm512b32], B32),
                kp1_hw([C::EVEX_Vp2intersectq_kp1_xmm_xmmm128b64, C::EVEX_Vp2intersectq_kp1_ymm_ymmm256b64, C::EVEX_Vp2intersectq_kp1_zmm_zmmm512b64], B64),
            ),
        ),
    );
    map.set(
        0x7C,
        only66(vl([
            NodeSpec::new(T::VkEv_REXW).code2(C::EVEX_Vpbroadcastd_xmm_k1z_r32, C::EVEX_Vpbroadcastq_xmm_k1z_r64).reg(R::XMM0),
            NodeSpec::new(T::VkEv_REXW).code2(C::EVEX_Vpbroadcastd_ymm_k1z_r32, C::EVEX_Vpbroadcastq_ymm_k1z_r64).reg(R::YMM0),
            NodeSpec::new(T::VkEv_REXW).code2(C::EVEX_Vpbroadcastd_zmm_k1z_r32, C::EVEX_Vpbroadcastq_zmm_k1z_r64).reg(R::ZMM0),
        ])),
    );

    // Gathers and scatters: the index vector is half the width for qword elements with
    // dword indices, and the data vector is half the width for the reverse.
    let vsib = |tag: T, code: C, index: R, data: R, tuple: TT| {
        if tag == T::VkVsib {
            NodeSpec::new(tag).code(code).reg(data).reg(index).tuple(tuple)
        } else {
            NodeSpec::new(tag).code(code).reg(index).reg(data).tuple(tuple)
        }
    };
    for (opcode, tag, dd, dq) in [
        (0x90, T::VkVsib, [C::EVEX_Vpgatherdd_xmm_k1_vm32x, C::EVEX_Vpgatherdd_ymm_k1_vm32y, C::EVEX_Vpgatherdd_zmm_k1_vm32z], [C::EVEX_Vpgatherdq_xmm_k1_vm32x, C::EVEX_Vpgatherdq_ymm_k1_vm32x, C::EVEX_Vpgatherdq_zmm_k1_vm32y]),
        (0xA0, T::VsibkV, [C::EVEX_Vpscatterdd_vm32x_k1_xmm, C::EVEX_Vpscatterdd_vm32y_k1_ymm, C::EVEX_Vpscatterdd_vm32z_k1_zmm], [C::EVEX_Vpscatterdq_vm32x_k1_xmm, C::EVEX_Vpscatterdq_vm32x_k1_ymm, C::EVEX_Vpscatterdq_vm32y_k1_zmm]),
    ] {
        map.set(
            opcode,
            only66(w(
                vl([
                    vsib(tag, dd[0], R::XMM0, R::XMM0, TT::N4),
                    vsib(tag, dd[1], R::YMM0, R::YMM0, TT::N4),
                    vsib(tag, dd[2], R::ZMM0, R::ZMM0, TT::N4),
                ]),
                vl([
                    vsib(tag, dq[0], R::XMM0, R::XMM0, TT::N8),
                    vsib(tag, dq[1], R::XMM0, R::YMM0, TT::N8),
                    vsib(tag, dq[2], R::YMM0, R::ZMM0, TT::N8),
                ]),
            )),
        );
    }

    let prefetch = |dps: C, dpd: C| {
        w(
            vl(entries![Entry::Invalid, Entry::Invalid, NodeSpec::new(T::Vsibk).code(dps).reg(R::ZMM0).tuple(TT::N4)]),
            vl(entries![Entry::Invalid, Entry::Invalid, NodeSpec::new(T::Vsibk).code(dpd).reg(R::YMM0).tuple(TT::N8)]),
        )
    };
    let mut grp_c6 = invalid_group();
    grp_c6[1] = prefetch(C::EVEX_Vgatherpf0dps_vm32z_k1, C::EVEX_Vgatherpf0dpd_vm32y_k1).into();
    grp_c6[2] = prefetch(C::EVEX_Vgatherpf1dps_vm32z_k1, C::EVEX_Vgatherpf1dpd_vm32y_k1).into();
    grp_c6[5] = prefetch(C::EVEX_Vscatterpf0dps_vm32z_k1, C::EVEX_Vscatterpf0dpd_vm32y_k1).into();
    grp_c6[6] = prefetch(C::EVEX_Vscatterpf1dps_vm32z_k1, C::EVEX_Vscatterpf1dpd_vm32y_k1).into();
    let grp_c6 = tw.array(&grp_c6)?;
    map.set(0xC6, only66(NodeSpec::new(T::Group).array(grp_c6)));

    #[rustfmt::skip]
    let fma = [
        (0x98, [C::EVEX_Vfmadd132ps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vfmadd132ps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vfmadd132ps_zmm_k1z_zmm_zmmm512b32_er],
               [C::EVEX_Vfmadd132pd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vfmadd132pd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vfmadd132pd_zmm_k1z_zmm_zmmm512b64_er]),
        (0xA8, [C::EVEX_Vfmadd213ps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vfmadd213ps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vfmadd213ps_zmm_k1z_zmm_zmmm512b32_er],
               [C::EVEX_Vfmadd213pd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vfmadd213pd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vfmadd213pd_zmm_k1z_zmm_zmmm512b64_er]),
        (0xB8, [C::EVEX_Vfmadd231ps_xmm_k1z_xmm_xmmm128b32, C::EVEX_Vfmadd231ps_ymm_k1z_ymm_ymmm256b32, C::EVEX_Vfmadd231ps_zmm_k1z_zmm_zmmm512b32_er],
               [C::EVEX_Vfmadd231pd_xmm_k1z_xmm_xmmm128b64, C::EVEX_Vfmadd231pd_ymm_k1z_ymm_ymmm256b64, C::EVEX_Vfmadd231pd_zmm_k1z_zmm_zmmm512b64_er]),
    ];
    for (opcode, ps, pd) in fma {
        map.set(opcode, only66(w(vk_hw_er(ps, B32, false), vk_hw_er(pd, B64, false))));
    }
    #[rustfmt::skip]
    let fma_scalar = [
        (0x99, C::EVEX_Vfmadd132ss_xmm_k1z_xmm_xmmm32_er, C::EVEX_Vfmadd132sd_xmm_k1z_xmm_xmmm64_er),
        (0xA9, C::EVEX_Vfmadd213ss_xmm_k1z_xmm_xmmm32_er, C::EVEX_Vfmadd213sd_xmm_k1z_xmm_xmmm64_er),
        (0xB9, C::EVEX_Vfmadd231ss_xmm_k1z_xmm_xmmm32_er, C::EVEX_Vfmadd231sd_xmm_k1z_xmm_xmmm64_er),
    ];
    for (opcode, ss, sd) in fma_scalar {
        map.set(opcode, only66(w(scalar_er(ss, TT::N4, false), scalar_er(sd, TT::N8, false))));
    }

    Ok(map)
}

fn map0f3a() -> OpcodeMap {
    let mut map = OpcodeMap::new();

    map.set(
        0x03,
        only66(w(
            vk_hwib([C::EVEX_Valignd_xmm_k1z_xmm_xmmm128b32_imm8, C::EVEX_Valignd_ymm_k1z_ymm_ymmm256b32_imm8, C::EVEX_Valignd_zmm_k1z_zmm_zmmm512b32_imm8], B32),
            vk_hwib([C::EVEX_Valignq_xmm_k1z_xmm_xmmm128b64_imm8, C::EVEX_Valignq_ymm_k1z_ymm_ymmm256b64_imm8, C::EVEX_Valignq_zmm_k1z_zmm_zmmm512b64_imm8], B64),
        )),
    );
    map.set(
        0x08,
        only66(w0(vk_wib_er([C::EVEX_Vrndscaleps_xmm_k1z_xmmm128b32_imm8, C::EVEX_Vrndscaleps_ymm_k1z_ymmm256b32_imm8, C::EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae], B32))),
    );
    map.set(
        0x09,
        only66(w1(vk_wib_er([C::EVEX_Vrndscalepd_xmm_k1z_xmmm128b64_imm8, C::EVEX_Vrndscalepd_ymm_k1z_ymmm256b64_imm8, C::EVEX_Vrndscalepd_zmm_k1z_zmmm512b64_imm8_sae], B64))),
    );
    map.set(
        0x0A,
        only66(w0(NodeSpec::new(T::VkHWIb_er).code(C::EVEX_Vrndscaless_xmm_k1z_xmm_xmmm32_imm8_sae).reg(R::XMM0).tuple(TT::N4))),
    );
    map.set(
        0x0B,
        only66(w1(NodeSpec::new(T::VkHWIb_er).code(C::EVEX_Vrndscalesd_xmm_k1z_xmm_xmmm64_imm8_sae).reg(R::XMM0).tuple(TT::N8))),
    );
    map.set(
        0x16,
        only66(l0(NodeSpec::new(T::Ed_V_Ib).code2(C::EVEX_Vpextrd_rm32_xmm_imm8, C::EVEX_Vpextrq_rm64_xmm_imm8).reg(R::XMM0))),
    );
    map.set(
        0x18,
        only66(w(
            vl(entries![
                Entry::Invalid,
                NodeSpec::new(T::VkHWIb).code(C::EVEX_Vinsertf32x4_ymm_k1z_ymm_xmmm128_imm8).reg(R::YMM0).reg(R::YMM0).reg(R::XMM0).tuple(TT::N16).flag(false),
                NodeSpec::new(T::VkHWIb).code(C::EVEX_Vinsertf32x4_zmm_k1z_zmm_xmmm128_imm8).reg(R::ZMM0).reg(R::ZMM0).reg(R::XMM0).tuple(TT::N16).flag(false),
            ]),
            vl(entries![
                Entry::Invalid,
                NodeSpec::new(T::VkHWIb).code(C::EVEX_Vinsertf64x2_ymm_k1z_ymm_xmmm128_imm8).reg(R::YMM0).reg(R::YMM0).reg(R::XMM0).tuple(TT::N16).flag(false),
                NodeSpec::new(T::VkHWIb).code(C::EVEX_Vinsertf64x2_zmm_k1z_zmm_xmmm128_imm8).reg(R::ZMM0).reg(R::ZMM0).reg(R::XMM0).tuple(TT::N16).flag(false),
            ]),
        )),
    );
    map.set(
        0x1E,
        only66(w(
            kk_hwib([C::EVEX_Vpcmpud_kr_k1_xmm_xmmm128b32_imm8, C::EVEX_Vpcmpud_kr_k1_ymm_ymmm256b32_imm8, C::EVEX_Vpcmpud_kr_k1_zmm_zmmm512b32_imm8], B32),
            kk_hwib([C::EVEX_Vpcmpuq_kr_k1_xmm_xmmm128b64_imm8, C::EVEX_Vpcmpuq_kr_k1_ymm_ymmm256b64_imm8, C::EVEX_Vpcmpuq_kr_k1_zmm_zmmm512b64_imm8], B64),
        )),
    );
    map.set(
        0x1F,
        only66(w(
            kk_hwib([C::EVEX_Vpcmpd_kr_k1_xmm_xmmm128b32_imm8, C::EVEX_Vpcmpd_kr_k1_ymm_ymmm256b32_imm8, C::EVEX_Vpcmpd_kr_k1_zmm_zmmm512b32_imm8], B32),
            kk_hwib([C::EVEX_Vpcmpq_kr_k1_xmm_xmmm128b64_imm8, C::EVEX_Vpcmpq_kr_k1_ymm_ymmm256b64_imm8, C::EVEX_Vpcmpq_kr_k1_zmm_zmmm512b64_imm8], B64),
        )),
    );
    map.set(
        0x22,
        only66(l0(NodeSpec::new(T::VHEvIb).code2(C::EVEX_Vpinsrd_xmm_xmm_rm32_imm8, C::EVEX_Vpinsrq_xmm_xmm_rm64_imm8).reg(R::XMM0))),
    );
    map.set(
        0x25,
        only66(w(
            vk_hwib([C::EVEX_Vpternlogd_xmm_k1z_xmm_xmmm128b32_imm8, C::EVEX_Vpternlogd_ymm_k1z_ymm_ymmm256b32_imm8, C::EVEX_Vpternlogd_zmm_k1z_zmm_zmmm512b32_imm8], B32),
            vk_hwib([C::EVEX_Vpternlogq_xmm_k1z_xmm_xmmm128b64_imm8, C::EVEX_Vpternlogq_ymm_k1z_ymm_ymmm256b64_imm8, C::EVEX_Vpternlogq_zmm_k1z_zmm_zmmm512b64_imm8], B64),
        )),
    );
    map.set(
        0x50,
        only66(w(
            vk_hwib_er([C::EVEX_Vrangeps_xmm_k1z_xmm_xmmm128b32_imm8, C::EVEX_Vrangeps_ymm_k1z_ymm_ymmm256b32_imm8, C::EVEX_Vrangeps_zmm_k1z_zmm_zmmm512b32_imm8_sae], B32),
            vk_hwib_er([C::EVEX_Vrangepd_xmm_k1z_xmm_xmmm128b64_imm8, C::EVEX_Vrangepd_ymm_k1z_ymm_ymmm256b64_imm8, C::EVEX_Vrangepd_zmm_k1z_zmm_zmmm512b64_imm8_sae], B64),
        )),
    );
    map.set(
        0x66,
        only66(w(
            kk_wib([C::EVEX_Vfpclassps_kr_k1_xmmm128b32_imm8, C::EVEX_Vfpclassps_kr_k1_ymmm256b32_imm8, C::EVEX_Vfpclassps_kr_k1_zmmm512b32_imm8], B32),
            kk_wib([C::EVEX_Vfpclasspd_kr_k1_xmmm128b64_imm8, C::EVEX_Vfpclasspd_kr_k1_ymmm256b64_imm8, C::EVEX_Vfpclasspd_kr_k1_zmmm512b64_imm8], B64),
        )),
    );

    map
}
