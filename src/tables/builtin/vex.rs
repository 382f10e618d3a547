//! VEX maps 0F, 0F38 and 0F3A.

use super::{invalid_group, OpcodeMap};
use crate::code::Code as C;
use crate::error::{TableError, TableFamily};
use crate::register::Register as R;
use crate::tables::{Entry, NodeSpec, TableWriter, VexTag as T};

fn c1(tag: T, code: C) -> NodeSpec {
    NodeSpec::new(tag).code(code)
}

fn c2(tag: T, c32: C, c64: C) -> NodeSpec {
    NodeSpec::new(tag).code2(c32, c64)
}

fn mandatory(np: impl Into<Entry>, p66: impl Into<Entry>, pf3: impl Into<Entry>, pf2: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::MandatoryPrefix2).handlers(entries![np, p66, pf3, pf2])
}

fn np(handler: impl Into<Entry>) -> NodeSpec {
    mandatory(handler, Entry::Invalid, Entry::Invalid, Entry::Invalid)
}

fn only66(handler: impl Into<Entry>) -> NodeSpec {
    mandatory(Entry::Invalid, handler, Entry::Invalid, Entry::Invalid)
}

fn vl(l128: impl Into<Entry>, l256: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::VectorLength).handler(l128).handler(l256)
}

fn l0(handler: impl Into<Entry>) -> NodeSpec {
    vl(handler, Entry::Invalid)
}

fn w(w0: impl Into<Entry>, w1: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::W).handler(w0).handler(w1)
}

fn w0(handler: impl Into<Entry>) -> NodeSpec {
    w(handler, Entry::Invalid)
}

fn rm(reg: impl Into<Entry>, mem: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::RM).handler(reg).handler(mem)
}

fn vhw(code: C, base: R) -> NodeSpec {
    c1(T::VHW_2, code).reg(base)
}

fn vw(code: C, base: R) -> NodeSpec {
    c1(T::VW_2, code).reg(base)
}

fn wv(code: C, base: R) -> NodeSpec {
    c1(T::WV, code).reg(base).reg(base)
}

/// `op xmm, xmm, xmm/m128` at L0 and the ymm form at L1.
fn packed3(xmm: C, ymm: C) -> NodeSpec {
    vl(vhw(xmm, R::XMM0), vhw(ymm, R::YMM0))
}

fn packed2(xmm: C, ymm: C) -> NodeSpec {
    vl(vw(xmm, R::XMM0), vw(ymm, R::YMM0))
}

fn stores(xmm: C, ymm: C) -> NodeSpec {
    vl(wv(xmm, R::XMM0), wv(ymm, R::YMM0))
}

/// The ps/pd/ss/sd arithmetic quartet. Scalar forms ignore `L`.
fn fp_arith(ps: [C; 2], pd: [C; 2], ss: C, sd: C) -> NodeSpec {
    mandatory(packed3(ps[0], ps[1]), packed3(pd[0], pd[1]), vhw(ss, R::XMM0), vhw(sd, R::XMM0))
}

pub(super) fn blob() -> Result<Vec<u8>, TableError> {
    let mut tw = TableWriter::new(TableFamily::Vex);
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
            packed2(C::VEX_Vmovups_xmm_xmmm128, C::VEX_Vmovups_ymm_ymmm256),
            packed2(C::VEX_Vmovupd_xmm_xmmm128, C::VEX_Vmovupd_ymm_ymmm256),
            rm(vhw(C::VEX_Vmovss_xmm_xmm_xmm, R::XMM0), c1(T::VM, C::VEX_Vmovss_xmm_m32).reg(R::XMM0)),
            rm(vhw(C::VEX_Vmovsd_xmm_xmm_xmm, R::XMM0), c1(T::VM, C::VEX_Vmovsd_xmm_m64).reg(R::XMM0)),
        ),
    );
    map.set(
        0x11,
        mandatory(
            stores(C::VEX_Vmovups_xmmm128_xmm, C::VEX_Vmovups_ymmm256_ymm),
            stores(C::VEX_Vmovupd_xmmm128_xmm, C::VEX_Vmovupd_ymmm256_ymm),
            rm(Entry::Invalid, c1(T::MV, C::VEX_Vmovss_m32_xmm).reg(R::XMM0)),
            rm(Entry::Invalid, c1(T::MV, C::VEX_Vmovsd_m64_xmm).reg(R::XMM0)),
        ),
    );
    map.set(
        0x28,
        mandatory(
            packed2(C::VEX_Vmovaps_xmm_xmmm128, C::VEX_Vmovaps_ymm_ymmm256),
            packed2(C::VEX_Vmovapd_xmm_xmmm128, C::VEX_Vmovapd_ymm_ymmm256),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x29,
        mandatory(
            stores(C::VEX_Vmovaps_xmmm128_xmm, C::VEX_Vmovaps_ymmm256_ymm),
            stores(C::VEX_Vmovapd_xmmm128_xmm, C::VEX_Vmovapd_ymmm256_ymm),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x2A,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            c2(T::VHEv, C::VEX_Vcvtsi2ss_xmm_xmm_rm32, C::VEX_Vcvtsi2ss_xmm_xmm_rm64).reg(R::XMM0),
            c2(T::VHEv, C::VEX_Vcvtsi2sd_xmm_xmm_rm32, C::VEX_Vcvtsi2sd_xmm_xmm_rm64).reg(R::XMM0),
        ),
    );
    map.set(
        0x2C,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            c2(T::GvW, C::VEX_Vcvttss2si_r32_xmmm32, C::VEX_Vcvttss2si_r64_xmmm32).reg(R::XMM0),
            c2(T::GvW, C::VEX_Vcvttsd2si_r32_xmmm64, C::VEX_Vcvttsd2si_r64_xmmm64).reg(R::XMM0),
        ),
    );
    map.set(
        0x2E,
        mandatory(vw(C::VEX_Vucomiss_xmm_xmmm32, R::XMM0), vw(C::VEX_Vucomisd_xmm_xmmm64, R::XMM0), Entry::Invalid, Entry::Invalid),
    );
    map.set(
        0x2F,
        mandatory(vw(C::VEX_Vcomiss_xmm_xmmm32, R::XMM0), vw(C::VEX_Vcomisd_xmm_xmmm64, R::XMM0), Entry::Invalid, Entry::Invalid),
    );

    // Mask-register ops: np selects the w/q forms by W, 66 the b/d forms.
    map.set(
        0x41,
        mandatory(
            vl(Entry::Invalid, w(c1(T::VK_HK_RK, C::VEX_Kandw_kr_kr_kr), c1(T::VK_HK_RK, C::VEX_Kandq_kr_kr_kr))),
            vl(Entry::Invalid, w(c1(T::VK_HK_RK, C::VEX_Kandb_kr_kr_kr), c1(T::VK_HK_RK, C::VEX_Kandd_kr_kr_kr))),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x44,
        mandatory(
            l0(w(c1(T::VK_RK, C::VEX_Knotw_kr_kr), c1(T::VK_RK, C::VEX_Knotq_kr_kr))),
            l0(w(c1(T::VK_RK, C::VEX_Knotb_kr_kr), c1(T::VK_RK, C::VEX_Knotd_kr_kr))),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );

    map.set(
        0x50,
        mandatory(
            vl(
                c2(T::GvRx, C::VEX_Vmovmskps_r32_xmm, C::VEX_Vmovmskps_r64_xmm).reg(R::XMM0),
                c2(T::GvRx, C::VEX_Vmovmskps_r32_ymm, C::VEX_Vmovmskps_r64_ymm).reg(R::YMM0),
            ),
            vl(
                c2(T::GvRx, C::VEX_Vmovmskpd_r32_xmm, C::VEX_Vmovmskpd_r64_xmm).reg(R::XMM0),
                c2(T::GvRx, C::VEX_Vmovmskpd_r32_ymm, C::VEX_Vmovmskpd_r64_ymm).reg(R::YMM0),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x51,
        mandatory(
            packed2(C::VEX_Vsqrtps_xmm_xmmm128, C::VEX_Vsqrtps_ymm_ymmm256),
            packed2(C::VEX_Vsqrtpd_xmm_xmmm128, C::VEX_Vsqrtpd_ymm_ymmm256),
            vhw(C::VEX_Vsqrtss_xmm_xmm_xmmm32, R::XMM0),
            vhw(C::VEX_Vsqrtsd_xmm_xmm_xmmm64, R::XMM0),
        ),
    );
    map.set(0x54, mandatory(packed3(C::VEX_Vandps_xmm_xmm_xmmm128, C::VEX_Vandps_ymm_ymm_ymmm256), packed3(C::VEX_Vandpd_xmm_xmm_xmmm128, C::VEX_Vandpd_ymm_ymm_ymmm256), Entry::Invalid, Entry::Invalid));
    map.set(0x57, mandatory(packed3(C::VEX_Vxorps_xmm_xmm_xmmm128, C::VEX_Vxorps_ymm_ymm_ymmm256), packed3(C::VEX_Vxorpd_xmm_xmm_xmmm128, C::VEX_Vxorpd_ymm_ymm_ymmm256), Entry::Invalid, Entry::Invalid));
    map.set(0x58, fp_arith([C::VEX_Vaddps_xmm_xmm_xmmm128, C::VEX_Vaddps_ymm_ymm_ymmm256], [C::VEX_Vaddpd_xmm_xmm_xmmm128, C::VEX_Vaddpd_ymm_ymm_ymmm256], C::VEX_Vaddss_xmm_xmm_xmmm32, C::VEX_Vaddsd_xmm_xmm_xmmm64));
    map.set(0x59, fp_arith([C::VEX_Vmulps_xmm_xmm_xmmm128, C::VEX_Vmulps_ymm_ymm_ymmm256], [C::VEX_Vmulpd_xmm_xmm_xmmm128, C::VEX_Vmulpd_ymm_ymm_ymmm256], C::VEX_Vmulss_xmm_xmm_xmmm32, C::VEX_Vmulsd_xmm_xmm_xmmm64));
    map.set(0x5C, fp_arith([C::VEX_Vsubps_xmm_xmm_xmmm128, C::VEX_Vsubps_ymm_ymm_ymmm256], [C::VEX_Vsubpd_xmm_xmm_xmmm128, C::VEX_Vsubpd_ymm_ymm_ymmm256], C::VEX_Vsubss_xmm_xmm_xmmm32, C::VEX_Vsubsd_xmm_xmm_xmmm64));
    map.set(0x5D, fp_arith([C::VEX_Vminps_xmm_xmm_xmmm128, C::VEX_Vminps_ymm_ymm_ymmm256], [C::VEX_Vminpd_xmm_xmm_xmmm128, C::VEX_Vminpd_ymm_ymm_ymmm256], C::VEX_Vminss_xmm_xmm_xmmm32, C::VEX_Vminsd_xmm_xmm_xmmm64));
    map.set(0x5E, fp_arith([C::VEX_Vdivps_xmm_xmm_xmmm128, C::VEX_Vdivps_ymm_ymm_ymmm256], [C::VEX_Vdivpd_xmm_xmm_xmmm128, C::VEX_Vdivpd_ymm_ymm_ymmm256], C::VEX_Vdivss_xmm_xmm_xmmm32, C::VEX_Vdivsd_xmm_xmm_xmmm64));
    map.set(0x5F, fp_arith([C::VEX_Vmaxps_xmm_xmm_xmmm128, C::VEX_Vmaxps_ymm_ymm_ymmm256], [C::VEX_Vmaxpd_xmm_xmm_xmmm128, C::VEX_Vmaxpd_ymm_ymm_ymmm256], C::VEX_Vmaxss_xmm_xmm_xmmm32, C::VEX_Vmaxsd_xmm_xmm_xmmm64));

    map.set(
        0x6F,
        mandatory(
            Entry::Invalid,
            packed2(C::VEX_Vmovdqa_xmm_xmmm128, C::VEX_Vmovdqa_ymm_ymmm256),
            packed2(C::VEX_Vmovdqu_xmm_xmmm128, C::VEX_Vmovdqu_ymm_ymmm256),
            Entry::Invalid,
        ),
    );
    let shift = |xmm: C, ymm: C| vl(c1(T::HRIb, xmm).reg(R::XMM0), c1(T::HRIb, ymm).reg(R::YMM0));
    let mut grp71 = invalid_group();
    grp71[2] = shift(C::VEX_Vpsrlw_xmm_xmm_imm8, C::VEX_Vpsrlw_ymm_ymm_imm8).into();
    grp71[4] = shift(C::VEX_Vpsraw_xmm_xmm_imm8, C::VEX_Vpsraw_ymm_ymm_imm8).into();
    grp71[6] = shift(C::VEX_Vpsllw_xmm_xmm_imm8, C::VEX_Vpsllw_ymm_ymm_imm8).into();
    let grp71 = tw.array(&grp71)?;
    map.set(0x71, only66(NodeSpec::new(T::Group).array(grp71)));
    let mut grp72 = invalid_group();
    grp72[2] = shift(C::VEX_Vpsrld_xmm_xmm_imm8, C::VEX_Vpsrld_ymm_ymm_imm8).into();
    grp72[4] = shift(C::VEX_Vpsrad_xmm_xmm_imm8, C::VEX_Vpsrad_ymm_ymm_imm8).into();
    grp72[6] = shift(C::VEX_Vpslld_xmm_xmm_imm8, C::VEX_Vpslld_ymm_ymm_imm8).into();
    let grp72 = tw.array(&grp72)?;
    map.set(0x72, only66(NodeSpec::new(T::Group).array(grp72)));
    let mut grp73 = invalid_group();
    grp73[2] = shift(C::VEX_Vpsrlq_xmm_xmm_imm8, C::VEX_Vpsrlq_ymm_ymm_imm8).into();
    grp73[3] = shift(C::VEX_Vpsrldq_xmm_xmm_imm8, C::VEX_Vpsrldq_ymm_ymm_imm8).into();
    grp73[6] = shift(C::VEX_Vpsllq_xmm_xmm_imm8, C::VEX_Vpsllq_ymm_ymm_imm8).into();
    grp73[7] = shift(C::VEX_Vpslldq_xmm_xmm_imm8, C::VEX_Vpslldq_ymm_ymm_imm8).into();
    let grp73 = tw.array(&grp73)?;
    map.set(0x73, only66(NodeSpec::new(T::Group).array(grp73)));

    let zero = NodeSpec::new(T::VectorLength_NoModRM)
        .handler(c1(T::Simple, C::VEX_Vzeroupper))
        .handler(c1(T::Simple, C::VEX_Vzeroall));
    map.set(
        0x77,
        NodeSpec::new(T::MandatoryPrefix2_NoModRM).handlers(entries![
            zero,
            Entry::InvalidNoModrm,
            Entry::InvalidNoModrm,
            Entry::InvalidNoModrm
        ]),
    );
    map.set(
        0x7F,
        mandatory(
            Entry::Invalid,
            stores(C::VEX_Vmovdqa_xmmm128_xmm, C::VEX_Vmovdqa_ymmm256_ymm),
            stores(C::VEX_Vmovdqu_xmmm128_xmm, C::VEX_Vmovdqu_ymmm256_ymm),
            Entry::Invalid,
        ),
    );

    map.set(
        0x90,
        mandatory(
            l0(w(c1(T::VK_WK, C::VEX_Kmovw_kr_km16), c1(T::VK_WK, C::VEX_Kmovq_kr_km64))),
            l0(w(c1(T::VK_WK, C::VEX_Kmovb_kr_km8), c1(T::VK_WK, C::VEX_Kmovd_kr_km32))),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x91,
        mandatory(
            l0(w(c1(T::M_VK, C::VEX_Kmovw_m16_kr), c1(T::M_VK, C::VEX_Kmovq_m64_kr))),
            l0(w(c1(T::M_VK, C::VEX_Kmovb_m8_kr), c1(T::M_VK, C::VEX_Kmovd_m32_kr))),
            Entry::Invalid,
            Entry::Invalid,
        ),
    );
    map.set(
        0x92,
        mandatory(
            l0(w0(c1(T::VK_R, C::VEX_Kmovw_kr_r32).reg(R::EAX))),
            l0(w0(c1(T::VK_R, C::VEX_Kmovb_kr_r32).reg(R::EAX))),
            Entry::Invalid,
            l0(w(c1(T::VK_R, C::VEX_Kmovd_kr_r32).reg(R::EAX), c1(T::VK_R, C::VEX_Kmovq_kr_r64).reg(R::RAX))),
        ),
    );
    map.set(
        0x93,
        mandatory(
            l0(w0(c1(T::G_VK, C::VEX_Kmovw_r32_kr).reg(R::EAX))),
            l0(w0(c1(T::G_VK, C::VEX_Kmovb_r32_kr).reg(R::EAX))),
            Entry::Invalid,
            l0(w(c1(T::G_VK, C::VEX_Kmovd_r32_kr).reg(R::EAX), c1(T::G_VK, C::VEX_Kmovq_r64_kr).reg(R::RAX))),
        ),
    );

    let mut grp_ae = invalid_group();
    grp_ae[2] = c1(T::M, C::VEX_Vldmxcsr_m32).into();
    grp_ae[3] = c1(T::M, C::VEX_Vstmxcsr_m32).into();
    let grp_ae = tw.array(&grp_ae)?;
    map.set(0xAE, np(l0(NodeSpec::new(T::Group).array(grp_ae))));

    #[rustfmt::skip]
    let int_ops = [
        (0xD4, C::VEX_Vpaddq_xmm_xmm_xmmm128, C::VEX_Vpaddq_ymm_ymm_ymmm256),
        (0xDB, C::VEX_Vpand_xmm_xmm_xmmm128, C::VEX_Vpand_ymm_ymm_ymmm256),
        (0xEB, C::VEX_Vpor_xmm_xmm_xmmm128, C::VEX_Vpor_ymm_ymm_ymmm256),
        (0xEF, C::VEX_Vpxor_xmm_xmm_xmmm128, C::VEX_Vpxor_ymm_ymm_ymmm256),
        (0xFE, C::VEX_Vpaddd_xmm_xmm_xmmm128, C::VEX_Vpaddd_ymm_ymm_ymmm256),
    ];
    for (opcode, xmm, ymm) in int_ops {
        map.set(opcode, only66(packed3(xmm, ymm)));
    }

    Ok(map)
}

fn map0f38(tw: &mut TableWriter) -> Result<OpcodeMap, TableError> {
    let mut map = OpcodeMap::new();

    map.set(0x00, only66(packed3(C::VEX_Vpshufb_xmm_xmm_xmmm128, C::VEX_Vpshufb_ymm_ymm_ymmm256)));
    map.set(0x17, only66(packed2(C::VEX_Vptest_xmm_xmmm128, C::VEX_Vptest_ymm_ymmm256)));
    map.set(
        0x18,
        only66(w0(vl(
            c1(T::VW, C::VEX_Vbroadcastss_xmm_xmmm32).reg(R::XMM0).reg(R::XMM0),
            c1(T::VW, C::VEX_Vbroadcastss_ymm_xmmm32).reg(R::YMM0).reg(R::XMM0),
        ))),
    );
    map.set(
        0x58,
        only66(w0(vl(
            c1(T::VW, C::VEX_Vpbroadcastd_xmm_xmmm32).reg(R::XMM0).reg(R::XMM0),
            c1(T::VW, C::VEX_Vpbroadcastd_ymm_xmmm32).reg(R::YMM0).reg(R::XMM0),
        ))),
    );

    // AMX tiles: 64-bit only, W0 and L0 throughout.
    let tile = |handler: NodeSpec| NodeSpec::new(T::Bitness_DontReadModRM).handler(Entry::Invalid).handler(l0(w0(handler)));
    map.set(
        0x49,
        mandatory(
            tile(rm(Entry::Invalid, c1(T::M, C::VEX_Ldtilecfg_m512))),
            tile(rm(Entry::Invalid, c1(T::M, C::VEX_Sttilecfg_m512))),
            Entry::Invalid,
            tile(rm(c1(T::VT, C::VEX_Tilezero_tmm), Entry::Invalid)),
        ),
    );
    map.set(
        0x4B,
        mandatory(
            Entry::Invalid,
            tile(c1(T::VT_SIBMEM, C::VEX_Tileloaddt1_tmm_sibmem)),
            tile(c1(T::SIBMEM_VT, C::VEX_Tilestored_sibmem_tmm)),
            tile(c1(T::VT_SIBMEM, C::VEX_Tileloadd_tmm_sibmem)),
        ),
    );
    map.set(
        0x5E,
        mandatory(
            tile(c1(T::VT_RT_HT, C::VEX_Tdpbuud_tmm_tmm_tmm)),
            tile(c1(T::VT_RT_HT, C::VEX_Tdpbusd_tmm_tmm_tmm)),
            tile(c1(T::VT_RT_HT, C::VEX_Tdpbsud_tmm_tmm_tmm)),
            tile(c1(T::VT_RT_HT, C::VEX_Tdpbssd_tmm_tmm_tmm)),
        ),
    );

    let gather = |code: C, index: R, dest: R| c1(T::VX_VSIB_HX, code).reg(index).reg(dest);
    map.set(
        0x90,
        only66(w(
            vl(
                gather(C::VEX_Vpgatherdd_xmm_vm32x_xmm, R::XMM0, R::XMM0),
                gather(C::VEX_Vpgatherdd_ymm_vm32y_ymm, R::YMM0, R::YMM0),
            ),
            vl(
                gather(C::VEX_Vpgatherdq_xmm_vm32x_xmm, R::XMM0, R::XMM0),
                gather(C::VEX_Vpgatherdq_ymm_vm32x_ymm, R::XMM0, R::YMM0),
            ),
        )),
    );

    #[rustfmt::skip]
    let fma = [
        (0x98, [C::VEX_Vfmadd132ps_xmm_xmm_xmmm128, C::VEX_Vfmadd132ps_ymm_ymm_ymmm256], [C::VEX_Vfmadd132pd_xmm_xmm_xmmm128, C::VEX_Vfmadd132pd_ymm_ymm_ymmm256]),
        (0xA8, [C::VEX_Vfmadd213ps_xmm_xmm_xmmm128, C::VEX_Vfmadd213ps_ymm_ymm_ymmm256], [C::VEX_Vfmadd213pd_xmm_xmm_xmmm128, C::VEX_Vfmadd213pd_ymm_ymm_ymmm256]),
        (0xB8, [C::VEX_Vfmadd231ps_xmm_xmm_xmmm128, C::VEX_Vfmadd231ps_ymm_ymm_ymmm256], [C::VEX_Vfmadd231pd_xmm_xmm_xmmm128, C::VEX_Vfmadd231pd_ymm_ymm_ymmm256]),
    ];
    for (opcode, ps, pd) in fma {
        map.set(opcode, only66(w(packed3(ps[0], ps[1]), packed3(pd[0], pd[1]))));
    }
    #[rustfmt::skip]
    let fma_scalar = [
        (0x99, C::VEX_Vfmadd132ss_xmm_xmm_xmmm32, C::VEX_Vfmadd132sd_xmm_xmm_xmmm64),
        (0xA9, C::VEX_Vfmadd213ss_xmm_xmm_xmmm32, C::VEX_Vfmadd213sd_xmm_xmm_xmmm64),
        (0xB9, C::VEX_Vfmadd231ss_xmm_xmm_xmmm32, C::VEX_Vfmadd231sd_xmm_xmm_xmmm64),
    ];
    for (opcode, ss, sd) in fma_scalar {
        map.set(opcode, only66(w(vhw(ss, R::XMM0), vhw(sd, R::XMM0))));
    }

    #[rustfmt::skip]
    let aes = [
        (0xDC, C::VEX_Vaesenc_xmm_xmm_xmmm128, C::VEX_Vaesenc_ymm_ymm_ymmm256),
        (0xDD, C::VEX_Vaesenclast_xmm_xmm_xmmm128, C::VEX_Vaesenclast_ymm_ymm_ymmm256),
        (0xDE, C::VEX_Vaesdec_xmm_xmm_xmmm128, C::VEX_Vaesdec_ymm_ymm_ymmm256),
        (0xDF, C::VEX_Vaesdeclast_xmm_xmm_xmmm128, C::VEX_Vaesdeclast_ymm_ymm_ymmm256),
    ];
    for (opcode, xmm, ymm) in aes {
        map.set(opcode, only66(packed3(xmm, ymm)));
    }

    // BMI1/BMI2 general-purpose forms.
    map.set(0xF2, np(l0(c2(T::Gv_Hv_Ev, C::VEX_Andn_r32_r32_rm32, C::VEX_Andn_r64_r64_rm64))));
    let mut grp_f3 = invalid_group();
    grp_f3[1] = c2(T::Hv_Ev, C::VEX_Blsr_r32_rm32, C::VEX_Blsr_r64_rm64).into();
    grp_f3[2] = c2(T::Hv_Ev, C::VEX_Blsmsk_r32_rm32, C::VEX_Blsmsk_r64_rm64).into();
    grp_f3[3] = c2(T::Hv_Ev, C::VEX_Blsi_r32_rm32, C::VEX_Blsi_r64_rm64).into();
    let grp_f3 = tw.array(&grp_f3)?;
    map.set(0xF3, np(l0(NodeSpec::new(T::Group).array(grp_f3))));
    map.set(
        0xF5,
        mandatory(
            l0(c2(T::Gv_Ev_Hv, C::VEX_Bzhi_r32_rm32_r32, C::VEX_Bzhi_r64_rm64_r64)),
            Entry::Invalid,
            l0(c2(T::Gv_Hv_Ev, C::VEX_Pext_r32_r32_rm32, C::VEX_Pext_r64_r64_rm64)),
            l0(c2(T::Gv_Hv_Ev, C::VEX_Pdep_r32_r32_rm32, C::VEX_Pdep_r64_r64_rm64)),
        ),
    );
    map.set(
        0xF6,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
            l0(c2(T::Gv_Hv_Ev, C::VEX_Mulx_r32_r32_rm32, C::VEX_Mulx_r64_r64_rm64)),
        ),
    );
    map.set(
        0xF7,
        mandatory(
            l0(c2(T::Gv_Ev_Hv, C::VEX_Bextr_r32_rm32_r32, C::VEX_Bextr_r64_rm64_r64)),
            l0(c2(T::Gv_Ev_Hv, C::VEX_Shlx_r32_rm32_r32, C::VEX_Shlx_r64_rm64_r64)),
            l0(c2(T::Gv_Ev_Hv, C::VEX_Sarx_r32_rm32_r32, C::VEX_Sarx_r64_rm64_r64)),
            l0(c2(T::Gv_Ev_Hv, C::VEX_Shrx_r32_rm32_r32, C::VEX_Shrx_r64_rm64_r64)),
        ),
    );

    Ok(map)
}

fn map0f3a() -> OpcodeMap {
    let mut map = OpcodeMap::new();

    map.set(
        0x0F,
        only66(vl(
            c1(T::VHWIb_2, C::VEX_Vpalignr_xmm_xmm_xmmm128_imm8).reg(R::XMM0),
            c1(T::VHWIb_2, C::VEX_Vpalignr_ymm_ymm_ymmm256_imm8).reg(R::YMM0),
        )),
    );
    map.set(0x16, only66(l0(c2(T::EvVIb, C::VEX_Vpextrd_rm32_xmm_imm8, C::VEX_Vpextrq_rm64_xmm_imm8).reg(R::XMM0))));
    map.set(
        0x18,
        only66(w0(vl(
            Entry::Invalid,
            c1(T::VHWIb, C::VEX_Vinsertf128_ymm_ymm_xmmm128_imm8).reg(R::YMM0).reg(R::YMM0).reg(R::XMM0),
        ))),
    );
    map.set(
        0x22,
        only66(l0(c2(T::VHEvIb, C::VEX_Vpinsrd_xmm_xmm_rm32_imm8, C::VEX_Vpinsrq_xmm_xmm_rm64_imm8).reg(R::XMM0))),
    );
    map.set(
        0x30,
        only66(l0(w(
            c1(T::VK_RK_Ib, C::VEX_Kshiftrb_kr_kr_imm8),
            c1(T::VK_RK_Ib, C::VEX_Kshiftrw_kr_kr_imm8),
        ))),
    );
    map.set(
        0x44,
        only66(vl(
            c1(T::VHWIb_2, C::VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8).reg(R::XMM0),
            c1(T::VHWIb_2, C::VEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8).reg(R::YMM0),
        )),
    );
    map.set(
        0x4A,
        only66(w0(vl(
            c1(T::VHWIs4, C::VEX_Vblendvps_xmm_xmm_xmmm128_xmm).reg(R::XMM0),
            c1(T::VHWIs4, C::VEX_Vblendvps_ymm_ymm_ymmm256_ymm).reg(R::YMM0),
        ))),
    );
    map.set(
        0xF0,
        mandatory(
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
            l0(c2(T::Gv_Ev_Ib, C::VEX_Rorx_r32_rm32_imm8, C::VEX_Rorx_r64_rm64_imm8)),
        ),
    );

    map
}
