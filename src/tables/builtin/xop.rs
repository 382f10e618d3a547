//! XOP maps 8, 9 and A. They share the VEX tag space; every XOP opcode requires pp = 00.

use super::{invalid_group, OpcodeMap};
use crate::code::Code as C;
use crate::error::{TableError, TableFamily};
use crate::register::Register as R;
use crate::tables::{Entry, NodeSpec, TableWriter, VexTag as T};

fn np(handler: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::MandatoryPrefix2).handlers(entries![handler, Entry::Invalid, Entry::Invalid, Entry::Invalid])
}

fn vl(l128: impl Into<Entry>, l256: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::VectorLength).handler(l128).handler(l256)
}

fn w(w0: impl Into<Entry>, w1: impl Into<Entry>) -> NodeSpec {
    NodeSpec::new(T::W).handler(w0).handler(w1)
}

pub(super) fn blob() -> Result<Vec<u8>, TableError> {
    let mut tw = TableWriter::new(TableFamily::Vex);
    let map8 = map8();
    let map9 = map9(&mut tw)?;
    let map_a = map_a();
    tw.array(map8.entries())?;
    tw.array(map9.entries())?;
    tw.array(map_a.entries())?;
    Ok(tw.finish())
}

fn map8() -> OpcodeMap {
    let mut map = OpcodeMap::new();

    // W0 takes the selector from is4, W1 from r/m.
    map.set(
        0xA2,
        np(w(
            vl(
                NodeSpec::new(T::VHWIs4).code(C::XOP_Vpcmov_xmm_xmm_xmmm128_xmm).reg(R::XMM0),
                NodeSpec::new(T::VHWIs4).code(C::XOP_Vpcmov_ymm_ymm_ymmm256_ymm).reg(R::YMM0),
            ),
            vl(
                NodeSpec::new(T::VHIs4W).code(C::XOP_Vpcmov_xmm_xmm_xmm_xmmm128).reg(R::XMM0),
                NodeSpec::new(T::VHIs4W).code(C::XOP_Vpcmov_ymm_ymm_ymm_ymmm256).reg(R::YMM0),
            ),
        )),
    );
    #[rustfmt::skip]
    let rotates = [
        (0xC0, C::XOP_Vprotb_xmm_xmmm128_imm8), (0xC1, C::XOP_Vprotw_xmm_xmmm128_imm8),
        (0xC2, C::XOP_Vprotd_xmm_xmmm128_imm8), (0xC3, C::XOP_Vprotq_xmm_xmmm128_imm8),
    ];
    for (opcode, code) in rotates {
        map.set(opcode, np(w(vl(NodeSpec::new(T::VWIb_2).code(code).reg(R::XMM0), Entry::Invalid), Entry::Invalid)));
    }
    #[rustfmt::skip]
    let compares = [
        (0xCC, C::XOP_Vpcomb_xmm_xmm_xmmm128_imm8), (0xCD, C::XOP_Vpcomw_xmm_xmm_xmmm128_imm8),
        (0xCE, C::XOP_Vpcomd_xmm_xmm_xmmm128_imm8), (0xCF, C::XOP_Vpcomq_xmm_xmm_xmmm128_imm8),
    ];
    for (opcode, code) in compares {
        map.set(opcode, np(w(vl(NodeSpec::new(T::VHWIb_2).code(code).reg(R::XMM0), Entry::Invalid), Entry::Invalid)));
    }

    map
}

fn map9(tw: &mut TableWriter) -> Result<OpcodeMap, TableError> {
    let mut map = OpcodeMap::new();
    let tbm = |r32: C, r64: C| Entry::from(NodeSpec::new(T::Hv_Ev).code2(r32, r64));

    let mut grp01 = invalid_group();
    grp01[1] = tbm(C::XOP_Blcfill_r32_rm32, C::XOP_Blcfill_r64_rm64);
    grp01[2] = tbm(C::XOP_Blsfill_r32_rm32, C::XOP_Blsfill_r64_rm64);
    grp01[3] = tbm(C::XOP_Blcs_r32_rm32, C::XOP_Blcs_r64_rm64);
    grp01[4] = tbm(C::XOP_Tzmsk_r32_rm32, C::XOP_Tzmsk_r64_rm64);
    grp01[5] = tbm(C::XOP_Blcic_r32_rm32, C::XOP_Blcic_r64_rm64);
    grp01[6] = tbm(C::XOP_Blsic_r32_rm32, C::XOP_Blsic_r64_rm64);
    grp01[7] = tbm(C::XOP_T1mskc_r32_rm32, C::XOP_T1mskc_r64_rm64);
    let grp01 = tw.array(&grp01)?;
    map.set(0x01, np(vl(NodeSpec::new(T::Group).array(grp01), Entry::Invalid)));

    let mut grp02 = invalid_group();
    grp02[1] = tbm(C::XOP_Blcmsk_r32_rm32, C::XOP_Blcmsk_r64_rm64);
    grp02[6] = tbm(C::XOP_Blci_r32_rm32, C::XOP_Blci_r64_rm64);
    let grp02 = tw.array(&grp02)?;
    map.set(0x02, np(vl(NodeSpec::new(T::Group).array(grp02), Entry::Invalid)));

    map.set(
        0x80,
        np(w(
            vl(
                NodeSpec::new(T::VW_2).code(C::XOP_Vfrczps_xmm_xmmm128).reg(R::XMM0),
                NodeSpec::new(T::VW_2).code(C::XOP_Vfrczps_ymm_ymmm256).reg(R::YMM0),
            ),
            Entry::Invalid,
        )),
    );

    // Rotate by register: W0 reads the count from vvvv, W1 from r/m.
    #[rustfmt::skip]
    let rotates = [
        (0x90, C::XOP_Vprotb_xmm_xmmm128_xmm, C::XOP_Vprotb_xmm_xmm_xmmm128),
        (0x91, C::XOP_Vprotw_xmm_xmmm128_xmm, C::XOP_Vprotw_xmm_xmm_xmmm128),
        (0x92, C::XOP_Vprotd_xmm_xmmm128_xmm, C::XOP_Vprotd_xmm_xmm_xmmm128),
        (0x93, C::XOP_Vprotq_xmm_xmmm128_xmm, C::XOP_Vprotq_xmm_xmm_xmmm128),
    ];
    for (opcode, by_vvvv, by_rm) in rotates {
        map.set(
            opcode,
            np(vl(
                w(NodeSpec::new(T::VWH).code(by_vvvv).reg(R::XMM0), NodeSpec::new(T::VHW_2).code(by_rm).reg(R::XMM0)),
                Entry::Invalid,
            )),
        );
    }

    Ok(map)
}

fn map_a() -> OpcodeMap {
    let mut map = OpcodeMap::new();
    map.set(
        0x10,
        np(vl(NodeSpec::new(T::Gv_Ev_Id).code2(C::XOP_Bextr_r32_rm32_imm32, C::XOP_Bextr_r64_rm64_imm32), Entry::Invalid)),
    );
    map
}
