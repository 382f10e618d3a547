use num_traits::FromPrimitive;

use super::deserializer::{Constructed, HandlerReader, TableDeserializer};
use crate::code::Code;
use crate::decoder::DecoderOptions;
use crate::error::{TableError, TableFamily};
use crate::handlers::{common, legacy, HandlerFlags, LegacyHandlerFlags, MandatoryPrefix4Flags, Node, NodeId};

handler_tags! {
    /// Tags of the legacy (non-VEX) handler family.
    pub enum LegacyTag {
        Bitness,
        Bitness_DontReadModRM,
        Invalid,
        Invalid_NoModRM,
        Invalid2,
        Dup,
        Null,
        HandlerReference,
        ArrayReference,
        AnotherTable,
        Group,
        Group8x8,
        Group8x64,
        MandatoryPrefix,
        MandatoryPrefix_NoModRM,
        MandatoryPrefix3,
        MandatoryPrefix4,
        Options,
        Options_DontReadModRM,
        Rm,
        Simple,
        SimpleModRM,
        Prefix_ES_CS_SS_DS,
        Prefix_FS_GS,
        Prefix66,
        Prefix67,
        PrefixF0,
        PrefixF2,
        PrefixF3,
        PrefixREX,
        VEX2,
        VEX3,
        XOP,
        EVEX,
        D3NOW,
        Eb,
        Ev,
        Ew,
        Ed,
        Ms,
        M,
        M_REXW,
        Rv,
        Rv_W,
        Eb_Gb,
        Ev_Gv,
        Gb_Eb,
        Gv_Ev,
        Gv_Eb,
        Gv_Ew,
        Gv_M,
        Gv_Ma,
        Gv_Mp,
        Gv_Mp_2,
        Gv_Mv,
        Mv_Gv,
        Gd_Eb,
        Gd_Ev,
        Eb_Ib,
        Ev_Iz,
        Ev_Ib,
        Ev_Ib2,
        Eb_1,
        Ev_1,
        Eb_CL,
        Ev_CL,
        Ev_Gv_Ib,
        Ev_Gv_CL,
        Gv_Ev_Ib,
        Gv_Ev_Iz,
        Ev_Sw,
        Sw_Ew,
        Reg_Ib,
        Ib_Reg,
        Reg_Iz,
        Reg_Ib3,
        Reg_Iz2,
        Reg_Reg,
        eAX_DX,
        DX_eAX,
        eAX_Ib,
        Ib_eAX,
        PushPopReg,
        PushSimpleReg,
        PushSimpleReg_2,
        PushPopEv,
        PushIz,
        PushIb2,
        XchgRegRax,
        SimpleReg,
        SimpleReg_2,
        Simple2,
        Simple2_2,
        Simple3,
        Jb,
        Jz,
        Jb2,
        Xbegin,
        Ap,
        Ep,
        BranchSimple,
        BranchIw,
        BranchEv,
        Ib,
        Iw,
        Iw_Ib,
        Yb_Reg,
        Yv_Reg,
        Yv_Reg2,
        Reg_Xb,
        Reg_Xv,
        Reg_Xv2,
        Xb_Yb,
        Xv_Yv,
        Yb_Xb,
        Yv_Xv,
        Reg_Yb,
        Reg_Yv,
        Reg_Ob,
        Reg_Ov,
        Ob_Reg,
        Ov_Reg,
        MemBx,
        Rd_Cr,
        Cr_Rd,
        Mf,
        St_Sti,
        Sti_St,
        Sti,
        VW,
        WV,
        VM,
        MV,
        VW_Ib,
        VQ,
        V_Ev,
        Ev_V,
        V_Ev_Ib,
        Ev_V_Ib,
        Gv_W,
        R_Ib,
        R_Ib_Ib,
        P_Q,
        Q_P,
        P_Q_Ib,
        N_Ib,
        P_Ev,
        Ev_P,
        M_P,
        B_M,
        M_B,
        B_Ev,
        B_MIB,
        MIB_B,
    }
}

/// Builds legacy-map nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyReader;

fn flags(de: &mut TableDeserializer<'_, LegacyReader>) -> Result<HandlerFlags, TableError> {
    Ok(HandlerFlags::from_bits_truncate(de.read_u32()?))
}

fn options(de: &mut TableDeserializer<'_, LegacyReader>) -> Result<(NodeId, Vec<(NodeId, DecoderOptions)>), TableError> {
    let default = de.read_handler()?;
    let count = de.read_u32()?;
    let mut alternatives = Vec::new();
    for _ in 0..count {
        let handler = de.read_handler()?;
        let option = DecoderOptions::from_bits_truncate(de.read_u32()?);
        alternatives.push((handler, option));
    }
    Ok((default, alternatives))
}

fn d3now_codes(de: &mut TableDeserializer<'_, LegacyReader>) -> Result<Box<[Code; 256]>, TableError> {
    let mut codes = Box::new([Code::Invalid; 256]);
    let count = de.read_u32()?;
    for _ in 0..count {
        let ib = de.read_u8()?;
        codes[ib as usize] = de.read_code()?;
    }
    Ok(codes)
}

impl HandlerReader for LegacyReader {
    const FAMILY: TableFamily = TableFamily::Legacy;

    fn construct(de: &mut TableDeserializer<'_, Self>, tag: u8) -> Result<Constructed, TableError> {
        let Some(tag) = LegacyTag::from_u8(tag) else {
            return Err(de.unknown_tag(tag));
        };
        let node: Node = match tag {
            LegacyTag::Invalid => return Ok(Constructed::Node(NodeId::INVALID)),
            LegacyTag::Invalid_NoModRM => return Ok(Constructed::Node(NodeId::INVALID_NO_MODRM)),
            LegacyTag::Null => return Ok(Constructed::Node(NodeId::NULL)),
            LegacyTag::Invalid2 => return Ok(Constructed::Repeated(NodeId::INVALID, 2)),
            LegacyTag::Dup => return de.read_dup(),
            LegacyTag::HandlerReference => return Ok(Constructed::Node(de.read_handler_reference()?)),
            LegacyTag::ArrayReference => return Err(de.misplaced_array_reference()),

            LegacyTag::Bitness => {
                common::Bitness { handler1632: de.read_handler()?, handler64: de.read_handler()? }.into()
            }
            LegacyTag::Bitness_DontReadModRM => {
                common::BitnessDontReadModRM { handler1632: de.read_handler()?, handler64: de.read_handler()? }.into()
            }
            LegacyTag::AnotherTable => common::AnotherTable { table: de.read_array_boxed()? }.into(),
            LegacyTag::Group => common::Group { table: de.read_array()? }.into(),
            LegacyTag::Group8x8 => {
                common::Group8x8 { table_low: de.read_array()?, table_high: de.read_array()? }.into()
            }
            LegacyTag::Group8x64 => {
                common::Group8x64 { table_low: de.read_array()?, table_high: de.read_array_boxed()? }.into()
            }
            LegacyTag::MandatoryPrefix => common::MandatoryPrefix { handlers: de.read_handlers()? }.into(),
            LegacyTag::MandatoryPrefix_NoModRM => {
                common::MandatoryPrefixNoModRM { handlers: de.read_handlers()? }.into()
            }
            LegacyTag::MandatoryPrefix3 => {
                let reg = de.read_handlers()?;
                let mem = de.read_handlers()?;
                let flags = LegacyHandlerFlags::from_bits_truncate(de.read_u32()?);
                common::MandatoryPrefix3::new(reg, mem, flags).into()
            }
            LegacyTag::MandatoryPrefix4 => {
                let [handler_np, handler_66, handler_f3, handler_f2] = de.read_handlers()?;
                let flags = MandatoryPrefix4Flags::from_bits_truncate(de.read_u32()?);
                common::MandatoryPrefix4 { handler_np, handler_66, handler_f3, handler_f2, flags }.into()
            }
            LegacyTag::Options => {
                let (default, alternatives) = options(de)?;
                common::Options { default, alternatives }.into()
            }
            LegacyTag::Options_DontReadModRM => {
                let (default, alternatives) = options(de)?;
                common::OptionsDontReadModRM { default, alternatives }.into()
            }
            LegacyTag::Rm => common::Rm { reg: de.read_handler()?, mem: de.read_handler()? }.into(),
            LegacyTag::Simple => common::Simple { code: de.read_code()? }.into(),
            LegacyTag::SimpleModRM => common::SimpleModRM { code: de.read_code()? }.into(),

            LegacyTag::Prefix_ES_CS_SS_DS => common::PrefixEsCsSsDs { segment: de.read_register()? }.into(),
            LegacyTag::Prefix_FS_GS => common::PrefixFsGs { segment: de.read_register()? }.into(),
            LegacyTag::Prefix66 => common::Prefix66.into(),
            LegacyTag::Prefix67 => common::Prefix67.into(),
            LegacyTag::PrefixF0 => common::PrefixF0.into(),
            LegacyTag::PrefixF2 => common::PrefixF2.into(),
            LegacyTag::PrefixF3 => common::PrefixF3.into(),
            LegacyTag::PrefixREX => common::PrefixRex { handler: de.read_handler()?, rex: de.read_u32()? }.into(),

            LegacyTag::VEX2 => common::Vex2Escape { handler_mem: de.read_handler()? }.into(),
            LegacyTag::VEX3 => common::Vex3Escape { handler_mem: de.read_handler()? }.into(),
            LegacyTag::XOP => common::XopEscape { handler_reg0: de.read_handler()? }.into(),
            LegacyTag::EVEX => common::EvexEscape { handler_mem: de.read_handler()? }.into(),
            LegacyTag::D3NOW => common::D3Now { codes: d3now_codes(de)? }.into(),

            LegacyTag::Eb => legacy::Eb { code: de.read_code()?, flags: flags(de)? }.into(),
            LegacyTag::Ev => legacy::Ev { codes: de.read_codes()?, flags: flags(de)? }.into(),
            LegacyTag::Ew => legacy::Ew { codes: de.read_codes()? }.into(),
            LegacyTag::Ed => legacy::Ed { code: de.read_code()? }.into(),
            LegacyTag::Ms => legacy::Ms { codes: de.read_codes()? }.into(),
            LegacyTag::M => legacy::M { code: de.read_code()? }.into(),
            LegacyTag::M_REXW => legacy::MRexW { codes: de.read_codes()?, flags: flags(de)? }.into(),
            LegacyTag::Rv => legacy::Rv { codes: de.read_codes()? }.into(),
            LegacyTag::Rv_W => legacy::RvW { codes: de.read_codes()? }.into(),
            LegacyTag::Eb_Gb => legacy::EbGb { code: de.read_code()?, flags: flags(de)? }.into(),
            LegacyTag::Ev_Gv => legacy::EvGv { codes: de.read_codes()?, flags: flags(de)? }.into(),
            LegacyTag::Gb_Eb => legacy::GbEb { code: de.read_code()? }.into(),
            LegacyTag::Gv_Ev => legacy::GvEv { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_Eb => legacy::GvEb { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_Ew => legacy::GvEw { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_M => legacy::GvM { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_Ma => legacy::GvMa { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_Mp => legacy::GvMp { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_Mp_2 => legacy::GvMp { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::Gv_Mv => legacy::GvMv { codes: de.read_codes()? }.into(),
            LegacyTag::Mv_Gv => legacy::MvGv { codes: de.read_codes()? }.into(),
            LegacyTag::Gd_Eb => legacy::GdEb { codes: de.read_codes()? }.into(),
            LegacyTag::Gd_Ev => legacy::GdEv { codes: de.read_codes()? }.into(),
            LegacyTag::Eb_Ib => legacy::EbIb { code: de.read_code()?, flags: flags(de)? }.into(),
            LegacyTag::Ev_Iz => legacy::EvIz { codes: de.read_codes()?, flags: flags(de)? }.into(),
            LegacyTag::Ev_Ib => legacy::EvIb { codes: de.read_codes()?, flags: flags(de)? }.into(),
            LegacyTag::Ev_Ib2 => legacy::EvIb2 { codes: de.read_codes()?, flags: flags(de)? }.into(),
            LegacyTag::Eb_1 => legacy::Eb1 { code: de.read_code()? }.into(),
            LegacyTag::Ev_1 => legacy::Ev1 { codes: de.read_codes()? }.into(),
            LegacyTag::Eb_CL => legacy::EbCL { code: de.read_code()? }.into(),
            LegacyTag::Ev_CL => legacy::EvCL { codes: de.read_codes()? }.into(),
            LegacyTag::Ev_Gv_Ib => legacy::EvGvIb { codes: de.read_codes()? }.into(),
            LegacyTag::Ev_Gv_CL => legacy::EvGvCL { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_Ev_Ib => legacy::GvEvIb { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_Ev_Iz => legacy::GvEvIz { codes: de.read_codes()? }.into(),
            LegacyTag::Ev_Sw => legacy::EvSw { codes: de.read_codes()? }.into(),
            LegacyTag::Sw_Ew => legacy::SwEw { code: de.read_code()? }.into(),
            LegacyTag::Reg_Ib => legacy::RegIb { code: de.read_code()?, reg: de.read_register()? }.into(),
            LegacyTag::Ib_Reg => legacy::IbReg { code: de.read_code()?, reg: de.read_register()? }.into(),
            LegacyTag::Reg_Iz => legacy::RegIz { codes: de.read_codes()? }.into(),
            LegacyTag::Reg_Ib3 => legacy::RegIb3 { code: de.read_code()?, index: de.read_u32()? }.into(),
            LegacyTag::Reg_Iz2 => legacy::RegIz2 { codes: de.read_codes()?, index: de.read_u32()? }.into(),
            LegacyTag::Reg_Reg => {
                legacy::RegReg { code: de.read_code()?, reg1: de.read_register()?, reg2: de.read_register()? }.into()
            }
            LegacyTag::eAX_DX => legacy::EaxDx { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::DX_eAX => legacy::DxEax { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::eAX_Ib => legacy::EaxIb { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::Ib_eAX => legacy::IbEax { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::PushPopReg => legacy::PushPopReg { codes: de.read_codes()?, index: de.read_u32()? }.into(),
            LegacyTag::PushSimpleReg => {
                legacy::PushSimpleReg { codes: de.read_codes()?, reg: de.read_register()? }.into()
            }
            LegacyTag::PushSimpleReg_2 => {
                legacy::PushSimpleReg { codes: de.read_codes_2_as_3()?, reg: de.read_register()? }.into()
            }
            LegacyTag::PushPopEv => legacy::PushPopEv { codes: de.read_codes()? }.into(),
            LegacyTag::PushIz => legacy::PushIz { codes: de.read_codes()? }.into(),
            LegacyTag::PushIb2 => legacy::PushIb2 { codes: de.read_codes()? }.into(),
            LegacyTag::XchgRegRax => legacy::XchgRegRax { codes: de.read_codes()?, index: de.read_u32()? }.into(),
            LegacyTag::SimpleReg => legacy::SimpleReg { codes: de.read_codes()?, index: de.read_u32()? }.into(),
            LegacyTag::SimpleReg_2 => {
                legacy::SimpleReg { codes: de.read_codes_2_as_3()?, index: de.read_u32()? }.into()
            }
            LegacyTag::Simple2 => legacy::Simple2 { codes: de.read_codes()? }.into(),
            LegacyTag::Simple2_2 => legacy::Simple2 { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::Simple3 => legacy::Simple3 { codes: de.read_codes()? }.into(),
            LegacyTag::Jb => legacy::Jb { codes: de.read_codes()? }.into(),
            LegacyTag::Jz => legacy::Jz { codes: de.read_codes()? }.into(),
            LegacyTag::Jb2 => legacy::Jb2 { codes: de.read_codes()? }.into(),
            LegacyTag::Xbegin => legacy::Xbegin { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::Ap => legacy::Ap { codes: de.read_codes()? }.into(),
            LegacyTag::Ep => legacy::Ep { codes: de.read_codes()? }.into(),
            LegacyTag::BranchSimple => legacy::BranchSimple { codes: de.read_codes()? }.into(),
            LegacyTag::BranchIw => legacy::BranchIw { codes: de.read_codes()? }.into(),
            LegacyTag::BranchEv => legacy::BranchEv { codes: de.read_codes()? }.into(),
            LegacyTag::Ib => legacy::Ib { code: de.read_code()? }.into(),
            LegacyTag::Iw => legacy::Iw { codes: de.read_codes()? }.into(),
            LegacyTag::Iw_Ib => legacy::IwIb { codes: de.read_codes()? }.into(),
            LegacyTag::Yb_Reg => legacy::YbReg { code: de.read_code()?, reg: de.read_register()? }.into(),
            LegacyTag::Yv_Reg => legacy::YvReg { codes: de.read_codes()? }.into(),
            LegacyTag::Yv_Reg2 => legacy::YvReg2 { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::Reg_Xb => legacy::RegXb { code: de.read_code()?, reg: de.read_register()? }.into(),
            LegacyTag::Reg_Xv => legacy::RegXv { codes: de.read_codes()? }.into(),
            LegacyTag::Reg_Xv2 => legacy::RegXv2 { codes: de.read_codes_2_as_3()? }.into(),
            LegacyTag::Xb_Yb => legacy::XbYb { code: de.read_code()? }.into(),
            LegacyTag::Xv_Yv => legacy::XvYv { codes: de.read_codes()? }.into(),
            LegacyTag::Yb_Xb => legacy::YbXb { code: de.read_code()? }.into(),
            LegacyTag::Yv_Xv => legacy::YvXv { codes: de.read_codes()? }.into(),
            LegacyTag::Reg_Yb => legacy::RegYb { code: de.read_code()?, reg: de.read_register()? }.into(),
            LegacyTag::Reg_Yv => legacy::RegYv { codes: de.read_codes()? }.into(),
            LegacyTag::Reg_Ob => legacy::RegOb { code: de.read_code()?, reg: de.read_register()? }.into(),
            LegacyTag::Reg_Ov => legacy::RegOv { codes: de.read_codes()? }.into(),
            LegacyTag::Ob_Reg => legacy::ObReg { code: de.read_code()?, reg: de.read_register()? }.into(),
            LegacyTag::Ov_Reg => legacy::OvReg { codes: de.read_codes()? }.into(),
            LegacyTag::MemBx => legacy::MemBx { code: de.read_code()? }.into(),
            LegacyTag::Rd_Cr => legacy::RdCr { codes: de.read_codes()?, base: de.read_register()? }.into(),
            LegacyTag::Cr_Rd => legacy::CrRd { codes: de.read_codes()?, base: de.read_register()? }.into(),

            LegacyTag::Mf => legacy::Mf { code: de.read_code()? }.into(),
            LegacyTag::St_Sti => legacy::StSti { code: de.read_code()? }.into(),
            LegacyTag::Sti_St => legacy::StiSt { code: de.read_code()? }.into(),
            LegacyTag::Sti => legacy::Sti { code: de.read_code()? }.into(),

            LegacyTag::VW => legacy::VW { code: de.read_code()? }.into(),
            LegacyTag::WV => legacy::WV { code: de.read_code()? }.into(),
            LegacyTag::VM => legacy::VM { code: de.read_code()? }.into(),
            LegacyTag::MV => legacy::MV { code: de.read_code()? }.into(),
            LegacyTag::VW_Ib => legacy::VWIb { code: de.read_code()? }.into(),
            LegacyTag::VQ => legacy::VQ { code: de.read_code()? }.into(),
            LegacyTag::V_Ev => legacy::VEv { codes: de.read_codes()? }.into(),
            LegacyTag::Ev_V => legacy::EvV { codes: de.read_codes()? }.into(),
            LegacyTag::V_Ev_Ib => legacy::VEvIb { codes: de.read_codes()? }.into(),
            LegacyTag::Ev_V_Ib => legacy::EvVIb { codes: de.read_codes()? }.into(),
            LegacyTag::Gv_W => legacy::GvW { codes: de.read_codes()? }.into(),
            LegacyTag::R_Ib => legacy::RIb { code: de.read_code()? }.into(),
            LegacyTag::R_Ib_Ib => legacy::RIbIb { code: de.read_code()? }.into(),
            LegacyTag::P_Q => legacy::PQ { code: de.read_code()? }.into(),
            LegacyTag::Q_P => legacy::QP { code: de.read_code()? }.into(),
            LegacyTag::P_Q_Ib => legacy::PQIb { code: de.read_code()? }.into(),
            LegacyTag::N_Ib => legacy::NIb { code: de.read_code()? }.into(),
            LegacyTag::P_Ev => legacy::PEv { codes: de.read_codes()? }.into(),
            LegacyTag::Ev_P => legacy::EvP { codes: de.read_codes()? }.into(),
            LegacyTag::M_P => legacy::MP { code: de.read_code()? }.into(),

            LegacyTag::B_M => legacy::BM { codes: de.read_codes()? }.into(),
            LegacyTag::M_B => legacy::MB { codes: de.read_codes()? }.into(),
            LegacyTag::B_Ev => legacy::BEv { codes: de.read_codes()? }.into(),
            LegacyTag::B_MIB => legacy::BMib { code: de.read_code()? }.into(),
            LegacyTag::MIB_B => legacy::MibB { code: de.read_code()? }.into(),
        };
        Ok(Constructed::Node(de.push(node)))
    }
}
