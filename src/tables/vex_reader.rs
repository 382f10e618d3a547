use num_traits::FromPrimitive;

use super::deserializer::{Constructed, HandlerReader, TableDeserializer};
use crate::error::{TableError, TableFamily};
use crate::handlers::{common, vex, Node, NodeId};

handler_tags! {
    /// Tags of the VEX handler family. XOP maps use the same tag space.
    pub enum VexTag {
        Invalid,
        Invalid2,
        Dup,
        Null,
        Invalid_NoModRM,
        HandlerReference,
        ArrayReference,
        Bitness,
        Bitness_DontReadModRM,
        Group,
        Group8x64,
        MandatoryPrefix2,
        MandatoryPrefix2_NoModRM,
        W,
        VectorLength,
        VectorLength_NoModRM,
        RM,
        Simple,
        VHW,
        VHW_2,
        VW,
        VW_2,
        WV,
        VM,
        MV,
        M,
        VHM,
        MHV,
        VHWIb,
        VHWIb_2,
        VWIb,
        VWIb_2,
        VWH,
        VHWIs4,
        VHIs4W,
        HRIb,
        VHEv,
        VHEvIb,
        EvVIb,
        GvW,
        GvRx,
        VK_HK_RK,
        VK_RK,
        VK_WK,
        M_VK,
        VK_R,
        G_VK,
        VK_RK_Ib,
        Gv_Hv_Ev,
        Gv_Ev_Hv,
        Hv_Ev,
        Gv_Ev_Ib,
        Gv_Ev_Id,
        VX_VSIB_HX,
        VT_SIBMEM,
        SIBMEM_VT,
        VT_RT_HT,
        VT,
    }
}

/// Builds VEX and XOP map nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct VexReader;

impl HandlerReader for VexReader {
    const FAMILY: TableFamily = TableFamily::Vex;

    fn construct(de: &mut TableDeserializer<'_, Self>, tag: u8) -> Result<Constructed, TableError> {
        let Some(tag) = VexTag::from_u8(tag) else {
            return Err(de.unknown_tag(tag));
        };
        let node: Node = match tag {
            VexTag::Invalid => return Ok(Constructed::Node(NodeId::INVALID)),
            VexTag::Invalid_NoModRM => return Ok(Constructed::Node(NodeId::INVALID_NO_MODRM)),
            VexTag::Null => return Ok(Constructed::Node(NodeId::NULL)),
            VexTag::Invalid2 => return Ok(Constructed::Repeated(NodeId::INVALID, 2)),
            VexTag::Dup => return de.read_dup(),
            VexTag::HandlerReference => return Ok(Constructed::Node(de.read_handler_reference()?)),
            VexTag::ArrayReference => return Err(de.misplaced_array_reference()),

            VexTag::Bitness => {
                common::Bitness { handler1632: de.read_handler()?, handler64: de.read_handler()? }.into()
            }
            VexTag::Bitness_DontReadModRM => {
                common::BitnessDontReadModRM { handler1632: de.read_handler()?, handler64: de.read_handler()? }.into()
            }
            VexTag::Group => common::Group { table: de.read_array()? }.into(),
            VexTag::Group8x64 => {
                common::Group8x64 { table_low: de.read_array()?, table_high: de.read_array_boxed()? }.into()
            }
            VexTag::MandatoryPrefix2 => common::MandatoryPrefix2 { handlers: de.read_handlers()? }.into(),
            VexTag::MandatoryPrefix2_NoModRM => {
                common::MandatoryPrefix2NoModRM { handlers: de.read_handlers()? }.into()
            }
            VexTag::W => common::W { w0: de.read_handler()?, w1: de.read_handler()? }.into(),
            // VEX.L is one bit; the upper two lengths are unreachable.
            VexTag::VectorLength => {
                let [l0, l1] = de.read_handlers()?;
                common::VectorLength { handlers: [l0, l1, NodeId::INVALID, NodeId::INVALID] }.into()
            }
            VexTag::VectorLength_NoModRM => {
                let [l0, l1] = de.read_handlers()?;
                common::VectorLengthNoModRM {
                    handlers: [l0, l1, NodeId::INVALID_NO_MODRM, NodeId::INVALID_NO_MODRM],
                }
                .into()
            }
            VexTag::RM => common::Rm { reg: de.read_handler()?, mem: de.read_handler()? }.into(),
            VexTag::Simple => vex::VexSimple { code: de.read_code()? }.into(),

            VexTag::VHW => vex::VexVHW {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                base_reg3: de.read_register()?,
            }
            .into(),
            VexTag::VHW_2 => {
                let code = de.read_code()?;
                let reg = de.read_register()?;
                vex::VexVHW { code, base_reg1: reg, base_reg2: reg, base_reg3: reg }.into()
            }
            VexTag::VW => {
                vex::VexVW { code: de.read_code()?, base_reg1: de.read_register()?, base_reg2: de.read_register()? }
                    .into()
            }
            VexTag::VW_2 => {
                let code = de.read_code()?;
                let reg = de.read_register()?;
                vex::VexVW { code, base_reg1: reg, base_reg2: reg }.into()
            }
            VexTag::WV => {
                vex::VexWV { code: de.read_code()?, base_reg1: de.read_register()?, base_reg2: de.read_register()? }
                    .into()
            }
            VexTag::VM => vex::VexVM { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            VexTag::MV => vex::VexMV { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            VexTag::M => vex::VexM { code: de.read_code()? }.into(),
            VexTag::VHM => vex::VexVHM { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            VexTag::MHV => vex::VexMHV { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            VexTag::VHWIb => vex::VexVHWIb {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                base_reg3: de.read_register()?,
            }
            .into(),
            VexTag::VHWIb_2 => {
                let code = de.read_code()?;
                let reg = de.read_register()?;
                vex::VexVHWIb { code, base_reg1: reg, base_reg2: reg, base_reg3: reg }.into()
            }
            VexTag::VWIb => {
                vex::VexVWIb { code: de.read_code()?, base_reg1: de.read_register()?, base_reg2: de.read_register()? }
                    .into()
            }
            VexTag::VWIb_2 => {
                let code = de.read_code()?;
                let reg = de.read_register()?;
                vex::VexVWIb { code, base_reg1: reg, base_reg2: reg }.into()
            }
            VexTag::VWH => vex::VexVWH { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            VexTag::VHWIs4 => vex::VexVHWIs4 { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            VexTag::VHIs4W => vex::VexVHIs4W { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            VexTag::HRIb => vex::VexHRIb { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            VexTag::VHEv => vex::VexVHEv { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            VexTag::VHEvIb => vex::VexVHEvIb { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            VexTag::EvVIb => vex::VexEvVIb { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            VexTag::GvW => vex::VexGvW { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            VexTag::GvRx => vex::VexGvRx { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),

            VexTag::VK_HK_RK => vex::VexVkHkRk { code: de.read_code()? }.into(),
            VexTag::VK_RK => vex::VexVkRk { code: de.read_code()? }.into(),
            VexTag::VK_WK => vex::VexVkWk { code: de.read_code()? }.into(),
            VexTag::M_VK => vex::VexMVk { code: de.read_code()? }.into(),
            VexTag::VK_R => vex::VexVkR { code: de.read_code()?, gpr: de.read_register()? }.into(),
            VexTag::G_VK => vex::VexGVk { code: de.read_code()?, gpr: de.read_register()? }.into(),
            VexTag::VK_RK_Ib => vex::VexVkRkIb { code: de.read_code()? }.into(),

            VexTag::Gv_Hv_Ev => vex::VexGvHvEv { codes: de.read_codes()? }.into(),
            VexTag::Gv_Ev_Hv => vex::VexGvEvHv { codes: de.read_codes()? }.into(),
            VexTag::Hv_Ev => vex::VexHvEv { codes: de.read_codes()? }.into(),
            VexTag::Gv_Ev_Ib => vex::VexGvEvIb { codes: de.read_codes()? }.into(),
            VexTag::Gv_Ev_Id => vex::VexGvEvId { codes: de.read_codes()? }.into(),

            VexTag::VX_VSIB_HX => vex::VexVXVsibHX {
                code: de.read_code()?,
                vsib_base: de.read_register()?,
                base_reg: de.read_register()?,
            }
            .into(),
            VexTag::VT_SIBMEM => vex::VexVTSibmem { code: de.read_code()? }.into(),
            VexTag::SIBMEM_VT => vex::VexSibmemVT { code: de.read_code()? }.into(),
            VexTag::VT_RT_HT => vex::VexVTRTHT { code: de.read_code()? }.into(),
            VexTag::VT => vex::VexVT { code: de.read_code()? }.into(),
        };
        Ok(Constructed::Node(de.push(node)))
    }
}
