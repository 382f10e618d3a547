use num_traits::FromPrimitive;

use super::deserializer::{Constructed, HandlerReader, TableDeserializer};
use crate::error::{TableError, TableFamily};
use crate::handlers::{common, evex, Node, NodeId};

handler_tags! {
    /// Tags of the EVEX handler family.
    pub enum EvexTag {
        Invalid,
        Invalid2,
        Dup,
        HandlerReference,
        ArrayReference,
        Group,
        MandatoryPrefix2,
        W,
        VectorLength,
        VectorLength_er,
        RM,
        VkHW,
        VkHW_3,
        VkHW_er,
        VkHWIb,
        VkHWIb_3,
        VkHWIb_er,
        VkW,
        VkW_er,
        VkWIb,
        VkWIb_er,
        WkV,
        HkWIb,
        KkHW,
        KkHWIb,
        KkHWIb_sae,
        KkWIb,
        KP1HW,
        VkM,
        VM,
        MV,
        VW,
        WV,
        VkEv_REXW,
        VX_Ev,
        Ev_VX,
        VHEv,
        VHEv_er,
        VHEvIb,
        Ed_V_Ib,
        Gv_W_er,
        VkVsib,
        VsibkV,
        Vsibk,
        VRk,
        KR,
    }
}

/// Builds EVEX map nodes. Every EVEX opcode owns a ModRM byte, so the family has no
/// ModRM-less invalid entry and no `Null` placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvexReader;

impl HandlerReader for EvexReader {
    const FAMILY: TableFamily = TableFamily::Evex;

    fn construct(de: &mut TableDeserializer<'_, Self>, tag: u8) -> Result<Constructed, TableError> {
        let Some(tag) = EvexTag::from_u8(tag) else {
            return Err(de.unknown_tag(tag));
        };
        let node: Node = match tag {
            EvexTag::Invalid => return Ok(Constructed::Node(NodeId::INVALID)),
            EvexTag::Invalid2 => return Ok(Constructed::Repeated(NodeId::INVALID, 2)),
            EvexTag::Dup => return de.read_dup(),
            EvexTag::HandlerReference => return Ok(Constructed::Node(de.read_handler_reference()?)),
            EvexTag::ArrayReference => return Err(de.misplaced_array_reference()),

            EvexTag::Group => common::Group { table: de.read_array()? }.into(),
            EvexTag::MandatoryPrefix2 => common::MandatoryPrefix2 { handlers: de.read_handlers()? }.into(),
            EvexTag::W => common::W { w0: de.read_handler()?, w1: de.read_handler()? }.into(),
            EvexTag::VectorLength => common::VectorLength { handlers: de.read_handlers()? }.into(),
            EvexTag::VectorLength_er => common::VectorLengthEr { handlers: de.read_handlers()? }.into(),
            EvexTag::RM => common::Rm { reg: de.read_handler()?, mem: de.read_handler()? }.into(),

            EvexTag::VkHW => evex::EvexVkHW {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                base_reg3: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::VkHW_3 => {
                let code = de.read_code()?;
                let reg = de.read_register()?;
                evex::EvexVkHW {
                    code,
                    base_reg1: reg,
                    base_reg2: reg,
                    base_reg3: reg,
                    tuple_type: de.read_tuple_type()?,
                    can_broadcast: de.read_bool()?,
                }
                .into()
            }
            EvexTag::VkHW_er => evex::EvexVkHWEr {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                only_sae: de.read_bool()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::VkHWIb => evex::EvexVkHWIb {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                base_reg3: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::VkHWIb_3 => {
                let code = de.read_code()?;
                let reg = de.read_register()?;
                evex::EvexVkHWIb {
                    code,
                    base_reg1: reg,
                    base_reg2: reg,
                    base_reg3: reg,
                    tuple_type: de.read_tuple_type()?,
                    can_broadcast: de.read_bool()?,
                }
                .into()
            }
            EvexTag::VkHWIb_er => evex::EvexVkHWIbEr {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),
            EvexTag::VkW => evex::EvexVkW {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::VkW_er => evex::EvexVkWEr {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                only_sae: de.read_bool()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::VkWIb => evex::EvexVkWIb {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::VkWIb_er => evex::EvexVkWIbEr {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),
            EvexTag::WkV => evex::EvexWkV {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                allow_zeroing_masking: de.read_bool()?,
            }
            .into(),
            EvexTag::HkWIb => evex::EvexHkWIb {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),

            EvexTag::KkHW => evex::EvexKkHW {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::KkHWIb => evex::EvexKkHWIb {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::KkHWIb_sae => evex::EvexKkHWIbSae {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::KkWIb => evex::EvexKkWIb {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),
            EvexTag::KP1HW => evex::EvexKP1HW {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                can_broadcast: de.read_bool()?,
            }
            .into(),

            EvexTag::VkM => evex::EvexVkM {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),
            EvexTag::VM => evex::EvexVM {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),
            EvexTag::MV => evex::EvexMV {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),
            EvexTag::VW => evex::EvexVW {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                sae: de.read_bool()?,
            }
            .into(),
            EvexTag::WV => evex::EvexWV {
                code: de.read_code()?,
                base_reg1: de.read_register()?,
                base_reg2: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),

            EvexTag::VkEv_REXW => evex::EvexVkEv { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            EvexTag::VX_Ev => evex::EvexVXEv { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            EvexTag::Ev_VX => evex::EvexEvVX { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            EvexTag::VHEv => evex::EvexVHEv { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            EvexTag::VHEv_er => evex::EvexVHEvEr { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            EvexTag::VHEvIb => evex::EvexVHEvIb { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            EvexTag::Ed_V_Ib => evex::EvexEdVIb { codes: de.read_codes()?, base_reg: de.read_register()? }.into(),
            EvexTag::Gv_W_er => evex::EvexGvWEr {
                codes: de.read_codes()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
                only_sae: de.read_bool()?,
            }
            .into(),

            EvexTag::VkVsib => evex::EvexVkVsib {
                code: de.read_code()?,
                base_reg: de.read_register()?,
                vsib_base: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),
            EvexTag::VsibkV => evex::EvexVsibkV {
                code: de.read_code()?,
                vsib_base: de.read_register()?,
                base_reg: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),
            EvexTag::Vsibk => evex::EvexVsibk {
                code: de.read_code()?,
                vsib_base: de.read_register()?,
                tuple_type: de.read_tuple_type()?,
            }
            .into(),
            EvexTag::VRk => evex::EvexVRk { code: de.read_code()?, base_reg: de.read_register()? }.into(),
            EvexTag::KR => evex::EvexKR { code: de.read_code()?, base_reg: de.read_register()? }.into(),
        };
        Ok(Constructed::Node(de.push(node)))
    }
}
