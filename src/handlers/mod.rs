//! Decode nodes.
//!
//! A decode table is a forest of small immutable nodes stored in one arena
//! ([`Forest`]) and referenced by [`NodeId`]. Tables and opcode groups are shared
//! between many map entries, so the forest is a DAG; sharing is expressed by reusing
//! an id, never by cloning a subtree.

pub mod common;
pub mod evex;
pub mod legacy;
pub mod vex;

use bitflags::bitflags;

use crate::code::Code;
use crate::decoder::{Decoder, OpSize};
use crate::instruction::Instruction;
use crate::register::Register;

/// Index of a node in a [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Invalid opcode that owns a ModRM byte.
    pub const INVALID: NodeId = NodeId(0);
    /// Invalid opcode without a ModRM byte.
    pub const INVALID_NO_MODRM: NodeId = NodeId(1);
    /// Empty slot in a fine-grained group table; the coarse table is used instead.
    pub const NULL: NodeId = NodeId(2);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-operand-size code lookup, indexed by `OpSize as usize`.
pub type Code3 = [Code; 3];

pub(crate) fn code3_for(codes: &Code3, size: OpSize) -> Code {
    codes[size as usize]
}

/// First general-purpose register of the given width.
pub(crate) fn gpr_base(size: OpSize) -> Register {
    match size {
        OpSize::Size16 => Register::AX,
        OpSize::Size32 => Register::EAX,
        OpSize::Size64 => Register::RAX,
    }
}

/// A node in the decode forest.
pub trait DecodeNode {
    /// Whether the ModRM byte must have been read before [`decode`](Self::decode) runs.
    fn has_modrm(&self) -> bool;

    /// Reads the rest of the encoding and writes the instruction's code and operands.
    /// Malformed input is reported through the decoder's invalid flag, never by panicking.
    fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction);
}

bitflags! {
    /// Per-node prefix eligibility.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HandlerFlags: u32 {
        const LOCK = 1 << 0;
        const XACQUIRE = 1 << 1;
        const XRELEASE = 1 << 2;
        /// XACQUIRE/XRELEASE are recognised even without LOCK (`xchg`, `mov` stores).
        const XACQUIRE_XRELEASE_NO_LOCK = 1 << 3;
    }
}

bitflags! {
    /// Which of a [`common::MandatoryPrefix3`] node's children consume the prefix, split by
    /// register and memory form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LegacyHandlerFlags: u32 {
        const HANDLER_REG = 1 << 0;
        const HANDLER_MEM = 1 << 1;
        const HANDLER_66_REG = 1 << 2;
        const HANDLER_66_MEM = 1 << 3;
        const HANDLER_F3_REG = 1 << 4;
        const HANDLER_F3_MEM = 1 << 5;
        const HANDLER_F2_REG = 1 << 6;
        const HANDLER_F2_MEM = 1 << 7;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MandatoryPrefix4Flags: u32 {
        const CLEAR_F3 = 1 << 0;
        const CLEAR_F2 = 1 << 1;
        const READ_MODRM = 1 << 2;
    }
}

macro_rules! decode_nodes {
    ($($variant:ident($ty:path)),* $(,)?) => {
        /// Every node kind the tables can contain.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Node {
            $($variant($ty)),*
        }

        impl Node {
            pub fn has_modrm(&self) -> bool {
                match self {
                    $(Node::$variant(node) => node.has_modrm()),*
                }
            }

            pub fn decode(&self, decoder: &mut Decoder<'_>, instruction: &mut Instruction) {
                match self {
                    $(Node::$variant(node) => node.decode(decoder, instruction)),*
                }
            }

            pub fn kind_name(&self) -> &'static str {
                match self {
                    $(Node::$variant(_) => stringify!($variant)),*
                }
            }
        }

        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Node {
                    Node::$variant(node)
                }
            }
        )*
    };
}

decode_nodes! {
    // dispatch and prefixes
    Invalid(common::Invalid),
    Null(common::Null),
    Simple(common::Simple),
    SimpleModRM(common::SimpleModRM),
    Bitness(common::Bitness),
    BitnessDontReadModRM(common::BitnessDontReadModRM),
    Rm(common::Rm),
    Options(common::Options),
    OptionsDontReadModRM(common::OptionsDontReadModRM),
    AnotherTable(common::AnotherTable),
    Group(common::Group),
    Group8x8(common::Group8x8),
    Group8x64(common::Group8x64),
    MandatoryPrefix(common::MandatoryPrefix),
    MandatoryPrefixNoModRM(common::MandatoryPrefixNoModRM),
    MandatoryPrefix3(common::MandatoryPrefix3),
    MandatoryPrefix4(common::MandatoryPrefix4),
    MandatoryPrefix2(common::MandatoryPrefix2),
    MandatoryPrefix2NoModRM(common::MandatoryPrefix2NoModRM),
    W(common::W),
    VectorLength(common::VectorLength),
    VectorLengthNoModRM(common::VectorLengthNoModRM),
    VectorLengthEr(common::VectorLengthEr),
    Vex2Escape(common::Vex2Escape),
    Vex3Escape(common::Vex3Escape),
    XopEscape(common::XopEscape),
    EvexEscape(common::EvexEscape),
    D3Now(common::D3Now),
    PrefixEsCsSsDs(common::PrefixEsCsSsDs),
    PrefixFsGs(common::PrefixFsGs),
    Prefix66(common::Prefix66),
    Prefix67(common::Prefix67),
    PrefixF0(common::PrefixF0),
    PrefixF2(common::PrefixF2),
    PrefixF3(common::PrefixF3),
    PrefixRex(common::PrefixRex),
    // legacy
    Eb(legacy::Eb),
    Ev(legacy::Ev),
    Ew(legacy::Ew),
    Ed(legacy::Ed),
    Ms(legacy::Ms),
    M(legacy::M),
    MRexW(legacy::MRexW),
    Rv(legacy::Rv),
    RvW(legacy::RvW),
    EbGb(legacy::EbGb),
    EvGv(legacy::EvGv),
    GbEb(legacy::GbEb),
    GvEv(legacy::GvEv),
    GvEb(legacy::GvEb),
    GvEw(legacy::GvEw),
    GvM(legacy::GvM),
    GvMa(legacy::GvMa),
    GvMp(legacy::GvMp),
    GvMv(legacy::GvMv),
    MvGv(legacy::MvGv),
    GdEb(legacy::GdEb),
    GdEv(legacy::GdEv),
    EbIb(legacy::EbIb),
    EvIz(legacy::EvIz),
    EvIb(legacy::EvIb),
    EvIb2(legacy::EvIb2),
    Eb1(legacy::Eb1),
    Ev1(legacy::Ev1),
    EbCL(legacy::EbCL),
    EvCL(legacy::EvCL),
    EvGvIb(legacy::EvGvIb),
    EvGvCL(legacy::EvGvCL),
    GvEvIb(legacy::GvEvIb),
    GvEvIz(legacy::GvEvIz),
    EvSw(legacy::EvSw),
    SwEw(legacy::SwEw),
    RegIb(legacy::RegIb),
    IbReg(legacy::IbReg),
    RegIz(legacy::RegIz),
    RegIb3(legacy::RegIb3),
    RegIz2(legacy::RegIz2),
    RegReg(legacy::RegReg),
    EaxDx(legacy::EaxDx),
    DxEax(legacy::DxEax),
    EaxIb(legacy::EaxIb),
    IbEax(legacy::IbEax),
    PushPopReg(legacy::PushPopReg),
    PushSimpleReg(legacy::PushSimpleReg),
    PushPopEv(legacy::PushPopEv),
    PushIz(legacy::PushIz),
    PushIb2(legacy::PushIb2),
    XchgRegRax(legacy::XchgRegRax),
    SimpleReg(legacy::SimpleReg),
    Simple2(legacy::Simple2),
    Simple3(legacy::Simple3),
    Jb(legacy::Jb),
    Jz(legacy::Jz),
    Jb2(legacy::Jb2),
    Xbegin(legacy::Xbegin),
    Ap(legacy::Ap),
    Ep(legacy::Ep),
    BranchSimple(legacy::BranchSimple),
    BranchIw(legacy::BranchIw),
    BranchEv(legacy::BranchEv),
    Ib(legacy::Ib),
    Iw(legacy::Iw),
    IwIb(legacy::IwIb),
    YbReg(legacy::YbReg),
    YvReg(legacy::YvReg),
    YvReg2(legacy::YvReg2),
    RegXb(legacy::RegXb),
    RegXv(legacy::RegXv),
    RegXv2(legacy::RegXv2),
    XbYb(legacy::XbYb),
    XvYv(legacy::XvYv),
    YbXb(legacy::YbXb),
    YvXv(legacy::YvXv),
    RegYb(legacy::RegYb),
    RegYv(legacy::RegYv),
    RegOb(legacy::RegOb),
    RegOv(legacy::RegOv),
    ObReg(legacy::ObReg),
    OvReg(legacy::OvReg),
    MemBx(legacy::MemBx),
    RdCr(legacy::RdCr),
    CrRd(legacy::CrRd),
    Mf(legacy::Mf),
    StSti(legacy::StSti),
    StiSt(legacy::StiSt),
    Sti(legacy::Sti),
    VW(legacy::VW),
    WV(legacy::WV),
    VM(legacy::VM),
    MV(legacy::MV),
    VWIb(legacy::VWIb),
    VQ(legacy::VQ),
    VEv(legacy::VEv),
    EvV(legacy::EvV),
    VEvIb(legacy::VEvIb),
    EvVIb(legacy::EvVIb),
    GvW(legacy::GvW),
    RIb(legacy::RIb),
    RIbIb(legacy::RIbIb),
    PQ(legacy::PQ),
    QP(legacy::QP),
    PQIb(legacy::PQIb),
    NIb(legacy::NIb),
    PEv(legacy::PEv),
    EvP(legacy::EvP),
    MP(legacy::MP),
    BM(legacy::BM),
    MB(legacy::MB),
    BEv(legacy::BEv),
    BMib(legacy::BMib),
    MibB(legacy::MibB),
    // vex / xop
    VexSimple(vex::VexSimple),
    VexVHW(vex::VexVHW),
    VexVW(vex::VexVW),
    VexWV(vex::VexWV),
    VexVM(vex::VexVM),
    VexMV(vex::VexMV),
    VexM(vex::VexM),
    VexVHM(vex::VexVHM),
    VexMHV(vex::VexMHV),
    VexVHWIb(vex::VexVHWIb),
    VexVWIb(vex::VexVWIb),
    VexVWH(vex::VexVWH),
    VexVHWIs4(vex::VexVHWIs4),
    VexVHIs4W(vex::VexVHIs4W),
    VexHRIb(vex::VexHRIb),
    VexVHEv(vex::VexVHEv),
    VexVHEvIb(vex::VexVHEvIb),
    VexEvVIb(vex::VexEvVIb),
    VexGvW(vex::VexGvW),
    VexGvRx(vex::VexGvRx),
    VexVkHkRk(vex::VexVkHkRk),
    VexVkRk(vex::VexVkRk),
    VexVkWk(vex::VexVkWk),
    VexMVk(vex::VexMVk),
    VexVkR(vex::VexVkR),
    VexGVk(vex::VexGVk),
    VexVkRkIb(vex::VexVkRkIb),
    VexGvHvEv(vex::VexGvHvEv),
    VexGvEvHv(vex::VexGvEvHv),
    VexHvEv(vex::VexHvEv),
    VexGvEvIb(vex::VexGvEvIb),
    VexGvEvId(vex::VexGvEvId),
    VexVXVsibHX(vex::VexVXVsibHX),
    VexVTSibmem(vex::VexVTSibmem),
    VexSibmemVT(vex::VexSibmemVT),
    VexVTRTHT(vex::VexVTRTHT),
    VexVT(vex::VexVT),
    // evex
    EvexVkHW(evex::EvexVkHW),
    EvexVkHWEr(evex::EvexVkHWEr),
    EvexVkHWIb(evex::EvexVkHWIb),
    EvexVkHWIbEr(evex::EvexVkHWIbEr),
    EvexVkW(evex::EvexVkW),
    EvexVkWEr(evex::EvexVkWEr),
    EvexVkWIb(evex::EvexVkWIb),
    EvexVkWIbEr(evex::EvexVkWIbEr),
    EvexWkV(evex::EvexWkV),
    EvexHkWIb(evex::EvexHkWIb),
    EvexKkHW(evex::EvexKkHW),
    EvexKkHWIb(evex::EvexKkHWIb),
    EvexKkHWIbSae(evex::EvexKkHWIbSae),
    EvexKkWIb(evex::EvexKkWIb),
    EvexKP1HW(evex::EvexKP1HW),
    EvexVkM(evex::EvexVkM),
    EvexVM(evex::EvexVM),
    EvexMV(evex::EvexMV),
    EvexVW(evex::EvexVW),
    EvexWV(evex::EvexWV),
    EvexVkEv(evex::EvexVkEv),
    EvexVXEv(evex::EvexVXEv),
    EvexEvVX(evex::EvexEvVX),
    EvexVHEv(evex::EvexVHEv),
    EvexVHEvEr(evex::EvexVHEvEr),
    EvexVHEvIb(evex::EvexVHEvIb),
    EvexEdVIb(evex::EvexEdVIb),
    EvexGvWEr(evex::EvexGvWEr),
    EvexVkVsib(evex::EvexVkVsib),
    EvexVsibkV(evex::EvexVsibkV),
    EvexVsibk(evex::EvexVsibk),
    EvexVRk(evex::EvexVRk),
    EvexKR(evex::EvexKR),
}

/// Arena holding every node of one table set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forest {
    nodes: Vec<Node>,
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}

impl Forest {
    /// Creates a forest pre-seeded with the shared sentinels
    /// ([`NodeId::INVALID`], [`NodeId::INVALID_NO_MODRM`], [`NodeId::NULL`]).
    pub fn new() -> Self {
        Forest {
            nodes: vec![
                common::Invalid { has_modrm: true }.into(),
                common::Invalid { has_modrm: false }.into(),
                common::Null.into(),
            ],
        }
    }

    pub fn push(&mut self, node: impl Into<Node>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node.into());
        id
    }

    /// Ids only come from [`push`](Self::push) on this forest; a foreign id resolves to
    /// the invalid sentinel.
    pub fn get(&self, id: NodeId) -> &Node {
        self.nodes.get(id.index()).unwrap_or(&self.nodes[0])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn kind_name(&self, id: NodeId) -> &'static str {
        self.get(id).kind_name()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i as u32), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_preseeded() {
        let forest = Forest::new();
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.kind_name(NodeId::INVALID), "Invalid");
        assert!(forest.get(NodeId::INVALID).has_modrm());
        assert!(!forest.get(NodeId::INVALID_NO_MODRM).has_modrm());
        assert_eq!(forest.kind_name(NodeId::NULL), "Null");
    }

    #[test]
    fn push_assigns_sequential_ids() {
        let mut forest = Forest::new();
        let a = forest.push(common::Simple { code: Code::Hlt });
        let b = forest.push(common::Simple { code: Code::Cpuid });
        assert_eq!(a.index(), 3);
        assert_eq!(b.index(), 4);
        assert_eq!(forest.kind_name(b), "Simple");
    }
}
