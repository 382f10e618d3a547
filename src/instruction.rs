use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::register::Register;

pub const MAX_OP_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OpKind {
    #[default]
    Register,
    NearBranch16,
    NearBranch32,
    NearBranch64,
    FarBranch16,
    FarBranch32,
    Immediate8,
    /// Second 8-bit immediate (`enter`, `extrq`, `insertq`).
    Immediate8Second,
    Immediate16,
    Immediate32,
    Immediate64,
    Immediate8to16,
    Immediate8to32,
    Immediate8to64,
    Immediate32to64,
    MemorySegSI,
    MemorySegESI,
    MemorySegRSI,
    MemorySegDI,
    MemorySegEDI,
    MemorySegRDI,
    MemoryESDI,
    MemoryESEDI,
    MemoryESRDI,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundingControl {
    #[default]
    None,
    RoundToNearest,
    RoundDown,
    RoundUp,
    RoundTowardZero,
}

impl RoundingControl {
    /// EVEX.L'L value reinterpreted as a static rounding mode.
    pub fn from_evex_ll(ll: u32) -> RoundingControl {
        match ll & 3 {
            0 => RoundingControl::RoundToNearest,
            1 => RoundingControl::RoundDown,
            2 => RoundingControl::RoundUp,
            _ => RoundingControl::RoundTowardZero,
        }
    }
}

bitflags! {
    /// Prefixes still visible on the decoded instruction. Mandatory-prefix nodes remove
    /// REP/REPNE/OPERAND_SIZE once the byte has been consumed as part of the opcode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct PrefixFlags: u8 {
        const LOCK = 1 << 0;
        const REP = 1 << 1;
        const REPNE = 1 << 2;
        const XACQUIRE = 1 << 3;
        const XRELEASE = 1 << 4;
        const OPERAND_SIZE = 1 << 5;
        const ADDRESS_SIZE = 1 << 6;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Operand {
    pub kind: OpKind,
    pub register: Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MemoryOperand {
    pub base: Register,
    pub index: Register,
    /// 1, 2, 4 or 8.
    pub scale: u8,
    /// Sign-extended displacement. For RIP/EIP-relative operands this is the absolute
    /// target address once the instruction is complete.
    pub displacement: u64,
    /// Size of the encoded displacement in bytes (0, 1, 2, 4 or 8).
    pub displ_size: u8,
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Instruction {
    pub code: Code,
    pub len: u8,
    pub ip: u64,
    pub op_count: u8,
    pub ops: [Operand; MAX_OP_COUNT],
    pub memory: MemoryOperand,
    pub segment_prefix: Register,
    pub immediate: u64,
    pub immediate2: u8,
    pub near_branch: u64,
    pub far_branch: u32,
    pub far_branch_selector: u16,
    pub op_mask: Register,
    pub zeroing_masking: bool,
    pub broadcast: bool,
    pub suppress_all_exceptions: bool,
    pub rounding_control: RoundingControl,
    pub prefixes: PrefixFlags,
}

impl Instruction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_invalid(&self) -> bool {
        self.code == Code::Invalid
    }

    pub fn next_ip(&self) -> u64 {
        self.ip.wrapping_add(self.len as u64)
    }

    pub fn op_kind(&self, operand: usize) -> OpKind {
        self.ops[operand].kind
    }

    pub fn op_register(&self, operand: usize) -> Register {
        self.ops[operand].register
    }

    pub fn op_kinds(&self) -> impl Iterator<Item = OpKind> + '_ {
        self.ops[..self.op_count as usize].iter().map(|op| op.kind)
    }

    pub fn has_memory_operand(&self) -> bool {
        self.op_kinds().any(|k| k == OpKind::Memory)
    }

    pub(crate) fn set_op_kind(&mut self, operand: usize, kind: OpKind) {
        self.ops[operand].kind = kind;
        if self.op_count as usize <= operand {
            self.op_count = operand as u8 + 1;
        }
    }

    pub(crate) fn set_op_register(&mut self, operand: usize, register: Register) {
        self.set_op_kind(operand, OpKind::Register);
        self.ops[operand].register = register;
    }

    pub(crate) fn set_immediate(&mut self, operand: usize, kind: OpKind, value: u64) {
        self.set_op_kind(operand, kind);
        self.immediate = value;
    }

    pub(crate) fn set_near_branch(&mut self, operand: usize, kind: OpKind, target: u64) {
        self.set_op_kind(operand, kind);
        self.near_branch = target;
    }

    /// Immediate value of operand `kind`, sign- or zero-extended to 64 bits.
    pub fn immediate_value(&self, kind: OpKind) -> Option<u64> {
        let imm = self.immediate;
        let value = match kind {
            OpKind::Immediate8 => imm as u8 as u64,
            OpKind::Immediate8Second => self.immediate2 as u64,
            OpKind::Immediate16 => imm as u16 as u64,
            OpKind::Immediate32 => imm as u32 as u64,
            OpKind::Immediate64 => imm,
            OpKind::Immediate8to16 => imm as u8 as i8 as i16 as u16 as u64,
            OpKind::Immediate8to32 => imm as u8 as i8 as i32 as u32 as u64,
            OpKind::Immediate8to64 => imm as u8 as i8 as i64 as u64,
            OpKind::Immediate32to64 => imm as u32 as i32 as i64 as u64,
            _ => return None,
        };
        Some(value)
    }
}
