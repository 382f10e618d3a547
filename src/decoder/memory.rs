use super::{Decoder, EncodingKind, OpSize, StateFlags};
use crate::instruction::Instruction;
use crate::register::Register;
use crate::tuple_type::TupleType;

/// 16-bit addressing: (base, index) per ModRM.rm.
const MEM16: [(Register, Register); 8] = [
    (Register::BX, Register::SI),
    (Register::BX, Register::DI),
    (Register::BP, Register::SI),
    (Register::BP, Register::DI),
    (Register::SI, Register::None),
    (Register::DI, Register::None),
    (Register::BP, Register::None),
    (Register::BX, Register::None),
];

impl Decoder<'_> {
    /// Reads the memory operand addressed by the current ModRM (SIB and displacement
    /// included) into `instruction.memory`.
    pub(crate) fn read_op_mem(&mut self, instruction: &mut Instruction) {
        self.read_op_mem_tuple(instruction, TupleType::N1);
    }

    /// Like [`read_op_mem`](Self::read_op_mem); an EVEX 8-bit displacement is scaled by
    /// the tuple type's `N`.
    pub(crate) fn read_op_mem_tuple(&mut self, instruction: &mut Instruction, tuple_type: TupleType) {
        if self.state.address_size == OpSize::Size16 {
            self.read_op_mem16(instruction, tuple_type);
        } else {
            self.read_op_mem32_or_64(instruction, None, tuple_type);
        }
    }

    /// Memory operand with a vector index register (gathers and scatters). Requires a SIB byte.
    pub(crate) fn read_op_mem_vsib(&mut self, instruction: &mut Instruction, index_base: Register, tuple_type: TupleType) {
        if self.state.address_size == OpSize::Size16 || self.state.rm != 4 {
            self.mark_invalid();
            if self.state.address_size == OpSize::Size16 {
                self.read_op_mem16(instruction, tuple_type);
                return;
            }
        }
        self.read_op_mem32_or_64(instruction, Some(index_base), tuple_type);
    }

    /// Memory operand that must carry a SIB byte (AMX tile loads/stores).
    pub(crate) fn read_op_mem_sib(&mut self, instruction: &mut Instruction) {
        self.mark_invalid_if_strict(self.state.address_size == OpSize::Size16 || self.state.rm != 4);
        self.read_op_mem(instruction);
    }

    fn disp8_scale(&self, instruction: &Instruction, tuple_type: TupleType) -> u32 {
        if self.state.encoding == EncodingKind::Evex {
            tuple_type.disp8_scale(instruction.broadcast)
        } else {
            1
        }
    }

    fn read_op_mem16(&mut self, instruction: &mut Instruction, tuple_type: TupleType) {
        let (mut base, mut index) = MEM16[self.state.rm as usize];
        let (disp, displ_size) = match self.state.mod_ {
            0 if self.state.rm == 6 => {
                base = Register::None;
                index = Register::None;
                (self.read_u16(), 2u8)
            }
            0 => (0, 0),
            1 => {
                let n = self.disp8_scale(instruction, tuple_type);
                let disp = (self.read_u8() as u8 as i8 as i32 as u32).wrapping_mul(n);
                (disp & 0xFFFF, 1)
            }
            _ => (self.read_u16(), 2),
        };
        let memory = &mut instruction.memory;
        memory.base = base;
        memory.index = index;
        memory.scale = 1;
        memory.displacement = disp as u64;
        memory.displ_size = displ_size;
    }

    fn read_op_mem32_or_64(&mut self, instruction: &mut Instruction, vsib_base: Option<Register>, tuple_type: TupleType) {
        let is64 = self.state.address_size == OpSize::Size64;
        let gpr_base = if is64 { Register::RAX } else { Register::EAX };
        let base;
        let mut index = Register::None;
        let mut scale = 1u8;
        let mut no_base_disp32 = false;

        if self.state.rm == 4 {
            let sib = self.read_u8();
            scale = 1 << (sib >> 6);
            let index_field = ((sib >> 3) & 7) + self.state.extra_index_register_base;
            if let Some(vsib) = vsib_base {
                index = vsib.offset(index_field + self.state.extra_index_register_base_vsib);
            } else if index_field != 4 {
                index = gpr_base.offset(index_field);
            }
            let base_field = sib & 7;
            if base_field == 5 && self.state.mod_ == 0 {
                base = Register::None;
                no_base_disp32 = true;
            } else {
                base = gpr_base.offset(base_field + self.state.extra_base_register_base);
            }
        } else if self.state.rm == 5 && self.state.mod_ == 0 {
            no_base_disp32 = true;
            base = if !self.is64b_mode {
                Register::None
            } else if is64 {
                self.state.flags |= StateFlags::IP_REL64;
                Register::RIP
            } else {
                self.state.flags |= StateFlags::IP_REL32;
                Register::EIP
            };
        } else {
            base = gpr_base.offset(self.state.rm + self.state.extra_base_register_base);
        }

        let (disp, displ_size) = if no_base_disp32 || self.state.mod_ == 2 {
            (self.read_u32() as i32 as i64, 4u8)
        } else if self.state.mod_ == 1 {
            let n = self.disp8_scale(instruction, tuple_type) as i64;
            ((self.read_u8() as u8 as i8 as i64) * n, 1u8)
        } else {
            (0, 0u8)
        };
        let memory = &mut instruction.memory;
        memory.base = base;
        memory.index = index;
        memory.scale = scale;
        memory.displ_size = displ_size;
        memory.displacement = if is64 { disp as u64 } else { disp as u32 as u64 };
    }
}
