use serde::{Deserialize, Serialize};

macro_rules! registers {
    ($($name:ident),* $(,)?) => {
        /// Register identifiers.
        ///
        /// The declaration order is load-bearing: decode nodes compute register ids as
        /// `base + field + extension bits`, so every register class is laid out contiguously
        /// (`AL..R15L`, `AX..R15W`, `XMM0..XMM31`, ...).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum Register {
            #[default]
            None,
            $($name),*
        }

        impl Register {
            pub const ALL: &'static [Register] = &[Register::None, $(Register::$name),*];
        }
    };
}

registers! {
    AL, CL, DL, BL, AH, CH, DH, BH, SPL, BPL, SIL, DIL,
    R8L, R9L, R10L, R11L, R12L, R13L, R14L, R15L,
    AX, CX, DX, BX, SP, BP, SI, DI,
    R8W, R9W, R10W, R11W, R12W, R13W, R14W, R15W,
    EAX, ECX, EDX, EBX, ESP, EBP, ESI, EDI,
    R8D, R9D, R10D, R11D, R12D, R13D, R14D, R15D,
    RAX, RCX, RDX, RBX, RSP, RBP, RSI, RDI,
    R8, R9, R10, R11, R12, R13, R14, R15,
    EIP, RIP,
    ES, CS, SS, DS, FS, GS,
    XMM0, XMM1, XMM2, XMM3, XMM4, XMM5, XMM6, XMM7,
    XMM8, XMM9, XMM10, XMM11, XMM12, XMM13, XMM14, XMM15,
    XMM16, XMM17, XMM18, XMM19, XMM20, XMM21, XMM22, XMM23,
    XMM24, XMM25, XMM26, XMM27, XMM28, XMM29, XMM30, XMM31,
    YMM0, YMM1, YMM2, YMM3, YMM4, YMM5, YMM6, YMM7,
    YMM8, YMM9, YMM10, YMM11, YMM12, YMM13, YMM14, YMM15,
    YMM16, YMM17, YMM18, YMM19, YMM20, YMM21, YMM22, YMM23,
    YMM24, YMM25, YMM26, YMM27, YMM28, YMM29, YMM30, YMM31,
    ZMM0, ZMM1, ZMM2, ZMM3, ZMM4, ZMM5, ZMM6, ZMM7,
    ZMM8, ZMM9, ZMM10, ZMM11, ZMM12, ZMM13, ZMM14, ZMM15,
    ZMM16, ZMM17, ZMM18, ZMM19, ZMM20, ZMM21, ZMM22, ZMM23,
    ZMM24, ZMM25, ZMM26, ZMM27, ZMM28, ZMM29, ZMM30, ZMM31,
    K0, K1, K2, K3, K4, K5, K6, K7,
    BND0, BND1, BND2, BND3,
    CR0, CR1, CR2, CR3, CR4, CR5, CR6, CR7,
    CR8, CR9, CR10, CR11, CR12, CR13, CR14, CR15,
    DR0, DR1, DR2, DR3, DR4, DR5, DR6, DR7,
    DR8, DR9, DR10, DR11, DR12, DR13, DR14, DR15,
    ST0, ST1, ST2, ST3, ST4, ST5, ST6, ST7,
    MM0, MM1, MM2, MM3, MM4, MM5, MM6, MM7,
    TR0, TR1, TR2, TR3, TR4, TR5, TR6, TR7,
    TMM0, TMM1, TMM2, TMM3, TMM4, TMM5, TMM6, TMM7,
}

impl Register {
    /// Maps a raw id back to a register; out-of-range ids become `None`.
    pub fn from_index(index: u32) -> Register {
        Self::ALL.get(index as usize).copied().unwrap_or(Register::None)
    }

    pub fn from_u8(value: u8) -> Option<Register> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// `self + n`, e.g. `Register::XMM0.offset(reg)`.
    pub fn offset(self, n: u32) -> Register {
        Self::from_index(self.index() + n)
    }

    pub fn is_gpr8(self) -> bool {
        (Register::AL..=Register::R15L).contains(&self)
    }

    pub fn is_gpr16(self) -> bool {
        (Register::AX..=Register::R15W).contains(&self)
    }

    pub fn is_gpr32(self) -> bool {
        (Register::EAX..=Register::R15D).contains(&self)
    }

    pub fn is_gpr64(self) -> bool {
        (Register::RAX..=Register::R15).contains(&self)
    }

    pub fn is_segment(self) -> bool {
        (Register::ES..=Register::GS).contains(&self)
    }

    pub fn is_xmm(self) -> bool {
        (Register::XMM0..=Register::XMM31).contains(&self)
    }

    pub fn is_ymm(self) -> bool {
        (Register::YMM0..=Register::YMM31).contains(&self)
    }

    pub fn is_zmm(self) -> bool {
        (Register::ZMM0..=Register::ZMM31).contains(&self)
    }

    pub fn is_k(self) -> bool {
        (Register::K0..=Register::K7).contains(&self)
    }

    /// Lower-case assembler name (`rax`, `xmm17`, `k3`).
    pub fn name(self) -> String {
        format!("{self:?}").to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_contiguous() {
        assert_eq!(Register::AL.offset(8), Register::SPL);
        assert_eq!(Register::AL.offset(19), Register::R15L);
        assert_eq!(Register::AX.offset(15), Register::R15W);
        assert_eq!(Register::RAX.offset(8), Register::R8);
        assert_eq!(Register::XMM0.offset(31), Register::XMM31);
        assert_eq!(Register::XMM0.offset(32), Register::YMM0);
        assert_eq!(Register::ZMM0.offset(31), Register::ZMM31);
        assert_eq!(Register::K0.offset(7), Register::K7);
        assert_eq!(Register::TMM0.offset(7), Register::TMM7);
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(Register::TMM7.offset(1), Register::None);
        assert_eq!(Register::from_u8(255), None);
        assert_eq!(Register::from_u8(Register::CR3 as u8), Some(Register::CR3));
    }

    #[test]
    fn names() {
        assert_eq!(Register::R15D.name(), "r15d");
        assert_eq!(Register::XMM17.name(), "xmm17");
    }
}
