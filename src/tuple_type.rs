use serde::{Deserialize, Serialize};

/// EVEX tuple type. Selects the `N` used to scale a compressed 8-bit displacement
/// (`disp8 * N`). `NxbY` variants use `N = x` normally and `N = y` when EVEX.b
/// requests an embedded broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TupleType {
    #[default]
    N1,
    N2,
    N4,
    N8,
    N16,
    N32,
    N64,
    N8b4,
    N16b4,
    N32b4,
    N64b4,
    N16b8,
    N32b8,
    N64b8,
    N4b2,
    N8b2,
    N16b2,
    N32b2,
    N64b2,
}

impl TupleType {
    pub const ALL: &'static [TupleType] = &[
        TupleType::N1,
        TupleType::N2,
        TupleType::N4,
        TupleType::N8,
        TupleType::N16,
        TupleType::N32,
        TupleType::N64,
        TupleType::N8b4,
        TupleType::N16b4,
        TupleType::N32b4,
        TupleType::N64b4,
        TupleType::N16b8,
        TupleType::N32b8,
        TupleType::N64b8,
        TupleType::N4b2,
        TupleType::N8b2,
        TupleType::N16b2,
        TupleType::N32b2,
        TupleType::N64b2,
    ];

    pub fn from_u8(value: u8) -> Option<TupleType> {
        Self::ALL.get(value as usize).copied()
    }

    /// Displacement scale for this tuple type.
    pub fn disp8_scale(self, broadcast: bool) -> u32 {
        use TupleType::*;
        match self {
            N1 => 1,
            N2 => 2,
            N4 => 4,
            N8 => 8,
            N16 => 16,
            N32 => 32,
            N64 => 64,
            N8b4 => if broadcast { 4 } else { 8 },
            N16b4 => if broadcast { 4 } else { 16 },
            N32b4 => if broadcast { 4 } else { 32 },
            N64b4 => if broadcast { 4 } else { 64 },
            N16b8 => if broadcast { 8 } else { 16 },
            N32b8 => if broadcast { 8 } else { 32 },
            N64b8 => if broadcast { 8 } else { 64 },
            N4b2 => if broadcast { 2 } else { 4 },
            N8b2 => if broadcast { 2 } else { 8 },
            N16b2 => if broadcast { 2 } else { 16 },
            N32b2 => if broadcast { 2 } else { 32 },
            N64b2 => if broadcast { 2 } else { 64 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_switches_scale() {
        assert_eq!(TupleType::N64b4.disp8_scale(false), 64);
        assert_eq!(TupleType::N64b4.disp8_scale(true), 4);
        assert_eq!(TupleType::N16.disp8_scale(true), 16);
    }

    #[test]
    fn byte_ids_match_declaration_order() {
        for (i, tt) in TupleType::ALL.iter().enumerate() {
            assert_eq!(*tt as usize, i);
            assert_eq!(TupleType::from_u8(i as u8), Some(*tt));
        }
        assert_eq!(TupleType::from_u8(TupleType::ALL.len() as u8), None);
    }
}
