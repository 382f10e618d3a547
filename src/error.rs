use thiserror::Error;

/// Handler-tag family a serialized node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFamily {
    Legacy,
    Vex,
    Evex,
}

impl std::fmt::Display for TableFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TableFamily::Legacy => "legacy",
            TableFamily::Vex => "vex",
            TableFamily::Evex => "evex",
        };
        f.write_str(name)
    }
}

/// Malformed decode-table data. Raised only while the forest is being built; a table
/// blob that fails here is a broken build artifact and no decoder can be created from it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("unexpected end of table data at offset {offset}")]
    UnexpectedEof { offset: usize },
    #[error("unknown record kind {kind} at offset {offset}")]
    UnknownRecordKind { kind: u8, offset: usize },
    #[error("unknown {family} handler tag {tag} at offset {offset}")]
    UnknownTag { family: TableFamily, tag: u8, offset: usize },
    #[error("code value {value} out of range at offset {offset}")]
    UnknownCode { value: u32, offset: usize },
    #[error("register id {value} out of range at offset {offset}")]
    UnknownRegister { value: u8, offset: usize },
    #[error("tuple type {value} out of range at offset {offset}")]
    UnknownTupleType { value: u8, offset: usize },
    #[error("boolean byte {value} is not 0 or 1 at offset {offset}")]
    InvalidBool { value: u8, offset: usize },
    #[error("compressed integer overflows u32 at offset {offset}")]
    IntegerOverflow { offset: usize },
    #[error("back-reference to slot {slot} but only {available} slots exist")]
    BadSlot { slot: u32, available: usize },
    #[error("slot {slot} holds {found}, expected {expected}")]
    SlotKindMismatch { slot: u32, expected: &'static str, found: &'static str },
    #[error("array reference kind byte {found}, expected {expected}")]
    ArrayKindMismatch { expected: u8, found: u8 },
    #[error("array record declares {declared} slots but handlers fill {filled}")]
    ArrayOverflow { declared: u32, filled: u32 },
    #[error("array has {found} entries, node needs {expected}")]
    ArrayLength { expected: usize, found: usize },
    #[error("dup/invalid2 run is not allowed where a single handler is expected")]
    DupInScalarContext,
    #[error("table blob has {found} root arrays, expected {expected}")]
    MissingRoots { expected: usize, found: usize },
    #[error("more than 256 records in one blob")]
    TooManySlots,
    #[error("codes starting at {base} are not consecutive")]
    CodesNotAdjacent { base: u32 },
    #[error("{family} tables have no {entry} entry")]
    UnsupportedEntry { family: TableFamily, entry: &'static str },
}
