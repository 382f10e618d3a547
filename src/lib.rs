//! Table-driven x86/x64 instruction decoder.
//!
//! Opcode maps are serialized decode trees ([`tables`]). Deserializing them yields a
//! forest of [`handlers`] nodes; the [`decoder`] reads prefixes and escapes, then walks
//! the forest to fill in an [`Instruction`].

pub mod code;
pub mod decoder;
pub mod disasm;
pub mod error;
pub mod handlers;
pub mod instruction;
pub mod register;
pub mod tables;
pub mod tuple_type;

pub use code::Code;
pub use decoder::{Bitness, Decoder, DecoderOptions, MAX_INSTRUCTION_LENGTH};
pub use disasm::fmt_instruction;
pub use error::{TableError, TableFamily};
pub use instruction::{Instruction, MemoryOperand, OpKind, Operand, PrefixFlags, RoundingControl};
pub use register::Register;
pub use tables::{TableBlobs, Tables};
pub use tuple_type::TupleType;
