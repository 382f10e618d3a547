//! Decode tables: the serialized blob format, its readers and writer, and the
//! built-in table set every [`Decoder`](crate::decoder::Decoder) uses by default.

macro_rules! handler_tags {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($tag:ident),* $(,)? }) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $($tag),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$tag),*];
        }

        impl num_traits::FromPrimitive for $name {
            fn from_i64(n: i64) -> Option<Self> {
                u64::try_from(n).ok().and_then(Self::from_u64)
            }

            fn from_u64(n: u64) -> Option<Self> {
                usize::try_from(n).ok().and_then(|i| Self::ALL.get(i).copied())
            }
        }

        impl From<$name> for u8 {
            fn from(tag: $name) -> u8 {
                tag as u8
            }
        }
    };
}

mod builtin;
mod deserializer;
mod evex_reader;
mod legacy_reader;
mod serializer;
mod vex_reader;

use std::sync::OnceLock;

pub use deserializer::{Constructed, HandlerReader, TableDeserializer};
pub use evex_reader::{EvexReader, EvexTag};
pub use legacy_reader::{LegacyReader, LegacyTag};
pub use serializer::{Entry, NodeSpec, SlotId, TableWriter};
pub use vex_reader::{VexReader, VexTag};

use crate::error::{TableError, TableFamily};
use crate::handlers::{Forest, NodeId};

/// Top-level record discriminators.
pub const RECORD_HANDLER: u8 = 0;
pub const RECORD_ARRAY: u8 = 1;

/// Every root table holds one entry per opcode byte.
pub const ROOT_TABLE_LEN: usize = 256;

/// Tag numbers of the shared entry kinds in one family's tag space. `None` where the
/// family has no such tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyTags {
    pub invalid: u8,
    pub invalid_no_modrm: Option<u8>,
    pub invalid2: u8,
    pub dup: u8,
    pub null: Option<u8>,
    pub handler_reference: u8,
    pub array_reference: u8,
}

impl TableFamily {
    pub fn tags(self) -> FamilyTags {
        match self {
            TableFamily::Legacy => FamilyTags {
                invalid: LegacyTag::Invalid.into(),
                invalid_no_modrm: Some(LegacyTag::Invalid_NoModRM.into()),
                invalid2: LegacyTag::Invalid2.into(),
                dup: LegacyTag::Dup.into(),
                null: Some(LegacyTag::Null.into()),
                handler_reference: LegacyTag::HandlerReference.into(),
                array_reference: LegacyTag::ArrayReference.into(),
            },
            TableFamily::Vex => FamilyTags {
                invalid: VexTag::Invalid.into(),
                invalid_no_modrm: Some(VexTag::Invalid_NoModRM.into()),
                invalid2: VexTag::Invalid2.into(),
                dup: VexTag::Dup.into(),
                null: Some(VexTag::Null.into()),
                handler_reference: VexTag::HandlerReference.into(),
                array_reference: VexTag::ArrayReference.into(),
            },
            TableFamily::Evex => FamilyTags {
                invalid: EvexTag::Invalid.into(),
                invalid_no_modrm: None,
                invalid2: EvexTag::Invalid2.into(),
                dup: EvexTag::Dup.into(),
                null: None,
                handler_reference: EvexTag::HandlerReference.into(),
                array_reference: EvexTag::ArrayReference.into(),
            },
        }
    }
}

/// Serialized table blobs, one per tag family. XOP shares the VEX tag space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableBlobs {
    pub legacy: Vec<u8>,
    pub vex: Vec<u8>,
    pub xop: Vec<u8>,
    pub evex: Vec<u8>,
}

/// Root maps of the legacy encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyMaps {
    pub map0: Vec<NodeId>,
    pub map0f: Vec<NodeId>,
    pub map0f38: Vec<NodeId>,
    pub map0f3a: Vec<NodeId>,
}

/// A complete, immutable decode forest plus its root maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub(crate) forest: Forest,
    pub(crate) legacy: LegacyMaps,
    /// Maps 0F, 0F38, 0F3A.
    pub(crate) vex: [Vec<NodeId>; 3],
    /// Maps 8, 9, A.
    pub(crate) xop: [Vec<NodeId>; 3],
    /// Maps 0F, 0F38, 0F3A.
    pub(crate) evex: [Vec<NodeId>; 3],
}

static BUILTIN: OnceLock<Tables> = OnceLock::new();

impl Tables {
    /// Builds the forest from serialized blobs.
    ///
    /// Each blob ends with its root tables in dependency order: legacy 0F38, 0F3A, 0F,
    /// one-byte map; VEX/EVEX 0F, 0F38, 0F3A; XOP 8, 9, A.
    pub fn from_blobs(blobs: &TableBlobs) -> Result<Tables, TableError> {
        let mut forest = Forest::new();

        let [map0f38, map0f3a, map0f, map0] = roots::<LegacyReader, 4>(&blobs.legacy, &mut forest)?;
        let vex = roots::<VexReader, 3>(&blobs.vex, &mut forest)?;
        let xop = roots::<VexReader, 3>(&blobs.xop, &mut forest)?;
        let evex = roots::<EvexReader, 3>(&blobs.evex, &mut forest)?;

        tracing::debug!(nodes = forest.len(), "decode tables built");
        Ok(Tables { forest, legacy: LegacyMaps { map0, map0f, map0f38, map0f3a }, vex, xop, evex })
    }

    /// The process-wide built-in tables, built on first use.
    ///
    /// # Panics
    ///
    /// If the compiled-in table corpus does not deserialize. That is a build defect, never
    /// a property of the input being decoded; [`Tables::try_builtin`] reports it as an error.
    pub fn builtin() -> &'static Tables {
        BUILTIN.get_or_init(|| match Tables::try_builtin() {
            Ok(tables) => tables,
            Err(err) => panic!("built-in decode tables are corrupt: {err}"),
        })
    }

    /// Serializes the built-in corpus and deserializes it into a fresh forest.
    pub fn try_builtin() -> Result<Tables, TableError> {
        Tables::from_blobs(&builtin::blobs()?)
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn node_count(&self) -> usize {
        self.forest.len()
    }

    pub fn legacy(&self) -> &LegacyMaps {
        &self.legacy
    }

    pub fn vex_map(&self, index: usize) -> Option<&[NodeId]> {
        self.vex.get(index).map(Vec::as_slice)
    }

    pub fn xop_map(&self, index: usize) -> Option<&[NodeId]> {
        self.xop.get(index).map(Vec::as_slice)
    }

    pub fn evex_map(&self, index: usize) -> Option<&[NodeId]> {
        self.evex.get(index).map(Vec::as_slice)
    }
}

/// Serialized blobs of the built-in corpus.
pub fn builtin_blobs() -> Result<TableBlobs, TableError> {
    builtin::blobs()
}

fn roots<R: HandlerReader, const N: usize>(data: &[u8], forest: &mut Forest) -> Result<[Vec<NodeId>; N], TableError> {
    let roots = TableDeserializer::<R>::new(data, forest).deserialize(N)?;
    let found = roots.len();
    roots.try_into().map_err(|_| TableError::MissingRoots { expected: N, found })
}
