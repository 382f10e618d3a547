use pretty_assertions::assert_eq;
use x86_rs::handlers::{Forest, NodeId};
use x86_rs::tables::{
    builtin_blobs, Entry, EvexReader, LegacyReader, LegacyTag, NodeSpec, TableDeserializer, TableWriter, VexReader,
    RECORD_ARRAY, RECORD_HANDLER,
};
use x86_rs::{Bitness, Code, Decoder, DecoderOptions, TableBlobs, TableError, TableFamily, Tables};

fn root_tables(w: &mut TableWriter, count: usize) {
    for _ in 0..count {
        w.array(&vec![Entry::Invalid; 256]).unwrap();
    }
}

/// Legacy blob whose one-byte map is `map0` and whose other maps are empty.
fn legacy_blob(map0: &[Entry]) -> Vec<u8> {
    let mut w = TableWriter::new(TableFamily::Legacy);
    root_tables(&mut w, 3);
    w.array(map0).unwrap();
    w.finish()
}

fn empty_blobs(legacy: Vec<u8>) -> TableBlobs {
    let family_blob = |family| {
        let mut w = TableWriter::new(family);
        root_tables(&mut w, 3);
        w.finish()
    };
    TableBlobs {
        legacy,
        vex: family_blob(TableFamily::Vex),
        xop: family_blob(TableFamily::Vex),
        evex: family_blob(TableFamily::Evex),
    }
}

fn deserialize_legacy(data: &[u8], roots: usize) -> Result<Vec<Vec<NodeId>>, TableError> {
    let mut forest = Forest::new();
    TableDeserializer::<LegacyReader>::new(data, &mut forest).deserialize(roots)
}

#[test]
fn builtin_tables_are_deterministic() {
    let a = Tables::try_builtin().unwrap();
    let b = Tables::try_builtin().unwrap();
    assert_eq!(a.node_count(), b.node_count());
    assert!(a == b);
    assert_eq!(builtin_blobs().unwrap(), builtin_blobs().unwrap());
}

#[test]
fn builtin_root_maps_are_complete() {
    let tables = Tables::builtin();
    let legacy = tables.legacy();
    for map in [&legacy.map0, &legacy.map0f, &legacy.map0f38, &legacy.map0f3a] {
        assert_eq!(map.len(), 256);
    }
    for n in 0..3 {
        assert_eq!(tables.vex_map(n).map(<[NodeId]>::len), Some(256));
        assert_eq!(tables.xop_map(n).map(<[NodeId]>::len), Some(256));
        assert_eq!(tables.evex_map(n).map(<[NodeId]>::len), Some(256));
    }
    assert!(tables.vex_map(3).is_none());

    let forest = tables.forest();
    assert_eq!(forest.kind_name(legacy.map0[0xC3]), "BranchSimple");
    assert_eq!(forest.kind_name(legacy.map0[0x62]), "EvexEscape");
    assert_eq!(forest.kind_name(legacy.map0[0xC5]), "Vex2Escape");
    assert_eq!(forest.kind_name(legacy.map0[0x8F]), "XopEscape");
}

#[test]
fn prefix_bytes_map_to_prefix_nodes() {
    let tables = Tables::builtin();
    let map0 = &tables.legacy().map0;
    // 40-4F are distinct REX values; 26/2E/36/3E carry distinct segments.
    assert_ne!(map0[0x40], map0[0x41]);
    assert_ne!(map0[0x26], map0[0x2E]);
    assert_eq!(tables.forest().kind_name(map0[0xF0]), "PrefixF0");
}

#[test]
fn custom_tables_drive_the_decoder() {
    let mut map0 = vec![Entry::Invalid; 256];
    map0[0x90] = NodeSpec::new(LegacyTag::Simple).code(Code::Hlt).into();
    map0[0xC3] = NodeSpec::new(LegacyTag::BranchSimple).code3(Code::Retnw, Code::Retnd, Code::Retnq).into();
    let tables = Tables::from_blobs(&empty_blobs(legacy_blob(&map0))).unwrap();

    let bytes = [0x90, 0xC3, 0xF4];
    let codes: Vec<Code> = Decoder::with_tables(&tables, Bitness::Bits64, &bytes, 0, DecoderOptions::empty())
        .map(|i| i.code)
        .collect();
    assert_eq!(codes, vec![Code::Hlt, Code::Retnq, Code::Invalid]);
}

#[test]
fn repeated_entries_share_one_node() {
    let map0 = vec![Entry::from(NodeSpec::new(LegacyTag::Simple).code(Code::Hlt)); 256];
    let tables = Tables::from_blobs(&empty_blobs(legacy_blob(&map0))).unwrap();
    let ids = &tables.legacy().map0;
    assert!(ids.iter().all(|id| *id == ids[0]));
    // The three sentinels plus the one shared node.
    assert_eq!(tables.node_count(), 4);
}

#[test]
fn handler_references_reuse_slots() {
    let mut w = TableWriter::new(TableFamily::Legacy);
    let hlt = w.handler(NodeSpec::new(LegacyTag::Simple).code(Code::Hlt)).unwrap();
    root_tables(&mut w, 3);
    let mut map0 = vec![Entry::Invalid; 256];
    map0[0x10] = Entry::Ref(hlt);
    map0[0x20] = Entry::Ref(hlt);
    w.array(&map0).unwrap();

    let roots = deserialize_legacy(&w.finish(), 4).unwrap();
    assert_eq!(roots.len(), 4);
    assert_eq!(roots[3][0x10], roots[3][0x20]);
    assert_ne!(roots[3][0x10], NodeId::INVALID);
    assert_eq!(roots[3][0x11], NodeId::INVALID);
}

#[test]
fn record_level_errors() {
    assert_eq!(deserialize_legacy(&[7], 0), Err(TableError::UnknownRecordKind { kind: 7, offset: 0 }));
    assert_eq!(deserialize_legacy(&[RECORD_ARRAY], 0), Err(TableError::UnexpectedEof { offset: 1 }));
    assert_eq!(
        deserialize_legacy(&[RECORD_HANDLER, 0xFF], 0),
        Err(TableError::UnknownTag { family: TableFamily::Legacy, tag: 0xFF, offset: 1 })
    );
    assert_eq!(deserialize_legacy(&[], 4), Err(TableError::MissingRoots { expected: 4, found: 0 }));

    let mut too_many = Vec::new();
    for _ in 0..257 {
        too_many.extend_from_slice(&[RECORD_HANDLER, u8::from(LegacyTag::Invalid)]);
    }
    assert_eq!(deserialize_legacy(&too_many, 0), Err(TableError::TooManySlots));
}

#[test]
fn root_shape_errors() {
    let mut w = TableWriter::new(TableFamily::Legacy);
    w.array(&vec![Entry::Invalid; 8]).unwrap();
    assert_eq!(deserialize_legacy(&w.finish(), 1), Err(TableError::ArrayLength { expected: 256, found: 8 }));

    let mut w = TableWriter::new(TableFamily::Legacy);
    w.handler(Entry::Invalid).unwrap();
    assert_eq!(
        deserialize_legacy(&w.finish(), 1),
        Err(TableError::SlotKindMismatch { slot: 0, expected: "array", found: "handler" })
    );

    let blobs = empty_blobs(Vec::new());
    assert_eq!(Tables::from_blobs(&blobs), Err(TableError::MissingRoots { expected: 4, found: 0 }));
}

#[test]
fn entry_level_errors() {
    let dup = u8::from(LegacyTag::Dup);
    let invalid = u8::from(LegacyTag::Invalid);

    // A run longer than the declared array.
    assert_eq!(
        deserialize_legacy(&[RECORD_ARRAY, 2, dup, 3, invalid], 0),
        Err(TableError::ArrayOverflow { declared: 2, filled: 3 })
    );
    // A run where a single handler is expected.
    assert_eq!(deserialize_legacy(&[RECORD_HANDLER, dup, 2, invalid], 0), Err(TableError::DupInScalarContext));
    // A back-reference past the slots written so far.
    assert_eq!(
        deserialize_legacy(&[RECORD_HANDLER, u8::from(LegacyTag::HandlerReference), 5], 0),
        Err(TableError::BadSlot { slot: 5, available: 0 })
    );
    // A group needs an array reference, not an inline handler.
    assert_eq!(
        deserialize_legacy(&[RECORD_HANDLER, u8::from(LegacyTag::Group), invalid], 0),
        Err(TableError::ArrayKindMismatch { expected: u8::from(LegacyTag::ArrayReference), found: invalid })
    );
    // An array reference where a handler is expected.
    assert_eq!(
        deserialize_legacy(&[RECORD_ARRAY, 1, invalid, RECORD_HANDLER, u8::from(LegacyTag::ArrayReference), 0], 0),
        Err(TableError::SlotKindMismatch { slot: 0, expected: "handler", found: "array" })
    );
    // Code values beyond the last code.
    assert_eq!(
        deserialize_legacy(&[RECORD_HANDLER, u8::from(LegacyTag::Simple), 0xFF, 0xFF, 0x03], 0),
        Err(TableError::UnknownCode { value: 0xFFFF, offset: 2 })
    );
}

#[test]
fn writer_and_reader_agree_on_every_family() {
    let blobs = builtin_blobs().unwrap();
    let mut forest = Forest::new();
    assert_eq!(TableDeserializer::<LegacyReader>::new(&blobs.legacy, &mut forest).deserialize(4).unwrap().len(), 4);
    assert_eq!(TableDeserializer::<VexReader>::new(&blobs.vex, &mut forest).deserialize(3).unwrap().len(), 3);
    assert_eq!(TableDeserializer::<VexReader>::new(&blobs.xop, &mut forest).deserialize(3).unwrap().len(), 3);
    assert_eq!(TableDeserializer::<EvexReader>::new(&blobs.evex, &mut forest).deserialize(3).unwrap().len(), 3);
    assert_eq!(forest.len(), Tables::builtin().node_count());
}

#[test]
fn errors_render_readably() {
    let err = TableError::UnknownTag { family: TableFamily::Evex, tag: 9, offset: 12 };
    assert_eq!(err.to_string(), "unknown evex handler tag 9 at offset 12");
}
