use serde::Serialize;

use x86_rs::{fmt_instruction, Bitness, Decoder, DecoderOptions, Instruction};

use crate::model::{bytes_at, Image};

#[derive(Debug, Clone, Serialize)]
pub struct ListingLine {
    pub addr: u64,
    pub bytes: Vec<u8>,
    pub text: String,
    pub instruction: Instruction,
}

/// Linear sweep over `[start, end)`. The last instruction may run past `end`; an
/// unmapped `start` yields an empty listing.
pub fn disassemble_range(
    img: &Image,
    start: u64,
    end: u64,
    bitness: Bitness,
    options: DecoderOptions,
) -> Vec<ListingLine> {
    let Some(data) = bytes_at(img, start, u64::MAX) else {
        tracing::warn!(start, "range start is not mapped");
        return Vec::new();
    };
    let mut decoder = Decoder::new(bitness, data, start, options);
    let mut lines = Vec::new();
    while decoder.can_decode() && decoder.ip() < end {
        let offset = decoder.position();
        let instruction = decoder.decode();
        let bytes = data[offset..offset + instruction.len as usize].to_vec();
        lines.push(ListingLine { addr: instruction.ip, bytes, text: fmt_instruction(&instruction), instruction });
    }
    tracing::debug!(start, end, count = lines.len(), "disassembled range");
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;
    use x86_rs::Code;

    fn image(bytes: &[u8]) -> Image {
        Image { segments: vec![Segment { name: "s".into(), base: 0x1000, bytes: bytes.to_vec(), perms: "r-x", kind: "raw" }] }
    }

    #[test]
    fn sweep_stops_at_end() {
        // nop; add eax, ecx; ret
        let img = image(&[0x90, 0x01, 0xc8, 0xc3]);
        let lines = disassemble_range(&img, 0x1000, 0x1003, Bitness::Bits32, DecoderOptions::empty());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].instruction.code, Code::Nopd);
        assert_eq!(lines[1].addr, 0x1001);
        assert_eq!(lines[1].bytes, vec![0x01, 0xc8]);
        assert_eq!(lines[1].text, "Add_rm32_r32 eax, ecx");
    }

    #[test]
    fn unmapped_start_is_empty() {
        let img = image(&[0x90]);
        assert!(disassemble_range(&img, 0x2000, 0x2010, Bitness::Bits64, DecoderOptions::empty()).is_empty());
    }
}
