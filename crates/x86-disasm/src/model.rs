use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u64,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

impl Segment {
    pub fn end(&self) -> u64 {
        self.base.wrapping_add(self.bytes.len() as u64)
    }

    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.base && addr < self.end()
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

pub fn load_raw_bin(path: &Path, base: u64, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    tracing::debug!(path = %path.display(), base, bytes = payload.len(), "loaded raw image");
    let seg = Segment { name: "segment0".into(), base, bytes: payload.to_vec(), perms: "r-x", kind: "raw" };
    Ok(Image { segments: vec![seg] })
}

pub fn read_u8(img: &Image, addr: u64) -> Option<u8> {
    let seg = img.segments.iter().find(|s| s.contains(addr))?;
    Some(seg.bytes[(addr - seg.base) as usize])
}

/// Bytes from `addr` up to `end` (exclusive) or the end of the containing segment.
/// An `end` at or before `addr` gives an empty slice.
pub fn bytes_at(img: &Image, addr: u64, end: u64) -> Option<&[u8]> {
    let seg = img.segments.iter().find(|s| s.contains(addr))?;
    let stop = end.min(seg.end()).max(addr);
    Some(&seg.bytes[(addr - seg.base) as usize..(stop - seg.base) as usize])
}

pub fn is_mapped(img: &Image, addr: u64) -> bool {
    img.segments.iter().any(|s| s.contains(addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_maps_skip_and_len() {
        let path = std::env::temp_dir().join("x86_disasm_loader_test.bin");
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5]).unwrap();
        let img = load_raw_bin(&path, 0x1000_0000, 2, Some(3)).unwrap();
        assert_eq!(img.segments.len(), 1);
        let s = &img.segments[0];
        assert_eq!(s.base, 0x1000_0000);
        assert_eq!(s.bytes, vec![2, 3, 4]);
        assert_eq!(read_u8(&img, 0x1000_0001), Some(3));
        assert_eq!(read_u8(&img, 0x1000_0003), None);
        assert!(is_mapped(&img, 0x1000_0002));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn bytes_at_clamps_to_segment() {
        let seg = Segment { name: "s".into(), base: 0x100, bytes: vec![1, 2, 3, 4], perms: "r-x", kind: "raw" };
        let img = Image { segments: vec![seg] };
        assert_eq!(bytes_at(&img, 0x101, 0x200), Some(&[2u8, 3, 4][..]));
        assert_eq!(bytes_at(&img, 0x101, 0x103), Some(&[2u8, 3][..]));
        assert_eq!(bytes_at(&img, 0x200, 0x300), None);
        assert_eq!(bytes_at(&img, 0x102, 0x101), Some(&[0u8; 0][..]));
        assert_eq!(bytes_at(&img, 0x102, 0), Some(&[0u8; 0][..]));
    }
}
