pub mod listing;
pub mod model;

pub use listing::{disassemble_range, ListingLine};
pub use model::{bytes_at, is_mapped, load_raw_bin, read_u8, Image, Segment};
