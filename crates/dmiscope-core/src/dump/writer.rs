use crate::entry_point::EntryPointKind;

use super::layout;
use super::parser::Dump;

/// Serialize a dump container: 27-byte header followed by the table.
///
/// # Examples
/// ```
/// use dmiscope_core::{Dump, EntryPointKind, parse_dump, write_dump};
///
/// let dump = Dump {
///     kind: EntryPointKind::SixtyFourBit,
///     major: 3,
///     minor: 0,
///     revision: 0,
///     address: 0x000e_0000,
///     table: vec![0x7f, 0x04, 0x00, 0x00, 0x00, 0x00],
/// };
/// let bytes = write_dump(&dump);
/// assert!(bytes.starts_with(b"DMISCOPE\0"));
/// assert_eq!(parse_dump(&bytes), Ok(dump));
/// ```
pub fn write_dump(dump: &Dump) -> Vec<u8> {
    let mut out = vec![0u8; layout::HEADER_LEN];
    out[layout::MAGIC_RANGE].copy_from_slice(layout::MAGIC);
    out[layout::VERSION_OFFSET] = layout::FORMAT_VERSION;
    out[layout::KIND_OFFSET] = match dump.kind {
        EntryPointKind::ThirtyTwoBit => layout::KIND_32,
        EntryPointKind::SixtyFourBit => layout::KIND_64,
    };
    out[layout::MAJOR_OFFSET] = dump.major;
    out[layout::MINOR_OFFSET] = dump.minor;
    out[layout::REVISION_OFFSET] = dump.revision;
    out[layout::RESERVED_OFFSET] = 0;
    out[layout::TABLE_LEN_RANGE].copy_from_slice(&(dump.table.len() as u32).to_le_bytes());
    out[layout::ADDRESS_RANGE].copy_from_slice(&dump.address.to_le_bytes());
    out.extend_from_slice(&dump.table);
    out
}
