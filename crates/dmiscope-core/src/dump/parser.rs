use crate::entry_point::{EntryPoint, EntryPoint32, EntryPoint64, EntryPointKind, SmbiosVersion};
use crate::table::{DecodeResult, decode_table, encode_table};

use super::error::DumpError;
use super::layout;
use super::reader::DumpReader;

/// Entry point revision written into synthesized 64-bit entry points.
const SYNTHESIZED_EP64_REVISION: u8 = 1;

/// A table together with the entry point facts needed to decode it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dump {
    pub kind: EntryPointKind,
    pub major: u8,
    pub minor: u8,
    /// Docrev for 64-bit entry points, BCD revision for 32-bit ones.
    pub revision: u8,
    /// Physical address the table was read from.
    pub address: u64,
    pub table: Vec<u8>,
}

impl Dump {
    /// Capture the entry point facts and the raw `table` bytes.
    pub fn new(entry_point: &EntryPoint, table: Vec<u8>) -> Self {
        let (major, minor, revision) = match entry_point {
            EntryPoint::ThirtyTwoBit(ep) => (ep.major, ep.minor, ep.bcd_revision),
            EntryPoint::SixtyFourBit(ep) => (ep.major, ep.minor, ep.docrev),
        };
        Self {
            kind: entry_point.kind(),
            major,
            minor,
            revision,
            address: entry_point.table_address(),
            table,
        }
    }

    /// Re-serialize decoded structures into a dump.
    ///
    /// Only the structures the walk produced are kept, so trailing garbage
    /// and truncated tails are normalized away.
    pub fn from_decode(result: &DecodeResult) -> Self {
        Self::new(&result.entry_point, encode_table(&result.structures))
    }

    /// Keep the raw table bytes behind `result`.
    ///
    /// The bytes are cut to the announced table length. A walk that did not
    /// end on the end marker (a reached structure count, a truncated or
    /// malformed tail) cannot be replayed from raw bytes without the entry
    /// point, so its structures are re-serialized as in [`Dump::from_decode`].
    pub fn capture(result: &DecodeResult, table: &[u8]) -> Self {
        if !result.is_complete() {
            return Self::from_decode(result);
        }
        let table = match result.entry_point.table_len() as usize {
            0 => table,
            declared => &table[..declared.min(table.len())],
        };
        Self::new(&result.entry_point, table.to_vec())
    }

    pub fn version(&self) -> SmbiosVersion {
        SmbiosVersion {
            major: self.major,
            minor: self.minor,
            revision: match self.kind {
                EntryPointKind::SixtyFourBit => Some(self.revision),
                EntryPointKind::ThirtyTwoBit => None,
            },
        }
    }

    /// Synthesize an entry point equivalent to the one the dump came from.
    ///
    /// Fields the container does not keep are zero. The 32-bit structure
    /// count is left at zero so the walk runs to the end marker; a table too
    /// long for the 16-bit length field gets a zero (unlimited) length.
    pub fn entry_point(&self) -> EntryPoint {
        match self.kind {
            EntryPointKind::SixtyFourBit => EntryPoint::SixtyFourBit(EntryPoint64 {
                major: self.major,
                minor: self.minor,
                docrev: self.revision,
                entry_point_revision: SYNTHESIZED_EP64_REVISION,
                table_max_size: u32::try_from(self.table.len()).unwrap_or(u32::MAX),
                table_address: self.address,
            }),
            EntryPointKind::ThirtyTwoBit => EntryPoint::ThirtyTwoBit(EntryPoint32 {
                major: self.major,
                minor: self.minor,
                max_structure_size: 0,
                entry_point_revision: 0,
                formatted_area: [0; 5],
                table_length: u16::try_from(self.table.len()).unwrap_or(0),
                table_address: u32::try_from(self.address).unwrap_or(0),
                structure_count: 0,
                bcd_revision: self.revision,
            }),
        }
    }

    pub fn decode(&self) -> DecodeResult {
        decode_table(self.entry_point(), &self.table)
    }
}

/// Parse a dump container.
///
/// Bytes beyond the declared table length are ignored.
///
/// # Examples
/// ```
/// use dmiscope_core::{DumpError, parse_dump};
///
/// assert_eq!(parse_dump(b"NOTADUMP\0extra-bytes-to-fill-header"), Err(DumpError::BadMagic));
/// ```
pub fn parse_dump(bytes: &[u8]) -> Result<Dump, DumpError> {
    let reader = DumpReader::new(bytes);
    reader.require_len(layout::HEADER_LEN)?;

    if reader.read_slice(layout::MAGIC_RANGE)? != layout::MAGIC {
        return Err(DumpError::BadMagic);
    }
    let version = reader.read_u8(layout::VERSION_OFFSET)?;
    if version != layout::FORMAT_VERSION {
        return Err(DumpError::UnsupportedVersion(version));
    }
    let kind = match reader.read_u8(layout::KIND_OFFSET)? {
        layout::KIND_32 => EntryPointKind::ThirtyTwoBit,
        layout::KIND_64 => EntryPointKind::SixtyFourBit,
        other => return Err(DumpError::UnknownKind(other)),
    };

    let declared = reader.read_u32_le(layout::TABLE_LEN_RANGE)? as usize;
    let table = reader.rest(layout::HEADER_LEN);
    if table.len() < declared {
        return Err(DumpError::TruncatedTable {
            declared,
            actual: table.len(),
        });
    }

    Ok(Dump {
        kind,
        major: reader.read_u8(layout::MAJOR_OFFSET)?,
        minor: reader.read_u8(layout::MINOR_OFFSET)?,
        revision: reader.read_u8(layout::REVISION_OFFSET)?,
        address: reader.read_u64_le(layout::ADDRESS_RANGE)?,
        table: table[..declared].to_vec(),
    })
}
