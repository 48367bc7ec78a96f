use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{ChecksumRegion, EntryPointError};
use super::layout;
use super::reader::EntryPointReader;

/// SMBIOS version announced by an entry point.
///
/// # Examples
/// ```
/// use dmiscope_core::SmbiosVersion;
///
/// let version = SmbiosVersion { major: 3, minor: 4, revision: Some(0) };
/// assert!(version.at_least(3, 2));
/// assert_eq!(version.to_string(), "3.4.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmbiosVersion {
    pub major: u8,
    pub minor: u8,
    /// Document revision; only the 64-bit entry point carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u8>,
}

impl SmbiosVersion {
    pub fn at_least(&self, major: u8, minor: u8) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for SmbiosVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.revision {
            Some(revision) => write!(f, "{}.{}.{}", self.major, self.minor, revision),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPointKind {
    ThirtyTwoBit,
    SixtyFourBit,
}

impl EntryPointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPointKind::ThirtyTwoBit => "32-bit",
            EntryPointKind::SixtyFourBit => "64-bit",
        }
    }
}

/// Legacy `_SM_` entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint32 {
    pub major: u8,
    pub minor: u8,
    pub max_structure_size: u16,
    pub entry_point_revision: u8,
    pub formatted_area: [u8; 5],
    pub table_length: u16,
    pub table_address: u32,
    /// Number of structures in the table; zero when the firmware leaves it unset.
    pub structure_count: u16,
    pub bcd_revision: u8,
}

/// SMBIOS 3.x `_SM3_` entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint64 {
    pub major: u8,
    pub minor: u8,
    pub docrev: u8,
    pub entry_point_revision: u8,
    /// Upper bound of the table size; the table may end earlier.
    pub table_max_size: u32,
    pub table_address: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPoint {
    ThirtyTwoBit(EntryPoint32),
    SixtyFourBit(EntryPoint64),
}

impl EntryPoint {
    pub fn kind(&self) -> EntryPointKind {
        match self {
            EntryPoint::ThirtyTwoBit(_) => EntryPointKind::ThirtyTwoBit,
            EntryPoint::SixtyFourBit(_) => EntryPointKind::SixtyFourBit,
        }
    }

    pub fn version(&self) -> SmbiosVersion {
        match self {
            EntryPoint::ThirtyTwoBit(ep) => SmbiosVersion {
                major: ep.major,
                minor: ep.minor,
                revision: None,
            },
            EntryPoint::SixtyFourBit(ep) => SmbiosVersion {
                major: ep.major,
                minor: ep.minor,
                revision: Some(ep.docrev),
            },
        }
    }

    pub fn table_address(&self) -> u64 {
        match self {
            EntryPoint::ThirtyTwoBit(ep) => u64::from(ep.table_address),
            EntryPoint::SixtyFourBit(ep) => ep.table_address,
        }
    }

    /// Table length (32-bit) or maximum table size (64-bit).
    pub fn table_len(&self) -> u32 {
        match self {
            EntryPoint::ThirtyTwoBit(ep) => u32::from(ep.table_length),
            EntryPoint::SixtyFourBit(ep) => ep.table_max_size,
        }
    }

    /// Legacy structure count, used as a walk termination hint.
    pub fn structure_count_hint(&self) -> Option<u16> {
        match self {
            EntryPoint::ThirtyTwoBit(ep) if ep.structure_count != 0 => Some(ep.structure_count),
            _ => None,
        }
    }
}

/// Decode an entry point from the start of `bytes`.
///
/// Trailing bytes past the declared length are ignored.
///
/// # Errors
/// `NotFound` when neither anchor is present, `ChecksumMismatch` when a
/// checksum fails, `TruncatedInput` when the fixed layout does not fit in
/// `bytes`, `InvalidLength` when the declared length is smaller than it.
///
/// # Examples
/// ```
/// use dmiscope_core::{EntryPointError, decode_entry_point};
///
/// let err = decode_entry_point(b"not an entry point").unwrap_err();
/// assert_eq!(err, EntryPointError::NotFound);
/// ```
pub fn decode_entry_point(bytes: &[u8]) -> Result<EntryPoint, EntryPointError> {
    let reader = EntryPointReader::new(bytes);
    reader.require_len(layout::MIN_PROBE_LEN)?;
    if layout::ANCHOR_64.starts_with(bytes) {
        reader.require_len(layout::ANCHOR_64.len())?;
    }

    if reader.has_anchor(layout::ANCHOR_64) {
        return parse_64(&reader).map(EntryPoint::SixtyFourBit);
    }
    if reader.has_anchor(layout::ANCHOR_32) {
        return parse_32(&reader).map(EntryPoint::ThirtyTwoBit);
    }
    Err(EntryPointError::NotFound)
}

fn parse_64(reader: &EntryPointReader<'_>) -> Result<EntryPoint64, EntryPointError> {
    reader.require_len(layout::EP64_LEN)?;
    let declared = reader.read_declared_len(layout::EP64_LENGTH_OFFSET, layout::EP64_LEN)?;
    reader.verify_checksum(0..declared, ChecksumRegion::SixtyFourBit)?;

    Ok(EntryPoint64 {
        major: reader.read_u8(layout::EP64_MAJOR_OFFSET)?,
        minor: reader.read_u8(layout::EP64_MINOR_OFFSET)?,
        docrev: reader.read_u8(layout::EP64_DOCREV_OFFSET)?,
        entry_point_revision: reader.read_u8(layout::EP64_REVISION_OFFSET)?,
        table_max_size: reader.read_u32_le(layout::EP64_MAX_SIZE_RANGE)?,
        table_address: reader.read_u64_le(layout::EP64_ADDRESS_RANGE)?,
    })
}

fn parse_32(reader: &EntryPointReader<'_>) -> Result<EntryPoint32, EntryPointError> {
    reader.require_len(layout::EP32_LEN)?;
    let declared = match reader.read_u8(layout::EP32_LENGTH_OFFSET)? as usize {
        layout::EP32_LEN_QUIRK => layout::EP32_LEN,
        _ => reader.read_declared_len(layout::EP32_LENGTH_OFFSET, layout::EP32_LEN)?,
    };
    reader.verify_checksum(0..declared, ChecksumRegion::ThirtyTwoBit)?;

    let intermediate = reader.read_slice(layout::EP32_INTERMEDIATE_ANCHOR_RANGE)?;
    if intermediate != layout::INTERMEDIATE_ANCHOR {
        return Err(EntryPointError::NotFound);
    }
    reader.verify_checksum(layout::EP32_INTERMEDIATE_RANGE, ChecksumRegion::Intermediate)?;

    let mut formatted_area = [0u8; 5];
    formatted_area.copy_from_slice(reader.read_slice(layout::EP32_FORMATTED_AREA_RANGE)?);

    Ok(EntryPoint32 {
        major: reader.read_u8(layout::EP32_MAJOR_OFFSET)?,
        minor: reader.read_u8(layout::EP32_MINOR_OFFSET)?,
        max_structure_size: reader.read_u16_le(layout::EP32_MAX_STRUCTURE_SIZE_RANGE)?,
        entry_point_revision: reader.read_u8(layout::EP32_REVISION_OFFSET)?,
        formatted_area,
        table_length: reader.read_u16_le(layout::EP32_TABLE_LENGTH_RANGE)?,
        table_address: reader.read_u32_le(layout::EP32_TABLE_ADDRESS_RANGE)?,
        structure_count: reader.read_u16_le(layout::EP32_STRUCTURE_COUNT_RANGE)?,
        bcd_revision: reader.read_u8(layout::EP32_BCD_REVISION_OFFSET)?,
    })
}

/// Scan a memory region for an entry point on paragraph boundaries.
///
/// A valid `_SM3_` anywhere in the region wins over any `_SM_`. Candidates
/// that fail validation are skipped. Returns the offset of the entry point
/// within `region`.
///
/// # Errors
/// The first candidate's validation error when no candidate is valid, or
/// `NotFound` when no anchor occurs at all.
pub fn find_entry_point(region: &[u8]) -> Result<(usize, EntryPoint), EntryPointError> {
    let mut first_error = None;
    for anchor in [&layout::ANCHOR_64[..], &layout::ANCHOR_32[..]] {
        for offset in (0..region.len()).step_by(layout::SCAN_ALIGN) {
            let candidate = &region[offset..];
            if !candidate.starts_with(anchor) {
                continue;
            }
            match decode_entry_point(candidate) {
                Ok(entry_point) => return Ok((offset, entry_point)),
                Err(err) => {
                    tracing::debug!(offset, error = %err, "skipping entry point candidate");
                    first_error.get_or_insert(err);
                }
            }
        }
    }
    Err(first_error.unwrap_or(EntryPointError::NotFound))
}

#[cfg(test)]
mod tests {
    use super::{
        EntryPoint, EntryPoint32, EntryPoint64, EntryPointKind, decode_entry_point,
        find_entry_point,
    };
    use crate::entry_point::error::{ChecksumRegion, EntryPointError};
    use crate::entry_point::layout;

    fn sample_64() -> EntryPoint64 {
        EntryPoint64 {
            major: 3,
            minor: 4,
            docrev: 0,
            entry_point_revision: 1,
            table_max_size: 0x0c00,
            table_address: 0x0000_0000_7f6e_5000,
        }
    }

    fn sample_32() -> EntryPoint32 {
        EntryPoint32 {
            major: 2,
            minor: 8,
            max_structure_size: 0x00b0,
            entry_point_revision: 0,
            formatted_area: [0; 5],
            table_length: 0x0a2c,
            table_address: 0x000e_b000,
            structure_count: 61,
            bcd_revision: 0x28,
        }
    }

    #[test]
    fn decode_valid_64() {
        let bytes = sample_64().encode();
        let parsed = decode_entry_point(&bytes).unwrap();
        assert_eq!(parsed, EntryPoint::SixtyFourBit(sample_64()));
        assert_eq!(parsed.kind(), EntryPointKind::SixtyFourBit);
        assert_eq!(parsed.table_address(), 0x7f6e_5000);
        assert_eq!(parsed.table_len(), 0x0c00);
        assert_eq!(parsed.structure_count_hint(), None);
        assert_eq!(parsed.version().to_string(), "3.4.0");
    }

    #[test]
    fn decode_valid_32() {
        let bytes = sample_32().encode();
        let parsed = decode_entry_point(&bytes).unwrap();
        assert_eq!(parsed, EntryPoint::ThirtyTwoBit(sample_32()));
        assert_eq!(parsed.structure_count_hint(), Some(61));
        assert_eq!(parsed.version().to_string(), "2.8");
    }

    #[test]
    fn every_byte_of_64_bit_span_is_checksummed() {
        let bytes = sample_64().encode();
        for index in 0..layout::EP64_LEN {
            let mut corrupted = bytes.clone();
            corrupted[index] = corrupted[index].wrapping_add(1);
            let result = decode_entry_point(&corrupted);
            assert!(result.is_err(), "byte {index} not covered");
        }
    }

    #[test]
    fn corrupted_intermediate_region_fails_independently() {
        let mut bytes = sample_32().encode();
        // Move one unit from the intermediate region into the formatted area
        // so the outer sum stays zero while the `_DMI_` sum breaks.
        bytes[layout::EP32_TABLE_LENGTH_RANGE.start] =
            bytes[layout::EP32_TABLE_LENGTH_RANGE.start].wrapping_add(1);
        bytes[layout::EP32_FORMATTED_AREA_RANGE.start] =
            bytes[layout::EP32_FORMATTED_AREA_RANGE.start].wrapping_sub(1);

        let err = decode_entry_point(&bytes).unwrap_err();
        assert_eq!(
            err,
            EntryPointError::ChecksumMismatch {
                region: ChecksumRegion::Intermediate,
                sum: 1
            }
        );
    }

    #[test]
    fn missing_intermediate_anchor_is_not_found() {
        let mut bytes = sample_32().encode();
        // Swap two anchor bytes: the checksums stay valid, the anchor does not.
        bytes.swap(16, 17);
        assert_eq!(decode_entry_point(&bytes), Err(EntryPointError::NotFound));
    }

    #[test]
    fn short_input_is_truncated() {
        let bytes = sample_64().encode();
        let err = decode_entry_point(&bytes[..20]).unwrap_err();
        assert_eq!(
            err,
            EntryPointError::TruncatedInput {
                needed: layout::EP64_LEN,
                actual: 20
            }
        );

        let err = decode_entry_point(b"_SM").unwrap_err();
        assert!(matches!(err, EntryPointError::TruncatedInput { needed: 4, .. }));
    }

    #[test]
    fn partial_64_bit_anchor_is_truncated() {
        assert_eq!(
            decode_entry_point(b"_SM3"),
            Err(EntryPointError::TruncatedInput {
                needed: 5,
                actual: 4
            })
        );
        assert_eq!(decode_entry_point(b"_SMX"), Err(EntryPointError::NotFound));
    }

    #[test]
    fn declared_length_below_layout_is_rejected() {
        let mut bytes = sample_64().encode();
        bytes[layout::EP64_LENGTH_OFFSET] = 0x10;
        let err = decode_entry_point(&bytes).unwrap_err();
        assert!(matches!(err, EntryPointError::InvalidLength { declared: 0x10, .. }));
    }

    #[test]
    fn legacy_length_quirk_is_accepted() {
        let mut bytes = sample_32().encode();
        bytes[layout::EP32_LENGTH_OFFSET] = layout::EP32_LEN_QUIRK as u8;
        // Keep the outer sum at zero after lowering the length byte.
        bytes[layout::EP32_CHECKSUM_OFFSET] = bytes[layout::EP32_CHECKSUM_OFFSET].wrapping_add(1);
        let parsed = decode_entry_point(&bytes).unwrap();
        assert_eq!(parsed.kind(), EntryPointKind::ThirtyTwoBit);
    }

    #[test]
    fn unknown_anchor_is_not_found() {
        assert_eq!(
            decode_entry_point(&[0u8; 32]),
            Err(EntryPointError::NotFound)
        );
    }

    #[test]
    fn scan_prefers_64_bit_entry_point() {
        let mut region = vec![0u8; 0x100];
        let legacy = sample_32().encode();
        region[0x10..0x10 + legacy.len()].copy_from_slice(&legacy);
        let modern = sample_64().encode();
        region[0x80..0x80 + modern.len()].copy_from_slice(&modern);

        let (offset, entry_point) = find_entry_point(&region).unwrap();
        assert_eq!(offset, 0x80);
        assert_eq!(entry_point.kind(), EntryPointKind::SixtyFourBit);
    }

    #[test]
    fn scan_skips_invalid_candidates() {
        let mut region = vec![0u8; 0x100];
        let mut broken = sample_64().encode();
        broken[layout::EP64_MAJOR_OFFSET] ^= 0xff;
        region[..broken.len()].copy_from_slice(&broken);
        let legacy = sample_32().encode();
        region[0x40..0x40 + legacy.len()].copy_from_slice(&legacy);

        let (offset, entry_point) = find_entry_point(&region).unwrap();
        assert_eq!(offset, 0x40);
        assert_eq!(entry_point.kind(), EntryPointKind::ThirtyTwoBit);
    }

    #[test]
    fn scan_reports_first_candidate_error() {
        let mut region = vec![0u8; 0x40];
        let mut broken = sample_64().encode();
        broken[layout::EP64_MAJOR_OFFSET] ^= 0xff;
        region[0x20..0x20 + broken.len()].copy_from_slice(&broken);

        let err = find_entry_point(&region).unwrap_err();
        assert!(matches!(
            err,
            EntryPointError::ChecksumMismatch {
                region: ChecksumRegion::SixtyFourBit,
                ..
            }
        ));
        assert_eq!(find_entry_point(&[0u8; 64]), Err(EntryPointError::NotFound));
    }
}
