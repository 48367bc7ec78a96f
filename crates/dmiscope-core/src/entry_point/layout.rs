use std::ops::Range;

pub const ANCHOR_64: &[u8; 5] = b"_SM3_";
pub const ANCHOR_32: &[u8; 4] = b"_SM_";
pub const INTERMEDIATE_ANCHOR: &[u8; 5] = b"_DMI_";

/// Smallest input that can hold either anchor's discriminating prefix.
pub const MIN_PROBE_LEN: usize = 4;

pub const EP64_CHECKSUM_OFFSET: usize = 5;
pub const EP64_LENGTH_OFFSET: usize = 6;
pub const EP64_MAJOR_OFFSET: usize = 7;
pub const EP64_MINOR_OFFSET: usize = 8;
pub const EP64_DOCREV_OFFSET: usize = 9;
pub const EP64_REVISION_OFFSET: usize = 10;
pub const EP64_MAX_SIZE_RANGE: Range<usize> = 12..16;
pub const EP64_ADDRESS_RANGE: Range<usize> = 16..24;
pub const EP64_LEN: usize = 24;

pub const EP32_CHECKSUM_OFFSET: usize = 4;
pub const EP32_LENGTH_OFFSET: usize = 5;
pub const EP32_MAJOR_OFFSET: usize = 6;
pub const EP32_MINOR_OFFSET: usize = 7;
pub const EP32_MAX_STRUCTURE_SIZE_RANGE: Range<usize> = 8..10;
pub const EP32_REVISION_OFFSET: usize = 10;
pub const EP32_FORMATTED_AREA_RANGE: Range<usize> = 11..16;
pub const EP32_INTERMEDIATE_ANCHOR_RANGE: Range<usize> = 16..21;
pub const EP32_INTERMEDIATE_CHECKSUM_OFFSET: usize = 21;
pub const EP32_TABLE_LENGTH_RANGE: Range<usize> = 22..24;
pub const EP32_TABLE_ADDRESS_RANGE: Range<usize> = 24..28;
pub const EP32_STRUCTURE_COUNT_RANGE: Range<usize> = 28..30;
pub const EP32_BCD_REVISION_OFFSET: usize = 30;
pub const EP32_INTERMEDIATE_RANGE: Range<usize> = 16..31;
pub const EP32_LEN: usize = 31;

/// SMBIOS 2.1 documented the 32-bit entry point as 0x1E bytes long; firmware
/// built against it still reports that value for the 0x1F-byte structure.
pub const EP32_LEN_QUIRK: usize = 0x1E;

/// Entry points are paragraph aligned inside the legacy BIOS region.
pub const SCAN_ALIGN: usize = 16;
