use super::layout;
use super::parser::{EntryPoint, EntryPoint32, EntryPoint64};
use super::reader::checksum;

fn complement(bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(checksum(bytes))
}

impl EntryPoint64 {
    /// Encode the `_SM3_` wire form with a valid checksum.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; layout::EP64_LEN];
        out[..layout::ANCHOR_64.len()].copy_from_slice(layout::ANCHOR_64);
        out[layout::EP64_LENGTH_OFFSET] = layout::EP64_LEN as u8;
        out[layout::EP64_MAJOR_OFFSET] = self.major;
        out[layout::EP64_MINOR_OFFSET] = self.minor;
        out[layout::EP64_DOCREV_OFFSET] = self.docrev;
        out[layout::EP64_REVISION_OFFSET] = self.entry_point_revision;
        out[layout::EP64_MAX_SIZE_RANGE].copy_from_slice(&self.table_max_size.to_le_bytes());
        out[layout::EP64_ADDRESS_RANGE].copy_from_slice(&self.table_address.to_le_bytes());
        out[layout::EP64_CHECKSUM_OFFSET] = complement(&out);
        out
    }
}

impl EntryPoint32 {
    /// Encode the `_SM_` wire form with valid outer and intermediate checksums.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; layout::EP32_LEN];
        out[..layout::ANCHOR_32.len()].copy_from_slice(layout::ANCHOR_32);
        out[layout::EP32_LENGTH_OFFSET] = layout::EP32_LEN as u8;
        out[layout::EP32_MAJOR_OFFSET] = self.major;
        out[layout::EP32_MINOR_OFFSET] = self.minor;
        out[layout::EP32_MAX_STRUCTURE_SIZE_RANGE]
            .copy_from_slice(&self.max_structure_size.to_le_bytes());
        out[layout::EP32_REVISION_OFFSET] = self.entry_point_revision;
        out[layout::EP32_FORMATTED_AREA_RANGE].copy_from_slice(&self.formatted_area);
        out[layout::EP32_INTERMEDIATE_ANCHOR_RANGE].copy_from_slice(layout::INTERMEDIATE_ANCHOR);
        out[layout::EP32_TABLE_LENGTH_RANGE].copy_from_slice(&self.table_length.to_le_bytes());
        out[layout::EP32_TABLE_ADDRESS_RANGE].copy_from_slice(&self.table_address.to_le_bytes());
        out[layout::EP32_STRUCTURE_COUNT_RANGE]
            .copy_from_slice(&self.structure_count.to_le_bytes());
        out[layout::EP32_BCD_REVISION_OFFSET] = self.bcd_revision;

        // The outer span covers the intermediate one, so it is summed last.
        out[layout::EP32_INTERMEDIATE_CHECKSUM_OFFSET] =
            complement(&out[layout::EP32_INTERMEDIATE_RANGE]);
        out[layout::EP32_CHECKSUM_OFFSET] = complement(&out);
        out
    }
}

impl EntryPoint {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            EntryPoint::ThirtyTwoBit(ep) => ep.encode(),
            EntryPoint::SixtyFourBit(ep) => ep.encode(),
        }
    }
}
