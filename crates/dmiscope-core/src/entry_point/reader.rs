use std::ops::Range;

use super::error::{ChecksumRegion, EntryPointError};

/// Sum of all bytes modulo 256. A valid checksummed region sums to zero.
///
/// # Examples
/// ```
/// use dmiscope_core::entry_point::reader::checksum;
///
/// assert_eq!(checksum(&[0x10, 0xf0]), 0);
/// assert_eq!(checksum(&[0x01, 0x02]), 3);
/// ```
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

pub struct EntryPointReader<'a> {
    bytes: &'a [u8],
}

impl<'a> EntryPointReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), EntryPointError> {
        if self.bytes.len() < needed {
            return Err(EntryPointError::TruncatedInput {
                needed,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    pub fn has_anchor(&self, anchor: &[u8]) -> bool {
        self.bytes.starts_with(anchor)
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, EntryPointError> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or(EntryPointError::TruncatedInput {
                needed: offset + 1,
                actual: self.bytes.len(),
            })
    }

    pub fn read_u16_le(&self, range: Range<usize>) -> Result<u16, EntryPointError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(EntryPointError::TruncatedInput {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_le(&self, range: Range<usize>) -> Result<u32, EntryPointError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(EntryPointError::TruncatedInput {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64_le(&self, range: Range<usize>) -> Result<u64, EntryPointError> {
        let bytes = self.read_slice(range)?;
        let array: [u8; 8] = bytes
            .try_into()
            .map_err(|_| EntryPointError::TruncatedInput {
                needed: 8,
                actual: bytes.len(),
            })?;
        Ok(u64::from_le_bytes(array))
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], EntryPointError> {
        self.bytes
            .get(range.clone())
            .ok_or(EntryPointError::TruncatedInput {
                needed: range.end,
                actual: self.bytes.len(),
            })
    }

    /// Read the declared structure length at `offset` and check it against
    /// both the fixed layout and the available input.
    pub fn read_declared_len(
        &self,
        offset: usize,
        minimum: usize,
    ) -> Result<usize, EntryPointError> {
        let declared = self.read_u8(offset)? as usize;
        if declared < minimum {
            return Err(EntryPointError::InvalidLength { declared, minimum });
        }
        self.require_len(declared)?;
        Ok(declared)
    }

    pub fn verify_checksum(
        &self,
        range: Range<usize>,
        region: ChecksumRegion,
    ) -> Result<(), EntryPointError> {
        let sum = checksum(self.read_slice(range)?);
        if sum != 0 {
            return Err(EntryPointError::ChecksumMismatch { region, sum });
        }
        Ok(())
    }
}
