use std::ops::Range;

use super::error::DumpError;

pub struct DumpReader<'a> {
    bytes: &'a [u8],
}

impl<'a> DumpReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DumpError> {
        if self.bytes.len() < needed {
            return Err(DumpError::TooShort {
                needed,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DumpError> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or(DumpError::TooShort {
                needed: offset + 1,
                actual: self.bytes.len(),
            })
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], DumpError> {
        let needed = range.end;
        self.bytes.get(range).ok_or(DumpError::TooShort {
            needed,
            actual: self.bytes.len(),
        })
    }

    pub fn read_u32_le(&self, range: Range<usize>) -> Result<u32, DumpError> {
        let bytes = self.read_slice(range)?;
        let array: [u8; 4] = bytes.try_into().map_err(|_| DumpError::TooShort {
            needed: 4,
            actual: bytes.len(),
        })?;
        Ok(u32::from_le_bytes(array))
    }

    pub fn read_u64_le(&self, range: Range<usize>) -> Result<u64, DumpError> {
        let bytes = self.read_slice(range)?;
        let array: [u8; 8] = bytes.try_into().map_err(|_| DumpError::TooShort {
            needed: 8,
            actual: bytes.len(),
        })?;
        Ok(u64::from_le_bytes(array))
    }

    /// Bytes from `start` to the end of the buffer.
    pub fn rest(&self, start: usize) -> &'a [u8] {
        self.bytes.get(start..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::DumpReader;
    use crate::dump::error::DumpError;

    #[test]
    fn short_reads_report_needed_and_actual() {
        let reader = DumpReader::new(&[1, 2, 3]);
        assert_eq!(
            reader.read_u32_le(0..4),
            Err(DumpError::TooShort {
                needed: 4,
                actual: 3
            })
        );
        assert_eq!(reader.read_u8(2), Ok(3));
        assert_eq!(reader.rest(5), &[] as &[u8]);
    }
}
