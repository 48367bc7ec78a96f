use super::descriptor::FieldWidth;

/// Little-endian reads from a formatted section that never read past it.
pub struct FieldReader<'a> {
    formatted: &'a [u8],
}

impl<'a> FieldReader<'a> {
    pub fn new(formatted: &'a [u8]) -> Self {
        Self { formatted }
    }

    pub fn read(&self, offset: usize, width: FieldWidth) -> Option<u64> {
        let end = offset.checked_add(width.bytes())?;
        let bytes = self.formatted.get(offset..end)?;
        Some(
            bytes
                .iter()
                .rev()
                .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::FieldReader;
    use crate::fields::FieldWidth;

    #[test]
    fn reads_little_endian() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0xff];
        let reader = FieldReader::new(&bytes);
        assert_eq!(reader.read(0, FieldWidth::Dword), Some(0x1234_5678));
        assert_eq!(reader.read(3, FieldWidth::Word), Some(0xff12));
        assert_eq!(reader.read(4, FieldWidth::Byte), Some(0xff));
    }

    #[test]
    fn refuses_partial_fields() {
        let bytes = [0u8; 5];
        let reader = FieldReader::new(&bytes);
        assert_eq!(reader.read(4, FieldWidth::Word), None);
        assert_eq!(reader.read(usize::MAX, FieldWidth::Byte), None);
    }
}
