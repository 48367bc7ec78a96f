use std::ops::Range;

use super::layout;
use super::structure::StructureHeader;

/// Bounds-checked view over a raw structure table.
///
/// Reads return `None` past the end; the walker treats that as the end of
/// useful data rather than an error.
pub struct TableReader<'a> {
    table: &'a [u8],
}

impl<'a> TableReader<'a> {
    pub fn new(table: &'a [u8]) -> Self {
        Self { table }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.table
    }

    pub fn remaining(&self, offset: usize) -> usize {
        self.table.len().saturating_sub(offset)
    }

    pub fn read_header(&self, offset: usize) -> Option<StructureHeader> {
        let end = offset.checked_add(layout::HEADER_LEN)?;
        let bytes = self.table.get(offset..end)?;
        let handle_range = layout::HANDLE_RANGE;
        Some(StructureHeader {
            kind: bytes[layout::TYPE_OFFSET],
            length: bytes[layout::LENGTH_OFFSET],
            handle: u16::from_le_bytes([bytes[handle_range.start], bytes[handle_range.start + 1]]),
        })
    }

    pub fn read_slice(&self, range: Range<usize>) -> Option<&'a [u8]> {
        self.table.get(range)
    }
}

#[cfg(test)]
mod tests {
    use super::TableReader;

    #[test]
    fn read_header_le_handle() {
        let table = [0x11, 0x28, 0x34, 0x12];
        let header = TableReader::new(&table).read_header(0).unwrap();
        assert_eq!(header.kind, 0x11);
        assert_eq!(header.length, 0x28);
        assert_eq!(header.handle, 0x1234);
    }

    #[test]
    fn read_header_short() {
        let table = [0x11, 0x28, 0x34];
        assert!(TableReader::new(&table).read_header(0).is_none());
        assert_eq!(TableReader::new(&table).remaining(1), 2);
        assert_eq!(TableReader::new(&table).remaining(5), 0);
    }
}
