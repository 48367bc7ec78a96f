use std::ops::Range;

pub const HEADER_LEN: usize = 4;
pub const TYPE_OFFSET: usize = 0;
pub const LENGTH_OFFSET: usize = 1;
pub const HANDLE_RANGE: Range<usize> = 2..4;

pub const INACTIVE: u8 = 126;
pub const END_OF_TABLE: u8 = 127;

pub const STRING_TERMINATOR: u8 = 0x00;
/// An empty string table is two NUL bytes.
pub const EMPTY_STRING_TABLE_LEN: usize = 2;
