use std::ops::Range;

pub const MAGIC: &[u8; 9] = b"DMISCOPE\0";
pub const FORMAT_VERSION: u8 = 1;

pub const KIND_32: u8 = 0;
pub const KIND_64: u8 = 1;

pub const MAGIC_RANGE: Range<usize> = 0..9;
pub const VERSION_OFFSET: usize = 9;
pub const KIND_OFFSET: usize = 10;
pub const MAJOR_OFFSET: usize = 11;
pub const MINOR_OFFSET: usize = 12;
pub const REVISION_OFFSET: usize = 13;
pub const RESERVED_OFFSET: usize = 14;
pub const TABLE_LEN_RANGE: Range<usize> = 15..19;
pub const ADDRESS_RANGE: Range<usize> = 19..27;

pub const HEADER_LEN: usize = 27;
