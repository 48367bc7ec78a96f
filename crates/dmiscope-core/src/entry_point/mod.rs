//! SMBIOS entry point decoding.
//!
//! Two wire variants announce where the structure table lives: the 64-bit
//! `_SM3_` form (SMBIOS 3.x) and the legacy 32-bit `_SM_` form with its
//! embedded `_DMI_` intermediate anchor. The 64-bit form is tried first.
//! Both carry whole-structure checksums; the 32-bit form carries a second,
//! independent checksum over the intermediate region.
//!
//! Offsets live in `layout`, bounds-checked reads and the checksum helper in
//! `reader`, decoding and region scanning in `parser`, and the inverse
//! encoding in `writer`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use error::{ChecksumRegion, EntryPointError};
pub use parser::{
    EntryPoint, EntryPoint32, EntryPoint64, EntryPointKind, SmbiosVersion, decode_entry_point,
    find_entry_point,
};
