//! Structure table walking.
//!
//! The table is a run of length-delimited structures, each a 4-byte header
//! plus formatted bytes followed by a NUL-delimited string table, ending with
//! a type 127 end-of-table structure. The walker is best effort: malformed or
//! truncated trailing data ends the walk and is reported through
//! [`Termination`] instead of an error, so a caller can tell a clean end from
//! a short one without losing the structures decoded so far.

pub mod layout;
pub mod parser;
pub mod reader;
pub mod strings;
pub mod structure;
pub mod writer;

pub use parser::{DecodeResult, Termination, Walk, decode, decode_table, walk_structures};
pub use strings::scan_strings;
pub use structure::{Structure, StructureHeader};
pub use writer::encode_table;
