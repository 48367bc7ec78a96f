//! Archival container for a decoded table.
//!
//! A dump keeps what is needed to decode the table again elsewhere: the
//! entry point kind and version, the original table address and the raw
//! table bytes, behind a fixed 27-byte header. Loading a dump synthesizes an
//! equivalent entry point, so dumps flow through the same decoder as live
//! tables.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use error::DumpError;
pub use parser::{Dump, parse_dump};
pub use writer::write_dump;
