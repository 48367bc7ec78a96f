//! Table acquisition.
//!
//! Every file access of the crate lives behind [`TableSource`]: a source
//! yields the raw entry point bytes and the raw table bytes, and
//! [`decode_source`] runs them through the decoder.

mod dump_file;
mod memory;
mod sysfs;

use std::path::PathBuf;

pub use dump_file::DumpFileSource;
pub use memory::MemoryImageSource;
pub use sysfs::SysfsSource;

use thiserror::Error;

use crate::dump::DumpError;
use crate::entry_point::EntryPointError;
use crate::table::{DecodeResult, decode};

/// Raw bytes as read from a source, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTables {
    pub entry_point: Vec<u8>,
    pub table: Vec<u8>,
}

pub trait TableSource {
    fn acquire(&mut self) -> Result<RawTables, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dump error: {0}")]
    Dump(#[from] DumpError),
    #[error("entry point error: {0}")]
    EntryPoint(#[from] EntryPointError),
    #[error("table at {address:#x} ({length} bytes) lies outside the image ({available} bytes readable)")]
    TableOutOfRange {
        address: u64,
        length: u64,
        available: u64,
    },
}

impl SourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("entry point error: {0}")]
    EntryPoint(#[from] EntryPointError),
}

/// Acquire raw tables from `source` and decode them.
///
/// # Errors
/// Acquisition failures and entry point failures; table anomalies are
/// reported through the result's termination instead.
pub fn decode_source<S: TableSource + ?Sized>(source: &mut S) -> Result<DecodeResult, DecodeError> {
    let raw = source.acquire()?;
    tracing::debug!(
        entry_point_bytes = raw.entry_point.len(),
        table_bytes = raw.table.len(),
        "acquired raw tables"
    );
    let result = decode(&raw.entry_point, &raw.table)?;
    Ok(result)
}
