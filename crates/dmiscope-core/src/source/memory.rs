use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::entry_point::layout::{EP32_LEN, EP32_LENGTH_OFFSET, EP64_LEN, EP64_LENGTH_OFFSET};
use crate::entry_point::{EntryPoint, find_entry_point};

use super::{RawTables, SourceError, TableSource};

pub const DEFAULT_MEMORY_DEVICE: &str = "/dev/mem";

/// Legacy BIOS region searched for an entry point.
pub const SCAN_START: u64 = 0x000f_0000;
pub const SCAN_END: u64 = 0x0010_0000;

/// A physical memory image such as `/dev/mem` or a saved copy of one.
///
/// The entry point is searched in the legacy BIOS region, then the table is
/// read at the address it announces.
#[derive(Debug, Clone)]
pub struct MemoryImageSource {
    path: PathBuf,
}

impl MemoryImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_at(&self, file: &mut File, offset: u64, len: u64) -> Result<Vec<u8>, SourceError> {
        let mut buf = Vec::new();
        file.seek(SeekFrom::Start(offset))
            .map_err(|err| SourceError::io(&self.path, err))?;
        file.by_ref()
            .take(len)
            .read_to_end(&mut buf)
            .map_err(|err| SourceError::io(&self.path, err))?;
        Ok(buf)
    }
}

impl Default for MemoryImageSource {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_DEVICE)
    }
}

impl TableSource for MemoryImageSource {
    fn acquire(&mut self) -> Result<RawTables, SourceError> {
        let mut file = File::open(&self.path).map_err(|err| SourceError::io(&self.path, err))?;
        let region = self.read_at(&mut file, SCAN_START, SCAN_END - SCAN_START)?;
        let (offset, entry_point) = find_entry_point(&region)?;
        tracing::debug!(
            address = SCAN_START + offset as u64,
            kind = entry_point.kind().as_str(),
            "found entry point in memory image"
        );

        let raw_entry_point = entry_point_bytes(&region[offset..], &entry_point).to_vec();

        let address = entry_point.table_address();
        let length = u64::from(entry_point.table_len());
        let table = self.read_at(&mut file, address, length)?;
        // The 64-bit length is only an upper bound, so a short read is fine
        // as long as the table starts inside the image.
        let short = match entry_point {
            EntryPoint::ThirtyTwoBit(_) => (table.len() as u64) < length,
            EntryPoint::SixtyFourBit(_) => table.is_empty() && length > 0,
        };
        if short {
            return Err(SourceError::TableOutOfRange {
                address,
                length,
                available: table.len() as u64,
            });
        }

        Ok(RawTables {
            entry_point: raw_entry_point,
            table,
        })
    }
}

/// The entry point's own bytes at the start of `candidate`.
fn entry_point_bytes<'a>(candidate: &'a [u8], entry_point: &EntryPoint) -> &'a [u8] {
    let (length_offset, fixed) = match entry_point {
        EntryPoint::ThirtyTwoBit(_) => (EP32_LENGTH_OFFSET, EP32_LEN),
        EntryPoint::SixtyFourBit(_) => (EP64_LENGTH_OFFSET, EP64_LEN),
    };
    let declared = candidate
        .get(length_offset)
        .map_or(fixed, |len| usize::from(*len).max(fixed));
    &candidate[..declared.min(candidate.len())]
}
