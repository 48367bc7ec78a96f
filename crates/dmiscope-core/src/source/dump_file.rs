use std::fs;
use std::path::{Path, PathBuf};

use crate::dump::parse_dump;

use super::{RawTables, SourceError, TableSource};

/// A dump container written by `write_dump`.
#[derive(Debug, Clone)]
pub struct DumpFileSource {
    path: PathBuf,
}

impl DumpFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for DumpFileSource {
    fn acquire(&mut self) -> Result<RawTables, SourceError> {
        let bytes = fs::read(&self.path).map_err(|err| SourceError::io(&self.path, err))?;
        let dump = parse_dump(&bytes)?;
        Ok(RawTables {
            entry_point: dump.entry_point().encode(),
            table: dump.table,
        })
    }
}
