use std::fs;
use std::path::{Path, PathBuf};

use super::{RawTables, SourceError, TableSource};

pub const DEFAULT_TABLES_DIR: &str = "/sys/firmware/dmi/tables";
pub const ENTRY_POINT_FILE: &str = "smbios_entry_point";
pub const TABLE_FILE: &str = "DMI";

/// Tables exported by the Linux kernel under sysfs.
#[derive(Debug, Clone)]
pub struct SysfsSource {
    dir: PathBuf,
}

impl SysfsSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for SysfsSource {
    fn default() -> Self {
        Self::new(DEFAULT_TABLES_DIR)
    }
}

impl TableSource for SysfsSource {
    fn acquire(&mut self) -> Result<RawTables, SourceError> {
        let read = |name: &str| {
            let path = self.dir.join(name);
            fs::read(&path).map_err(|err| SourceError::io(path, err))
        };
        Ok(RawTables {
            entry_point: read(ENTRY_POINT_FILE)?,
            table: read(TABLE_FILE)?,
        })
    }
}
