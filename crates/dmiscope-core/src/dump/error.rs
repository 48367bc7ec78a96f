use thiserror::Error;

/// Errors returned while loading a dump container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DumpError {
    #[error("dump too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("not a dmiscope dump (bad magic)")]
    BadMagic,
    #[error("unsupported dump format version {0}")]
    UnsupportedVersion(u8),
    #[error("unknown entry point kind {0} in dump header")]
    UnknownKind(u8),
    #[error("dump table truncated: header declares {declared} bytes, {actual} present")]
    TruncatedTable { declared: usize, actual: usize },
}
