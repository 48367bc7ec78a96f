use std::fmt;

use thiserror::Error;

/// Checksummed span of an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumRegion {
    /// Whole `_SM3_` structure.
    SixtyFourBit,
    /// Whole `_SM_` structure.
    ThirtyTwoBit,
    /// `_DMI_` intermediate region, bytes 16..31 of the `_SM_` structure.
    Intermediate,
}

impl fmt::Display for ChecksumRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChecksumRegion::SixtyFourBit => "64-bit entry point",
            ChecksumRegion::ThirtyTwoBit => "32-bit entry point",
            ChecksumRegion::Intermediate => "intermediate (_DMI_) entry point",
        };
        f.write_str(label)
    }
}

/// Errors returned while locating or validating an entry point.
///
/// # Examples
/// ```
/// use dmiscope_core::EntryPointError;
///
/// let err = EntryPointError::TruncatedInput { needed: 24, actual: 10 };
/// assert!(err.to_string().contains("need 24 bytes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryPointError {
    #[error("no SMBIOS entry point anchor found")]
    NotFound,
    #[error("{region} checksum mismatch: bytes sum to {sum:#04x}")]
    ChecksumMismatch { region: ChecksumRegion, sum: u8 },
    #[error("entry point too short: need {needed} bytes, got {actual}")]
    TruncatedInput { needed: usize, actual: usize },
    #[error("declared entry point length {declared} is below the fixed layout of {minimum} bytes")]
    InvalidLength { declared: usize, minimum: usize },
}
