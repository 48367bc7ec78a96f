//! Voltage (26), Temperature (28) and Electrical Current (29) probes.
//!
//! The three types share one layout; only the unit differs (millivolts,
//! 1/10 degree C, milliamps).

use crate::fields::FieldDescriptor;
use crate::table::Structure;

use super::names::enumerated;

const UNKNOWN_READING: u64 = 0x8000;

pub const DESCRIPTION: FieldDescriptor = FieldDescriptor::string("description", 0x04);
pub const LOCATION_AND_STATUS: FieldDescriptor =
    FieldDescriptor::byte("location_and_status", 0x05);
pub const MAXIMUM_VALUE: FieldDescriptor =
    FieldDescriptor::word("maximum_value", 0x06).unknown_when(UNKNOWN_READING);
pub const MINIMUM_VALUE: FieldDescriptor =
    FieldDescriptor::word("minimum_value", 0x08).unknown_when(UNKNOWN_READING);
pub const RESOLUTION: FieldDescriptor =
    FieldDescriptor::word("resolution", 0x0a).unknown_when(UNKNOWN_READING);
pub const TOLERANCE: FieldDescriptor =
    FieldDescriptor::word("tolerance", 0x0c).unknown_when(UNKNOWN_READING);
pub const ACCURACY: FieldDescriptor =
    FieldDescriptor::word("accuracy", 0x0e).unknown_when(UNKNOWN_READING);
pub const OEM_DEFINED: FieldDescriptor = FieldDescriptor::dword("oem_defined", 0x10);
pub const NOMINAL_VALUE: FieldDescriptor =
    FieldDescriptor::word("nominal_value", 0x14).unknown_when(UNKNOWN_READING);

pub static FIELDS: &[FieldDescriptor] = &[
    DESCRIPTION,
    LOCATION_AND_STATUS,
    MAXIMUM_VALUE,
    MINIMUM_VALUE,
    RESOLUTION,
    TOLERANCE,
    ACCURACY,
    OEM_DEFINED,
    NOMINAL_VALUE,
];

static LOCATIONS: &[&str] = &[
    "Other",
    "Unknown",
    "Processor",
    "Disk",
    "Peripheral Bay",
    "System Management Module",
    "Motherboard",
    "Memory Module",
    "Processor Module",
    "Power Unit",
    "Add-in Card",
    "Front Panel Board",
    "Back Panel Board",
    "Power System Board",
    "Drive Back Plane",
];

static STATUSES: &[&str] = &[
    "Other",
    "Unknown",
    "OK",
    "Non-critical",
    "Critical",
    "Non-recoverable",
];

/// Location and status byte at offset 0x05.
///
/// # Examples
/// ```
/// use dmiscope_core::structures::probe::ProbeLocationStatus;
///
/// let byte = ProbeLocationStatus(0x63);
/// assert_eq!(byte.location(), "Processor");
/// assert_eq!(byte.status(), "OK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeLocationStatus(pub u8);

impl ProbeLocationStatus {
    pub fn location(self) -> &'static str {
        enumerated(LOCATIONS, self.0 & 0x1f)
    }

    pub fn status(self) -> &'static str {
        enumerated(STATUSES, self.0 >> 5)
    }
}

pub(crate) fn describe(structure: &Structure) -> Vec<String> {
    let Some(raw) = structure.field(&LOCATION_AND_STATUS).get() else {
        return Vec::new();
    };
    let byte = ProbeLocationStatus(raw as u8);
    vec![
        format!("Location: {}", byte.location()),
        format!("Status: {}", byte.status()),
    ]
}
