//! Cache Information (type 7).

use crate::fields::FieldDescriptor;
use crate::table::Structure;

pub const SOCKET_DESIGNATION: FieldDescriptor =
    FieldDescriptor::string("socket_designation", 0x04);
pub const CONFIGURATION: FieldDescriptor = FieldDescriptor::word("configuration", 0x05);
/// Bit 15 selects 64 KiB granularity over 1 KiB.
pub const MAXIMUM_SIZE: FieldDescriptor = FieldDescriptor::word("maximum_size", 0x07)
    .overflow_when(0xffff, &MAXIMUM_SIZE_2);
pub const INSTALLED_SIZE: FieldDescriptor = FieldDescriptor::word("installed_size", 0x09)
    .overflow_when(0xffff, &INSTALLED_SIZE_2);
pub const SUPPORTED_SRAM_TYPE: FieldDescriptor =
    FieldDescriptor::word("supported_sram_type", 0x0b);
pub const CURRENT_SRAM_TYPE: FieldDescriptor = FieldDescriptor::word("current_sram_type", 0x0d);
/// Nanoseconds.
pub const SPEED: FieldDescriptor = FieldDescriptor::byte("speed", 0x0f).unknown_when(0);
pub const ERROR_CORRECTION_TYPE: FieldDescriptor =
    FieldDescriptor::byte("error_correction_type", 0x10);
pub const SYSTEM_CACHE_TYPE: FieldDescriptor = FieldDescriptor::byte("system_cache_type", 0x11);
pub const ASSOCIATIVITY: FieldDescriptor = FieldDescriptor::byte("associativity", 0x12);
/// Bit 31 selects 64 KiB granularity over 1 KiB.
pub const MAXIMUM_SIZE_2: FieldDescriptor = FieldDescriptor::dword("maximum_size_2", 0x13);
pub const INSTALLED_SIZE_2: FieldDescriptor = FieldDescriptor::dword("installed_size_2", 0x17);

pub static FIELDS: &[FieldDescriptor] = &[
    SOCKET_DESIGNATION,
    CONFIGURATION,
    MAXIMUM_SIZE,
    INSTALLED_SIZE,
    SUPPORTED_SRAM_TYPE,
    CURRENT_SRAM_TYPE,
    SPEED,
    ERROR_CORRECTION_TYPE,
    SYSTEM_CACHE_TYPE,
    ASSOCIATIVITY,
    MAXIMUM_SIZE_2,
    INSTALLED_SIZE_2,
];

const LOCATIONS: [&str; 4] = ["Internal", "External", "Reserved", "Unknown"];
const OPERATIONAL_MODES: [&str; 4] = [
    "Write Through",
    "Write Back",
    "Varies With Memory Address",
    "Unknown",
];

/// Cache configuration word at offset 0x05.
///
/// # Examples
/// ```
/// use dmiscope_core::structures::cache::CacheConfiguration;
///
/// let config = CacheConfiguration(0x0180);
/// assert_eq!(config.level(), 1);
/// assert!(config.enabled());
/// assert_eq!(config.operational_mode(), "Write Back");
/// assert_eq!(config.location(), "Internal");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfiguration(pub u16);

impl CacheConfiguration {
    /// Cache level, 1-based.
    pub fn level(self) -> u8 {
        (self.0 & 0x07) as u8 + 1
    }

    pub fn socketed(self) -> bool {
        self.0 & (1 << 3) != 0
    }

    pub fn location(self) -> &'static str {
        LOCATIONS[usize::from((self.0 >> 5) & 0x03)]
    }

    pub fn enabled(self) -> bool {
        self.0 & (1 << 7) != 0
    }

    pub fn operational_mode(self) -> &'static str {
        OPERATIONAL_MODES[usize::from((self.0 >> 8) & 0x03)]
    }
}

pub(crate) fn describe(structure: &Structure) -> Vec<String> {
    let Some(raw) = structure.field(&CONFIGURATION).get() else {
        return Vec::new();
    };
    let config = CacheConfiguration(raw as u16);
    vec![
        format!("L{}", config.level()),
        if config.enabled() { "Enabled" } else { "Disabled" }.to_string(),
        if config.socketed() { "Socketed" } else { "Not Socketed" }.to_string(),
        config.location().to_string(),
        config.operational_mode().to_string(),
    ]
}
