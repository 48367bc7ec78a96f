//! Processor Information (type 4).

use crate::fields::FieldDescriptor;
use crate::table::Structure;

pub const SOCKET_DESIGNATION: FieldDescriptor =
    FieldDescriptor::string("socket_designation", 0x04);
pub const PROCESSOR_TYPE: FieldDescriptor = FieldDescriptor::byte("processor_type", 0x05);
pub const PROCESSOR_FAMILY: FieldDescriptor = FieldDescriptor::byte("processor_family", 0x06)
    .overflow_when(0xfe, &PROCESSOR_FAMILY_2);
pub const MANUFACTURER: FieldDescriptor = FieldDescriptor::string("manufacturer", 0x07);
pub const PROCESSOR_ID: FieldDescriptor = FieldDescriptor::qword("processor_id", 0x08);
pub const VERSION: FieldDescriptor = FieldDescriptor::string("version", 0x10);
pub const VOLTAGE: FieldDescriptor = FieldDescriptor::byte("voltage", 0x11);
/// MHz.
pub const EXTERNAL_CLOCK: FieldDescriptor =
    FieldDescriptor::word("external_clock", 0x12).unknown_when(0);
pub const MAX_SPEED: FieldDescriptor = FieldDescriptor::word("max_speed", 0x14).unknown_when(0);
pub const CURRENT_SPEED: FieldDescriptor =
    FieldDescriptor::word("current_speed", 0x16).unknown_when(0);
pub const STATUS: FieldDescriptor = FieldDescriptor::byte("status", 0x18);
pub const UPGRADE: FieldDescriptor = FieldDescriptor::byte("upgrade", 0x19);
pub const L1_CACHE_HANDLE: FieldDescriptor =
    FieldDescriptor::word("l1_cache_handle", 0x1a).unknown_when(0xffff);
pub const L2_CACHE_HANDLE: FieldDescriptor =
    FieldDescriptor::word("l2_cache_handle", 0x1c).unknown_when(0xffff);
pub const L3_CACHE_HANDLE: FieldDescriptor =
    FieldDescriptor::word("l3_cache_handle", 0x1e).unknown_when(0xffff);
pub const SERIAL_NUMBER: FieldDescriptor = FieldDescriptor::string("serial_number", 0x20);
pub const ASSET_TAG: FieldDescriptor = FieldDescriptor::string("asset_tag", 0x21);
pub const PART_NUMBER: FieldDescriptor = FieldDescriptor::string("part_number", 0x22);
pub const CORE_COUNT: FieldDescriptor = FieldDescriptor::byte("core_count", 0x23)
    .unknown_when(0)
    .overflow_when(0xff, &CORE_COUNT_2);
pub const CORE_ENABLED: FieldDescriptor = FieldDescriptor::byte("core_enabled", 0x24)
    .unknown_when(0)
    .overflow_when(0xff, &CORE_ENABLED_2);
pub const THREAD_COUNT: FieldDescriptor = FieldDescriptor::byte("thread_count", 0x25)
    .unknown_when(0)
    .overflow_when(0xff, &THREAD_COUNT_2);
pub const CHARACTERISTICS: FieldDescriptor = FieldDescriptor::word("characteristics", 0x26);
pub const PROCESSOR_FAMILY_2: FieldDescriptor = FieldDescriptor::word("processor_family_2", 0x28);
pub const CORE_COUNT_2: FieldDescriptor =
    FieldDescriptor::word("core_count_2", 0x2a).unknown_when(0);
pub const CORE_ENABLED_2: FieldDescriptor =
    FieldDescriptor::word("core_enabled_2", 0x2c).unknown_when(0);
pub const THREAD_COUNT_2: FieldDescriptor =
    FieldDescriptor::word("thread_count_2", 0x2e).unknown_when(0);
pub const THREAD_ENABLED: FieldDescriptor =
    FieldDescriptor::word("thread_enabled", 0x30).unknown_when(0);
pub const SOCKET_TYPE: FieldDescriptor = FieldDescriptor::string("socket_type", 0x32);

pub static FIELDS: &[FieldDescriptor] = &[
    SOCKET_DESIGNATION,
    PROCESSOR_TYPE,
    PROCESSOR_FAMILY,
    MANUFACTURER,
    PROCESSOR_ID,
    VERSION,
    VOLTAGE,
    EXTERNAL_CLOCK,
    MAX_SPEED,
    CURRENT_SPEED,
    STATUS,
    UPGRADE,
    L1_CACHE_HANDLE,
    L2_CACHE_HANDLE,
    L3_CACHE_HANDLE,
    SERIAL_NUMBER,
    ASSET_TAG,
    PART_NUMBER,
    CORE_COUNT,
    CORE_ENABLED,
    THREAD_COUNT,
    CHARACTERISTICS,
    PROCESSOR_FAMILY_2,
    CORE_COUNT_2,
    CORE_ENABLED_2,
    THREAD_COUNT_2,
    THREAD_ENABLED,
    SOCKET_TYPE,
];

const CPU_STATUS_MASK: u8 = 0x07;
const SOCKET_POPULATED_BIT: u8 = 6;

/// Status byte at offset 0x18.
///
/// # Examples
/// ```
/// use dmiscope_core::structures::processor::ProcessorStatus;
///
/// let status = ProcessorStatus(0x41);
/// assert!(status.socket_populated());
/// assert_eq!(status.cpu_status(), "Enabled");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorStatus(pub u8);

impl ProcessorStatus {
    pub fn socket_populated(self) -> bool {
        self.0 & (1 << SOCKET_POPULATED_BIT) != 0
    }

    pub fn cpu_status(self) -> &'static str {
        match self.0 & CPU_STATUS_MASK {
            0 => "Unknown",
            1 => "Enabled",
            2 => "Disabled By User",
            3 => "Disabled By BIOS",
            4 => "Idle",
            7 => "Other",
            _ => "Reserved",
        }
    }
}

pub(crate) fn describe(structure: &Structure) -> Vec<String> {
    let Some(raw) = structure.field(&STATUS).get() else {
        return Vec::new();
    };
    let status = ProcessorStatus(raw as u8);
    if !status.socket_populated() {
        return vec!["Socket unpopulated".to_string()];
    }
    vec![
        "Socket populated".to_string(),
        format!("CPU {}", status.cpu_status()),
    ]
}
