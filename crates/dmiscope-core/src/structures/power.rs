//! System Power Supply (type 39).

use crate::fields::FieldDescriptor;

pub const POWER_UNIT_GROUP: FieldDescriptor = FieldDescriptor::byte("power_unit_group", 0x04);
pub const LOCATION: FieldDescriptor = FieldDescriptor::string("location", 0x05);
pub const DEVICE_NAME: FieldDescriptor = FieldDescriptor::string("device_name", 0x06);
pub const MANUFACTURER: FieldDescriptor = FieldDescriptor::string("manufacturer", 0x07);
pub const SERIAL_NUMBER: FieldDescriptor = FieldDescriptor::string("serial_number", 0x08);
pub const ASSET_TAG: FieldDescriptor = FieldDescriptor::string("asset_tag", 0x09);
pub const MODEL_PART_NUMBER: FieldDescriptor = FieldDescriptor::string("model_part_number", 0x0a);
pub const REVISION_LEVEL: FieldDescriptor = FieldDescriptor::string("revision_level", 0x0b);
/// Watts.
pub const MAX_POWER_CAPACITY: FieldDescriptor =
    FieldDescriptor::word("max_power_capacity", 0x0c).unknown_when(0x8000);
pub const POWER_SUPPLY_CHARACTERISTICS: FieldDescriptor =
    FieldDescriptor::word("power_supply_characteristics", 0x0e);
pub const INPUT_VOLTAGE_PROBE_HANDLE: FieldDescriptor =
    FieldDescriptor::word("input_voltage_probe_handle", 0x10).unknown_when(0xffff);
pub const COOLING_DEVICE_HANDLE: FieldDescriptor =
    FieldDescriptor::word("cooling_device_handle", 0x12).unknown_when(0xffff);
pub const INPUT_CURRENT_PROBE_HANDLE: FieldDescriptor =
    FieldDescriptor::word("input_current_probe_handle", 0x14).unknown_when(0xffff);

pub static FIELDS: &[FieldDescriptor] = &[
    POWER_UNIT_GROUP,
    LOCATION,
    DEVICE_NAME,
    MANUFACTURER,
    SERIAL_NUMBER,
    ASSET_TAG,
    MODEL_PART_NUMBER,
    REVISION_LEVEL,
    MAX_POWER_CAPACITY,
    POWER_SUPPLY_CHARACTERISTICS,
    INPUT_VOLTAGE_PROBE_HANDLE,
    COOLING_DEVICE_HANDLE,
    INPUT_CURRENT_PROBE_HANDLE,
];
