//! System Information (type 1) and Baseboard Information (type 2).

use crate::fields::FieldDescriptor;

pub const MANUFACTURER: FieldDescriptor = FieldDescriptor::string("manufacturer", 0x04);
pub const PRODUCT_NAME: FieldDescriptor = FieldDescriptor::string("product_name", 0x05);
pub const VERSION: FieldDescriptor = FieldDescriptor::string("version", 0x06);
pub const SERIAL_NUMBER: FieldDescriptor = FieldDescriptor::string("serial_number", 0x07);
/// 16 bytes; exposed as two qwords since fields are at most 8 bytes wide.
pub const UUID_LOW: FieldDescriptor = FieldDescriptor::qword("uuid_low", 0x08);
pub const UUID_HIGH: FieldDescriptor = FieldDescriptor::qword("uuid_high", 0x10);
pub const WAKE_UP_TYPE: FieldDescriptor = FieldDescriptor::byte("wake_up_type", 0x18);
pub const SKU_NUMBER: FieldDescriptor = FieldDescriptor::string("sku_number", 0x19);
pub const FAMILY: FieldDescriptor = FieldDescriptor::string("family", 0x1a);

pub static SYSTEM_FIELDS: &[FieldDescriptor] = &[
    MANUFACTURER,
    PRODUCT_NAME,
    VERSION,
    SERIAL_NUMBER,
    UUID_LOW,
    UUID_HIGH,
    WAKE_UP_TYPE,
    SKU_NUMBER,
    FAMILY,
];

pub const BOARD_MANUFACTURER: FieldDescriptor = FieldDescriptor::string("manufacturer", 0x04);
pub const BOARD_PRODUCT: FieldDescriptor = FieldDescriptor::string("product", 0x05);
pub const BOARD_VERSION: FieldDescriptor = FieldDescriptor::string("version", 0x06);
pub const BOARD_SERIAL_NUMBER: FieldDescriptor = FieldDescriptor::string("serial_number", 0x07);
pub const BOARD_ASSET_TAG: FieldDescriptor = FieldDescriptor::string("asset_tag", 0x08);
pub const FEATURE_FLAGS: FieldDescriptor = FieldDescriptor::byte("feature_flags", 0x09);
pub const LOCATION_IN_CHASSIS: FieldDescriptor =
    FieldDescriptor::string("location_in_chassis", 0x0a);
pub const CHASSIS_HANDLE: FieldDescriptor = FieldDescriptor::word("chassis_handle", 0x0b);
pub const BOARD_TYPE: FieldDescriptor = FieldDescriptor::byte("board_type", 0x0d);
pub const CONTAINED_OBJECT_COUNT: FieldDescriptor =
    FieldDescriptor::byte("contained_object_count", 0x0e);

pub static BASEBOARD_FIELDS: &[FieldDescriptor] = &[
    BOARD_MANUFACTURER,
    BOARD_PRODUCT,
    BOARD_VERSION,
    BOARD_SERIAL_NUMBER,
    BOARD_ASSET_TAG,
    FEATURE_FLAGS,
    LOCATION_IN_CHASSIS,
    CHASSIS_HANDLE,
    BOARD_TYPE,
    CONTAINED_OBJECT_COUNT,
];
