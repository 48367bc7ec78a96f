//! Memory topology: types 16, 17, 19 and 20.

use crate::fields::FieldDescriptor;

/// Physical Memory Array (type 16).
pub mod array {
    use crate::fields::FieldDescriptor;

    pub const LOCATION: FieldDescriptor = FieldDescriptor::byte("location", 0x04);
    pub const USE: FieldDescriptor = FieldDescriptor::byte("use", 0x05);
    pub const ERROR_CORRECTION: FieldDescriptor = FieldDescriptor::byte("error_correction", 0x06);
    /// KiB; 0x8000_0000 defers to the byte count at 0x0F.
    pub const MAXIMUM_CAPACITY: FieldDescriptor = FieldDescriptor::dword("maximum_capacity", 0x07)
        .overflow_when(0x8000_0000, &EXTENDED_MAXIMUM_CAPACITY);
    pub const ERROR_INFORMATION_HANDLE: FieldDescriptor =
        FieldDescriptor::word("error_information_handle", 0x0b).unknown_when(0xfffe);
    pub const NUMBER_OF_MEMORY_DEVICES: FieldDescriptor =
        FieldDescriptor::word("number_of_memory_devices", 0x0d);
    pub const EXTENDED_MAXIMUM_CAPACITY: FieldDescriptor =
        FieldDescriptor::qword("extended_maximum_capacity", 0x0f);
}

/// Memory Device (type 17).
pub mod device {
    use crate::fields::FieldDescriptor;

    pub const PHYSICAL_MEMORY_ARRAY_HANDLE: FieldDescriptor =
        FieldDescriptor::word("physical_memory_array_handle", 0x04);
    pub const MEMORY_ERROR_INFORMATION_HANDLE: FieldDescriptor =
        FieldDescriptor::word("memory_error_information_handle", 0x06).unknown_when(0xfffe);
    pub const TOTAL_WIDTH: FieldDescriptor =
        FieldDescriptor::word("total_width", 0x08).unknown_when(0xffff);
    pub const DATA_WIDTH: FieldDescriptor =
        FieldDescriptor::word("data_width", 0x0a).unknown_when(0xffff);
    /// Bit 15 selects KiB over MiB; 0 means no module installed.
    pub const SIZE: FieldDescriptor = FieldDescriptor::word("size", 0x0c)
        .unknown_when(0xffff)
        .overflow_when(0x7fff, &EXTENDED_SIZE);
    pub const FORM_FACTOR: FieldDescriptor = FieldDescriptor::byte("form_factor", 0x0e);
    pub const DEVICE_SET: FieldDescriptor = FieldDescriptor::byte("device_set", 0x0f);
    pub const DEVICE_LOCATOR: FieldDescriptor = FieldDescriptor::string("device_locator", 0x10);
    pub const BANK_LOCATOR: FieldDescriptor = FieldDescriptor::string("bank_locator", 0x11);
    pub const MEMORY_TYPE: FieldDescriptor = FieldDescriptor::byte("memory_type", 0x12);
    pub const TYPE_DETAIL: FieldDescriptor = FieldDescriptor::word("type_detail", 0x13);
    /// MT/s.
    pub const SPEED: FieldDescriptor = FieldDescriptor::word("speed", 0x15)
        .unknown_when(0)
        .overflow_when(0xffff, &EXTENDED_SPEED);
    pub const MANUFACTURER: FieldDescriptor = FieldDescriptor::string("manufacturer", 0x17);
    pub const SERIAL_NUMBER: FieldDescriptor = FieldDescriptor::string("serial_number", 0x18);
    pub const ASSET_TAG: FieldDescriptor = FieldDescriptor::string("asset_tag", 0x19);
    pub const PART_NUMBER: FieldDescriptor = FieldDescriptor::string("part_number", 0x1a);
    pub const ATTRIBUTES: FieldDescriptor = FieldDescriptor::byte("attributes", 0x1b);
    /// MiB, bit 31 reserved.
    pub const EXTENDED_SIZE: FieldDescriptor =
        FieldDescriptor::dword("extended_size", 0x1c).masked(0x7fff_ffff);
    pub const CONFIGURED_MEMORY_SPEED: FieldDescriptor =
        FieldDescriptor::word("configured_memory_speed", 0x20)
            .unknown_when(0)
            .overflow_when(0xffff, &EXTENDED_CONFIGURED_MEMORY_SPEED);
    /// Millivolts.
    pub const MINIMUM_VOLTAGE: FieldDescriptor =
        FieldDescriptor::word("minimum_voltage", 0x22).unknown_when(0);
    pub const MAXIMUM_VOLTAGE: FieldDescriptor =
        FieldDescriptor::word("maximum_voltage", 0x24).unknown_when(0);
    pub const CONFIGURED_VOLTAGE: FieldDescriptor =
        FieldDescriptor::word("configured_voltage", 0x26).unknown_when(0);
    pub const MEMORY_TECHNOLOGY: FieldDescriptor =
        FieldDescriptor::byte("memory_technology", 0x28);
    pub const EXTENDED_SPEED: FieldDescriptor =
        FieldDescriptor::dword("extended_speed", 0x54).unknown_when(0);
    pub const EXTENDED_CONFIGURED_MEMORY_SPEED: FieldDescriptor =
        FieldDescriptor::dword("extended_configured_memory_speed", 0x58).unknown_when(0);
}

/// Memory Array Mapped Address (type 19).
pub mod array_mapped {
    use crate::fields::FieldDescriptor;

    /// KiB; all ones defers to the byte address at 0x0F.
    pub const STARTING_ADDRESS: FieldDescriptor = FieldDescriptor::dword("starting_address", 0x04)
        .overflow_when(0xffff_ffff, &EXTENDED_STARTING_ADDRESS);
    pub const ENDING_ADDRESS: FieldDescriptor = FieldDescriptor::dword("ending_address", 0x08)
        .overflow_when(0xffff_ffff, &EXTENDED_ENDING_ADDRESS);
    pub const MEMORY_ARRAY_HANDLE: FieldDescriptor =
        FieldDescriptor::word("memory_array_handle", 0x0c);
    pub const PARTITION_WIDTH: FieldDescriptor = FieldDescriptor::byte("partition_width", 0x0e);
    pub const EXTENDED_STARTING_ADDRESS: FieldDescriptor =
        FieldDescriptor::qword("extended_starting_address", 0x0f);
    pub const EXTENDED_ENDING_ADDRESS: FieldDescriptor =
        FieldDescriptor::qword("extended_ending_address", 0x17);
}

/// Memory Device Mapped Address (type 20).
pub mod device_mapped {
    use crate::fields::FieldDescriptor;

    pub const STARTING_ADDRESS: FieldDescriptor = FieldDescriptor::dword("starting_address", 0x04)
        .overflow_when(0xffff_ffff, &EXTENDED_STARTING_ADDRESS);
    pub const ENDING_ADDRESS: FieldDescriptor = FieldDescriptor::dword("ending_address", 0x08)
        .overflow_when(0xffff_ffff, &EXTENDED_ENDING_ADDRESS);
    pub const MEMORY_DEVICE_HANDLE: FieldDescriptor =
        FieldDescriptor::word("memory_device_handle", 0x0c);
    pub const MEMORY_ARRAY_MAPPED_ADDRESS_HANDLE: FieldDescriptor =
        FieldDescriptor::word("memory_array_mapped_address_handle", 0x0e);
    pub const PARTITION_ROW_POSITION: FieldDescriptor =
        FieldDescriptor::byte("partition_row_position", 0x10).unknown_when(0xff);
    pub const INTERLEAVE_POSITION: FieldDescriptor =
        FieldDescriptor::byte("interleave_position", 0x11).unknown_when(0xff);
    pub const INTERLEAVED_DATA_DEPTH: FieldDescriptor =
        FieldDescriptor::byte("interleaved_data_depth", 0x12).unknown_when(0xff);
    pub const EXTENDED_STARTING_ADDRESS: FieldDescriptor =
        FieldDescriptor::qword("extended_starting_address", 0x13);
    pub const EXTENDED_ENDING_ADDRESS: FieldDescriptor =
        FieldDescriptor::qword("extended_ending_address", 0x1b);
}

pub static PHYSICAL_MEMORY_ARRAY_FIELDS: &[FieldDescriptor] = &[
    array::LOCATION,
    array::USE,
    array::ERROR_CORRECTION,
    array::MAXIMUM_CAPACITY,
    array::ERROR_INFORMATION_HANDLE,
    array::NUMBER_OF_MEMORY_DEVICES,
    array::EXTENDED_MAXIMUM_CAPACITY,
];

pub static MEMORY_DEVICE_FIELDS: &[FieldDescriptor] = &[
    device::PHYSICAL_MEMORY_ARRAY_HANDLE,
    device::MEMORY_ERROR_INFORMATION_HANDLE,
    device::TOTAL_WIDTH,
    device::DATA_WIDTH,
    device::SIZE,
    device::FORM_FACTOR,
    device::DEVICE_SET,
    device::DEVICE_LOCATOR,
    device::BANK_LOCATOR,
    device::MEMORY_TYPE,
    device::TYPE_DETAIL,
    device::SPEED,
    device::MANUFACTURER,
    device::SERIAL_NUMBER,
    device::ASSET_TAG,
    device::PART_NUMBER,
    device::ATTRIBUTES,
    device::EXTENDED_SIZE,
    device::CONFIGURED_MEMORY_SPEED,
    device::MINIMUM_VOLTAGE,
    device::MAXIMUM_VOLTAGE,
    device::CONFIGURED_VOLTAGE,
    device::MEMORY_TECHNOLOGY,
    device::EXTENDED_SPEED,
    device::EXTENDED_CONFIGURED_MEMORY_SPEED,
];

pub static ARRAY_MAPPED_ADDRESS_FIELDS: &[FieldDescriptor] = &[
    array_mapped::STARTING_ADDRESS,
    array_mapped::ENDING_ADDRESS,
    array_mapped::MEMORY_ARRAY_HANDLE,
    array_mapped::PARTITION_WIDTH,
    array_mapped::EXTENDED_STARTING_ADDRESS,
    array_mapped::EXTENDED_ENDING_ADDRESS,
];

pub static DEVICE_MAPPED_ADDRESS_FIELDS: &[FieldDescriptor] = &[
    device_mapped::STARTING_ADDRESS,
    device_mapped::ENDING_ADDRESS,
    device_mapped::MEMORY_DEVICE_HANDLE,
    device_mapped::MEMORY_ARRAY_MAPPED_ADDRESS_HANDLE,
    device_mapped::PARTITION_ROW_POSITION,
    device_mapped::INTERLEAVE_POSITION,
    device_mapped::INTERLEAVED_DATA_DEPTH,
    device_mapped::EXTENDED_STARTING_ADDRESS,
    device_mapped::EXTENDED_ENDING_ADDRESS,
];

#[cfg(test)]
mod tests {
    use super::{array, array_mapped, device};
    use crate::fields::FieldValue;
    use crate::table::{Structure, StructureHeader};

    fn structure(kind: u8, length: usize, edit: impl FnOnce(&mut [u8])) -> Structure {
        let mut formatted = vec![0u8; 0x60];
        formatted[0] = kind;
        formatted[1] = length as u8;
        edit(&mut formatted);
        formatted.truncate(length);
        Structure {
            header: StructureHeader {
                kind,
                length: length as u8,
                handle: 0x1000,
            },
            formatted,
            strings: Vec::new(),
        }
    }

    #[test]
    fn array_capacity_without_extension() {
        let array = structure(16, 15, |f| {
            f[0x07..0x0b].copy_from_slice(&0x0080_0000u32.to_le_bytes());
        });
        assert_eq!(array.field(&array::MAXIMUM_CAPACITY), FieldValue::Value(0x0080_0000));
        assert_eq!(
            array.field(&array::EXTENDED_MAXIMUM_CAPACITY),
            FieldValue::Absent
        );
    }

    #[test]
    fn array_capacity_extension_only_on_marker() {
        let array = structure(16, 23, |f| {
            f[0x07..0x0b].copy_from_slice(&0x4000_0000u32.to_le_bytes());
            f[0x0f..0x17].copy_from_slice(&0x0000_0000_4000_0000u64.to_le_bytes());
        });
        assert_eq!(array.field(&array::MAXIMUM_CAPACITY), FieldValue::Value(0x4000_0000));
        assert_eq!(
            array.field(&array::EXTENDED_MAXIMUM_CAPACITY),
            FieldValue::Value(0x0000_0000_4000_0000)
        );

        let array = structure(16, 23, |f| {
            f[0x07..0x0b].copy_from_slice(&0x8000_0000u32.to_le_bytes());
            f[0x0f..0x17].copy_from_slice(&0x0000_0100_0000_0000u64.to_le_bytes());
        });
        assert_eq!(
            array.field(&array::MAXIMUM_CAPACITY),
            FieldValue::Extended(0x0000_0100_0000_0000)
        );
        assert_eq!(
            array.field(&array::EXTENDED_MAXIMUM_CAPACITY),
            FieldValue::Value(0x0000_0100_0000_0000)
        );
    }

    #[test]
    fn error_handle_sentinel() {
        let array = structure(16, 15, |f| {
            f[0x0b..0x0d].copy_from_slice(&0xfffeu16.to_le_bytes());
        });
        assert_eq!(
            array.field(&array::ERROR_INFORMATION_HANDLE),
            FieldValue::Unknown(0xfffe)
        );
    }

    #[test]
    fn device_size_unknown_and_extended() {
        let dimm = structure(17, 0x22, |f| {
            f[0x0c..0x0e].copy_from_slice(&0xffffu16.to_le_bytes());
        });
        assert_eq!(dimm.field(&device::SIZE), FieldValue::Unknown(0xffff));

        let dimm = structure(17, 0x22, |f| {
            f[0x0c..0x0e].copy_from_slice(&0x7fffu16.to_le_bytes());
            f[0x1c..0x20].copy_from_slice(&0x8001_0000u32.to_le_bytes());
        });
        // Bit 31 of the extended size is reserved.
        assert_eq!(dimm.field(&device::SIZE), FieldValue::Extended(0x0001_0000));

        let dimm = structure(17, 0x1c, |f| {
            f[0x0c..0x0e].copy_from_slice(&0x7fffu16.to_le_bytes());
        });
        assert_eq!(dimm.field(&device::SIZE), FieldValue::Value(0x7fff));
    }

    #[test]
    fn device_speed_extension() {
        let dimm = structure(17, 0x5c, |f| {
            f[0x15..0x17].copy_from_slice(&0xffffu16.to_le_bytes());
            f[0x54..0x58].copy_from_slice(&70_000u32.to_le_bytes());
        });
        assert_eq!(dimm.field(&device::SPEED), FieldValue::Extended(70_000));
        assert_eq!(
            dimm.field(&device::CONFIGURED_MEMORY_SPEED),
            FieldValue::Unknown(0)
        );
    }

    #[test]
    fn mapped_address_extension() {
        let mapping = structure(19, 0x1f, |f| {
            f[0x04..0x08].copy_from_slice(&u32::MAX.to_le_bytes());
            f[0x08..0x0c].copy_from_slice(&u32::MAX.to_le_bytes());
            f[0x0f..0x17].copy_from_slice(&0x1_0000_0000u64.to_le_bytes());
            f[0x17..0x1f].copy_from_slice(&0x4_ffff_ffffu64.to_le_bytes());
        });
        assert_eq!(
            mapping.field(&array_mapped::STARTING_ADDRESS),
            FieldValue::Extended(0x1_0000_0000)
        );
        assert_eq!(
            mapping.field(&array_mapped::ENDING_ADDRESS),
            FieldValue::Extended(0x4_ffff_ffff)
        );
    }
}
