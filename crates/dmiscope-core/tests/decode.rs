mod common;

use dmiscope_core::fields::FieldValue;
use dmiscope_core::structures::{memory, processor};
use dmiscope_core::{EntryPointError, Termination, decode, decode_table, walk_structures};

use common::{SAMPLE_STRUCTURES, entry_point_32, entry_point_64, sample_table};

#[test]
fn decodes_sample_table_through_64_bit_entry_point() {
    let table = sample_table();
    let entry_point = entry_point_64(table.len()).encode();
    let result = decode(&entry_point, &table).expect("decode");

    assert!(result.is_complete());
    assert_eq!(result.structures.len(), SAMPLE_STRUCTURES);
    let names: Vec<&str> = result.structures.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec![
            "BIOS Information",
            "System Information",
            "Processor Information",
            "Physical Memory Array",
            "Memory Device",
            "Memory Device",
            "End Of Table",
        ]
    );

    let system = result.find_by_handle(0x0001).expect("system structure");
    assert_eq!(system.named_field("wake_up_type"), FieldValue::Value(6));
    assert_eq!(
        system.text(&dmiscope_core::structures::system::PRODUCT_NAME),
        Some("Widget 9000")
    );
    assert_eq!(system.text(&dmiscope_core::structures::system::VERSION), None);
    assert_eq!(result.structures_of_type(17).count(), 2);
}

#[test]
fn resolves_versioned_fields() {
    let table = sample_table();
    let result = decode_table(entry_point_64(table.len()), &table);

    let cpu = result.find_by_handle(0x0004).expect("processor");
    assert_eq!(cpu.field(&processor::PROCESSOR_FAMILY), FieldValue::Extended(0x0104));
    assert_eq!(cpu.field(&processor::CORE_COUNT), FieldValue::Extended(256));
    assert_eq!(cpu.field(&processor::THREAD_COUNT), FieldValue::Extended(512));
    assert_eq!(cpu.field(&processor::THREAD_ENABLED), FieldValue::Absent);
    assert_eq!(cpu.field(&processor::EXTERNAL_CLOCK), FieldValue::Unknown(0));

    let array = result.find_by_handle(0x1000).expect("memory array");
    assert_eq!(
        array.field(&memory::array::MAXIMUM_CAPACITY),
        FieldValue::Extended(0x0000_0100_0000_0000)
    );
    assert_eq!(
        array.field(&memory::array::ERROR_INFORMATION_HANDLE),
        FieldValue::Unknown(0xfffe)
    );

    let dimm = result.find_by_handle(0x1101).expect("memory device");
    assert_eq!(dimm.field(&memory::device::SIZE), FieldValue::Value(16384));
    assert_eq!(dimm.text(&memory::device::PART_NUMBER), Some("AM-16G"));
    assert_eq!(dimm.text(&memory::device::SERIAL_NUMBER), None);
    assert_eq!(dimm.field(&memory::device::MEMORY_TECHNOLOGY), FieldValue::Absent);
}

#[test]
fn short_memory_array_has_no_extended_capacity() {
    let mut table = common::memory_array(None);
    table.extend(common::end_of_table(1));
    let walk = walk_structures(&table, None);

    let array = &walk.structures[0];
    assert_eq!(array.header.length, 15);
    assert_eq!(
        array.field(&memory::array::MAXIMUM_CAPACITY),
        FieldValue::Value(0x0100_0000)
    );
    assert_eq!(
        array.field(&memory::array::EXTENDED_MAXIMUM_CAPACITY),
        FieldValue::Absent
    );
}

#[test]
fn structure_count_limits_32_bit_walk() {
    let table = sample_table();
    let result = decode_table(entry_point_32(table.len(), 3), &table);
    assert_eq!(result.termination, Termination::CountReached);
    assert_eq!(result.structures.len(), 3);
    assert!(!result.is_complete());

    let result = decode_table(entry_point_32(table.len(), 0), &table);
    assert_eq!(result.termination, Termination::EndOfTable);
}

#[test]
fn declared_length_limits_table() {
    let mut table = sample_table();
    let declared = table.len();
    table.extend_from_slice(&[0x01, 0x40, 0x00]);
    let result = decode_table(entry_point_32(declared, 0), &table);
    assert!(result.is_complete());
    assert_eq!(result.structures.len(), SAMPLE_STRUCTURES);
}

#[test]
fn missing_end_marker_is_exhausted() {
    let table = sample_table();
    let without_end = &table[..table.len() - 6];
    let result = decode_table(entry_point_64(without_end.len()), without_end);
    assert_eq!(result.termination, Termination::Exhausted);
    assert_eq!(result.structures.len(), SAMPLE_STRUCTURES - 1);
}

#[test]
fn inactive_structures_are_kept() {
    let mut table = common::structure(126, 0x0042, &[0xaa, 0xbb], &["old"]);
    table.extend(common::system());
    table.extend(common::end_of_table(0xfeff));
    let walk = walk_structures(&table, None);

    assert_eq!(walk.termination, Termination::EndOfTable);
    assert!(walk.structures[0].header.is_inactive());
    assert_eq!(walk.structures[0].name(), "Inactive");
    assert_eq!(walk.structures[0].strings, vec!["old".to_string()]);
    assert_eq!(walk.structures[1].kind(), 1);
}

#[test]
fn header_below_minimum_length_is_malformed() {
    let mut table = common::system();
    let offset = table.len();
    table.extend_from_slice(&[0x02, 0x03, 0x05, 0x00, 0x00, 0x00]);
    let walk = walk_structures(&table, None);
    assert_eq!(
        walk.termination,
        Termination::MalformedStructure { offset, length: 3 }
    );
    assert_eq!(walk.structures.len(), 1);
}

#[test]
fn corrupted_entry_point_fails_decode() {
    let table = sample_table();
    let mut entry_point = entry_point_32(table.len(), 0).encode();
    entry_point[0x18] ^= 0x01;
    let err = decode(&entry_point, &table).unwrap_err();
    assert!(matches!(err, EntryPointError::ChecksumMismatch { .. }));
}
