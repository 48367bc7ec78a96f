#![allow(dead_code)]

use dmiscope_core::{EntryPoint, EntryPoint32, EntryPoint64};

pub const TABLE_ADDRESS: u64 = 0x000e_0000;

/// One raw structure: header, formatted body and string table.
pub fn structure(kind: u8, handle: u16, body: &[u8], strings: &[&str]) -> Vec<u8> {
    let length = u8::try_from(4 + body.len()).expect("formatted section fits in a byte");
    let mut out = vec![kind, length];
    out.extend_from_slice(&handle.to_le_bytes());
    out.extend_from_slice(body);
    if strings.is_empty() {
        out.extend_from_slice(&[0, 0]);
    } else {
        for string in strings {
            out.extend_from_slice(string.as_bytes());
            out.push(0);
        }
        out.push(0);
    }
    out
}

pub fn end_of_table(handle: u16) -> Vec<u8> {
    structure(127, handle, &[], &[])
}

/// Body bytes for a formatted section of `length` bytes, header included,
/// with the given (offset, bytes) patches applied.
pub fn body(length: usize, patches: &[(usize, &[u8])]) -> Vec<u8> {
    let mut formatted = vec![0u8; length];
    for (offset, bytes) in patches {
        formatted[*offset..*offset + bytes.len()].copy_from_slice(bytes);
    }
    formatted.split_off(4)
}

pub fn bios() -> Vec<u8> {
    structure(
        0,
        0x0000,
        &body(
            0x18,
            &[
                (0x04, &[1, 2]),
                (0x06, &0xe800u16.to_le_bytes()),
                (0x08, &[3, 0xff]),
                (0x0a, &(1u64 << 7 | 1 << 11).to_le_bytes()),
                (0x14, &[5, 17, 0xff, 0xff]),
            ],
        ),
        &["Acme BIOS Ltd", "1.2.3", "03/14/2024"],
    )
}

pub fn system() -> Vec<u8> {
    structure(
        1,
        0x0001,
        &body(0x1b, &[(0x04, &[1, 2, 0, 3]), (0x18, &[6, 0, 4])]),
        &["Acme", "Widget 9000", "SN-0001", "Widgets"],
    )
}

pub fn processor() -> Vec<u8> {
    structure(
        4,
        0x0004,
        &body(
            0x30,
            &[
                (0x04, &[1, 3, 0xfe, 2]),
                (0x14, &4800u16.to_le_bytes()),
                (0x16, &3200u16.to_le_bytes()),
                (0x18, &[0x41]),
                (0x23, &[0xff, 0xff, 0xff]),
                (0x28, &0x0104u16.to_le_bytes()),
                (0x2a, &256u16.to_le_bytes()),
                (0x2c, &256u16.to_le_bytes()),
                (0x2e, &512u16.to_le_bytes()),
            ],
        ),
        &["CPU0", "Acme Silicon"],
    )
}

pub fn memory_array(extended: Option<u64>) -> Vec<u8> {
    let capacity: u32 = if extended.is_some() { 0x8000_0000 } else { 0x0100_0000 };
    let mut patches: Vec<(usize, &[u8])> = Vec::new();
    let capacity_bytes = capacity.to_le_bytes();
    let devices = 2u16.to_le_bytes();
    let error_handle = 0xfffeu16.to_le_bytes();
    let extended_bytes = extended.unwrap_or(0).to_le_bytes();
    patches.push((0x04, &[3, 3, 3]));
    patches.push((0x07, &capacity_bytes));
    patches.push((0x0b, &error_handle));
    patches.push((0x0d, &devices));
    let length = if extended.is_some() {
        patches.push((0x0f, &extended_bytes));
        23
    } else {
        15
    };
    structure(16, 0x1000, &body(length, &patches), &[])
}

pub fn memory_device(handle: u16) -> Vec<u8> {
    structure(
        17,
        handle,
        &body(
            0x28,
            &[
                (0x04, &0x1000u16.to_le_bytes()),
                (0x06, &0xfffeu16.to_le_bytes()),
                (0x08, &64u16.to_le_bytes()),
                (0x0a, &64u16.to_le_bytes()),
                (0x0c, &16384u16.to_le_bytes()),
                (0x0e, &[0x09, 0, 1, 2, 0x1a]),
                (0x15, &4800u16.to_le_bytes()),
                (0x17, &[3, 0, 0, 4]),
            ],
        ),
        &["DIMM 0", "BANK 0", "Acme Memory", "AM-16G"],
    )
}

pub fn sample_table() -> Vec<u8> {
    let mut table = Vec::new();
    table.extend(bios());
    table.extend(system());
    table.extend(processor());
    table.extend(memory_array(Some(0x0000_0100_0000_0000)));
    table.extend(memory_device(0x1100));
    table.extend(memory_device(0x1101));
    table.extend(end_of_table(0xfeff));
    table
}

pub const SAMPLE_STRUCTURES: usize = 7;

pub fn entry_point_64(table_len: usize) -> EntryPoint {
    EntryPoint::SixtyFourBit(EntryPoint64 {
        major: 3,
        minor: 4,
        docrev: 0,
        entry_point_revision: 1,
        table_max_size: table_len as u32,
        table_address: TABLE_ADDRESS,
    })
}

pub fn entry_point_32(table_len: usize, structure_count: u16) -> EntryPoint {
    EntryPoint::ThirtyTwoBit(EntryPoint32 {
        major: 2,
        minor: 8,
        max_structure_size: 0x60,
        entry_point_revision: 0,
        formatted_area: [0; 5],
        table_length: table_len as u16,
        table_address: TABLE_ADDRESS as u32,
        structure_count,
        bcd_revision: 0x28,
    })
}
