//! Per-type field tables, names and bit-field value types.
//!
//! Each structure type is data: a static slice of [`FieldDescriptor`]s
//! evaluated by the shared resolver. Types without a table still decode;
//! they simply expose no named fields.

pub mod bios;
pub mod cache;
pub mod memory;
pub mod names;
pub mod power;
pub mod probe;
pub mod processor;
pub mod system;

use crate::fields::FieldDescriptor;
use crate::table::Structure;

pub use names::type_name;

/// Descriptor table for a structure type; empty for types without one.
///
/// # Examples
/// ```
/// use dmiscope_core::structures::descriptors;
///
/// let array = descriptors(16);
/// assert!(array.iter().any(|field| field.name == "extended_maximum_capacity"));
/// assert!(descriptors(200).is_empty());
/// ```
pub fn descriptors(kind: u8) -> &'static [FieldDescriptor] {
    match kind {
        0 => bios::FIELDS,
        1 => system::SYSTEM_FIELDS,
        2 => system::BASEBOARD_FIELDS,
        4 => processor::FIELDS,
        7 => cache::FIELDS,
        16 => memory::PHYSICAL_MEMORY_ARRAY_FIELDS,
        17 => memory::MEMORY_DEVICE_FIELDS,
        19 => memory::ARRAY_MAPPED_ADDRESS_FIELDS,
        20 => memory::DEVICE_MAPPED_ADDRESS_FIELDS,
        26 | 28 | 29 => probe::FIELDS,
        39 => power::FIELDS,
        _ => &[],
    }
}

/// Human-readable flags decoded from a structure's bit fields.
pub fn describe_flags(structure: &Structure) -> Vec<String> {
    match structure.kind() {
        0 => bios::describe(structure),
        4 => processor::describe(structure),
        7 => cache::describe(structure),
        26 | 28 | 29 => probe::describe(structure),
        _ => Vec::new(),
    }
}
