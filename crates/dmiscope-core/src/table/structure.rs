use crate::fields::{FieldDescriptor, FieldKind, FieldValue, resolve};
use crate::structures;

use super::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureHeader {
    /// Structure type code.
    pub kind: u8,
    /// Size of the formatted section, header included.
    pub length: u8,
    /// Document-local identifier.
    pub handle: u16,
}

impl StructureHeader {
    pub fn is_end_of_table(&self) -> bool {
        self.kind == layout::END_OF_TABLE
    }

    pub fn is_inactive(&self) -> bool {
        self.kind == layout::INACTIVE
    }
}

/// One decoded structure: header, formatted bytes and string table.
///
/// # Examples
/// ```
/// use dmiscope_core::walk_structures;
///
/// let table = [0x7f, 0x04, 0xff, 0xfe, 0x00, 0x00];
/// let walk = walk_structures(&table, None);
/// let end = &walk.structures[0];
/// assert!(end.header.is_end_of_table());
/// assert_eq!(end.string(1), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub header: StructureHeader,
    /// Exactly `header.length` bytes, header included. An end marker that
    /// declares less than a header still keeps the 4 header bytes.
    pub formatted: Vec<u8>,
    pub strings: Vec<String>,
}

impl Structure {
    pub fn kind(&self) -> u8 {
        self.header.kind
    }

    pub fn handle(&self) -> u16 {
        self.header.handle
    }

    pub fn name(&self) -> &'static str {
        structures::type_name(self.header.kind)
    }

    /// Formatted bytes after the 4-byte header.
    pub fn data(&self) -> &[u8] {
        self.formatted.get(layout::HEADER_LEN..).unwrap_or(&[])
    }

    /// Resolve a 1-based string index. Index 0 and out-of-range indices
    /// resolve to an empty string.
    pub fn string(&self, index: u8) -> &str {
        match index {
            0 => "",
            index => self
                .strings
                .get(usize::from(index) - 1)
                .map_or("", String::as_str),
        }
    }

    pub fn field(&self, descriptor: &FieldDescriptor) -> FieldValue {
        resolve(&self.formatted, descriptor)
    }

    /// Text of a string-reference field; `None` when the field is absent,
    /// not a string reference, or resolves to an empty string.
    pub fn text(&self, descriptor: &FieldDescriptor) -> Option<&str> {
        if descriptor.kind != FieldKind::StringRef {
            return None;
        }
        let index = self.field(descriptor).get()?;
        let text = self.string(u8::try_from(index).ok()?);
        if text.is_empty() { None } else { Some(text) }
    }

    /// Field descriptors known for this structure's type.
    pub fn descriptors(&self) -> &'static [FieldDescriptor] {
        structures::descriptors(self.header.kind)
    }

    /// Look up a known field by name.
    pub fn named_field(&self, name: &str) -> FieldValue {
        self.descriptors()
            .iter()
            .find(|descriptor| descriptor.name == name)
            .map_or(FieldValue::Absent, |descriptor| self.field(descriptor))
    }
}
