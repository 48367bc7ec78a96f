/// Wire width of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    Byte,
    Word,
    Dword,
    Qword,
}

impl FieldWidth {
    pub const fn bytes(self) -> usize {
        match self {
            FieldWidth::Byte => 1,
            FieldWidth::Word => 2,
            FieldWidth::Dword => 4,
            FieldWidth::Qword => 8,
        }
    }

    pub const fn full_mask(self) -> u64 {
        match self {
            FieldWidth::Byte => 0xff,
            FieldWidth::Word => 0xffff,
            FieldWidth::Dword => 0xffff_ffff,
            FieldWidth::Qword => u64::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    /// 1-based index into the structure's string table.
    StringRef,
}

/// A narrow field's escape to a wider field.
#[derive(Debug, Clone, Copy)]
pub struct Overflow {
    /// Narrow value that defers to `field`.
    pub trigger: u64,
    pub field: &'static FieldDescriptor,
}

/// Location and resolution rules of one formatted-section field.
///
/// Offsets are from the start of the structure, header included, as in
/// DSP0134.
///
/// # Examples
/// ```
/// use dmiscope_core::fields::{FieldDescriptor, FieldValue, resolve};
///
/// const WIDE: FieldDescriptor = FieldDescriptor::dword("wide", 0x06);
/// const NARROW: FieldDescriptor = FieldDescriptor::word("narrow", 0x04).overflow_when(0xffff, &WIDE);
///
/// let formatted = [0x00, 0x0a, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x01, 0x00];
/// assert_eq!(resolve(&formatted, &NARROW), FieldValue::Extended(0x0001_0000));
/// assert_eq!(resolve(&formatted[..6], &NARROW), FieldValue::Value(0xffff));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub offset: usize,
    pub width: FieldWidth,
    pub kind: FieldKind,
    /// Bits kept from the raw value before any comparison.
    pub mask: u64,
    /// Value meaning "unknown" with no wider field behind it.
    pub unknown: Option<u64>,
    pub overflow: Option<Overflow>,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, offset: usize, width: FieldWidth) -> Self {
        Self {
            name,
            offset,
            width,
            kind: FieldKind::Integer,
            mask: width.full_mask(),
            unknown: None,
            overflow: None,
        }
    }

    pub const fn byte(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, FieldWidth::Byte)
    }

    pub const fn word(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, FieldWidth::Word)
    }

    pub const fn dword(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, FieldWidth::Dword)
    }

    pub const fn qword(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, FieldWidth::Qword)
    }

    pub const fn string(name: &'static str, offset: usize) -> Self {
        let mut descriptor = Self::byte(name, offset);
        descriptor.kind = FieldKind::StringRef;
        descriptor
    }

    pub const fn unknown_when(mut self, value: u64) -> Self {
        self.unknown = Some(value);
        self
    }

    pub const fn overflow_when(mut self, trigger: u64, field: &'static FieldDescriptor) -> Self {
        self.overflow = Some(Overflow { trigger, field });
        self
    }

    pub const fn masked(mut self, mask: u64) -> Self {
        self.mask = mask;
        self
    }

    /// Smallest structure length that holds this field.
    pub const fn min_length(&self) -> usize {
        self.offset + self.width.bytes()
    }
}
