use super::descriptor::FieldDescriptor;
use super::reader::FieldReader;

/// Outcome of resolving one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// The structure is too short to hold the field.
    Absent,
    /// The field holds its "unknown" value (kept raw).
    Unknown(u64),
    Value(u64),
    /// The narrow field deferred to its wider overflow field.
    Extended(u64),
}

impl FieldValue {
    /// Authoritative value, if known.
    pub fn get(self) -> Option<u64> {
        match self {
            FieldValue::Value(value) | FieldValue::Extended(value) => Some(value),
            FieldValue::Absent | FieldValue::Unknown(_) => None,
        }
    }

    /// Raw value with absent fields read as zero.
    pub fn raw_or_zero(self) -> u64 {
        match self {
            FieldValue::Absent => 0,
            FieldValue::Unknown(value) | FieldValue::Value(value) | FieldValue::Extended(value) => {
                value
            }
        }
    }

    pub fn is_present(self) -> bool {
        self != FieldValue::Absent
    }

    pub fn state(self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::Unknown(_) => "unknown",
            FieldValue::Value(_) => "value",
            FieldValue::Extended(_) => "extended",
        }
    }
}

/// Resolve `field` against a formatted section (header included).
///
/// A field outside the section is `Absent`. A narrow value equal to its
/// overflow trigger yields the overflow field's value when that field is
/// present, and the literal narrow value when it is not. A value equal to
/// the field's unknown marker is `Unknown`.
pub fn resolve(formatted: &[u8], field: &FieldDescriptor) -> FieldValue {
    let reader = FieldReader::new(formatted);
    let Some(raw) = reader.read(field.offset, field.width) else {
        return FieldValue::Absent;
    };
    let raw = raw & field.mask;

    if let Some(overflow) = field.overflow {
        if raw == overflow.trigger {
            match resolve(formatted, overflow.field) {
                FieldValue::Absent => {}
                FieldValue::Unknown(value) => return FieldValue::Unknown(value),
                FieldValue::Value(value) | FieldValue::Extended(value) => {
                    return FieldValue::Extended(value);
                }
            }
        }
    }

    if field.unknown == Some(raw) {
        return FieldValue::Unknown(raw);
    }
    FieldValue::Value(raw)
}
