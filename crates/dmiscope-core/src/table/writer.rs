use super::layout;
use super::structure::Structure;

/// Serialize structures back into the raw table wire form.
///
/// Each structure contributes its formatted bytes, then each string followed
/// by a NUL and one closing NUL; an empty string table is two NUL bytes.
/// Walking the output yields the same structures.
///
/// # Examples
/// ```
/// use dmiscope_core::{encode_table, walk_structures};
///
/// let table = [0x01, 0x04, 0x01, 0x00, b'X', 0x00, 0x00, 0x7f, 0x04, 0x02, 0x00, 0x00, 0x00];
/// let walk = walk_structures(&table, None);
/// assert_eq!(encode_table(&walk.structures), table.to_vec());
/// ```
pub fn encode_table(structures: &[Structure]) -> Vec<u8> {
    let mut out = Vec::new();
    for structure in structures {
        out.extend_from_slice(&structure.formatted);
        if structure.strings.is_empty() {
            out.extend_from_slice(&[layout::STRING_TERMINATOR; layout::EMPTY_STRING_TABLE_LEN]);
            continue;
        }
        for string in &structure.strings {
            out.extend_from_slice(string.as_bytes());
            out.push(layout::STRING_TERMINATOR);
        }
        out.push(layout::STRING_TERMINATOR);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::encode_table;
    use crate::table::parser::walk_structures;

    #[test]
    fn reencode_normalizes_trailing_garbage() {
        // The end marker's own string table is not read by the walker, so the
        // stray bytes after it are not carried over.
        let table = [0x7f, 0x04, 0x00, 0x00, 0x41, 0x42, 0x00];
        let walk = walk_structures(&table, None);
        let encoded = encode_table(&walk.structures);
        assert_eq!(encoded, vec![0x7f, 0x04, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(walk_structures(&encoded, None), walk);
    }
}
