use crate::entry_point::{EntryPoint, EntryPointError, decode_entry_point};

use super::layout;
use super::reader::TableReader;
use super::strings::scan_strings;
use super::structure::Structure;

/// Why a table walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The type 127 end-of-table structure was consumed.
    EndOfTable,
    /// Fewer than a header's worth of bytes remained.
    Exhausted,
    /// The entry point's structure count was reached.
    CountReached,
    /// A header declared a length below the header size.
    MalformedStructure { offset: usize, length: u8 },
    /// A header declared more bytes than the table holds.
    TruncatedStructure { offset: usize, length: u8 },
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::EndOfTable => "end_of_table",
            Termination::Exhausted => "exhausted",
            Termination::CountReached => "count_reached",
            Termination::MalformedStructure { .. } => "malformed_structure",
            Termination::TruncatedStructure { .. } => "truncated_structure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub structures: Vec<Structure>,
    pub termination: Termination,
}

/// Entry point plus the structures walked from its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    pub entry_point: EntryPoint,
    pub structures: Vec<Structure>,
    pub termination: Termination,
}

impl DecodeResult {
    /// Whether the walk ended on the end-of-table structure.
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::EndOfTable
    }

    pub fn find_by_handle(&self, handle: u16) -> Option<&Structure> {
        self.structures
            .iter()
            .find(|structure| structure.handle() == handle)
    }

    pub fn structures_of_type(&self, kind: u8) -> impl Iterator<Item = &Structure> {
        self.structures
            .iter()
            .filter(move |structure| structure.kind() == kind)
    }
}

/// Split a raw table into structures.
///
/// `count_hint` is the 32-bit entry point's structure count; `None` or zero
/// walks until the end-of-table structure or the end of `table`. Never
/// fails: anomalies end the walk and are reported in [`Walk::termination`].
///
/// # Examples
/// ```
/// use dmiscope_core::{Termination, walk_structures};
///
/// let table = [
///     0x01, 0x04, 0x01, 0x00, b'X', 0x00, 0x00, // type 1, one string
///     0x7f, 0x04, 0x02, 0x00, 0x00, 0x00,       // end of table
/// ];
/// let walk = walk_structures(&table, None);
/// assert_eq!(walk.structures.len(), 2);
/// assert_eq!(walk.structures[0].strings, vec!["X".to_string()]);
/// assert_eq!(walk.termination, Termination::EndOfTable);
/// ```
pub fn walk_structures(table: &[u8], count_hint: Option<u16>) -> Walk {
    let reader = TableReader::new(table);
    let limit = count_hint.filter(|count| *count != 0).map(usize::from);
    let mut structures = Vec::new();
    let mut offset = 0usize;

    let termination = loop {
        let Some(header) = reader.read_header(offset) else {
            break Termination::Exhausted;
        };

        if header.is_end_of_table() {
            let length = usize::from(header.length).max(layout::HEADER_LEN);
            let Some(formatted) = reader.read_slice(offset..offset + length) else {
                break Termination::TruncatedStructure {
                    offset,
                    length: header.length,
                };
            };
            structures.push(Structure {
                header,
                formatted: formatted.to_vec(),
                strings: Vec::new(),
            });
            break Termination::EndOfTable;
        }

        let length = usize::from(header.length);
        if length < layout::HEADER_LEN {
            break Termination::MalformedStructure {
                offset,
                length: header.length,
            };
        }
        let Some(formatted) = reader.read_slice(offset..offset + length) else {
            break Termination::TruncatedStructure {
                offset,
                length: header.length,
            };
        };

        let (strings, next) = scan_strings(reader.bytes(), offset + length);
        structures.push(Structure {
            header,
            formatted: formatted.to_vec(),
            strings,
        });
        offset = next;

        if limit.is_some_and(|limit| structures.len() >= limit) {
            break Termination::CountReached;
        }
    };

    if termination != Termination::EndOfTable {
        tracing::debug!(
            structures = structures.len(),
            trailing = reader.remaining(offset),
            termination = termination.as_str(),
            "structure table walk ended before end-of-table"
        );
    }

    Walk {
        structures,
        termination,
    }
}

/// Walk `table` as announced by `entry_point`.
///
/// The table is limited to the announced length when the buffer is longer,
/// and the 32-bit structure count is used as the walk hint. A zero length
/// means "no limit".
pub fn decode_table(entry_point: EntryPoint, table: &[u8]) -> DecodeResult {
    let table = match entry_point.table_len() as usize {
        0 => table,
        declared => &table[..declared.min(table.len())],
    };
    let walk = walk_structures(table, entry_point.structure_count_hint());
    DecodeResult {
        entry_point,
        structures: walk.structures,
        termination: walk.termination,
    }
}

/// Decode an entry point and walk its table.
///
/// # Errors
/// Only entry point failures are errors; table anomalies shorten the result.
pub fn decode(entry_point: &[u8], table: &[u8]) -> Result<DecodeResult, EntryPointError> {
    let entry_point = decode_entry_point(entry_point)?;
    Ok(decode_table(entry_point, table))
}
