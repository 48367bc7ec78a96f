use crate::fields::{FieldKind, FieldValue};
use crate::structures::describe_flags;
use crate::table::{DecodeResult, Structure, Termination};
use crate::{
    DEFAULT_GENERATED_AT, EntryPointSummary, FieldSummary, InputInfo, REPORT_VERSION, Report,
    StructureSummary, ToolInfo,
};

/// Summarize a decode result into a report.
///
/// `generated_at` is left at [`DEFAULT_GENERATED_AT`] so the output is
/// deterministic; callers stamp the real time.
///
/// # Examples
/// ```
/// use dmiscope_core::{build_report, walk_structures};
/// # use dmiscope_core::{DecodeResult, EntryPoint, EntryPoint64};
/// # let entry_point = EntryPoint::SixtyFourBit(EntryPoint64 {
/// #     major: 3, minor: 0, docrev: 0, entry_point_revision: 1,
/// #     table_max_size: 6, table_address: 0,
/// # });
/// let walk = walk_structures(&[0x7f, 0x04, 0x00, 0x00, 0x00, 0x00], None);
/// let result = DecodeResult { entry_point, structures: walk.structures, termination: walk.termination };
/// let report = build_report(&result, "DMI", 6);
/// assert!(report.complete);
/// assert_eq!(report.structures[0].name, "End Of Table");
/// ```
pub fn build_report(result: &DecodeResult, input_path: &str, input_bytes: u64) -> Report {
    let entry_point = &result.entry_point;
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "dmiscope".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        entry_point: EntryPointSummary {
            kind: entry_point.kind().as_str().to_string(),
            version: entry_point.version().to_string(),
            table_address: entry_point.table_address(),
            table_length: entry_point.table_len(),
            structure_count: entry_point.structure_count_hint(),
        },
        termination: result.termination.as_str().to_string(),
        termination_offset: match result.termination {
            Termination::MalformedStructure { offset, .. }
            | Termination::TruncatedStructure { offset, .. } => Some(offset),
            _ => None,
        },
        complete: result.is_complete(),
        structures: result.structures.iter().map(summarize_structure).collect(),
    }
}

fn summarize_structure(structure: &Structure) -> StructureSummary {
    StructureSummary {
        handle: structure.handle(),
        kind: structure.kind(),
        name: structure.name().to_string(),
        length: structure.header.length,
        strings: structure.strings.clone(),
        fields: structure
            .descriptors()
            .iter()
            .filter_map(|descriptor| {
                let value = structure.field(descriptor);
                if !value.is_present() {
                    return None;
                }
                let text = match descriptor.kind {
                    FieldKind::StringRef => structure.text(descriptor).map(str::to_string),
                    FieldKind::Integer => None,
                };
                Some(FieldSummary {
                    name: descriptor.name.to_string(),
                    state: value.state().to_string(),
                    value: match value {
                        FieldValue::Absent => None,
                        other => Some(other.raw_or_zero()),
                    },
                    text,
                })
            })
            .collect(),
        flags: describe_flags(structure),
    }
}

#[cfg(test)]
mod tests {
    use super::build_report;
    use crate::entry_point::{EntryPoint, EntryPoint32};
    use crate::table::{DecodeResult, walk_structures};

    fn entry_point() -> EntryPoint {
        EntryPoint::ThirtyTwoBit(EntryPoint32 {
            major: 2,
            minor: 8,
            max_structure_size: 0x20,
            entry_point_revision: 0,
            formatted_area: [0; 5],
            table_length: 0,
            table_address: 0x000e_b000,
            structure_count: 3,
            bcd_revision: 0x28,
        })
    }

    fn result(table: &[u8]) -> DecodeResult {
        let walk = walk_structures(table, None);
        DecodeResult {
            entry_point: entry_point(),
            structures: walk.structures,
            termination: walk.termination,
        }
    }

    #[test]
    fn report_lists_fields_with_text() {
        let mut table = vec![0x00, 0x12, 0x00, 0x00, 0x01, 0x02, 0x00, 0xe0, 0x00, 0x00];
        table.extend_from_slice(&(1u64 << 7).to_le_bytes());
        table.extend_from_slice(b"Acme\0v1.0\0\0");
        table.extend_from_slice(&[0x7f, 0x04, 0x01, 0x00, 0x00, 0x00]);

        let report = build_report(&result(&table), "DMI", table.len() as u64);
        assert!(report.complete);
        assert_eq!(report.entry_point.kind, "32-bit");
        assert_eq!(report.entry_point.version, "2.8");
        assert_eq!(report.entry_point.structure_count, Some(3));

        let bios = &report.structures[0];
        assert_eq!(bios.name, "BIOS Information");
        assert_eq!(bios.strings, vec!["Acme".to_string(), "v1.0".to_string()]);
        let vendor = &bios.fields[0];
        assert_eq!(vendor.name, "vendor");
        assert_eq!(vendor.text.as_deref(), Some("Acme"));
        // Release date index 0 has no text.
        let release_date = bios
            .fields
            .iter()
            .find(|field| field.name == "release_date")
            .expect("release date");
        assert_eq!(release_date.text, None);
        assert_eq!(release_date.value, Some(0));
        // Fields past 0x12 are absent and omitted.
        assert!(bios.fields.iter().all(|field| field.name != "system_bios_major_release"));
        assert_eq!(bios.flags, vec!["PCI is supported".to_string()]);
    }

    #[test]
    fn truncated_walk_reports_offset() {
        let table = [0x01, 0x04, 0x01, 0x00, 0x00, 0x00, 0x02, 0x20, 0x02, 0x00];
        let report = build_report(&result(&table), "DMI", table.len() as u64);
        assert!(!report.complete);
        assert_eq!(report.termination, "truncated_structure");
        assert_eq!(report.termination_offset, Some(6));
        assert_eq!(report.structures.len(), 1);
    }
}
