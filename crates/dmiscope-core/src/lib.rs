//! dmiscope core library for decoding SMBIOS firmware tables.
//!
//! The decoder is layered the way the tables are: an entry point announces
//! where the structure table lives, the walker splits the table into
//! length-delimited structures with their string tables, and per-type field
//! descriptors resolve values across SMBIOS revisions. Decoding is
//! byte-oriented and side-effect free; all file access is isolated in
//! `source`, and results are summarized into a deterministic report.
//!
//! Invariants:
//! - Entry point failures are errors; table anomalies end the walk and are
//!   reported through [`Termination`].
//! - Decoded structures own their bytes and never borrow the input buffer.
//! - A field is only read when the structure is long enough to hold it.
//!
//! # Examples
//! ```no_run
//! use dmiscope_core::{SysfsSource, build_report, decode_source};
//!
//! let result = decode_source(&mut SysfsSource::default())?;
//! let report = build_report(&result, "/sys/firmware/dmi/tables", 0);
//! println!("{} structures", report.structures.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod dump;
pub mod entry_point;
pub mod fields;
mod report;
pub mod source;
pub mod structures;
pub mod table;

pub use dump::{Dump, DumpError, parse_dump, write_dump};
pub use entry_point::{
    EntryPoint, EntryPoint32, EntryPoint64, EntryPointError, EntryPointKind, SmbiosVersion,
    decode_entry_point, find_entry_point,
};
pub use fields::{FieldDescriptor, FieldValue};
pub use report::build_report;
pub use source::{
    DecodeError, DumpFileSource, MemoryImageSource, RawTables, SourceError, SysfsSource,
    TableSource, decode_source,
};
pub use table::{
    DecodeResult, Structure, StructureHeader, Termination, Walk, decode, decode_table,
    encode_table, scan_strings, walk_structures,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the caller does not supply one.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoded table report with structures in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,

    pub input: InputInfo,

    pub entry_point: EntryPointSummary,
    /// How the table walk ended (`end_of_table`, `exhausted`, ...).
    pub termination: String,
    /// Byte offset of the offending header for malformed or truncated walks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_offset: Option<usize>,
    /// Whether the walk ended on the end-of-table structure.
    pub complete: bool,
    pub structures: Vec<StructureSummary>,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use dmiscope_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "dmiscope".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "dmiscope");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes (entry point plus table for sysfs inputs).
    pub bytes: u64,
}

/// Entry point facts in report form.
///
/// # Examples
/// ```
/// use dmiscope_core::EntryPointSummary;
///
/// let summary = EntryPointSummary {
///     kind: "64-bit".to_string(),
///     version: "3.4.0".to_string(),
///     table_address: 0x7ae0_0000,
///     table_length: 0x1000,
///     structure_count: None,
/// };
/// let json = serde_json::to_string(&summary).unwrap();
/// assert!(!json.contains("structure_count"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPointSummary {
    /// `32-bit` or `64-bit`.
    pub kind: String,
    pub version: String,
    pub table_address: u64,
    /// Exact length (32-bit) or maximum size (64-bit).
    pub table_length: u32,
    /// Structure count announced by a 32-bit entry point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_count: Option<u16>,
}

/// One structure in report form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureSummary {
    pub handle: u16,
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    /// Formatted section length, header included.
    pub length: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strings: Vec<String>,
    /// Known fields present in this structure; absent fields are omitted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
}

/// One resolved field.
///
/// # Examples
/// ```
/// use dmiscope_core::FieldSummary;
///
/// let field = FieldSummary {
///     name: "vendor".to_string(),
///     state: "value".to_string(),
///     value: Some(1),
///     text: Some("Acme".to_string()),
/// };
/// assert_eq!(field.text.as_deref(), Some("Acme"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSummary {
    pub name: String,
    /// `value`, `extended` or `unknown`.
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    /// Resolved text of a string-reference field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_omits_optional_fields_when_none() {
        let report = Report {
            report_version: REPORT_VERSION,
            tool: ToolInfo {
                name: "dmiscope".to_string(),
                version: "0.1.0".to_string(),
            },
            generated_at: DEFAULT_GENERATED_AT.to_string(),
            input: InputInfo {
                path: "/sys/firmware/dmi/tables".to_string(),
                bytes: 30,
            },
            entry_point: EntryPointSummary {
                kind: "64-bit".to_string(),
                version: "3.0.0".to_string(),
                table_address: 0,
                table_length: 6,
                structure_count: None,
            },
            termination: "end_of_table".to_string(),
            termination_offset: None,
            complete: true,
            structures: vec![StructureSummary {
                handle: 0,
                kind: 127,
                name: "End Of Table".to_string(),
                length: 4,
                strings: Vec::new(),
                fields: vec![FieldSummary {
                    name: "speed".to_string(),
                    state: "unknown".to_string(),
                    value: Some(0),
                    text: None,
                }],
                flags: Vec::new(),
            }],
        };

        let value = serde_json::to_value(&report).expect("serialize report");
        assert!(value.get("termination_offset").is_none());
        assert!(value["entry_point"].get("structure_count").is_none());

        let structure = &value["structures"][0];
        assert_eq!(structure["type"], 127);
        assert!(structure.get("kind").is_none());
        assert!(structure.get("strings").is_none());
        assert!(structure.get("flags").is_none());
        assert!(structure["fields"][0].get("text").is_none());
    }

    #[test]
    fn report_deserializes_without_optional_lists() {
        let json = r#"{"handle":1,"type":1,"name":"System Information","length":8}"#;
        let structure: StructureSummary = serde_json::from_str(json).expect("parse");
        assert!(structure.fields.is_empty());
        assert_eq!(structure.kind, 1);
    }
}
