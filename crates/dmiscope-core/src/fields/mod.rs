//! Versioned field resolution.
//!
//! Structures grow across SMBIOS revisions, so a field exists only when the
//! formatted section is long enough to hold it. Some narrow fields use a
//! reserved value to say "see the wider field"; others use the same kind of
//! value only to say "unknown". Each [`FieldDescriptor`] states which rule
//! applies, and [`resolve`] is the single place that evaluates them.

pub mod descriptor;
pub mod reader;
pub mod resolver;

pub use descriptor::{FieldDescriptor, FieldKind, FieldWidth, Overflow};
pub use resolver::{FieldValue, resolve};
