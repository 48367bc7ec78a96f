const TYPE_NAMES: [&str; 47] = [
    "BIOS Information",
    "System Information",
    "Baseboard Information",
    "System Enclosure or Chassis",
    "Processor Information",
    "Memory Controller Information",
    "Memory Module Information",
    "Cache Information",
    "Port Connector Information",
    "System Slots",
    "On Board Devices Information",
    "OEM Strings",
    "System Configuration Options",
    "BIOS Language Information",
    "Group Associations",
    "System Event Log",
    "Physical Memory Array",
    "Memory Device",
    "32-Bit Memory Error Information",
    "Memory Array Mapped Address",
    "Memory Device Mapped Address",
    "Built-in Pointing Device",
    "Portable Battery",
    "System Reset",
    "Hardware Security",
    "System Power Controls",
    "Voltage Probe",
    "Cooling Device",
    "Temperature Probe",
    "Electrical Current Probe",
    "Out-of-band Remote Access",
    "Boot Integrity Services Entry Point",
    "System Boot Information",
    "64-Bit Memory Error Information",
    "Management Device",
    "Management Device Component",
    "Management Device Threshold Data",
    "Memory Channel",
    "IPMI Device Information",
    "System Power Supply",
    "Additional Information",
    "Onboard Devices Extended Information",
    "Management Controller Host Interface",
    "TPM Device",
    "Processor Additional Information",
    "Firmware Inventory Information",
    "String Property",
];

/// Name of a structure type as given in DSP0134.
///
/// # Examples
/// ```
/// use dmiscope_core::structures::type_name;
///
/// assert_eq!(type_name(17), "Memory Device");
/// assert_eq!(type_name(127), "End Of Table");
/// assert_eq!(type_name(0xc8), "OEM-specific");
/// assert_eq!(type_name(90), "Unknown");
/// ```
pub fn type_name(kind: u8) -> &'static str {
    match kind {
        126 => "Inactive",
        127 => "End Of Table",
        128..=255 => "OEM-specific",
        kind => TYPE_NAMES.get(usize::from(kind)).copied().unwrap_or("Unknown"),
    }
}

/// Look up `index` in a 1-based name table as DSP0134 enumerations are.
pub(crate) fn enumerated(table: &[&'static str], index: u8) -> &'static str {
    match index {
        0 => "Unknown",
        index => table
            .get(usize::from(index) - 1)
            .copied()
            .unwrap_or("Reserved"),
    }
}
