//! BIOS Information (type 0).

use crate::fields::FieldDescriptor;
use crate::table::Structure;

pub const VENDOR: FieldDescriptor = FieldDescriptor::string("vendor", 0x04);
pub const BIOS_VERSION: FieldDescriptor = FieldDescriptor::string("bios_version", 0x05);
pub const STARTING_SEGMENT: FieldDescriptor = FieldDescriptor::word("starting_segment", 0x06);
pub const RELEASE_DATE: FieldDescriptor = FieldDescriptor::string("release_date", 0x08);
/// 64 KiB * (n + 1); 0xFF defers to the extended size (SMBIOS 3.1).
pub const ROM_SIZE: FieldDescriptor =
    FieldDescriptor::byte("rom_size", 0x09).overflow_when(0xff, &EXTENDED_ROM_SIZE);
pub const CHARACTERISTICS: FieldDescriptor = FieldDescriptor::qword("characteristics", 0x0a);
pub const CHARACTERISTICS_EXT1: FieldDescriptor =
    FieldDescriptor::byte("characteristics_ext1", 0x12);
pub const CHARACTERISTICS_EXT2: FieldDescriptor =
    FieldDescriptor::byte("characteristics_ext2", 0x13);
pub const SYSTEM_BIOS_MAJOR_RELEASE: FieldDescriptor =
    FieldDescriptor::byte("system_bios_major_release", 0x14).unknown_when(0xff);
pub const SYSTEM_BIOS_MINOR_RELEASE: FieldDescriptor =
    FieldDescriptor::byte("system_bios_minor_release", 0x15).unknown_when(0xff);
pub const EC_FIRMWARE_MAJOR_RELEASE: FieldDescriptor =
    FieldDescriptor::byte("ec_firmware_major_release", 0x16).unknown_when(0xff);
pub const EC_FIRMWARE_MINOR_RELEASE: FieldDescriptor =
    FieldDescriptor::byte("ec_firmware_minor_release", 0x17).unknown_when(0xff);
/// Bits 13:0 size, bits 15:14 unit (MiB, GiB).
pub const EXTENDED_ROM_SIZE: FieldDescriptor = FieldDescriptor::word("extended_rom_size", 0x18);

pub static FIELDS: &[FieldDescriptor] = &[
    VENDOR,
    BIOS_VERSION,
    STARTING_SEGMENT,
    RELEASE_DATE,
    ROM_SIZE,
    CHARACTERISTICS,
    CHARACTERISTICS_EXT1,
    CHARACTERISTICS_EXT2,
    SYSTEM_BIOS_MAJOR_RELEASE,
    SYSTEM_BIOS_MINOR_RELEASE,
    EC_FIRMWARE_MAJOR_RELEASE,
    EC_FIRMWARE_MINOR_RELEASE,
    EXTENDED_ROM_SIZE,
];

// Bits 0-3 are reserved or "not supported"; names start at bit 4.
const CHARACTERISTIC_NAMES: [&str; 28] = [
    "ISA is supported",
    "MCA is supported",
    "EISA is supported",
    "PCI is supported",
    "PC Card (PCMCIA) is supported",
    "PNP is supported",
    "APM is supported",
    "BIOS is upgradeable",
    "BIOS shadowing is allowed",
    "VLB is supported",
    "ESCD support is available",
    "Boot from CD is supported",
    "Selectable boot is supported",
    "BIOS ROM is socketed",
    "Boot from PC Card (PCMCIA) is supported",
    "EDD is supported",
    "Japanese floppy for NEC 9800 1.2 MB is supported (int 13h)",
    "Japanese floppy for Toshiba 1.2 MB is supported (int 13h)",
    "5.25\"/360 kB floppy services are supported (int 13h)",
    "5.25\"/1.2 MB floppy services are supported (int 13h)",
    "3.5\"/720 kB floppy services are supported (int 13h)",
    "3.5\"/2.88 MB floppy services are supported (int 13h)",
    "Print screen service is supported (int 5h)",
    "8042 keyboard services are supported (int 9h)",
    "Serial services are supported (int 14h)",
    "Printer services are supported (int 17h)",
    "CGA/mono video services are supported (int 10h)",
    "NEC PC-98",
];

const FIRST_NAMED_BIT: u32 = 4;
const NOT_SUPPORTED_BIT: u32 = 3;

/// BIOS characteristics qword at offset 0x0A.
///
/// # Examples
/// ```
/// use dmiscope_core::structures::bios::BiosCharacteristics;
///
/// let flags = BiosCharacteristics(1 << 7 | 1 << 11);
/// assert!(flags.pci());
/// assert!(flags.upgradeable());
/// assert_eq!(flags.names().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiosCharacteristics(pub u64);

impl BiosCharacteristics {
    fn bit(self, bit: u32) -> bool {
        self.0 & (1 << bit) != 0
    }

    pub fn supported(self) -> bool {
        !self.bit(NOT_SUPPORTED_BIT)
    }

    pub fn pci(self) -> bool {
        self.bit(7)
    }

    pub fn upgradeable(self) -> bool {
        self.bit(11)
    }

    pub fn shadowing(self) -> bool {
        self.bit(12)
    }

    pub fn boot_from_cd(self) -> bool {
        self.bit(15)
    }

    pub fn selectable_boot(self) -> bool {
        self.bit(16)
    }

    /// Names of the set, documented bits in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        CHARACTERISTIC_NAMES
            .iter()
            .zip(FIRST_NAMED_BIT..)
            .filter(move |(_, bit)| self.bit(*bit))
            .map(|(name, _)| *name)
    }
}

const EXT2_UEFI_BIT: u8 = 3;
const EXT2_VIRTUAL_MACHINE_BIT: u8 = 4;

pub(crate) fn describe(structure: &Structure) -> Vec<String> {
    let Some(raw) = structure.field(&CHARACTERISTICS).get() else {
        return Vec::new();
    };
    let characteristics = BiosCharacteristics(raw);
    if !characteristics.supported() {
        return vec!["BIOS characteristics not supported".to_string()];
    }

    let mut flags: Vec<String> = characteristics.names().map(str::to_string).collect();
    if let Some(ext2) = structure.field(&CHARACTERISTICS_EXT2).get() {
        if ext2 & (1 << EXT2_UEFI_BIT) != 0 {
            flags.push("UEFI is supported".to_string());
        }
        if ext2 & (1 << EXT2_VIRTUAL_MACHINE_BIT) != 0 {
            flags.push("System is a virtual machine".to_string());
        }
    }
    flags
}
