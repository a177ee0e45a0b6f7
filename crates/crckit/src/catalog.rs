//! Preconfigured parameter sets for widely deployed CRC variants.
//!
//! Variants are grouped by register width. Each entry is a plain
//! [`Configuration`] value, so a catalog entry and a hand-built
//! configuration are interchangeable everywhere.
//!
//! | Module    | Width | Variants |
//! |-----------|-------|----------|
//! | [`crc8`]  | 8     | 8        |
//! | [`crc16`] | 16    | 11       |
//! | [`crc32`] | 32    | 4        |
//! | [`crc64`] | 64    | 1        |
//!
//! Check values quoted in the docs are the digest of the ASCII bytes
//! `"123456789"` and match the Rocksoft/RevEng catalogue.

use crate::bitwise::reference_checksum;
use crate::params::Configuration;

/// Case-insensitive lookup over one family's variant list.
fn find(
  variants: &'static [(&'static str, &'static Configuration)],
  name: &str,
) -> Option<&'static Configuration> {
  variants
    .iter()
    .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
    .map(|&(_, config)| config)
}

/// 8-bit variants.
pub mod crc8 {
  use super::Configuration;

  /// CRC-8/SMBUS, the plain CRC-8. Check value `0xF4`.
  pub const CCITT: Configuration = Configuration {
    width: 8,
    polynomial: 0x07,
    init_value: 0x00,
    final_xor_value: 0x00,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-8/AUTOSAR. Check value `0xDF`.
  pub const AUTOSAR: Configuration = Configuration {
    width: 8,
    polynomial: 0x2F,
    init_value: 0xFF,
    final_xor_value: 0xFF,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-8/BLUETOOTH. Check value `0x26`.
  pub const BLUETOOTH: Configuration = Configuration {
    width: 8,
    polynomial: 0xA7,
    init_value: 0x00,
    final_xor_value: 0x00,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-8/MAXIM-DOW, used by 1-Wire devices. Check value `0xA1`.
  pub const MAXIM_DOW: Configuration = Configuration {
    width: 8,
    polynomial: 0x31,
    init_value: 0x00,
    final_xor_value: 0x00,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-8/I-432-1 (ITU). Check value `0xA1`.
  pub const ITU: Configuration = Configuration {
    width: 8,
    polynomial: 0x07,
    init_value: 0x00,
    final_xor_value: 0x55,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-8/ROHC. Check value `0xD0`.
  pub const ROHC: Configuration = Configuration {
    width: 8,
    polynomial: 0x07,
    init_value: 0xFF,
    final_xor_value: 0x00,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-8/SAE-J1850. Check value `0x4B`.
  pub const SAEJ1850: Configuration = Configuration {
    width: 8,
    polynomial: 0x1D,
    init_value: 0xFF,
    final_xor_value: 0xFF,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-8/SAE-J1850 with zero initial value and XOR. Check value `0x37`.
  pub const SAEJ1850_ZERO: Configuration = Configuration {
    width: 8,
    polynomial: 0x1D,
    init_value: 0x00,
    final_xor_value: 0x00,
    reverse_input: false,
    reverse_output: false,
  };

  /// All 8-bit variants, in declaration order.
  pub const VARIANTS: &[(&str, &Configuration)] = &[
    ("CCITT", &CCITT),
    ("AUTOSAR", &AUTOSAR),
    ("BLUETOOTH", &BLUETOOTH),
    ("MAXIM_DOW", &MAXIM_DOW),
    ("ITU", &ITU),
    ("ROHC", &ROHC),
    ("SAEJ1850", &SAEJ1850),
    ("SAEJ1850_ZERO", &SAEJ1850_ZERO),
  ];

  /// The variant named `name`, compared ASCII case-insensitively.
  #[must_use]
  pub fn lookup(name: &str) -> Option<&'static Configuration> {
    super::find(VARIANTS, name)
  }
}

/// 16-bit variants.
pub mod crc16 {
  use super::Configuration;

  /// CRC-16/XMODEM. Check value `0x31C3`.
  pub const XMODEM: Configuration = Configuration {
    width: 16,
    polynomial: 0x1021,
    init_value: 0x0000,
    final_xor_value: 0x0000,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-16/GSM. Check value `0xCE3C`.
  pub const GSM: Configuration = Configuration {
    width: 16,
    polynomial: 0x1021,
    init_value: 0x0000,
    final_xor_value: 0xFFFF,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-16/PROFIBUS. Check value `0xA819`.
  pub const PROFIBUS: Configuration = Configuration {
    width: 16,
    polynomial: 0x1DCF,
    init_value: 0xFFFF,
    final_xor_value: 0xFFFF,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-16/MODBUS. Check value `0x4B37`.
  pub const MODBUS: Configuration = Configuration {
    width: 16,
    polynomial: 0x8005,
    init_value: 0xFFFF,
    final_xor_value: 0x0000,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-16/IBM-3740, often misnamed CCITT-FALSE. Check value `0x29B1`.
  pub const IBM_3740: Configuration = Configuration {
    width: 16,
    polynomial: 0x1021,
    init_value: 0xFFFF,
    final_xor_value: 0x0000,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-16/KERMIT (CCITT-TRUE). Check value `0x2189`.
  pub const KERMIT: Configuration = Configuration {
    width: 16,
    polynomial: 0x1021,
    init_value: 0x0000,
    final_xor_value: 0x0000,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-16/ARC (IBM). Check value `0xBB3D`.
  pub const IBM: Configuration = Configuration {
    width: 16,
    polynomial: 0x8005,
    init_value: 0x0000,
    final_xor_value: 0x0000,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-16/MAXIM-DOW. Check value `0x44C2`.
  pub const MAXIM: Configuration = Configuration {
    width: 16,
    polynomial: 0x8005,
    init_value: 0x0000,
    final_xor_value: 0xFFFF,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-16/USB. Check value `0xB4C8`.
  pub const USB: Configuration = Configuration {
    width: 16,
    polynomial: 0x8005,
    init_value: 0xFFFF,
    final_xor_value: 0xFFFF,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-16/IBM-SDLC (X.25). Check value `0x906E`.
  pub const X25: Configuration = Configuration {
    width: 16,
    polynomial: 0x1021,
    init_value: 0xFFFF,
    final_xor_value: 0xFFFF,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-16/DNP. Check value `0xEA82`.
  pub const DNP: Configuration = Configuration {
    width: 16,
    polynomial: 0x3D65,
    init_value: 0x0000,
    final_xor_value: 0xFFFF,
    reverse_input: true,
    reverse_output: true,
  };

  /// All 16-bit variants, in declaration order.
  pub const VARIANTS: &[(&str, &Configuration)] = &[
    ("XMODEM", &XMODEM),
    ("GSM", &GSM),
    ("PROFIBUS", &PROFIBUS),
    ("MODBUS", &MODBUS),
    ("IBM_3740", &IBM_3740),
    ("KERMIT", &KERMIT),
    ("IBM", &IBM),
    ("MAXIM", &MAXIM),
    ("USB", &USB),
    ("X25", &X25),
    ("DNP", &DNP),
  ];

  /// The variant named `name`, compared ASCII case-insensitively.
  #[must_use]
  pub fn lookup(name: &str) -> Option<&'static Configuration> {
    super::find(VARIANTS, name)
  }
}

/// 32-bit variants.
pub mod crc32 {
  use super::Configuration;

  /// CRC-32/ISO-HDLC, as used by Ethernet, gzip, and zlib. Check value
  /// `0xCBF43926`.
  pub const CRC32: Configuration = Configuration {
    width: 32,
    polynomial: 0x04C1_1DB7,
    init_value: 0xFFFF_FFFF,
    final_xor_value: 0xFFFF_FFFF,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-32/AUTOSAR. Check value `0x1697D06A`.
  pub const AUTOSAR: Configuration = Configuration {
    width: 32,
    polynomial: 0xF4AC_FB13,
    init_value: 0xFFFF_FFFF,
    final_xor_value: 0xFFFF_FFFF,
    reverse_input: true,
    reverse_output: true,
  };

  /// CRC-32/BZIP2. Check value `0xFC891918`.
  pub const BZIP2: Configuration = Configuration {
    width: 32,
    polynomial: 0x04C1_1DB7,
    init_value: 0xFFFF_FFFF,
    final_xor_value: 0xFFFF_FFFF,
    reverse_input: false,
    reverse_output: false,
  };

  /// CRC-32/CKSUM (POSIX). Check value `0x765E7680`.
  pub const POSIX: Configuration = Configuration {
    width: 32,
    polynomial: 0x04C1_1DB7,
    init_value: 0x0000_0000,
    final_xor_value: 0xFFFF_FFFF,
    reverse_input: false,
    reverse_output: false,
  };

  /// All 32-bit variants, in declaration order.
  pub const VARIANTS: &[(&str, &Configuration)] = &[
    ("CRC32", &CRC32),
    ("AUTOSAR", &AUTOSAR),
    ("BZIP2", &BZIP2),
    ("POSIX", &POSIX),
  ];

  /// The variant named `name`, compared ASCII case-insensitively.
  #[must_use]
  pub fn lookup(name: &str) -> Option<&'static Configuration> {
    super::find(VARIANTS, name)
  }
}

/// 64-bit variants.
pub mod crc64 {
  use super::Configuration;

  /// CRC-64/ECMA-182. Check value `0x6C40DF5F0B497347`.
  pub const CRC64: Configuration = Configuration {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    init_value: 0x0000_0000_0000_0000,
    final_xor_value: 0x0000_0000_0000_0000,
    reverse_input: false,
    reverse_output: false,
  };

  /// All 64-bit variants, in declaration order.
  pub const VARIANTS: &[(&str, &Configuration)] = &[("CRC64", &CRC64)];

  /// The variant named `name`, compared ASCII case-insensitively.
  #[must_use]
  pub fn lookup(name: &str) -> Option<&'static Configuration> {
    super::find(VARIANTS, name)
  }
}

// Compile-time check values over "123456789", one per family.
const CHECK_INPUT: &[u8] = b"123456789";
const _: () = assert!(reference_checksum(&crc8::CCITT, CHECK_INPUT) == 0xF4);
const _: () = assert!(reference_checksum(&crc16::XMODEM, CHECK_INPUT) == 0x31C3);
const _: () = assert!(reference_checksum(&crc32::CRC32, CHECK_INPUT) == 0xCBF4_3926);
const _: () = assert!(reference_checksum(&crc64::CRC64, CHECK_INPUT) == 0x6C40_DF5F_0B49_7347);
