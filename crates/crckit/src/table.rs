//! Lookup-table generation and the table-driven register engine.
//!
//! A table is derived from the bit-serial step for one `(width, polynomial)`
//! pair and is purely a performance cache: initial value, final XOR, and
//! reflection never enter it, so one table serves every variant sharing the
//! pair.
//!
//! # Caching Strategy
//!
//! - **std**: tables are built once per `(width, polynomial)` key in a
//!   process-wide map and leaked, so every engine shares one `'static`
//!   table. Concurrent first builds for a key serialize on the map lock;
//!   entries are only ever inserted fully built, so a poisoned lock is
//!   recovered rather than propagated.
//! - **no_std**: no shared state; each [`TableRegister`] owns its table,
//!   built at construction.

// Table indices are produced from a u8 (or a width-masked frame) and are
// always below 256, the fixed table length.
#![allow(clippy::indexing_slicing)]

use traits::Register;

use crate::bitwise::{finalize_register, register_byte, serial_step};
use crate::byte::Byte;
use crate::error::CrcError;
use crate::params::{Configuration, reflect_bits, validate_width};

/// A 256-entry acceleration table for one `(width, polynomial)` pair.
pub type LookupTable = [u64; 256];

/// Build the lookup table for `(width, polynomial)`.
///
/// Entry `i` is the bit-serial register after feeding the single byte `i`
/// into a zero-initialized register. Builds are deterministic: two calls
/// with the same key return identical tables.
///
/// # Example
///
/// ```
/// use crckit::create_lookup_table;
///
/// let table = create_lookup_table(8, 0x07)?;
/// assert_eq!(&table[..3], &[0x00, 0x07, 0x0E]);
/// # Ok::<(), crckit::CrcError>(())
/// ```
///
/// # Errors
///
/// [`CrcError::ConfigurationMisuse`] when the width is outside 1..=64.
pub fn create_lookup_table(width: u8, polynomial: u64) -> Result<LookupTable, CrcError> {
  validate_width(width)?;
  let mut table = [0u64; 256];
  for (index, entry) in table.iter_mut().enumerate() {
    *entry = serial_step(0, index as u8, width, polynomial);
  }
  Ok(table)
}

/// The process-wide cached table for `(width, polynomial)`.
///
/// The first call for a key builds and leaks the table; later calls return
/// the same `'static` reference. There is no eviction: the key space is
/// bounded by the variants a process actually uses, at 2 KiB per entry.
///
/// # Errors
///
/// [`CrcError::ConfigurationMisuse`] when the width is outside 1..=64.
#[cfg(feature = "std")]
pub fn cached_lookup_table(width: u8, polynomial: u64) -> Result<&'static LookupTable, CrcError> {
  use std::boxed::Box;
  use std::collections::BTreeMap;
  use std::sync::{Mutex, OnceLock, PoisonError};

  validate_width(width)?;

  static CACHE: OnceLock<Mutex<BTreeMap<(u8, u64), &'static LookupTable>>> = OnceLock::new();

  let cache = CACHE.get_or_init(|| Mutex::new(BTreeMap::new()));
  let mut tables = cache.lock().unwrap_or_else(PoisonError::into_inner);
  if let Some(table) = tables.get(&(width, polynomial)) {
    return Ok(table);
  }
  let table: &'static LookupTable = Box::leak(Box::new(create_lookup_table(width, polynomial)?));
  tables.insert((width, polynomial), table);
  Ok(table)
}

/// Table-driven CRC register.
///
/// Implements the same [`Register`] contract as
/// [`BitSerialRegister`](crate::BitSerialRegister) but consumes one byte per
/// step through a 256-entry table. Digests are bit-identical to the
/// bit-serial engine for every configuration and input.
///
/// # Example
///
/// ```
/// use crckit::{Register as _, TableRegister, catalog};
///
/// let mut register = TableRegister::new(catalog::crc32::CRC32)?;
/// register.init();
/// register.update(b"123456789");
/// assert_eq!(register.digest(), 0xCBF43926);
/// # Ok::<(), crckit::CrcError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TableRegister {
  config: Configuration,
  register: u64,
  #[cfg(feature = "std")]
  table: &'static LookupTable,
  #[cfg(not(feature = "std"))]
  table: LookupTable,
}

impl TableRegister {
  /// Create a register for `config`, building or fetching its table.
  ///
  /// # Errors
  ///
  /// [`CrcError::ConfigurationMisuse`] when the width is outside 1..=64.
  pub fn new(config: Configuration) -> Result<Self, CrcError> {
    config.validate()?;
    #[cfg(feature = "std")]
    let table = cached_lookup_table(config.width, config.polynomial)?;
    #[cfg(not(feature = "std"))]
    let table = create_lookup_table(config.width, config.polynomial)?;
    Ok(Self {
      config,
      register: config.init_value & config.bitmask(),
      table,
    })
  }

  /// The configuration this register was built from.
  #[must_use]
  pub const fn configuration(&self) -> Configuration {
    self.config
  }

  /// The raw (unreflected, un-XORed) register value.
  #[must_use]
  pub const fn raw(&self) -> u64 {
    self.register
  }

  /// The register byte at `index`, with byte 0 the least significant.
  ///
  /// # Errors
  ///
  /// [`CrcError::IndexOutOfRange`] when `index` is not below the register's
  /// byte count.
  pub const fn byte(&self, index: usize) -> Result<u8, CrcError> {
    register_byte(self.register, self.config.width, index)
  }

  fn table_step(&self, byte: u8) -> u64 {
    let width = self.config.width;
    if width >= 8 {
      let index = byte ^ (self.register >> (width - 8)) as u8;
      (self.table[usize::from(index)] ^ (self.register << 8)) & self.config.bitmask()
    } else {
      let index = ((self.register << (8 - width)) as u8) ^ byte;
      self.table[usize::from(index)]
    }
  }
}

impl Register for TableRegister {
  #[inline]
  fn init(&mut self) {
    self.register = self.config.init_value & self.config.bitmask();
  }

  fn update(&mut self, data: &[u8]) -> u64 {
    for &value in data {
      let byte = if self.config.reverse_input {
        Byte::new(value).reversed().value()
      } else {
        value
      };
      self.register = self.table_step(byte);
    }
    self.register
  }

  #[inline]
  fn digest(&self) -> u64 {
    finalize_register(self.register, &self.config)
  }

  #[inline]
  fn reverse(&self) -> u64 {
    reflect_bits(self.register, self.config.width)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const CCITT: Configuration = Configuration {
    width: 8,
    polynomial: 0x07,
    init_value: 0,
    final_xor_value: 0,
    reverse_input: false,
    reverse_output: false,
  };

  #[test]
  fn table_prefix_width_8() {
    let table = create_lookup_table(8, 0x07).unwrap();
    assert_eq!(
      &table[..12],
      &[0x00, 0x07, 0x0E, 0x09, 0x1C, 0x1B, 0x12, 0x15, 0x38, 0x3F, 0x36, 0x31]
    );
    assert_eq!(&table[248..], &[0xE6, 0xE1, 0xE8, 0xEF, 0xFA, 0xFD, 0xF4, 0xF3]);
  }

  #[test]
  fn table_prefix_width_16() {
    let table = create_lookup_table(16, 0x1021).unwrap();
    assert_eq!(
      &table[..8],
      &[0x0000, 0x1021, 0x2042, 0x3063, 0x4084, 0x50A5, 0x60C6, 0x70E7]
    );
  }

  #[test]
  fn table_prefix_width_32() {
    let table = create_lookup_table(32, 0x04C1_1DB7).unwrap();
    assert_eq!(&table[..4], &[0x0000_0000, 0x04C1_1DB7, 0x0982_3B6E, 0x0D43_26D9]);
  }

  #[test]
  fn table_prefix_width_64() {
    let table = create_lookup_table(64, 0x42F0_E1EB_A9EA_3693).unwrap();
    assert_eq!(table[0], 0);
    assert_eq!(table[1], 0x42F0_E1EB_A9EA_3693);
    assert_eq!(table[2], 0x85E1_C3D7_53D4_6D26);
  }

  #[test]
  fn table_prefix_sub_byte_width() {
    let table = create_lookup_table(5, 0x05).unwrap();
    assert_eq!(&table[..8], &[0x00, 0x05, 0x0A, 0x0F, 0x14, 0x11, 0x1E, 0x1B]);
  }

  #[test]
  fn builds_are_deterministic() {
    let first = create_lookup_table(16, 0x8005).unwrap();
    let second = create_lookup_table(16, 0x8005).unwrap();
    assert_eq!(first, second);
  }

  #[cfg(feature = "std")]
  #[test]
  fn cache_returns_the_same_table() {
    let first = cached_lookup_table(16, 0x1021).unwrap();
    let second = cached_lookup_table(16, 0x1021).unwrap();
    assert!(core::ptr::eq(first, second));
    assert_eq!(first.as_slice(), create_lookup_table(16, 0x1021).unwrap().as_slice());
  }

  #[test]
  fn rejects_unsupported_widths() {
    assert_eq!(
      create_lookup_table(0, 0x07).map(|_| ()),
      Err(CrcError::ConfigurationMisuse { width: 0 })
    );
    assert_eq!(
      create_lookup_table(65, 0x07).map(|_| ()),
      Err(CrcError::ConfigurationMisuse { width: 65 })
    );
    assert_eq!(
      TableRegister::new(Configuration { width: 0, ..CCITT }).map(|_| ()),
      Err(CrcError::ConfigurationMisuse { width: 0 })
    );
  }

  #[test]
  fn check_value_matches_bit_serial() {
    let mut register = TableRegister::new(CCITT).unwrap();
    register.init();
    register.update(b"123456789");
    assert_eq!(register.digest(), 0xF4);
  }

  #[test]
  fn reflected_variant_check_value() {
    // CRC-32 as used by Ethernet and zip.
    let config = Configuration {
      width: 32,
      polynomial: 0x04C1_1DB7,
      init_value: 0xFFFF_FFFF,
      final_xor_value: 0xFFFF_FFFF,
      reverse_input: true,
      reverse_output: true,
    };
    let mut register = TableRegister::new(config).unwrap();
    register.init();
    register.update(b"123456789");
    assert_eq!(register.digest(), 0xCBF4_3926);
  }

  #[test]
  fn sub_byte_widths_match_bit_serial() {
    use crate::bitwise::BitSerialRegister;

    let data = b"The quick brown fox jumps over the lazy dog";
    for width in 1..8u8 {
      let config = Configuration {
        width,
        polynomial: 0x05,
        init_value: 0x1F,
        final_xor_value: 0x0A,
        reverse_input: true,
        reverse_output: false,
      };
      let mut serial = BitSerialRegister::new(config).unwrap();
      serial.init();
      serial.update(data);
      let mut table = TableRegister::new(config).unwrap();
      table.init();
      table.update(data);
      assert_eq!(serial.digest(), table.digest(), "width {width}");
      assert_eq!(serial.raw(), table.raw(), "width {width}");
    }
  }
}
