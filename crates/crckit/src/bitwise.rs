//! Bit-serial CRC computation.
//!
//! This module is the canonical source of truth for the crate: the per-byte
//! polynomial-division step lives here as a `const fn`, and every other
//! engine must produce results identical to [`BitSerialRegister`].
//!
//! # CRC Model
//!
//! All engines follow the Rocksoft model:
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | checksum width in bits (1..=64) |
//! | `polynomial` | generator polynomial, MSB-first |
//! | `init_value` | initial register value |
//! | `reverse_input` | reflect each input byte before processing |
//! | `reverse_output` | reflect the register before the final XOR |
//! | `final_xor_value` | XORed into the finished register |
//!
//! # Performance
//!
//! Intentionally slow (8 shift/XOR steps per byte). Use for correctness
//! verification, table generation, and as a test oracle; use
//! [`TableRegister`](crate::TableRegister) for throughput.

use traits::Register;

use crate::byte::Byte;
use crate::error::CrcError;
use crate::params::{Configuration, reflect_bits, width_mask};

/// Feed one (already reflected, if configured) byte through the division.
///
/// `register` must be masked to `width` bits; the result is masked the same
/// way. Widths of 8 and above run the textbook MSB-aligned loop; narrower
/// widths run top-aligned in an 8-bit frame with the polynomial shifted to
/// match, which generalizes the same division to sub-byte registers.
pub(crate) const fn serial_step(register: u64, byte: u8, width: u8, polynomial: u64) -> u64 {
  let bitmask = width_mask(width);
  let register = register & bitmask;

  if width >= 8 {
    let topbit = 1u64 << (width - 1);
    let mut register = register ^ ((byte as u64) << (width - 8));
    let mut bit = 0;
    while bit < 8 {
      register = if register & topbit != 0 {
        ((register << 1) ^ polynomial) & bitmask
      } else {
        (register << 1) & bitmask
      };
      bit += 1;
    }
    register
  } else {
    let shift = 8 - width;
    let frame_polynomial = (polynomial & bitmask) << shift;
    let mut frame = ((register << shift) ^ byte as u64) & 0xFF;
    let mut bit = 0;
    while bit < 8 {
      frame = if frame & 0x80 != 0 {
        ((frame << 1) ^ frame_polynomial) & 0xFF
      } else {
        (frame << 1) & 0xFF
      };
      bit += 1;
    }
    frame >> shift
  }
}

/// Derive the finished checksum from a raw register value.
///
/// Applies output reflection and the final XOR; never mutates anything.
pub(crate) const fn finalize_register(register: u64, config: &Configuration) -> u64 {
  let register = register & config.bitmask();
  let value = if config.reverse_output {
    reflect_bits(register, config.width)
  } else {
    register
  };
  (value ^ config.final_xor_value) & config.bitmask()
}

/// Number of addressable register bytes for a given width.
///
/// Matches the register's byte indexing: `width / 8` positions, with
/// sub-byte widths addressable as a single partial byte.
pub(crate) const fn register_len(width: u8) -> usize {
  let bytes = (width / 8) as usize;
  if bytes == 0 { 1 } else { bytes }
}

/// The register byte at `index`, with byte 0 the least significant.
pub(crate) const fn register_byte(register: u64, width: u8, index: usize) -> Result<u8, CrcError> {
  let len = register_len(width);
  if index >= len {
    return Err(CrcError::IndexOutOfRange { index, len });
  }
  Ok((register >> (index * 8)) as u8)
}

/// One-shot bit-serial checksum, usable in const contexts.
///
/// This is the oracle behind the compile-time catalog assertions in
/// [`catalog`](crate::catalog).
// Indexing is bounded by the loop condition; kept as indexing so the fn
// stays const-evaluable.
#[allow(clippy::indexing_slicing)]
pub(crate) const fn reference_checksum(config: &Configuration, data: &[u8]) -> u64 {
  let mut register = config.init_value & config.bitmask();
  let mut i = 0;
  while i < data.len() {
    let byte = if config.reverse_input {
      data[i].reverse_bits()
    } else {
      data[i]
    };
    register = serial_step(register, byte, config.width, config.polynomial);
    i += 1;
  }
  finalize_register(register, config)
}

/// Bit-serial CRC register.
///
/// The reference implementation of the [`Register`] contract: one byte is
/// processed with 8 explicit shift/XOR steps. Use this engine when clarity
/// matters more than speed, or as the oracle for a faster engine.
///
/// # Example
///
/// ```
/// use crckit::{BitSerialRegister, Register as _, catalog};
///
/// let mut register = BitSerialRegister::new(catalog::crc16::XMODEM)?;
/// register.init();
/// register.update(b"123456789");
/// assert_eq!(register.digest(), 0x31C3);
/// # Ok::<(), crckit::CrcError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BitSerialRegister {
  config: Configuration,
  register: u64,
}

impl BitSerialRegister {
  /// Create a register for `config`.
  ///
  /// # Errors
  ///
  /// [`CrcError::ConfigurationMisuse`] when the width is outside 1..=64.
  pub fn new(config: Configuration) -> Result<Self, CrcError> {
    config.validate()?;
    Ok(Self {
      config,
      register: config.init_value & config.bitmask(),
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
}

impl Register for BitSerialRegister {
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
      self.register = serial_step(self.register, byte, self.config.width, self.config.polynomial);
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
