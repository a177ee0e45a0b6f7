//! CRC algorithm parameters.
//!
//! This module defines the parameter set describing one CRC variant,
//! following the conventions of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! (Rocksoft model).

use crate::error::CrcError;

/// Parameters describing one CRC variant.
///
/// This struct captures everything needed to define a CRC algorithm. It is
/// a plain immutable value: constructing one performs no work and no
/// validation, and well-known variants are provided as constants in
/// [`catalog`](crate::catalog).
///
/// # Parameters
///
/// - `width`: number of bits in the checksum, supported range 1..=64
/// - `polynomial`: the generator polynomial (without the implicit high bit)
/// - `init_value`: starting register value
/// - `final_xor_value`: value XORed into the finished register
/// - `reverse_input`: bit-reverse each input byte before processing
/// - `reverse_output`: bit-reverse the register before the final XOR
///
/// # Masking
///
/// All integer fields are masked to `width` bits wherever they participate
/// in register arithmetic; the fields themselves need not be pre-masked.
///
/// # Examples
///
/// ```
/// use crckit::Configuration;
///
/// let xmodem = Configuration {
///   width: 16,
///   polynomial: 0x1021,
///   init_value: 0,
///   final_xor_value: 0,
///   reverse_input: false,
///   reverse_output: false,
/// };
/// assert_eq!(xmodem.bitmask(), 0xFFFF);
/// assert_eq!(xmodem.topbit(), 0x8000);
/// assert!(xmodem.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
  /// Width in bits (1..=64).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial register value.
  pub init_value: u64,
  /// XOR value applied to the finished register.
  pub final_xor_value: u64,
  /// Reflect input bytes before processing.
  pub reverse_input: bool,
  /// Reflect the register before the final XOR.
  pub reverse_output: bool,
}

impl Configuration {
  /// The mask selecting the low `width` bits of a register.
  #[inline]
  #[must_use]
  pub const fn bitmask(&self) -> u64 {
    width_mask(self.width)
  }

  /// The mask selecting the register's most significant bit.
  ///
  /// Meaningful only for widths accepted by [`validate`](Self::validate).
  #[inline]
  #[must_use]
  pub const fn topbit(&self) -> u64 {
    1u64 << (self.width.wrapping_sub(1) & 63)
  }

  /// Check that the width lies in the supported 1..=64 range.
  ///
  /// Every engine constructor and table builder performs this check, so a
  /// configuration with an out-of-range width fails fast with
  /// [`CrcError::ConfigurationMisuse`] instead of producing shift/mask
  /// artifacts.
  pub const fn validate(&self) -> Result<(), CrcError> {
    validate_width(self.width)
  }
}

/// Check a width against the supported 1..=64 range.
pub(crate) const fn validate_width(width: u8) -> Result<(), CrcError> {
  if width >= 1 && width <= 64 {
    Ok(())
  } else {
    Err(CrcError::ConfigurationMisuse { width })
  }
}

/// The mask selecting the low `width` bits of a `u64`.
pub(crate) const fn width_mask(width: u8) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
#[must_use]
pub(crate) const fn reflect_bits(value: u64, width: u8) -> u64 {
  let mut result = 0u64;
  let mut i = 0u8;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1 << (width.wrapping_sub(1).wrapping_sub(i));
    }
    i = i.wrapping_add(1);
  }
  result
}
