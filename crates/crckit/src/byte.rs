//! An 8-bit value with LSB-first bit indexing.
//!
//! [`Byte`] is the unit the register engines consume: input reflection is
//! expressed as [`Byte::reversed`], and bit access is indexed with bit 0 as
//! the least significant bit.

use core::ops::{Add, AddAssign};

use crate::error::CrcError;

/// One input byte, bit-addressable with bit 0 = least significant.
///
/// Equality and hashing follow the underlying numeric value; addition wraps
/// modulo 256.
///
/// # Examples
///
/// ```
/// use crckit::Byte;
///
/// let byte = Byte::new(0b0000_0101);
/// assert_eq!(byte.bit(0), Ok(1));
/// assert_eq!(byte.bit(1), Ok(0));
/// assert_eq!(byte.reversed(), Byte::new(0b1010_0000));
/// assert_eq!(Byte::new(0xFF) + Byte::new(0x02), Byte::new(0x01));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Byte(u8);

impl Byte {
  /// Number of addressable bits.
  pub const BITS: usize = 8;

  /// Create a byte from its numeric value.
  #[inline]
  #[must_use]
  pub const fn new(value: u8) -> Self {
    Self(value)
  }

  /// The underlying numeric value.
  #[inline]
  #[must_use]
  pub const fn value(self) -> u8 {
    self.0
  }

  /// The bit at `index` as 0 or 1, with bit 0 the least significant.
  ///
  /// # Errors
  ///
  /// [`CrcError::IndexOutOfRange`] for indices outside 0..=7.
  pub const fn bit(self, index: usize) -> Result<u8, CrcError> {
    if index >= Self::BITS {
      return Err(CrcError::IndexOutOfRange { index, len: Self::BITS });
    }
    Ok((self.0 >> index) & 1)
  }

  /// Iterate over the 8 bits, least significant first.
  pub fn bits(self) -> impl Iterator<Item = u8> {
    (0..Self::BITS).map(move |index| (self.0 >> index) & 1)
  }

  /// The bit-reversed byte: bit `i` moves to position `7 - i`.
  #[inline]
  #[must_use]
  pub const fn reversed(self) -> Self {
    Self(self.0.reverse_bits())
  }
}

impl From<u8> for Byte {
  #[inline]
  fn from(value: u8) -> Self {
    Self(value)
  }
}

impl From<Byte> for u8 {
  #[inline]
  fn from(byte: Byte) -> Self {
    byte.0
  }
}

impl Add for Byte {
  type Output = Self;

  #[inline]
  fn add(self, rhs: Self) -> Self {
    Self(self.0.wrapping_add(rhs.0))
  }
}

impl Add<u8> for Byte {
  type Output = Self;

  #[inline]
  fn add(self, rhs: u8) -> Self {
    Self(self.0.wrapping_add(rhs))
  }
}

impl AddAssign for Byte {
  #[inline]
  fn add_assign(&mut self, rhs: Self) {
    self.0 = self.0.wrapping_add(rhs.0);
  }
}
