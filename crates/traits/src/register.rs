//! The CRC register state machine contract.
//!
//! A register holds the evolving remainder of a polynomial division. The
//! contract is deliberately small: everything variant-specific (width,
//! polynomial, initial value, reflection, final XOR) lives in the engine's
//! configuration, not in this trait.

/// Parameterized CRC register state machine.
///
/// A register moves through three phases: it is initialized with `init`,
/// fed input with any number of `update` calls, and read out with `digest`.
/// Calling `init` again restarts a fresh computation on the same instance.
///
/// # Usage
///
/// ```rust,ignore
/// use crckit::{BitSerialRegister, catalog};
/// use traits::Register;
///
/// let mut register = BitSerialRegister::new(catalog::crc8::CCITT)?;
/// register.init();
/// register.update(b"123456789");
/// assert_eq!(register.digest(), 0xF4);
/// ```
///
/// # Implementor Requirements
///
/// - `init()` must reset the register to the configured initial value; it
///   has no error conditions and may be called at any time.
/// - `update()` must apply input reflection (when configured) before
///   processing each byte, and must return the raw register value after
///   the call (informational; not the finished checksum).
/// - `digest()` must be computed on a read-only view of the register:
///   calling it any number of times without an intervening `update` or
///   `init` returns an identical value.
/// - `reverse()` must return the full width-bit reflection of the current
///   register regardless of the output-reflection flag.
pub trait Register {
  /// Reset the register to its configured initial value.
  fn init(&mut self);

  /// Feed input bytes through the register.
  ///
  /// Returns the raw register value after the last byte was processed.
  fn update(&mut self, data: &[u8]) -> u64;

  /// Finalize and return the checksum.
  ///
  /// Applies output reflection and the final XOR without mutating the
  /// register, so further `update` calls may follow.
  #[must_use]
  fn digest(&self) -> u64;

  /// The width-bit bit-reversal of the current register value.
  ///
  /// Independent of the output-reflection flag; usable standalone.
  #[must_use]
  fn reverse(&self) -> u64;
}
