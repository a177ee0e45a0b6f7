//! Error types for CRC computation.
//!
//! One small enum covers every failure the crate can report. All variants
//! are raised synchronously, before any register state is mutated; a failed
//! operation abandons the in-progress computation and is never retried.

use core::fmt;

/// Errors reported by configurations, registers, and calculators.
///
/// # Examples
///
/// ```
/// use crckit::{CrcError, Input};
///
/// assert_eq!(Input::scalar(0x1F0).map(|_| ()), Err(CrcError::InvalidInput));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// Input could not be normalized into a sequence of bytes.
  ///
  /// Raised at the input-adapter boundary (e.g. a scalar above 255),
  /// before any engine state changes.
  InvalidInput,

  /// A bit or byte index outside the addressable range was requested.
  IndexOutOfRange {
    /// The requested index.
    index: usize,
    /// Number of addressable positions.
    len: usize,
  },

  /// A configuration width outside the supported 1..=64 range.
  ConfigurationMisuse {
    /// The rejected width.
    width: u8,
  },

  /// Reading from an input stream failed.
  #[cfg(feature = "std")]
  Io {
    /// The kind of I/O failure.
    kind: std::io::ErrorKind,
  },
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidInput => f.write_str("input cannot be represented as a sequence of bytes"),
      Self::IndexOutOfRange { index, len } => {
        write!(f, "index {index} out of range for length {len}")
      }
      Self::ConfigurationMisuse { width } => {
        write!(f, "width {width} is outside the supported range 1..=64")
      }
      #[cfg(feature = "std")]
      Self::Io { kind } => write!(f, "reading input failed: {kind}"),
    }
  }
}

impl core::error::Error for CrcError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for CrcError {
  fn from(error: std::io::Error) -> Self {
    Self::Io { kind: error.kind() }
  }
}
