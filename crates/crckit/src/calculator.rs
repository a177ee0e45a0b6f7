//! One-shot checksum calculation over heterogeneous input shapes.

use traits::Register;

use crate::bitwise::BitSerialRegister;
use crate::error::CrcError;
use crate::params::Configuration;
use crate::table::TableRegister;

/// Buffer size for draining [`Input::Reader`] sources.
#[cfg(feature = "std")]
const READER_CHUNK: usize = 8 * 1024;

/// The input shapes a [`Calculator`] accepts.
///
/// Most call sites never name this type: `checksum` takes `impl Into<Input>`
/// and conversions exist for single bytes, byte slices, and slices of byte
/// slices. The remaining constructors cover the shapes a conversion cannot
/// express infallibly.
pub enum Input<'a> {
  /// A single byte.
  Scalar(u8),
  /// A contiguous run of bytes.
  Bytes(&'a [u8]),
  /// Byte runs consumed in order, as one logical message.
  Chunks(&'a [&'a [u8]]),
  /// A stream drained to exhaustion in fixed-size reads.
  #[cfg(feature = "std")]
  Reader(&'a mut dyn std::io::Read),
}

impl<'a> Input<'a> {
  /// A single byte given as a wider integer.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidInput`] when `value` does not fit in one byte.
  pub fn scalar(value: u64) -> Result<Self, CrcError> {
    match u8::try_from(value) {
      Ok(byte) => Ok(Self::Scalar(byte)),
      Err(_) => Err(CrcError::InvalidInput),
    }
  }

  /// A stream source. Reads are not buffered beyond the internal chunk.
  #[cfg(feature = "std")]
  pub fn reader(source: &'a mut dyn std::io::Read) -> Self {
    Self::Reader(source)
  }
}

impl core::fmt::Debug for Input<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Scalar(byte) => f.debug_tuple("Scalar").field(byte).finish(),
      Self::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
      Self::Chunks(chunks) => f.debug_tuple("Chunks").field(chunks).finish(),
      #[cfg(feature = "std")]
      Self::Reader(_) => f.debug_tuple("Reader").finish(),
    }
  }
}

impl From<u8> for Input<'_> {
  fn from(value: u8) -> Self {
    Self::Scalar(value)
  }
}

impl<'a> From<&'a [u8]> for Input<'a> {
  fn from(value: &'a [u8]) -> Self {
    Self::Bytes(value)
  }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
  fn from(value: &'a [u8; N]) -> Self {
    Self::Bytes(value)
  }
}

impl<'a> From<&'a [&'a [u8]]> for Input<'a> {
  fn from(value: &'a [&'a [u8]]) -> Self {
    Self::Chunks(value)
  }
}

/// Checksum calculator over a register engine.
///
/// Each call to [`checksum`](Self::checksum) re-initializes the register, so
/// a calculator can be reused across unrelated messages. The engine is a
/// type parameter: [`Calculator::new`] picks the bit-serial engine,
/// [`Calculator::table_driven`] the table-driven one, and
/// [`Calculator::with_register`] accepts any [`Register`] implementation.
///
/// # Example
///
/// ```
/// use crckit::{Calculator, catalog};
///
/// let mut calculator = Calculator::table_driven(catalog::crc16::XMODEM)?;
/// assert_eq!(calculator.checksum(b"123456789")?, 0x31C3);
/// assert!(calculator.verify(b"123456789", 0x31C3)?);
/// # Ok::<(), crckit::CrcError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Calculator<R = BitSerialRegister> {
  register: R,
}

impl Calculator<BitSerialRegister> {
  /// A calculator backed by the bit-serial engine.
  ///
  /// # Errors
  ///
  /// [`CrcError::ConfigurationMisuse`] when the width is outside 1..=64.
  pub fn new(config: Configuration) -> Result<Self, CrcError> {
    Ok(Self {
      register: BitSerialRegister::new(config)?,
    })
  }
}

impl Calculator<TableRegister> {
  /// A calculator backed by the table-driven engine.
  ///
  /// # Errors
  ///
  /// [`CrcError::ConfigurationMisuse`] when the width is outside 1..=64.
  pub fn table_driven(config: Configuration) -> Result<Self, CrcError> {
    Ok(Self {
      register: TableRegister::new(config)?,
    })
  }
}

impl<R: Register> Calculator<R> {
  /// A calculator over a caller-supplied register engine.
  pub const fn with_register(register: R) -> Self {
    Self { register }
  }

  /// The checksum of `input` as a fresh message.
  ///
  /// # Errors
  ///
  /// [`CrcError::Io`] when a [`Input::Reader`] source fails mid-stream; the
  /// register state is then unspecified until the next call.
  pub fn checksum<'a>(&mut self, input: impl Into<Input<'a>>) -> Result<u64, CrcError> {
    self.register.init();
    match input.into() {
      Input::Scalar(byte) => {
        self.register.update(&[byte]);
      }
      Input::Bytes(bytes) => {
        self.register.update(bytes);
      }
      Input::Chunks(chunks) => {
        for chunk in chunks {
          self.register.update(chunk);
        }
      }
      #[cfg(feature = "std")]
      Input::Reader(reader) => {
        let mut buf = [0u8; READER_CHUNK];
        loop {
          let n = reader.read(&mut buf).map_err(CrcError::from)?;
          if n == 0 {
            break;
          }
          if let Some(chunk) = buf.get(..n) {
            self.register.update(chunk);
          }
        }
      }
    }
    Ok(self.register.digest())
  }

  /// Whether the checksum of `input` equals `expected`.
  ///
  /// # Errors
  ///
  /// Same conditions as [`checksum`](Self::checksum).
  pub fn verify<'a>(&mut self, input: impl Into<Input<'a>>, expected: u64) -> Result<bool, CrcError> {
    Ok(self.checksum(input)? == expected)
  }

  /// The underlying register, for raw-state inspection after a call.
  #[must_use]
  pub const fn register(&self) -> &R {
    &self.register
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog;

  #[test]
  fn scalar_conversion_bounds() {
    assert!(matches!(Input::scalar(0x61), Ok(Input::Scalar(0x61))));
    assert!(matches!(Input::scalar(255), Ok(Input::Scalar(255))));
    assert_eq!(Input::scalar(256).map(|_| ()), Err(CrcError::InvalidInput));
    assert_eq!(Input::scalar(u64::MAX).map(|_| ()), Err(CrcError::InvalidInput));
  }

  #[test]
  fn byte_and_slice_shapes_agree() {
    let mut calculator = Calculator::new(catalog::crc8::CCITT).unwrap();
    let by_scalar = calculator.checksum(0x31u8).unwrap();
    let by_slice = calculator.checksum(b"1".as_slice()).unwrap();
    assert_eq!(by_scalar, by_slice);
  }

  #[test]
  fn chunks_match_contiguous_bytes() {
    let chunks: &[&[u8]] = &[b"123", b"", b"456789"];
    let mut calculator = Calculator::table_driven(catalog::crc16::XMODEM).unwrap();
    assert_eq!(calculator.checksum(chunks).unwrap(), 0x31C3);
  }

  #[test]
  fn calculator_is_reusable_across_messages() {
    let mut calculator = Calculator::new(catalog::crc16::XMODEM).unwrap();
    assert_eq!(calculator.checksum(b"123456789").unwrap(), 0x31C3);
    assert_eq!(calculator.checksum(b"Hello World!").unwrap(), 0x0CD3);
    assert_eq!(calculator.checksum(b"123456789").unwrap(), 0x31C3);
  }

  #[test]
  fn verify_accepts_and_rejects() {
    let mut calculator = Calculator::new(catalog::crc32::CRC32).unwrap();
    assert!(calculator.verify(b"123456789", 0xCBF4_3926).unwrap());
    assert!(!calculator.verify(b"123456789", 0xCBF4_3927).unwrap());
  }

  #[test]
  fn register_accessor_exposes_raw_state() {
    let config = Configuration {
      width: 32,
      polynomial: 0x04C1_1DB7,
      init_value: 0,
      final_xor_value: 0,
      reverse_input: false,
      reverse_output: false,
    };
    let mut calculator = Calculator::new(config).unwrap();
    calculator.checksum(b"Hello World!").unwrap();
    assert_eq!(calculator.register().raw(), 0x9D79_D770);
  }

  #[test]
  fn custom_register_engine() {
    let register = TableRegister::new(catalog::crc16::KERMIT).unwrap();
    let mut calculator = Calculator::with_register(register);
    assert_eq!(calculator.checksum(b"123456789").unwrap(), 0x2189);
  }

  #[cfg(feature = "std")]
  #[test]
  fn reader_input_drains_the_stream() {
    use std::io::Cursor;

    let mut source = Cursor::new(b"123456789".to_vec());
    let mut calculator = Calculator::table_driven(catalog::crc32::CRC32).unwrap();
    assert_eq!(calculator.checksum(Input::reader(&mut source)).unwrap(), 0xCBF4_3926);
  }

  #[cfg(feature = "std")]
  #[test]
  fn reader_failure_surfaces_the_kind() {
    use std::io::{self, Read};

    struct Failing;

    impl Read for Failing {
      fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
      }
    }

    let mut source = Failing;
    let mut calculator = Calculator::new(catalog::crc8::CCITT).unwrap();
    assert_eq!(
      calculator.checksum(Input::reader(&mut source)),
      Err(CrcError::Io {
        kind: io::ErrorKind::BrokenPipe
      })
    );
  }
}
