//! End-to-end calculator behavior over every input shape.

use std::io::Cursor;

use crckit::{BitSerialRegister, Calculator, Configuration, CrcError, Input, Register as _, catalog};

#[test]
fn all_input_shapes_produce_one_digest() {
  let mut calculator = Calculator::table_driven(catalog::crc32::CRC32).unwrap();
  let contiguous = calculator.checksum(b"123456789").unwrap();
  assert_eq!(contiguous, 0xCBF4_3926);

  let chunks: &[&[u8]] = &[b"12", b"3456", b"", b"789"];
  assert_eq!(calculator.checksum(chunks).unwrap(), contiguous);

  let mut reader = Cursor::new(b"123456789".to_vec());
  assert_eq!(calculator.checksum(Input::reader(&mut reader)).unwrap(), contiguous);
}

#[test]
fn scalar_input_is_a_single_byte() {
  let mut calculator = Calculator::new(catalog::crc32::CRC32).unwrap();
  assert_eq!(calculator.checksum(0x61u8).unwrap(), 0xE8B7_BE43);
  assert_eq!(
    calculator.checksum(Input::scalar(0x61).unwrap()).unwrap(),
    0xE8B7_BE43
  );
}

#[test]
fn oversized_scalars_are_rejected() {
  assert_eq!(Input::scalar(256).map(|_| ()), Err(CrcError::InvalidInput));
  assert_eq!(Input::scalar(u64::MAX).map(|_| ()), Err(CrcError::InvalidInput));
}

#[test]
fn reader_input_spans_multiple_internal_reads() {
  let data: Vec<u8> = (0..40_000u32).map(|i| (i % 251) as u8).collect();

  let mut calculator = Calculator::table_driven(catalog::crc64::CRC64).unwrap();
  let expected = calculator.checksum(data.as_slice()).unwrap();

  let mut reader = Cursor::new(data);
  assert_eq!(calculator.checksum(Input::reader(&mut reader)).unwrap(), expected);
}

#[test]
fn verify_round_trip() {
  let mut calculator = Calculator::new(catalog::crc16::KERMIT).unwrap();
  assert!(calculator.verify(b"Hello World!", 0x6B65).unwrap());
  assert!(!calculator.verify(b"Hello World!", 0x6B66).unwrap());
}

#[test]
fn checksum_reinitializes_between_calls() {
  let mut calculator = Calculator::new(catalog::crc8::BLUETOOTH).unwrap();
  assert_eq!(calculator.checksum(b"Hello World!").unwrap(), 81);
  assert_eq!(calculator.checksum(b"Hello World!").unwrap(), 81);
}

#[test]
fn caller_supplied_engines_are_first_class() {
  let register = BitSerialRegister::new(catalog::crc8::ROHC).unwrap();
  let mut custom = Calculator::with_register(register);
  let mut stock = Calculator::table_driven(catalog::crc8::ROHC).unwrap();
  assert_eq!(
    custom.checksum(b"Hello World!").unwrap(),
    stock.checksum(b"Hello World!").unwrap()
  );
}

#[test]
fn register_state_is_inspectable_after_a_call() {
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

  let register = calculator.register();
  assert_eq!(register.raw(), 0x9D79_D770);
  assert_eq!(register.byte(0), Ok(0x70));
  assert_eq!(register.byte(3), Ok(0x9D));
  assert_eq!(register.reverse(), 0x0EEB_9EB9);
}

#[test]
fn out_of_range_widths_fail_at_construction() {
  for width in [0u8, 65] {
    let config = Configuration {
      width,
      polynomial: 0x07,
      init_value: 0,
      final_xor_value: 0,
      reverse_input: false,
      reverse_output: false,
    };
    assert_eq!(
      Calculator::new(config).map(|_| ()),
      Err(CrcError::ConfigurationMisuse { width })
    );
    assert_eq!(
      Calculator::table_driven(config).map(|_| ()),
      Err(CrcError::ConfigurationMisuse { width })
    );
  }
}
