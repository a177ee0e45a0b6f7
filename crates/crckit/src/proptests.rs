//! Property tests spanning both register engines.
//!
//! Configurations are drawn from the full parameter space: any width in
//! 1..=64, unmasked polynomial/init/XOR values, independent reflection
//! flags. The bit-serial engine is the oracle; the table-driven engine
//! must match it bit for bit on every draw, and both must honor the
//! masking and finalization rules regardless of how dirty the inputs are.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;
use traits::Register;

use crate::bitwise::BitSerialRegister;
use crate::calculator::Calculator;
use crate::params::{Configuration, reflect_bits};
use crate::table::{TableRegister, create_lookup_table};

fn configurations() -> impl Strategy<Value = Configuration> {
  (
    1..=64u8,
    any::<u64>(),
    any::<u64>(),
    any::<u64>(),
    any::<bool>(),
    any::<bool>(),
  )
    .prop_map(
      |(width, polynomial, init_value, final_xor_value, reverse_input, reverse_output)| {
        Configuration {
          width,
          polynomial,
          init_value,
          final_xor_value,
          reverse_input,
          reverse_output,
        }
      },
    )
}

/// Replay `data` into `register` in chunks sized by cycling `pattern`.
fn replay_chunked<R: Register>(register: &mut R, data: &[u8], pattern: &[usize]) -> u64 {
  register.init();
  let mut rest = data;
  let mut cursor = 0;
  while !rest.is_empty() {
    let take = pattern[cursor % pattern.len()].min(rest.len());
    let (chunk, tail) = rest.split_at(take);
    register.update(chunk);
    rest = tail;
    cursor += 1;
  }
  register.digest()
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn engines_agree_on_every_configuration(
    config in configurations(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    let mut serial = BitSerialRegister::new(config).unwrap();
    serial.init();
    serial.update(&data);

    let mut table = TableRegister::new(config).unwrap();
    table.init();
    table.update(&data);

    prop_assert_eq!(serial.raw(), table.raw(), "raw register diverged for {:?}", config);
    prop_assert_eq!(serial.digest(), table.digest(), "digest diverged for {:?}", config);
  }

  #[test]
  fn digest_leaves_the_register_untouched(
    config in configurations(),
    data in proptest::collection::vec(any::<u8>(), 0..=256)
  ) {
    let mut register = BitSerialRegister::new(config).unwrap();
    register.init();
    register.update(&data);

    let raw = register.raw();
    let first = register.digest();
    let second = register.digest();

    prop_assert_eq!(first, second);
    prop_assert_eq!(register.raw(), raw, "digest must not advance the register");
  }

  #[test]
  fn reverse_is_the_width_sized_reflection(
    config in configurations(),
    data in proptest::collection::vec(any::<u8>(), 0..=256)
  ) {
    let mut register = TableRegister::new(config).unwrap();
    register.init();
    register.update(&data);

    prop_assert_eq!(register.reverse(), reflect_bits(register.raw(), config.width));
    prop_assert_eq!(reflect_bits(register.reverse(), config.width), register.raw());
  }

  #[test]
  fn chunking_cannot_change_the_digest(
    config in configurations(),
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk_pattern in proptest::collection::vec(1usize..=512, 1..=32)
  ) {
    let mut register = TableRegister::new(config).unwrap();
    register.init();
    register.update(&data);
    let oneshot = register.digest();

    let streamed = replay_chunked(&mut register, &data, &chunk_pattern);
    prop_assert_eq!(streamed, oneshot, "chunking pattern {:?} produced a different digest", chunk_pattern);
  }

  #[test]
  fn digests_fit_the_width(
    config in configurations(),
    data in proptest::collection::vec(any::<u8>(), 0..=256)
  ) {
    let mut calculator = Calculator::new(config).unwrap();
    let checksum = calculator.checksum(data.as_slice()).unwrap();
    prop_assert_eq!(checksum & !config.bitmask(), 0, "digest exceeded {} bits", config.width);
    prop_assert!(calculator.verify(data.as_slice(), checksum).unwrap());
  }

  #[test]
  fn scalar_input_matches_a_one_byte_slice(
    config in configurations(),
    byte in any::<u8>()
  ) {
    let mut calculator = Calculator::table_driven(config).unwrap();
    let scalar = calculator.checksum(byte).unwrap();
    let slice = calculator.checksum([byte].as_slice()).unwrap();
    prop_assert_eq!(scalar, slice);
  }

  #[test]
  fn table_builds_are_deterministic(
    width in 1..=64u8,
    polynomial in any::<u64>()
  ) {
    let first = create_lookup_table(width, polynomial).unwrap();
    let second = create_lookup_table(width, polynomial).unwrap();
    prop_assert_eq!(first, second);
  }
}
