//! Fuzz target for streaming update sequences.
//!
//! Any chunking of an input must digest identically to feeding it in one
//! call.

#![no_main]

use arbitrary::Arbitrary;
use crckit::{Configuration, Register, TableRegister, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  test_streaming(&catalog::crc16::X25, &input);
  test_streaming(&catalog::crc32::CRC32, &input);
  test_streaming(&catalog::crc64::CRC64, &input);
});

fn test_streaming(config: &Configuration, input: &Input) {
  let data = &input.data;
  let chunk_sizes = &input.chunk_sizes;

  let mut register = TableRegister::new(*config).expect("catalog widths are valid");
  register.init();
  register.update(data);
  let expected = register.digest();

  register.init();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    register.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(
    register.digest(),
    expected,
    "streaming mismatch at width {}",
    config.width
  );
}
