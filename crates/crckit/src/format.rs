//! Text rendering for checksums and lookup tables.
//!
//! Values render through one hex template sized to the width: `0x` followed
//! by `ceil(width / 4)` uppercase digits, zero-padded. A 16-bit checksum of
//! `0x89` renders as `0x0089`; a 3-bit checksum of `0x5` as `0x5`.

use alloc::format;
use alloc::string::String;

use crate::error::CrcError;
use crate::params::{validate_width, width_mask};
use crate::table::create_lookup_table;

const COLUMNS: usize = 8;

/// Hex digits needed to render a `width`-bit value.
const fn hex_digits(width: u8) -> usize {
  (width as usize).div_ceil(4)
}

/// Render `value` as a `width`-sized checksum.
///
/// `value` is masked to the width before rendering.
///
/// # Example
///
/// ```
/// use crckit::format::checksum_text;
///
/// assert_eq!(checksum_text(16, 0x2189)?, "0x2189");
/// assert_eq!(checksum_text(16, 0x1)?, "0x0001");
/// # Ok::<(), crckit::CrcError>(())
/// ```
///
/// # Errors
///
/// [`CrcError::ConfigurationMisuse`] when the width is outside 1..=64.
pub fn checksum_text(width: u8, value: u64) -> Result<String, CrcError> {
  validate_width(width)?;
  let digits = hex_digits(width);
  let value = value & width_mask(width);
  Ok(format!("0x{value:0digits$X}"))
}

/// Render the lookup table for `(width, polynomial)` as rows of eight
/// entries.
///
/// Entries within a row are space-separated and rows are joined with `\n`;
/// there is no trailing newline. Every entry uses the same template as
/// [`checksum_text`].
///
/// # Errors
///
/// [`CrcError::ConfigurationMisuse`] when the width is outside 1..=64.
pub fn table_text(width: u8, polynomial: u64) -> Result<String, CrcError> {
  let table = create_lookup_table(width, polynomial)?;
  let digits = hex_digits(width);
  let mut text = String::with_capacity(table.len() * (digits + 3));
  for (index, value) in table.iter().enumerate() {
    if index > 0 {
      text.push(if index % COLUMNS == 0 { '\n' } else { ' ' });
    }
    text.push_str(&format!("0x{value:0digits$X}"));
  }
  Ok(text)
}
