//! Fully parameterized CRC checksums over the Rocksoft model.
//!
//! Any CRC variant is described by six parameters: register width in bits
//! (1..=64), generator polynomial, initial register value, final XOR value,
//! and two reflection flags for input bytes and output. A [`Configuration`]
//! holds exactly those six fields; [`catalog`] ships preconfigured values
//! for the widely deployed variants.
//!
//! # Engines
//!
//! Two interchangeable register engines implement [`Register`]:
//!
//! | Engine | Cost per byte | Best for |
//! |--------|---------------|----------|
//! | [`BitSerialRegister`] | 8 shift/XOR steps | auditing, verifying tables |
//! | [`TableRegister`] | 1 lookup step | everyday use |
//!
//! Both produce bit-identical digests for every configuration and input.
//!
//! # Example
//!
//! ```rust
//! use crckit::{Calculator, Configuration, catalog};
//!
//! // A catalog variant.
//! let mut calculator = Calculator::table_driven(catalog::crc32::CRC32)?;
//! assert_eq!(calculator.checksum(b"123456789")?, 0xCBF4_3926);
//!
//! // A custom parameter set.
//! let config = Configuration {
//!   width: 16,
//!   polynomial: 0x1021,
//!   init_value: 0x0000,
//!   final_xor_value: 0x0000,
//!   reverse_input: false,
//!   reverse_output: false,
//! };
//! let mut custom = Calculator::new(config)?;
//! assert_eq!(custom.checksum(b"123456789")?, 0x31C3);
//! # Ok::<(), crckit::CrcError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `std` | yes | process-wide table cache, `Input::Reader`, `std::io` error conversion |
//! | `alloc` | yes (implied by `std`) | [`format`] text rendering |
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use; each [`TableRegister`] then owns its 2 KiB table instead of sharing
//! a cached one.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bitwise;
mod byte;
mod calculator;
mod error;
mod params;
mod proptests;
mod table;

pub mod catalog;
#[cfg(feature = "alloc")]
pub mod format;

pub use bitwise::BitSerialRegister;
pub use byte::Byte;
pub use calculator::{Calculator, Input};
pub use error::CrcError;
pub use params::Configuration;
#[cfg(feature = "std")]
pub use table::cached_lookup_table;
pub use table::{LookupTable, TableRegister, create_lookup_table};

pub use traits::Register;
