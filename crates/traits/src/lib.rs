//! Core contracts for the crckit workspace.
//!
//! This crate provides the foundational trait that all crckit register
//! engines conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Register`] | Parameterized CRC register state machine | bit-serial and table-driven engines |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod register;

pub use register::Register;
