#![no_std]

//! A schema-bound decoder for JSON account records of a fixed shape.
//!
//! Passbook converts a byte buffer holding one JSON-shaped account record
//! into a strongly-typed value without a general-purpose JSON parser. The
//! record layout is fixed: a name, a ten-digit account number, a six-byte
//! balance, an active flag, and exactly three nested favorite accounts. The
//! buffer is scanned once, left to right, and the field order and value
//! widths of the layout are verified as the scan advances; input deviating
//! from the layout is reported as a typed error carrying the byte offset and
//! the field being scanned.
//!
//! Most users should begin with the functions in the [`decode`] module.
//! Applications needing finer control over decoding internals can drive the
//! finite-state machine in the [`scan`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod account;
pub mod decode;
pub mod scan;
