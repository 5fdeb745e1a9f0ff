//! Internal finite-state machine implementing the decoder.
//!
//! This module is intended for applications that need fine control over
//! decoding internals. See [`crate::decode`] for implementations covering
//! common decoding patterns.
//!
//! # Architecture
//!
//! The scan alternates between two states, each represented by a token
//! carrying its position in the record schema. A [`key::KeyScan`] recognizes
//! the next field name, and the [`value::ValueScan`] it returns recognizes
//! the value belonging to that field, publishing it into an
//! [`accumulator::Accumulator`]. Transition from state to state by calling
//! the token's `advance` method with a cursor over the input; a key scan on
//! a complete record returns [`key::Finished`] once the input ends. Each
//! key scan corresponds to one field-name token and each value scan to one
//! field-value token, so driving the tokens in a loop drains the buffer
//! deterministically.
//!
//! Field names are read and compared against the schema rather than assumed
//! from their position, and value widths are checked against their fixed
//! contracts, so input deviating from the record shape is reported as an
//! [`Error`] instead of being misread.
//!
//! Only the initial state, re-exported for convenience as [`Scanner`], can
//! be constructed.

pub mod accumulator;
pub mod cursor;
pub mod key;
pub mod value;

use alloc::string::String;

use thiserror::Error;

use key::FieldKey;
use value::{ACCOUNT_NUMBER_WIDTH, BALANCE_WIDTH};

/// Entrypoint to the finite-state machine.
pub type Scanner = key::KeyScan;

/// An error scanning a record.
///
/// Every variant names the offending byte offset, and where one applies,
/// the field under scan. The scan reports the first deviation it reaches
/// and publishes nothing further.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Unexpectedly reached the end of the input while scanning a field.
    #[error("Unexpectedly reached the end of the input while scanning {key} at offset {offset}.")]
    UnexpectedEnd { key: FieldKey, offset: usize },
    /// Found a field name other than the one the schema expects here.
    #[error("Expected key {expected} at offset {offset}, found {found:?}.")]
    KeyMismatch {
        expected: FieldKey,
        found: String,
        offset: usize,
    },
    /// Found a field name after the record was already complete.
    #[error("Found a key at offset {offset} after the record was complete.")]
    TrailingKey { offset: usize },
    /// An account number not exactly [`ACCOUNT_NUMBER_WIDTH`] digits wide.
    #[error("Account number at offset {offset} is not exactly {width} digits.", width = ACCOUNT_NUMBER_WIDTH)]
    AccountNumberWidth { offset: usize },
    /// A balance that is not a [`BALANCE_WIDTH`]-byte decimal.
    #[error("Balance at offset {offset} is not a {width}-byte decimal.", width = BALANCE_WIDTH)]
    BalanceFormat { offset: usize },
    /// A value other than the boolean literals `true` and `false`.
    #[error("Expected a boolean literal at offset {offset}.")]
    BooleanLiteral { offset: usize },
    /// A field missing from a finished record.
    #[error("Decoded record is missing {key}.")]
    MissingKey { key: FieldKey },
}
