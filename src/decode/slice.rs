//! Slice-based decoder implementation.

use either::Either::{Left, Right};

use crate::{
    account::Account,
    scan::{Error, Scanner, accumulator::Accumulator, cursor::Cursor},
};

/// Decode an account record from a slice.
///
/// The slice must hold one complete record; anything deviating from the
/// record layout, including fields out of order or values outside their
/// fixed widths, is reported as an [`Error`] and yields no record.
///
/// This method is also re-exported as `passbook::decode::decode_slice`.
pub fn decode(r: &[u8]) -> Result<Account, Error> {
    let c = &mut Cursor::new(r);
    let mut acc = Accumulator::default();

    let mut key_scan = Scanner::new();

    loop {
        key_scan = match key_scan.advance(c)? {
            Left((_, value_scan)) => value_scan.advance(c, &mut acc)?,
            Right(_) => break,
        };
    }

    acc.finish()
}
