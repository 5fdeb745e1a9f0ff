//! States recognizing field values.

use alloc::string::String;

use super::{
    Error,
    accumulator::Accumulator,
    cursor::Cursor,
    key::{Context, FieldKey, KeyScan},
};

/// Number of digit bytes in an encoded account number.
pub const ACCOUNT_NUMBER_WIDTH: usize = 10;

/// Number of bytes in an encoded balance, counted from its first digit.
pub const BALANCE_WIDTH: usize = 6;

/// State token to recognize the value belonging to a field.
#[derive(Debug)]
pub struct ValueScan {
    context: Context,
    key: FieldKey,
}

impl ValueScan {
    pub(super) fn new(context: Context, key: FieldKey) -> Self {
        Self { context, key }
    }

    /// Transition to the next key scan by recognizing this field's value
    /// and publishing it to the accumulator.
    ///
    /// The favorites field publishes no value of its own; it opens the
    /// nested phase, and each nested active flag closes one nested entry.
    pub fn advance(self, c: &mut Cursor<'_>, acc: &mut Accumulator) -> Result<KeyScan, Error> {
        let slot = self.context.slot();

        match self.key {
            FieldKey::Name => {
                let value = string(c)?;
                acc.add_name(slot, value);
            }
            FieldKey::AccountNumber => {
                let value = account_number(c)?;
                acc.add_account_number(slot, value);
            }
            FieldKey::Balance => {
                let value = balance(c)?;
                acc.add_balance(value);
            }
            FieldKey::IsActive => {
                let value = boolean(c)?;
                acc.add_is_active(slot, value);
            }
            FieldKey::FavoriteAccounts => acc.add_favorites(),
        }

        Ok(KeyScan {
            context: self.context.successor(),
        })
    }
}

/// Scan a name: the bytes strictly between the next pair of delimiters.
///
/// Escape sequences are not processed; the record layout rules them out.
fn string(c: &mut Cursor<'_>) -> Result<String, Error> {
    if c.skip_until(|b| b == b'"').is_none() {
        return Err(Error::UnexpectedEnd {
            key: FieldKey::Name,
            offset: c.offset(),
        });
    }
    c.bump();

    let Some(bytes) = c.take_until(|b| b == b'"') else {
        return Err(Error::UnexpectedEnd {
            key: FieldKey::Name,
            offset: c.offset(),
        });
    };
    c.bump();

    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Scan an account number: exactly [`ACCOUNT_NUMBER_WIDTH`] digit bytes from
/// the first digit, most significant first.
fn account_number(c: &mut Cursor<'_>) -> Result<u64, Error> {
    if c.skip_until(|b| b.is_ascii_digit()).is_none() {
        return Err(Error::UnexpectedEnd {
            key: FieldKey::AccountNumber,
            offset: c.offset(),
        });
    }

    let offset = c.offset();
    let Some(window) = c.read::<ACCOUNT_NUMBER_WIDTH>() else {
        return Err(Error::UnexpectedEnd {
            key: FieldKey::AccountNumber,
            offset,
        });
    };

    let mut value: u64 = 0;
    for &b in window {
        if !b.is_ascii_digit() {
            return Err(Error::AccountNumberWidth { offset });
        }
        value = value * 10 + u64::from(b - b'0');
    }

    if c.peek().is_some_and(|b| b.is_ascii_digit()) {
        return Err(Error::AccountNumberWidth { offset });
    }
    if c.peek() == Some(b'"') {
        c.bump();
    }

    Ok(value)
}

/// Scan a balance: a [`BALANCE_WIDTH`]-byte decimal from the first digit.
fn balance(c: &mut Cursor<'_>) -> Result<f64, Error> {
    if c.skip_until(|b| b.is_ascii_digit()).is_none() {
        return Err(Error::UnexpectedEnd {
            key: FieldKey::Balance,
            offset: c.offset(),
        });
    }

    let offset = c.offset();
    let Some(window) = c.read::<BALANCE_WIDTH>() else {
        return Err(Error::UnexpectedEnd {
            key: FieldKey::Balance,
            offset,
        });
    };

    if !window.iter().all(|b| b.is_ascii_digit() || *b == b'.') {
        return Err(Error::BalanceFormat { offset });
    }

    let text = core::str::from_utf8(window).map_err(|_| Error::BalanceFormat { offset })?;
    let value: f64 = text.parse().map_err(|_| Error::BalanceFormat { offset })?;

    if c.peek().is_some_and(|b| b.is_ascii_digit() || b == b'.') {
        return Err(Error::BalanceFormat { offset });
    }
    if c.peek() == Some(b'"') {
        c.bump();
    }

    Ok(value)
}

/// Scan an active flag: the literal `true` or `false`, located by its first
/// byte and verified in full.
fn boolean(c: &mut Cursor<'_>) -> Result<bool, Error> {
    let Some(first) = c.skip_until(|b| b == b't' || b == b'f') else {
        return Err(Error::UnexpectedEnd {
            key: FieldKey::IsActive,
            offset: c.offset(),
        });
    };

    let offset = c.offset();
    let value = match first {
        b't' => {
            if c.read::<4>() != Some(b"true") {
                return Err(Error::BooleanLiteral { offset });
            }
            true
        }
        _ => {
            if c.read::<5>() != Some(b"false") {
                return Err(Error::BooleanLiteral { offset });
            }
            false
        }
    };

    if c.peek() == Some(b'"') {
        c.bump();
    }

    Ok(value)
}
