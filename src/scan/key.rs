//! The record schema and the state recognizing field names.

use alloc::string::String;
use core::fmt;

use either::Either::{self, Left, Right};

use super::{Error, cursor::Cursor, value::ValueScan};
use crate::account::FAVORITE_COUNT;

/// A recognized field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    AccountNumber,
    Balance,
    IsActive,
    FavoriteAccounts,
}

impl FieldKey {
    /// The field name as it appears in a record.
    pub fn literal(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::AccountNumber => "accountNumber",
            Self::Balance => "balance",
            Self::IsActive => "isActive",
            Self::FavoriteAccounts => "favoriteAccounts",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.literal())
    }
}

/// The fields of a record, in the order they must appear.
pub(super) const ACCOUNT_FIELDS: [FieldKey; 5] = [
    FieldKey::Name,
    FieldKey::AccountNumber,
    FieldKey::Balance,
    FieldKey::IsActive,
    FieldKey::FavoriteAccounts,
];

/// The fields of a favorite entry, in the order they must appear.
///
/// Favorites carry a reduced field set; there is no balance to skip over.
pub(super) const FAVORITE_FIELDS: [FieldKey; 3] =
    [FieldKey::Name, FieldKey::AccountNumber, FieldKey::IsActive];

/// Position of a scan within the record schema.
#[derive(Debug, Clone, Copy)]
pub(super) enum Context {
    /// On the top-level field at an index into [`ACCOUNT_FIELDS`].
    Account { field: usize },
    /// On a favorite entry's field at an index into [`FAVORITE_FIELDS`].
    Favorites { slot: usize, field: usize },
    /// Every field of the record has been scanned.
    Complete,
}

impl Context {
    /// The field expected next, while the record is incomplete.
    pub(super) fn expected(self) -> Option<FieldKey> {
        match self {
            Self::Account { field } => Some(ACCOUNT_FIELDS[field]),
            Self::Favorites { field, .. } => Some(FAVORITE_FIELDS[field]),
            Self::Complete => None,
        }
    }

    /// The favorite slot under scan, in the nested phase.
    pub(super) fn slot(self) -> Option<usize> {
        match self {
            Self::Favorites { slot, .. } => Some(slot),
            _ => None,
        }
    }

    /// The position following a scanned value at this position.
    pub(super) fn successor(self) -> Self {
        match self {
            Self::Account { field } => {
                if ACCOUNT_FIELDS[field] == FieldKey::FavoriteAccounts {
                    Self::Favorites { slot: 0, field: 0 }
                } else {
                    Self::Account { field: field + 1 }
                }
            }
            Self::Favorites { slot, field } => {
                if field + 1 < FAVORITE_FIELDS.len() {
                    Self::Favorites {
                        slot,
                        field: field + 1,
                    }
                } else if slot + 1 < FAVORITE_COUNT {
                    Self::Favorites {
                        slot: slot + 1,
                        field: 0,
                    }
                } else {
                    Self::Complete
                }
            }
            Self::Complete => Self::Complete,
        }
    }
}

/// State token to recognize the next field name.
#[derive(Debug)]
pub struct KeyScan {
    pub(super) context: Context,
}

impl KeyScan {
    /// State for the start of a record.
    pub fn new() -> Self {
        Self {
            context: Context::Account { field: 0 },
        }
    }

    /// Transition to another state by recognizing the next field name.
    ///
    /// Returns the recognized field and the state scanning its value, or
    /// [`Finished`] once the input ends after a complete record. A field
    /// name other than the one the schema expects at this position is an
    /// error, as is any field name once the record is complete.
    pub fn advance(self, c: &mut Cursor<'_>) -> Result<Either<(FieldKey, ValueScan), Finished>, Error> {
        let Some(expected) = self.context.expected() else {
            return match c.skip_until(|b| b == b'"') {
                Some(_) => Err(Error::TrailingKey { offset: c.offset() }),
                None => Ok(Right(Finished(()))),
            };
        };

        if c.skip_until(|b| b == b'"').is_none() {
            return Err(Error::UnexpectedEnd {
                key: expected,
                offset: c.offset(),
            });
        }
        let offset = c.offset();
        c.bump();

        let Some(found) = c.take_until(|b| b == b'"') else {
            return Err(Error::UnexpectedEnd {
                key: expected,
                offset: c.offset(),
            });
        };
        c.bump();

        if found != expected.literal().as_bytes() {
            return Err(Error::KeyMismatch {
                expected,
                found: String::from_utf8_lossy(found).into_owned(),
                offset,
            });
        }

        Ok(Left((expected, ValueScan::new(self.context, expected))))
    }
}

impl Default for KeyScan {
    fn default() -> Self {
        Self::new()
    }
}

/// State token for a completely scanned record.
#[derive(Debug)]
pub struct Finished(pub(super) ());
