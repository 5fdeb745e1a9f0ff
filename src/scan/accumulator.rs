//! Intermediate storage for scanned field values.

use alloc::string::String;

use super::{Error, key::FieldKey};
use crate::account::{Account, FAVORITE_COUNT, FavoriteAccount};

/// Storage for the fields of a record as they are scanned.
///
/// Created empty, filled one slot per recognized value, and consumed once by
/// [`finish`](Self::finish) to assemble the record. Slots are only ever
/// filled; the verifying scan guarantees each is written at most once.
#[derive(Debug, Default)]
pub struct Accumulator {
    name: Option<String>,
    account_number: Option<u64>,
    balance: Option<f64>,
    is_active: Option<bool>,
    favorites: Option<[Favorite; FAVORITE_COUNT]>,
}

#[derive(Debug, Default)]
struct Favorite {
    name: Option<String>,
    account_number: Option<u64>,
    is_active: Option<bool>,
}

impl Accumulator {
    pub(super) fn add_name(&mut self, slot: Option<usize>, value: String) {
        match slot {
            None => self.name = Some(value),
            Some(slot) => self.favorite(slot).name = Some(value),
        }
    }

    pub(super) fn add_account_number(&mut self, slot: Option<usize>, value: u64) {
        match slot {
            None => self.account_number = Some(value),
            Some(slot) => self.favorite(slot).account_number = Some(value),
        }
    }

    pub(super) fn add_balance(&mut self, value: f64) {
        self.balance = Some(value);
    }

    pub(super) fn add_is_active(&mut self, slot: Option<usize>, value: bool) {
        match slot {
            None => self.is_active = Some(value),
            Some(slot) => self.favorite(slot).is_active = Some(value),
        }
    }

    /// Open the nested phase by allocating the empty favorite entries.
    pub(super) fn add_favorites(&mut self) {
        self.favorites = Some(Default::default());
    }

    fn favorite(&mut self, slot: usize) -> &mut Favorite {
        match &mut self.favorites {
            Some(favorites) => &mut favorites[slot],
            None => unreachable!(),
        }
    }

    /// Assemble the finished record, checking that every slot was filled.
    pub fn finish(self) -> Result<Account, Error> {
        let [a, b, c] = self.favorites.ok_or(Error::MissingKey {
            key: FieldKey::FavoriteAccounts,
        })?;

        Ok(Account {
            name: self.name.ok_or(Error::MissingKey {
                key: FieldKey::Name,
            })?,
            account_number: self.account_number.ok_or(Error::MissingKey {
                key: FieldKey::AccountNumber,
            })?,
            balance: self.balance.ok_or(Error::MissingKey {
                key: FieldKey::Balance,
            })?,
            is_active: self.is_active.ok_or(Error::MissingKey {
                key: FieldKey::IsActive,
            })?,
            favorite_accounts: [a.finish()?, b.finish()?, c.finish()?],
        })
    }
}

impl Favorite {
    fn finish(self) -> Result<FavoriteAccount, Error> {
        Ok(FavoriteAccount {
            name: self.name.ok_or(Error::MissingKey {
                key: FieldKey::Name,
            })?,
            account_number: self.account_number.ok_or(Error::MissingKey {
                key: FieldKey::AccountNumber,
            })?,
            is_active: self.is_active.ok_or(Error::MissingKey {
                key: FieldKey::IsActive,
            })?,
        })
    }
}
