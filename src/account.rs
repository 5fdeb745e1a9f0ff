//! The decoded account record and its nested favorites.

use alloc::string::String;
use core::fmt;

use crate::scan::value::{ACCOUNT_NUMBER_WIDTH, BALANCE_WIDTH};

/// Number of favorite accounts carried by a record.
pub const FAVORITE_COUNT: usize = 3;

/// A fully decoded account record.
///
/// Values are assembled only once a scan over a record completes; a failed
/// decode hands back no partial record. The record owns its string data and
/// does not borrow from the input buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The account holder's name.
    pub name: String,
    /// The account number, decoded from its fixed ten-digit form.
    pub account_number: u64,
    /// The balance, decoded from its fixed six-byte form.
    pub balance: f64,
    /// Whether the account is active.
    pub is_active: bool,
    /// The favorite accounts, in the order they appear in the record.
    pub favorite_accounts: [FavoriteAccount; FAVORITE_COUNT],
}

/// A favorite account entry nested within a record.
///
/// Favorites carry the reduced field set of the record layout: no balance.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteAccount {
    /// The account holder's name.
    pub name: String,
    /// The account number, decoded from its fixed ten-digit form.
    pub account_number: u64,
    /// Whether the account is active.
    pub is_active: bool,
}

impl fmt::Display for Account {
    /// Render the record in its fixed textual template.
    ///
    /// The rendering is value-faithful rather than formatting-faithful: the
    /// account number prints zero-padded to its fixed digit count and the
    /// balance prints in its fixed byte width, so decoding the rendering
    /// yields the same field values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "\"name\": \"{}\",", self.name)?;
        writeln!(
            f,
            "\"accountNumber\": \"{:0width$}\",",
            self.account_number,
            width = ACCOUNT_NUMBER_WIDTH
        )?;
        writeln!(f, "\"balance\": \"{}\",", FixedWidth(self.balance))?;
        writeln!(f, "\"isActive\": \"{}\",", self.is_active)?;
        writeln!(
            f,
            "\"favoriteAccounts\": [{},{},{}]",
            self.favorite_accounts[0], self.favorite_accounts[1], self.favorite_accounts[2]
        )?;
        write!(f, "}}")
    }
}

impl fmt::Display for FavoriteAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "\"name\": \"{}\",", self.name)?;
        writeln!(
            f,
            "\"accountNumber\": \"{:0width$}\",",
            self.account_number,
            width = ACCOUNT_NUMBER_WIDTH
        )?;
        writeln!(f, "\"isActive\": \"{}\"", self.is_active)?;
        write!(f, "}}")
    }
}

/// Renders a balance in its fixed byte width, from the first digit.
struct FixedWidth(f64);

impl fmt::Display for FixedWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut integral = 1;
        let mut rest = self.0;
        while rest >= 10.0 && integral < BALANCE_WIDTH {
            rest /= 10.0;
            integral += 1;
        }

        let precision = (BALANCE_WIDTH - 1).saturating_sub(integral);

        if precision == 0 && integral < BALANCE_WIDTH {
            write!(f, "{:.0}.", self.0)
        } else {
            write!(f, "{:.*}", precision, self.0)
        }
    }
}
