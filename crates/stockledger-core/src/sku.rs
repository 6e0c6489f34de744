//! Stock-keeping unit identifiers.
//!
//! A [`Sku`] is the identity key of the stock table. The grammar is fixed:
//! one to three ASCII uppercase letters, a hyphen, one to three ASCII
//! digits (`AB-6`, `ABC-999`). Validation is a full-string match performed
//! with explicit character-class checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::LedgerError;

/// A validated stock-keeping unit identifier.
///
/// `Sku` is case-sensitive and immutable once constructed. It orders
/// lexically, which is the order the stock table reports in.
///
/// # Examples
///
/// ```
/// use stockledger_core::Sku;
///
/// let sku: Sku = "AB-6".parse().unwrap();
/// assert_eq!(sku.as_str(), "AB-6");
///
/// assert!("AB--6".parse::<Sku>().is_err());
/// assert!("A1-6".parse::<Sku>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sku(String);

impl Sku {
    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a token matches the SKU grammar.
    ///
    /// This is a full-string match: a valid SKU embedded in a longer token
    /// does not count.
    #[must_use]
    pub fn is_valid(token: &str) -> bool {
        let Some((letters, digits)) = token.split_once('-') else {
            return false;
        };
        (1..=3).contains(&letters.len())
            && (1..=3).contains(&digits.len())
            && letters.bytes().all(|b| b.is_ascii_uppercase())
            && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

impl FromStr for Sku {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(LedgerError::InvalidSkuFormat {
                token: s.to_owned(),
            })
        }
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
