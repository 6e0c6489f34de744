//! Stock quantities.
//!
//! A [`Quantity`] is a non-negative integer unit count. Parsing is strict:
//! only ASCII digit strings that evaluate to at most [`Quantity::CEILING`]
//! are accepted (no sign, no decimal point). Stored levels may exceed the
//! ceiling afterwards, because `add-stock` does not re-check it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::LedgerError;

/// A non-negative count of stock units.
///
/// # Examples
///
/// ```
/// use stockledger_core::Quantity;
///
/// let qty: Quantity = "100".parse().unwrap();
/// assert_eq!(qty.get(), 100);
///
/// assert!("10.5".parse::<Quantity>().is_err());
/// assert!("-10".parse::<Quantity>().is_err());
/// assert!("1000".parse::<Quantity>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Quantity(u32);

impl Quantity {
    /// The zero quantity.
    pub const ZERO: Self = Self(0);

    /// The largest value a single token may parse to.
    ///
    /// Only a parse-time bound: additions may push a stored level past it.
    pub const CEILING: Self = Self(999);

    /// Create a quantity from a raw unit count.
    #[must_use]
    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    /// Get the unit count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Check whether this quantity is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Add another quantity, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtract another quantity, returning `None` if it exceeds this one.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }
}

impl FromStr for Quantity {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let all_digits = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        let units = if all_digits { s.parse::<u32>().ok() } else { None };
        match units {
            Some(n) if n <= Self::CEILING.0 => Ok(Self(n)),
            _ => Err(LedgerError::InvalidAmountFormat {
                token: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
