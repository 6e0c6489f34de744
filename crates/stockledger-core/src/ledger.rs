//! The stock ledger: the table of SKU levels and the mutation engine.
//!
//! A [`Ledger`] owns the SKU → quantity table and applies one [`Command`]
//! at a time. Validation happens before mutation, per pair: a pair whose
//! tokens fail the format checks is skipped and recorded on the
//! [`Receipt`], while domain failures (missing SKU, insufficient stock)
//! abort the rest of the instruction. Effects committed by earlier pairs
//! of an aborted instruction are not rolled back.

use std::collections::BTreeMap;

use crate::{Command, LedgerError, Pair, Quantity, Sku};

/// A pair that failed format validation and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPair {
    /// The pair as it appeared in the instruction.
    pub pair: Pair,
    /// The format error that disqualified it.
    pub reason: LedgerError,
}

/// The outcome of successfully applying one command.
///
/// An instruction succeeds even when some of its pairs were skipped for
/// format reasons; the receipt carries both counts so the reporting layer
/// can surface skips as warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receipt {
    /// Number of pairs whose mutation was applied.
    pub applied: usize,
    /// Pairs skipped due to format errors, in instruction order.
    pub skipped: Vec<SkippedPair>,
}

impl Receipt {
    fn skip(&mut self, pair: &Pair, reason: LedgerError) {
        self.skipped.push(SkippedPair {
            pair: pair.clone(),
            reason,
        });
    }
}

/// The stock table and its mutation engine.
///
/// The table starts empty and lives for the process; absence of a SKU
/// means "never stocked" and is distinct from a zero level.
///
/// # Examples
///
/// ```
/// use stockledger_core::{Command, Ledger, Pair};
///
/// let mut ledger = Ledger::new();
/// ledger
///     .apply(&Command::SetStock(vec![Pair::new("AB-6", "100")]))
///     .unwrap();
/// ledger
///     .apply(&Command::Order {
///         reference: "ON-1".into(),
///         pairs: vec![Pair::new("AB-6", "40")],
///     })
///     .unwrap();
///
/// let sku = "AB-6".parse().unwrap();
/// assert_eq!(ledger.level(&sku).map(|q| q.get()), Some(60));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    levels: BTreeMap<Sku, Quantity>,
}

impl Ledger {
    /// Create a ledger with an empty stock table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command to the stock table.
    ///
    /// Returns a [`Receipt`] on success. On a domain error the table keeps
    /// every mutation committed before the failing pair.
    pub fn apply(&mut self, command: &Command) -> Result<Receipt, LedgerError> {
        match command {
            Command::SetStock(pairs) => Ok(self.set_stock(pairs)),
            Command::AddStock(pairs) => self.add_stock(pairs),
            Command::Order { reference, pairs } => self.place_order(reference, pairs),
        }
    }

    /// Overwrite levels unconditionally; works for new and existing SKUs.
    fn set_stock(&mut self, pairs: &[Pair]) -> Receipt {
        let mut receipt = Receipt::default();
        for pair in pairs {
            match validate_pair(pair) {
                Ok((sku, quantity)) => {
                    self.levels.insert(sku, quantity);
                    receipt.applied += 1;
                }
                Err(reason) => receipt.skip(pair, reason),
            }
        }
        receipt
    }

    /// Increment levels of SKUs already in the table.
    ///
    /// A missing SKU aborts the instruction. The resulting level is not
    /// re-checked against [`Quantity::CEILING`]; additions may exceed it.
    fn add_stock(&mut self, pairs: &[Pair]) -> Result<Receipt, LedgerError> {
        let mut receipt = Receipt::default();
        for pair in pairs {
            let (sku, quantity) = match validate_pair(pair) {
                Ok(validated) => validated,
                Err(reason) => {
                    receipt.skip(pair, reason);
                    continue;
                }
            };
            let Some(level) = self.levels.get_mut(&sku) else {
                return Err(LedgerError::SkuNotFound { sku });
            };
            *level = level.saturating_add(quantity);
            receipt.applied += 1;
        }
        Ok(receipt)
    }

    /// Decrement levels to fulfil an order.
    ///
    /// A missing SKU or an insufficient level aborts the instruction;
    /// decrements from earlier pairs stay committed.
    fn place_order(&mut self, reference: &str, pairs: &[Pair]) -> Result<Receipt, LedgerError> {
        let mut receipt = Receipt::default();
        for pair in pairs {
            let (sku, quantity) = match validate_pair(pair) {
                Ok(validated) => validated,
                Err(reason) => {
                    receipt.skip(pair, reason);
                    continue;
                }
            };
            let Some(level) = self.levels.get_mut(&sku) else {
                return Err(LedgerError::SkuNotFound { sku });
            };
            let Some(remaining) = level.checked_sub(quantity) else {
                return Err(LedgerError::InsufficientStock {
                    reference: reference.to_owned(),
                    sku,
                });
            };
            *level = remaining;
            receipt.applied += 1;
        }
        Ok(receipt)
    }

    /// Get the current level of a SKU, if it has ever been stocked.
    #[must_use]
    pub fn level(&self, sku: &Sku) -> Option<Quantity> {
        self.levels.get(sku).copied()
    }

    /// Check whether a SKU is in the table.
    #[must_use]
    pub fn contains(&self, sku: &Sku) -> bool {
        self.levels.contains_key(sku)
    }

    /// Number of SKUs in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over all levels in ascending lexical SKU order.
    pub fn levels(&self) -> impl Iterator<Item = (&Sku, Quantity)> {
        self.levels.iter().map(|(sku, quantity)| (sku, *quantity))
    }
}

/// Validate one pair: SKU first, then amount.
fn validate_pair(pair: &Pair) -> Result<(Sku, Quantity), LedgerError> {
    let sku = pair.sku.parse::<Sku>()?;
    let quantity = pair.amount.parse::<Quantity>()?;
    Ok((sku, quantity))
}
