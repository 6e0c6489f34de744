//! Instruction commands.
//!
//! A [`Command`] is one parsed instruction line: the operation plus its
//! positionally-paired arguments. Pair tokens are kept raw — SKU and
//! amount grammar is checked by the engine per pair, so that a malformed
//! pair skips without failing the instruction it sits in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positional (SKU, amount) argument pair, still in token form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// The SKU token (even argument position).
    pub sku: String,
    /// The amount token (odd argument position).
    pub amount: String,
}

impl Pair {
    /// Create a pair from raw tokens.
    pub fn new(sku: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sku, self.amount)
    }
}

/// One instruction, dispatched on the operation name.
///
/// The set of operations is closed: anything else is rejected at parse
/// time as an unknown operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `set-stock (SKU AMOUNT)+` — overwrite levels unconditionally.
    SetStock(Vec<Pair>),
    /// `add-stock (SKU AMOUNT)+` — increment levels of existing SKUs.
    AddStock(Vec<Pair>),
    /// `order ORDER_REF (SKU AMOUNT)+` — decrement levels if available.
    Order {
        /// Opaque order reference, used only in diagnostics.
        reference: String,
        /// The (SKU, amount) pairs to fulfil.
        pairs: Vec<Pair>,
    },
}

impl Command {
    /// Get the operation name as it appears in instruction text.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::SetStock(_) => "set-stock",
            Self::AddStock(_) => "add-stock",
            Self::Order { .. } => "order",
        }
    }

    /// Get the argument pairs of this command.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        match self {
            Self::SetStock(pairs) | Self::AddStock(pairs) | Self::Order { pairs, .. } => pairs,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation())?;
        if let Self::Order { reference, .. } = self {
            write!(f, " {reference}")?;
        }
        for pair in self.pairs() {
            write!(f, " {pair}")?;
        }
        Ok(())
    }
}
