//! Engine error types.

use thiserror::Error;

use crate::Sku;

/// An error raised while validating or applying an instruction.
///
/// Format errors ([`InvalidSkuFormat`], [`InvalidAmountFormat`]) are local
/// to one (SKU, amount) pair: the engine skips that pair and continues with
/// its siblings. Domain errors ([`SkuNotFound`], [`InsufficientStock`])
/// abort the remainder of the current instruction; mutations already
/// applied by earlier pairs stay committed.
///
/// [`InvalidSkuFormat`]: LedgerError::InvalidSkuFormat
/// [`InvalidAmountFormat`]: LedgerError::InvalidAmountFormat
/// [`SkuNotFound`]: LedgerError::SkuNotFound
/// [`InsufficientStock`]: LedgerError::InsufficientStock
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// E1001: token does not match the SKU grammar.
    #[error("invalid SKU format: {token}")]
    InvalidSkuFormat {
        /// The offending token.
        token: String,
    },

    /// E1002: token is not a digit string in `[0, 999]`.
    #[error("invalid amount format: {token}")]
    InvalidAmountFormat {
        /// The offending token.
        token: String,
    },

    /// E2001: SKU referenced by `add-stock` or `order` is not in the table.
    #[error("SKU {sku} not found")]
    SkuNotFound {
        /// The SKU that is absent from the table.
        sku: Sku,
    },

    /// E2002: order quantity exceeds the current stock level.
    #[error("insufficient stock for order {reference}, SKU: {sku}")]
    InsufficientStock {
        /// The order reference from the instruction.
        reference: String,
        /// The SKU whose level is too low.
        sku: Sku,
    },
}

impl LedgerError {
    /// Get the diagnostic code (e.g. `"E1001"`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSkuFormat { .. } => "E1001",
            Self::InvalidAmountFormat { .. } => "E1002",
            Self::SkuNotFound { .. } => "E2001",
            Self::InsufficientStock { .. } => "E2002",
        }
    }

    /// Check whether this is a format error.
    ///
    /// Format errors only ever cause a single pair to be skipped; they
    /// never abort an instruction.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(
            self,
            Self::InvalidSkuFormat { .. } | Self::InvalidAmountFormat { .. }
        )
    }

    /// Get the severity this error is reported with.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        if self.is_format() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The instruction (or part of it) was rejected.
    Error,
    /// A pair was skipped; the instruction still succeeded.
    Warning,
}
