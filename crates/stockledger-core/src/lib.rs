//! Core types for stockledger
//!
//! This crate provides the fundamental types of the stockledger project:
//!
//! - [`Sku`] - A validated stock-keeping unit identifier
//! - [`Quantity`] - A non-negative unit count with a bounded parse range
//! - [`Command`] - The closed set of instructions (set-stock, add-stock, order)
//! - [`Ledger`] - The stock table and its mutation engine
//! - [`LedgerError`] - Structured engine errors with diagnostic codes
//!
//! # Example
//!
//! ```
//! use stockledger_core::{Command, Ledger, Pair, Quantity};
//!
//! let mut ledger = Ledger::new();
//!
//! // Seed two SKUs.
//! ledger
//!     .apply(&Command::SetStock(vec![
//!         Pair::new("AB-6", "100"),
//!         Pair::new("CD-3", "200"),
//!     ]))
//!     .unwrap();
//!
//! // Fulfil an order against one of them.
//! ledger
//!     .apply(&Command::Order {
//!         reference: "ON-123".into(),
//!         pairs: vec![Pair::new("AB-6", "50")],
//!     })
//!     .unwrap();
//!
//! let sku = "AB-6".parse().unwrap();
//! assert_eq!(ledger.level(&sku), Some(Quantity::new(50)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod ledger;
pub mod quantity;
pub mod sku;

pub use command::{Command, Pair};
pub use error::{LedgerError, Severity};
pub use ledger::{Ledger, Receipt, SkippedPair};
pub use quantity::Quantity;
pub use sku::Sku;
