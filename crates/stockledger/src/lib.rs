//! Stockledger CLI tools.
//!
//! This crate provides the command-line tools for processing instruction
//! files against the in-memory stock ledger:
//!
//! - `sledger-process`: Apply instructions and print final stock levels
//! - `sledger-check`: Validate instructions, diagnostics and exit code only
//!
//! # Example Usage
//!
//! ```bash
//! sledger-process instructions.stock
//! sledger-check instructions.stock
//! cat instructions.stock | sledger-process
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod driver;
pub mod report;
