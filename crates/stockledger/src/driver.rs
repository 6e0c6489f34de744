//! The instruction driver: feeds parsed lines through the engine.
//!
//! Instructions are processed strictly in input order, each to completion,
//! before the next begins. No diagnostic is ever fatal: the driver records
//! it and moves on to the next line.

use stockledger_core::{Ledger, LedgerError, Severity};
use stockledger_parser::{parse, ParseError};
use tracing::debug;

/// What went wrong (or was skipped) on one instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line did not parse; the engine never ran.
    Parse(ParseError),
    /// The engine rejected the instruction, or skipped one of its pairs.
    Ledger(LedgerError),
}

/// A diagnostic tied to its instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number of the instruction.
    pub line: usize,
    /// The instruction text, trimmed of surrounding whitespace.
    pub text: String,
    /// The underlying error.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Get the diagnostic code (e.g. `"P0001"`, `"E2001"`).
    #[must_use]
    pub fn code(&self) -> String {
        match &self.kind {
            DiagnosticKind::Parse(err) => format!("P{:04}", err.kind_code()),
            DiagnosticKind::Ledger(err) => err.code().to_owned(),
        }
    }

    /// Get the severity this diagnostic is reported with.
    ///
    /// Parse errors and domain errors are errors; format errors are
    /// warnings, because they only ever skip a single pair while the
    /// instruction succeeds.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match &self.kind {
            DiagnosticKind::Parse(_) => Severity::Error,
            DiagnosticKind::Ledger(err) => err.severity(),
        }
    }

    /// Get the diagnostic message.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::Parse(err) => err.message(),
            DiagnosticKind::Ledger(err) => err.to_string(),
        }
    }
}

/// The outcome of processing a whole instruction source.
#[derive(Debug, Clone, Default)]
pub struct Run {
    /// Final state of the stock table.
    pub ledger: Ledger,
    /// All diagnostics, in input order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of instruction lines processed.
    pub instructions: usize,
}

impl Run {
    /// Number of error-severity diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    /// Number of warning-severity diagnostics.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count()
    }
}

/// Process an instruction source line by line.
///
/// With `verbose` set, per-line progress goes to stderr.
#[must_use]
pub fn process_source(source: &str, verbose: bool) -> Run {
    let mut run = Run::default();

    for line in parse(source).lines {
        run.instructions += 1;
        let text = line.span.text(source).trim().to_owned();
        if verbose {
            eprintln!("Processing instruction {}: {}", line.number, text);
        }

        match line.parsed {
            Ok(spanned) => match run.ledger.apply(&spanned.value) {
                Ok(receipt) => {
                    debug!(
                        line = line.number,
                        operation = spanned.value.operation(),
                        applied = receipt.applied,
                        skipped = receipt.skipped.len(),
                        "instruction applied"
                    );
                    for skip in receipt.skipped {
                        run.diagnostics.push(Diagnostic {
                            line: line.number,
                            text: text.clone(),
                            kind: DiagnosticKind::Ledger(skip.reason),
                        });
                    }
                }
                Err(err) => {
                    debug!(line = line.number, %err, "instruction rejected");
                    run.diagnostics.push(Diagnostic {
                        line: line.number,
                        text: text.clone(),
                        kind: DiagnosticKind::Ledger(err),
                    });
                }
            },
            Err(err) => {
                debug!(line = line.number, %err, "instruction did not parse");
                run.diagnostics.push(Diagnostic {
                    line: line.number,
                    text,
                    kind: DiagnosticKind::Parse(err),
                });
            }
        }
    }

    run
}
