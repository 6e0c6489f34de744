//! Diagnostic reporting.
//!
//! Parse errors get ariadne reports with source context; engine
//! diagnostics get plain `error[CODE]`/`warning[CODE]` lines carrying the
//! instruction's line number and original text.

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use serde::Serialize;
use std::io::Write;
use stockledger_core::{Ledger, Severity};

use crate::driver::{Diagnostic, DiagnosticKind};

/// Report diagnostics to the given writer, in input order.
///
/// `path` names the line source (a file path or `<stdin>`); `source` is
/// the full instruction text, used for parse-error context rendering.
pub fn report_diagnostics<W: Write>(
    diagnostics: &[Diagnostic],
    path: &str,
    source: &str,
    writer: &mut W,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();

    for diagnostic in diagnostics {
        match &diagnostic.kind {
            // Parse errors with a source region get an ariadne report; an
            // empty instruction has no region to point at, so it falls
            // through to the plain rendering.
            DiagnosticKind::Parse(error) if !error.span.is_empty() => {
                let color = colors.next();
                let (start, end) = error.span();

                let mut report = Report::build(ReportKind::Error, (path, start..end))
                    .with_code(diagnostic.code())
                    .with_message(error.message())
                    .with_label(
                        Label::new((path, start..end))
                            .with_message(error.label())
                            .with_color(color),
                    );
                if let Some(hint) = &error.hint {
                    report = report.with_help(hint);
                }
                report
                    .finish()
                    .write((path, Source::from(source)), &mut *writer)?;
            }
            DiagnosticKind::Parse(_) | DiagnosticKind::Ledger(_) => {
                let severity = match diagnostic.severity() {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                };
                writeln!(
                    writer,
                    "{severity}[{}]: {}",
                    diagnostic.code(),
                    diagnostic.message()
                )?;
                writeln!(
                    writer,
                    "  instruction {}: {}",
                    diagnostic.line, diagnostic.text
                )?;
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}

/// Print the final stock levels, one `"<SKU> <quantity>"` line per SKU in
/// ascending lexical order.
pub fn print_stock_levels<W: Write>(ledger: &Ledger, writer: &mut W) -> std::io::Result<()> {
    for (sku, quantity) in ledger.levels() {
        writeln!(writer, "{sku} {quantity}")?;
    }
    Ok(())
}

/// Print a summary of errors and warnings.
pub fn print_summary<W: Write>(
    errors: usize,
    warnings: usize,
    writer: &mut W,
) -> std::io::Result<()> {
    if errors == 0 && warnings == 0 {
        writeln!(writer, "\x1b[32m\u{2713}\x1b[0m No errors found")?;
    } else {
        let error_text = if errors == 1 { "error" } else { "errors" };
        let warning_text = if warnings == 1 { "warning" } else { "warnings" };

        if errors > 0 && warnings > 0 {
            writeln!(
                writer,
                "\x1b[31m\u{2717}\x1b[0m {errors} {error_text}, {warnings} {warning_text}"
            )?;
        } else if errors > 0 {
            writeln!(writer, "\x1b[31m\u{2717}\x1b[0m {errors} {error_text}")?;
        } else {
            writeln!(writer, "\x1b[33m\u{26A0}\x1b[0m {warnings} {warning_text}")?;
        }
    }
    Ok(())
}

/// A diagnostic message in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// Line number (1-based).
    pub line: usize,
    /// Severity: "error" or "warning".
    pub severity: String,
    /// Diagnostic code (e.g. "P0001", "E2001").
    pub code: String,
    /// Diagnostic message.
    pub message: String,
    /// The instruction text the diagnostic refers to.
    pub context: String,
    /// Optional hint for fixing the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        let hint = match &diagnostic.kind {
            DiagnosticKind::Parse(error) => error.hint.clone(),
            DiagnosticKind::Ledger(_) => None,
        };
        Self {
            line: diagnostic.line,
            severity: match diagnostic.severity() {
                Severity::Error => "error".to_owned(),
                Severity::Warning => "warning".to_owned(),
            },
            code: diagnostic.code(),
            message: diagnostic.message(),
            context: diagnostic.text.clone(),
            hint,
        }
    }
}

/// One final stock level in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonLevel {
    /// The SKU.
    pub sku: String,
    /// Its final quantity.
    pub quantity: u32,
}

/// JSON output structure for a whole run.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// List of diagnostics, in input order.
    pub diagnostics: Vec<JsonDiagnostic>,
    /// Total error count.
    pub error_count: usize,
    /// Total warning count.
    pub warning_count: usize,
    /// Final stock levels in ascending SKU order (process command only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<JsonLevel>>,
}

impl JsonOutput {
    /// Build the JSON output for a run, with or without the final levels.
    #[must_use]
    pub fn from_run(run: &crate::driver::Run, with_levels: bool) -> Self {
        let levels = with_levels.then(|| {
            run.ledger
                .levels()
                .map(|(sku, quantity)| JsonLevel {
                    sku: sku.to_string(),
                    quantity: quantity.get(),
                })
                .collect()
        });
        Self {
            diagnostics: run.diagnostics.iter().map(JsonDiagnostic::from).collect(),
            error_count: run.error_count(),
            warning_count: run.warning_count(),
            levels,
        }
    }
}
