//! Plain-text rendering of validation reports.
//!
//! The output is line-oriented and deterministic: the same report always
//! renders to the same bytes. Timing statistics are left out on purpose so
//! that two runs over one snapshot compare equal.

use helios_core::{Severity, ValidationReport};
use std::io::{self, Write};

/// Header printed before the checks in verbose mode.
pub const HEADER: &str = "Validating dataset...";

/// Final line of a passing report.
pub const PASSED_BANNER: &str = "✅ Dataset is valid";

/// Final line of a failing report.
pub const FAILED_BANNER: &str = "❌ Validation failed";

/// Role of a line in the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    FailedCheck,
    PassedCheck,
    WarningCheck,
    ErrorDetail,
    WarningDetail,
    PassedBanner,
    FailedBanner,
}

/// One line of the text report, without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Lays the report out as lines.
///
/// Failed blocking checks are always listed with their violations. Passing
/// checks are echoed only when `verbose` is set. Warnings are always listed.
/// Every text rendering of a report goes through this function.
pub fn report_lines(report: &ValidationReport, verbose: bool) -> Vec<ReportLine> {
    let mut lines = Vec::new();
    if verbose {
        lines.push(ReportLine::new(LineKind::Header, HEADER));
    }

    for check in &report.checks {
        let detail = match check.severity {
            Severity::Error if !check.is_clean() => {
                lines.push(ReportLine::new(
                    LineKind::FailedCheck,
                    format!("✗ {}", check.name),
                ));
                LineKind::ErrorDetail
            }
            Severity::Error => {
                if verbose {
                    lines.push(ReportLine::new(
                        LineKind::PassedCheck,
                        format!("✓ {}", check.name),
                    ));
                }
                continue;
            }
            Severity::Warning if !check.is_clean() => {
                lines.push(ReportLine::new(
                    LineKind::WarningCheck,
                    format!("⚠ {} ({})", check.name, check.violations.len()),
                ));
                LineKind::WarningDetail
            }
            Severity::Warning => continue,
        };

        for violation in &check.violations {
            lines.push(ReportLine::new(detail, format!("  {}", violation)));
        }
    }

    lines.push(if report.passed {
        ReportLine::new(LineKind::PassedBanner, PASSED_BANNER)
    } else {
        ReportLine::new(LineKind::FailedBanner, FAILED_BANNER)
    });
    lines
}

/// Writes the report to `out`, one [`report_lines`] entry per line.
pub fn write_report<W: Write>(
    report: &ValidationReport,
    verbose: bool,
    out: &mut W,
) -> io::Result<()> {
    for line in report_lines(report, verbose) {
        writeln!(out, "{}", line.text)?;
    }
    Ok(())
}

/// Renders the report into a string.
pub fn render_report(report: &ValidationReport, verbose: bool) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_report(report, verbose, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}
