use anyhow::Result;
use colored::*;
use helios_core::{CheckReport, ValidationReport};
use helios_validator::{LineKind, report_lines};
use serde_json::{Value, json};

pub fn print_validation_report(report: &ValidationReport, format: &str, verbose: bool) -> Result<()> {
    match format {
        "json" => print_json_report(report),
        _ => {
            print_text_report(report, verbose);
            Ok(())
        }
    }
}

/// Coloured rendition of the plain-text report; same lines, same order.
fn print_text_report(report: &ValidationReport, verbose: bool) {
    for line in report_lines(report, verbose) {
        let text = line.text.as_str();
        let styled = match line.kind {
            LineKind::Header => text.bold(),
            LineKind::FailedCheck => text.red().bold(),
            LineKind::PassedCheck => text.green(),
            LineKind::WarningCheck => text.yellow().bold(),
            LineKind::ErrorDetail => text.red(),
            LineKind::WarningDetail => text.yellow(),
            LineKind::PassedBanner => text.green().bold(),
            LineKind::FailedBanner => text.red().bold(),
        };
        println!("{}", styled);
    }
}

fn print_json_report(report: &ValidationReport) -> Result<()> {
    let output = json!({
        "passed": report.passed,
        "checks": report.checks.iter().map(check_json).collect::<Result<Vec<_>>>()?,
        "summary": {
            "checks_run": report.stats.checks_run,
            "error_count": report.stats.error_count,
            "warning_count": report.stats.warning_count,
            "rows": report.stats.rows,
            "started_at": report.stats.started_at,
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn check_json(check: &CheckReport) -> Result<Value> {
    let violations = check
        .violations
        .iter()
        .map(|violation| -> Result<Value> {
            let mut value = serde_json::to_value(violation)?;
            value["message"] = json!(violation.to_string());
            Ok(value)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(json!({
        "id": check.id,
        "name": check.name,
        "severity": check.severity,
        "passed": check.is_clean(),
        "violations": violations,
    }))
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Fatal condition that stops the command before any check runs.
pub fn print_fatal(message: &str) {
    eprintln!("{} {}", "❌".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
