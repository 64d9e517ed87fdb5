//! # Terminal Reporter
//!
//! Human-readable, color-coded report. Colors are controlled globally through
//! `colored::control`, so the same code produces plain text when color is off.

use super::{ReportError, Reporter, ScanSummary};
use colored::*;
use std::io::Write;

/// Advisory describing CVE-2025-55182.
pub const ADVISORY_URL: &str =
    "https://react.dev/blog/2025/12/03/critical-security-vulnerability-in-react-server-components";

/// Patched React releases.
pub const PATCHED_REACT: [&str; 3] = ["19.0.1", "19.1.2", "19.2.1"];

/// Patched Next.js releases.
pub const PATCHED_NEXT: [&str; 7] = [
    "15.0.5", "15.1.9", "15.2.6", "15.3.6", "15.4.8", "15.5.7", "16.0.7",
];

/// Colorized console reporter.
#[derive(Debug, Default)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn render(&self, summary: &ScanSummary, out: &mut dyn Write) -> Result<(), ReportError> {
        writeln!(out, "\n{}", "=== CVE-2025-55182 Scan Results ===".white().bold())?;

        write_vulnerable(summary, out)?;
        write_safe(summary, out)?;
        write_unknown(summary, out)?;
        write_summary(summary, out)?;

        Ok(())
    }
}

fn write_vulnerable(summary: &ScanSummary, out: &mut dyn Write) -> Result<(), ReportError> {
    if summary.vulnerable.is_empty() {
        writeln!(out, "\n{}", "[+] No vulnerable repositories found.".green().bold())?;
        return Ok(());
    }

    writeln!(
        out,
        "\n{}",
        format!("[!] VULNERABLE REPOSITORIES ({}):", summary.vulnerable.len())
            .red()
            .bold()
    )?;
    writeln!(out, "{}", "-".repeat(60).dimmed())?;

    for result in &summary.vulnerable {
        writeln!(out, "  {} {}", "*".red(), result.repo_name().white().bold())?;
        writeln!(
            out,
            "    {} {}",
            "Path:".dimmed(),
            result.manifest_path().display().to_string().blue()
        )?;
        writeln!(out, "    {} {}", "Details:".dimmed(), result.details().yellow())?;
    }

    writeln!(out, "\n{}", "[!] RECOMMENDED ACTIONS:".yellow().bold())?;
    writeln!(out, "  1. Upgrade React to {}", PATCHED_REACT.join(", ").green())?;
    writeln!(out, "  2. Upgrade Next.js to {}", PATCHED_NEXT.join(", ").green())?;
    writeln!(out, "  3. Audit Server Actions ('use server') for exposed endpoints")?;
    writeln!(out, "  {} {}", "Advisory:".dimmed(), ADVISORY_URL.blue())?;

    Ok(())
}

fn write_safe(summary: &ScanSummary, out: &mut dyn Write) -> Result<(), ReportError> {
    writeln!(
        out,
        "\n{}",
        format!("[+] SAFE REPOSITORIES ({}):", summary.safe.len())
            .green()
            .bold()
    )?;

    for result in &summary.safe {
        let versions = result.version_summary();
        if versions.is_empty() {
            writeln!(out, "  {} {}", "*".green(), result.repo_name())?;
        } else {
            writeln!(
                out,
                "  {} {} ({})",
                "*".green(),
                result.repo_name(),
                versions.dimmed()
            )?;
        }
    }

    Ok(())
}

fn write_unknown(summary: &ScanSummary, out: &mut dyn Write) -> Result<(), ReportError> {
    if summary.unknown.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "\n{}",
        format!("[?] PARSE ERRORS ({}):", summary.unknown.len())
            .yellow()
            .bold()
    )?;

    for result in &summary.unknown {
        if let super::ScanResult::Unknown { error, .. } = result {
            writeln!(out, "  {} {}: {}", "*".yellow(), result.repo_name(), error.dimmed())?;
        }
    }

    Ok(())
}

fn write_summary(summary: &ScanSummary, out: &mut dyn Write) -> Result<(), ReportError> {
    writeln!(out, "\n{}", "=".repeat(60).cyan())?;
    writeln!(out, "{}", "[*] Summary".bold())?;
    writeln!(out, "    Total package.json files scanned: {}", summary.total_scanned)?;

    let vulnerable = format!("    Vulnerable: {}", summary.vulnerable.len());
    if summary.vulnerable.is_empty() {
        writeln!(out, "{}", vulnerable)?;
    } else {
        writeln!(out, "{}", vulnerable.red().bold())?;
    }
    writeln!(out, "{}", format!("    Safe: {}", summary.safe.len()).green())?;
    writeln!(out, "{}", format!("    Unknown: {}", summary.unknown.len()).yellow())?;

    Ok(())
}
