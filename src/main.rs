//! # RSC-Sentinel CLI Entry Point
//!
//! @title RSC-Sentinel CLI
//! @author Ramprasad
//!
//! This module provides the main entry point for the RSC-Sentinel
//! command-line scanner.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use rsc_sentinel::report::{csv, OutputFormat, ScanSummary};
use rsc_sentinel::scanner::scan_with_progress;
use rsc_sentinel::Cli;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// ASCII art banner displayed at startup.
const BANNER: &str = r#"
  ____  ____   ____      ____             _   _            _
 |  _ \/ ___| / ___|    / ___|  ___ _ __ | |_(_)_ __   ___| |
 | |_) \___ \| |   _____\___ \ / _ \ '_ \| __| | '_ \ / _ \ |
 |  _ < ___) | |__|_____|___) |  __/ | | | |_| | | | |  __/ |
 |_| \_\____/ \____|    |____/ \___|_| |_|\__|_|_| |_|\___|_|

          React Server Components CVE-2025-55182 Scanner
"#;

/// Application entry point.
///
/// Initializes logging, parses arguments, runs the scan, renders the report,
/// and exports the CSV when vulnerable projects were found.
///
/// # Returns
///
/// Exit status 0 on a completed scan, or 1 with `--fail-on-vulnerable` when
/// vulnerable projects were found.
fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if !cli.path.exists() {
        Cli::command()
            .error(
                ErrorKind::ValueValidation,
                format!("path does not exist: {}", cli.path.display()),
            )
            .exit();
    }

    configure_color(cli.no_color);

    if cli.format == OutputFormat::Terminal {
        println!("{}", BANNER.cyan().bold());
        println!(
            "{} {}",
            "[*] Scanning:".green().bold(),
            cli.path.display().to_string().yellow()
        );
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos}/{len} {msg}")?,
    );

    let summary = scan_with_progress(&cli.path, &cli.scan_options(), &progress);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli.format
        .reporter()
        .render(&summary, &mut out)
        .context("failed to render report")?;

    if let Some(csv_path) = csv_target(&cli, &summary) {
        csv::write_csv(&csv_path, &summary.vulnerable)?;
        let message = format!(
            "{} {}",
            "[+] Results exported to:".green(),
            csv_path.display().to_string().yellow()
        );
        match cli.format {
            OutputFormat::Terminal => writeln!(out, "\n{}", message)?,
            OutputFormat::Json => eprintln!("{}", message),
        }
    }

    if cli.fail_on_vulnerable && summary.has_vulnerable() {
        return Ok(ExitCode::from(1));
    }

    Ok(ExitCode::SUCCESS)
}

/// Turns color off for `--no-color`, `NO_COLOR`, or a non-terminal stdout.
fn configure_color(no_color: bool) {
    if no_color || std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Returns where the CSV should be written, if at all.
fn csv_target(cli: &Cli, summary: &ScanSummary) -> Option<PathBuf> {
    if cli.no_csv || !summary.has_vulnerable() {
        return None;
    }

    Some(
        cli.csv_path
            .clone()
            .unwrap_or_else(|| summary.default_csv_path()),
    )
}
