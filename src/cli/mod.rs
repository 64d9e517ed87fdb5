//! # CLI Module
//!
//! @title Command Line Interface
//! @author Ramprasad
//!
//! This module defines the command-line interface for RSC-Sentinel using
//! the `clap` derive macros for declarative argument parsing.

use crate::heuristics::DEFAULT_MAX_SOURCE_FILES;
use crate::report::OutputFormat;
use crate::scanner::ScanOptions;
use clap::Parser;
use std::path::PathBuf;

/// RSC-Sentinel command-line interface.
///
/// Scans a directory tree for `package.json` manifests and reports projects
/// whose React or Next.js versions are exposed to CVE-2025-55182.
#[derive(Parser, Debug)]
#[command(name = "rsc-sentinel")]
#[command(author = "RamprasadGoud")]
#[command(version)]
#[command(about = "Scan projects for React/Next.js versions affected by CVE-2025-55182")]
#[command(long_about = None)]
pub struct Cli {
    /// Directory (or single package.json) to scan.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output format for the report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Do not write the CSV of vulnerable projects.
    #[arg(long)]
    pub no_csv: bool,

    /// Write the CSV here instead of `<PATH>/cve-2025-55182-scan-results.csv`.
    #[arg(long, value_name = "FILE", conflicts_with = "no_csv")]
    pub csv_path: Option<PathBuf>,

    /// Maximum source files sampled per project for `"use server"`.
    ///
    /// Set to 0 to skip the source check entirely.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_SOURCE_FILES)]
    pub max_source_files: usize,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Exit with status 1 when any vulnerable project is found.
    #[arg(long)]
    pub fail_on_vulnerable: bool,
}

impl Cli {
    /// Builds scan options from the parsed arguments.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_source_files: self.max_source_files,
        }
    }
}
