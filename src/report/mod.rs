//! # Report Generation Module
//!
//! @title Scan Report Generator
//! @author Ramprasad
//!
//! Collects per-manifest results into a [`ScanSummary`] and renders it as a
//! colorized terminal report or JSON, with an optional CSV export of the
//! vulnerable entries.
//!
//! ## Key Types
//!
//! - [`ScanSummary`] - Results of one scan, in discovery order
//! - [`ScanResult`] - Outcome for a single manifest
//! - [`Reporter`] - Rendering interface implemented by each output format

pub mod csv;
mod json;
mod result;
mod terminal;

pub use json::JsonReporter;
pub use result::{ScanResult, REASON_SEPARATOR};
pub use terminal::{TerminalReporter, ADVISORY_URL, PATCHED_NEXT, PATCHED_REACT};

use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while rendering or exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output stream failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing an export file failed.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colorized console output.
    Terminal,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Returns the reporter for this format.
    pub fn reporter(&self) -> Box<dyn Reporter> {
        match self {
            OutputFormat::Terminal => Box::new(TerminalReporter),
            OutputFormat::Json => Box::new(JsonReporter),
        }
    }
}

/// Renders a scan summary to an output stream.
pub trait Reporter {
    fn render(&self, summary: &ScanSummary, out: &mut dyn Write) -> Result<(), ReportError>;
}

/// Results of one scan.
///
/// Each list keeps discovery order. `total_scanned` also counts manifests
/// that produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Root path that was scanned.
    pub root: PathBuf,

    /// Number of manifests processed.
    pub total_scanned: usize,

    pub vulnerable: Vec<ScanResult>,
    pub safe: Vec<ScanResult>,
    pub unknown: Vec<ScanResult>,
}

impl ScanSummary {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            total_scanned: 0,
            vulnerable: Vec::new(),
            safe: Vec::new(),
            unknown: Vec::new(),
        }
    }

    /// Appends a result to the list matching its variant.
    pub fn push(&mut self, result: ScanResult) {
        match result {
            ScanResult::Vulnerable { .. } => self.vulnerable.push(result),
            ScanResult::Safe { .. } => self.safe.push(result),
            ScanResult::Unknown { .. } => self.unknown.push(result),
        }
    }

    pub fn has_vulnerable(&self) -> bool {
        !self.vulnerable.is_empty()
    }

    /// Default CSV location for this scan.
    ///
    /// When the root is a single manifest file, the CSV goes next to it.
    pub fn default_csv_path(&self) -> PathBuf {
        let dir = if self.root.is_file() {
            self.root.parent().map(PathBuf::from).unwrap_or_default()
        } else {
            self.root.clone()
        };
        dir.join(csv::CSV_FILE_NAME)
    }
}
