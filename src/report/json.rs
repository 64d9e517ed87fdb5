//! # JSON Reporter
//!
//! Machine-readable rendering of the full scan summary.

use super::{ReportError, Reporter, ScanSummary};
use std::io::Write;

#[derive(Debug, Default)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn render(&self, summary: &ScanSummary, out: &mut dyn Write) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut *out, summary)?;
        writeln!(out)?;
        Ok(())
    }
}
