//! # Scan Result Definitions
//!
//! @title Per-Manifest Scan Results
//! @author Ramprasad
//!
//! Defines the outcome recorded for each classified manifest.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Separator used when a vulnerable result's reasons are shown on one line.
pub const REASON_SEPARATOR: &str = "; ";

/// Outcome for one manifest.
///
/// Each manifest produces at most one result. Manifests that declare neither
/// React nor Next.js produce none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScanResult {
    /// Declared versions fall in the affected range.
    Vulnerable {
        repo_name: String,
        manifest_path: PathBuf,
        /// Reasons in rule order.
        reasons: Vec<String>,
        react_version: Option<String>,
        next_version: Option<String>,
    },

    /// Uses React or Next.js outside the affected range.
    Safe {
        repo_name: String,
        manifest_path: PathBuf,
        react_version: Option<String>,
        next_version: Option<String>,
    },

    /// The manifest could not be read or parsed.
    Unknown {
        repo_name: String,
        manifest_path: PathBuf,
        error: String,
    },
}

impl ScanResult {
    pub fn repo_name(&self) -> &str {
        match self {
            ScanResult::Vulnerable { repo_name, .. }
            | ScanResult::Safe { repo_name, .. }
            | ScanResult::Unknown { repo_name, .. } => repo_name,
        }
    }

    pub fn manifest_path(&self) -> &Path {
        match self {
            ScanResult::Vulnerable { manifest_path, .. }
            | ScanResult::Safe { manifest_path, .. }
            | ScanResult::Unknown { manifest_path, .. } => manifest_path,
        }
    }

    /// Returns the reasons joined on one line, or an empty string.
    pub fn details(&self) -> String {
        match self {
            ScanResult::Vulnerable { reasons, .. } => reasons.join(REASON_SEPARATOR),
            _ => String::new(),
        }
    }

    /// Returns the declared versions as `React x, Next y`, omitting absent ones.
    pub fn version_summary(&self) -> String {
        let (react, next) = match self {
            ScanResult::Vulnerable {
                react_version,
                next_version,
                ..
            }
            | ScanResult::Safe {
                react_version,
                next_version,
                ..
            } => (react_version.as_deref(), next_version.as_deref()),
            ScanResult::Unknown { .. } => (None, None),
        };

        let mut parts = Vec::new();
        if let Some(v) = react {
            parts.push(format!("React {}", v));
        }
        if let Some(v) = next {
            parts.push(format!("Next {}", v));
        }
        parts.join(", ")
    }
}
