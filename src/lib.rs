//! # RSC-Sentinel Library
//!
//! @title RSC-Sentinel - CVE-2025-55182 Exposure Scanner
//! @author Ramprasad
//!
//! A static scanner that walks a directory tree, reads every `package.json`
//! outside `node_modules`, and flags projects whose declared React or Next.js
//! versions are affected by CVE-2025-55182 (React Server Components RCE).
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions and argument parsing
//! - [`discovery`] - Manifest and source file traversal
//! - [`manifest`] - `package.json` loading and dependency extraction
//! - [`rules`] - Version classification rules
//! - [`heuristics`] - `"use server"` source directive probe
//! - [`scanner`] - The end-to-end scan pass
//! - [`report`] - Terminal, JSON and CSV reporting
//!
//! ## Example
//!
//! ```rust,ignore
//! use rsc_sentinel::{scan, ScanOptions};
//!
//! let summary = scan(Path::new("./repos"), &ScanOptions::default());
//! println!("{} vulnerable", summary.vulnerable.len());
//! ```

pub mod cli;
pub mod discovery;
pub mod heuristics;
pub mod manifest;
pub mod report;
pub mod rules;
pub mod scanner;

pub use cli::Cli;
pub use manifest::{DependencyInfo, ManifestError, ManifestRecord};
pub use report::{ScanResult, ScanSummary};
pub use rules::{classify, RuleRegistry, Verdict};
pub use scanner::{scan, ScanOptions};
