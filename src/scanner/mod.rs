//! # Scanner Module
//!
//! @title Scan Pipeline
//! @author Ramprasad
//!
//! Drives a single sequential pass over a directory tree: discover manifests,
//! extract dependency facts, classify, and collect results into a
//! [`ScanSummary`]. No error in an individual manifest stops the pass.

use crate::discovery::find_manifests;
use crate::heuristics::{DirectiveProbe, FsDirectiveProbe, DEFAULT_MAX_SOURCE_FILES};
use crate::manifest::{DependencyInfo, ManifestRecord};
use crate::report::{ScanResult, ScanSummary};
use crate::rules::{RuleContext, RuleRegistry, Verdict};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// Tunables for a scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Cap on source files sampled by the directive probe per project.
    pub max_source_files: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_source_files: DEFAULT_MAX_SOURCE_FILES,
        }
    }
}

/// Scans `root` without progress output.
pub fn scan(root: &Path, options: &ScanOptions) -> ScanSummary {
    scan_with_progress(root, options, &ProgressBar::hidden())
}

/// Scans `root`, ticking `progress` once per manifest.
///
/// # Arguments
///
/// * `root` - Directory (or single `package.json`) to scan
/// * `options` - Scan tunables
/// * `progress` - Progress indicator; its length is set to the manifest count
///
/// # Returns
///
/// The collected results in discovery order.
pub fn scan_with_progress(root: &Path, options: &ScanOptions, progress: &ProgressBar) -> ScanSummary {
    let probe = FsDirectiveProbe::new(options.max_source_files);
    let registry = RuleRegistry::new();

    let manifests = find_manifests(root);
    progress.set_length(manifests.len() as u64);

    let mut summary = ScanSummary::new(root.to_path_buf());

    for path in &manifests {
        progress.set_message(format!("Checking {}", path.display()));

        summary.total_scanned += 1;
        if let Some(result) = scan_manifest(path, &registry, &probe) {
            summary.push(result);
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    summary
}

/// Loads and classifies a single manifest.
///
/// Returns `None` for manifests that declare neither React nor Next.js.
pub fn scan_manifest(
    path: &Path,
    registry: &RuleRegistry,
    probe: &dyn DirectiveProbe,
) -> Option<ScanResult> {
    let ManifestRecord {
        repo_name,
        manifest_path,
        content,
    } = ManifestRecord::load(path);

    let info = match content.and_then(|text| DependencyInfo::from_manifest_text(&text)) {
        Ok(info) => info,
        Err(e) => {
            log::warn!("Could not process {}: {}", manifest_path.display(), e);
            return Some(ScanResult::Unknown {
                repo_name,
                manifest_path,
                error: e.to_string(),
            });
        }
    };

    let project_dir = project_dir_of(&manifest_path);
    let verdict = registry.classify(&RuleContext {
        info: &info,
        project_dir: &project_dir,
        probe,
    });
    log::debug!("{} -> {:?}", manifest_path.display(), verdict);

    let DependencyInfo {
        react_version,
        next_version,
        ..
    } = info;

    match verdict {
        Verdict::Vulnerable(reasons) => Some(ScanResult::Vulnerable {
            repo_name,
            manifest_path,
            reasons,
            react_version,
            next_version,
        }),
        Verdict::Safe => Some(ScanResult::Safe {
            repo_name,
            manifest_path,
            react_version,
            next_version,
        }),
        Verdict::NotApplicable => None,
    }
}

fn project_dir_of(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
