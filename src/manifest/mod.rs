//! # Manifest Module
//!
//! @title package.json Loading and Dependency Extraction
//! @author Ramprasad
//!
//! Loads `package.json` files and extracts the handful of dependency facts the
//! classifier needs.
//!
//! ## Parsing Strategy
//!
//! Manifests are parsed with `serde_json`. A file that cannot be read, or whose
//! content is not valid JSON, produces a [`ManifestError`] that the scanner
//! records as an unknown result; the scan itself carries on. Valid JSON with an
//! unexpected shape (a non-object root, a `dependencies` array, a numeric
//! version) is tolerated and simply yields fewer facts.
//!
//! A leading UTF-8 byte-order mark is stripped before parsing, as npm does.
//! When a dependency section repeats a key, the last occurrence wins, since
//! that is what `serde_json`'s object map keeps; a text scan would see the
//! first one instead.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Package whose version decides React exposure.
pub const REACT_PACKAGE: &str = "react";

/// Package whose version decides Next.js exposure.
pub const NEXT_PACKAGE: &str = "next";

/// React Server Components bindings shipped for each bundler.
pub const REACT_SERVER_PACKAGES: [&str; 3] = [
    "react-server-dom-webpack",
    "react-server-dom-turbopack",
    "react-server-dom-parcel",
];

/// Dependency sections consulted, in lookup order.
const DEPENDENCY_SECTIONS: [&str; 2] = ["dependencies", "devDependencies"];

/// Failure to obtain dependency information from a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The file could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A discovered manifest file and its raw content.
#[derive(Debug)]
pub struct ManifestRecord {
    /// Display name of the project owning the manifest.
    pub repo_name: String,

    /// Path to the manifest as discovered.
    pub manifest_path: PathBuf,

    /// File content, or the read error.
    pub content: Result<String, ManifestError>,
}

impl ManifestRecord {
    /// Reads a manifest from disk.
    ///
    /// Never fails: an I/O error is captured in [`ManifestRecord::content`].
    pub fn load(path: &Path) -> Self {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        });

        Self {
            repo_name: repo_name_for(path),
            manifest_path: path.to_path_buf(),
            content,
        }
    }
}

/// Dependency facts extracted from a single manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyInfo {
    /// Declared `react` version string, when it is a string.
    pub react_version: Option<String>,

    /// Declared `next` version string, when it is a string.
    pub next_version: Option<String>,

    /// Whether `react` is declared at all.
    pub has_react: bool,

    /// Whether `next` is declared at all.
    pub has_next: bool,

    /// Whether any React Server Components binding is declared.
    pub has_react_server_package: bool,
}

impl DependencyInfo {
    /// Parses manifest text and extracts dependency facts.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] if the text is not valid JSON.
    pub fn from_manifest_text(text: &str) -> Result<Self, ManifestError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Extracts dependency facts from an already parsed manifest.
    pub fn from_value(manifest: &Value) -> Self {
        let sections: Vec<&Map<String, Value>> = DEPENDENCY_SECTIONS
            .iter()
            .filter_map(|name| manifest.get(name).and_then(Value::as_object))
            .collect();

        let lookup = |package: &str| sections.iter().find_map(|deps| deps.get(package));
        let version_of = |package: &str| {
            lookup(package)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            react_version: version_of(REACT_PACKAGE),
            next_version: version_of(NEXT_PACKAGE),
            has_react: lookup(REACT_PACKAGE).is_some(),
            has_next: lookup(NEXT_PACKAGE).is_some(),
            has_react_server_package: REACT_SERVER_PACKAGES
                .iter()
                .any(|&pkg| lookup(pkg).is_some()),
        }
    }

    /// Returns true if the manifest declares React or Next.js.
    pub fn uses_react_stack(&self) -> bool {
        self.has_react || self.has_next
    }
}

/// Derives a project display name from a manifest path.
///
/// Uses the directory containing the manifest; for a manifest at a relative
/// root such as `./package.json` the directory is canonicalized first.
pub fn repo_name_for(manifest_path: &Path) -> String {
    let parent = match manifest_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if let Some(name) = parent.file_name() {
        return name.to_string_lossy().into_owned();
    }

    std::fs::canonicalize(parent)
        .ok()
        .and_then(|abs| abs.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| parent.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_react_and_next() {
        let info = DependencyInfo::from_manifest_text(
            r#"{
                "name": "web",
                "dependencies": { "react": "^19.1.0", "next": "15.0.3" }
            }"#,
        )
        .unwrap();

        assert_eq!(info.react_version.as_deref(), Some("^19.1.0"));
        assert_eq!(info.next_version.as_deref(), Some("15.0.3"));
        assert!(info.has_react);
        assert!(info.has_next);
        assert!(!info.has_react_server_package);
    }

    #[test]
    fn test_dev_dependencies_are_flattened() {
        let info = DependencyInfo::from_manifest_text(
            r#"{
                "dependencies": { "react": "18.2.0" },
                "devDependencies": { "react": "19.0.0", "react-server-dom-webpack": "19.0.0" }
            }"#,
        )
        .unwrap();

        // dependencies take precedence over devDependencies
        assert_eq!(info.react_version.as_deref(), Some("18.2.0"));
        assert!(info.has_react_server_package);
    }

    #[test]
    fn test_key_match_is_exact_and_case_sensitive() {
        let info = DependencyInfo::from_manifest_text(
            r#"{ "dependencies": { "React": "19.0.0", "react-dom": "19.0.0", "next-auth": "4.0.0" } }"#,
        )
        .unwrap();

        assert_eq!(info, DependencyInfo::default());
    }

    #[test]
    fn test_non_string_version_is_present_but_absent() {
        let info = DependencyInfo::from_manifest_text(
            r#"{ "dependencies": { "next": { "version": "15" } } }"#,
        )
        .unwrap();

        assert!(info.has_next);
        assert_eq!(info.next_version, None);
    }

    #[test]
    fn test_unexpected_shapes_are_tolerated() {
        assert_eq!(
            DependencyInfo::from_manifest_text("[1, 2, 3]").unwrap(),
            DependencyInfo::default()
        );
        assert_eq!(
            DependencyInfo::from_manifest_text(r#"{ "dependencies": ["react"] }"#).unwrap(),
            DependencyInfo::default()
        );
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = DependencyInfo::from_manifest_text(r#"{ "dependencies": { "react": "19.0.0", } "#)
            .unwrap_err();

        assert!(matches!(err, ManifestError::Parse(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let info = DependencyInfo::from_manifest_text(
            "\u{feff}{ \"dependencies\": { \"react\": \"19.1.0\" } }",
        )
        .unwrap();

        assert_eq!(info.react_version.as_deref(), Some("19.1.0"));
        assert!(info.has_react);
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let info = DependencyInfo::from_manifest_text(
            r#"{ "dependencies": { "react": "18.2.0", "react": "19.0.0" } }"#,
        )
        .unwrap();

        assert_eq!(info.react_version.as_deref(), Some("19.0.0"));
    }

    #[test]
    fn test_missing_file_is_captured() {
        let record = ManifestRecord::load(Path::new("/nonexistent/app/package.json"));

        assert_eq!(record.repo_name, "app");
        assert!(matches!(record.content, Err(ManifestError::Io { .. })));
    }
}
