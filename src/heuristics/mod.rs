//! # Source Directive Heuristic
//!
//! @title Server Action Directive Probe
//! @author Ramprasad
//!
//! Samples a project's source files looking for the `"use server"` directive
//! that marks React Server Actions.
//!
//! ## Sampling Semantics
//!
//! At most `max_files` candidate files are gathered (traversal order, cache
//! directory pruned) and the search stops at the first hit. A hit is
//! authoritative. A miss only means nothing was found in the sample.

use crate::discovery::find_source_files;
use std::path::Path;

/// Literal searched for in source files, quotes included.
pub const SERVER_DIRECTIVE: &str = "\"use server\"";

/// Default number of candidate source files inspected per project.
pub const DEFAULT_MAX_SOURCE_FILES: usize = 100;

/// Answers whether a project directory contains Server Action directives.
pub trait DirectiveProbe {
    /// Returns true if a `"use server"` directive was found under `dir`.
    fn contains_directive(&self, dir: &Path) -> bool;
}

/// Filesystem-backed probe with a cap on inspected files.
#[derive(Debug, Clone, Copy)]
pub struct FsDirectiveProbe {
    max_files: usize,
}

impl FsDirectiveProbe {
    pub fn new(max_files: usize) -> Self {
        Self { max_files }
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }
}

impl Default for FsDirectiveProbe {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SOURCE_FILES)
    }
}

impl DirectiveProbe for FsDirectiveProbe {
    fn contains_directive(&self, dir: &Path) -> bool {
        if self.max_files == 0 {
            return false;
        }

        find_source_files(dir, self.max_files).iter().any(|file| {
            match std::fs::read(file) {
                Ok(bytes) => match std::str::from_utf8(&bytes) {
                    Ok(text) => text.contains(SERVER_DIRECTIVE),
                    Err(_) => {
                        log::debug!("Skipping non-UTF-8 source file {}", file.display());
                        false
                    }
                },
                Err(e) => {
                    log::debug!("Skipping unreadable source file {}: {}", file.display(), e);
                    false
                }
            }
        })
    }
}
