//! Outcome of a split run.

use std::path::{Path, PathBuf};

/// A file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub message: String,
}

/// What a split run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Files written (or, for a dry run, files that would be written), in order.
    pub written: Vec<PathBuf>,
    /// Segments with no animation identifier.
    pub skipped: usize,
    /// Blocks whose identifier repeated an earlier one; the later block wins.
    pub overwritten: usize,
    /// Files that failed to write. Processing continued past each one.
    pub failed: Vec<WriteFailure>,
    /// Nothing was written to disk.
    pub dry_run: bool,
}

impl SplitReport {
    /// Record a generated file, counting a repeat of an earlier path as an overwrite.
    pub fn record_written(&mut self, path: PathBuf) {
        if self.written.contains(&path) {
            self.overwritten += 1;
        } else {
            self.written.push(path);
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// One-line summary for the end of a run.
    pub fn summary(&self, output_dir: &Path) -> String {
        let verb = if self.dry_run { "Would split" } else { "Split" };
        let mut msg = format!(
            "{} {} animation(s) into {}",
            verb,
            self.written.len(),
            output_dir.display()
        );
        if self.skipped > 0 {
            msg.push_str(&format!(
                ", {} segment(s) skipped without an identifier",
                self.skipped
            ));
        }
        if self.overwritten > 0 {
            msg.push_str(&format!(
                ", {} duplicate block(s) replaced an earlier one",
                self.overwritten
            ));
        }
        if self.has_failures() {
            msg.push_str(&format!(", {} failed to write", self.failed.len()));
        }
        msg
    }
}
