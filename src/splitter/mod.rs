//! Stylesheet splitting pipeline.
//!
//! Turns one concatenated hamburgers stylesheet into one standalone
//! stylesheet per animation:
//!
//! 1. [`locate_input`] reads the source document (missing input is fatal)
//! 2. a [`BlockExtractor`] cuts it into named blocks
//! 3. [`rewrite_selectors`] rescopes each block to the host selector
//! 4. [`Templates`] wraps it in the defaults and states blocks
//! 5. [`write_output`] writes `<identifier>.css`
//!
//! Write failures do not stop the run; they are collected in the
//! [`SplitReport`].

mod blocks;
mod report;
mod rewrite;
mod template;

pub use blocks::{extract_identifier, Block, BlockExtractor, CommentBlocks, Extraction};
pub use report::{SplitReport, WriteFailure};
pub use rewrite::rewrite_selectors;
pub use template::{compose_output, Templates, DEFAULTS_HEADER, STATES_HEADER};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::TemplateConfig;
use crate::error::SplitError;

/// A composed output document that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub identifier: String,
    pub content: String,
}

impl Rendered {
    /// `<identifier>.css`
    pub fn file_name(&self) -> String {
        output_file_name(&self.identifier)
    }
}

/// Everything rendered from one input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSet {
    pub documents: Vec<Rendered>,
    pub skipped: usize,
}

/// Splits a stylesheet into per-animation files.
pub struct Splitter {
    extractor: Box<dyn BlockExtractor>,
    templates: Templates,
    dry_run: bool,
}

impl Splitter {
    /// Create with the comment-based extractor.
    pub fn new(template: TemplateConfig) -> Self {
        Self::with_extractor(template, Box::new(CommentBlocks))
    }

    /// Create with a specific extractor.
    pub fn with_extractor(template: TemplateConfig, extractor: Box<dyn BlockExtractor>) -> Self {
        Self {
            extractor,
            templates: Templates::new(template),
            dry_run: false,
        }
    }

    /// Render everything but write nothing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Render every recognised block of `content` in document order.
    pub fn render(&self, content: &str) -> RenderedSet {
        let extraction = self.extractor.extract(content);
        let template = self.templates.config();
        let defaults = self.templates.defaults_block();

        let documents = extraction
            .blocks
            .into_iter()
            .map(|block| {
                let css = rewrite_selectors(
                    &block.body,
                    &template.source_selector,
                    &template.host_selector,
                );
                let states = self.templates.states_block(&block.identifier);
                Rendered {
                    content: compose_output(&defaults, &css, &states),
                    identifier: block.identifier,
                }
            })
            .collect();

        RenderedSet {
            documents,
            skipped: extraction.skipped,
        }
    }

    /// Split `input` into `output_dir`.
    ///
    /// Fails only when the input cannot be read or the output directory
    /// cannot be created. Individual write failures are reported in the
    /// returned [`SplitReport`] while the remaining blocks are still written.
    pub fn run(&self, input: &Path, output_dir: &Path) -> Result<SplitReport, SplitError> {
        let content = locate_input(input)?;
        let rendered = self.render(&content);

        if rendered.skipped > 0 {
            warn!(
                skipped = rendered.skipped,
                "segments without a hamburger-- identifier were skipped"
            );
        }

        let mut report = SplitReport {
            skipped: rendered.skipped,
            dry_run: self.dry_run,
            ..SplitReport::default()
        };

        if self.dry_run {
            for doc in &rendered.documents {
                report.record_written(output_dir.join(doc.file_name()));
            }
            return Ok(report);
        }

        if !rendered.documents.is_empty() {
            fs::create_dir_all(output_dir).map_err(|source| SplitError::OutputDir {
                path: output_dir.to_path_buf(),
                source,
            })?;
        }

        for doc in &rendered.documents {
            match write_output(output_dir, &doc.identifier, &doc.content) {
                Ok(path) => {
                    info!(path = %path.display(), "generated");
                    report.record_written(path);
                }
                Err(SplitError::Write { path, source }) => {
                    warn!(path = %path.display(), error = %source, "failed to write");
                    report.failed.push(WriteFailure {
                        path,
                        message: source.to_string(),
                    });
                }
                Err(other) => return Err(other),
            }
        }

        Ok(report)
    }
}

/// Read the input stylesheet, failing with [`SplitError::InputNotFound`] if absent.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn locate_input(path: &Path) -> Result<String, SplitError> {
    let read_error = |source| SplitError::Read {
        path: path.to_path_buf(),
        source,
    };
    if !path.try_exists().map_err(read_error)? {
        return Err(SplitError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading input stylesheet");
    let bytes = fs::read(path).map_err(read_error)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write (or overwrite) `<identifier>.css` in `output_dir`.
pub fn write_output(output_dir: &Path, identifier: &str, text: &str) -> Result<PathBuf, SplitError> {
    let path = output_dir.join(output_file_name(identifier));
    fs::write(&path, text).map_err(|source| SplitError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn output_file_name(identifier: &str) -> String {
    format!("{}.css", identifier)
}
