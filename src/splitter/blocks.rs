//! Block extraction: turning the combined stylesheet into named animation blocks.
//!
//! Extraction is pattern-based rather than a CSS parse. Every block-comment
//! start opens a new segment, and the first `hamburger--<name>` token inside a
//! segment names it. The [`BlockExtractor`] trait is the seam where a real
//! parser can be dropped in without touching rewriting or templating.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Delimiter opening every animation block.
pub const COMMENT_START: &str = "/*";

/// Animation token; capture group 1 is the identifier.
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hamburger--([a-z0-9-]+)").expect("valid regex"));

/// One recognised animation block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Animation name, e.g. `spin` for `hamburger--spin`.
    pub identifier: String,
    /// Raw segment text following the comment delimiter.
    pub body: String,
}

/// Result of running an extractor over a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Recognised blocks in document order.
    pub blocks: Vec<Block>,
    /// Segments that carried no identifier.
    pub skipped: usize,
}

/// Splits a stylesheet into named animation blocks.
pub trait BlockExtractor: Send + Sync {
    /// Extract every named block from `content`.
    fn extract(&self, content: &str) -> Extraction;
}

/// Default extractor: split on `/*`, name each segment by its first token.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentBlocks;

impl CommentBlocks {
    /// Raw segments after each delimiter.
    ///
    /// Whatever precedes the first delimiter is dropped; the last segment runs
    /// to the end of the document.
    pub fn segments(content: &str) -> impl Iterator<Item = &str> {
        content.split(COMMENT_START).skip(1)
    }
}

impl BlockExtractor for CommentBlocks {
    fn extract(&self, content: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for (index, segment) in Self::segments(content).enumerate() {
            match extract_identifier(segment) {
                Some(identifier) => {
                    debug!(segment = index, %identifier, "recognised animation block");
                    extraction.blocks.push(Block {
                        identifier,
                        body: segment.to_string(),
                    });
                }
                None => {
                    debug!(segment = index, "segment has no hamburger-- token");
                    extraction.skipped += 1;
                }
            }
        }

        extraction
    }
}

/// Find the animation identifier in a segment.
///
/// Returns the suffix of the first `hamburger--[a-z0-9-]+` match.
pub fn extract_identifier(segment: &str) -> Option<String> {
    IDENTIFIER_PATTERN
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
