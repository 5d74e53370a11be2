//! Selector rewriting for a single block.

use super::blocks::COMMENT_START;

/// Trim the segment, restore its comment opener and rescope its selectors.
///
/// Replacement is a plain substring replace, so derived classes follow the
/// base class: `.hamburger-inner` becomes `<host>-inner`.
pub fn rewrite_selectors(segment: &str, source_selector: &str, host_selector: &str) -> String {
    let css = format!("{} {}", COMMENT_START, segment.trim());
    if source_selector.is_empty() {
        return css;
    }
    css.replace(source_selector, host_selector)
}
