//! burger-split: one standalone stylesheet per hamburger animation.
//!
//! The library exposes the splitting pipeline so it can be driven with
//! explicit paths (and from tests) rather than a fixed project layout.

pub mod cli;
pub mod config;
pub mod error;
pub mod splitter;
pub mod theme;

pub use config::Config;
pub use error::SplitError;
pub use splitter::{SplitReport, Splitter};
