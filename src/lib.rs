//! linkgraph: turn a curated markdown link list into chart data.
//!
//! A README's `##` sections, `###` subsections and `- [name](url)` bullets are
//! folded into a three-level tree, pruned of empty branches, serialized to JSON
//! and spliced into the chart page's `const data = {...};` assignment. A
//! separate battery of checks confirms the static pages are in shape.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod pipeline;
pub mod splice;
pub mod tree;
pub mod validate;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;
