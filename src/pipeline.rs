//! One generate run: read the README, shape its links, splice them into the chart page.
//!
//! Reads happen first and the page is only written once the new content is
//! complete, so a failed run never leaves a half-edited page behind.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::splice::{inject_file, Outcome};
use crate::tree::{Tree, TreeStats};
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Result of a completed run.
#[derive(Debug)]
pub struct Report {
    /// The tree that was serialized.
    pub tree: Tree,
    /// Whether the chart page changed.
    pub outcome: Outcome,
}

/// Read the README named in `cfg` and build its pruned tree.
///
/// # Errors
///
/// Returns an error if the README cannot be read.
pub fn build_tree(cfg: &Config) -> Result<Tree> {
    let path = Path::new(&cfg.readme_path);
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let extraction = extract(&text);
    tracing::debug!(
        sections = extraction.sections.len(),
        links = extraction.link_count(),
        "scanned {}",
        path.display()
    );
    Ok(Tree::shape(&cfg.root_label, extraction))
}

/// Text that replaces the page's data assignment for `tree`.
///
/// # Errors
///
/// Returns an error if the tree cannot be serialized.
pub fn render_assignment(cfg: &Config, tree: &Tree) -> Result<String> {
    Ok(cfg.assignment(&tree.to_json()?))
}

/// Run extraction and injection once.
///
/// # Errors
///
/// Returns an error if either file is unreadable, the page lacks the data
/// marker, or the page cannot be written. The page is left as it was.
pub fn generate(cfg: &Config) -> Result<Report> {
    let tree = build_tree(cfg)?;
    let assignment = render_assignment(cfg, &tree)?;
    let outcome = inject_file(Path::new(&cfg.graph_path), &cfg.marker, &assignment)?;
    Ok(Report { tree, outcome })
}

/// Human-readable run summary: section count, then one row per section.
#[must_use]
pub fn summary(stats: &TreeStats) -> String {
    let mut out = format!("Found {} main sections\n", stats.sections.len());
    for section in &stats.sections {
        let _ = writeln!(
            out,
            "  - {}: {} subsections, {} links",
            section.name, section.subsections, section.links
        );
    }
    out
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
