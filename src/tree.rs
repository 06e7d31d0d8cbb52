//! The pruned hierarchy handed to the chart, and its JSON layout.
//!
//! Records nest `name`/`children` objects three levels deep under a root
//! label; leaves carry `name`/`url`. Nodes left without leaves are pruned, so
//! every node the chart draws has at least one link beneath it.

use crate::error::Result;
use crate::extract::Extraction;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::io;

/// One indentation step of the embedded data.
const JSON_INDENT: &[u8] = b"            ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A named url, the leaf of the hierarchy.
pub struct Link {
    /// Display text with any trailing description removed.
    pub name: String,
    /// Target exactly as written in the document.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A `###` heading and its links.
pub struct SubsectionNode {
    /// Heading text.
    pub name: String,
    /// Links, never empty.
    pub children: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A `##` heading and its populated subsections.
pub struct SectionNode {
    /// Heading text.
    pub name: String,
    /// Subsections, never empty.
    pub children: Vec<SubsectionNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Root of the chart data.
pub struct Tree {
    /// Fixed root label.
    pub name: String,
    /// Populated sections in document order.
    pub children: Vec<SectionNode>,
}

/// Per-section counts printed after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStats {
    /// Section name.
    pub name: String,
    /// Surviving subsections.
    pub subsections: usize,
    /// Links across those subsections.
    pub links: usize,
}

/// Counts across the whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// One row per section, in tree order.
    pub sections: Vec<SectionStats>,
}

impl TreeStats {
    /// Total subsections across all sections.
    #[must_use]
    pub fn subsections(&self) -> usize {
        self.sections.iter().map(|s| s.subsections).sum()
    }

    /// Total links across all sections.
    #[must_use]
    pub fn links(&self) -> usize {
        self.sections.iter().map(|s| s.links).sum()
    }
}

impl Tree {
    /// Prune `extraction` and wrap what survives under `root_label`.
    #[must_use]
    pub fn shape(root_label: &str, extraction: Extraction) -> Self {
        let children = extraction
            .sections
            .into_iter()
            .filter_map(|section| {
                let children: Vec<SubsectionNode> = section
                    .subsections
                    .into_iter()
                    .filter(|sub| !sub.links.is_empty())
                    .map(|sub| SubsectionNode {
                        name: sub.name,
                        children: sub.links,
                    })
                    .collect();
                (!children.is_empty()).then_some(SectionNode {
                    name: section.name,
                    children,
                })
            })
            .collect();

        Self {
            name: root_label.to_string(),
            children,
        }
    }

    /// Serialize with a twelve-space indent step and no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| {
            serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)).into()
        })
    }

    #[must_use]
    /// Count subsections and links per section.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            sections: self
                .children
                .iter()
                .map(|section| SectionStats {
                    name: section.name.clone(),
                    subsections: section.children.len(),
                    links: section.children.iter().map(|sub| sub.children.len()).sum(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
