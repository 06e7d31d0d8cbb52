//! Line scanner that groups a README's links under its headings.
//!
//! Only three kinds of line matter: `## ` opens a section, `### ` opens a
//! subsection within the current section, and `- [name](url)` adds a link to
//! the current subsection. Everything else, including lines of those shapes
//! that arrive out of order, is skipped without complaint.
//!
//! Names are keys: a repeated heading reuses the slot its first occurrence
//! created and empties it, so links gathered under the earlier heading are
//! dropped. Headings with empty text are ordinary keys.

use crate::tree::Link;
use regex::Regex;
use std::sync::LazyLock;

const SECTION_PREFIX: &str = "## ";
const SUBSECTION_PREFIX: &str = "### ";
const LINK_PREFIX: &str = "- [";
/// Separator between a link's display name and its trailing description.
pub const DESCRIPTION_SEPARATOR: &str = " - ";

static LINK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Links gathered under one `###` heading, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSubsection {
    /// Heading text, trimmed.
    pub name: String,
    /// Links found before the next heading.
    pub links: Vec<Link>,
}

/// Subsections gathered under one `##` heading, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    /// Heading text, trimmed.
    pub name: String,
    /// Subsections keyed by name.
    pub subsections: Vec<RawSubsection>,
}

impl RawSection {
    /// Reset (or create) the subsection called `name`, returning its position.
    fn open_subsection(&mut self, name: &str) -> usize {
        if let Some(idx) = self.subsections.iter().position(|s| s.name == name) {
            self.subsections[idx].links.clear();
            idx
        } else {
            self.subsections.push(RawSubsection {
                name: name.to_string(),
                links: Vec::new(),
            });
            self.subsections.len() - 1
        }
    }
}

/// Unpruned result of scanning a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Sections keyed by name, in first-occurrence order.
    pub sections: Vec<RawSection>,
}

impl Extraction {
    /// Reset (or create) the section called `name`, returning its position.
    fn open_section(&mut self, name: &str) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.name == name) {
            self.sections[idx].subsections.clear();
            idx
        } else {
            self.sections.push(RawSection {
                name: name.to_string(),
                subsections: Vec::new(),
            });
            self.sections.len() - 1
        }
    }

    /// Total links across every section and subsection.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.subsections)
            .map(|sub| sub.links.len())
            .sum()
    }
}

/// Scan state: the accumulated result plus the heading context the next line lands in.
#[derive(Default)]
struct Scan {
    extraction: Extraction,
    section: Option<usize>,
    subsection: Option<usize>,
}

impl Scan {
    fn feed(mut self, line: &str) -> Self {
        if let Some(rest) = line.strip_prefix(SECTION_PREFIX) {
            self.section = Some(self.extraction.open_section(rest.trim()));
            self.subsection = None;
        } else if let Some(rest) = line.strip_prefix(SUBSECTION_PREFIX) {
            if let Some(section_idx) = self.section {
                let section = &mut self.extraction.sections[section_idx];
                self.subsection = Some(section.open_subsection(rest.trim()));
            } else {
                tracing::debug!(heading = rest.trim(), "subsection outside any section");
            }
        } else if line.starts_with(LINK_PREFIX) {
            if let (Some(section_idx), Some(subsection_idx)) = (self.section, self.subsection) {
                if let Some(link) = parse_link(line) {
                    self.extraction.sections[section_idx].subsections[subsection_idx]
                        .links
                        .push(link);
                } else {
                    tracing::debug!(line, "unrecognised link line");
                }
            }
        }
        self
    }
}

/// Parse a `- [display](url)` bullet, cutting the display text at its description.
///
/// Text after the closing parenthesis is ignored. Returns `None` for any
/// other shape.
#[must_use]
pub fn parse_link(line: &str) -> Option<Link> {
    let caps = LINK_LINE.captures(line)?;
    let display = &caps[1];
    let name = display
        .split_once(DESCRIPTION_SEPARATOR)
        .map_or(display, |(name, _)| name);
    Some(Link {
        name: name.to_string(),
        url: caps[2].to_string(),
    })
}

/// Scan `text` line by line and group its links by heading.
#[must_use]
pub fn extract(text: &str) -> Extraction {
    text.split('\n')
        .fold(Scan::default(), Scan::feed)
        .extraction
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
