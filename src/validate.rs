//! Presence checks over the static site: the pages exist, look like HTML,
//! wire up the chart, and the README carries enough links.
//!
//! Every check reads what it needs on its own and reports a one-line verdict;
//! nothing is shared between checks, and an unreadable file fails its check
//! rather than stopping the battery.

use crate::config::Config;
use crate::pipeline;
use regex::Regex;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap()
}

static DOCTYPE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)<!DOCTYPE html>"));
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)<html.*?>"));
static HEAD: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?is)<head.*?>.*?</head>"));
static BODY: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?is)<body.*?>.*?</body>"));
static D3_SCRIPT: LazyLock<Regex> = LazyLock::new(|| pattern(r"d3js\.org|d3\.v\d+\.min\.js"));
static DATA_OBJECT: LazyLock<Regex> = LazyLock::new(|| pattern(r"const data = \{"));
static SVG: LazyLock<Regex> = LazyLock::new(|| pattern(r#"\.append\(["']svg["']\)"#));
static SUNBURST: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)sunburst|partition"));
static BUBBLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)bubble|pack"));
static MD_LINK: LazyLock<Regex> = LazyLock::new(|| pattern(r"\[([^\]]+)\]\(([^)]+)\)"));

/// Pass message or failure diagnostic.
pub type Verdict = Result<String, String>;

/// A single independent check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// The file is present on disk.
    FileExists(PathBuf),
    /// The page has a doctype and `html`, `head` and `body` elements.
    HtmlStructure(PathBuf),
    /// The page loads D3, carries the data object, and builds both charts.
    D3Integration(PathBuf),
    /// A generate run succeeds.
    DataGeneration,
    /// The README has enough links and names every required section.
    ReadmeLinks(PathBuf),
}

impl Check {
    /// Heading printed before the check runs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::FileExists(p) => format!("File existence - {}", p.display()),
            Self::HtmlStructure(p) => format!("HTML structure - {}", p.display()),
            Self::D3Integration(p) => format!("D3.js integration - {}", p.display()),
            Self::DataGeneration => "Data generation".to_string(),
            Self::ReadmeLinks(_) => "README links".to_string(),
        }
    }

    /// Run the check.
    ///
    /// # Errors
    ///
    /// Returns the diagnostic when the check fails.
    pub fn run(&self, cfg: &Config) -> Verdict {
        match self {
            Self::FileExists(p) => file_exists(p),
            Self::HtmlStructure(p) => html_structure(p),
            Self::D3Integration(p) => d3_integration(p),
            Self::DataGeneration => data_generation(cfg),
            Self::ReadmeLinks(p) => readme_links(p, cfg.min_links, &cfg.required_sections),
        }
    }
}

/// The standard battery for the paths in `cfg`, in the order it runs.
#[must_use]
pub fn battery(cfg: &Config) -> Vec<Check> {
    let index = PathBuf::from(&cfg.index_path);
    let graph = PathBuf::from(&cfg.graph_path);
    let readme = PathBuf::from(&cfg.readme_path);
    vec![
        Check::FileExists(index.clone()),
        Check::FileExists(graph.clone()),
        Check::FileExists(readme.clone()),
        Check::HtmlStructure(index),
        Check::HtmlStructure(graph.clone()),
        Check::D3Integration(graph),
        Check::DataGeneration,
        Check::ReadmeLinks(readme),
    ]
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("error reading {}: {e}", path.display()))
}

/// Fail with `missing` unless `re` matches `content`.
fn require(content: &str, re: &Regex, missing: String) -> Result<(), String> {
    if re.is_match(content) {
        Ok(())
    } else {
        Err(missing)
    }
}

/// Pass when `path` exists.
///
/// # Errors
///
/// Returns a diagnostic when it does not.
pub fn file_exists(path: &Path) -> Verdict {
    if path.exists() {
        Ok(format!("{} exists", path.display()))
    } else {
        Err(format!("{} does not exist", path.display()))
    }
}

/// Pass when the page has a doctype, an `html` tag, and closed `head` and `body` elements.
///
/// # Errors
///
/// Returns a diagnostic naming the first missing piece.
pub fn html_structure(path: &Path) -> Verdict {
    let content = read(path)?;
    let name = path.display();
    require(&content, &DOCTYPE, format!("{name} missing DOCTYPE"))?;
    require(&content, &HTML_TAG, format!("{name} missing <html> tag"))?;
    require(&content, &HEAD, format!("{name} missing <head> section"))?;
    require(&content, &BODY, format!("{name} missing <body> section"))?;
    Ok(format!("{name} has valid HTML structure"))
}

/// Pass when the page loads D3, declares the data object, appends an SVG, and
/// mentions both the sunburst and bubble layouts.
///
/// # Errors
///
/// Returns a diagnostic naming the first missing piece.
pub fn d3_integration(path: &Path) -> Verdict {
    let content = read(path)?;
    let name = path.display();
    require(&content, &D3_SCRIPT, format!("{name} missing D3.js script"))?;
    require(&content, &DATA_OBJECT, format!("{name} missing data object"))?;
    require(&content, &SVG, format!("{name} missing SVG creation"))?;
    require(&content, &SUNBURST, format!("{name} missing sunburst visualization"))?;
    require(&content, &BUBBLE, format!("{name} missing bubble visualization"))?;
    Ok(format!("{name} has valid D3.js integration"))
}

/// Pass when a full generate run succeeds. The chart page is rewritten as a side effect.
///
/// # Errors
///
/// Returns the run's error as a diagnostic.
pub fn data_generation(cfg: &Config) -> Verdict {
    pipeline::generate(cfg)
        .map(|_| "data generation runs successfully".to_string())
        .map_err(|e| format!("data generation failed: {e}"))
}

/// Pass when the README has at least `min_links` markdown links and mentions every required section.
///
/// # Errors
///
/// Returns a diagnostic for a short link count or the first missing section.
pub fn readme_links(path: &Path, min_links: usize, required: &[String]) -> Verdict {
    let content = read(path)?;
    let name = path.display();
    let links = MD_LINK.find_iter(&content).count();
    if links < min_links {
        return Err(format!("{name} has too few links ({links})"));
    }
    if let Some(missing) = required.iter().find(|s| !content.contains(s.as_str())) {
        return Err(format!("{name} missing section: {missing}"));
    }
    Ok(format!("{name} has {links} links and required sections"))
}

/// Checks passed out of checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Checks that passed.
    pub passed: usize,
    /// Checks that ran.
    pub total: usize,
}

impl Tally {
    /// Whether every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Run `checks` in order, reporting each verdict to `out`.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn run_checks(checks: &[Check], cfg: &Config, out: &mut impl Write) -> io::Result<Tally> {
    let mut passed = 0;
    for check in checks {
        writeln!(out, "\n{}:", check.label())?;
        match check.run(cfg) {
            Ok(msg) => {
                writeln!(out, "  ok: {msg}")?;
                passed += 1;
            }
            Err(msg) => {
                tracing::debug!(check = %check.label(), "check failed");
                writeln!(out, "  FAIL: {msg}")?;
            }
        }
    }
    let tally = Tally {
        passed,
        total: checks.len(),
    };
    writeln!(out, "\nResults: {}/{} checks passed", tally.passed, tally.total)?;
    Ok(tally)
}

#[cfg(test)]
#[path = "tests/validate.rs"]
mod tests;
