//! Configuration to acknowledge project layout preferences as well as set defaults.
//!
//! Specifically, we try to find a linkgraph.toml, and if present we load settings from there.
//! This provides the artifact paths, the chart's root label, the splice marker, and the
//! thresholds the checker holds the README to.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "linkgraph.toml";

#[derive(Facet, Clone, Debug)]
/// Project preferences loaded from linkgraph.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "README.md".to_string())]
    /// Markdown document the link hierarchy is read from.
    pub readme_path: String,
    #[facet(default = "graph.html".to_string())]
    /// Chart page whose data assignment gets replaced.
    pub graph_path: String,
    #[facet(default = "index.html".to_string())]
    /// Landing page checked alongside the chart page.
    pub index_path: String,
    #[facet(default = "ML Resources".to_string())]
    /// Label of the tree's root node.
    pub root_label: String,
    #[facet(default = "        const data = {".to_string())]
    /// Verbatim text opening the assignment that receives the tree.
    pub marker: String,
    #[facet(default = 10)]
    /// Fewest markdown links the README may carry and still pass the check.
    pub min_links: usize,
    #[facet(default = vec![
        "Learning Resources".to_string(),
        "Tools".to_string(),
        "Datasets".to_string(),
        "Research Papers".to_string(),
    ])]
    /// Section names the README must mention.
    pub required_sections: Vec<String>,
}

impl Config {
    #[must_use]
    /// Load configuration from linkgraph.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is missing or invalid.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match facet_toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
                }
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    /// Prefix every artifact path with `dir`, leaving absolute paths alone.
    pub fn rebase(&mut self, dir: &Path) {
        for path in [
            &mut self.readme_path,
            &mut self.graph_path,
            &mut self.index_path,
        ] {
            *path = dir.join(&*path).to_string_lossy().into_owned();
        }
    }

    /// Text that replaces the matched assignment: the marker's indentation and
    /// binding, the serialized tree, and the statement terminator.
    #[must_use]
    pub fn assignment(&self, json: &str) -> String {
        let binding = self.marker.strip_suffix('{').unwrap_or(&self.marker);
        format!("{binding}{json};")
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
