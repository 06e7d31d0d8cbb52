use super::Config;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("linkgraph.toml"));

    assert_eq!(cfg.readme_path, "README.md");
    assert_eq!(cfg.graph_path, "graph.html");
    assert_eq!(cfg.index_path, "index.html");
    assert_eq!(cfg.root_label, "ML Resources");
    assert_eq!(cfg.marker, "        const data = {");
    assert_eq!(cfg.min_links, 10);
    assert_eq!(
        cfg.required_sections,
        ["Learning Resources", "Tools", "Datasets", "Research Papers"]
    );
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("linkgraph.toml");
    fs::write(&path, "root_label = \"Reading List\"\nmin_links = 3\n").unwrap();

    let cfg = Config::load_from(&path);

    assert_eq!(cfg.root_label, "Reading List");
    assert_eq!(cfg.min_links, 3);
    assert_eq!(cfg.readme_path, "README.md");
    assert_eq!(cfg.required_sections.len(), 4);
}

#[test]
fn test_unparsable_file_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("linkgraph.toml");
    fs::write(&path, "root_label = \n[[[").unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.root_label, "ML Resources");
}

#[test]
fn test_assignment_reuses_marker_indentation() {
    let dir = tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("absent.toml"));

    assert_eq!(
        cfg.assignment("{\"name\": \"x\"}"),
        "        const data = {\"name\": \"x\"};"
    );
}

#[test]
fn test_rebase_prefixes_relative_paths() {
    let dir = tempdir().unwrap();
    let mut cfg = Config::load_from(&dir.path().join("absent.toml"));
    cfg.index_path = "/srv/site/index.html".to_string();

    cfg.rebase(Path::new("site"));

    assert_eq!(Path::new(&cfg.readme_path), Path::new("site/README.md"));
    assert_eq!(Path::new(&cfg.graph_path), Path::new("site/graph.html"));
    assert_eq!(cfg.index_path, "/srv/site/index.html");
}
