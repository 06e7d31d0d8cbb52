//! End-to-end runs of both binaries against a scratch site.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const README: &str = "## Learning Resources
### Courses
- [Course One - intro](https://one.example) - a description
- [Course Two](https://two.example)
- [Course Three](https://three.example)
## Tools
### Libraries
- [Lib A](https://a.example)
- [Lib B](https://b.example)
- [Lib C](https://c.example)
## Datasets
### Tabular
- [Set A](https://sa.example)
- [Set B](https://sb.example)
## Research Papers
### Surveys
- [Survey A](https://pa.example)
- [Survey B](https://pb.example)
";

const GRAPH: &str = "<!DOCTYPE html>
<html>
<head><script src=\"https://d3js.org/d3.v7.min.js\"></script></head>
<body>
    <script>
        const data = {\"name\": \"stale\", \"children\": []};
        const sunburst = d3.partition();
        const bubble = d3.pack();
        d3.select(\"body\").append(\"svg\");
    </script>
</body>
</html>
";

const INDEX: &str = "<!DOCTYPE html>\n<html><head></head><body></body></html>\n";

fn write_site(dir: &Path) {
    fs::write(dir.join("README.md"), README).unwrap();
    fs::write(dir.join("graph.html"), GRAPH).unwrap();
    fs::write(dir.join("index.html"), INDEX).unwrap();
}

fn linkgraph(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linkgraph"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn linkgraph_check() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linkgraph-check"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn generate_updates_page_and_prints_summary() {
    let dir = tempdir().unwrap();
    write_site(dir.path());

    linkgraph(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 4 main sections"))
        .stdout(predicate::str::contains(
            "  - Learning Resources: 1 subsections, 3 links",
        ));

    let page = fs::read_to_string(dir.path().join("graph.html")).unwrap();
    assert!(!page.contains("stale"));
    assert!(page.contains("\"name\": \"Course One\""));
    assert!(page.contains("        const bubble = d3.pack();"));
}

#[test]
fn generate_is_idempotent() {
    let dir = tempdir().unwrap();
    write_site(dir.path());

    linkgraph(dir.path()).assert().success();
    let first = fs::read(dir.path().join("graph.html")).unwrap();

    linkgraph(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
    assert_eq!(fs::read(dir.path().join("graph.html")).unwrap(), first);
}

#[test]
fn generate_without_marker_fails_and_leaves_page() {
    let dir = tempdir().unwrap();
    write_site(dir.path());
    let page = "<html><script>var data = {};</script></html>\n";
    fs::write(dir.path().join("graph.html"), page).unwrap();

    linkgraph(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find data section"));

    assert_eq!(
        fs::read_to_string(dir.path().join("graph.html")).unwrap(),
        page
    );
}

#[test]
fn dry_run_prints_assignment_only() {
    let dir = tempdir().unwrap();
    write_site(dir.path());

    linkgraph(dir.path())
        .args(["--dry-run", "--root-label", "Links"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "        const data = {\n            \"name\": \"Links\",",
        ));

    assert_eq!(
        fs::read_to_string(dir.path().join("graph.html")).unwrap(),
        GRAPH
    );
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    write_site(dir.path());
    fs::rename(dir.path().join("README.md"), dir.path().join("LINKS.md")).unwrap();
    fs::write(
        dir.path().join("linkgraph.toml"),
        "readme_path = \"LINKS.md\"\nroot_label = \"Bookmarks\"\n",
    )
    .unwrap();

    linkgraph(dir.path()).assert().success();

    let page = fs::read_to_string(dir.path().join("graph.html")).unwrap();
    assert!(page.contains("\"name\": \"Bookmarks\""));
}

#[test]
fn check_passes_on_complete_site() {
    let dir = tempdir().unwrap();
    write_site(dir.path());

    linkgraph_check()
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Results: 8/8 checks passed"));
}

#[test]
fn check_fails_when_pages_are_missing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), README).unwrap();

    linkgraph_check()
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("Some checks failed!"));
}
