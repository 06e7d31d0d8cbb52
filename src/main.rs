//! linkgraph: splice a README's link hierarchy into the chart page.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use linkgraph::{config, logging, pipeline, splice::Outcome};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "linkgraph")]
#[command(about = "Extract a link hierarchy from markdown into a chart page", long_about = None)]
struct Args {
    /// Markdown document to read links from
    #[arg(long, value_name = "PATH")]
    readme: Option<String>,

    /// Chart page whose data assignment is replaced
    #[arg(long, value_name = "PATH")]
    graph: Option<String>,

    /// Label for the root of the tree
    #[arg(long)]
    root_label: Option<String>,

    /// Print the new assignment instead of writing the chart page
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE with file/line)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(readme) = args.readme {
        cfg.readme_path = readme;
    }
    if let Some(graph) = args.graph {
        cfg.graph_path = graph;
    }
    if let Some(label) = args.root_label {
        cfg.root_label = label;
    }

    if args.dry_run {
        return match pipeline::build_tree(&cfg)
            .and_then(|tree| pipeline::render_assignment(&cfg, &tree))
        {
            Ok(assignment) => {
                println!("{assignment}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match pipeline::generate(&cfg) {
        Ok(report) => {
            match report.outcome {
                Outcome::Updated => println!("Updated {}", cfg.graph_path),
                Outcome::Unchanged => println!("{} already up to date", cfg.graph_path),
            }
            print!("{}", pipeline::summary(&report.tree.stats()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("No changes written to {}", cfg.graph_path);
            ExitCode::FAILURE
        }
    }
}
