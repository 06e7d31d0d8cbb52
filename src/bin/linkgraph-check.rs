//! linkgraph-check: validate the static pages and the README they are built from.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use linkgraph::{config, logging, validate};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "linkgraph-check")]
#[command(about = "Check the chart pages and README for structural problems", long_about = None)]
struct Args {
    /// Directory holding the pages and README
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE with file/line)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut cfg = match &args.dir {
        Some(dir) => config::Config::load_from(&dir.join(config::CONFIG_FILE)),
        None => config::Config::load(),
    };
    if let Some(dir) = &args.dir {
        cfg.rebase(dir);
    }

    println!("Running checks...");
    let checks = validate::battery(&cfg);
    let tally = match validate::run_checks(&checks, &cfg, &mut io::stdout().lock()) {
        Ok(tally) => tally,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if tally.all_passed() {
        println!("All checks passed!");
        ExitCode::SUCCESS
    } else {
        println!("Some checks failed!");
        ExitCode::FAILURE
    }
}
