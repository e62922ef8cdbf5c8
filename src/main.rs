use anyhow::Result;
use clap::Parser;
use rmplot::report;
use std::path::PathBuf;

/// Render ResMGM vs DistRM comparison charts from benchmark sweep results.
#[derive(Parser)]
struct Cli {
    /// Base directory holding the benchmark sweep results (`var_dom/`,
    /// `var_ag/` and, optionally, `var_hyb/`)
    results_dir: PathBuf,
}

fn main() -> Result<()> {
    rmplot::init_logging(false);

    let cli = Cli::parse();
    report::generate(&cli.results_dir)
}
