use anyhow::Context;
use bench_merge::cli::{run, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("Failed to merge benchmark reports")
}
