use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bench-merge")]
#[command(about = "Collate repeated bench_two runs into one report, keeping the minimum of each value")]
#[command(version)]
pub struct Cli {
    /// Benchmark reports to merge, all with the same number of lines
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[arg(short, long, help = "Write the merged report here instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Read reports through memory-mapped I/O")]
    pub mmap: bool,

    #[arg(long, help = "Show merge progress on stderr")]
    pub progress: bool,
}
