use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tagdex_core::ReportOptions;
use tagdex_indexer::run;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a tag-weighted inverted index from JSON documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a folder of JSON documents and write the analytics report
    Build {
        /// Input corpus directory
        #[arg(long)]
        input: PathBuf,
        /// Output report file
        #[arg(long)]
        output: PathBuf,
        /// Count documents that produced no postings in "Documents indexed"
        #[arg(long, default_value_t = false)]
        count_empty: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output, count_empty } => {
            let opts = ReportOptions { count_empty_documents: count_empty };
            run(&input, &output, opts)?;
        }
    }
    Ok(())
}
