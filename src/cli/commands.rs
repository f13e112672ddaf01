use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cracklab", version, about = "Hashing/cracking benchmark analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize one algorithm and render its histograms
    Analyze(AnalyzeArgs),
    /// Run the analysis for every algorithm
    AnalyzeAll(AnalyzeAllArgs),
    /// Export uncracked hashes to a hashcat input file
    Export(ExportArgs),
    /// Mark hashes cracked from a hashcat potfile
    ApplyResults(ApplyResultsArgs),
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Hash algorithm: md5, sha3, blake2b, argon2id
    #[arg(long)]
    pub hash_type: String,

    /// Directory to store PNG plots
    #[arg(long)]
    pub plots: Option<PathBuf>,

    /// Write the summary JSON to a file
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct AnalyzeAllArgs {
    /// Output root; plots land in <out>/plots, summaries in <out>/summary_<algo>.json
    #[arg(long, default_value = "out")]
    pub out: PathBuf,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Hash algorithm: md5, sha3, blake2b, argon2id
    #[arg(long)]
    pub hash_type: String,

    /// Output file, one hash per line
    #[arg(long)]
    pub out: PathBuf,

    /// Cap the number of exported hashes
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Clone)]
pub struct ApplyResultsArgs {
    /// Hash algorithm: md5, sha3, blake2b, argon2id
    #[arg(long)]
    pub hash_type: String,

    /// Hashcat potfile with hash:plaintext lines
    #[arg(long)]
    pub potfile: PathBuf,

    /// hashcat_runs row the results belong to
    #[arg(long)]
    pub run_id: i64,

    /// Wall-clock duration of the run in seconds
    #[arg(long)]
    pub duration: Option<f64>,
}
