use clap::Parser;
use tracing_subscriber::EnvFilter;

use cracklab::cli::{self, Cli, Commands};
use cracklab::config;
use cracklab::errors::CracklabError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr; stdout is reserved for the JSON reports.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // env.local overrides .env
    for env_file in [".env", "env.local"] {
        if let Err(e) = config::load_env_file(env_file) {
            eprintln!("Warning: failed to load {env_file}: {e}");
        }
    }

    let result = match cli.command {
        Commands::Analyze(args) => cli::analyze::handle_analyze(args).await,
        Commands::AnalyzeAll(args) => cli::analyze_all::handle_analyze_all(args).await,
        Commands::Export(args) => cli::export::handle_export(args).await,
        Commands::ApplyResults(args) => cli::apply::handle_apply_results(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                CracklabError::Config(_) => 2,
                CracklabError::InvalidAlgorithm(_) => 3,
                CracklabError::Database(_) => 4,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
