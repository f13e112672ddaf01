use std::path::Path;

use tracing::info;

use crate::analysis::summarize;
use crate::cli::commands::AnalyzeArgs;
use crate::config::DbConfig;
use crate::db::Database;
use crate::errors::CracklabError;
use crate::models::{AnalysisReport, HashAlgorithm};
use crate::plots::render_distributions;

pub async fn handle_analyze(args: AnalyzeArgs) -> Result<(), CracklabError> {
    let algorithm: HashAlgorithm = args.hash_type.parse()?;
    let report = run_analysis(algorithm, args.plots.as_deref(), args.json.as_deref()).await?;

    // The JSON report always goes to stdout, whether or not a file was
    // requested.
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// One full single-algorithm pass: fetch, aggregate, render, optionally
/// write the report file. Owns its database connection for the duration of
/// the call; the batch driver invokes this once per algorithm.
pub async fn run_analysis(
    algorithm: HashAlgorithm,
    plots_dir: Option<&Path>,
    json_path: Option<&Path>,
) -> Result<AnalysisReport, CracklabError> {
    info!(algorithm = %algorithm, "Analyzing benchmark records");

    let config = DbConfig::from_env()?;
    let db = Database::connect(&config).await?;
    let hashes = db.fetch_hashes(algorithm).await?;
    let runs = db.fetch_runs(algorithm).await?;
    db.close().await;

    let summary = summarize(&hashes, &runs, algorithm);
    let plots = render_distributions(&hashes, algorithm, plots_dir)?;

    let report = AnalysisReport {
        summary,
        plots: plots.iter().map(|p| p.display().to_string()).collect(),
    };

    if let Some(path) = json_path {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, serde_json::to_string_pretty(&report)?).await?;
        info!(path = %path.display(), "Wrote summary JSON");
    }

    Ok(report)
}
