use tracing::info;

use crate::cli::commands::ApplyResultsArgs;
use crate::config::DbConfig;
use crate::db::Database;
use crate::errors::CracklabError;
use crate::models::HashAlgorithm;
use crate::potfile::parse_potfile;

/// Apply a hashcat potfile: mark matching rows cracked and record the run
/// that recovered them.
pub async fn handle_apply_results(args: ApplyResultsArgs) -> Result<(), CracklabError> {
    let algorithm: HashAlgorithm = args.hash_type.parse()?;

    if !args.potfile.is_file() {
        return Err(CracklabError::Potfile(format!(
            "Potfile not found: {}",
            args.potfile.display()
        )));
    }

    let content = tokio::fs::read_to_string(&args.potfile).await?;
    let entries = parse_potfile(&content, algorithm);
    info!(algorithm = %algorithm, entries = entries.len(), "Parsed potfile");

    let config = DbConfig::from_env()?;
    let db = Database::connect(&config).await?;
    let updated = db
        .apply_cracked(algorithm, &entries, args.run_id, args.duration)
        .await?;
    db.close().await;

    println!(
        "Applied {} potfile entries, updated {} rows",
        entries.len(),
        updated
    );
    Ok(())
}
