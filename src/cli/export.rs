use tracing::info;

use crate::cli::commands::ExportArgs;
use crate::config::DbConfig;
use crate::db::Database;
use crate::errors::CracklabError;
use crate::models::HashAlgorithm;

/// Write one uncracked digest per line, ready to feed to hashcat.
pub async fn handle_export(args: ExportArgs) -> Result<(), CracklabError> {
    let algorithm: HashAlgorithm = args.hash_type.parse()?;

    let config = DbConfig::from_env()?;
    let db = Database::connect(&config).await?;
    let hashes = db.fetch_uncracked(algorithm, args.limit).await?;
    db.close().await;

    let mut content = hashes.join("\n");
    content.push('\n');
    tokio::fs::write(&args.out, content).await?;

    info!(algorithm = %algorithm, count = hashes.len(), "Exported uncracked hashes");
    println!("Wrote {} hashes to {}", hashes.len(), args.out.display());
    Ok(())
}
