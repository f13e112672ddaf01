use tracing::debug;

use crate::errors::CracklabError;
use crate::models::{HashAlgorithm, RunRecord};

use super::Database;

const SELECT_RUNS: &str = "SELECT id, run_name, hash_mode, wordlist, hash_file, started_at, \
     completed_at, duration_s, hashes_total, hashes_cracked, created_at FROM hashcat_runs";

/// Retain the runs whose hash mode matches `algorithm`.
pub fn filter_runs(rows: Vec<RunRecord>, algorithm: HashAlgorithm) -> Vec<RunRecord> {
    rows.into_iter()
        .filter(|r| r.hash_mode == algorithm.hash_mode())
        .collect()
}

impl Database {
    /// Read the full `hashcat_runs` table and filter to one algorithm's
    /// mode in memory.
    pub async fn fetch_runs(
        &self,
        algorithm: HashAlgorithm,
    ) -> Result<Vec<RunRecord>, CracklabError> {
        let rows: Vec<RunRecord> = sqlx::query_as(SELECT_RUNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CracklabError::Database(format!("Failed to fetch hashcat runs: {e}")))?;
        let filtered = filter_runs(rows, algorithm);
        debug!(algorithm = %algorithm, count = filtered.len(), "Fetched run records");
        Ok(filtered)
    }
}
