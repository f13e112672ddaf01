use tracing::debug;

use crate::errors::CracklabError;
use crate::models::{HashAlgorithm, HashRecord};
use crate::potfile::PotfileEntry;

use super::Database;

const SELECT_HASHES: &str = "SELECT md5_hash, sha3_hash, blake2b_hash, argon2id_hash, \
     php_elapsed_ms, cracked_at, crack_time_s FROM hashes";

/// Retain the rows that belong to `algorithm`: membership is determined
/// solely by that algorithm's hash column being non-null.
pub fn filter_hashes(rows: Vec<HashRecord>, algorithm: HashAlgorithm) -> Vec<HashRecord> {
    rows.into_iter()
        .filter(|r| r.hash_for(algorithm).is_some())
        .collect()
}

/// Rows for `algorithm` that hashcat has not recovered yet, in table order,
/// optionally truncated.
pub fn filter_uncracked(
    rows: Vec<HashRecord>,
    algorithm: HashAlgorithm,
    limit: Option<usize>,
) -> Vec<HashRecord> {
    let uncracked = filter_hashes(rows, algorithm)
        .into_iter()
        .filter(|r| !r.is_cracked());
    match limit {
        Some(n) => uncracked.take(n).collect(),
        None => uncracked.collect(),
    }
}

impl Database {
    /// Read the full `hashes` table and filter to one algorithm in memory.
    pub async fn fetch_hashes(
        &self,
        algorithm: HashAlgorithm,
    ) -> Result<Vec<HashRecord>, CracklabError> {
        let rows: Vec<HashRecord> = sqlx::query_as(SELECT_HASHES)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CracklabError::Database(format!("Failed to fetch hashes: {e}")))?;
        let filtered = filter_hashes(rows, algorithm);
        debug!(algorithm = %algorithm, count = filtered.len(), "Fetched hash records");
        Ok(filtered)
    }

    /// Uncracked digests for one algorithm, for export to a hashcat input
    /// file.
    pub async fn fetch_uncracked(
        &self,
        algorithm: HashAlgorithm,
        limit: Option<usize>,
    ) -> Result<Vec<String>, CracklabError> {
        let rows: Vec<HashRecord> = sqlx::query_as(SELECT_HASHES)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CracklabError::Database(format!("Failed to fetch hashes: {e}")))?;
        Ok(filter_uncracked(rows, algorithm, limit)
            .iter()
            .filter_map(|r| r.hash_for(algorithm).map(str::to_string))
            .collect())
    }

    /// Mark rows cracked from potfile entries. `cracked_at` and
    /// `crack_time_s` are only set where still null, so re-applying a
    /// potfile never clobbers earlier results. Returns rows updated.
    pub async fn apply_cracked(
        &self,
        algorithm: HashAlgorithm,
        entries: &[PotfileEntry],
        run_id: i64,
        run_duration: Option<f64>,
    ) -> Result<u64, CracklabError> {
        // Column name comes from the enum, never from input.
        let sql = format!(
            "UPDATE hashes SET cracked_at = COALESCE(cracked_at, NOW()), \
             crack_run_id = ?, crack_time_s = COALESCE(crack_time_s, ?), \
             crack_plaintext = ? WHERE {} = ?",
            algorithm.hash_column()
        );

        let mut updated = 0u64;
        for entry in entries {
            let result = sqlx::query(&sql)
                .bind(run_id)
                .bind(run_duration)
                .bind(&entry.plaintext)
                .bind(&entry.hash)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    CracklabError::Database(format!("Failed to apply cracked hash: {e}"))
                })?;
            updated += result.rows_affected();
        }
        debug!(algorithm = %algorithm, updated, "Applied potfile entries");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(md5: Option<&str>, sha3: Option<&str>, cracked: bool) -> HashRecord {
        HashRecord {
            md5_hash: md5.map(str::to_string),
            sha3_hash: sha3.map(str::to_string),
            cracked_at: cracked.then(|| {
                chrono::NaiveDateTime::parse_from_str("2025-11-03 10:00:00", "%Y-%m-%d %H:%M:%S")
                    .unwrap()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_hashes_by_column_presence() {
        let rows = vec![
            record(Some("aa"), None, false),
            record(None, Some("bb"), false),
            record(Some("cc"), Some("dd"), false),
        ];
        let md5 = filter_hashes(rows.clone(), HashAlgorithm::Md5);
        assert_eq!(md5.len(), 2);
        let sha3 = filter_hashes(rows, HashAlgorithm::Sha3);
        assert_eq!(sha3.len(), 2);
    }

    #[test]
    fn test_filter_hashes_empty_for_unused_algorithm() {
        let rows = vec![record(Some("aa"), None, false)];
        assert!(filter_hashes(rows, HashAlgorithm::Argon2id).is_empty());
    }

    #[test]
    fn test_filter_uncracked_excludes_cracked_rows() {
        let rows = vec![
            record(Some("aa"), None, true),
            record(Some("bb"), None, false),
            record(Some("cc"), None, false),
        ];
        let uncracked = filter_uncracked(rows, HashAlgorithm::Md5, None);
        assert_eq!(uncracked.len(), 2);
        assert!(uncracked.iter().all(|r| !r.is_cracked()));
    }

    #[test]
    fn test_filter_uncracked_respects_limit() {
        let rows = vec![
            record(Some("aa"), None, false),
            record(Some("bb"), None, false),
            record(Some("cc"), None, false),
        ];
        let limited = filter_uncracked(rows, HashAlgorithm::Md5, Some(2));
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].md5_hash.as_deref(), Some("aa"));
    }
}
