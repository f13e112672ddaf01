use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One hashcat invocation from the `hashcat_runs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: i64,
    pub run_name: Option<String>,
    /// Hashcat hash-mode identifier; maps 1:1 to an algorithm.
    pub hash_mode: i64,
    pub wordlist: Option<String>,
    pub hash_file: Option<String>,
    pub started_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub duration_s: Option<f64>,
    pub hashes_total: Option<i64>,
    pub hashes_cracked: Option<i64>,
    pub created_at: NaiveDateTime,
}
