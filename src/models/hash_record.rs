use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::algorithm::HashAlgorithm;

/// One hashed credential from the `hashes` table. Only the columns the
/// analysis reads are materialized; every algorithm column is nullable and
/// a row belongs to an algorithm iff that column is set.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct HashRecord {
    pub md5_hash: Option<String>,
    pub sha3_hash: Option<String>,
    pub blake2b_hash: Option<String>,
    pub argon2id_hash: Option<String>,
    /// PHP-side hashing latency in milliseconds, if recorded.
    pub php_elapsed_ms: Option<f64>,
    /// Set iff hashcat recovered the plaintext.
    pub cracked_at: Option<NaiveDateTime>,
    /// Seconds hashcat spent before recovery; only meaningful when
    /// `cracked_at` is set.
    pub crack_time_s: Option<f64>,
}

impl HashRecord {
    /// The digest stored for `algorithm`, if this row carries one.
    pub fn hash_for(&self, algorithm: HashAlgorithm) -> Option<&str> {
        let column = match algorithm {
            HashAlgorithm::Md5 => &self.md5_hash,
            HashAlgorithm::Sha3 => &self.sha3_hash,
            HashAlgorithm::Blake2b => &self.blake2b_hash,
            HashAlgorithm::Argon2id => &self.argon2id_hash,
        };
        column.as_deref()
    }

    pub fn is_cracked(&self) -> bool {
        self.cracked_at.is_some()
    }
}
