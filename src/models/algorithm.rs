use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CracklabError;

/// Hash algorithm tracked by the benchmark lab. Each variant owns one
/// nullable column in the `hashes` table and one hashcat mode in
/// `hashcat_runs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha3,
    Blake2b,
    Argon2id,
}

impl HashAlgorithm {
    /// Every supported algorithm, in batch-driver order.
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha3,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Argon2id,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha3 => "sha3",
            Self::Blake2b => "blake2b",
            Self::Argon2id => "argon2id",
        }
    }

    /// Upper-cased label used in summary output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha3 => "SHA3",
            Self::Blake2b => "BLAKE2B",
            Self::Argon2id => "ARGON2ID",
        }
    }

    /// Column in the `hashes` table holding this algorithm's digest. A row
    /// belongs to an algorithm iff this column is non-null.
    pub fn hash_column(&self) -> &'static str {
        match self {
            Self::Md5 => "md5_hash",
            Self::Sha3 => "sha3_hash",
            Self::Blake2b => "blake2b_hash",
            Self::Argon2id => "argon2id_hash",
        }
    }

    /// Hashcat hash-mode identifier recorded in `hashcat_runs.hash_mode`.
    pub fn hash_mode(&self) -> i64 {
        match self {
            Self::Md5 => 0,
            Self::Sha3 => 17400,
            Self::Blake2b => 600,
            Self::Argon2id => 70000,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = CracklabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Self::Md5),
            "sha3" => Ok(Self::Sha3),
            "blake2b" => Ok(Self::Blake2b),
            "argon2id" => Ok(Self::Argon2id),
            other => Err(CracklabError::InvalidAlgorithm(other.to_string())),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_variants() {
        assert_eq!("md5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert_eq!("sha3".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3);
        assert_eq!("blake2b".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Blake2b);
        assert_eq!("argon2id".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Argon2id);
    }

    #[test]
    fn test_parse_unknown_names_valid_set() {
        let err = "sha256".parse::<HashAlgorithm>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sha256"));
        assert!(msg.contains("md5, sha3, blake2b, argon2id"));
    }

    #[test]
    fn test_hash_mode_map() {
        assert_eq!(HashAlgorithm::Md5.hash_mode(), 0);
        assert_eq!(HashAlgorithm::Sha3.hash_mode(), 17400);
        assert_eq!(HashAlgorithm::Blake2b.hash_mode(), 600);
        assert_eq!(HashAlgorithm::Argon2id.hash_mode(), 70000);
    }

    #[test]
    fn test_hash_column_map() {
        assert_eq!(HashAlgorithm::Md5.hash_column(), "md5_hash");
        assert_eq!(HashAlgorithm::Sha3.hash_column(), "sha3_hash");
        assert_eq!(HashAlgorithm::Blake2b.hash_column(), "blake2b_hash");
        assert_eq!(HashAlgorithm::Argon2id.hash_column(), "argon2id_hash");
    }

    #[test]
    fn test_label_is_uppercase() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.label(), algorithm.as_str().to_uppercase());
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string(&HashAlgorithm::Blake2b).unwrap();
        assert_eq!(json, "\"blake2b\"");
        let parsed: HashAlgorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, HashAlgorithm::Blake2b);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(format!("{}", HashAlgorithm::Argon2id), "argon2id");
    }
}
