use thiserror::Error;

#[derive(Debug, Error)]
pub enum CracklabError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown hash type '{0}' (expected one of: md5, sha3, blake2b, argon2id)")]
    InvalidAlgorithm(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("Potfile error: {0}")]
    Potfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
