use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::run_record::RunRecord;

/// Aggregated statistics for one algorithm. Constructed fresh per
/// invocation and serialized straight to the report; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Upper-cased algorithm label.
    pub algorithm: String,
    pub total_hashes: u64,
    /// Rows with a non-null crack timestamp.
    pub cracked: u64,
    pub cracked_pct: f64,
    pub avg_php_ms: f64,
    pub min_php_ms: f64,
    pub max_php_ms: f64,
    pub median_php_ms: f64,
    pub avg_crack_time_s: f64,
    /// Most recent hashcat run for this algorithm's mode. Serialized as an
    /// empty map, not null, when no run exists.
    #[serde(
        serialize_with = "serialize_latest_run",
        deserialize_with = "deserialize_latest_run"
    )]
    pub latest_run: Option<RunRecord>,
}

impl Summary {
    /// The zeroed record returned for an algorithm with no hash rows.
    pub fn empty(algorithm: &str) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            total_hashes: 0,
            cracked: 0,
            cracked_pct: 0.0,
            avg_php_ms: 0.0,
            min_php_ms: 0.0,
            max_php_ms: 0.0,
            median_php_ms: 0.0,
            avg_crack_time_s: 0.0,
            latest_run: None,
        }
    }
}

fn serialize_latest_run<S>(run: &Option<RunRecord>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match run {
        Some(record) => record.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

fn deserialize_latest_run<'de, D>(deserializer: D) -> Result<Option<RunRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.as_object().is_some_and(|map| map.is_empty()) {
        return Ok(None);
    }
    RunRecord::deserialize(value)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// The full payload printed by the analyze command: the summary plus the
/// plot files that were produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub plots: Vec<String>,
}
