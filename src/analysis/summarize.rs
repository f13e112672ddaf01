use crate::models::{HashAlgorithm, HashRecord, RunRecord, Summary};

/// Aggregate one algorithm's hash and run records into a summary.
///
/// Pure and total: empty collections are valid inputs, missing numeric
/// fields are excluded from statistics, and every aggregate that would be
/// undefined on an empty set reports 0.0 instead.
pub fn summarize(
    hashes: &[HashRecord],
    runs: &[RunRecord],
    algorithm: HashAlgorithm,
) -> Summary {
    // Distinct early-exit path, not a degenerate case of the general
    // computation.
    if hashes.is_empty() {
        return Summary::empty(algorithm.label());
    }

    let total = hashes.len() as u64;
    let cracked = hashes.iter().filter(|h| h.is_cracked()).count() as u64;
    let cracked_pct = if total == 0 {
        0.0
    } else {
        cracked as f64 / total as f64 * 100.0
    };

    let latencies: Vec<f64> = hashes.iter().filter_map(|h| h.php_elapsed_ms).collect();
    let crack_times: Vec<f64> = hashes.iter().filter_map(|h| h.crack_time_s).collect();

    Summary {
        algorithm: algorithm.label().to_string(),
        total_hashes: total,
        cracked,
        cracked_pct,
        avg_php_ms: mean(&latencies).unwrap_or(0.0),
        min_php_ms: min(&latencies).unwrap_or(0.0),
        max_php_ms: max(&latencies).unwrap_or(0.0),
        median_php_ms: median(&latencies).unwrap_or(0.0),
        avg_crack_time_s: mean(&crack_times).unwrap_or(0.0),
        latest_run: latest_run(runs),
    }
}

/// The run with the maximum creation timestamp; the later row wins ties.
fn latest_run(runs: &[RunRecord]) -> Option<RunRecord> {
    runs.iter().max_by_key(|r| r.created_at).cloned()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Median with the usual even-length convention: the mean of the two middle
/// values.
fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
