use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::{debug, info};

use crate::errors::CracklabError;
use crate::models::{HashAlgorithm, HashRecord};

pub const HISTOGRAM_BINS: usize = 50;

const PLOT_WIDTH: u32 = 900;
const PLOT_HEIGHT: u32 = 600;

/// Equal-width binning of a value list. Kept separate from the drawing code
/// so the bucketing is testable without a graphics backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedValues {
    pub origin: f64,
    pub width: f64,
    pub counts: Vec<u32>,
}

impl BinnedValues {
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn span_end(&self) -> f64 {
        self.origin + self.width * self.counts.len() as f64
    }
}

pub fn bin_values(values: &[f64], bins: usize) -> Option<BinnedValues> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    // A single repeated value still gets a visible bar.
    let span = max - min;
    let width = if span > 0.0 { span / bins as f64 } else { 1.0 };

    let mut counts = vec![0u32; bins];
    for &value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    Some(BinnedValues {
        origin: min,
        width,
        counts,
    })
}

pub fn latency_plot_name(algorithm: HashAlgorithm) -> String {
    format!("php_latency_{algorithm}.png")
}

pub fn crack_times_plot_name(algorithm: HashAlgorithm) -> String {
    format!("hashcat_crack_times_{algorithm}.png")
}

/// Render the latency and crack-time histograms for one algorithm into
/// `outdir`. Returns the files actually written; a histogram with no data
/// is skipped rather than drawn empty.
pub fn render_distributions(
    hashes: &[HashRecord],
    algorithm: HashAlgorithm,
    outdir: Option<&Path>,
) -> Result<Vec<PathBuf>, CracklabError> {
    let Some(outdir) = outdir else {
        return Ok(Vec::new());
    };
    std::fs::create_dir_all(outdir)?;

    let mut produced = Vec::new();

    let latencies: Vec<f64> = hashes.iter().filter_map(|h| h.php_elapsed_ms).collect();
    if let Some(binned) = bin_values(&latencies, HISTOGRAM_BINS) {
        let path = outdir.join(latency_plot_name(algorithm));
        render_histogram(
            &path,
            &format!("PHP {} latency (ms)", algorithm.label()),
            "Milliseconds",
            &binned,
        )?;
        info!(path = %path.display(), "Wrote latency histogram");
        produced.push(path);
    } else {
        debug!(algorithm = %algorithm, "No latency values, skipping histogram");
    }

    let crack_times: Vec<f64> = hashes.iter().filter_map(|h| h.crack_time_s).collect();
    if let Some(binned) = bin_values(&crack_times, HISTOGRAM_BINS) {
        let path = outdir.join(crack_times_plot_name(algorithm));
        render_histogram(&path, "Hashcat crack times (s)", "Seconds", &binned)?;
        info!(path = %path.display(), "Wrote crack-time histogram");
        produced.push(path);
    } else {
        debug!(algorithm = %algorithm, "No crack times, skipping histogram");
    }

    Ok(produced)
}

fn render_histogram(
    path: &Path,
    title: &str,
    x_desc: &str,
    binned: &BinnedValues,
) -> Result<(), CracklabError> {
    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CracklabError::Plot(e.to_string()))?;

    let y_max = binned.max_count() + binned.max_count() / 10 + 1;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(52)
        .build_cartesian_2d(binned.origin..binned.span_end(), 0u32..y_max)
        .map_err(|e| CracklabError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Count")
        .draw()
        .map_err(|e| CracklabError::Plot(e.to_string()))?;

    chart
        .draw_series(binned.counts.iter().enumerate().map(|(i, &count)| {
            let x0 = binned.origin + binned.width * i as f64;
            let x1 = x0 + binned.width;
            Rectangle::new([(x0, 0), (x1, count)], BLUE.mix(0.6).filled())
        }))
        .map_err(|e| CracklabError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| CracklabError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_values_empty_input() {
        assert!(bin_values(&[], HISTOGRAM_BINS).is_none());
    }

    #[test]
    fn test_bin_values_counts_cover_all_values() {
        let values = vec![10.0, 20.0, 30.0];
        let binned = bin_values(&values, 3).unwrap();
        assert_eq!(binned.counts.iter().sum::<u32>(), 3);
        assert_eq!(binned.counts, vec![1, 1, 1]);
        assert_eq!(binned.origin, 10.0);
    }

    #[test]
    fn test_bin_values_maximum_lands_in_last_bin() {
        let values = vec![0.0, 50.0, 100.0];
        let binned = bin_values(&values, 50).unwrap();
        assert_eq!(*binned.counts.last().unwrap(), 1);
        assert_eq!(binned.counts[0], 1);
    }

    #[test]
    fn test_bin_values_single_value_has_nonzero_width() {
        let values = vec![7.5, 7.5, 7.5];
        let binned = bin_values(&values, 50).unwrap();
        assert!(binned.width > 0.0);
        assert_eq!(binned.counts[0], 3);
        assert_eq!(binned.counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_plot_names_keyed_on_algorithm() {
        assert_eq!(latency_plot_name(HashAlgorithm::Md5), "php_latency_md5.png");
        assert_eq!(
            crack_times_plot_name(HashAlgorithm::Argon2id),
            "hashcat_crack_times_argon2id.png"
        );
    }

    #[test]
    fn test_render_skips_everything_without_outdir() {
        let hashes = vec![HashRecord {
            md5_hash: Some("aa".to_string()),
            php_elapsed_ms: Some(1.0),
            ..Default::default()
        }];
        let produced = render_distributions(&hashes, HashAlgorithm::Md5, None).unwrap();
        assert!(produced.is_empty());
    }
}
