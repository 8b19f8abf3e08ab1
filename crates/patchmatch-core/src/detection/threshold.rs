use ndarray::Array2;

use crate::consts::OTSU_HISTOGRAM_BINS;

use super::config::ThresholdMethod;

/// Compute the distance threshold using the configured method.
///
/// Cells at or below the returned value count as matched.
pub fn compute_threshold(df: &Array2<f64>, method: &ThresholdMethod, sigma_mul: f64) -> f64 {
    match method {
        ThresholdMethod::MeanMinusSigma => {
            let (mean, std) = compute_mean_stddev(df);
            (mean - sigma_mul * std).max(0.0)
        }
        ThresholdMethod::Otsu => {
            let max = finite_max(df);
            if max <= 0.0 {
                return 0.0;
            }
            otsu_threshold(&df.mapv(|v| v / max)) * max
        }
        ThresholdMethod::Fixed(v) => *v,
    }
}

/// Compute mean and standard deviation of the field values.
pub fn compute_mean_stddev(df: &Array2<f64>) -> (f64, f64) {
    let n = df.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let mean = df.sum() / n;
    let var = df.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

fn finite_max(df: &Array2<f64>) -> f64 {
    df.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max)
}

/// Otsu's thresholding on values in [0, 1]: maximize between-class variance.
///
/// Returns the upper edge of the lower class.
pub fn otsu_threshold(data: &Array2<f64>) -> f64 {
    let bins = OTSU_HISTOGRAM_BINS;
    let mut histogram = vec![0u64; bins];

    for &v in data.iter() {
        let bin = ((v.clamp(0.0, 1.0) * (bins - 1) as f64) as usize).min(bins - 1);
        histogram[bin] += 1;
    }

    let total = data.len() as f64;
    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut weight_bg = 0.0_f64;
    let mut sum_bg = 0.0_f64;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    (best_bin as f64 + 0.5) / (bins - 1) as f64
}
