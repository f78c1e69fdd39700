use crate::error::{ElementError, Result};
use serde::Serialize;

/// Kernel Density Estimation using Gaussian kernel
///
/// Bandwidth follows Silverman's rule of thumb; the evaluation grid extends
/// three bandwidths beyond the data range on both sides.
#[derive(Clone, Debug, Serialize)]
pub struct KernelDensity {
    pub x: Vec<f64>, // Grid points
    pub y: Vec<f64>, // Density values
    pub bandwidth: f64,
}

impl KernelDensity {
    /// Compute kernel density estimate
    ///
    /// # Arguments
    /// * `data` - Input samples; non-finite values are dropped
    /// * `adjust` - Bandwidth adjustment factor (default: 1.0)
    /// * `n_points` - Number of grid points (default: 512)
    pub fn estimate(data: &[f64], adjust: f64, n_points: usize) -> Result<Self> {
        if n_points < 2 {
            return Err(ElementError::invalid_data(
                "density grid needs at least 2 points",
            ));
        }

        let clean_data: Vec<f64> = data.iter().filter(|x| x.is_finite()).copied().collect();

        if clean_data.len() < 2 {
            return Err(ElementError::InsufficientData {
                min: 2,
                actual: clean_data.len(),
            });
        }

        let n = clean_data.len() as f64;
        let std_dev = standard_deviation(&clean_data);
        let iqr = interquartile_range(&clean_data);

        // Silverman's rule: bw = 0.9 * min(sd, IQR/1.34) * n^(-1/5)
        // A zero IQR (heavily tied samples) falls back to the standard deviation
        let spread = if iqr > 0.0 {
            std_dev.min(iqr / 1.34)
        } else {
            std_dev
        };
        let bandwidth = 0.9 * spread * n.powf(-0.2) * adjust;
        if bandwidth <= 0.0 || !bandwidth.is_finite() {
            return Err(ElementError::invalid_data(
                "samples have zero spread, density is undefined",
            ));
        }

        let data_min = clean_data.iter().cloned().fold(f64::INFINITY, f64::min);
        let data_max = clean_data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let grid_min = data_min - 3.0 * bandwidth;
        let grid_max = data_max + 3.0 * bandwidth;

        let x: Vec<f64> = (0..n_points)
            .map(|i| grid_min + (grid_max - grid_min) * (i as f64) / (n_points - 1) as f64)
            .collect();

        let y: Vec<f64> = x
            .iter()
            .map(|&xi| {
                let sum: f64 = clean_data
                    .iter()
                    .map(|&xj| gaussian_kernel((xi - xj) / bandwidth))
                    .sum();
                sum / (n * bandwidth)
            })
            .collect();

        Ok(KernelDensity { x, y, bandwidth })
    }
}

#[inline]
fn gaussian_kernel(u: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.3989422804014327; // 1/sqrt(2*pi)
    INV_SQRT_2PI * (-0.5 * u * u).exp()
}

fn standard_deviation(data: &[f64]) -> f64 {
    let mean = data.iter().sum::<f64>() / data.len() as f64;
    let variance = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Interquartile range (Q3 - Q1) by nearest rank
fn interquartile_range(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n < 4 {
        return sorted[n - 1] - sorted[0];
    }
    sorted[3 * n / 4] - sorted[n / 4]
}
