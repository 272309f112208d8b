//! Population variance of the filter response.
//!
//! Variance is computed over the whole response buffer (divide by N, not
//! N−1): the filtered image is the entire population of interest, not a
//! sample of it. Accumulation runs in `f64` with a two-pass
//! mean-then-deviation scheme so multi-megapixel images do not suffer
//! catastrophic cancellation.

use crate::domain::FilterResponse;

/// Computes the population variance of a filter response.
///
/// A buffer with a single sample (1×1 image) has variance 0 by definition.
#[must_use]
pub fn population_variance(response: &FilterResponse) -> f64 {
    let samples = response.samples();
    let n = samples.len();
    if n <= 1 {
        return 0.0;
    }

    let sum: f64 = samples.iter().map(|&v| f64::from(v)).sum();
    let mean = sum / n as f64;

    let sum_sq_dev: f64 = samples
        .iter()
        .map(|&v| {
            let dev = f64::from(v) - mean;
            dev * dev
        })
        .sum();

    sum_sq_dev / n as f64
}
