//! Adaptive fuzzy filter: per-pixel impulse detection and replacement.
//!
//! For every pixel and color channel, independently:
//!
//! 1. Extract the 3×3 replicate-padded neighborhood.
//! 2. Run the configured noise test. Clean values are copied to the output
//!    unchanged (bit-exact).
//! 3. For a flagged value, pick a replacement by the first matching rule:
//!    - the plain neighbor mean, when the center is an extreme outlier
//!      (|neighborMean − center| ≥ 250);
//!    - the overall fuzzy mean, when it agrees with the window mean
//!      (|windowMean − fuzzyMean| < 128);
//!    - otherwise the partition mean nearest the overall fuzzy mean.
//!    The chosen estimate is floored and clamped to the valid range.
//!
//! The output is always a buffer distinct from the input: every window
//! reads original values only, never values rewritten earlier in the same
//! pass. Output is therefore identical for any processing order, and rows
//! are distributed across a rayon worker pool.
//!
//! ## Supported Formats
//!
//! Images with 1, 3, or 4 channels, as (height, width, channels) arrays:
//! - **Grayscale**: processes the single channel
//! - **RGB**: processes all 3 channels
//! - **RGBA**: processes RGB, preserves alpha
//!
//! Both u8 (0-255) and f32 (0.0-1.0) modes are supported; the f32 mode maps
//! intensities into the 0-255 domain and runs the identical arithmetic.

use log::debug;
use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;
use std::time::Instant;

use super::detect::{is_impulse_median, is_impulse_std, DetectorKind};
use super::fuzzy::{nearest_partition_mean, overall_fuzzy_mean, partition_means};
use super::window::{PaddedPlane, CENTER};
use crate::error::FilterError;

// ============================================================================
// Configuration & Statistics
// ============================================================================

/// Configuration for an adaptive fuzzy filtering pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffConfig {
    /// Detection threshold for the median-deviation test, in intensity
    /// units of the 0-255 domain. A center value is noise when its absolute
    /// deviation from the neighbor median strictly exceeds this.
    pub threshold: f32,
    /// Which detection test drives the pass.
    pub detector: DetectorKind,
}

impl Default for AffConfig {
    fn default() -> Self {
        Self {
            threshold: 20.0,
            detector: DetectorKind::MedianDeviation,
        }
    }
}

impl AffConfig {
    #[inline]
    fn is_noise(&self, window: &[f32; 9]) -> bool {
        match self.detector {
            DetectorKind::MedianDeviation => is_impulse_median(window, self.threshold),
            DetectorKind::StdDeviation { factor } => is_impulse_std(window, factor),
        }
    }
}

/// Per-pass noise statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoiseStats {
    /// Samples (pixel/channel pairs) flagged as noise.
    pub noisy_samples: u64,
    /// Samples examined (excludes a passthrough alpha channel).
    pub total_samples: u64,
}

impl NoiseStats {
    /// Flagged fraction in [0, 1]; 0 for an image with no examined samples.
    pub fn noise_ratio(&self) -> f64 {
        if self.total_samples == 0 {
            0.0
        } else {
            self.noisy_samples as f64 / self.total_samples as f64
        }
    }
}

// ============================================================================
// Filtering
// ============================================================================

fn validate(height: usize, width: usize, channels: usize) -> Result<(), FilterError> {
    if height == 0 || width == 0 {
        return Err(FilterError::EmptyImage { height, width });
    }
    if !matches!(channels, 1 | 3 | 4) {
        return Err(FilterError::UnsupportedChannels { channels });
    }
    Ok(())
}

/// Replacement value for a noisy sample, floored, in the 0-255 domain.
fn replacement(window: &[f32; 9]) -> f32 {
    let center = window[CENTER];
    let mut sum = 0.0f32;
    for &v in window {
        sum += v;
    }
    let mean_all = sum / 9.0;
    let mean_neighbors = (sum - center) / 8.0;

    // Extreme outlier: the neighbor mean is trusted wholesale.
    if (mean_neighbors - center).abs() >= 250.0 {
        return mean_neighbors.floor();
    }

    let fuzzy_mean = overall_fuzzy_mean(window);
    if (mean_all - fuzzy_mean).abs() < 128.0 {
        return fuzzy_mean.floor();
    }

    // Fuzzy mean disagrees with the window mean: fall back to the
    // partition-local estimate nearest to it.
    let means = partition_means(window);
    nearest_partition_mean(fuzzy_mean, &means).floor()
}

/// Apply the adaptive fuzzy filter - u8 version.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `config` - Detection threshold and detector selection
///
/// # Returns
/// Filtered image with same shape, or a validation error for empty images
/// and unsupported channel counts.
pub fn aff_denoise_u8(
    input: ArrayView3<u8>,
    config: &AffConfig,
) -> Result<Array3<u8>, FilterError> {
    aff_denoise_with_stats_u8(input, config).map(|(out, _)| out)
}

/// Apply the adaptive fuzzy filter and report noise statistics - u8 version.
///
/// # Returns
/// `(filtered, stats)` where `stats.noisy_samples` counts the values that
/// were flagged and replaced.
pub fn aff_denoise_with_stats_u8(
    input: ArrayView3<u8>,
    config: &AffConfig,
) -> Result<(Array3<u8>, NoiseStats), FilterError> {
    let (height, width, channels) = input.dim();
    validate(height, width, channels)?;

    let start = Instant::now();
    let color_channels = if channels == 4 { 3 } else { channels };

    let planes: Vec<PaddedPlane> = (0..color_channels)
        .map(|c| PaddedPlane::from_channel_u8(input, c))
        .collect();

    let mut data = vec![0u8; height * width * channels];
    let noisy: u64 = data
        .par_chunks_mut(width * channels)
        .enumerate()
        .map(|(y, row)| {
            let mut row_noisy = 0u64;
            for x in 0..width {
                for (c, plane) in planes.iter().enumerate() {
                    let window = plane.window(y, x);
                    row[x * channels + c] = if config.is_noise(&window) {
                        row_noisy += 1;
                        replacement(&window).clamp(0.0, 255.0) as u8
                    } else {
                        input[[y, x, c]]
                    };
                }
                if channels == 4 {
                    row[x * channels + 3] = input[[y, x, 3]];
                }
            }
            row_noisy
        })
        .sum();

    let stats = NoiseStats {
        noisy_samples: noisy,
        total_samples: (height * width * color_channels) as u64,
    };
    debug!(
        "aff denoise {}x{}x{}: flagged {} of {} samples in {:.3} ms",
        height,
        width,
        channels,
        stats.noisy_samples,
        stats.total_samples,
        start.elapsed().as_secs_f64() * 1000.0
    );

    let output = Array3::from_shape_vec((height, width, channels), data)
        .expect("output buffer matches image shape");
    Ok((output, stats))
}

/// Apply the adaptive fuzzy filter - f32 version.
///
/// Input values are 0.0-1.0. Internally intensities are scaled to the
/// 0-255 domain so both bit depths run the identical decision arithmetic
/// (replacements are floored in that domain and scaled back). Clean values
/// are copied from the input bit-exactly.
pub fn aff_denoise_f32(
    input: ArrayView3<f32>,
    config: &AffConfig,
) -> Result<Array3<f32>, FilterError> {
    aff_denoise_with_stats_f32(input, config).map(|(out, _)| out)
}

/// Apply the adaptive fuzzy filter and report noise statistics - f32 version.
pub fn aff_denoise_with_stats_f32(
    input: ArrayView3<f32>,
    config: &AffConfig,
) -> Result<(Array3<f32>, NoiseStats), FilterError> {
    let (height, width, channels) = input.dim();
    validate(height, width, channels)?;

    let start = Instant::now();
    let color_channels = if channels == 4 { 3 } else { channels };

    let planes: Vec<PaddedPlane> = (0..color_channels)
        .map(|c| PaddedPlane::from_channel_f32(input, c))
        .collect();

    let mut data = vec![0.0f32; height * width * channels];
    let noisy: u64 = data
        .par_chunks_mut(width * channels)
        .enumerate()
        .map(|(y, row)| {
            let mut row_noisy = 0u64;
            for x in 0..width {
                for (c, plane) in planes.iter().enumerate() {
                    let window = plane.window(y, x);
                    row[x * channels + c] = if config.is_noise(&window) {
                        row_noisy += 1;
                        replacement(&window).clamp(0.0, 255.0) / 255.0
                    } else {
                        input[[y, x, c]]
                    };
                }
                if channels == 4 {
                    row[x * channels + 3] = input[[y, x, 3]];
                }
            }
            row_noisy
        })
        .sum();

    let stats = NoiseStats {
        noisy_samples: noisy,
        total_samples: (height * width * color_channels) as u64,
    };
    debug!(
        "aff denoise {}x{}x{} (f32): flagged {} of {} samples in {:.3} ms",
        height,
        width,
        channels,
        stats.noisy_samples,
        stats.total_samples,
        start.elapsed().as_secs_f64() * 1000.0
    );

    let output = Array3::from_shape_vec((height, width, channels), data)
        .expect("output buffer matches image shape");
    Ok((output, stats))
}

// ============================================================================
// Noise Census
// ============================================================================

/// Count noisy samples without filtering - u8 version.
///
/// Runs only the detection test over every pixel/channel. Useful to
/// measure residual noise after a pass.
pub fn count_noisy_u8(
    input: ArrayView3<u8>,
    config: &AffConfig,
) -> Result<NoiseStats, FilterError> {
    let (height, width, channels) = input.dim();
    validate(height, width, channels)?;

    let color_channels = if channels == 4 { 3 } else { channels };
    let mut noisy = 0u64;

    for c in 0..color_channels {
        let plane = PaddedPlane::from_channel_u8(input, c);
        for y in 0..height {
            for x in 0..width {
                if config.is_noise(&plane.window(y, x)) {
                    noisy += 1;
                }
            }
        }
    }

    Ok(NoiseStats {
        noisy_samples: noisy,
        total_samples: (height * width * color_channels) as u64,
    })
}

/// Count noisy samples without filtering - f32 version.
pub fn count_noisy_f32(
    input: ArrayView3<f32>,
    config: &AffConfig,
) -> Result<NoiseStats, FilterError> {
    let (height, width, channels) = input.dim();
    validate(height, width, channels)?;

    let color_channels = if channels == 4 { 3 } else { channels };
    let mut noisy = 0u64;

    for c in 0..color_channels {
        let plane = PaddedPlane::from_channel_f32(input, c);
        for y in 0..height {
            for x in 0..width {
                if config.is_noise(&plane.window(y, x)) {
                    noisy += 1;
                }
            }
        }
    }

    Ok(NoiseStats {
        noisy_samples: noisy,
        total_samples: (height * width * color_channels) as u64,
    })
}
