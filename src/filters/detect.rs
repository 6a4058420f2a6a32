//! Impulse-noise detection tests over a 3×3 window.
//!
//! The default test compares the center value against the median of its
//! eight neighbors: isolated impulses (salt-and-pepper corruption) deviate
//! sharply from the local median while genuine edges do not. An alternative
//! test based on the local mean and standard deviation is available for
//! images where corruption amplitudes are closer to the signal.
//!
//! Both tests are deterministic and side-effect free.

use super::window::CENTER;

/// Which detection test drives a filtering pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetectorKind {
    /// Flag when |center − median(neighbors)| exceeds the configured
    /// threshold (strictly). Robust default for impulse noise.
    MedianDeviation,
    /// Flag when |center − mean(window)| > factor · std(window).
    /// More permissive on textured regions, cheaper on sorted data.
    StdDeviation {
        /// Multiple of the local standard deviation tolerated before a
        /// value counts as noise.
        factor: f32,
    },
}

impl Default for DetectorKind {
    fn default() -> Self {
        DetectorKind::MedianDeviation
    }
}

/// Median of the eight non-center window values.
///
/// With an even count the median is the mean of the two middle order
/// statistics.
pub fn neighbor_median(window: &[f32; 9]) -> f32 {
    let mut neighbors = [0.0f32; 8];
    let mut n = 0;
    for (i, &v) in window.iter().enumerate() {
        if i != CENTER {
            neighbors[n] = v;
            n += 1;
        }
    }

    neighbors.sort_by(|a, b| a.partial_cmp(b).unwrap());
    (neighbors[3] + neighbors[4]) / 2.0
}

/// Median-deviation test: is the center an impulse at this threshold?
///
/// The comparison is strictly greater-than: a deviation exactly equal to
/// the threshold is not flagged.
#[inline]
pub fn is_impulse_median(window: &[f32; 9], threshold: f32) -> bool {
    (window[CENTER] - neighbor_median(window)).abs() > threshold
}

/// Mean/standard-deviation test: is the center further than
/// `factor` standard deviations from the local mean?
pub fn is_impulse_std(window: &[f32; 9], factor: f32) -> bool {
    let mut sum = 0.0f32;
    for &v in window {
        sum += v;
    }
    let mean = sum / 9.0;

    let mut var = 0.0f32;
    for &v in window {
        let d = v - mean;
        var += d * d;
    }
    let std = (var / 9.0).sqrt();

    (window[CENTER] - mean).abs() > factor * std
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_with_center(neighbors: f32, center: f32) -> [f32; 9] {
        let mut w = [neighbors; 9];
        w[CENTER] = center;
        w
    }

    #[test]
    fn test_neighbor_median_excludes_center() {
        // The center impulse must not influence the median.
        let w = window_with_center(80.0, 255.0);
        assert_eq!(neighbor_median(&w), 80.0);
    }

    #[test]
    fn test_neighbor_median_even_count_averages_middle_pair() {
        let mut w = [0.0f32; 9];
        let values = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
        let mut n = 0;
        for i in 0..9 {
            if i != CENTER {
                w[i] = values[n];
                n += 1;
            }
        }
        assert_eq!(neighbor_median(&w), 45.0);
    }

    #[test]
    fn test_median_deviation_threshold_is_strict() {
        // |100 - 80| = 20 is not strictly greater than 20: clean.
        let w = window_with_center(80.0, 100.0);
        assert!(!is_impulse_median(&w, 20.0));

        // |101 - 80| = 21 exceeds the threshold: flagged.
        let w = window_with_center(80.0, 101.0);
        assert!(is_impulse_median(&w, 20.0));
    }

    #[test]
    fn test_median_deviation_clean_when_center_equals_median() {
        let w = [128.0; 9];
        assert!(!is_impulse_median(&w, 0.0));
    }

    #[test]
    fn test_std_deviation_flags_isolated_impulse() {
        let w = window_with_center(100.0, 255.0);
        assert!(is_impulse_std(&w, 2.0));
    }

    #[test]
    fn test_std_deviation_passes_uniform_window() {
        // Zero variance and zero deviation: 0 > 0 is false.
        let w = [100.0; 9];
        assert!(!is_impulse_std(&w, 2.0));
    }

    #[test]
    fn test_detector_kind_default_is_median() {
        assert_eq!(DetectorKind::default(), DetectorKind::MedianDeviation);
    }
}
