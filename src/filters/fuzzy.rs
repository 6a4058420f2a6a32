//! Fuzzy-weighted means over a 3×3 window and nearest-partition selection.
//!
//! A corrupted pixel is replaced by an estimate of its "true" value. Two
//! families of estimates are computed from the window:
//!
//! - the **overall fuzzy mean**: all nine values averaged with the global
//!   membership curve as weights, discounting extreme intensities;
//! - sixteen **partition means**: the same weighted average per intensity
//!   band, each biased toward the pixels that fall inside that band.
//!
//! When a curve assigns zero total weight to the window (e.g. a window of
//! pure black under the global curve), the mean falls back to the center
//! value so the arithmetic stays total.

use super::membership::{global_membership, partition_membership, PARTITIONS};
use super::window::CENTER;

/// Fuzzy-weighted mean of the window under the global membership curve.
///
/// Falls back to the center value when every weight is zero.
pub fn overall_fuzzy_mean(window: &[f32; 9]) -> f32 {
    let mut weighted = 0.0f32;
    let mut weight_sum = 0.0f32;

    for &v in window {
        let w = global_membership(v);
        weighted += v * w;
        weight_sum += w;
    }

    if weight_sum > 0.0 {
        weighted / weight_sum
    } else {
        window[CENTER]
    }
}

/// Fuzzy-weighted mean of the window per intensity partition.
///
/// Entry `k` is the window average weighted by partition `k`'s membership
/// curve, or the center value when the window has no support in that band.
pub fn partition_means(window: &[f32; 9]) -> [f32; PARTITIONS] {
    let mut means = [window[CENTER]; PARTITIONS];

    for (k, mean) in means.iter_mut().enumerate() {
        let mut weighted = 0.0f32;
        let mut weight_sum = 0.0f32;

        for &v in window {
            let w = partition_membership(v, k);
            weighted += v * w;
            weight_sum += w;
        }

        if weight_sum > 0.0 {
            *mean = weighted / weight_sum;
        }
    }

    means
}

/// The partition mean closest to the overall fuzzy mean.
///
/// Scans partitions in order and keeps the first strict improvement, so an
/// exact distance tie resolves to the lower partition index.
pub fn nearest_partition_mean(overall: f32, means: &[f32; PARTITIONS]) -> f32 {
    let mut best = means[0];
    let mut best_dist = (overall - means[0]).abs();

    for &m in &means[1..] {
        let dist = (overall - m).abs();
        if dist < best_dist {
            best_dist = dist;
            best = m;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_mean_of_uniform_window() {
        let window = [128.0; 9];
        assert_eq!(overall_fuzzy_mean(&window), 128.0);
    }

    #[test]
    fn test_overall_mean_discounts_extremes() {
        // Eight mid-gray pixels and one pure-black outlier: the outlier has
        // zero global weight, so the mean is exactly the neighbor value.
        let mut window = [128.0; 9];
        window[CENTER] = 0.0;
        assert_eq!(overall_fuzzy_mean(&window), 128.0);
    }

    #[test]
    fn test_overall_mean_zero_weight_falls_back_to_center() {
        // All-black window: the global curve assigns weight 0 everywhere.
        let window = [0.0; 9];
        assert_eq!(overall_fuzzy_mean(&window), 0.0);

        let mut window = [255.0; 9];
        window[CENTER] = 0.0;
        assert_eq!(overall_fuzzy_mean(&window), 0.0);
    }

    #[test]
    fn test_partition_means_fallback_and_support() {
        let mut window = [100.0; 9];
        window[CENTER] = 30.0;
        let means = partition_means(&window);

        // Partition 6 (plateau [97, 110]) holds the eight 100s.
        assert_eq!(means[6], 100.0);
        // Partition 1 (plateau [17, 30]) holds only the center 30.
        assert_eq!(means[1], 30.0);
        // Partition 12 has no support at all: falls back to the center.
        assert_eq!(means[12], 30.0);
    }

    #[test]
    fn test_partition_mean_blends_across_shoulder() {
        // 95.5 carries weight 0.5 in partition 6 alongside a full-weight 100.
        let mut window = [100.0; 9];
        window[0] = 95.5;
        let means = partition_means(&window);
        let expected = (8.0 * 100.0 + 0.5 * 95.5) / 8.5;
        assert!((means[6] - expected).abs() < 1e-4);
    }

    #[test]
    fn test_nearest_partition_mean_selects_minimum_distance() {
        let mut means = [0.0f32; PARTITIONS];
        for (k, m) in means.iter_mut().enumerate() {
            *m = (k * 50) as f32;
        }
        // 97 is closest to 100 (distance 3).
        assert_eq!(nearest_partition_mean(97.0, &means), 100.0);
    }

    #[test]
    fn test_nearest_partition_mean_tie_keeps_lowest_index() {
        let mut means = [1000.0f32; PARTITIONS];
        means[0] = 90.0;
        means[1] = 104.0;
        // Both are 7 away from 97; the scan keeps partition 0.
        assert_eq!(nearest_partition_mean(97.0, &means), 90.0);
    }
}
