//! Fuzzy membership curves over the 0-255 intensity domain.
//!
//! Two families of piecewise-linear curves weight pixel contributions when
//! estimating a replacement value:
//!
//! - A single **global** curve: full weight across the usable gray range,
//!   with 3-unit shoulders that discount near-black and near-white values
//!   (the typical amplitudes of salt-and-pepper corruption).
//! - Sixteen **partition** curves, one per 16-wide intensity band, each a
//!   trapezoid with 3-unit transition shoulders. The two edge bands are
//!   clipped half-open at the range boundary. Adjacent shoulders overlap so
//!   the sixteen weights always sum to 1.
//!
//! All functions are pure and return weights in [0, 1].

/// Number of intensity partitions.
pub const PARTITIONS: usize = 16;

/// Global membership: trapezoid with plateau 1 over [3, 252] and linear
/// 3-unit shoulders. Exactly 0 at and beyond both range boundaries.
#[inline]
pub fn global_membership(v: f32) -> f32 {
    if v <= 0.0 || v >= 255.0 {
        0.0
    } else if v < 3.0 {
        v / 3.0
    } else if v <= 252.0 {
        1.0
    } else {
        (255.0 - v) / 3.0
    }
}

/// Membership of intensity `v` in partition `k` (0-15).
///
/// Interior partitions use a symmetric trapezoid with breakpoints
/// a = 16k-2, b = 16k+1, c = 16(k+1)-2, d = 16(k+1)+1: weight 1 on [b, c],
/// linear on (a, b) and (c, d), 0 elsewhere. The first and last partitions
/// are clipped at the range boundary and keep only their inner shoulder.
///
/// # Panics
/// Panics in debug builds if `k >= PARTITIONS`.
#[inline]
pub fn partition_membership(v: f32, k: usize) -> f32 {
    debug_assert!(k < PARTITIONS, "partition index out of range: {k}");

    if k == 0 {
        // Plateau over [0, 14], inner shoulder down to 17.
        if v <= 14.0 {
            1.0
        } else if v < 17.0 {
            (17.0 - v) / 3.0
        } else {
            0.0
        }
    } else if k == PARTITIONS - 1 {
        // Inner shoulder up from 238, plateau over [241, 255].
        if v >= 241.0 {
            1.0
        } else if v > 238.0 {
            (v - 238.0) / 3.0
        } else {
            0.0
        }
    } else {
        let a = (k * 16) as f32 - 2.0;
        let b = (k * 16) as f32 + 1.0;
        let c = ((k + 1) * 16) as f32 - 2.0;
        let d = ((k + 1) * 16) as f32 + 1.0;

        if v <= a || v >= d {
            0.0
        } else if v < b {
            (v - a) / 3.0
        } else if v <= c {
            1.0
        } else {
            (d - v) / 3.0
        }
    }
}
