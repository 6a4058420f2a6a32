//! WebAssembly exports for the adaptive fuzzy filter.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Bit Depth Support
//!
//! Both versions use identical Rust implementations:
//! - **u8**: 8-bit per channel (0-255), standard for web/display
//! - **f32**: Float per channel (0.0-1.0), for HDR/linear workflows

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::filters::aff::{aff_denoise_f32, aff_denoise_u8, AffConfig};

/// Apply the adaptive fuzzy filter to a u8 image.
///
/// # Arguments
/// * `data` - Flat array of samples (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Channel count (1, 3, or 4; alpha is preserved)
/// * `threshold` - Median-deviation detection threshold (typically 20)
///
/// # Returns
/// Flat array of filtered samples
#[wasm_bindgen]
pub fn aff_denoise_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    threshold: f32,
) -> Vec<u8> {
    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())
        .expect("Invalid dimensions");

    let config = AffConfig {
        threshold,
        ..Default::default()
    };
    let result = aff_denoise_u8(input.view(), &config).expect("Invalid image");
    result.into_raw_vec_and_offset().0
}

/// Apply the adaptive fuzzy filter to an f32 image.
///
/// # Arguments
/// * `data` - Flat array of samples (length = width * height * channels), values 0.0-1.0
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Channel count (1, 3, or 4; alpha is preserved)
/// * `threshold` - Detection threshold in the 0-255 domain (typically 20)
///
/// # Returns
/// Flat array of filtered samples
#[wasm_bindgen]
pub fn aff_denoise_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    threshold: f32,
) -> Vec<f32> {
    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())
        .expect("Invalid dimensions");

    let config = AffConfig {
        threshold,
        ..Default::default()
    };
    let result = aff_denoise_f32(input.view(), &config).expect("Invalid image");
    result.into_raw_vec_and_offset().0
}
