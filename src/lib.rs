//! adafuzz - Adaptive Fuzzy Noise Filter
//!
//! A per-pixel, per-channel impulse-noise detector and replacement-value
//! estimator implemented in Rust, with Python bindings via PyO3 and WASM
//! bindings for JavaScript.
//!
//! The filter combines a median-deviation noise test with fuzzy-set
//! weighted local means: for every pixel it inspects the 3×3 neighborhood,
//! decides whether the center value is an isolated impulse, and if so
//! replaces it with a fuzzy-weighted estimate of the true intensity.
//!
//! ## Image Format
//! Images are (height, width, channels) arrays with 1, 3, or 4 channels:
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha (preserved)
//!
//! Both bit depths are supported:
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! ## Guarantees
//! The output buffer is always distinct from the input: replacement
//! decisions read only original neighbor values, never values rewritten
//! earlier in the same pass. Combined with purely per-pixel arithmetic
//! this makes the filter deterministic and independent of the degree of
//! parallelism.

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::error::FilterError;
pub use crate::filters::aff::{
    aff_denoise_f32, aff_denoise_u8, aff_denoise_with_stats_f32, aff_denoise_with_stats_u8,
    count_noisy_f32, count_noisy_u8, AffConfig, NoiseStats,
};
pub use crate::filters::detect::DetectorKind;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::filters::aff::{
        aff_denoise_f32 as aff_denoise_f32_impl, aff_denoise_u8,
        aff_denoise_with_stats_u8, count_noisy_u8, AffConfig,
    };
    use crate::filters::detect::DetectorKind;

    fn config(threshold: f32, std_factor: Option<f32>) -> AffConfig {
        AffConfig {
            threshold,
            detector: match std_factor {
                Some(factor) => DetectorKind::StdDeviation { factor },
                None => DetectorKind::MedianDeviation,
            },
        }
    }

    /// Apply the adaptive fuzzy filter to a u8 image.
    ///
    /// # Arguments
    /// * `image` - Input image (1, 3, or 4 channels)
    /// * `threshold` - Median-deviation detection threshold (default: 20)
    /// * `std_factor` - If given, use the mean/std detector with this factor
    #[pyfunction]
    #[pyo3(signature = (image, threshold=20.0, std_factor=None))]
    pub fn aff_denoise<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: f32,
        std_factor: Option<f32>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = aff_denoise_u8(image.as_array(), &config(threshold, std_factor))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(result.into_pyarray(py))
    }

    /// Apply the adaptive fuzzy filter to an f32 image (values 0.0-1.0).
    #[pyfunction]
    #[pyo3(signature = (image, threshold=20.0, std_factor=None))]
    pub fn aff_denoise_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        threshold: f32,
        std_factor: Option<f32>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let result = aff_denoise_f32_impl(image.as_array(), &config(threshold, std_factor))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(result.into_pyarray(py))
    }

    /// Apply the adaptive fuzzy filter and report noise statistics.
    ///
    /// # Returns
    /// `(filtered, noisy_samples, total_samples)`
    #[pyfunction]
    #[pyo3(signature = (image, threshold=20.0, std_factor=None))]
    pub fn aff_denoise_stats<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: f32,
        std_factor: Option<f32>,
    ) -> PyResult<(Bound<'py, PyArray3<u8>>, u64, u64)> {
        let (result, stats) =
            aff_denoise_with_stats_u8(image.as_array(), &config(threshold, std_factor))
                .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((
            result.into_pyarray(py),
            stats.noisy_samples,
            stats.total_samples,
        ))
    }

    /// Count noisy samples without filtering.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=20.0, std_factor=None))]
    pub fn count_noisy<'py>(
        image: PyReadonlyArray3<'py, u8>,
        threshold: f32,
        std_factor: Option<f32>,
    ) -> PyResult<u64> {
        let stats = count_noisy_u8(image.as_array(), &config(threshold, std_factor))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(stats.noisy_samples)
    }

    /// adafuzz Python extension module
    #[pymodule]
    pub fn adafuzz(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(aff_denoise, m)?)?;
        m.add_function(wrap_pyfunction!(aff_denoise_f32, m)?)?;
        m.add_function(wrap_pyfunction!(aff_denoise_stats, m)?)?;
        m.add_function(wrap_pyfunction!(count_noisy, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::adafuzz;
