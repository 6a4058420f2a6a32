//! Replicate-padded image planes and 3×3 neighborhood windows.
//!
//! The adaptive fuzzy filter inspects a 3×3 neighborhood of every pixel.
//! Rather than clamping coordinates on every window read, a channel is
//! copied once into a plane padded by one pixel on each side (replicate
//! border: border pixels repeat the nearest edge pixel). Window extraction
//! is then a fixed-offset read with no bounds logic in the inner loop.
//!
//! Plane values are stored as `f32` in the 0-255 intensity domain for both
//! bit depths, so the fuzzy arithmetic downstream is shared between the
//! u8 and f32 filter variants.

use ndarray::ArrayView3;

/// Flat index of the center pixel within a 3×3 window.
pub const CENTER: usize = 4;

/// Single image channel padded by one pixel on each side.
///
/// Padding uses edge replication, so every pixel of the original image has
/// a full 3×3 neighborhood. The plane lives only for the duration of one
/// filtering pass.
#[derive(Clone, Debug)]
pub struct PaddedPlane {
    height: usize,
    width: usize,
    stride: usize,
    data: Vec<f32>,
}

impl PaddedPlane {
    /// Copy one channel of a u8 image into a padded plane.
    pub fn from_channel_u8(input: ArrayView3<u8>, channel: usize) -> Self {
        Self::build(input.dim().0, input.dim().1, |y, x| {
            input[[y, x, channel]] as f32
        })
    }

    /// Copy one channel of an f32 image (0.0-1.0) into a padded plane,
    /// scaled to the 0-255 intensity domain.
    pub fn from_channel_f32(input: ArrayView3<f32>, channel: usize) -> Self {
        Self::build(input.dim().0, input.dim().1, |y, x| {
            input[[y, x, channel]] * 255.0
        })
    }

    fn build(height: usize, width: usize, sample: impl Fn(usize, usize) -> f32) -> Self {
        debug_assert!(height > 0 && width > 0, "plane requires a non-empty image");
        let stride = width + 2;
        let mut data = Vec::with_capacity(stride * (height + 2));

        for py in 0..height + 2 {
            let sy = (py as isize - 1).clamp(0, height as isize - 1) as usize;
            for px in 0..width + 2 {
                let sx = (px as isize - 1).clamp(0, width as isize - 1) as usize;
                data.push(sample(sy, sx));
            }
        }

        PaddedPlane {
            height,
            width,
            stride,
            data,
        }
    }

    /// Image height (without padding).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width (without padding).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Extract the 3×3 window centered on pixel (y, x) of the original
    /// image, in row-major order with the center at index [`CENTER`].
    ///
    /// (y, x) must lie within the original image bounds; coordinates
    /// outside them are a caller bug (the slice indexing will panic).
    #[inline]
    pub fn window(&self, y: usize, x: usize) -> [f32; 9] {
        let r0 = y * self.stride + x;
        let r1 = r0 + self.stride;
        let r2 = r1 + self.stride;
        [
            self.data[r0],
            self.data[r0 + 1],
            self.data[r0 + 2],
            self.data[r1],
            self.data[r1 + 1],
            self.data[r1 + 2],
            self.data[r2],
            self.data[r2 + 1],
            self.data[r2 + 2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn ramp_image() -> Array3<u8> {
        // 3x3 single channel: value = 10*y + x
        let mut img = Array3::<u8>::zeros((3, 3, 1));
        for y in 0..3 {
            for x in 0..3 {
                img[[y, x, 0]] = (10 * y + x) as u8;
            }
        }
        img
    }

    #[test]
    fn test_window_center_is_original_pixel() {
        let img = ramp_image();
        let plane = PaddedPlane::from_channel_u8(img.view(), 0);

        for y in 0..3 {
            for x in 0..3 {
                let w = plane.window(y, x);
                assert_eq!(w[CENTER], img[[y, x, 0]] as f32);
            }
        }
    }

    #[test]
    fn test_window_interior_matches_neighbors() {
        let img = ramp_image();
        let plane = PaddedPlane::from_channel_u8(img.view(), 0);

        let w = plane.window(1, 1);
        assert_eq!(w, [0.0, 1.0, 2.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0]);
    }

    #[test]
    fn test_corner_replicates_edge_pixels() {
        let img = ramp_image();
        let plane = PaddedPlane::from_channel_u8(img.view(), 0);

        // Top-left corner: out-of-bounds rows/columns repeat row 0 / col 0.
        let w = plane.window(0, 0);
        assert_eq!(w, [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 10.0, 10.0, 11.0]);

        // Bottom-right corner.
        let w = plane.window(2, 2);
        assert_eq!(w, [11.0, 12.0, 12.0, 21.0, 22.0, 22.0, 21.0, 22.0, 22.0]);
    }

    #[test]
    fn test_single_pixel_image_replicates_everywhere() {
        let mut img = Array3::<u8>::zeros((1, 1, 1));
        img[[0, 0, 0]] = 77;
        let plane = PaddedPlane::from_channel_u8(img.view(), 0);

        assert_eq!(plane.window(0, 0), [77.0; 9]);
    }

    #[test]
    fn test_f32_plane_scales_to_255_domain() {
        let mut img = Array3::<f32>::zeros((2, 2, 1));
        img[[0, 0, 0]] = 1.0;
        img[[1, 1, 0]] = 0.5;
        let plane = PaddedPlane::from_channel_f32(img.view(), 0);

        let w = plane.window(0, 0);
        assert_eq!(w[CENTER], 255.0);
        assert_eq!(plane.window(1, 1)[CENTER], 127.5);
    }

    #[test]
    fn test_selects_requested_channel() {
        let mut img = Array3::<u8>::zeros((2, 2, 3));
        img[[0, 0, 1]] = 200;
        let plane = PaddedPlane::from_channel_u8(img.view(), 1);

        assert_eq!(plane.window(0, 0)[CENTER], 200.0);
        assert_eq!(plane.height(), 2);
        assert_eq!(plane.width(), 2);
    }
}
