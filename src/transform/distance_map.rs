use image::GrayImage;
use ndarray::Array2;

/// Result of a chamfer distance transform.
///
/// Background pixels hold exactly 0.0; foreground pixels hold the chamfer
/// distance to the nearest background pixel (normalized or raw, depending on
/// the transform configuration). The grid is never mutated after construction.
pub struct DistanceMap {
    values: Array2<f32>,
    max_value: f32,
}

impl DistanceMap {
    pub(crate) fn new(values: Array2<f32>, max_value: f32) -> Self {
        Self { values, max_value }
    }

    pub fn width(&self) -> u32 {
        self.values.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.values.nrows() as u32
    }

    /// Distance value at (x, y).
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[[y as usize, x as usize]]
    }

    /// The full grid, indexed `[[row, column]]`.
    pub fn values(&self) -> &Array2<f32> {
        &self.values
    }

    pub fn into_values(self) -> Array2<f32> {
        self.values
    }

    /// Display calibration pair (min, max).
    ///
    /// The min is fixed at 0; the max is the largest value observed among
    /// foreground pixels. Advisory metadata for display scaling only, not part
    /// of the numeric contract.
    pub fn calibration(&self) -> (f32, f32) {
        (0.0, self.max_value)
    }

    /// Rescale the map into an 8-bit grayscale image for visualization,
    /// mapping the calibration range onto 0..=255.
    pub fn to_gray_image(&self) -> GrayImage {
        let (_, max) = self.calibration();
        GrayImage::from_fn(self.width(), self.height(), |x, y| {
            let value = self.get(x, y);
            let scaled = if max > 0.0 {
                (value / max * 255.0).clamp(0.0, 255.0) as u8
            } else {
                0
            };
            image::Luma([scaled])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn exposes_extent_and_values() {
        let values = array![[0.0, 1.0, 2.0], [0.0, 1.0, 2.0]];
        let map = DistanceMap::new(values, 2.0);

        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.get(2, 1), 2.0);
        assert_eq!(map.calibration(), (0.0, 2.0));
    }

    #[test]
    fn gray_image_scales_to_calibration_range() {
        let values = array![[0.0, 2.0], [4.0, 0.0]];
        let map = DistanceMap::new(values, 4.0);
        let image = map.to_gray_image();

        assert_eq!(image.get_pixel(0, 0)[0], 0);
        assert_eq!(image.get_pixel(1, 0)[0], 127);
        assert_eq!(image.get_pixel(0, 1)[0], 255);
    }

    #[test]
    fn gray_image_of_all_zero_map_is_black() {
        let map = DistanceMap::new(Array2::zeros((2, 2)), 0.0);
        let image = map.to_gray_image();

        assert!(image.pixels().all(|p| p[0] == 0));
    }
}
