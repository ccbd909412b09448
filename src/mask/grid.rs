use super::MaskSource;
use image::GrayImage;
use ndarray::Array2;

/// Mask backed by a dense `Array2<u8>`, indexed `[[row, column]]`.
pub struct GridMask {
    data: Array2<u8>,
}

impl GridMask {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> u8,
    {
        let data = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            f(x as u32, y as u32)
        });
        Self { data }
    }

    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }
}

impl MaskSource for GridMask {
    fn get(&self, x: u32, y: u32) -> u32 {
        self.data[[y as usize, x as usize]] as u32
    }

    fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    fn height(&self) -> u32 {
        self.data.nrows() as u32
    }
}

impl MaskSource for GrayImage {
    fn get(&self, x: u32, y: u32) -> u32 {
        self.get_pixel(x, y)[0] as u32
    }

    fn width(&self) -> u32 {
        GrayImage::width(self)
    }

    fn height(&self) -> u32 {
        GrayImage::height(self)
    }
}
