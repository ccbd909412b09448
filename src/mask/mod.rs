mod grid;

pub use grid::GridMask;

/// Pixel value that marks foreground in a binary mask by default.
pub const DEFAULT_MASK_LABEL: u8 = 255;

/// Read-only view over a binary mask.
///
/// Allows swapping between different backings (grayscale images, raw grids,
/// synthetic test masks) without copying pixel data.
pub trait MaskSource {
    /// Raw pixel code at (x, y). Only the low 8 bits are significant;
    /// a pixel is foreground when they equal the configured mask label.
    fn get(&self, x: u32, y: u32) -> u32;

    /// Width of the mask in pixels.
    fn width(&self) -> u32;

    /// Height of the mask in pixels.
    fn height(&self) -> u32;
}
