use super::{ChamferWeights, DistanceMap};
use crate::error::{Error, Result};
use crate::mask::{MaskSource, DEFAULT_MASK_LABEL};
use crate::progress::{NoopListener, ProgressListener};
use ndarray::Array2;

/// Chamfer distance transform over a 3x3 neighborhood.
///
/// Computes, for every foreground pixel of a binary mask, an approximation of
/// the Euclidean distance to the nearest background pixel: one forward and one
/// backward raster scan relax each pixel against its already-visited neighbors
/// using the configured (orthogonal, diagonal) weight pair. Two scans are
/// enough to converge for a single-ring neighborhood.
///
/// # Example
/// ```
/// use chamfermap::{ChamferTransform, ChamferWeights, GridMask};
///
/// let weights = ChamferWeights::new(1.0, std::f32::consts::SQRT_2)?;
/// let mask = GridMask::from_fn(5, 5, |x, y| if (x, y) == (2, 2) { 0 } else { 255 });
/// let map = ChamferTransform::new(weights).distance_map(&mask)?;
/// assert_eq!(map.get(2, 2), 0.0);
/// # Ok::<(), chamfermap::Error>(())
/// ```
pub struct ChamferTransform {
    weights: ChamferWeights,
    normalize: bool,
    mask_label: u8,
}

impl ChamferTransform {
    /// Create a transform with the given weights, normalization enabled and
    /// the default mask label (255).
    pub fn new(weights: ChamferWeights) -> Self {
        Self {
            weights,
            normalize: true,
            mask_label: DEFAULT_MASK_LABEL,
        }
    }

    /// Whether to divide the final map by the orthogonal weight, bringing an
    /// orthogonal unit step to 1.0 (closer to Euclidean units). Defaults to
    /// true.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Pixel value that marks foreground. Defaults to 255.
    pub fn mask_label(mut self, label: u8) -> Self {
        self.mask_label = label;
        self
    }

    /// Compute the distance map of `mask` without progress reporting.
    pub fn distance_map<M>(&self, mask: &M) -> Result<DistanceMap>
    where
        M: MaskSource + ?Sized,
    {
        self.distance_map_with(mask, &mut NoopListener)
    }

    /// Compute the distance map of `mask`, reporting stages and per-row
    /// progress to `listener`.
    ///
    /// # Returns
    /// A freshly allocated map of the same extent as the mask: 0.0 for every
    /// background pixel, the chamfer distance to the nearest background pixel
    /// otherwise. Foreground pixels with no reachable background keep the
    /// `f32::MAX` sentinel.
    pub fn distance_map_with<M>(
        &self,
        mask: &M,
        listener: &mut dyn ProgressListener,
    ) -> Result<DistanceMap>
    where
        M: MaskSource + ?Sized,
    {
        let (width, height) = (mask.width(), mask.height());
        if width == 0 || height == 0 {
            return Err(Error::EmptyMask { width, height });
        }

        let _span = tracing::debug_span!("distance_map", width, height).entered();

        let engine = Engine::new(mask, self.weights, self.mask_label, listener);
        let (buffer, max_value) = engine.run(self.normalize);

        Ok(DistanceMap::new(buffer, max_value))
    }
}

/// One transform run: owns the in-place buffer shared by both scans.
struct Engine<'a, M: MaskSource + ?Sized> {
    mask: &'a M,
    listener: &'a mut dyn ProgressListener,
    buffer: Array2<f32>,
    weights: ChamferWeights,
    mask_label: u8,
    width: usize,
    height: usize,
}

impl<'a, M: MaskSource + ?Sized> Engine<'a, M> {
    fn new(
        mask: &'a M,
        weights: ChamferWeights,
        mask_label: u8,
        listener: &'a mut dyn ProgressListener,
    ) -> Self {
        let width = mask.width() as usize;
        let height = mask.height() as usize;

        Self {
            mask,
            listener,
            buffer: Array2::zeros((height, width)),
            weights,
            mask_label,
            width,
            height,
        }
    }

    /// Run all phases in order and return the final buffer with the maximum
    /// value observed among foreground pixels.
    fn run(mut self, normalize: bool) -> (Array2<f32>, f32) {
        self.listener.stage_changed("Initialization");
        self.init();

        // Two scans are enough to converge to the chamfer distance.
        self.listener.stage_changed("Forward Scan");
        self.forward();
        self.listener.stage_changed("Backward Scan");
        self.backward();

        if normalize {
            self.listener.stage_changed("Normalization");
            self.normalize();
        }

        self.listener.stage_changed("Complete");

        // Max is scanned after normalization so the calibration matches the
        // returned values.
        let max_value = self.max_value();
        (self.buffer, max_value)
    }

    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.mask.get(x as u32, y as u32) & 0xff == self.mask_label as u32
    }

    /// Monotone relaxation: the only mutation path during the scans. Never
    /// increases a stored distance.
    fn update_if_needed(&mut self, x: usize, y: usize, candidate: f32) {
        if candidate < self.buffer[[y, x]] {
            self.buffer[[y, x]] = candidate;
        }
    }

    /// Background pixels start at 0, foreground pixels at the largest finite
    /// value so that adding a weight stays well-defined.
    fn init(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_foreground(x, y) {
                    self.buffer[[y, x]] = f32::MAX;
                }
            }
        }
    }

    /// Forward scan: top-left to bottom-right, relaxing each foreground pixel
    /// against its left, up, up-left and up-right neighbors.
    fn forward(&mut self) {
        let (w, h) = (self.width, self.height);
        let ortho_w = self.weights.ortho();
        let diag_w = self.weights.diag();

        // First row: only the left neighbor exists; (0, 0) has none at all.
        for x in 1..w {
            if !self.is_foreground(x, 0) {
                continue;
            }
            let ortho = self.buffer[[0, x - 1]];
            self.update_if_needed(x, 0, ortho + ortho_w);
        }

        for y in 1..h {
            self.listener.progress_changed(y as u32, h as u32);

            // Single-column mask: only the up neighbor exists.
            if w == 1 {
                if self.is_foreground(0, y) {
                    let ortho = self.buffer[[y - 1, 0]];
                    self.update_if_needed(0, y, ortho + ortho_w);
                }
                continue;
            }

            // First pixel of the row: up and up-right.
            if self.is_foreground(0, y) {
                let ortho = self.buffer[[y - 1, 0]];
                let diag = self.buffer[[y - 1, 1]];
                let candidate = (ortho + ortho_w).min(diag + diag_w);
                self.update_if_needed(0, y, candidate);
            }

            // Interior pixels: left, up, up-left, up-right.
            for x in 1..w - 1 {
                if !self.is_foreground(x, y) {
                    continue;
                }
                let ortho = self.buffer[[y, x - 1]].min(self.buffer[[y - 1, x]]);
                let diag = self.buffer[[y - 1, x - 1]].min(self.buffer[[y - 1, x + 1]]);
                let candidate = (ortho + ortho_w).min(diag + diag_w);
                self.update_if_needed(x, y, candidate);
            }

            // Last pixel of the row: left, up and up-left.
            if self.is_foreground(w - 1, y) {
                let ortho = self.buffer[[y, w - 2]].min(self.buffer[[y - 1, w - 1]]);
                let diag = self.buffer[[y - 1, w - 2]];
                let candidate = (ortho + ortho_w).min(diag + diag_w);
                self.update_if_needed(w - 1, y, candidate);
            }
        }
    }

    /// Backward scan: the forward scan mirrored through 180 degrees, using the
    /// right, down, down-left and down-right neighbors.
    fn backward(&mut self) {
        let (w, h) = (self.width, self.height);
        let ortho_w = self.weights.ortho();
        let diag_w = self.weights.diag();

        // Last row: only the right neighbor exists.
        for x in (0..w.saturating_sub(1)).rev() {
            if !self.is_foreground(x, h - 1) {
                continue;
            }
            let ortho = self.buffer[[h - 1, x + 1]];
            self.update_if_needed(x, h - 1, ortho + ortho_w);
        }

        for y in (0..h - 1).rev() {
            self.listener.progress_changed((h - 1 - y) as u32, h as u32);

            // Single-column mask: only the down neighbor exists.
            if w == 1 {
                if self.is_foreground(0, y) {
                    let ortho = self.buffer[[y + 1, 0]];
                    self.update_if_needed(0, y, ortho + ortho_w);
                }
                continue;
            }

            // Last pixel of the row: down and down-left.
            if self.is_foreground(w - 1, y) {
                let ortho = self.buffer[[y + 1, w - 1]];
                let diag = self.buffer[[y + 1, w - 2]];
                let candidate = (ortho + ortho_w).min(diag + diag_w);
                self.update_if_needed(w - 1, y, candidate);
            }

            // Interior pixels: right, down, down-right, down-left.
            for x in (1..w - 1).rev() {
                if !self.is_foreground(x, y) {
                    continue;
                }
                let ortho = self.buffer[[y, x + 1]].min(self.buffer[[y + 1, x]]);
                let diag = self.buffer[[y + 1, x - 1]].min(self.buffer[[y + 1, x + 1]]);
                let candidate = (ortho + ortho_w).min(diag + diag_w);
                self.update_if_needed(x, y, candidate);
            }

            // First pixel of the row: right, down and down-right.
            if self.is_foreground(0, y) {
                let ortho = self.buffer[[y, 1]].min(self.buffer[[y + 1, 0]]);
                let diag = self.buffer[[y + 1, 1]];
                let candidate = (ortho + ortho_w).min(diag + diag_w);
                self.update_if_needed(0, y, candidate);
            }
        }

        self.listener.progress_changed(h as u32, h as u32);
    }

    /// Divide every foreground pixel by the orthogonal weight.
    fn normalize(&mut self) {
        let ortho_w = self.weights.ortho();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_foreground(x, y) {
                    self.buffer[[y, x]] /= ortho_w;
                }
            }
        }
    }

    /// Maximum value among foreground pixels, for display calibration.
    fn max_value(&self) -> f32 {
        let mut max = 0.0f32;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_foreground(x, y) {
                    max = max.max(self.buffer[[y, x]]);
                }
            }
        }
        max
    }
}
