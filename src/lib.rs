//! Chamfer distance transforms for binary masks.
//!
//! Given a foreground/background mask, [`ChamferTransform`] computes for every
//! foreground pixel an approximation of the Euclidean distance to the nearest
//! background pixel, using two raster scans over a 3x3 neighborhood with a
//! configurable weight pair.

pub mod error;
pub mod mask;
pub mod progress;
pub mod transform;

pub use error::{Error, Result};
pub use mask::{GridMask, MaskSource, DEFAULT_MASK_LABEL};
pub use progress::{LogListener, NoopListener, ProgressListener};
pub use transform::{ChamferTransform, ChamferWeights, DistanceMap};
