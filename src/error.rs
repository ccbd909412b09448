use thiserror::Error;

/// Errors reported by the distance transform before any scan runs.
#[derive(Debug, Error)]
pub enum Error {
    /// The mask has a zero-sized extent in at least one dimension.
    #[error("mask has no pixels ({width}x{height})")]
    EmptyMask { width: u32, height: u32 },

    /// The chamfer weight pair cannot drive a meaningful relaxation.
    #[error("invalid chamfer weights: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, Error>;
