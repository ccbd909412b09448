use crate::error::{Error, Result};

/// Chamfer weight pair: cost of stepping to an orthogonally adjacent pixel vs
/// a diagonally adjacent one.
///
/// For a geodesic-looking result the diagonal weight should be at least the
/// orthogonal one (e.g. the classic 1.0 / sqrt(2) pair); that relation is not
/// enforced, only finiteness and a positive orthogonal weight are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamferWeights {
    ortho: f32,
    diag: f32,
}

impl ChamferWeights {
    /// Validate and build a weight pair.
    ///
    /// The orthogonal weight must be positive and finite: the normalization
    /// step divides by it, and a non-positive weight makes the relaxation
    /// meaningless. The diagonal weight must be non-negative and finite.
    pub fn new(ortho: f32, diag: f32) -> Result<Self> {
        if !ortho.is_finite() || ortho <= 0.0 {
            return Err(Error::InvalidWeights(format!(
                "orthogonal weight must be positive and finite, got {}",
                ortho
            )));
        }
        if !diag.is_finite() || diag < 0.0 {
            return Err(Error::InvalidWeights(format!(
                "diagonal weight must be non-negative and finite, got {}",
                diag
            )));
        }

        Ok(Self { ortho, diag })
    }

    pub fn ortho(&self) -> f32 {
        self.ortho
    }

    pub fn diag(&self) -> f32 {
        self.diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn accepts_classic_pair() {
        let weights = ChamferWeights::new(1.0, std::f32::consts::SQRT_2).unwrap();
        assert_eq!(weights.ortho(), 1.0);
        assert_eq!(weights.diag(), std::f32::consts::SQRT_2);
    }

    #[test]
    fn rejects_non_positive_orthogonal_weight() {
        assert!(matches!(
            ChamferWeights::new(0.0, 1.0),
            Err(Error::InvalidWeights(_))
        ));
        assert!(matches!(
            ChamferWeights::new(-1.0, 1.0),
            Err(Error::InvalidWeights(_))
        ));
    }

    #[test]
    fn rejects_non_finite_weights() {
        assert!(ChamferWeights::new(f32::NAN, 1.0).is_err());
        assert!(ChamferWeights::new(1.0, f32::INFINITY).is_err());
        assert!(ChamferWeights::new(1.0, -0.5).is_err());
    }
}
