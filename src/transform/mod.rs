mod chamfer;
mod distance_map;
mod weights;

pub use chamfer::ChamferTransform;
pub use distance_map::DistanceMap;
pub use weights::ChamferWeights;
