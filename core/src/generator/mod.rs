use crate::*;
use serde::{Deserialize, Serialize};

pub use random::*;

mod random;

pub trait CardGenerator {
    fn generate(self, config: &BoardConfig) -> Result<CardLayout>;
}

/// How the target kind is seeded into the grid. Either way the target may
/// also show up by chance in unreserved cells; placement only guarantees a
/// minimum.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TargetPlacement {
    /// One cell is always reserved for the target.
    Guaranteed,
    /// A cell is reserved with this probability, otherwise the fill is
    /// entirely random.
    Probabilistic(f32),
}
