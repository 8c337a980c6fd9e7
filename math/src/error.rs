use thiserror::Error;

use crate::hcm::Vec3;

/// Errors raised by geometric computations that have no meaningful result.
#[derive(Debug, Clone, Copy, Error)]
pub enum GeometryError {
    /// Normalizing a vector whose length is zero, NaN or infinite.
    #[error("cannot normalize degenerate vector {0}")]
    DegenerateVector(Vec3),
}
