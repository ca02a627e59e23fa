//! Geometry error types.

use crate::{Axis, Direction};

/// Precondition violations rejected by the geometry kernel.
///
/// Degenerate geometry (parallel segments, missed rays) is not an error and
/// is reported as `None` by the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// A bounding box was constructed with min greater than max on an axis.
    #[error("min{axis} {min} is larger than max{axis} {max}")]
    InvalidBounds {
        /// Axis on which the bounds are inverted.
        axis: Axis,
        /// Requested minimum.
        min: f32,
        /// Requested maximum.
        max: f32,
    },

    /// An integer code does not name an axis.
    #[error("invalid axis code: {0}")]
    InvalidAxis(u8),

    /// An integer code does not name a direction.
    #[error("invalid direction code: {0}")]
    InvalidDirection(u8),

    /// A direction was rotated about the axis it lies on.
    #[error("cannot rotate {direction} about its own axis {axis}")]
    RotationOnOwnAxis {
        /// The direction being rotated.
        direction: Direction,
        /// The rotation axis.
        axis: Axis,
    },
}
