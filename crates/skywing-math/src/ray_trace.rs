//! Ray-cast hit records.

use crate::{AxisAlignedBB, Direction, Vector3};

/// The first surface hit of a segment against a bounding box.
///
/// Produced by [`AxisAlignedBB::calculate_intercept`]; borrows the box it
/// was computed against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayTraceResult<'a> {
    /// The box that was hit.
    pub bb: &'a AxisAlignedBB,
    /// The face the segment entered through.
    pub hit_face: Direction,
    /// The point on `hit_face` where the segment crossed it.
    pub hit_vector: Vector3,
}

impl<'a> RayTraceResult<'a> {
    /// Hit on `hit_face` of `bb` at `hit_vector`.
    pub fn new(bb: &'a AxisAlignedBB, hit_face: Direction, hit_vector: Vector3) -> Self {
        Self {
            bb,
            hit_face,
            hit_vector,
        }
    }

    /// Outward unit normal of the hit face.
    pub fn normal(&self) -> Vector3 {
        self.hit_face.offset()
    }
}
