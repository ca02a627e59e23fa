use std::fmt;

use crate::{Axis, Direction, MathError, RayTraceResult, Vector3};

/// Default tolerance for [`AxisAlignedBB::intersects`] and
/// [`AxisAlignedBB::is_cube`].
pub const DEFAULT_EPSILON: f32 = 1.0e-6;

/// Axis-aligned bounding box in f32 world space.
///
/// Invariant: min_x <= max_x, min_y <= max_y, min_z <= max_z. The
/// constructor rejects inverted bounds; the in-place transforms do not
/// re-check, so callers must not shrink a box past zero size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAlignedBB {
    pub min_x: f32,
    pub min_y: f32,
    pub min_z: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub max_z: f32,
}

impl AxisAlignedBB {
    /// Create a box from its bounds.
    ///
    /// # Errors
    /// [`MathError::InvalidBounds`] if min > max on any axis, or if either
    /// bound on an axis is NaN.
    pub fn new(
        min_x: f32,
        min_y: f32,
        min_z: f32,
        max_x: f32,
        max_y: f32,
        max_z: f32,
    ) -> Result<Self, MathError> {
        for (axis, min, max) in [
            (Axis::X, min_x, max_x),
            (Axis::Y, min_y, max_y),
            (Axis::Z, min_z, max_z),
        ] {
            if !(min <= max) {
                tracing::debug!(%axis, min, max, "rejected inverted bounding box");
                return Err(MathError::InvalidBounds { axis, min, max });
            }
        }

        Ok(Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        })
    }

    /// Create a box from its minimum and maximum corners.
    pub fn from_corners(min: Vector3, max: Vector3) -> Result<Self, MathError> {
        Self::new(min.x, min.y, min.z, max.x, max.y, max.z)
    }

    /// A 1x1x1 box starting at grid position 0,0,0.
    pub fn one() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            min_z: 0.0,
            max_x: 1.0,
            max_y: 1.0,
            max_z: 1.0,
        }
    }

    /// The minimum corner.
    pub fn min(&self) -> Vector3 {
        Vector3::new(self.min_x, self.min_y, self.min_z)
    }

    /// The maximum corner.
    pub fn max(&self) -> Vector3 {
        Vector3::new(self.max_x, self.max_y, self.max_z)
    }

    /// Returns a new box grown toward the sign of each component.
    ///
    /// A positive component raises the max bound on that axis, a negative
    /// one lowers the min bound, zero leaves the axis alone. This is the
    /// region swept by the box when moved by (x, y, z).
    pub fn add_coord(&self, x: f32, y: f32, z: f32) -> AxisAlignedBB {
        let mut bb = *self;

        if x < 0.0 {
            bb.min_x += x;
        } else if x > 0.0 {
            bb.max_x += x;
        }

        if y < 0.0 {
            bb.min_y += y;
        } else if y > 0.0 {
            bb.max_y += y;
        }

        if z < 0.0 {
            bb.min_z += z;
        } else if z > 0.0 {
            bb.max_z += z;
        }

        bb
    }

    /// Outsets every face by the given amount on its axis.
    pub fn expand(&mut self, x: f32, y: f32, z: f32) {
        self.min_x -= x;
        self.min_y -= y;
        self.min_z -= z;
        self.max_x += x;
        self.max_y += y;
        self.max_z += z;
    }

    /// Copy of the box with [`expand`](Self::expand) applied.
    pub fn expanded_copy(&self, x: f32, y: f32, z: f32) -> AxisAlignedBB {
        let mut bb = *self;
        bb.expand(x, y, z);
        bb
    }

    /// Shifts the box by (x, y, z).
    pub fn offset(&mut self, x: f32, y: f32, z: f32) {
        self.min_x += x;
        self.min_y += y;
        self.min_z += z;
        self.max_x += x;
        self.max_y += y;
        self.max_z += z;
    }

    /// Copy of the box shifted by (x, y, z).
    pub fn offset_copy(&self, x: f32, y: f32, z: f32) -> AxisAlignedBB {
        let mut bb = *self;
        bb.offset(x, y, z);
        bb
    }

    /// Insets every face by the given amount on its axis.
    pub fn contract(&mut self, x: f32, y: f32, z: f32) {
        self.min_x += x;
        self.min_y += y;
        self.min_z += z;
        self.max_x -= x;
        self.max_y -= y;
        self.max_z -= z;
    }

    /// Copy of the box with [`contract`](Self::contract) applied.
    pub fn contracted_copy(&self, x: f32, y: f32, z: f32) -> AxisAlignedBB {
        let mut bb = *self;
        bb.contract(x, y, z);
        bb
    }

    /// Pushes the single face `face` outward by `distance`.
    pub fn extend(&mut self, face: Direction, distance: f32) {
        match face {
            Direction::Down => self.min_y -= distance,
            Direction::Up => self.max_y += distance,
            Direction::North => self.min_z -= distance,
            Direction::South => self.max_z += distance,
            Direction::West => self.min_x -= distance,
            Direction::East => self.max_x += distance,
        }
    }

    /// Copy of the box with `face` pushed outward by `distance`.
    pub fn extended_copy(&self, face: Direction, distance: f32) -> AxisAlignedBB {
        let mut bb = *self;
        bb.extend(face, distance);
        bb
    }

    /// Pulls the single face `face` inward by `distance`. Inverse of
    /// [`extend`](Self::extend).
    pub fn trim(&mut self, face: Direction, distance: f32) {
        self.extend(face, -distance);
    }

    /// Copy of the box with `face` pulled inward by `distance`.
    pub fn trimmed_copy(&self, face: Direction, distance: f32) -> AxisAlignedBB {
        self.extended_copy(face, -distance)
    }

    /// Grows both faces on `axis` by `distance`.
    pub fn stretch(&mut self, axis: Axis, distance: f32) {
        match axis {
            Axis::X => {
                self.min_x -= distance;
                self.max_x += distance;
            }
            Axis::Y => {
                self.min_y -= distance;
                self.max_y += distance;
            }
            Axis::Z => {
                self.min_z -= distance;
                self.max_z += distance;
            }
        }
    }

    /// Copy of the box with [`stretch`](Self::stretch) applied.
    pub fn stretched_copy(&self, axis: Axis, distance: f32) -> AxisAlignedBB {
        let mut bb = *self;
        bb.stretch(axis, distance);
        bb
    }

    /// Shrinks both faces on `axis` by `distance`. Inverse of
    /// [`stretch`](Self::stretch).
    pub fn squash(&mut self, axis: Axis, distance: f32) {
        self.stretch(axis, -distance);
    }

    /// Copy of the box with [`squash`](Self::squash) applied.
    pub fn squashed_copy(&self, axis: Axis, distance: f32) -> AxisAlignedBB {
        self.stretched_copy(axis, -distance)
    }

    /// Clamps a movement `x` of `bb` along X so it stops at this box.
    ///
    /// `self` is the stationary obstacle and `bb` the moving box. When the
    /// two overlap on Y and Z and `bb` lies entirely on the side it is
    /// moving away from, the returned offset is shortened to the gap between
    /// them. Otherwise `x` is returned unchanged. Feed the result back in
    /// for the next obstacle.
    pub fn calculate_x_offset(&self, bb: &AxisAlignedBB, mut x: f32) -> f32 {
        if bb.max_y <= self.min_y || bb.min_y >= self.max_y {
            return x;
        }
        if bb.max_z <= self.min_z || bb.min_z >= self.max_z {
            return x;
        }

        if x > 0.0 && bb.max_x <= self.min_x {
            let gap = self.min_x - bb.max_x;
            if gap < x {
                x = gap;
            }
        } else if x < 0.0 && bb.min_x >= self.max_x {
            let gap = self.max_x - bb.min_x;
            if gap > x {
                x = gap;
            }
        }

        x
    }

    /// Y counterpart of [`calculate_x_offset`](Self::calculate_x_offset).
    pub fn calculate_y_offset(&self, bb: &AxisAlignedBB, mut y: f32) -> f32 {
        if bb.max_x <= self.min_x || bb.min_x >= self.max_x {
            return y;
        }
        if bb.max_z <= self.min_z || bb.min_z >= self.max_z {
            return y;
        }

        if y > 0.0 && bb.max_y <= self.min_y {
            let gap = self.min_y - bb.max_y;
            if gap < y {
                y = gap;
            }
        } else if y < 0.0 && bb.min_y >= self.max_y {
            let gap = self.max_y - bb.min_y;
            if gap > y {
                y = gap;
            }
        }

        y
    }

    /// Z counterpart of [`calculate_x_offset`](Self::calculate_x_offset).
    pub fn calculate_z_offset(&self, bb: &AxisAlignedBB, mut z: f32) -> f32 {
        if bb.max_x <= self.min_x || bb.min_x >= self.max_x {
            return z;
        }
        if bb.max_y <= self.min_y || bb.min_y >= self.max_y {
            return z;
        }

        if z > 0.0 && bb.max_z <= self.min_z {
            let gap = self.min_z - bb.max_z;
            if gap < z {
                z = gap;
            }
        } else if z < 0.0 && bb.min_z >= self.max_z {
            let gap = self.max_z - bb.min_z;
            if gap > z {
                z = gap;
            }
        }

        z
    }

    /// Returns true if `other` overlaps this box by more than
    /// [`DEFAULT_EPSILON`] on every axis. Touching faces do not count.
    pub fn intersects(&self, other: &AxisAlignedBB) -> bool {
        self.intersects_with_epsilon(other, DEFAULT_EPSILON)
    }

    /// Returns true if `other` overlaps this box by more than `epsilon` on
    /// every axis.
    pub fn intersects_with_epsilon(&self, other: &AxisAlignedBB, epsilon: f32) -> bool {
        other.max_x - self.min_x > epsilon
            && self.max_x - other.min_x > epsilon
            && other.max_y - self.min_y > epsilon
            && self.max_y - other.min_y > epsilon
            && other.max_z - self.min_z > epsilon
            && self.max_z - other.min_z > epsilon
    }

    /// Returns true if the point lies strictly inside the box on all axes.
    pub fn contains_point(&self, v: Vector3) -> bool {
        v.x > self.min_x
            && v.x < self.max_x
            && v.y > self.min_y
            && v.y < self.max_y
            && v.z > self.min_z
            && v.z < self.max_z
    }

    /// Returns true if the point is within the Y and Z bounds, inclusive.
    pub fn is_vector_in_yz(&self, v: Vector3) -> bool {
        v.y >= self.min_y && v.y <= self.max_y && v.z >= self.min_z && v.z <= self.max_z
    }

    /// Returns true if the point is within the X and Z bounds, inclusive.
    pub fn is_vector_in_xz(&self, v: Vector3) -> bool {
        v.x >= self.min_x && v.x <= self.max_x && v.z >= self.min_z && v.z <= self.max_z
    }

    /// Returns true if the point is within the X and Y bounds, inclusive.
    pub fn is_vector_in_xy(&self, v: Vector3) -> bool {
        v.x >= self.min_x && v.x <= self.max_x && v.y >= self.min_y && v.y <= self.max_y
    }

    /// Extent along X.
    pub fn x_length(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Extent along Y.
    pub fn y_length(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Extent along Z.
    pub fn z_length(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// Mean of the three edge lengths.
    pub fn average_edge_length(&self) -> f32 {
        (self.x_length() + self.y_length() + self.z_length()) / 3.0
    }

    /// Interior volume rounded to the nearest integer (ties to even).
    ///
    /// The product is taken in f64 and saturates at `i64::MAX`.
    pub fn volume(&self) -> i64 {
        let product =
            f64::from(self.x_length()) * f64::from(self.y_length()) * f64::from(self.z_length());
        product.round_ties_even() as i64
    }

    /// Returns true if all three edge lengths agree within [`DEFAULT_EPSILON`].
    pub fn is_cube(&self) -> bool {
        self.is_cube_with_epsilon(DEFAULT_EPSILON)
    }

    /// Returns true if all three edge lengths agree within `epsilon`.
    pub fn is_cube_with_epsilon(&self, epsilon: f32) -> bool {
        let x_len = self.x_length();
        let y_len = self.y_length();
        let z_len = self.z_length();
        (x_len - y_len).abs() < epsilon && (y_len - z_len).abs() < epsilon
    }

    /// Finds where the segment `pos1 → pos2` first enters this box.
    ///
    /// Each face plane is crossed with the segment and the crossing kept if
    /// it lies on the face rectangle (edges included). The candidate nearest
    /// `pos1` wins; on equal distance the earlier face in the order West,
    /// East, Down, Up, North, South is kept. Returns `None` if the segment
    /// misses every face.
    pub fn calculate_intercept(&self, pos1: Vector3, pos2: Vector3) -> Option<RayTraceResult<'_>> {
        let candidates = [
            (
                Direction::West,
                pos1.intermediate_with_x_value(pos2, self.min_x)
                    .filter(|v| self.is_vector_in_yz(*v)),
            ),
            (
                Direction::East,
                pos1.intermediate_with_x_value(pos2, self.max_x)
                    .filter(|v| self.is_vector_in_yz(*v)),
            ),
            (
                Direction::Down,
                pos1.intermediate_with_y_value(pos2, self.min_y)
                    .filter(|v| self.is_vector_in_xz(*v)),
            ),
            (
                Direction::Up,
                pos1.intermediate_with_y_value(pos2, self.max_y)
                    .filter(|v| self.is_vector_in_xz(*v)),
            ),
            (
                Direction::North,
                pos1.intermediate_with_z_value(pos2, self.min_z)
                    .filter(|v| self.is_vector_in_xy(*v)),
            ),
            (
                Direction::South,
                pos1.intermediate_with_z_value(pos2, self.max_z)
                    .filter(|v| self.is_vector_in_xy(*v)),
            ),
        ];

        let mut nearest: Option<(Direction, Vector3)> = None;
        let mut distance = f32::MAX;

        for (face, hit) in candidates {
            let Some(hit) = hit else { continue };
            let d = pos1.distance_squared(hit);
            if d < distance {
                nearest = Some((face, hit));
                distance = d;
            }
        }

        match nearest {
            Some((face, hit)) => {
                tracing::trace!(%face, %hit, "ray intercepted bounding box");
                Some(RayTraceResult::new(self, face, hit))
            }
            None => {
                tracing::trace!(%pos1, %pos2, "ray missed bounding box");
                None
            }
        }
    }
}

impl Default for AxisAlignedBB {
    fn default() -> Self {
        Self::one()
    }
}

impl fmt::Display for AxisAlignedBB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AxisAlignedBB(minX={}, minY={}, minZ={}, maxX={}, maxY={}, maxZ={})",
            self.min_x, self.min_y, self.min_z, self.max_x, self.max_y, self.max_z
        )
    }
}

impl From<AxisAlignedBB> for (glam::Vec3, glam::Vec3) {
    fn from(bb: AxisAlignedBB) -> Self {
        (bb.min().into(), bb.max().into())
    }
}
