use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Axis, Direction};

/// Absolute segment extent along an axis below which the segment is treated
/// as parallel to the plane it is being intersected with.
pub const PARALLEL_THRESHOLD: f32 = 1.0e-7;

/// 3D point or displacement in f32 world space.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Create a new Vector3 with the given coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector (0, 0, 0).
    pub fn zero() -> Self {
        Self::default()
    }

    /// X coordinate floored toward negative infinity.
    pub fn floor_x(self) -> i32 {
        self.x.floor() as i32
    }

    /// Y coordinate floored toward negative infinity.
    pub fn floor_y(self) -> i32 {
        self.y.floor() as i32
    }

    /// Z coordinate floored toward negative infinity.
    pub fn floor_z(self) -> i32 {
        self.z.floor() as i32
    }

    /// Reads the coordinate on `axis`.
    pub fn component(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    fn with_component(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    pub fn add(self, x: f32, y: f32, z: f32) -> Vector3 {
        Vector3::new(self.x + x, self.y + y, self.z + z)
    }

    pub fn subtract(self, x: f32, y: f32, z: f32) -> Vector3 {
        Vector3::new(self.x - x, self.y - y, self.z - z)
    }

    pub fn multiply(self, s: f32) -> Vector3 {
        self * s
    }

    pub fn divide(self, s: f32) -> Vector3 {
        self / s
    }

    pub fn ceil(self) -> Vector3 {
        Vector3::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    pub fn floor(self) -> Vector3 {
        Vector3::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Rounds each component to `precision` decimal places, ties to even.
    pub fn round(self, precision: i32) -> Vector3 {
        let scale = 10.0_f32.powi(precision);
        let round = |v: f32| (v * scale).round_ties_even() / scale;
        Vector3::new(round(self.x), round(self.y), round(self.z))
    }

    pub fn abs(self) -> Vector3 {
        Vector3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns this position moved `step` units toward `side`.
    pub fn get_side(self, side: Direction, step: i32) -> Vector3 {
        let step = step as f32;
        match side {
            Direction::Down => Vector3::new(self.x, self.y - step, self.z),
            Direction::Up => Vector3::new(self.x, self.y + step, self.z),
            Direction::North => Vector3::new(self.x, self.y, self.z - step),
            Direction::South => Vector3::new(self.x, self.y, self.z + step),
            Direction::West => Vector3::new(self.x - step, self.y, self.z),
            Direction::East => Vector3::new(self.x + step, self.y, self.z),
        }
    }

    pub fn down(self, step: i32) -> Vector3 {
        self.get_side(Direction::Down, step)
    }

    pub fn up(self, step: i32) -> Vector3 {
        self.get_side(Direction::Up, step)
    }

    pub fn north(self, step: i32) -> Vector3 {
        self.get_side(Direction::North, step)
    }

    pub fn south(self, step: i32) -> Vector3 {
        self.get_side(Direction::South, step)
    }

    pub fn west(self, step: i32) -> Vector3 {
        self.get_side(Direction::West, step)
    }

    pub fn east(self, step: i32) -> Vector3 {
        self.get_side(Direction::East, step)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vector3) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Vector3) -> f32 {
        (self - other).length_squared()
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns x² + y² + z².
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// length is zero.
    pub fn normalize(self) -> Vector3 {
        let len = self.length();
        if len > 0.0 { self / len } else { Vector3::zero() }
    }

    /// Returns the dot product: x₁x₂ + y₁y₂ + z₁z₂
    pub fn dot(self, rhs: Vector3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Returns the cross product self × rhs.
    pub fn cross(self, rhs: Vector3) -> Vector3 {
        Vector3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Component-wise minimum of `a` and every vector in `others`.
    pub fn min_components(a: Vector3, others: impl IntoIterator<Item = Vector3>) -> Vector3 {
        others.into_iter().fold(a, |acc, v| {
            Vector3::new(acc.x.min(v.x), acc.y.min(v.y), acc.z.min(v.z))
        })
    }

    /// Component-wise maximum of `a` and every vector in `others`.
    pub fn max_components(a: Vector3, others: impl IntoIterator<Item = Vector3>) -> Vector3 {
        others.into_iter().fold(a, |acc, v| {
            Vector3::new(acc.x.max(v.x), acc.y.max(v.y), acc.z.max(v.z))
        })
    }

    /// Sum of `a` and every vector in `others`.
    pub fn sum(a: Vector3, others: impl IntoIterator<Item = Vector3>) -> Vector3 {
        others.into_iter().fold(a, |acc, v| acc + v)
    }

    /// Point on the segment `self → other` whose X coordinate is `x`.
    ///
    /// Returns `None` if the segment is parallel to the plane or the
    /// crossing lies beyond either endpoint.
    pub fn intermediate_with_x_value(self, other: Vector3, x: f32) -> Option<Vector3> {
        self.intermediate_with_value(other, Axis::X, x)
    }

    /// Point on the segment `self → other` whose Y coordinate is `y`.
    pub fn intermediate_with_y_value(self, other: Vector3, y: f32) -> Option<Vector3> {
        self.intermediate_with_value(other, Axis::Y, y)
    }

    /// Point on the segment `self → other` whose Z coordinate is `z`.
    pub fn intermediate_with_z_value(self, other: Vector3, z: f32) -> Option<Vector3> {
        self.intermediate_with_value(other, Axis::Z, z)
    }

    /// Parametric segment/plane crossing on `axis`.
    ///
    /// f = (target - self[axis]) / (other[axis] - self[axis]), accepted in
    /// [0, 1]. The remaining coordinates are interpolated by f and the
    /// crossing coordinate is set to `target` exactly.
    pub fn intermediate_with_value(self, other: Vector3, axis: Axis, target: f32) -> Option<Vector3> {
        let start = self.component(axis);
        let delta = other.component(axis) - start;
        if delta.abs() < PARALLEL_THRESHOLD {
            return None;
        }

        let f = (target - start) / delta;
        if !(0.0..=1.0).contains(&f) {
            return None;
        }

        Some((self + (other - self) * f).with_component(axis, target))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<f32> for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<f32> for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// 2D vector in f32 space, used for face-local and horizontal coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// Create a new Vector2 with the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector (0, 0).
    pub fn zero() -> Self {
        Self::default()
    }

    /// X rounded toward negative infinity.
    pub fn floor_x(self) -> i32 {
        self.x.floor() as i32
    }

    /// Y rounded toward negative infinity.
    pub fn floor_y(self) -> i32 {
        self.y.floor() as i32
    }

    /// Component-wise offset by `(x, y)`.
    pub fn add(self, x: f32, y: f32) -> Vector2 {
        Vector2::new(self.x + x, self.y + y)
    }

    /// Component-wise offset by `(-x, -y)`.
    pub fn subtract(self, x: f32, y: f32) -> Vector2 {
        Vector2::new(self.x - x, self.y - y)
    }

    /// Scales both components by `s`.
    pub fn multiply(self, s: f32) -> Vector2 {
        self * s
    }

    /// Divides both components by `s`.
    pub fn divide(self, s: f32) -> Vector2 {
        self / s
    }

    /// Rounds each component up.
    pub fn ceil(self) -> Vector2 {
        Vector2::new(self.x.ceil(), self.y.ceil())
    }

    /// Rounds each component down.
    pub fn floor(self) -> Vector2 {
        Vector2::new(self.x.floor(), self.y.floor())
    }

    /// Rounds each component to a whole number, ties to even.
    pub fn round(self) -> Vector2 {
        Vector2::new(self.x.round_ties_even(), self.y.round_ties_even())
    }

    /// Absolute value of each component.
    pub fn abs(self) -> Vector2 {
        Vector2::new(self.x.abs(), self.y.abs())
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vector2) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Vector2) -> f32 {
        (self - other).length_squared()
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length, x² + y².
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction, or zero when the length is zero.
    pub fn normalize(self) -> Vector2 {
        let len = self.length();
        if len > 0.0 { self / len } else { Vector2::zero() }
    }

    /// Returns the 2D dot product: x₁x₂ + y₁y₂
    pub fn dot(self, rhs: Vector2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Component-wise minimum of `a` and every vector in `others`.
    pub fn min_components(a: Vector2, others: impl IntoIterator<Item = Vector2>) -> Vector2 {
        others
            .into_iter()
            .fold(a, |acc, v| Vector2::new(acc.x.min(v.x), acc.y.min(v.y)))
    }

    /// Component-wise maximum of `a` and every vector in `others`.
    pub fn max_components(a: Vector2, others: impl IntoIterator<Item = Vector2>) -> Vector2 {
        others
            .into_iter()
            .fold(a, |acc, v| Vector2::new(acc.x.max(v.x), acc.y.max(v.y)))
    }

    /// Sum of `a` and every vector in `others`.
    pub fn sum(a: Vector2, others: impl IntoIterator<Item = Vector2>) -> Vector2 {
        others.into_iter().fold(a, |acc, v| acc + v)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2(x={}, y={})", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<f32> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x + rhs, self.y + rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<f32> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x - rhs, self.y - rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vector2::new(x, y)
    }
}
