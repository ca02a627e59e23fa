//! Spatial axes and the six block-face directions.

use std::fmt;

use crate::{MathError, Vector3};

/// One of the three spatial axes.
///
/// The integer codes are non-sequential (Y=0, Z=1, X=2) and are part of the
/// [`Direction`] code layout.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Y = 0,
    Z = 1,
    X = 2,
}

impl Axis {
    /// All axes in code order.
    pub const ALL: [Axis; 3] = [Axis::Y, Axis::Z, Axis::X];

    /// Integer code of this axis.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up an axis by its integer code.
    pub fn from_code(code: u8) -> Result<Axis, MathError> {
        match code {
            0 => Ok(Axis::Y),
            1 => Ok(Axis::Z),
            2 => Ok(Axis::X),
            _ => Err(MathError::InvalidAxis(code)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// A face of a block or bounding box.
///
/// Up, South and East are the positive members of their axis pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

/// Per-variant facts: (axis, positive, opposite).
struct FaceInfo {
    axis: Axis,
    positive: bool,
    opposite: Direction,
}

const fn info(direction: Direction) -> FaceInfo {
    match direction {
        Direction::Down => FaceInfo {
            axis: Axis::Y,
            positive: false,
            opposite: Direction::Up,
        },
        Direction::Up => FaceInfo {
            axis: Axis::Y,
            positive: true,
            opposite: Direction::Down,
        },
        Direction::North => FaceInfo {
            axis: Axis::Z,
            positive: false,
            opposite: Direction::South,
        },
        Direction::South => FaceInfo {
            axis: Axis::Z,
            positive: true,
            opposite: Direction::North,
        },
        Direction::West => FaceInfo {
            axis: Axis::X,
            positive: false,
            opposite: Direction::East,
        },
        Direction::East => FaceInfo {
            axis: Axis::X,
            positive: true,
            opposite: Direction::West,
        },
    }
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The axis this face is perpendicular to.
    pub fn axis(self) -> Axis {
        info(self).axis
    }

    /// Returns true for Up, South and East.
    pub fn is_positive(self) -> bool {
        info(self).positive
    }

    /// The face on the other side of the same axis.
    pub fn opposite(self) -> Direction {
        info(self).opposite
    }

    /// The face on `axis` with the given sign.
    pub fn from_axis(axis: Axis, positive: bool) -> Direction {
        match (axis, positive) {
            (Axis::Y, false) => Direction::Down,
            (Axis::Y, true) => Direction::Up,
            (Axis::Z, false) => Direction::North,
            (Axis::Z, true) => Direction::South,
            (Axis::X, false) => Direction::West,
            (Axis::X, true) => Direction::East,
        }
    }

    /// Packed code: `(axis_code << 1) | sign_bit`.
    pub fn code(self) -> u8 {
        (self.axis().code() << 1) | u8::from(self.is_positive())
    }

    /// Unpacks a direction from its code.
    pub fn from_code(code: u8) -> Result<Direction, MathError> {
        let axis = Axis::from_code(code >> 1).map_err(|_| MathError::InvalidDirection(code))?;
        Ok(Direction::from_axis(axis, code & 1 == 1))
    }

    /// Unit step in this direction.
    pub fn offset(self) -> Vector3 {
        Vector3::zero().get_side(self, 1)
    }

    /// Rotates this face a quarter turn about `axis`.
    ///
    /// Counter-clockwise rotation is the opposite of the clockwise result.
    /// Fails when the face lies on the rotation axis.
    pub fn rotate(self, axis: Axis, clockwise: bool) -> Result<Direction, MathError> {
        use Direction::*;

        let rotated = match (axis, self) {
            (Axis::X, Up) => North,
            (Axis::X, North) => Down,
            (Axis::X, Down) => South,
            (Axis::X, South) => Up,

            (Axis::Y, North) => East,
            (Axis::Y, East) => South,
            (Axis::Y, South) => West,
            (Axis::Y, West) => North,

            (Axis::Z, Up) => East,
            (Axis::Z, East) => Down,
            (Axis::Z, Down) => West,
            (Axis::Z, West) => Up,

            _ => {
                return Err(MathError::RotationOnOwnAxis {
                    direction: self,
                    axis,
                });
            }
        };

        Ok(if clockwise {
            rotated
        } else {
            rotated.opposite()
        })
    }

    /// Quarter turn about X. See [`rotate`](Self::rotate).
    pub fn rotate_x(self, clockwise: bool) -> Result<Direction, MathError> {
        self.rotate(Axis::X, clockwise)
    }

    /// Quarter turn about Y. See [`rotate`](Self::rotate).
    pub fn rotate_y(self, clockwise: bool) -> Result<Direction, MathError> {
        self.rotate(Axis::Y, clockwise)
    }

    /// Quarter turn about Z. See [`rotate`](Self::rotate).
    pub fn rotate_z(self, clockwise: bool) -> Result<Direction, MathError> {
        self.rotate(Axis::Z, clockwise)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        f.write_str(name)
    }
}
