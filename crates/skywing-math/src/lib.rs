//! f32 vectors, face/axis enumerations, and axis-aligned bounding boxes with
//! swept-collision and ray-intercept queries for the SkyWing engine.

mod aabb;
mod error;
mod facing;
mod ray_trace;
mod vector;

pub use aabb::{AxisAlignedBB, DEFAULT_EPSILON};
pub use error::MathError;
pub use facing::{Axis, Direction};
pub use ray_trace::RayTraceResult;
pub use vector::{PARALLEL_THRESHOLD, Vector2, Vector3};
