//! Geometric Primitives and Operations

pub mod point;
pub mod segment;
pub mod utilities;

// Re-export commonly used items
pub use point::{angle_between, approx_eq, handle, pt, rotate_about, signed_angle};
pub use segment::Segment;
pub use utilities::{intersections, nearest_point};
