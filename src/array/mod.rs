//! Contains [`PointArray`], an exactly-sized, order-preserving sequence of points.

pub use point::PointArray;

pub mod point;
