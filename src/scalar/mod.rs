//! Contains the scalar [`Point`], the element type stored by a
//! [`PointArray`](crate::array::PointArray).

pub use point::Point;

pub mod point;
