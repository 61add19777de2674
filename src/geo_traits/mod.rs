//! Read-only accessor traits, so that operations taking "another point" accept the crate's own
//! [`Point`](crate::Point) as well as [`geo`] types.

pub use point::PointTrait;

mod point;
