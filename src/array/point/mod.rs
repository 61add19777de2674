//! Contains the [`PointArray`] for ordered sequences of Point geometries.

pub use array::PointArray;

mod array;
