//! Planar measurements and transformations, mirroring the names of the georust/geo traits.

/// Calculate the length of the path through a sequence of points.
pub mod euclidean_length;
pub use euclidean_length::EuclideanLength;

/// Translate a geometry along its axes.
pub mod translate;
pub use translate::Translate;
