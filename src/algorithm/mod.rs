//! Algorithms implemented on points and point arrays.

pub mod geo;
