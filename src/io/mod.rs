//! Conversions between this crate's types and other geometry representations.

pub mod geo;
