//! A 2D integer [`Point`] and [`PointArray`], an exactly-sized, order-preserving sequence of
//! points with positional insertion and removal, plus path-length computation over it.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use array::PointArray;
pub use error::{PointArrayError, Result};
pub use geo_traits::PointTrait;
pub use scalar::Point;

pub mod algorithm;
pub mod array;
pub mod error;
pub mod geo_traits;
pub mod io;
pub mod scalar;
