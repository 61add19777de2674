use itertools::Itertools;

use crate::array::PointArray;
use crate::scalar::Point;

pub trait EuclideanLength {
    /// Total length of the path visiting each point in order
    ///
    /// # Examples
    ///
    /// ```
    /// use pointarray::algorithm::geo::EuclideanLength;
    /// use pointarray::{Point, PointArray};
    ///
    /// let arr: PointArray = vec![Point::new(0, 0), Point::new(3, 4), Point::new(3, 0)].into();
    ///
    /// assert_eq!(9., arr.euclidean_length());
    /// ```
    fn euclidean_length(&self) -> f64;
}

impl EuclideanLength for [Point] {
    fn euclidean_length(&self) -> f64 {
        self.iter()
            .tuple_windows()
            .map(|(prev, next)| prev.dist(next))
            .sum()
    }
}

impl EuclideanLength for PointArray {
    fn euclidean_length(&self) -> f64 {
        self.as_slice().euclidean_length()
    }
}
