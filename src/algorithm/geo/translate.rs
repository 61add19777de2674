use crate::array::PointArray;
use crate::scalar::Point;

pub trait Translate {
    /// Translate a Geometry along its axes by the given offsets, returning a new value
    ///
    /// # Examples
    ///
    /// ```
    /// use pointarray::algorithm::geo::Translate;
    /// use pointarray::{Point, PointArray};
    ///
    /// let arr: PointArray = vec![Point::new(0, 0), Point::new(5, 5)].into();
    /// let translated = arr.translate(1, -2);
    ///
    /// assert_eq!(translated.as_slice(), &[Point::new(1, -2), Point::new(6, 3)]);
    /// assert_eq!(arr.get(0), Some(Point::new(0, 0)));
    /// ```
    #[must_use]
    fn translate(&self, x_offset: i32, y_offset: i32) -> Self;
}

impl Translate for Point {
    fn translate(&self, x_offset: i32, y_offset: i32) -> Self {
        let mut out = *self;
        out.shift(x_offset, y_offset);
        out
    }
}

impl Translate for PointArray {
    fn translate(&self, x_offset: i32, y_offset: i32) -> Self {
        let output_geoms: Vec<Point> = self
            .as_slice()
            .iter()
            .map(|geom| geom.translate(x_offset, y_offset))
            .collect();

        output_geoms.into()
    }
}
