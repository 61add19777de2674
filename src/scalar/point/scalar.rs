use crate::geo_traits::PointTrait;

/// A point on the integer plane.
///
/// `Point` is a plain value: it is [`Copy`], has no identity beyond its coordinates and the
/// default point is the origin.
///
/// ```
/// use pointarray::Point;
///
/// let mut p = Point::new(1, 2);
/// p.shift(2, 2);
/// assert_eq!(p, Point::new(3, 4));
/// assert_eq!(p.dist(&Point::default()), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Create a new point from its coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// x component of this point
    pub fn x(&self) -> i32 {
        self.x
    }

    /// y component of this point
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Overwrite the x component
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    /// Overwrite the y component
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Translate this point in place by `(dx, dy)`.
    ///
    /// Coordinates wrap around on overflow.
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    /// Translate this point in place by `d` along both axes.
    pub fn shift_uniform(&mut self, d: i32) {
        self.shift(d, d);
    }

    /// Translate this point in place by the coordinates of `offset`.
    ///
    /// `offset` is treated as a vector, so `shift_by(&q)` is `shift(q.x(), q.y())`.
    pub fn shift_by(&mut self, offset: &impl PointTrait<T = i32>) {
        let (dx, dy) = offset.x_y();
        self.shift(dx, dy);
    }

    /// Euclidean distance to `other`.
    ///
    /// Differences are taken in `f64`, so points at opposite ends of the `i32` range do not
    /// overflow.
    pub fn dist(&self, other: &Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::EuclideanDistance;

    #[test]
    fn default_is_origin() {
        let p = Point::default();
        assert_eq!((p.x(), p.y()), (0, 0));
    }

    #[test]
    fn setters_overwrite() {
        let mut p = Point::new(1, 2);
        p.set_x(-5);
        p.set_y(9);
        assert_eq!(p, Point::new(-5, 9));
    }

    #[test]
    fn shift_variants() {
        let mut p = Point::new(1, 1);
        p.shift(2, -3);
        assert_eq!(p, Point::new(3, -2));

        p.shift_uniform(4);
        assert_eq!(p, Point::new(7, 2));

        p.shift_by(&Point::new(-7, 10));
        assert_eq!(p, Point::new(0, 12));

        p.shift_by(&geo::coord! { x: 1, y: 1 });
        assert_eq!(p, Point::new(1, 13));
    }

    #[test]
    fn shift_by_does_not_touch_offset() {
        let offset = Point::new(2, 3);
        let mut p = Point::new(0, 0);
        p.shift_by(&offset);
        assert_eq!(offset, Point::new(2, 3));
    }

    #[test]
    fn shift_wraps_on_overflow() {
        let mut p = Point::new(i32::MAX, i32::MIN);
        p.shift(1, -1);
        assert_eq!(p, Point::new(i32::MIN, i32::MAX));

        p.shift_uniform(-1);
        assert_eq!(p, Point::new(i32::MAX, i32::MAX - 1));
    }

    #[test]
    fn dist_basic() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.dist(&b), 5.0);
        assert_eq!(b.dist(&a), 5.0);
        assert_eq!(a.dist(&a), 0.0);
        assert!(a.dist(&Point::new(0, 1)) > 0.0);
    }

    #[test]
    fn dist_extremes_do_not_overflow() {
        let a = Point::new(i32::MIN, 0);
        let b = Point::new(i32::MAX, 0);
        assert_relative_eq!(a.dist(&b), u32::MAX as f64);
    }

    #[test]
    fn dist_matches_geo() {
        let a = Point::new(-3, 7);
        let b = Point::new(12, -1);
        let expected =
            geo::Point::new(-3.0_f64, 7.0).euclidean_distance(&geo::Point::new(12.0, -1.0));
        assert_relative_eq!(a.dist(&b), expected);
    }
}
