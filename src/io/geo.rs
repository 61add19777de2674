//! Conversions to and from [`geo`] types.

use geo::CoordNum;

use crate::array::PointArray;
use crate::geo_traits::PointTrait;
use crate::scalar::Point;

/// Convert any point to a [`geo::Coord`].
pub fn coord_to_geo<T: CoordNum>(point: &impl PointTrait<T = T>) -> geo::Coord<T> {
    geo::Coord {
        x: point.x(),
        y: point.y(),
    }
}

/// Convert any point to a [`geo::Point`].
pub fn point_to_geo<T: CoordNum>(point: &impl PointTrait<T = T>) -> geo::Point<T> {
    geo::Point(coord_to_geo(point))
}

/// Convert any integer point to a [`Point`].
pub fn point_from_geo(point: &impl PointTrait<T = i32>) -> Point {
    Point::new(point.x(), point.y())
}

impl From<Point> for geo::Point<i32> {
    fn from(value: Point) -> Self {
        point_to_geo(&value)
    }
}

impl From<Point> for geo::Coord<i32> {
    fn from(value: Point) -> Self {
        coord_to_geo(&value)
    }
}

impl From<geo::Point<i32>> for Point {
    fn from(value: geo::Point<i32>) -> Self {
        point_from_geo(&value)
    }
}

impl From<geo::Coord<i32>> for Point {
    fn from(value: geo::Coord<i32>) -> Self {
        point_from_geo(&value)
    }
}

impl From<Vec<geo::Point<i32>>> for PointArray {
    fn from(geoms: Vec<geo::Point<i32>>) -> Self {
        let points: Vec<Point> = geoms.iter().map(point_from_geo).collect();
        points.into()
    }
}

impl From<&PointArray> for geo::LineString<i32> {
    fn from(value: &PointArray) -> Self {
        geo::LineString::new(value.as_slice().iter().map(coord_to_geo).collect())
    }
}

impl From<&PointArray> for geo::MultiPoint<i32> {
    fn from(value: &PointArray) -> Self {
        geo::MultiPoint::new(value.as_slice().iter().map(point_to_geo).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::{p0, p1, p2, point_array};

    #[test]
    fn point_round_trip_through_geo() {
        let geo_point: geo::Point<i32> = p1().into();
        assert_eq!(geo_point, geo::point!(x: 1, y: 2));
        assert_eq!(Point::from(geo_point), p1());

        let coord: geo::Coord<i32> = p2().into();
        assert_eq!(Point::from(coord), p2());
    }

    #[test]
    fn array_from_geo_points() {
        let arr: PointArray = vec![geo::point!(x: 0, y: 1), geo::point!(x: 2, y: 3)].into();
        assert_eq!(arr.as_slice(), &[p0(), p2()]);
    }

    #[test]
    fn array_to_line_string() {
        let line_string: geo::LineString<i32> = (&point_array()).into();
        let coords: Vec<_> = line_string.coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn array_to_multi_point() {
        let multi_point: geo::MultiPoint<i32> = (&point_array()).into();
        assert_eq!(multi_point.0.len(), 3);
        assert_eq!(multi_point.0[2], geo::point!(x: 2, y: 3));
    }
}
