use tracing::{debug, trace};

use crate::algorithm::geo::EuclideanLength;
use crate::error::{PointArrayError, Result};
use crate::scalar::Point;

/// An owned, contiguous sequence of [`Point`]s, semantically equivalent to `Vec<Point>` but with
/// no spare capacity.
///
/// Every structural change (append, insert, remove, clear) moves the elements into a freshly
/// allocated buffer holding exactly `len()` points. Points passed in are copied, so later changes
/// to the caller's value never reach the stored one.
///
/// Positions past the end are not errors: [`get`](Self::get) returns `None`,
/// [`insert`](Self::insert) appends and [`remove`](Self::remove) does nothing.
///
/// ```
/// use pointarray::{Point, PointArray};
///
/// let mut arr = PointArray::new();
/// arr.append(&Point::new(1, 1));
/// arr.append(&Point::new(2, 2));
/// arr.insert(&Point::new(0, 0), 0);
/// assert_eq!(arr.as_slice(), &[Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]);
///
/// arr.remove(1);
/// assert_eq!(arr.len(), 2);
/// assert!((arr.compute_path() - 8f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PointArray {
    coords: Vec<Point>,
}

impl PointArray {
    /// Creates a new empty [`PointArray`].
    pub fn new() -> Self {
        Self { coords: Vec::new() }
    }

    /// Create a new PointArray holding copies of the first `n` points of `points`, in order.
    ///
    /// # Errors
    /// Returns [`PointArrayError::SourceTooShort`] if `n` exceeds `points.len()`.
    pub fn try_from_slice(points: &[Point], n: usize) -> Result<Self> {
        let source = points.get(..n).ok_or(PointArrayError::SourceTooShort {
            requested: n,
            available: points.len(),
        })?;
        Ok(Self {
            coords: source.to_vec(),
        })
    }

    /// Returns the number of points in this array
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the array holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Access the stored points as a slice.
    pub fn as_slice(&self) -> &[Point] {
        &self.coords
    }

    /// Returns a copy of the point at `pos`, or `None` if `pos >= len()`.
    ///
    /// The returned value is detached from the array.
    pub fn get(&self, pos: usize) -> Option<Point> {
        self.coords.get(pos).copied()
    }

    /// Returns a mutable reference to the stored point at `pos`, or `None` if `pos >= len()`.
    ///
    /// Writes through the reference change the array. The borrow must end before any structural
    /// change to the array.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Point> {
        self.coords.get_mut(pos)
    }

    /// Adds a copy of `pt` to the end of the array.
    pub fn append(&mut self, pt: &Point) {
        let last = self.len();
        self.resize(last + 1);
        self.coords[last] = *pt;
    }

    /// Inserts a copy of `pt` at `pos`, moving the points at `pos..` one slot toward the end.
    ///
    /// A `pos` at or past the end appends.
    pub fn insert(&mut self, pt: &Point, pos: usize) {
        let len = self.len();
        if pos >= len {
            debug!(pos, len, "insert position past the end, appending");
            self.append(pt);
            return;
        }

        self.resize(len + 1);
        self.coords.copy_within(pos..len, pos + 1);
        self.coords[pos] = *pt;
    }

    /// Removes the point at `pos`, moving the points after it one slot toward the start.
    ///
    /// A `pos` at or past the end leaves the array unchanged.
    pub fn remove(&mut self, pos: usize) {
        let len = self.len();
        if pos >= len {
            debug!(pos, len, "remove position past the end, ignoring");
            return;
        }

        self.coords.copy_within(pos + 1..len, pos);
        self.resize(len - 1);
    }

    /// Removes every point and releases the backing storage.
    pub fn clear(&mut self) {
        self.resize(0);
    }

    /// Total length of the path visiting every point in order.
    ///
    /// Zero for arrays of fewer than two points.
    pub fn compute_path(&self) -> f64 {
        self.euclidean_length()
    }

    /// Reallocate the backing storage to hold exactly `n` points.
    ///
    /// The first `min(len, n)` points are kept in order; new trailing slots hold
    /// [`Point::default`] and must be filled by the caller.
    fn resize(&mut self, n: usize) {
        trace!(from = self.len(), to = n, "reallocating point array");
        if n == 0 {
            self.coords = Vec::new();
            return;
        }

        let keep = self.len().min(n);
        let mut coords = Vec::with_capacity(n);
        coords.extend_from_slice(&self.coords[..keep]);
        coords.resize(n, Point::default());
        self.coords = coords;
    }
}

impl From<&[Point]> for PointArray {
    fn from(points: &[Point]) -> Self {
        Self {
            coords: points.to_vec(),
        }
    }
}

impl From<Vec<Point>> for PointArray {
    fn from(mut coords: Vec<Point>) -> Self {
        coords.shrink_to_fit();
        Self { coords }
    }
}

impl From<PointArray> for Vec<Point> {
    fn from(value: PointArray) -> Self {
        value.coords
    }
}
