use geo::{Distance, Haversine, LineString, Point};
use itertools::Itertools;

/// Geographic tolerance, in degrees per axis, within which a shape
/// point and a node position are considered the same place (~1m).
pub const COORDINATE_TOLERANCE: f64 = 1e-5;

/// Whether two positions coincide within [`COORDINATE_TOLERANCE`].
#[inline]
pub fn approx_equal(a: &Point<f64>, b: &Point<f64>) -> bool {
    (a.x() - b.x()).abs() < COORDINATE_TOLERANCE && (a.y() - b.y()).abs() < COORDINATE_TOLERANCE
}

/// The trusted route geometry: an ordered point sequence paired with
/// the parallel array of consecutive point-to-point distances.
///
/// `distances[0]` is zero; `distances[i]` is the Haversine distance in
/// metres from point `i - 1` to point `i`. Both arrays always share a
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    points: Vec<Point<f64>>,
    distances: Vec<f64>,
}

impl Shape {
    pub fn new(points: Vec<Point<f64>>) -> Self {
        let distances = match points.is_empty() {
            true => Vec::new(),
            false => std::iter::once(0.0)
                .chain(
                    points
                        .iter()
                        .tuple_windows()
                        .map(|(a, b)| Haversine.distance(*a, *b)),
                )
                .collect(),
        };

        Shape { points, distances }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`. Panics out of bounds, callers stay within
    /// `len()`.
    #[inline]
    pub fn point(&self, index: usize) -> &Point<f64> {
        &self.points[index]
    }

    /// Distance from point `index - 1` to point `index` in metres.
    #[inline]
    pub fn distance(&self, index: usize) -> f64 {
        self.distances[index]
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }
}

impl From<LineString<f64>> for Shape {
    fn from(linestring: LineString<f64>) -> Self {
        Shape::new(linestring.into_points())
    }
}

impl FromIterator<Point<f64>> for Shape {
    fn from_iter<T: IntoIterator<Item = Point<f64>>>(iter: T) -> Self {
        Shape::new(iter.into_iter().collect())
    }
}
