/// Point is a planar coordinate
///
/// The point is stored as [x, y] where:
/// - `[0]` is x
/// - `[1]` is y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub [f64; 2]);

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Bit-exact coordinate identity of a point, usable as a hash key
///
/// Two points share a key only if both coordinates have identical bit patterns,
/// so `0.0` and `-0.0` are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey([u64; 2]);

impl Point {
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Returns Euclidean distance between two points
    pub fn dist(&self, b: &Point) -> f64 {
        self.sq_dist(b).sqrt()
    }

    /// Returns squared Euclidean distance between two points
    pub fn sq_dist(&self, b: &Point) -> f64 {
        let dx = self.0[0] - b.0[0];
        let dy = self.0[1] - b.0[1];
        dx * dx + dy * dy
    }

    pub fn key(&self) -> PointKey {
        PointKey([self.0[0].to_bits(), self.0[1].to_bits()])
    }

    /// Checks if this point is less than or equal to another point
    /// on both axes (a <= b)
    pub fn less_eq(&self, b: &Point) -> bool {
        self.0[0] <= b.0[0] && self.0[1] <= b.0[1]
    }

    /// Checks if this point is greater than or equal to another point
    /// on both axes (a >= b)
    pub fn greater_eq(&self, b: &Point) -> bool {
        self.0[0] >= b.0[0] && self.0[1] >= b.0[1]
    }
}

impl From<[f64; 2]> for Point {
    fn from(xy: [f64; 2]) -> Self {
        Point(xy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point([x, y])
    }
}
