use super::point::{Point, PointList};
use crate::error::{BoundBoxError, Result};

/// Axis-aligned box given by its (min, max) corners
///
/// `min` is component-wise less than or equal to `max`. Zero width or height
/// is valid, e.g. for a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Fits the tightest box around `points`
    ///
    /// Each axis is scanned independently; `points` is not reordered.
    pub fn fit(points: &[Point]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or(BoundBoxError::EmptyInput { stage: "box fit" })?;

        let mut min = *first;
        let mut max = *first;
        for pt in rest {
            for j in 0..2 {
                if pt.0[j] < min.0[j] {
                    min.0[j] = pt.0[j];
                }
                if pt.0[j] > max.0[j] {
                    max.0[j] = pt.0[j];
                }
            }
        }

        Ok(BoundingBox { min, max })
    }

    /// Expands (factor > 1) or contracts (factor < 1) the box about its center
    ///
    /// Each half-extent is multiplied by `factor`, so 1 returns the same box.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        validate_scale_factor(factor)?;

        let mut min = self.min;
        let mut max = self.max;
        for j in 0..2 {
            let grow = (factor - 1.0) * ((self.max.0[j] - self.min.0[j]) / 2.0);
            min.0[j] -= grow;
            max.0[j] += grow;
        }

        Ok(BoundingBox { min, max })
    }

    /// Checks if `pt` lies inside the box, borders included
    pub fn contains(&self, pt: &Point) -> bool {
        pt.greater_eq(&self.min) && pt.less_eq(&self.max)
    }

    /// Checks if `other` lies entirely inside this box
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.min.greater_eq(&self.min) && other.max.less_eq(&self.max)
    }

    pub fn center(&self) -> Point {
        Point([
            (self.min.x() + self.max.x()) / 2.0,
            (self.min.y() + self.max.y()) / 2.0,
        ])
    }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }
}

impl From<BoundingBox> for [[f64; 2]; 2] {
    /// `[min_corner, max_corner]`
    fn from(bbox: BoundingBox) -> Self {
        [bbox.min.0, bbox.max.0]
    }
}

/// Checks that a box scale factor is positive
pub fn validate_scale_factor(factor: f64) -> Result<()> {
    if factor.is_nan() || factor <= 0.0 {
        return Err(BoundBoxError::InvalidParameter {
            name: "scale factor",
            value: factor,
            expected: "must be positive",
        });
    }
    Ok(())
}

/// Returns the points lying inside `bbox` (borders included), in input order
pub fn filter_points(points: &[Point], bbox: &BoundingBox) -> PointList {
    points.iter().filter(|pt| bbox.contains(pt)).copied().collect()
}
