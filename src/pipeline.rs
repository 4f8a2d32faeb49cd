//! Robust bounding box: cluster, fit, expand, re-admit, fit again

use crate::cluster::{
    BoundingBox, Point, cluster_filter, complete_graph, filter_points, validate_cutoff,
    validate_scale_factor,
};
use crate::error::{BoundBoxError, Result};

/// Expansion applied to the cluster box before re-admitting points
pub const DEFAULT_SCALE_FACTOR: f64 = 2.0;

/// Cutoff used by `BoundBoxPipeline::default()`
pub const DEFAULT_CUTOFF: f64 = 0.9;

/// Parameters of one bounding box computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundBoxPipeline {
    /// Fraction of all points the dominant cluster must reach, in `[0, 1]`
    pub cutoff: f64,
    /// Linear expansion of the cluster box, must be positive
    pub scale_factor: f64,
}

impl Default for BoundBoxPipeline {
    fn default() -> Self {
        BoundBoxPipeline::new(DEFAULT_CUTOFF)
    }
}

impl BoundBoxPipeline {
    pub fn new(cutoff: f64) -> Self {
        BoundBoxPipeline {
            cutoff,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Computes the outlier-resistant bounding box of `points`
    ///
    /// 1. build the complete graph over `points`
    /// 2. keep the dominant MST cluster for `cutoff`
    /// 3. fit a box to it and expand it by `scale_factor`
    /// 4. re-admit every input point inside the expanded box
    /// 5. fit the final box to the re-admitted points
    ///
    /// Parameters are checked before any work is done.
    pub fn run(&self, points: &[Point]) -> Result<BoundingBox> {
        validate_cutoff(self.cutoff)?;
        validate_scale_factor(self.scale_factor)?;
        if points.is_empty() {
            return Err(BoundBoxError::EmptyInput { stage: "input" });
        }

        log::debug!(
            "bounding {} points with cutoff={:.3}, scale factor={:.3}",
            points.len(),
            self.cutoff,
            self.scale_factor
        );

        let graph = complete_graph(points);
        let cluster = cluster_filter(points, &graph, self.cutoff)?;
        log::debug!("dominant cluster holds {} points", cluster.len());

        let cluster_box = BoundingBox::fit(&cluster)?;
        let expanded = cluster_box.scaled(self.scale_factor)?;
        log::debug!("cluster box {:?}, expanded to {:?}", cluster_box, expanded);

        let admitted = filter_points(points, &expanded);
        log::debug!("re-admitted {} of {} points", admitted.len(), points.len());

        let bbox = BoundingBox::fit(&admitted)?;
        log::debug!("final box {:?}", bbox);
        Ok(bbox)
    }
}

/// Finds the `[min, max]` box of the main mass of `points`
///
/// `cutoff` chooses which share of the points the main cluster must hold
/// (0.9, 0.8, etc.).
pub fn bound_box_coords(points: &[Point], cutoff: f64) -> Result<BoundingBox> {
    BoundBoxPipeline::new(cutoff).run(points)
}
