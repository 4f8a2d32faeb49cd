//! Outlier-resistant bounding box for planar points
//!
//! Finds the dominant cluster of points by single-linkage (MST) clustering,
//! fits a box to it, expands that box, re-admits the input points falling
//! inside and fits the final box to them.

pub mod cluster;
pub mod error;
pub mod pipeline;

#[cfg(test)]
mod pipeline_test;

pub use cluster::{
    BoundingBox, DisjointSet, Edge, MstCluster, Point, PointList, cluster_filter, complete_graph,
    filter_points, mst_cluster,
};
pub use error::{BoundBoxError, Result};
pub use pipeline::{BoundBoxPipeline, DEFAULT_CUTOFF, DEFAULT_SCALE_FACTOR, bound_box_coords};
