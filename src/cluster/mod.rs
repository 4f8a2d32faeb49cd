//! Module cluster implements MST (single-linkage) clustering of planar points
//! and the axis-aligned box geometry built on top of it
pub mod bounds;
pub mod disjoint_set;
pub mod graph;
pub mod mst;
pub mod point;


pub use bounds::{BoundingBox, filter_points, validate_scale_factor};
pub use disjoint_set::DisjointSet;
pub use graph::{Edge, complete_graph};
pub use mst::{MstCluster, cluster_filter, mst_cluster, validate_cutoff};
pub use point::{Point, PointKey, PointList};
