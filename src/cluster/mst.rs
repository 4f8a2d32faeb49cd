use super::disjoint_set::DisjointSet;
use super::graph::Edge;
use super::point::{Point, PointKey, PointList};
use crate::error::{BoundBoxError, Result};
use bitvec::prelude::*;
use std::collections::HashMap;

// Single-linkage clustering halted early:
//
// sort edges by ascending distance
// for each edge (a, b)
//    root = union(a, b)
//    if size(root) >= cutoff * n
//       stop
// dominant cluster = all points whose find() == root
//
// This is Kruskal's MST construction cut at the first moment any component
// reaches the cutoff fraction, without materializing the tree.

/// Outcome of the MST clustering step
#[derive(Debug, Clone)]
pub struct MstCluster {
    /// Root of the winning component, `None` when the graph has no edges
    pub root: Option<usize>,
    /// Number of point indices in the winning component
    pub size: usize,
    /// Number of edges consumed, including the one that stopped the loop
    pub edges_processed: usize,
    /// `members[i]` is set when `points[i]` belongs to the winning component
    pub members: BitVec,
}

impl MstCluster {
    /// Collects member points in their original order
    ///
    /// # Panics
    ///
    /// Panics if `points` is shorter than the slice that was clustered
    pub fn points(&self, points: &[Point]) -> PointList {
        self.members.iter_ones().map(|i| points[i]).collect()
    }
}

/// Checks that the cutoff fraction lies in `[0, 1]`
pub fn validate_cutoff(cutoff: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(BoundBoxError::InvalidParameter {
            name: "cutoff",
            value: cutoff,
            expected: "must be within [0, 1]",
        });
    }
    Ok(())
}

/// Runs single-linkage clustering over `graph` until one component holds at
/// least `cutoff * points.len()` point indices
///
/// Points are mapped back to indices by coordinate, so duplicate coordinates
/// share the index of their last occurrence. The threshold is still measured
/// against the full input count. If no union ever reaches it, every edge is
/// consumed and the root of the last union wins.
///
/// Ties between edges of equal length keep `graph` order. `graph` itself is
/// not reordered.
///
/// # Arguments
///
/// * `points` - Points the graph was built from
/// * `graph` - Edges over `points`, usually from `complete_graph`
/// * `cutoff` - Fraction of points the winning component must reach
pub fn mst_cluster(points: &[Point], graph: &[Edge], cutoff: f64) -> Result<MstCluster> {
    validate_cutoff(cutoff)?;

    let n = points.len();
    let mut index: HashMap<PointKey, usize> = HashMap::with_capacity(n);
    for (i, p) in points.iter().enumerate() {
        index.insert(p.key(), i);
    }

    let mut order: Vec<&Edge> = graph.iter().collect();
    order.sort_by(|e1, e2| e1.dist.total_cmp(&e2.dist));

    let threshold = cutoff * n as f64;
    let mut sets = DisjointSet::new(n);
    let mut root = None;
    let mut edges_processed = 0;

    for edge in order {
        // Edges always come from `points`, a missing key means a foreign edge
        let (Some(&a), Some(&b)) = (index.get(&edge.a.key()), index.get(&edge.b.key())) else {
            log::warn!("skipping edge with unknown endpoint {:?} - {:?}", edge.a, edge.b);
            continue;
        };
        let r = sets.union(a, b);
        root = Some(r);
        edges_processed += 1;
        if sets.size(r) as f64 >= threshold {
            break;
        }
    }

    let members = match root {
        Some(r) => {
            let mut members = bitvec![0; n];
            for i in 0..n {
                if sets.find(i) == r {
                    members.set(i, true);
                }
            }
            members
        }
        None => bitvec![1; n],
    };
    let size = root.map_or(n, |r| sets.size(r));

    log::trace!(
        "mst cluster: root={:?} size={} after {} of {} edges (threshold {:.3})",
        root,
        size,
        edges_processed,
        graph.len(),
        threshold
    );

    Ok(MstCluster {
        root,
        size,
        edges_processed,
        members,
    })
}

/// Returns the points of the dominant cluster found by `mst_cluster`
pub fn cluster_filter(points: &[Point], graph: &[Edge], cutoff: f64) -> Result<PointList> {
    Ok(mst_cluster(points, graph, cutoff)?.points(points))
}
