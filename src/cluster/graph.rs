use super::point::Point;

/// Undirected weighted edge of the complete graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Euclidean distance between `a` and `b`
    pub dist: f64,
    pub a: Point,
    pub b: Point,
}

/// Builds the complete graph over `points`: one edge per unordered pair,
/// in `(i, j)` order with `i < j`
///
/// Coincident points are kept and produce zero-length edges. This is O(n²)
/// in both time and memory.
pub fn complete_graph(points: &[Point]) -> Vec<Edge> {
    let n = points.len();
    let mut graph = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            graph.push(Edge {
                dist: a.dist(b),
                a: *a,
                b: *b,
            });
        }
    }

    graph
}
