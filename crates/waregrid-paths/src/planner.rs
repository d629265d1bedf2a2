use waregrid_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

/// Ephemeral per-cell search bookkeeping, separate from grid state.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "not yet reached".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// RoutePlanner
// ---------------------------------------------------------------------------

/// Central coordinator for route queries on a floor rectangle.
///
/// `RoutePlanner` owns the node arrays and scratch buffers used by the
/// searches, so that repeated queries against the same floor reuse their
/// allocations. Each query is self-contained: the planner never mutates the
/// terrain it searches, and a finished query leaves no state behind that a
/// later one can observe (stale nodes are invalidated lazily by generation
/// counter).
pub struct RoutePlanner {
    pub(crate) bounds: Range,
    pub(crate) width: usize,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    // Dijkstra caches
    pub(crate) dijkstra_nodes: Vec<Node>,
    pub(crate) dijkstra_generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl RoutePlanner {
    /// Create a new `RoutePlanner` for the given floor rectangle.
    pub fn new(bounds: Range) -> Self {
        let w = bounds.width().max(0) as usize;
        let len = bounds.len();
        Self {
            bounds,
            width: w,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            dijkstra_nodes: vec![Node::default(); len],
            dijkstra_generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying bounds, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are preserved
    /// and only generation counters are bumped. Otherwise caches are
    /// reallocated.
    pub fn set_bounds(&mut self, bounds: Range) {
        let new_len = bounds.len();
        let old_capacity = self.astar_nodes.len();
        self.bounds = bounds;
        self.width = bounds.width().max(0) as usize;

        if new_len <= old_capacity {
            // Fits within existing capacity — stale entries are ignored via
            // the generation bump, no reallocation needed.
            self.astar_generation = self.astar_generation.wrapping_add(1);
            self.dijkstra_generation = self.dijkstra_generation.wrapping_add(1);
            return;
        }

        self.astar_nodes.clear();
        self.astar_nodes.resize(new_len, Node::default());
        self.astar_generation = 0;

        self.dijkstra_nodes.clear();
        self.dijkstra_nodes.resize(new_len, Node::default());
        self.dijkstra_generation = 0;
    }

    /// The floor rectangle being used.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.bounds.min.x;
        let y = (idx / self.width) as i32 + self.bounds.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bounds_smaller_preserves_capacity() {
        let mut planner = RoutePlanner::new(Range::new(0, 0, 20, 20));
        let original_cap = planner.astar_nodes.len(); // 400

        // Shrink to a smaller rectangle — should NOT reallocate.
        let small = Range::new(0, 0, 5, 5);
        planner.set_bounds(small);
        assert_eq!(planner.bounds(), small);
        assert_eq!(planner.astar_nodes.len(), original_cap);
        assert_eq!(planner.width, 5);
        // Generations bumped so stale entries are ignored.
        assert!(planner.astar_generation > 0 || planner.dijkstra_generation > 0);
    }

    #[test]
    fn set_bounds_larger_reallocates() {
        let mut planner = RoutePlanner::new(Range::new(0, 0, 5, 5));
        let old_cap = planner.astar_nodes.len(); // 25

        let big = Range::new(0, 0, 20, 20);
        planner.set_bounds(big);
        assert_eq!(planner.bounds(), big);
        assert!(planner.astar_nodes.len() > old_cap);
        assert_eq!(planner.astar_nodes.len(), 400);
    }

    #[test]
    fn idx_point_round_trip() {
        let planner = RoutePlanner::new(Range::new(2, 3, 8, 9));
        let p = Point::new(4, 5);
        let i = planner.idx(p).unwrap();
        assert_eq!(planner.point(i), p);
        assert_eq!(planner.idx(Point::new(8, 5)), None);
        assert_eq!(planner.idx(Point::new(1, 5)), None);
    }
}
