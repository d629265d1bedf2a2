use waregrid_core::Point;

/// Minimal routing interface — provides neighbor enumeration.
pub trait Terrain {
    /// Append the expandable neighbors of `p` into `buf`. The engine clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Terrain with weighted (positive-cost) edges.
pub trait WeightedTerrain: Terrain {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* terrain with an admissible heuristic.
pub trait HeuristicTerrain: WeightedTerrain {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
