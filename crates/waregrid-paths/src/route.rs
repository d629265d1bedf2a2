//! Floor-grid routing: the [`Algorithm`] selector, the [`FloorTerrain`]
//! adapter, and the validated [`plan_route`] entry point.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use waregrid_core::{Grid, GridError, Point};

use crate::RoutePlanner;
use crate::distance::manhattan;
use crate::traits::{HeuristicTerrain, Terrain, WeightedTerrain};

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// Which search to run for a route query.
///
/// Both algorithms solve the same uniform-cost shortest-path problem and
/// return routes of equal hop count; A* expands fewer cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
}

impl Algorithm {
    /// Stable lowercase name, as persisted by host applications.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "astar",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing an [`Algorithm`] name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?}, expected \"astar\" or \"dijkstra\"")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// FloorTerrain
// ---------------------------------------------------------------------------

/// Adapts an occupancy [`Grid`] to the terrain traits for one route query.
///
/// Travel is 4-connected with uniform step cost 1 and a Manhattan estimate.
/// The query's endpoints are treated as walkable regardless of their stored
/// flag, so a rack placed on a requested endpoint narrows the route but
/// never silently invalidates the query itself.
pub struct FloorTerrain<'a> {
    grid: &'a Grid,
    from: Point,
    to: Point,
}

impl<'a> FloorTerrain<'a> {
    /// Create a terrain view for a query from `from` to `to`.
    pub fn new(grid: &'a Grid, from: Point, to: Point) -> Self {
        Self { grid, from, to }
    }
}

impl Terrain for FloorTerrain<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.grid.contains(n)
                && (self.grid.is_walkable(n) || n == self.from || n == self.to)
            {
                buf.push(n);
            }
        }
    }
}

impl WeightedTerrain for FloorTerrain<'_> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl HeuristicTerrain for FloorTerrain<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

// ---------------------------------------------------------------------------
// plan_route
// ---------------------------------------------------------------------------

/// Plan a route between two floor cells with the selected algorithm.
///
/// Both endpoints are validated against the grid bounds before any search
/// runs. An unreachable target is not an error: the result is `Ok` with an
/// empty route, which callers surface as "no path found".
///
/// Each call owns its planner; callers issuing many queries against the
/// same floor can hold a [`RoutePlanner`] and use its
/// [`astar_route`](RoutePlanner::astar_route) /
/// [`dijkstra_route`](RoutePlanner::dijkstra_route) methods directly.
pub fn plan_route(
    grid: &Grid,
    from: Point,
    to: Point,
    algorithm: Algorithm,
) -> Result<Vec<Point>, GridError> {
    let bounds = grid.bounds();
    for p in [from, to] {
        if !bounds.contains(p) {
            return Err(GridError::OutOfBounds {
                pos: p,
                width: bounds.width(),
                height: bounds.height(),
            });
        }
    }

    let mut planner = RoutePlanner::new(bounds);
    let terrain = FloorTerrain::new(grid, from, to);
    let route = match algorithm {
        Algorithm::AStar => planner.astar_route(&terrain, from, to),
        Algorithm::Dijkstra => planner.dijkstra_route(&terrain, from, to),
    };

    match route {
        Some(route) => {
            log::debug!("{algorithm} route {from} -> {to}: {} cells", route.len());
            Ok(route)
        }
        None => {
            log::debug!("{algorithm} route {from} -> {to}: no route");
            Ok(Vec::new())
        }
    }
}
