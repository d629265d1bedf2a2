//! Floor-plan generation.
//!
//! Produces the occupancy grids that route queries run against: open floors
//! with racks scattered at a given density, optionally guaranteeing that a
//! chosen pick route stays clear.

use std::collections::HashSet;

use rand::{Rng, RngExt};
use waregrid_core::{Grid, GridError, Point};
use waregrid_paths::{Algorithm, plan_route};

/// Floor generator operating on an occupancy [`Grid`].
pub struct FloorGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> FloorGen<R> {
    /// Create a generator over an existing grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Create a generator over a new fully-open floor.
    pub fn open_floor(width: i32, height: i32, rng: R) -> Self {
        Self::with_grid(Grid::new(width, height), rng)
    }

    /// Block each open cell with probability `density`.
    ///
    /// Returns the number of cells blocked. A density of 0.2 reproduces the
    /// usual "80% of the floor is aisle" layout.
    pub fn scatter_racks(&mut self, density: f64) -> usize {
        let mut blocked = 0;
        for p in self.grid.bounds().iter() {
            if self.grid.is_walkable(p) && self.rng.random::<f64>() < density {
                self.grid.set_walkable(p, false);
                blocked += 1;
            }
        }
        log::debug!("scattered {blocked} racks at density {density}");
        blocked
    }

    /// Block cells at `density` while keeping a route from `from` to `to`
    /// clear.
    ///
    /// A shortest route is planned across the floor as it stands, and
    /// neither its cells nor the endpoints are ever blocked, so a floor
    /// that was solvable stays solvable. Returns the number of cells
    /// blocked, or the validation error for out-of-bounds endpoints.
    pub fn scatter_racks_keeping_route(
        &mut self,
        from: Point,
        to: Point,
        density: f64,
    ) -> Result<usize, GridError> {
        let route = plan_route(&self.grid, from, to, Algorithm::AStar)?;
        let protected: HashSet<Point> = route.into_iter().collect();

        let mut blocked = 0;
        for p in self.grid.bounds().iter() {
            if p == from || p == to || protected.contains(&p) {
                continue;
            }
            if self.grid.is_walkable(p) && self.rng.random::<f64>() < density {
                self.grid.set_walkable(p, false);
                blocked += 1;
            }
        }
        log::debug!(
            "scattered {blocked} racks at density {density}, keeping {} route cells clear",
            protected.len()
        );
        Ok(blocked)
    }

    /// Re-assert that both endpoints are walkable.
    ///
    /// Callers conventionally run this right before a route query so that a
    /// rack placed on a pick location does not make the query unreachable
    /// by construction. Out-of-bounds points are ignored.
    pub fn clear_endpoints(&mut self, from: Point, to: Point) {
        self.grid.set_walkable(from, true);
        self.grid.set_walkable(to, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use waregrid_paths::route_length;

    #[test]
    fn zero_density_blocks_nothing() {
        let mut floor = FloorGen::open_floor(10, 10, StdRng::seed_from_u64(1));
        assert_eq!(floor.scatter_racks(0.0), 0);
        assert_eq!(floor.grid.count_walkable(), 100);
    }

    #[test]
    fn full_density_blocks_everything() {
        let mut floor = FloorGen::open_floor(6, 4, StdRng::seed_from_u64(2));
        assert_eq!(floor.scatter_racks(1.0), 24);
        assert_eq!(floor.grid.count_walkable(), 0);
    }

    #[test]
    fn scatter_keeps_route_solvable() {
        for seed in 0..20 {
            let mut floor = FloorGen::open_floor(15, 15, StdRng::seed_from_u64(seed));
            let from = Point::new(0, 0);
            let to = Point::new(14, 14);
            floor.scatter_racks_keeping_route(from, to, 0.4).unwrap();
            for alg in [Algorithm::AStar, Algorithm::Dijkstra] {
                let route = plan_route(&floor.grid, from, to, alg).unwrap();
                assert!(!route.is_empty(), "seed {seed}, {alg}");
                assert_eq!(route_length(&route), 28.0, "seed {seed}, {alg}");
            }
        }
    }

    #[test]
    fn scatter_keeping_route_rejects_out_of_bounds_endpoints() {
        let mut floor = FloorGen::open_floor(5, 5, StdRng::seed_from_u64(3));
        let err = floor
            .scatter_racks_keeping_route(Point::new(0, 0), Point::new(5, 5), 0.2)
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn clear_endpoints_reopens_blocked_cells() {
        let mut floor = FloorGen::open_floor(4, 4, StdRng::seed_from_u64(4));
        let from = Point::new(0, 0);
        let to = Point::new(3, 3);
        floor.grid.set_walkable(from, false);
        floor.grid.set_walkable(to, false);
        floor.clear_endpoints(from, to);
        assert!(floor.grid.is_walkable(from));
        assert!(floor.grid.is_walkable(to));
    }
}
