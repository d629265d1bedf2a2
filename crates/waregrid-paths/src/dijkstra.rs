use std::collections::BinaryHeap;

use waregrid_core::Point;

use crate::RoutePlanner;
use crate::planner::{NodeRef, UNREACHABLE};
use crate::traits::WeightedTerrain;

impl RoutePlanner {
    /// Compute the shortest route from `from` to `to` using Dijkstra's
    /// algorithm.
    ///
    /// Same contract as [`astar_route`](RoutePlanner::astar_route), without
    /// a heuristic: every reached cell carries its exact tentative distance
    /// and the minimum is selected each iteration. The search stops as soon
    /// as the goal is finalized, or when the frontier empties (everything
    /// still unvisited is unreachable) — in that case `None`.
    ///
    /// On the same terrain, the returned route always has the same hop
    /// count as the A* route, though the specific cells may differ when
    /// several shortest routes tie.
    pub fn dijkstra_route<T: WeightedTerrain>(
        &mut self,
        terrain: &T,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        self.dijkstra_generation = self.dijkstra_generation.wrapping_add(1);
        let cur_gen = self.dijkstra_generation;

        // Seed the start: distance 0, everything else implicitly infinite
        // until first reached.
        {
            let node = &mut self.dijkstra_nodes[start_idx];
            node.g = 0;
            node.f = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.dijkstra_nodes[ci].generation != cur_gen || !self.dijkstra_nodes[ci].open {
                continue;
            }

            // The popped minimum is final; reaching the goal ends the search.
            if ci == goal_idx {
                break 'search true;
            }

            self.dijkstra_nodes[ci].open = false;
            let current_g = self.dijkstra_nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            terrain.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + terrain.cost(current_point, np);

                let n = &mut self.dijkstra_nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative;
                n.f = tentative;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        let mut route = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            route.push(self.point(ci));
            ci = self.dijkstra_nodes[ci].parent;
        }
        route.reverse();
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::FloorTerrain;
    use waregrid_core::{Grid, Point};

    fn planner_for(grid: &Grid) -> RoutePlanner {
        RoutePlanner::new(grid.bounds())
    }

    #[test]
    fn start_equals_end_yields_single_cell() {
        let grid = Grid::new(4, 4);
        let p = Point::new(2, 1);
        let terrain = FloorTerrain::new(&grid, p, p);
        let route = planner_for(&grid).dijkstra_route(&terrain, p, p).unwrap();
        assert_eq!(route, vec![p]);
    }

    #[test]
    fn open_floor_route_has_manhattan_hop_count() {
        let grid = Grid::new(5, 5);
        let from = Point::new(0, 0);
        let to = Point::new(4, 4);
        let terrain = FloorTerrain::new(&grid, from, to);
        let route = planner_for(&grid)
            .dijkstra_route(&terrain, from, to)
            .unwrap();
        assert_eq!(route.len(), 9);
        assert_eq!(route[0], from);
        assert_eq!(*route.last().unwrap(), to);
    }

    #[test]
    fn single_row_route_is_forced() {
        let grid = Grid::new(5, 1);
        let from = Point::new(0, 0);
        let to = Point::new(4, 0);
        let terrain = FloorTerrain::new(&grid, from, to);
        let route = planner_for(&grid)
            .dijkstra_route(&terrain, from, to)
            .unwrap();
        assert_eq!(
            route,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0),
            ]
        );
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let grid = Grid::new(3, 3);
        for x in 0..3 {
            grid.set_walkable(Point::new(x, 1), false);
        }
        let from = Point::new(1, 0);
        let to = Point::new(1, 2);
        let terrain = FloorTerrain::new(&grid, from, to);
        assert_eq!(planner_for(&grid).dijkstra_route(&terrain, from, to), None);
    }

    #[test]
    fn agrees_with_astar_on_hop_count() {
        // Scattered racks in a fixed pattern; both searches must find
        // equally short routes wherever a route exists.
        let grid = Grid::new(8, 8);
        for &(x, y) in &[
            (1, 1),
            (2, 1),
            (3, 1),
            (5, 2),
            (5, 3),
            (5, 4),
            (2, 5),
            (3, 5),
            (4, 5),
            (6, 6),
        ] {
            grid.set_walkable(Point::new(x, y), false);
        }
        let mut planner = planner_for(&grid);
        let from = Point::new(0, 0);
        for to in [Point::new(7, 7), Point::new(4, 3), Point::new(7, 0)] {
            let terrain = FloorTerrain::new(&grid, from, to);
            let a = planner.astar_route(&terrain, from, to).unwrap();
            let d = planner.dijkstra_route(&terrain, from, to).unwrap();
            assert_eq!(a.len(), d.len(), "hop counts differ for {from} -> {to}");
        }
    }
}
