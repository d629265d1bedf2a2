use std::collections::BinaryHeap;

use waregrid_core::Point;

use crate::RoutePlanner;
use crate::planner::{NodeRef, UNREACHABLE};
use crate::traits::HeuristicTerrain;

impl RoutePlanner {
    /// Compute the shortest route from `from` to `to` using A*.
    ///
    /// Returns the full route (including both endpoints) or `None` if no
    /// route exists within the current bounds. With uniform step costs and
    /// an admissible heuristic the returned route has the minimum possible
    /// hop count.
    pub fn astar_route<T: HeuristicTerrain>(
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

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        // Initialise the start node.
        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.f = terrain.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.astar_nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.astar_nodes[ci].generation != cur_gen || !self.astar_nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.astar_nodes[ci].open = false;
            let current_g = self.astar_nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            terrain.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + terrain.cost(current_point, np);

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    // Already reached this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.f = tentative_g + terrain.estimate(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct route by walking back-pointers from the goal.
        let mut route = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            route.push(self.point(ci));
            ci = self.astar_nodes[ci].parent;
        }
        route.reverse();
        Some(route)
    }
}
