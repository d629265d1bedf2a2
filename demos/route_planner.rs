//! Plans pick routes across a randomly generated warehouse floor and
//! renders them as ASCII.
//!
//! Builds a 15×15 floor with racks scattered at 20% density (keeping the
//! corner-to-corner route solvable), runs both algorithms, and prints the
//! floor, the route lengths, and the record a host would persist.

use waregrid_core::{Grid, Point};
use waregrid_floor::FloorGen;
use waregrid_paths::{Algorithm, RouteRecord, plan_route, route_length};

const GRID_SIZE: i32 = 15;

fn render(grid: &Grid, route: &[Point], from: Point, to: Point) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == from {
                'S'
            } else if p == to {
                'E'
            } else if route.contains(&p) {
                // Route cells, excluding the literal endpoints.
                '*'
            } else if grid.is_walkable(p) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() {
    let from = Point::new(0, 0);
    let to = Point::new(GRID_SIZE - 1, GRID_SIZE - 1);

    let mut floor = FloorGen::open_floor(GRID_SIZE, GRID_SIZE, rand::rng());
    floor
        .scatter_racks_keeping_route(from, to, 0.2)
        .expect("endpoints are in bounds");
    floor.clear_endpoints(from, to);
    let grid = floor.grid;

    for algorithm in [Algorithm::AStar, Algorithm::Dijkstra] {
        let route = plan_route(&grid, from, to, algorithm).expect("endpoints are in bounds");
        if route.is_empty() {
            println!("{algorithm}: no route found between {from} and {to}");
            continue;
        }
        println!(
            "{algorithm}: {} units over {} cells",
            route_length(&route),
            route.len()
        );
        println!("{}", render(&grid, &route, from, to));

        if let Some(record) =
            RouteRecord::from_route("corner to corner", algorithm, &route, GRID_SIZE)
        {
            println!(
                "record for the host to persist: {}",
                serde_json::to_string(&record).expect("record serializes")
            );
        }
        println!();
    }
}
