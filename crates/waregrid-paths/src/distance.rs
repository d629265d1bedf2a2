use waregrid_core::Point;

/// Manhattan (L1) distance between two cells — the A* heuristic for
/// 4-connected aisle travel.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Geometric length of a route: the sum of Euclidean segment lengths,
/// rounded to 2 decimal places.
///
/// For a 4-connected route this equals the hop count, but the computation
/// does not assume 4-connectivity — diagonal or skipped segments contribute
/// their true length. Empty and single-cell routes have length 0.
pub fn route_length(route: &[Point]) -> f64 {
    let total: f64 = route.windows(2).map(|seg| euclidean(seg[0], seg[1])).sum();
    (total * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(4, 4)), 8);
        assert_eq!(manhattan(Point::new(3, 1), Point::new(1, 2)), 3);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }

    #[test]
    fn empty_and_single_cell_routes_have_zero_length() {
        assert_eq!(route_length(&[]), 0.0);
        assert_eq!(route_length(&[Point::new(3, 3)]), 0.0);
    }

    #[test]
    fn cardinal_route_length_equals_hop_count() {
        let route = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(2, 1),
            Point::new(2, 2),
        ];
        assert_eq!(route_length(&route), 4.0);
    }

    #[test]
    fn diagonal_segments_use_true_euclidean_length() {
        assert_eq!(route_length(&[Point::new(0, 0), Point::new(1, 1)]), 1.41);
        // A skipped segment counts its full straight-line length.
        assert_eq!(route_length(&[Point::new(0, 0), Point::new(3, 4)]), 5.0);
    }

    #[test]
    fn length_is_direction_invariant() {
        let route = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 3),
        ];
        let mut reversed = route.clone();
        reversed.reverse();
        assert_eq!(route_length(&route), route_length(&reversed));
    }
}
