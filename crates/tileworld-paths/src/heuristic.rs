//! Distance estimates for strategies that look ahead.

use tileworld_core::{Cost, Point, Terrain};

/// Octile distance costed at road rates: the cost of unobstructed
/// 8-directional travel between two cells over road terrain.
///
/// Admissible and consistent as long as no terrain is cheaper than road.
#[inline]
pub fn octile(from: Point, to: Point) -> Cost {
    let dx = (from.x - to.x).abs();
    let dy = (from.y - to.y).abs();
    let diag = dx.min(dy);
    diag * Terrain::Road.diagonal_cost() + (dx + dy - 2 * diag) * Terrain::Road.cost()
}

/// Manhattan (L1) distance between two cells, in tile units.
#[inline]
pub fn manhattan(from: Point, to: Point) -> Cost {
    (from.x - to.x).abs() + (from.y - to.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_values() {
        let o = Point::ZERO;
        // Pure straight, pure diagonal, then mixed travel.
        assert_eq!(octile(o, Point::new(5, 0)), 50);
        assert_eq!(octile(o, Point::new(0, 3)), 30);
        assert_eq!(octile(o, Point::new(4, 4)), 56);
        assert_eq!(octile(o, Point::new(5, 2)), 2 * 14 + 3 * 10);
        assert_eq!(octile(o, o), 0);
    }

    #[test]
    fn octile_is_symmetric() {
        let a = Point::new(2, 7);
        let b = Point::new(9, 3);
        assert_eq!(octile(a, b), octile(b, a));
    }

    #[test]
    fn octile_never_exceeds_road_manhattan_cost() {
        // A diagonal shortcut can only make the estimate cheaper.
        let goal = Point::new(6, 6);
        for x in 0..7 {
            for y in 0..7 {
                let p = Point::new(x, y);
                assert!(octile(p, goal) <= manhattan(p, goal) * Terrain::Road.cost());
            }
        }
    }

    #[test]
    fn manhattan_values() {
        assert_eq!(manhattan(Point::new(1, 1), Point::new(4, 5)), 7);
        assert_eq!(manhattan(Point::new(4, 5), Point::new(1, 1)), 7);
    }
}
