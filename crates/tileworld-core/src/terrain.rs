//! The terrain cost model: [`Terrain`] categories and their move costs.

/// Accumulated or per-move cost.
pub type Cost = i32;

/// Sentinel cost for unreachable tiles and not-yet-relaxed nodes.
///
/// Invariant: `INFINITY` plus any edge cost must still fit in an `i32`,
/// so relaxation arithmetic never overflows.
pub const INFINITY: Cost = 999_999_999;

/// A terrain category for one tile of the world.
///
/// Each walkable category carries a fixed cost for entering the tile with a
/// straight (orthogonal) move and a higher one for a diagonal move.
/// [`Start`](Terrain::Start), [`End`](Terrain::End) and
/// [`Path`](Terrain::Path) tiles cost the same as road.
/// [`Unknown`](Terrain::Unknown) marks unclassifiable input and behaves
/// exactly like [`NonWalkable`](Terrain::NonWalkable).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Road,
    Sand,
    Water,
    Mountain,
    NonWalkable,
    Start,
    End,
    Path,
    Unknown,
}

impl Terrain {
    /// Cost of entering this tile with a straight (orthogonal) move.
    #[inline]
    pub const fn cost(self) -> Cost {
        match self {
            Terrain::Road | Terrain::Start | Terrain::End | Terrain::Path => 10,
            Terrain::Sand => 14,
            Terrain::Water => 20,
            Terrain::Mountain => 24,
            Terrain::NonWalkable | Terrain::Unknown => INFINITY,
        }
    }

    /// Cost of entering this tile with a diagonal move.
    #[inline]
    pub const fn diagonal_cost(self) -> Cost {
        match self {
            Terrain::Road | Terrain::Start | Terrain::End | Terrain::Path => 14,
            Terrain::Sand => 20,
            Terrain::Water => 28,
            Terrain::Mountain => 34,
            Terrain::NonWalkable | Terrain::Unknown => INFINITY,
        }
    }

    /// Whether a route may ever pass through this tile.
    #[inline]
    pub const fn walkable(self) -> bool {
        !matches!(self, Terrain::NonWalkable | Terrain::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_table() {
        assert_eq!(Terrain::Road.cost(), 10);
        assert_eq!(Terrain::Road.diagonal_cost(), 14);
        assert_eq!(Terrain::Sand.cost(), 14);
        assert_eq!(Terrain::Sand.diagonal_cost(), 20);
        assert_eq!(Terrain::Water.cost(), 20);
        assert_eq!(Terrain::Water.diagonal_cost(), 28);
        assert_eq!(Terrain::Mountain.cost(), 24);
        assert_eq!(Terrain::Mountain.diagonal_cost(), 34);
    }

    #[test]
    fn start_end_path_cost_as_road() {
        for t in [Terrain::Start, Terrain::End, Terrain::Path] {
            assert_eq!(t.cost(), Terrain::Road.cost());
            assert_eq!(t.diagonal_cost(), Terrain::Road.diagonal_cost());
        }
    }

    #[test]
    fn blocked_tiles_are_infinite() {
        for t in [Terrain::NonWalkable, Terrain::Unknown] {
            assert!(!t.walkable());
            assert_eq!(t.cost(), INFINITY);
            assert_eq!(t.diagonal_cost(), INFINITY);
        }
    }

    #[test]
    fn infinity_relaxation_headroom() {
        // A full relaxation step from an unrelaxed node must not overflow.
        assert!(INFINITY.checked_add(Terrain::Mountain.cost()).is_some());
    }
}
