//! The three frontier-ordering strategies.

use std::fmt;

use tileworld_core::{Cost, Point};

use crate::graph::SearchNode;
use crate::heuristic::octile;

/// Which priority rule orders the frontier.
///
/// All three run through the same traversal engine; only the ordering key
/// (and whether the heuristic is computed at all) differs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Order by accumulated plus estimated remaining cost.
    AStar,
    /// Order by accumulated cost only; the heuristic is forced to zero.
    Dijkstra,
    /// Order by estimated remaining cost only, ignoring accumulated cost.
    Greedy,
}

impl Strategy {
    /// All strategies, in report order.
    pub const ALL: [Strategy; 3] = [Strategy::AStar, Strategy::Dijkstra, Strategy::Greedy];

    /// Heuristic estimate for a node at `from` with goal `to`, computed
    /// once per node at setup.
    #[inline]
    pub fn heuristic(self, from: Point, to: Point) -> Cost {
        match self {
            Strategy::Dijkstra => 0,
            Strategy::AStar | Strategy::Greedy => octile(from, to),
        }
    }

    /// The frontier ordering key for `node`.
    #[inline]
    pub(crate) fn key(self, node: &SearchNode) -> Cost {
        match self {
            Strategy::AStar => node.tentative_cost + node.heuristic_cost,
            Strategy::Dijkstra => node.tentative_cost,
            Strategy::Greedy => node.heuristic_cost,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::AStar => "A*",
            Strategy::Dijkstra => "Dijkstra",
            Strategy::Greedy => "Greedy Search",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_heuristic_is_zero() {
        let goal = Point::new(9, 9);
        assert_eq!(Strategy::Dijkstra.heuristic(Point::ZERO, goal), 0);
        assert_eq!(
            Strategy::AStar.heuristic(Point::ZERO, goal),
            octile(Point::ZERO, goal)
        );
        assert_eq!(
            Strategy::Greedy.heuristic(Point::ZERO, goal),
            octile(Point::ZERO, goal)
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Strategy::AStar.to_string(), "A*");
        assert_eq!(Strategy::Dijkstra.to_string(), "Dijkstra");
        assert_eq!(Strategy::Greedy.to_string(), "Greedy Search");
    }
}
