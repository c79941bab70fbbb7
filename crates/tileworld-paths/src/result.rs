//! The outcome of a single search run.

use std::time::Duration;

use tileworld_core::{Cost, Point};

/// Sentinel best-path cost reported when the goal is unreachable.
pub const NO_PATH: Cost = -1;

/// Statistics and solution for one algorithm run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cost of the found route, or [`NO_PATH`] when the goal is unreachable.
    pub best_path_cost: Cost,
    /// Number of nodes settled before the search terminated.
    pub nodes_expanded: usize,
    /// The route from end back to start; empty when no route exists.
    pub solution_path: Vec<Point>,
    /// Wall time of the run, attached by the caller of the engine.
    pub time: Duration,
}

impl SearchResult {
    /// Whether a route was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.best_path_cost != NO_PATH
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let result = SearchResult {
            best_path_cost: 48,
            nodes_expanded: 17,
            solution_path: vec![Point::new(2, 2), Point::new(1, 1), Point::new(0, 0)],
            time: Duration::from_micros(125),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
