//! The per-run facade: locate start/end, build a fresh graph, time the
//! engine call, and paint the route back into the world.

use std::time::Instant;

use thiserror::Error;
use tileworld_core::{Point, TileWorld};

use crate::engine::search;
use crate::graph::SearchGraph;
use crate::result::SearchResult;
use crate::strategy::Strategy;

/// Why a run could not be prepared.
///
/// A world is expected to contain exactly one start and one end tile; when
/// several exist, the first in row-major order wins. A world with none is
/// rejected here rather than searched with unspecified endpoints.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("world has no start tile")]
    MissingStart,
    #[error("world has no end tile")]
    MissingEnd,
}

/// One single-shot search run over a world.
///
/// `solve` consumes the run, so the mutated graph can never be handed to a
/// second search; build a new `Solver` (and reload the world) per algorithm.
pub struct Solver<'w> {
    world: &'w mut TileWorld,
    graph: SearchGraph,
    start: Point,
    end: Point,
    strategy: Strategy,
}

impl<'w> Solver<'w> {
    /// Prepare a run: locate the start and end tiles and build the
    /// adjacency-complete graph.
    pub fn new(world: &'w mut TileWorld, strategy: Strategy) -> Result<Self, SolveError> {
        let start = world.find_start().ok_or(SolveError::MissingStart)?;
        let end = world.find_end().ok_or(SolveError::MissingEnd)?;
        let graph = SearchGraph::build(world);
        Ok(Self {
            world,
            graph,
            start,
            end,
            strategy,
        })
    }

    /// Run the search. The reported time covers the engine call only, not
    /// graph construction.
    pub fn solve(mut self) -> SearchResult {
        let clock = Instant::now();
        let mut result = search(
            &mut self.graph,
            self.start,
            self.end,
            self.strategy,
            &mut *self.world,
        );
        result.time = clock.elapsed();
        log::debug!(
            "{}: cost {}, {} nodes expanded in {:?}",
            self.strategy,
            result.best_path_cost,
            result.nodes_expanded,
            result.time
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileworld_core::Terrain;

    #[test]
    fn missing_start_is_rejected() {
        let mut w = TileWorld::new(2, 2);
        w.set(Point::new(1, 1), Terrain::End);
        assert_eq!(
            Solver::new(&mut w, Strategy::AStar).err(),
            Some(SolveError::MissingStart)
        );
    }

    #[test]
    fn missing_end_is_rejected() {
        let mut w = TileWorld::new(2, 2);
        w.set(Point::new(0, 0), Terrain::Start);
        assert_eq!(
            Solver::new(&mut w, Strategy::AStar).err(),
            Some(SolveError::MissingEnd)
        );
    }

    #[test]
    fn solve_paints_path_and_reports_time() {
        let mut w = TileWorld::new(2, 1);
        w.set(Point::new(0, 0), Terrain::Start);
        w.set(Point::new(1, 0), Terrain::End);

        let solver = Solver::new(&mut w, Strategy::Dijkstra).unwrap();
        let result = solver.solve();

        assert_eq!(result.best_path_cost, 10);
        assert_eq!(result.nodes_expanded, 1);
        assert_eq!(w.at(Point::new(0, 0)), Some(Terrain::Path));
        assert_eq!(w.at(Point::new(1, 0)), Some(Terrain::Path));
    }
}
