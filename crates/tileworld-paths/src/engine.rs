//! The generalized priority-first traversal engine.
//!
//! One label-correcting loop serves all three strategies; only the frontier
//! key differs. Relaxation uses remove-then-reinsert frontier updates and
//! the `>=` comparison, so the most recently discovered equal-cost path
//! overwrites the predecessor link.

use std::time::Duration;

use tileworld_core::{Cost, Point, Terrain, TileWorld};

use crate::frontier::Frontier;
use crate::graph::{NO_PREDECESSOR, SearchGraph};
use crate::result::{NO_PATH, SearchResult};
use crate::strategy::Strategy;

/// Receives each cell of a reconstructed route, end to start.
///
/// [`TileWorld`] implements this by painting the cell as
/// [`Terrain::Path`]; the unit sink `()` discards the route for
/// statistics-only runs.
pub trait PathSink {
    fn mark_on_path(&mut self, pos: Point);
}

impl PathSink for () {
    fn mark_on_path(&mut self, _pos: Point) {}
}

impl PathSink for TileWorld {
    fn mark_on_path(&mut self, pos: Point) {
        self.set(pos, Terrain::Path);
    }
}

/// Run one search over `graph` from `start` to `end` under `strategy`.
///
/// The graph must have been built from the world the positions refer to;
/// both must lie inside it. The graph is reset at entry and mutated in
/// place, so a graph that has already been searched must be rebuilt before
/// it is searched again (see [`Solver`](crate::Solver), which enforces
/// this).
///
/// On success the route is reported end→start through `sink` and in
/// [`SearchResult::solution_path`]; an unreachable goal yields the
/// [`NO_PATH`] cost with an empty path. The result's `time` is left at
/// zero — timing belongs to the caller.
pub fn search<S: PathSink>(
    graph: &mut SearchGraph,
    start: Point,
    end: Point,
    strategy: Strategy,
    sink: &mut S,
) -> SearchResult {
    let start_idx = graph.index_of(start);
    let end_idx = graph.index_of(end);

    graph.reset(start_idx, end, strategy);

    let mut frontier = Frontier::new(graph.len());
    frontier.push(start_idx, strategy.key(graph.node(start_idx)));

    let mut nodes_expanded = 0;
    let mut nbuf: Vec<(usize, Cost)> = Vec::with_capacity(8);

    while let Some(ci) = frontier.pop() {
        if ci == end_idx {
            return reconstruct(graph, end_idx, nodes_expanded, sink);
        }

        nbuf.clear();
        graph.neighbor_edges(ci, &mut nbuf);

        for &(ni, edge) in nbuf.iter() {
            if graph.node(ni).visited {
                continue;
            }
            let candidate = graph.node(ci).tentative_cost + edge;
            let n = graph.node_mut(ni);
            // `>=`: an equal-cost path discovered later takes over the
            // predecessor link.
            if n.tentative_cost >= candidate {
                n.tentative_cost = candidate;
                n.predecessor = ci;
            }
            // Re-insert unconditionally with the freshly computed key,
            // superseding any stale frontier entry.
            frontier.push(ni, strategy.key(graph.node(ni)));
        }

        graph.node_mut(ci).visited = true;
        nodes_expanded += 1;
    }

    SearchResult {
        best_path_cost: NO_PATH,
        nodes_expanded,
        solution_path: Vec::new(),
        time: Duration::ZERO,
    }
}

fn reconstruct<S: PathSink>(
    graph: &SearchGraph,
    end_idx: usize,
    nodes_expanded: usize,
    sink: &mut S,
) -> SearchResult {
    let mut solution_path = Vec::new();
    let mut ci = end_idx;
    while ci != NO_PREDECESSOR {
        let node = graph.node(ci);
        sink.mark_on_path(node.pos);
        solution_path.push(node.pos);
        ci = node.predecessor;
    }

    SearchResult {
        best_path_cost: graph.node(end_idx).tentative_cost,
        nodes_expanded,
        solution_path,
        time: Duration::ZERO,
    }
}
