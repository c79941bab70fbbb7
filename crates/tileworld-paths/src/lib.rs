//! **tileworld-paths** — least-cost route search over terrain grids.
//!
//! Three interchangeable algorithms share one priority-first traversal
//! engine and differ only in the key that orders the frontier:
//!
//! | Strategy | Frontier key |
//! |---|---|
//! | [`Strategy::Dijkstra`] | accumulated cost |
//! | [`Strategy::AStar`] | accumulated cost + octile estimate |
//! | [`Strategy::Greedy`] | octile estimate only |
//!
//! A [`SearchGraph`] is built fresh per run ([`SearchGraph::build`]), mutated
//! in place by [`search`], and discarded together with the produced
//! [`SearchResult`] — node state is never reused across algorithms. The
//! [`Solver`] facade resolves start/end, times the engine call, and paints
//! the solution back into the world through the [`PathSink`] seam.

mod engine;
mod frontier;
mod graph;
mod heuristic;
mod result;
mod solver;
mod strategy;

pub use engine::{PathSink, search};
pub use graph::SearchGraph;
pub use heuristic::{manhattan, octile};
pub use result::{NO_PATH, SearchResult};
pub use solver::{SolveError, Solver};
pub use strategy::Strategy;
