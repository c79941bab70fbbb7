//! The per-run search graph: a node arena with precomputed adjacency.

use tileworld_core::{Cost, INFINITY, Point, Terrain, TileWorld};

use crate::strategy::Strategy;

/// Sentinel predecessor index meaning "none".
pub(crate) const NO_PREDECESSOR: usize = usize::MAX;

// Neighbor offsets in row-major order, straight before diagonal. The `>=`
// relaxation rule makes the surviving equal-cost predecessor depend on
// traversal order, so this order is part of the engine's contract.
const STRAIGHT_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Per-cell search state, mutated in place during a run.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    pub(crate) terrain: Terrain,
    pub(crate) tentative_cost: Cost,
    pub(crate) heuristic_cost: Cost,
    pub(crate) visited: bool,
    pub(crate) predecessor: usize,
    straight: Vec<usize>,
    diagonal: Vec<usize>,
}

/// An adjacency-complete node arena for one world, built once per run.
///
/// Non-walkable tiles get no neighbor lists and appear in nobody else's
/// lists, so they are never reached or expanded.
pub struct SearchGraph {
    nodes: Vec<SearchNode>,
    width: i32,
}

impl SearchGraph {
    /// Build the graph for `world`: one node per tile plus the straight and
    /// diagonal neighbor sets of every walkable tile.
    ///
    /// Adjacency is classified by coordinate distance (straight: exactly one
    /// axis differs by 1; diagonal: both differ by 1), examining only the up
    /// to eight surrounding tiles of each cell.
    pub fn build(world: &TileWorld) -> Self {
        let mut nodes: Vec<SearchNode> = world
            .iter()
            .map(|(pos, terrain)| SearchNode {
                pos,
                terrain,
                tentative_cost: INFINITY,
                heuristic_cost: INFINITY,
                visited: false,
                predecessor: NO_PREDECESSOR,
                straight: Vec::new(),
                diagonal: Vec::new(),
            })
            .collect();

        for i in 0..nodes.len() {
            if !nodes[i].terrain.walkable() {
                continue;
            }
            let pos = nodes[i].pos;
            nodes[i].straight = adjacent(world, pos, &STRAIGHT_OFFSETS);
            nodes[i].diagonal = adjacent(world, pos, &DIAGONAL_OFFSETS);
        }

        Self {
            nodes,
            width: world.width(),
        }
    }

    /// Number of nodes (one per tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flat index of a position inside the world the graph was built from.
    #[inline]
    pub(crate) fn index_of(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut SearchNode {
        &mut self.nodes[idx]
    }

    /// Reset per-run state: tentative costs to infinity (the start node to
    /// 0), heuristics against `goal` under `strategy`, and cleared visited
    /// flags and predecessor links.
    pub(crate) fn reset(&mut self, start_idx: usize, goal: Point, strategy: Strategy) {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.tentative_cost = if i == start_idx { 0 } else { INFINITY };
            node.heuristic_cost = strategy.heuristic(node.pos, goal);
            node.visited = false;
            node.predecessor = NO_PREDECESSOR;
        }
    }

    /// Append `(neighbor index, edge cost)` pairs for every neighbor of
    /// `idx`: straight neighbors first, then diagonal, each in row-major
    /// order. The edge cost is the neighbor's terrain cost for the kind of
    /// move that reaches it.
    pub(crate) fn neighbor_edges(&self, idx: usize, buf: &mut Vec<(usize, Cost)>) {
        let node = &self.nodes[idx];
        buf.extend(
            node.straight
                .iter()
                .map(|&n| (n, self.nodes[n].terrain.cost())),
        );
        buf.extend(
            node.diagonal
                .iter()
                .map(|&n| (n, self.nodes[n].terrain.diagonal_cost())),
        );
    }
}

fn adjacent(world: &TileWorld, pos: Point, offsets: &[(i32, i32); 4]) -> Vec<usize> {
    offsets
        .iter()
        .map(|&(dx, dy)| pos.shift(dx, dy))
        .filter(|&n| world.at(n).is_some_and(Terrain::walkable))
        .map(|n| world.index_of(n))
        .collect()
}
