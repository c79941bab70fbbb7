//! **tileworld-core** — terrain grid model for tile-world pathfinding (core types).
//!
//! This crate provides the foundational types used across the *tileworld*
//! ecosystem: the [`Point`] geometry primitive, the [`Terrain`] cost model,
//! and the owned row-major [`TileWorld`] grid with start/end discovery.

pub mod geom;
pub mod terrain;
pub mod world;

pub use geom::Point;
pub use terrain::{Cost, INFINITY, Terrain};
pub use world::TileWorld;
