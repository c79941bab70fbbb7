//! The [`TileWorld`] type — an owned 2D grid of [`Terrain`] tiles.
//!
//! Storage is row-major. Each search run operates on its own `TileWorld`
//! (solution paths are painted destructively into the grid), so the type is
//! plainly owned rather than shared.

use crate::geom::Point;
use crate::terrain::Terrain;

/// A rectangular world of terrain tiles.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileWorld {
    width: i32,
    height: i32,
    tiles: Vec<Terrain>,
}

impl TileWorld {
    /// Create a new world of the given dimensions, filled with road.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            tiles: vec![Terrain::Road; (w * h) as usize],
        }
    }

    /// Build a world from row-major tile data.
    ///
    /// `tiles.len()` must equal `width * height`.
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<Terrain>) -> Self {
        assert_eq!(tiles.len(), (width.max(0) * height.max(0)) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            tiles,
        }
    }

    /// Width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the world has no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the world.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a position to its row-major flat index.
    #[inline]
    pub fn index_of(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Convert a row-major flat index back to a position.
    #[inline]
    pub fn point_at(&self, index: usize) -> Point {
        Point::new(index as i32 % self.width, index as i32 / self.width)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Terrain> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.index_of(p)])
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Terrain) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index_of(p);
        self.tiles[idx] = tile;
    }

    /// The position of the start tile: first occurrence in row-major order.
    pub fn find_start(&self) -> Option<Point> {
        self.find_first(Terrain::Start)
    }

    /// The position of the end tile: first occurrence in row-major order.
    pub fn find_end(&self) -> Option<Point> {
        self.find_first(Terrain::End)
    }

    fn find_first(&self, tile: Terrain) -> Option<Point> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|i| self.point_at(i))
    }

    /// Iterate over `(Point, Terrain)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.point_at(i), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_road() {
        let w = TileWorld::new(4, 3);
        assert_eq!(w.width(), 4);
        assert_eq!(w.height(), 3);
        assert_eq!(w.len(), 12);
        assert_eq!(w.at(Point::new(2, 1)), Some(Terrain::Road));
    }

    #[test]
    fn index_round_trip() {
        let w = TileWorld::new(5, 4);
        for (i, (p, _)) in w.iter().enumerate() {
            assert_eq!(w.index_of(p), i);
            assert_eq!(w.point_at(i), p);
        }
        // Row-major: (x, y) -> y * width + x.
        assert_eq!(w.index_of(Point::new(3, 2)), 13);
    }

    #[test]
    fn set_and_at() {
        let mut w = TileWorld::new(3, 3);
        w.set(Point::new(1, 2), Terrain::Water);
        assert_eq!(w.at(Point::new(1, 2)), Some(Terrain::Water));
        assert_eq!(w.at(Point::new(3, 0)), None);
        // Out-of-bounds set is a no-op.
        w.set(Point::new(-1, 0), Terrain::Sand);
        assert_eq!(w.at(Point::new(0, 0)), Some(Terrain::Road));
    }

    #[test]
    fn find_start_first_occurrence_wins() {
        let mut w = TileWorld::new(3, 2);
        w.set(Point::new(2, 0), Terrain::Start);
        w.set(Point::new(0, 1), Terrain::Start);
        assert_eq!(w.find_start(), Some(Point::new(2, 0)));
        assert_eq!(w.find_end(), None);
    }

    #[test]
    fn find_end() {
        let mut w = TileWorld::new(2, 2);
        w.set(Point::new(1, 1), Terrain::End);
        assert_eq!(w.find_end(), Some(Point::new(1, 1)));
    }
}
