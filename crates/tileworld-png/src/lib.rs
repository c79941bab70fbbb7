//! **tileworld-png** — PNG image codec for tile worlds.
//!
//! A world is stored as a PNG with one pixel per tile and a fixed color
//! key: white road, yellow sand, blue water, grey mountain, black
//! non-walkable, red start, green end, cyan path. Any other color loads as
//! [`Terrain::Unknown`] (infinite cost) and is reported through a log
//! warning; unknown tiles are written back out as pink.
//!
//! The search core performs no image I/O itself; this crate is the only
//! place pixels and terrain meet.

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;
use tileworld_core::{Terrain, TileWorld};

const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const YELLOW: Rgb<u8> = Rgb([0xff, 0xff, 0x00]);
const BLUE: Rgb<u8> = Rgb([0x00, 0x00, 0xff]);
const GREY: Rgb<u8> = Rgb([0x80, 0x80, 0x80]);
const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const RED: Rgb<u8> = Rgb([0xff, 0x00, 0x00]);
const GREEN: Rgb<u8> = Rgb([0x00, 0xff, 0x00]);
const CYAN: Rgb<u8> = Rgb([0x00, 0xff, 0xff]);
const PINK: Rgb<u8> = Rgb([0xff, 0xc0, 0xcb]);

/// Codec failure while reading or writing a world image.
#[derive(Debug, Error)]
pub enum WorldCodecError {
    #[error("failed to read world image: {0}")]
    Read(#[source] image::ImageError),
    #[error("failed to write world image: {0}")]
    Write(#[source] image::ImageError),
}

/// The pixel color a terrain category is written as.
pub fn terrain_color(tile: Terrain) -> Rgb<u8> {
    match tile {
        Terrain::Road => WHITE,
        Terrain::Sand => YELLOW,
        Terrain::Water => BLUE,
        Terrain::Mountain => GREY,
        Terrain::NonWalkable => BLACK,
        Terrain::Start => RED,
        Terrain::End => GREEN,
        Terrain::Path => CYAN,
        Terrain::Unknown => PINK,
    }
}

/// Classify a pixel color as a terrain category.
///
/// Colors outside the key classify as [`Terrain::Unknown`] and are logged.
pub fn classify(color: Rgb<u8>) -> Terrain {
    match color {
        WHITE => Terrain::Road,
        YELLOW => Terrain::Sand,
        BLUE => Terrain::Water,
        GREY => Terrain::Mountain,
        BLACK => Terrain::NonWalkable,
        RED => Terrain::Start,
        GREEN => Terrain::End,
        CYAN => Terrain::Path,
        PINK => Terrain::Unknown,
        Rgb([r, g, b]) => {
            log::warn!("unknown color in world image: #{r:02x}{g:02x}{b:02x}");
            Terrain::Unknown
        }
    }
}

/// Build a world from an in-memory image, one pixel per tile.
pub fn world_from_image(img: &RgbImage) -> TileWorld {
    let tiles = img.pixels().map(|&p| classify(p)).collect();
    TileWorld::from_tiles(img.width() as i32, img.height() as i32, tiles)
}

/// Render a world to an in-memory image, one pixel per tile.
pub fn world_to_image(world: &TileWorld) -> RgbImage {
    let mut img = RgbImage::new(world.width() as u32, world.height() as u32);
    for (p, tile) in world.iter() {
        img.put_pixel(p.x as u32, p.y as u32, terrain_color(tile));
    }
    img
}

/// Load a world from a PNG file.
pub fn load_world(path: impl AsRef<Path>) -> Result<TileWorld, WorldCodecError> {
    let img = image::open(path).map_err(WorldCodecError::Read)?;
    Ok(world_from_image(&img.to_rgb8()))
}

/// Save a world to a PNG file.
pub fn save_world(world: &TileWorld, path: impl AsRef<Path>) -> Result<(), WorldCodecError> {
    world_to_image(world)
        .save(path)
        .map_err(WorldCodecError::Write)
}
