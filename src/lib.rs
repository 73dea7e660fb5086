//! Cargoshift - a minimal crate-pushing puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity registry, movement & collision
//!   resolution, game state)
//!
//! Window creation, textures, and input polling live outside this crate: the
//! frame-loop owner feeds `sim::TickInput` in and reads positions plus
//! `sim::EntityKind` tags out for drawing.

pub mod sim;

pub use sim::{EntityKind, GameState, TickInput, tick};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Side length of one grid tile, in pixels
    pub const SPRITE_SIZE: i32 = 64;

    /// Arena size in tiles
    pub const BLOCK_WIDTH_COUNT: i32 = 13;
    pub const BLOCK_HEIGHT_COUNT: i32 = 10;

    /// Arena size in pixels
    pub const ARENA_WIDTH: i32 = BLOCK_WIDTH_COUNT * SPRITE_SIZE;
    pub const ARENA_HEIGHT: i32 = BLOCK_HEIGHT_COUNT * SPRITE_SIZE;

    /// Hard cap on registry entities
    pub const ENTITY_CAPACITY: usize = 256;

    /// Player movement speed in pixels/second
    pub const PLAYER_SPEED: f32 = 250.0;

    /// Player collision rectangle, slightly smaller than a tile so the
    /// player can thread one-tile gaps
    pub const PLAYER_WIDTH: f32 = (SPRITE_SIZE - 28) as f32;
    pub const PLAYER_HEIGHT: f32 = (SPRITE_SIZE - 20) as f32;
}

/// Top-left pixel position of the tile at grid coordinates (tx, ty)
#[inline]
pub fn tile_origin(tx: i32, ty: i32) -> IVec2 {
    IVec2::new(tx * consts::SPRITE_SIZE, ty * consts::SPRITE_SIZE)
}
