//! Game state: the explicit simulation context
//!
//! Everything the movement resolver touches lives in one `GameState` owned by
//! the frame-loop caller, so the sim can be constructed and exercised in
//! isolation (no process-wide setup).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::registry::{Entity, EntityRegistry, RegistryError};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH, SPRITE_SIZE};
use crate::tile_origin;

/// The sole moving actor, distinct from the registry
///
/// The collision rectangle doubles as the render rectangle; it is smaller
/// than a tile so the player can slip through one-tile corridors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                ((ARENA_WIDTH - SPRITE_SIZE) / 2) as f32,
                ((ARENA_HEIGHT - SPRITE_SIZE) / 2) as f32,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
        }
    }
}

/// Complete simulation state (serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// All walls and the crate, in creation order (walls first, crate last)
    pub registry: EntityRegistry,
    /// The player rectangle, mutated in place by the resolver
    pub player: Player,
    /// Registry index of the crate, stable for the lifetime of the session
    crate_index: usize,
    /// Where the reset affordance snaps the crate back to
    crate_spawn: IVec2,
}

impl GameState {
    /// Build the startup level: perimeter walls, a 2x2 grid of interior
    /// pillar walls, and one crate. Fails only if the fixed entity capacity
    /// is exceeded, which a correct layout never does.
    pub fn new() -> Result<Self, RegistryError> {
        let mut registry = EntityRegistry::new();
        registry.push_perimeter()?;

        // Interior pillars sit on half-tile offsets (2.5 tiles in), which is
        // what makes squeezing the crate past them interesting.
        let half = SPRITE_SIZE * 5 / 2;
        for &y in &[half, half + half] {
            for &x in &[half, half + half] {
                registry.add(Entity::wall(IVec2::new(x, y)))?;
            }
        }

        let crate_spawn = tile_origin(7, 4);
        let crate_index = registry.add(Entity::movable(crate_spawn))?;

        log::info!(
            "level built: {} entities, crate at index {}",
            registry.len(),
            crate_index
        );

        Ok(Self {
            registry,
            player: Player::default(),
            crate_index,
            crate_spawn,
        })
    }

    pub fn crate_index(&self) -> usize {
        self.crate_index
    }

    pub fn crate_entity(&self) -> &Entity {
        self.registry.get(self.crate_index)
    }

    /// Snap the crate back to its spawn tile, bypassing collision entirely
    /// (a teleport, not a moved step). Idempotent.
    pub fn reset_crate(&mut self) {
        log::debug!("crate reset to {:?}", self.crate_spawn);
        self.registry.set_position(self.crate_index, self.crate_spawn);
    }
}
