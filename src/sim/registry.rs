//! Entity registry: ordered storage for walls and crates
//!
//! The registry is a leaf component: it stores entities and answers overlap
//! queries, nothing else. Iteration order is insertion order and is
//! load-bearing: the movement resolver commits to the *first* overlapping
//! entity it finds, which is what keeps pushes limited to a single crate.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::{AxisStep, Rect};
use crate::consts::{BLOCK_HEIGHT_COUNT, BLOCK_WIDTH_COUNT, ENTITY_CAPACITY, SPRITE_SIZE};

/// Registry failure modes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Insertion past the fixed entity capacity. Startup-only condition:
    /// the entity count never changes during play.
    #[error("entity capacity ({ENTITY_CAPACITY}) exceeded")]
    CapacityExceeded,
}

/// Discrete tag the renderer maps to a visual asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Wall,
    Crate,
}

/// One static wall tile or one movable crate
///
/// Every entity occupies a `SPRITE_SIZE × SPRITE_SIZE` square anchored at
/// `pos` (top-left, pixels). Non-pushable entities never move after
/// initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: IVec2,
    pub pushable: bool,
}

impl Entity {
    pub fn wall(pos: IVec2) -> Self {
        Self {
            pos,
            pushable: false,
        }
    }

    pub fn movable(pos: IVec2) -> Self {
        Self {
            pos,
            pushable: true,
        }
    }

    pub fn kind(&self) -> EntityKind {
        if self.pushable {
            EntityKind::Crate
        } else {
            EntityKind::Wall
        }
    }

    /// The tile square this entity occupies
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x as f32,
            self.pos.y as f32,
            SPRITE_SIZE as f32,
            SPRITE_SIZE as f32,
        )
    }
}

/// Ordered, capacity-bounded collection of all static/movable grid objects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity, returning its stable index
    pub fn add(&mut self, entity: Entity) -> Result<usize, RegistryError> {
        if self.entities.len() >= ENTITY_CAPACITY {
            return Err(RegistryError::CapacityExceeded);
        }
        self.entities.push(entity);
        Ok(self.entities.len() - 1)
    }

    /// Read-only view of all entities, in insertion order
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, index: usize) -> &Entity {
        &self.entities[index]
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Overwrite an entity's position, bypassing collision (crate reset).
    /// An out-of-bounds index is a caller bug and panics.
    pub fn set_position(&mut self, index: usize, pos: IVec2) {
        self.entities[index].pos = pos;
    }

    /// Nudge an entity by a single-axis step.
    ///
    /// Entity positions are integer, so the float step truncates toward
    /// zero on commit.
    pub fn translate(&mut self, index: usize, step: AxisStep) {
        let v = step.as_vec();
        self.entities[index].pos += IVec2::new(v.x as i32, v.y as i32);
    }

    /// First entity whose square has positive-area overlap with `candidate`,
    /// scanning in insertion order and skipping `exclude` (the entity being
    /// moved, when the candidate is a crate's own trial position).
    pub fn first_overlap(&self, candidate: Rect, exclude: Option<usize>) -> Option<usize> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != exclude)
            .find(|(_, e)| e.rect().overlaps(&candidate))
            .map(|(i, _)| i)
    }

    /// Lay a one-tile-thick rectangular wall perimeter.
    ///
    /// Top and bottom rows go in first (full width), then the left and right
    /// columns for the interior rows, so corner tiles are emitted exactly
    /// once. Produces `2*w + 2*(h - 2)` walls.
    pub fn push_perimeter(&mut self) -> Result<(), RegistryError> {
        for i in 0..BLOCK_WIDTH_COUNT {
            let x = i * SPRITE_SIZE;
            self.add(Entity::wall(IVec2::new(x, 0)))?;
            self.add(Entity::wall(IVec2::new(
                x,
                (BLOCK_HEIGHT_COUNT - 1) * SPRITE_SIZE,
            )))?;
        }
        for i in 1..BLOCK_HEIGHT_COUNT - 1 {
            let y = i * SPRITE_SIZE;
            self.add(Entity::wall(IVec2::new(0, y)))?;
            self.add(Entity::wall(IVec2::new(
                (BLOCK_WIDTH_COUNT - 1) * SPRITE_SIZE,
                y,
            )))?;
        }
        Ok(())
    }
}
