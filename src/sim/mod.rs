//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One resolution pass per tick, no hidden frame state
//! - Stable entity iteration order (insertion order, walls then crate)
//! - No rendering or platform dependencies

pub mod collision;
pub mod registry;
pub mod state;
pub mod tick;

pub use collision::{AxisStep, Rect};
pub use registry::{Entity, EntityKind, EntityRegistry, RegistryError};
pub use state::{GameState, Player};
pub use tick::{TickInput, movement_delta, tick};
