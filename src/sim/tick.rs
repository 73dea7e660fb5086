//! Per-frame movement resolution
//!
//! Converts the frame's input snapshot into a scaled movement intent, then
//! resolves it one axis at a time against the entity registry: horizontal
//! first, vertical second against the already-committed horizontal result.
//! Resolution is atomic per axis; no partially-applied state is ever visible
//! outside a tick.

use glam::Vec2;

use super::collision::AxisStep;
use super::state::GameState;
use crate::consts::PLAYER_SPEED;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction flags, held per frame
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Edge-triggered: snap the crate back to its spawn tile this frame
    pub reset_crate: bool,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.reset_crate {
        state.reset_crate();
    }
    resolve_movement(state, movement_delta(input, dt));
}

/// Scaled movement intent for this frame
///
/// Opposite flags cancel. A live diagonal is normalized to unit length
/// before scaling, so diagonal speed equals axial speed.
pub fn movement_delta(input: &TickInput, dt: f32) -> Vec2 {
    let dir = Vec2::new(
        (input.right as i32 - input.left as i32) as f32,
        (input.down as i32 - input.up as i32) as f32,
    );
    dir.normalize_or_zero() * PLAYER_SPEED * dt
}

/// Resolve a movement intent against the registry, axis by axis
pub fn resolve_movement(state: &mut GameState, delta: Vec2) {
    if delta.x != 0.0 {
        resolve_axis(state, AxisStep::X(delta.x));
    }
    if delta.y != 0.0 {
        resolve_axis(state, AxisStep::Y(delta.y));
    }
}

/// Resolve one axis step for the player
///
/// - Clear path: the player commits the full float step.
/// - Wall in the way: the whole axis step is discarded (no partial slide).
/// - Crate in the way: try to push it. Crate positions are integer, so the
///   push step truncates toward zero and *both* mover and crate commit that
///   same truncated delta, keeping their separation intact. If the crate's
///   trial square is itself obstructed, neither moves.
///
/// Only the first overlapping entity in registry order is ever considered,
/// so a second crate stacked behind the first blocks the push outright
/// rather than being displaced (no chain-pushing).
fn resolve_axis(state: &mut GameState, step: AxisStep) {
    let candidate = state.player.rect.translated(step);
    let Some(hit) = state.registry.first_overlap(candidate, None) else {
        state.player.rect = candidate;
        return;
    };
    if !state.registry.get(hit).pushable {
        return;
    }

    let push = quantized(step);
    if push.delta() == 0.0 {
        return;
    }
    let crate_candidate = state.registry.get(hit).rect().translated(push);
    if state.registry.first_overlap(crate_candidate, Some(hit)).is_none() {
        state.registry.translate(hit, push);
        state.player.rect = state.player.rect.translated(push);
    }
}

/// The step truncated to a whole-pixel delta (toward zero)
fn quantized(step: AxisStep) -> AxisStep {
    match step {
        AxisStep::X(dx) => AxisStep::X(dx.trunc()),
        AxisStep::Y(dy) => AxisStep::Y(dy.trunc()),
    }
}
