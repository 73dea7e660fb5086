//! Cargoshift demo entry point
//!
//! The real game wires a window, textures, and input polling around the sim;
//! this binary stands in for that layer with a scripted fixed-timestep run
//! and an ASCII board dump, which is enough to watch a push happen.

use cargoshift::consts::{BLOCK_HEIGHT_COUNT, BLOCK_WIDTH_COUNT, SPRITE_SIZE};
use cargoshift::sim::{EntityKind, GameState, RegistryError, TickInput, tick};

const DEMO_DT: f32 = 1.0 / 60.0;

fn main() -> Result<(), RegistryError> {
    env_logger::init();

    let mut state = GameState::new()?;
    log::info!("starting scripted demo run");

    // Hold right for three seconds: walk into the crate and shove it into
    // the east wall, then snap it home again.
    for frame in 0..240u32 {
        let input = TickInput {
            right: frame < 180,
            reset_crate: frame == 220,
            ..Default::default()
        };
        tick(&mut state, &input, DEMO_DT);

        if frame % 60 == 59 {
            println!("--- t = {:.1}s ---", (frame + 1) as f32 * DEMO_DT);
            print_board(&state);
        }
    }

    log::info!("demo finished");
    Ok(())
}

/// Coarse tile-grid view of the arena (entities snap to their nearest tile)
fn print_board(state: &GameState) {
    let mut rows =
        vec![vec![b'.'; BLOCK_WIDTH_COUNT as usize]; BLOCK_HEIGHT_COUNT as usize];

    let mut plot = |x: i32, y: i32, glyph: u8| {
        let tx = (x / SPRITE_SIZE).clamp(0, BLOCK_WIDTH_COUNT - 1) as usize;
        let ty = (y / SPRITE_SIZE).clamp(0, BLOCK_HEIGHT_COUNT - 1) as usize;
        rows[ty][tx] = glyph;
    };

    for entity in state.registry.all() {
        let glyph = match entity.kind() {
            EntityKind::Wall => b'#',
            EntityKind::Crate => b'C',
        };
        plot(entity.pos.x, entity.pos.y, glyph);
    }
    plot(
        state.player.rect.pos.x as i32,
        state.player.rect.pos.y as i32,
        b'@',
    );

    for row in rows {
        println!("{}", String::from_utf8_lossy(&row));
    }
}
