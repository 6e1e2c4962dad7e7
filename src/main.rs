//! Beamlab entry point: headless bombardment demo.
//!
//! Plays the role of the excluded input/render collaborators: drives the
//! simulation at its fixed rate with a sweeping auto-aim cursor, alternates
//! the two firing modes, and dumps the compressed wall state as ASCII.

use std::path::Path;
use std::time::Instant;

use glam::Vec2;

use beamlab::SimConfig;
use beamlab::consts::{DEFAULT_GRID_HEIGHT, SIM_DT, SIM_RATE};
use beamlab::sim::{BlockKind, DAMAGE_SHADES, FrameOutput, SimState, TickInput, VisualState, tick};

fn shade_char(state: VisualState) -> char {
    match state {
        VisualState::Intact => '#',
        VisualState::Damaged(s) if s < DAMAGE_SHADES / 2 => '=',
        VisualState::Damaged(_) => '-',
        VisualState::Destroyed => '.',
    }
}

/// Rasterize the compressed segments back into a text frame. The draw list
/// is the only wall view the renderer gets, so the demo renders from it
/// rather than peeking at the grid.
fn render_frame(out: &FrameOutput, width: u32, height: u32) -> String {
    let mut rows = vec![vec![' '; width as usize]; height as usize];
    for seg in &out.segments {
        let ch = shade_char(seg.state);
        for r in seg.row_start..seg.row_start + seg.len {
            rows[r as usize][seg.column as usize] = ch;
        }
    }
    let mut text = String::with_capacity((width as usize + 1) * height as usize);
    for row in rows {
        text.extend(row);
        text.push('\n');
    }
    text
}

fn main() {
    env_logger::init();

    // usage: beamlab [config.json] [material]
    let mut config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(Path::new(&path)),
        None => SimConfig::default(),
    };
    if let Some(name) = std::env::args().nth(2) {
        match BlockKind::from_str(&name) {
            Some(kind) => config.block_type = kind,
            None => log::warn!(
                "unknown material {name:?}; keeping {}",
                config.block_type.as_str()
            ),
        }
    }
    let height = DEFAULT_GRID_HEIGHT;
    log::info!(
        "beamlab starting: {}x{} {} wall, selector {}",
        config.thickness,
        height,
        config.block_type.as_str(),
        config.fire_rate_selector
    );

    let mut state = SimState::new(0xB1A5_7ED);
    let total_ticks = (SIM_RATE * 8.0) as u64;
    let started = Instant::now();

    for t in 0..total_ticks {
        let secs = t as f32 * SIM_DT;
        // sweep the cursor down the wall face; short spread bursts, the two
        // triggers never held together
        let aim_y = height as f32 / 2.0 + (secs * 0.9).sin() * height as f32 / 3.0;
        let burst = (secs % 3.0) < 0.4;
        let input = TickInput {
            aim: Vec2::new(0.0, aim_y),
            focused_trigger: !burst,
            spread_trigger: burst,
            grid_height: height,
            revive: false,
        };

        let out = tick(&mut state, &config, &input);

        if (t + 1) % SIM_RATE as u64 == 0 {
            println!("--- t = {:.0}s ---", secs.ceil());
            print!("{}", render_frame(&out, state.grid.width(), height));
            for beam in &out.beams {
                println!(
                    "  beam {:?}: depth {:?}, end ({:.1}, {:.1})",
                    beam.mode, beam.depth, beam.end.x, beam.end.y
                );
            }
        }
    }

    let blocks = state.grid.blocks().len();
    let destroyed = state.grid.blocks().iter().filter(|b| !b.alive()).count();
    log::info!(
        "done in {:?}: {} shots, {:.0} damage dealt, {}/{} blocks destroyed",
        started.elapsed(),
        state.shots_fired,
        state.grid.total_damage_taken(),
        destroyed,
        blocks
    );
}
