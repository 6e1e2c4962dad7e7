//! Fixed timestep simulation tick.
//!
//! One call advances the whole simulation by one step: regenerate the wall
//! from config (idempotent), run the fire gates, trace any shots into the
//! grid, and compress the result into draw instructions. The caller owns
//! scheduling; ticks below the frame interval are skipped entirely, never
//! interpolated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::consts::SPREAD_RAY_COUNT;

use super::damage::{RayEnd, trace_ray};
use super::segments::{Segment, compress};
use super::spread::{SpreadParams, fire_spread};
use super::state::SimState;

/// Input for a single tick, supplied by the input/render collaborators.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cursor position in grid-local block units (x into the wall).
    pub aim: Vec2,
    /// Focused-beam trigger held.
    pub focused_trigger: bool,
    /// Spread-beam trigger held.
    pub spread_trigger: bool,
    /// Wall height in blocks, tracking the render surface.
    pub grid_height: u32,
    /// Restore every block to full hp this tick.
    pub revive: bool,
}

/// Which firing mode produced a beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamMode {
    Focused,
    Spread,
}

/// Drawable description of one fired beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub mode: BeamMode,
    /// Emitter position in block units; the wall's front face is x = 0.
    pub start: Vec2,
    /// Where the beam visibly stopped: side exit, absorption point, or the
    /// back face.
    pub end: Vec2,
    /// Deepest column damaged, if any block was hit.
    pub depth: Option<u32>,
}

/// Draw instructions produced by one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub segments: Vec<Segment>,
    pub beams: Vec<Beam>,
}

fn beam_endpoints(
    angle: f32,
    depth: Option<u32>,
    end: RayEnd,
    width: u32,
    height: u32,
    range: f32,
) -> (Vec2, Vec2) {
    let half_height = height as f32 / 2.0;
    let start = Vec2::new(-range, half_height);
    let end_x = match end {
        RayEnd::Pierced => width as f32,
        // stop at the far edge of the last column hit, or the front face
        // when nothing was
        _ => depth.map(|d| d as f32 + 1.0).unwrap_or(0.0),
    };
    let end_y = angle.tan() * (end_x + range) + half_height;
    (start, Vec2::new(end_x, end_y))
}

/// Advance the simulation by one fixed timestep.
pub fn tick(state: &mut SimState, config: &SimConfig, input: &TickInput) -> FrameOutput {
    state.time_ticks += 1;
    let now = state.time_secs();

    state
        .grid
        .generate(config.thickness, input.grid_height, config.block_type);
    if input.revive {
        state.grid.revive_all();
    }

    let height = state.grid.height();
    let width = state.grid.width();
    let base_angle = (input.aim.y - height as f32 / 2.0).atan2(input.aim.x + config.range);
    let selector = config.fire_rate_selector;

    let mut beams = Vec::new();

    if state
        .focused_gate
        .try_fire(now, selector, input.focused_trigger)
    {
        let angle = base_angle + state.rng.angle_jitter(config.inaccuracy_degrees.to_radians());
        let budget = config.shot_budget();
        let trace = trace_ray(&mut state.grid, angle, budget, config.intensity, config.range);
        state.shots_fired += 1;
        log::debug!(
            "focused shot: angle {:.4}, budget {:.1}, depth {:?}, {:?}",
            angle,
            budget,
            trace.depth,
            trace.end
        );
        let (start, end) =
            beam_endpoints(angle, trace.depth, trace.end, width, height, config.range);
        beams.push(Beam {
            mode: BeamMode::Focused,
            start,
            end,
            depth: trace.depth,
        });
    }

    if state
        .spread_gate
        .try_fire(now, selector, input.spread_trigger)
    {
        let angle = base_angle + state.rng.angle_jitter(config.inaccuracy_degrees.to_radians());
        let budget = config.shot_budget();
        let params = SpreadParams {
            budget,
            intensity: config.intensity,
            range: config.range,
            spread_power: budget * config.stability_spread / 100.0,
            expansion: config.expansion_constant,
            ray_count: SPREAD_RAY_COUNT,
        };
        let trace = fire_spread(&mut state.grid, angle, &params);
        state.shots_fired += 1;
        log::debug!(
            "spread shot: angle {:.4}, budget {:.1}, max depth {:?}",
            angle,
            budget,
            trace.max_depth
        );
        let (start, end) = beam_endpoints(
            angle,
            trace.center.depth,
            trace.center.end,
            width,
            height,
            config.range,
        );
        beams.push(Beam {
            mode: BeamMode::Spread,
            start,
            end,
            depth: trace.max_depth,
        });
    }

    FrameOutput {
        segments: compress(&state.grid),
        beams,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::block::BlockKind;

    fn center_aim(height: u32) -> TickInput {
        TickInput {
            aim: Vec2::new(0.0, height as f32 / 2.0),
            grid_height: height,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_regenerates_grid_from_config() {
        let mut state = SimState::new(1);
        let config = SimConfig::default();
        let input = center_aim(30);

        let out = tick(&mut state, &config, &input);
        assert_eq!(state.grid.width(), 40);
        assert_eq!(state.grid.height(), 30);
        assert_eq!(state.grid.kind(), BlockKind::Metal);
        // intact wall: one segment per column, no beams without a trigger
        assert_eq!(out.segments.len(), 40);
        assert!(out.beams.is_empty());
    }

    #[test]
    fn test_continuous_fire_damages_front_block() {
        let mut state = SimState::new(1);
        // no jitter: aiming at y = height/2 sits on the row 14/15 boundary,
        // and any negative wobble would tip the hit into row 14
        let config = SimConfig {
            inaccuracy_degrees: 0.0,
            ..Default::default()
        };
        let mut input = center_aim(30);
        input.focused_trigger = true;

        let out = tick(&mut state, &config, &input);
        assert_eq!(state.shots_fired, 1);
        assert_eq!(out.beams.len(), 1);
        assert_eq!(out.beams[0].mode, BeamMode::Focused);
        assert_eq!(out.beams[0].depth, Some(0));
        let front = state.grid.block(0, 15);
        assert!(front.hp < front.max_hp);
    }

    #[test]
    fn test_boundary_aim_with_jitter_stays_near_center() {
        // aiming exactly at the row 14/15 boundary with the default wobble:
        // the shot may tip either way, but it always lands in one of the
        // two center rows
        let mut state = SimState::new(1);
        let config = SimConfig::default();
        let mut input = center_aim(30);
        input.focused_trigger = true;

        let out = tick(&mut state, &config, &input);
        assert_eq!(out.beams[0].depth, Some(0));
        let center_damage: f32 = (14..=15)
            .map(|y| {
                let b = state.grid.block(0, y);
                b.max_hp - b.hp
            })
            .sum();
        assert!(center_damage > 0.0);
        assert_eq!(state.grid.total_damage_taken(), center_damage);
    }

    #[test]
    fn test_continuous_mode_fires_every_tick() {
        let mut state = SimState::new(3);
        let config = SimConfig::default(); // selector 0
        let mut input = center_aim(20);
        input.focused_trigger = true;

        for _ in 0..10 {
            tick(&mut state, &config, &input);
        }
        assert_eq!(state.shots_fired, 10);
    }

    #[test]
    fn test_slow_selector_fires_once_per_interval() {
        let mut state = SimState::new(3);
        let config = SimConfig {
            fire_rate_selector: 4, // 1 Hz
            ..Default::default()
        };
        let mut input = center_aim(20);
        input.focused_trigger = true;

        // half a second of held trigger: exactly one shot
        for _ in 0..30 {
            tick(&mut state, &config, &input);
        }
        assert_eq!(state.shots_fired, 1);
    }

    #[test]
    fn test_spread_trigger_fires_spread_mode() {
        let mut state = SimState::new(9);
        let config = SimConfig::default();
        let mut input = center_aim(30);
        input.spread_trigger = true;

        let out = tick(&mut state, &config, &input);
        assert_eq!(out.beams.len(), 1);
        assert_eq!(out.beams[0].mode, BeamMode::Spread);
        assert!(state.grid.total_damage_taken() > 0.0);
    }

    #[test]
    fn test_revive_restores_full_hp() {
        let mut state = SimState::new(1);
        let config = SimConfig::default();
        let mut input = center_aim(30);
        input.focused_trigger = true;
        for _ in 0..20 {
            tick(&mut state, &config, &input);
        }
        assert!(state.grid.total_damage_taken() > 0.0);

        input.focused_trigger = false;
        input.revive = true;
        tick(&mut state, &config, &input);
        assert_eq!(state.grid.total_damage_taken(), 0.0);
    }

    #[test]
    fn test_beam_geometry_starts_at_emitter() {
        let mut state = SimState::new(1);
        let config = SimConfig::default();
        let mut input = center_aim(30);
        input.focused_trigger = true;

        let out = tick(&mut state, &config, &input);
        let beam = &out.beams[0];
        assert_eq!(beam.start, Vec2::new(-config.range, 15.0));
        // absorbed in the front column: visible extent ends inside the wall
        assert!(beam.end.x > 0.0 && beam.end.x <= state.grid.width() as f32);
    }

    #[test]
    fn test_determinism_across_identical_runs() {
        let mut a = SimState::new(777);
        let mut b = SimState::new(777);
        let config = SimConfig::default();

        for i in 0..60u32 {
            let input = TickInput {
                aim: Vec2::new(0.0, 10.0 + (i as f32 * 0.1).sin() * 5.0),
                focused_trigger: i % 3 != 0,
                spread_trigger: i % 7 == 0,
                grid_height: 30,
                revive: false,
            };
            let out_a = tick(&mut a, &config, &input);
            let out_b = tick(&mut b, &config, &input);
            assert_eq!(out_a, out_b);
        }
        assert_eq!(a, b);
    }
}
