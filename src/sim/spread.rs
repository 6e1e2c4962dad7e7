//! Multi-ray beam spread.
//!
//! A spread beam is a bundle of independent parallel sub-rays sharing the
//! total power evenly. Sub-rays are spaced by lateral fraction, not by
//! angle, so the apparent beam width stays uniform with range.

use super::damage::{RayEnd, RayTrace, trace_ray};
use super::grid::Grid;

/// Tuning for one spread shot.
#[derive(Debug, Clone, Copy)]
pub struct SpreadParams {
    /// Total damage budget, split evenly across the bundle.
    pub budget: f32,
    pub intensity: f32,
    /// Emitter standoff in block units.
    pub range: f32,
    /// Power driving lateral extent (budget scaled by the stability
    /// percentage).
    pub spread_power: f32,
    /// Divisor converting spread power into lateral block units.
    pub expansion: f32,
    /// Rays in the bundle; forced odd so one ray is always the centerline.
    pub ray_count: u32,
}

/// Aggregate of one spread shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadTrace {
    /// The centerline sub-ray's trace (used for the drawn beam axis).
    pub center: RayTrace,
    /// Deepest column damaged by any sub-ray.
    pub max_depth: Option<u32>,
}

/// Fire the whole bundle. Each sub-ray at lateral fraction
/// `f = i / half_count` in `[-1, 1]` gets the offset angle
/// `atan2(f * spread_power / expansion, range)` and an independent
/// `budget / ray_count` share; leftovers never transfer between rays.
pub fn fire_spread(grid: &mut Grid, base_angle: f32, params: &SpreadParams) -> SpreadTrace {
    let count = params.ray_count.max(1) | 1;
    let half = (count / 2) as i32;
    let share = params.budget / count as f32;

    let mut center = RayTrace {
        depth: None,
        end: RayEnd::Pierced,
        remaining: 0.0,
    };
    let mut max_depth = None;

    for i in -half..=half {
        let frac = if half == 0 { 0.0 } else { i as f32 / half as f32 };
        let offset = (frac * params.spread_power / params.expansion).atan2(params.range);
        let trace = trace_ray(
            grid,
            base_angle + offset,
            share,
            params.intensity,
            params.range,
        );
        max_depth = max_depth.max(trace.depth);
        if i == 0 {
            center = trace;
        }
    }

    SpreadTrace { center, max_depth }
}
