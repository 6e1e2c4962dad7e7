//! Single-ray traversal through the armor wall.
//!
//! The wall is traversed one column of depth at a time; the ray's row at
//! each depth comes from its angle and the emitter standoff. This is a
//! deliberate 1D-per-column approximation, not a 2D ray march.

use super::grid::Grid;

/// How a traced ray ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayEnd {
    /// Drifted past the top or bottom face before reaching the back.
    Exited,
    /// Damage budget spent inside the wall.
    Absorbed,
    /// Reached the back face with budget to spare.
    Pierced,
}

/// Outcome of tracing one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTrace {
    /// Deepest column that took damage; `None` if no block was ever hit.
    pub depth: Option<u32>,
    pub end: RayEnd,
    /// Budget left when the ray ended.
    pub remaining: f32,
}

/// Row occupied by a ray at horizontal distance `d` from the front face.
///
/// The emitter sits `range` block units in front of the wall at half
/// height, so the geometry stays consistent however far away it notionally
/// is.
#[inline]
pub fn ray_row(angle: f32, d: f32, range: f32, height: u32) -> i64 {
    (angle.tan() * (d + range) + height as f32 / 2.0).floor() as i64
}

/// Trace one ray through the grid, damaging blocks front to back.
///
/// `budget` is the shot's damage after range attenuation; `angle` already
/// includes any inaccuracy jitter. Each hit block consumes part of the
/// budget (see `Block::apply_damage`) and the leftover carries to the next
/// obstruction. When the ray's row shifts between one depth and the next,
/// the leftover also bleeds into the next row of the current column:
/// one adjacent block at most, modeling the footprint crossing a block
/// boundary.
pub fn trace_ray(grid: &mut Grid, angle: f32, budget: f32, intensity: f32, range: f32) -> RayTrace {
    let height = grid.height();
    let rows = height as i64;
    let mut remaining = budget;
    let mut depth = None;

    for d in 0..grid.width() {
        let row = ray_row(angle, d as f32, range, height);
        if row < 0 || row >= rows {
            return RayTrace {
                depth,
                end: RayEnd::Exited,
                remaining,
            };
        }
        remaining -= grid
            .block_mut(d, row as u32)
            .apply_damage(remaining, intensity);
        depth = Some(d);

        let next_row = ray_row(angle, d as f32 + 1.0, range, height);
        if remaining > 0.0 && next_row != row && next_row >= 0 && next_row < rows {
            remaining -= grid
                .block_mut(d, next_row as u32)
                .apply_damage(remaining, intensity);
        }

        if remaining <= 0.0 {
            return RayTrace {
                depth,
                end: RayEnd::Absorbed,
                remaining: 0.0,
            };
        }
    }

    RayTrace {
        depth,
        end: RayEnd::Pierced,
        remaining,
    }
}
