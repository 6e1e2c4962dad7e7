//! Deterministic simulation module
//!
//! All ballistics and damage logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single-threaded mutation within one tick
//! - No rendering or platform dependencies

pub mod block;
pub mod damage;
pub mod gate;
pub mod grid;
pub mod segments;
pub mod spread;
pub mod state;
pub mod tick;

pub use block::{Block, BlockKind, BlockProfile, DAMAGE_SHADES, VisualState};
pub use damage::{RayEnd, RayTrace, ray_row, trace_ray};
pub use gate::{FIRE_RATE_HZ, RateGate, rate_hz};
pub use grid::Grid;
pub use segments::{Segment, compress};
pub use spread::{SpreadParams, SpreadTrace, fire_spread};
pub use state::{ShotRng, SimState};
pub use tick::{Beam, BeamMode, FrameOutput, TickInput, tick};
