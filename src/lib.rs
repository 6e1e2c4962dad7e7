//! Beamlab - destructible armor wall vs. directional energy beam
//!
//! Core modules:
//! - `sim`: Deterministic ballistics simulation (grid, ray traversal,
//!   spread, fire gating, segment compression)
//! - `config`: The per-tick configuration record
//!
//! Rendering, input capture, and window/canvas management are external
//! collaborators: they feed `TickInput` + `SimConfig` in and consume the
//! `FrameOutput` draw instructions coming back.

pub mod config;
pub mod sim;

pub use config::SimConfig;

/// Simulation constants
pub mod consts {
    /// Fixed simulation rate, one tick per rendered frame.
    pub const SIM_RATE: f32 = 60.0;
    /// Fixed simulation timestep.
    pub const SIM_DT: f32 = 1.0 / SIM_RATE;

    /// Sub-rays in a spread beam bundle (odd so one is the centerline).
    pub const SPREAD_RAY_COUNT: u32 = 31;
    /// Default wall height in blocks when the driver has no surface to
    /// measure.
    pub const DEFAULT_GRID_HEIGHT: u32 = 30;
}
