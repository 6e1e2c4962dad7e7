//! Shot-rate gating.

use serde::{Deserialize, Serialize};

use crate::consts::SIM_RATE;

/// Shots per second for each fire-rate selector position. Index 0 is the
/// continuous mode: one shot per eligible tick, no interval check.
pub const FIRE_RATE_HZ: [f32; 5] = [SIM_RATE, 20.0, 10.0, 4.0, 1.0];

/// Table lookup, clamping out-of-range selectors to the slowest rate.
pub fn rate_hz(selector: u8) -> f32 {
    FIRE_RATE_HZ[(selector as usize).min(FIRE_RATE_HZ.len() - 1)]
}

/// Minimum-interval gate for one firing mode.
///
/// READY until a shot fires, then COOLING until the selector's interval has
/// elapsed. Releasing the trigger suppresses firing but never resets the
/// cooldown clock; `last_shot` only moves when a shot is actually taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateGate {
    last_shot: Option<f32>,
}

impl RateGate {
    pub fn is_ready(&self, now: f32, selector: u8) -> bool {
        if selector == 0 {
            return true;
        }
        match self.last_shot {
            None => true,
            Some(t) => now - t >= 1.0 / rate_hz(selector),
        }
    }

    /// Fire if the trigger is held and the interval has elapsed. Returns
    /// whether a shot was taken.
    pub fn try_fire(&mut self, now: f32, selector: u8, trigger: bool) -> bool {
        if !trigger || !self.is_ready(now, selector) {
            return false;
        }
        self.last_shot = Some(now);
        true
    }
}
