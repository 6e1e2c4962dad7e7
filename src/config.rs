//! Weapon and wall configuration.
//!
//! One `SimConfig` value is passed into every tick; the form/UI collaborator
//! that edits it lives outside the core. All numeric fields are non-negative
//! by contract and `sanitized()` re-establishes that after deserializing
//! untrusted input.

use serde::{Deserialize, Serialize};

use crate::sim::BlockKind;
use crate::sim::gate::rate_hz;

/// The per-tick configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Emitter standoff from the wall's front face, in block units.
    pub range: f32,
    /// Total beam output per second of continuous fire.
    pub power_per_second: f32,
    /// Weapon concentration; divides against block resistance for the
    /// mitigation factor.
    pub intensity: f32,
    /// Percent of damage lost per block unit of range, applied once before
    /// traversal.
    pub attenuation_percent: f32,
    /// Percent multiplier on the spread beam's half-width.
    pub stability_spread: f32,
    /// Fire-rate selector 0..=4; 0 is continuous fire.
    pub fire_rate_selector: u8,
    /// Wall material.
    pub block_type: BlockKind,
    /// Wall thickness (grid width) in blocks.
    pub thickness: u32,
    /// Random aim wobble applied per shot, in degrees.
    pub inaccuracy_degrees: f32,
    /// Divisor converting beam power into lateral spread extent.
    pub expansion_constant: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            range: 50.0,
            power_per_second: 1000.0,
            intensity: 60.0,
            attenuation_percent: 1.0,
            stability_spread: 100.0,
            fire_rate_selector: 0,
            block_type: BlockKind::Metal,
            thickness: 40,
            inaccuracy_degrees: 0.05,
            expansion_constant: 10_000.0,
        }
    }
}

impl SimConfig {
    /// Clamp every numeric field to its documented domain.
    pub fn sanitized(mut self) -> Self {
        self.range = self.range.max(0.0);
        self.power_per_second = self.power_per_second.max(0.0);
        self.intensity = self.intensity.max(0.0);
        self.attenuation_percent = self.attenuation_percent.clamp(0.0, 100.0);
        self.stability_spread = self.stability_spread.max(0.0);
        self.fire_rate_selector = self.fire_rate_selector.min(4);
        self.inaccuracy_degrees = self.inaccuracy_degrees.max(0.0);
        self.expansion_constant = self.expansion_constant.max(f32::EPSILON);
        self
    }

    /// Damage budget carried by one shot at the current fire rate, after
    /// range attenuation.
    pub fn shot_budget(&self) -> f32 {
        let per_shot = self.power_per_second / rate_hz(self.fire_rate_selector);
        let kept_per_unit = 1.0 - (self.attenuation_percent / 100.0).clamp(0.0, 1.0);
        per_shot * kept_per_unit.powf(self.range)
    }

    /// Load a config from a JSON file, falling back to defaults if the file
    /// is missing or malformed.
    pub fn load(path: &std::path::Path) -> Self {
        fn read(path: &std::path::Path) -> Result<SimConfig, Box<dyn std::error::Error>> {
            Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
        }
        match read(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config.sanitized()
            }
            Err(e) => {
                log::warn!("Config load failed ({e}); using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_RATE;

    #[test]
    fn test_shot_budget_splits_power_by_rate() {
        let config = SimConfig {
            attenuation_percent: 0.0,
            fire_rate_selector: 4, // 1 Hz: whole second of power per shot
            ..Default::default()
        };
        assert_eq!(config.shot_budget(), 1000.0);

        let continuous = SimConfig {
            attenuation_percent: 0.0,
            ..Default::default()
        };
        let expected = 1000.0 / SIM_RATE;
        assert!((continuous.shot_budget() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_attenuation_decays_with_range() {
        let near = SimConfig {
            range: 0.0,
            ..Default::default()
        };
        let far = SimConfig {
            range: 100.0,
            ..Default::default()
        };
        assert!(far.shot_budget() < near.shot_budget());
        // 1% loss per unit over 100 units keeps ~0.99^100
        let expected = (1000.0 / SIM_RATE) * 0.99f32.powf(100.0);
        assert!((far.shot_budget() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_full_attenuation_zeroes_budget() {
        let config = SimConfig {
            attenuation_percent: 100.0,
            range: 1.0,
            ..Default::default()
        };
        assert_eq!(config.shot_budget(), 0.0);
    }

    #[test]
    fn test_sanitized_clamps_domains() {
        let config = SimConfig {
            range: -5.0,
            power_per_second: -1.0,
            attenuation_percent: 250.0,
            fire_rate_selector: 17,
            expansion_constant: 0.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.range, 0.0);
        assert_eq!(config.power_per_second, 0.0);
        assert_eq!(config.attenuation_percent, 100.0);
        assert_eq!(config.fire_rate_selector, 4);
        assert!(config.expansion_constant > 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimConfig {
            block_type: BlockKind::Heavy,
            thickness: 12,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let back: SimConfig = serde_json::from_str(r#"{"thickness": 8}"#).unwrap();
        assert_eq!(back.thickness, 8);
        assert_eq!(back.power_per_second, 1000.0);
    }
}
