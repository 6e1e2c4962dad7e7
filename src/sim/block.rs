//! Destructible armor blocks and their material profiles.

use serde::{Deserialize, Serialize};

/// Armor material, selecting a static stat profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    Wood,
    Stone,
    Alloy,
    #[default]
    Metal,
    Heavy,
}

/// Stats shared by every block of one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockProfile {
    pub max_hp: f32,
    /// Reserved: carried per material, not consumed by the damage model.
    pub flammability: f32,
    /// Mitigation denominator; strictly positive in every profile.
    pub resistance: f32,
    pub base_color: &'static str,
}

impl BlockKind {
    pub const fn profile(self) -> &'static BlockProfile {
        match self {
            BlockKind::Wood => &BlockProfile {
                max_hp: 960.0,
                flammability: 80.0,
                resistance: 10.0,
                base_color: "#c9b069",
            },
            BlockKind::Stone => &BlockProfile {
                max_hp: 1200.0,
                flammability: 0.0,
                resistance: 50.0,
                base_color: "#a39260",
            },
            BlockKind::Alloy => &BlockProfile {
                max_hp: 1440.0,
                flammability: 25.0,
                resistance: 50.0,
                base_color: "#aeb2b5",
            },
            BlockKind::Metal => &BlockProfile {
                max_hp: 1680.0,
                flammability: 0.0,
                resistance: 40.0,
                base_color: "#7e868c",
            },
            BlockKind::Heavy => &BlockProfile {
                max_hp: 6000.0,
                flammability: 25.0,
                resistance: 60.0,
                base_color: "#44515e",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Wood => "wood",
            BlockKind::Stone => "stone",
            BlockKind::Alloy => "alloy",
            BlockKind::Metal => "metal",
            BlockKind::Heavy => "heavy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wood" => Some(BlockKind::Wood),
            "stone" => Some(BlockKind::Stone),
            "alloy" => Some(BlockKind::Alloy),
            "metal" => Some(BlockKind::Metal),
            "heavy" => Some(BlockKind::Heavy),
            _ => None,
        }
    }
}

/// Number of shade levels used for partially damaged blocks.
pub const DAMAGE_SHADES: u8 = 16;

/// Render key for a block. Segment runs merge on equality, so the damage
/// fraction is quantized rather than exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualState {
    Intact,
    /// Quantized damage fraction, `0..DAMAGE_SHADES`.
    Damaged(u8),
    Destroyed,
}

/// One destructible cell of the armor wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Grid-local column.
    pub x: u32,
    /// Grid-local row.
    pub y: u32,
    pub hp: f32,
    pub max_hp: f32,
    pub resistance: f32,
}

impl Block {
    pub fn new(profile: &BlockProfile, x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            hp: profile.max_hp,
            max_hp: profile.max_hp,
            resistance: profile.resistance,
        }
    }

    /// A block is alive while it has hit points left. Derived from `hp` so
    /// the two can never disagree.
    pub fn alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Overwrite stats from a new material profile and restore full hp.
    pub fn reprofile(&mut self, profile: &BlockProfile) {
        self.max_hp = profile.max_hp;
        self.resistance = profile.resistance;
        self.hp = profile.max_hp;
    }

    /// Reuse this block slot at a new grid position (in-place resize path).
    pub fn reset(&mut self, profile: &BlockProfile, x: u32, y: u32) {
        self.x = x;
        self.y = y;
        self.reprofile(profile);
    }

    pub fn revive(&mut self) {
        self.hp = self.max_hp;
    }

    /// Apply `raw` incoming damage at the given weapon intensity.
    ///
    /// The landed fraction is `min(1, intensity / resistance)`. Returns the
    /// portion of `raw` this block consumed, which is less than `raw` when
    /// the block dies mid-hit; the caller carries the leftover to the next
    /// obstruction. Dead blocks consume nothing.
    pub fn apply_damage(&mut self, raw: f32, intensity: f32) -> f32 {
        if !self.alive() {
            return 0.0;
        }
        let factor = (intensity / self.resistance).min(1.0);
        let hp_before = self.hp;
        self.hp = (self.hp - raw * factor).max(0.0);
        (hp_before / factor).min(raw)
    }

    pub fn visual_state(&self) -> VisualState {
        if self.hp <= 0.0 {
            VisualState::Destroyed
        } else if self.hp >= self.max_hp {
            VisualState::Intact
        } else {
            let frac = 1.0 - self.hp / self.max_hp;
            let shade = (frac * DAMAGE_SHADES as f32) as u8;
            VisualState::Damaged(shade.min(DAMAGE_SHADES - 1))
        }
    }
}
