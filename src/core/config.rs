//! Engine settings - loaded from JSON or built in code.
//!
//! Every field has a default so a partial JSON document (or `{}`) is valid.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Behaviour at the outer edges of the grid (or panel seams in cube mode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Clamp to the grid and bounce (or stop dead)
    #[default]
    Clamp,
    /// Toroidal wrap on flat grids, face transform on cubes
    Wrap,
}

/// Physical panel arrangement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologyKind {
    #[default]
    Flat,
    /// Six square panels laid out 3 wide by 2 high
    Cube { panel_size: u32 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Random jitter range added to acceleration each step
    pub shake: u16,
    /// 0 = stop dead at walls, 255 = perfectly elastic
    pub bounce_energy: u8,
    /// Overrides the default cap of `4 * space_multiplier`
    pub velocity_cap: Option<u16>,
    /// Overrides the size-based heuristic
    pub space_multiplier: Option<u16>,
    pub palette_capacity: u16,
    pub edges: EdgeMode,
    pub topology: TopologyKind,
    /// Tries before giving up on a random free cell
    pub placement_attempts: u16,
    pub initial_store_capacity: usize,
    pub store_growth: usize,
    /// Seed for renderers that own a random source
    pub seed: u64,
}

pub const DEFAULT_PALETTE_CAPACITY: u16 = 255;
pub const DEFAULT_PLACEMENT_ATTEMPTS: u16 = 2000;
pub const DEFAULT_STORE_CAPACITY: usize = 100;
pub const DEFAULT_STORE_GROWTH: usize = 20;

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            shake: 0,
            bounce_energy: 0,
            velocity_cap: None,
            space_multiplier: None,
            palette_capacity: DEFAULT_PALETTE_CAPACITY,
            edges: EdgeMode::Clamp,
            topology: TopologyKind::Flat,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            initial_store_capacity: DEFAULT_STORE_CAPACITY,
            store_growth: DEFAULT_STORE_GROWTH,
            seed: 0x5EED_1ED5,
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialisation cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.palette_capacity == 0 {
            return Err(EngineError::InvalidSettings(
                "palette_capacity must be at least 1".to_string(),
            ));
        }
        if self.store_growth == 0 {
            return Err(EngineError::InvalidSettings(
                "store_growth must be at least 1".to_string(),
            ));
        }
        if self.space_multiplier == Some(0) {
            return Err(EngineError::InvalidSettings(
                "space_multiplier must be at least 1".to_string(),
            ));
        }
        if let TopologyKind::Cube { panel_size: 0 } = self.topology {
            return Err(EngineError::InvalidSettings(
                "cube panel_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// `1 + (255 - energy) * 5 / 255`
pub fn bounce_loss(bounce_energy: u8) -> f32 {
    1.0 + (255 - bounce_energy) as f32 * 5.0 / 255.0
}
