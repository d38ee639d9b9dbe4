//! Simulation settings
//!
//! Every gameplay constant the rules use lives here so hosts can tune them
//! (and tests can force chance gates to 100%). Loaded from JSON; missing
//! fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::core::WorldError;

const MAX_WAKE_RADIUS: u32 = 8;

/// How grass reverts to dirt while something sits on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum GrassDeathPolicy {
    /// Roll `chance` percent every covered tick.
    Instant { chance: u8 },
    /// Count covered ticks; only after `min_covered_ticks` start rolling.
    Delayed { min_covered_ticks: u32, chance: u8 },
}

/// Where the depth below the open-air surface comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthSource {
    /// Walk upward from the cell to the nearest empty cell.
    Scan,
    /// Use the per-tick surface height table.
    SurfaceTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrassConfig {
    /// Exposed ticks a dirt cell must exceed before it can sprout.
    pub grow_threshold: u32,
    /// Percent chance per tick once past the threshold.
    pub grow_chance: u8,
    /// Count grass directly above as "exposed" (lets grass creep downward).
    pub exposure_counts_grass: bool,
    /// Randomized max depth below the surface that may sprout; `None` disables.
    pub max_depth: Option<u32>,
    pub depth_source: DepthSource,
    pub death: GrassDeathPolicy,
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            grow_threshold: 50,
            grow_chance: 60,
            exposure_counts_grass: false,
            max_depth: None,
            depth_source: DepthSource::Scan,
            death: GrassDeathPolicy::Instant { chance: 2 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed; `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Chebyshev radius woken around both ends of a successful move.
    pub wake_radius: u32,
    pub ambient_temperature: f32,
    /// Recompute per-column surface heights before each sweep.
    pub surface_table: bool,
    /// Percent chance per tick a liquid at boiling point evaporates.
    pub evaporation_chance: u8,
    /// Degrees a gas loses per tick while hotter than ambient.
    pub steam_cooling_rate: f32,
    /// Degrees a liquid loses per tick while hotter than ambient.
    pub liquid_cooling_rate: f32,
    /// Percent chance per tick a gas at its condensation point condenses.
    pub condensation_chance: u8,
    /// Percent chance per tick sand under water turns into wet sand.
    pub sand_wetting_chance: u8,
    /// Ticks without water above before wet sand dries.
    pub wet_sand_dry_ticks: u32,
    /// Lateral liquid flow skips targets with a denser falling solid right above.
    pub liquid_yield_to_falling: bool,
    pub grass: GrassConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            wake_radius: 2,
            ambient_temperature: 20.0,
            surface_table: true,
            evaporation_chance: 5,
            steam_cooling_rate: 0.5,
            liquid_cooling_rate: 0.1,
            condensation_chance: 5,
            sand_wetting_chance: 10,
            wet_sand_dry_ticks: 300,
            liquid_yield_to_falling: true,
            grass: GrassConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), WorldError> {
        let percents = [
            ("evaporation_chance", self.evaporation_chance),
            ("condensation_chance", self.condensation_chance),
            ("sand_wetting_chance", self.sand_wetting_chance),
            ("grass.grow_chance", self.grass.grow_chance),
            ("grass.death.chance", self.grass.death.chance()),
        ];
        for (name, value) in percents {
            if value > 100 {
                return Err(WorldError::InvalidConfig(format!(
                    "{} must be a percent (0..=100), got {}",
                    name, value
                )));
            }
        }
        if self.wake_radius > MAX_WAKE_RADIUS {
            return Err(WorldError::InvalidConfig(format!(
                "wake_radius must be <= {}, got {}",
                MAX_WAKE_RADIUS, self.wake_radius
            )));
        }
        let temperatures = [
            self.ambient_temperature,
            self.steam_cooling_rate,
            self.liquid_cooling_rate,
        ];
        if temperatures.iter().any(|t| !t.is_finite()) {
            return Err(WorldError::InvalidConfig(
                "temperatures must be finite".to_string(),
            ));
        }
        let rates = [
            ("steam_cooling_rate", self.steam_cooling_rate),
            ("liquid_cooling_rate", self.liquid_cooling_rate),
        ];
        for (name, rate) in rates {
            if rate < 0.0 {
                return Err(WorldError::InvalidConfig(format!(
                    "{} must not be negative",
                    name
                )));
            }
        }
        if self.grass.depth_source == DepthSource::SurfaceTable
            && self.grass.max_depth.is_some()
            && !self.surface_table
        {
            return Err(WorldError::InvalidConfig(
                "grass.depth_source=surface_table needs surface_table enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl GrassDeathPolicy {
    #[inline]
    pub fn chance(&self) -> u8 {
        match *self {
            GrassDeathPolicy::Instant { chance } => chance,
            GrassDeathPolicy::Delayed { chance, .. } => chance,
        }
    }
}
