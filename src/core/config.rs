//! Battle configuration with documented defaults
//!
//! Defaults reproduce the classic skirmish: two armies of fifty, a one
//! second pause between rounds, no round cap and a fresh random seed.
//! A TOML file can override any field; missing fields keep their default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::battle::constants::{
    DEFAULT_ARMY_NAMES, DEFAULT_OBSERVER_NAME, DEFAULT_ROUND_DELAY_MS, DEFAULT_SOLDIERS_PER_ARMY,
};
use crate::core::error::{ClashError, Result};

/// Configuration for a single battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Soldiers recruited into each army at setup
    pub soldiers_per_army: usize,

    /// Display names of the two armies, first army first
    ///
    /// Names appear in every announcement and must differ, otherwise the
    /// transcript cannot tell the sides apart.
    pub army_names: [String; 2],

    /// Name the console observer prefixes to every event it prints
    pub observer_name: String,

    /// Pause between rounds in milliseconds
    ///
    /// Purely cosmetic. Zero runs the battle flat out with the same outcome.
    pub round_delay_ms: u64,

    /// Optional cap on the number of rounds
    ///
    /// `None` fights until one roster is empty. When the cap is reached the
    /// battle ends undecided.
    pub max_rounds: Option<u64>,

    /// Seed for the battle's random source
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            soldiers_per_army: DEFAULT_SOLDIERS_PER_ARMY,
            army_names: DEFAULT_ARMY_NAMES.map(String::from),
            observer_name: DEFAULT_OBSERVER_NAME.to_string(),
            round_delay_ms: DEFAULT_ROUND_DELAY_MS,
            max_rounds: None,
            seed: None,
        }
    }
}

impl BattleConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay between rounds as a `Duration`
    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.soldiers_per_army == 0 {
            return Err(ClashError::InvalidConfig(
                "soldiers_per_army must be at least 1".into(),
            ));
        }

        let [first, second] = &self.army_names;
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(ClashError::InvalidConfig(
                "army names must not be empty".into(),
            ));
        }
        if first == second {
            return Err(ClashError::InvalidConfig(format!(
                "army names must differ (both are '{}')",
                first
            )));
        }

        if self.max_rounds == Some(0) {
            return Err(ClashError::InvalidConfig(
                "max_rounds must be at least 1 when set".into(),
            ));
        }

        Ok(())
    }
}

/// Load and validate a battle config from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<BattleConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: BattleConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
