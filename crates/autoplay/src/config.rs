//! Session configuration, loadable from a TOML file.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutoplayConfig {
    /// Search depth in plies once the search takes over.
    pub search_depth: u8,
    /// Number of opening plies played uniformly at random.
    pub random_plies: u32,
    /// Pause before each searched move, for watchability.
    pub move_delay_ms: u64,
    /// Hard stop so a shuffling endgame cannot run forever.
    pub max_plies: u32,
    /// Seed for the random mover; unseeded when absent.
    pub seed: Option<u64>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            random_plies: 9,
            move_delay_ms: 1000,
            max_plies: 400,
            seed: None,
        }
    }
}

impl AutoplayConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
