//! Finished-game report, written as pretty JSON.

use std::path::Path;

use anyhow::Context;
use chess_rules::Game;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    /// `1-0`, `0-1`, `1/2-1/2`, or `*` when stopped early.
    pub result: String,
    pub method: Option<String>,
    pub plies: u32,
    pub random_plies: u32,
    pub search_depth: u8,
    pub movetext: String,
}

impl GameReport {
    pub fn from_game(game: &Game, random_plies: u32, search_depth: u8) -> Self {
        let (result, method) = match game.outcome() {
            Some((outcome, method)) => (outcome.to_string(), Some(method.to_string())),
            None => ("*".to_string(), None),
        };
        Self {
            result,
            method,
            plies: game.ply(),
            random_plies,
            search_depth,
            movetext: game.movetext(),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report {}", path.display()))
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
