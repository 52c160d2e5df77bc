use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::game::{Alien, DEFAULT_HEALTH};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub app_name: String,
    pub default_health: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            app_name: "Ellen's Alien Game".to_string(),
            default_health: DEFAULT_HEALTH,
        }
    }
}

impl GameConfig {
    /// Parses a RON document. Fields left out keep their default values.
    pub fn from_ron(source: &str) -> Result<Self> {
        ron::from_str(source).context("invalid game config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_ron(&source)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(target: "config", path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn alien_at(&self, x: i32, y: i32) -> Alien {
        Alien::with_health(x, y, self.default_health)
    }
}
