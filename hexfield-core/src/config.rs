//! Engine tunables

use crate::error::{BattleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Search used to price routes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Hex-distance heuristic, may return a suboptimal route if a custom
    /// cost model prices steps below 1
    #[default]
    AStar,
    /// No heuristic; always the cheapest route
    Dijkstra,
}

/// Rules configuration shared by zone building, costing and search
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rows in each of the enemy and player bands
    pub band_rows: u32,
    /// Zone-of-control surcharge when the unit has no modifier
    pub default_zoc_cost: u32,
    /// Surcharge for entering a frontline zone
    pub frontline_friction: u32,
    /// A step never costs more than this multiple of its base distance
    pub cost_cap_multiplier: u32,
    pub search: SearchStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            band_rows: 3,
            default_zoc_cost: 2,
            frontline_friction: 1,
            cost_cap_multiplier: 2,
            search: SearchStrategy::AStar,
        }
    }
}

impl EngineConfig {
    /// Strict shortest paths
    pub fn dijkstra() -> Self {
        Self {
            search: SearchStrategy::Dijkstra,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }

    pub fn with_default_zoc_cost(mut self, cost: u32) -> Self {
        self.default_zoc_cost = cost;
        self
    }

    pub fn with_cost_cap_multiplier(mut self, multiplier: u32) -> Self {
        self.cost_cap_multiplier = multiplier;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.band_rows == 0 {
            return Err(BattleError::InvalidConfig("band_rows must be at least 1".into()));
        }
        if self.cost_cap_multiplier == 0 {
            return Err(BattleError::InvalidConfig(
                "cost_cap_multiplier must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Load from JSON file; missing fields fall back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
