//! Loaded scenario, engine and battlefield shared by every command

use std::path::Path;

use anyhow::{Context as _, Result};

use hexfield_core::{Battlefield, Engine, EngineConfig, GridPosition, PlacementMap, Scenario};

pub struct Context {
    pub scenario: Scenario,
    pub engine: Engine,
    pub placement: PlacementMap,
    pub field: Battlefield,
    pub json: bool,
}

impl Context {
    /// Load scenario and config, then build the battlefield
    pub fn load(scenario: Option<&Path>, config: Option<&Path>, json: bool) -> Result<Self> {
        let scenario = match scenario {
            Some(path) => Scenario::load(path)
                .with_context(|| format!("Failed to load scenario: {}", path.display()))?,
            None => Scenario::default(),
        };

        let config = match config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => EngineConfig::default(),
        };

        let engine = Engine::new(config)?;
        let placement = scenario.placement()?;
        let field = engine.build_battlefield(scenario.rows, scenario.cols, &placement)?;

        tracing::info!(
            "Loaded scenario '{}' ({}x{}, {} units)",
            scenario.name,
            scenario.rows,
            scenario.cols,
            placement.len()
        );

        Ok(Self {
            scenario,
            engine,
            placement,
            field,
            json,
        })
    }

    /// Regenerate the battlefield after the placement changed
    pub fn rebuild(&mut self) -> Result<()> {
        self.field = self
            .engine
            .build_battlefield(self.scenario.rows, self.scenario.cols, &self.placement)?;
        self.scenario.set_placement(&self.placement);
        Ok(())
    }
}

/// Parse "ROW,COL"
pub fn parse_position(s: &str) -> std::result::Result<GridPosition, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{}'", row.trim()))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", col.trim()))?;
    Ok(GridPosition::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("5,2"), Ok(GridPosition::new(5, 2)));
        assert_eq!(parse_position(" 0 , 4 "), Ok(GridPosition::new(0, 4)));
        assert!(parse_position("5").is_err());
        assert!(parse_position("a,2").is_err());
        assert!(parse_position("1,b").is_err());
    }

    #[test]
    fn test_default_context() {
        let ctx = Context::load(None, None, false).unwrap();
        assert_eq!(ctx.field.zones().len(), 30);
        assert_eq!(ctx.placement.len(), ctx.scenario.units.len());
    }
}
