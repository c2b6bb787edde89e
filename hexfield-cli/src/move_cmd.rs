//! Move and attack commands - validate through a session, then apply
//!
//! The rules engine only hands back `Action`s; this command plays the role
//! of the game-state owner and applies them to the placement map.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use clap::Args;

use hexfield_core::{Action, GridPosition, PlacementMap, Session};

use crate::context::{parse_position, Context};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct ActionArgs {
    /// Acting unit's position
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub from: GridPosition,

    /// Destination or target position
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub to: GridPosition,

    /// Save the updated placement back to the scenario file
    #[arg(long)]
    pub write: bool,
}

// ============================================================================
// COMMANDS
// ============================================================================

pub fn run_move(ctx: &mut Context, args: &ActionArgs, scenario_path: Option<&Path>) -> Result<()> {
    let action = request(ctx, args, |session, to| session.request_move(to))?;

    apply_action(&mut ctx.placement, action)?;
    ctx.rebuild()?;

    report(ctx, action)?;

    if args.write {
        let Some(path) = scenario_path else {
            bail!("--write needs --scenario to know where to save");
        };
        ctx.scenario
            .save(path)
            .with_context(|| format!("Failed to save scenario: {}", path.display()))?;
        tracing::info!("Saved scenario to {}", path.display());
    }
    Ok(())
}

pub fn run_attack(ctx: &Context, args: &ActionArgs) -> Result<()> {
    let action = request(ctx, args, |session, to| session.request_attack(to))?;
    report(ctx, action)
}

// ============================================================================
// HELPERS
// ============================================================================

fn request<F>(ctx: &Context, args: &ActionArgs, make: F) -> Result<Action>
where
    F: FnOnce(&Session, GridPosition) -> hexfield_core::Result<Action>,
{
    let mut session = Session::new();
    session.select(&ctx.engine, &ctx.field, &ctx.placement, args.from)?;
    if session.is_engaged() {
        tracing::debug!("unit at {} is engaged", args.from);
    }
    Ok(make(&session, args.to)?)
}

/// Apply an action to the caller-owned placement map
///
/// Attacks leave placement untouched; damage belongs to whoever tracks health.
pub fn apply_action(placement: &mut PlacementMap, action: Action) -> Result<()> {
    match action {
        Action::MoveRequested { from, to, .. } => {
            if placement.contains_key(&to) {
                bail!("destination {} is occupied", to);
            }
            let Some(unit) = placement.remove(&from) else {
                bail!("no unit at {}", from);
            };
            placement.insert(to, unit);
        }
        Action::AttackRequested { .. } => {}
    }
    Ok(())
}

fn report(ctx: &Context, action: Action) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&action)?);
        return Ok(());
    }
    match action {
        Action::MoveRequested { from, to, cost } => {
            println!("Moved {} -> {} (cost {})", from, to, cost);
        }
        Action::AttackRequested { from, to } => {
            let target = &ctx.placement[&to];
            println!("Attack {} -> {} on unit {} ({})", from, to, target.id, target.owner);
        }
    }
    Ok(())
}
