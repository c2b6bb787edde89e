//! Read-only commands: zones, moves, targets, path

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexfield_core::{to_grid, Allegiance, Depth, GridPosition, LegalMoves, PathResult, Zone};

use crate::context::{parse_position, Context};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct SelectArgs {
    /// Position of the selected unit
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub at: GridPosition,
}

#[derive(Args)]
pub struct PathArgs {
    /// Start position (must hold a unit)
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub from: GridPosition,

    /// Destination position
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub to: GridPosition,
}

/// One legal destination as reported to the user
#[derive(Serialize)]
struct MoveEntry {
    to: GridPosition,
    cost: u32,
    route: Vec<GridPosition>,
}

// ============================================================================
// COMMANDS
// ============================================================================

pub fn run_zones(ctx: &Context) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(ctx.field.zones())?);
        return Ok(());
    }

    println!(
        "{:<8} {:<9} {:<8} {:<10} {:<5} {}",
        "pos", "axial", "side", "depth", "lane", "unit"
    );
    for zone in ctx.field.zones() {
        println!("{}", format_zone(ctx, zone));
    }
    Ok(())
}

pub fn run_moves(ctx: &Context, args: &SelectArgs) -> Result<()> {
    let moves = ctx.engine.legal_moves(&ctx.field, &ctx.placement, args.at)?;
    let entries = move_entries(&moves);

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("\n=== Legal moves from {} ===", args.at);
    if entries.is_empty() {
        println!("(none)");
    }
    for entry in &entries {
        println!("{:<8} cost {}  via {}", entry.to.to_string(), entry.cost, format_route(&entry.route));
    }
    Ok(())
}

pub fn run_targets(ctx: &Context, args: &SelectArgs) -> Result<()> {
    let targets = ctx.engine.legal_targets(&ctx.field, &ctx.placement, args.at)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
        return Ok(());
    }

    println!("\n=== Legal targets from {} ===", args.at);
    if targets.is_empty() {
        println!("(none)");
    }
    for pos in &targets {
        let unit = &ctx.placement[pos];
        println!("{:<8} unit {} ({})", pos.to_string(), unit.id, unit.owner);
    }
    Ok(())
}

pub fn run_path(ctx: &Context, args: &PathArgs) -> Result<()> {
    for pos in [args.from, args.to] {
        anyhow::ensure!(ctx.field.zone(pos).is_some(), "{} is off the battlefield", pos);
    }
    let result = ctx
        .engine
        .find_path(&ctx.field, &ctx.placement, args.from, args.to)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_empty() {
        println!("No path from {} to {}", args.from, args.to);
    } else {
        println!(
            "{} -> {}: cost {}, {} steps, via {}",
            args.from,
            args.to,
            result.total_cost,
            result.steps(),
            format_route(&route_positions(&result))
        );
    }
    Ok(())
}

// ============================================================================
// FORMATTING
// ============================================================================

fn move_entries(moves: &LegalMoves) -> Vec<MoveEntry> {
    moves
        .destinations
        .iter()
        .map(|(&to, result)| MoveEntry {
            to,
            cost: result.total_cost,
            route: route_positions(result),
        })
        .collect()
}

fn route_positions(result: &PathResult) -> Vec<GridPosition> {
    result.path.iter().map(|&a| to_grid(a)).collect()
}

fn format_route(route: &[GridPosition]) -> String {
    route
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_zone(ctx: &Context, zone: &Zone) -> String {
    let side = match zone.allegiance {
        Allegiance::Player => "player",
        Allegiance::Enemy => "enemy",
        Allegiance::Neutral => "neutral",
    };
    let depth = match zone.depth {
        Depth::Frontline => "frontline",
        Depth::Backline => "backline",
        Depth::Middle => "middle",
    };
    let unit = match ctx.placement.get(&zone.position) {
        Some(u) => format!("{} {}", u.id, u.owner),
        None => "-".to_string(),
    };
    format!(
        "{:<8} {:<9} {:<8} {:<10} {:<5} {}",
        zone.position.to_string(),
        zone.axial.to_string(),
        side,
        depth,
        zone.lane.0,
        unit
    )
}
