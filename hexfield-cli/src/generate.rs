//! Generate command - write a random mirrored scenario

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hexfield_core::{Battlefield, Scenario};

#[derive(Args)]
pub struct GenerateArgs {
    /// Grid rows
    #[arg(long, default_value = "6")]
    pub rows: i32,

    /// Grid columns
    #[arg(long, default_value = "5")]
    pub cols: i32,

    /// Units per side
    #[arg(long, default_value = "3")]
    pub per_side: usize,

    /// Random seed (None = random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scenario name
    #[arg(long, default_value = "generated")]
    pub name: String,

    /// Output JSON file (stdout if omitted)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let scenario = generate(&args)?;

    match &args.output {
        Some(path) => {
            scenario
                .save(path)
                .with_context(|| format!("Failed to write scenario: {}", path.display()))?;
            tracing::info!(
                "Wrote scenario '{}' with {} units to {}",
                scenario.name,
                scenario.units.len(),
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&scenario)?),
    }
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<Scenario> {
    ensure!(
        args.rows > 0 && args.cols > 0,
        "rows and cols must be positive (got {}x{})",
        args.rows,
        args.cols
    );

    let mut rng = create_rng(args.seed);
    let scenario = Scenario::random(&mut rng, &args.name, args.rows, args.cols, args.per_side);

    // Reject anything the zone builder would refuse
    Battlefield::build(scenario.rows, scenario.cols, &scenario.placement()?)?;
    Ok(scenario)
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(seed: Option<u64>) -> GenerateArgs {
        GenerateArgs {
            rows: 6,
            cols: 5,
            per_side: 3,
            seed,
            name: "test".to_string(),
            output: None,
        }
    }

    #[test]
    fn test_create_rng_deterministic() {
        let a = generate(&args(Some(42))).unwrap();
        let b = generate(&args(Some(42))).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.units.len(), 6);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let mut bad = args(Some(1));
        bad.rows = 0;
        assert!(generate(&bad).is_err());
    }
}
