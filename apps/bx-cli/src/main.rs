use bx_balance::{Derivation, SolveRequest, SolveResult, solve};
use bx_core::units::constants::{
    DEFAULT_INITIAL_BRIX_PCT, DEFAULT_PULP_MASS_KG, DEFAULT_TARGET_BRIX_PCT,
};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bx-cli")]
#[command(about = "brixcalc CLI - sugar addition for fruit pulp by solids mass balance", long_about = None)]
struct Cli {
    /// Initial pulp mass in kg
    #[arg(long, default_value_t = DEFAULT_PULP_MASS_KG)]
    mass: f64,

    /// Initial soluble-solids concentration in % (0-100)
    #[arg(long, default_value_t = DEFAULT_INITIAL_BRIX_PCT)]
    initial_brix: f64,

    /// Target soluble-solids concentration in % (0-100, above initial)
    #[arg(long, default_value_t = DEFAULT_TARGET_BRIX_PCT)]
    final_brix: f64,

    /// Show the algebraic derivation of the result
    #[arg(long)]
    explain: bool,

    /// Emit a machine-readable JSON report at full precision
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SolveReport {
    initial_mass_kg: f64,
    initial_brix_pct: f64,
    final_brix_pct: f64,
    sugar_to_add_kg: f64,
    final_mass_kg: f64,
}

impl SolveReport {
    fn new(request: &SolveRequest, result: &SolveResult) -> Self {
        Self {
            initial_mass_kg: request.initial_mass_kg(),
            initial_brix_pct: request.initial_brix_pct,
            final_brix_pct: request.final_brix_pct,
            sugar_to_add_kg: result.sugar_to_add_kg(),
            final_mass_kg: result.final_mass_kg(),
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed calculator inputs");

    let request = SolveRequest::new(cli.mass, cli.initial_brix, cli.final_brix);
    let result = match solve(&request) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        let report = SolveReport::new(&request, &result);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("✓ Add {:.2} kg of sugar", result.sugar_to_add_kg());
    println!("  Final batch mass: {:.2} kg", result.final_mass_kg());

    if cli.explain {
        println!();
        print!("{}", Derivation::new(&request, &result));
    }

    ExitCode::SUCCESS
}
