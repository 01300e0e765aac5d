// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Uses `clap` to parse
// command line arguments and hands everything else to Layer 2.
//
// Three commands are supported:
//   1. `inspect`       — build one split at one tier
//   2. `summary`       — build all splits at one tier
//   3. `make-test-set` — write reduced split files
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, MakeTestSetArgs, SummaryArgs};

use crate::application::inspect_use_case::{InspectUseCase, SplitReport};
use crate::application::test_set_use_case::TestSetUseCase;
use crate::infra::config_store::load_dataset_config;

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "climsim-tiers",
    version,
    about = "Select and subsample ClimSim splits at quick / reduced / full testing tiers."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args)     => run_inspect(args),
            Commands::Summary(args)     => run_summary(args),
            Commands::MakeTestSet(args) => run_make_test_set(args),
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let use_case = InspectUseCase::new(args.config)?;
    let report   = use_case.inspect(args.split, args.tier)?;

    println!("{}", format_row(&report));
    Ok(())
}

fn run_summary(args: SummaryArgs) -> Result<()> {
    let use_case = InspectUseCase::new(args.config)?;
    let summary  = use_case.summary(args.tier)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{} @ {}", summary.dataset, summary.tier);
    for report in &summary.splits {
        println!("  {}", format_row(report));
    }
    Ok(())
}

fn run_make_test_set(args: MakeTestSetArgs) -> Result<()> {
    tracing::info!("Generating test sets in '{}'", args.output.display());

    let config   = load_dataset_config(&args.config)?;
    let mut use_case = TestSetUseCase::new(config, &args.output);
    if let Some(value) = args.value {
        use_case = use_case.with_value(value);
    }

    for file in use_case.execute()? {
        println!("{:>8}  {:<8} {}", file.samples, file.dtype, file.path.display());
    }
    Ok(())
}

/// `train  quick      10 samples  input [556]  target [368]`
fn format_row(report: &SplitReport) -> String {
    format!(
        "{:<6} {:<8} {:>8} samples  input {:?}  target {:?}",
        report.split.as_str(),
        report.tier.as_str(),
        report.shape.samples,
        report.shape.input_shape,
        report.shape.target_shape,
    )
}
