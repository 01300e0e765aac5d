// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `inspect`, `summary` and
// `make-test-set`, and all their configurable flags.
//
// Split and tier flags are parsed with the domain FromStr
// impls, so a bad value is rejected by clap with the same
// InvalidArgument message the library would produce.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::domain::split::{Split, Tier};
use crate::infra::config_store::DEFAULT_DATASET_CONFIG;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build one split at one tier and print its size and shapes
    Inspect(InspectArgs),

    /// Build train, val and test at one tier and print their sizes
    Summary(SummaryArgs),

    /// Write reduced copies of every split file to a directory
    MakeTestSet(MakeTestSetArgs),
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Dataset configuration YAML
    #[arg(long, default_value = DEFAULT_DATASET_CONFIG)]
    pub config: PathBuf,

    /// One of train, val, test
    #[arg(long, default_value = "train")]
    pub split: Split,

    /// One of quick, reduced, full
    #[arg(long, default_value = "quick")]
    pub tier: Tier,
}

/// All arguments for the `summary` command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Dataset configuration YAML
    #[arg(long, default_value = DEFAULT_DATASET_CONFIG)]
    pub config: PathBuf,

    /// One of quick, reduced, full
    #[arg(long, default_value = "quick")]
    pub tier: Tier,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// All arguments for the `make-test-set` command
#[derive(Args, Debug)]
pub struct MakeTestSetArgs {
    /// Dataset configuration YAML
    #[arg(long, default_value = DEFAULT_DATASET_CONFIG)]
    pub config: PathBuf,

    /// Directory the reduced .npy files are written to
    #[arg(long, default_value = "test/unit_test_sets/sub_sampled_low_res")]
    pub output: PathBuf,

    /// Sample count (> 1) or fraction (<= 1);
    /// defaults to the config's unit_test value
    #[arg(long)]
    pub value: Option<f64>,
}
