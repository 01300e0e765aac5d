//! Tiered selection and prefix subsampling of paired ClimSim splits.
//!
//! ```text
//!   Layer 1  cli          clap front end (binary only)
//!   Layer 2  application  inspect / test-set workflows
//!   Layer 3  domain       splits, tiers, configs, errors
//!   Layer 4  data         loader → sampling → PairedDataset
//!   Layer 5  infra        config YAML, .npy output
//! ```
//!
//! The training layer normally only needs [`get_dataset`] or
//! [`get_all_datasets`]; callers that already hold arrays can use
//! [`subsample`] directly.

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use burn::data::dataset::Dataset;
pub use data::dataset::{LowResDatasetBuilder, PairedDataset};
pub use data::npy_array::NpyArray;
pub use data::sampling::{subsample, take_prefix, SampleCounts};
pub use data::selector::{get_all_datasets, get_dataset};
pub use domain::array_pair::{ArrayPair, PairedSample};
pub use domain::config::{DatasetConfig, LowResConfig};
pub use domain::error::{DataError, Result};
pub use domain::fractions::{FractionTable, TestingValue};
pub use domain::split::{Split, Tier};
