// ============================================================
// Layer 4 — Dataset Selector
// ============================================================
// Entry points the training layer calls to get its data:
//
//   get_dataset(cfg, "train", "quick")  → one PairedDataset
//   get_all_datasets(cfg, "full")       → (train, val, test)
//
// Order of work inside get_dataset:
//   1. parse split and tier  → InvalidArgument, before any I/O
//   2. match on the dataset kind (exhaustive)
//   3. hand off to that kind's builder, which does the I/O
//
// The selector itself never touches the filesystem and never
// retries; the first error is returned as-is.

use crate::data::dataset::{LowResDatasetBuilder, PairedDataset};
use crate::domain::config::DatasetConfig;
use crate::domain::error::Result;
use crate::domain::split::{Split, Tier};

/// Build the dataset for `split` at `tier` from string arguments.
pub fn get_dataset(config: &DatasetConfig, split: &str, tier: &str) -> Result<PairedDataset> {
    let split: Split = split.parse()?;
    let tier:  Tier  = tier.parse()?;
    select(config, split, tier)
}

/// Build the dataset for an already-validated split and tier.
pub fn select(config: &DatasetConfig, split: Split, tier: Tier) -> Result<PairedDataset> {
    match config {
        DatasetConfig::SubsampledLowRes(cfg) => LowResDatasetBuilder::new(cfg, split, tier).open(),
    }
}

/// Build train, val and test datasets at the same tier.
pub fn get_all_datasets(
    config: &DatasetConfig,
    tier:   &str,
) -> Result<(PairedDataset, PairedDataset, PairedDataset)> {
    let tier: Tier = tier.parse()?;
    select_all(config, tier)
}

pub fn select_all(
    config: &DatasetConfig,
    tier:   Tier,
) -> Result<(PairedDataset, PairedDataset, PairedDataset)> {
    let train = select(config, Split::Train, tier)?;
    let val   = select(config, Split::Val, tier)?;
    let test  = select(config, Split::Test, tier)?;
    Ok((train, val, test))
}
