// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Builds datasets from a config file and reports what they
// contain, without handing them to a model:
//
//   inspect(split, tier) → one split: sample count + shapes
//   summary(tier)        → all three splits at one tier
//
// Handy for checking a data_path and fraction table before
// launching a real training run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::dataset::PairedDataset;
use crate::data::selector::{select, select_all};
use crate::domain::array_pair::PairShape;
use crate::domain::config::DatasetConfig;
use crate::domain::split::{Split, Tier};
use crate::infra::config_store::load_dataset_config;

/// What one built dataset looks like.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    pub split: Split,
    pub tier:  Tier,
    #[serde(flatten)]
    pub shape: PairShape,
}

impl SplitReport {
    fn of(dataset: &PairedDataset) -> Self {
        Self {
            split: dataset.split(),
            tier:  dataset.tier(),
            shape: dataset.shape(),
        }
    }
}

/// All three splits at one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub dataset: &'static str,
    pub tier:    Tier,
    pub splits:  Vec<SplitReport>,
}

pub struct InspectUseCase {
    config: DatasetConfig,
}

impl InspectUseCase {
    /// Load the dataset config the use case works from
    pub fn new(config_path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = config_path.into();
        let config = load_dataset_config(&config_path).with_context(|| {
            format!("Cannot load dataset config '{}'", config_path.display())
        })?;
        Ok(Self { config })
    }

    /// Build one split at one tier and describe it
    pub fn inspect(&self, split: Split, tier: Tier) -> Result<SplitReport> {
        tracing::info!(
            "Building '{}' split at tier '{}' from '{}'",
            split,
            tier,
            self.config.data_path().display()
        );

        let dataset = select(&self.config, split, tier)
            .with_context(|| format!("Cannot build '{split}' dataset at tier '{tier}'"))?;

        Ok(SplitReport::of(&dataset))
    }

    /// Build train, val and test at one tier and describe them
    pub fn summary(&self, tier: Tier) -> Result<SummaryReport> {
        tracing::info!("Building all splits at tier '{}'", tier);

        let (train, val, test) = select_all(&self.config, tier)
            .with_context(|| format!("Cannot build datasets at tier '{tier}'"))?;

        Ok(SummaryReport {
            dataset: self.config.name(),
            tier,
            splits: [&train, &val, &test].into_iter().map(SplitReport::of).collect(),
        })
    }
}
