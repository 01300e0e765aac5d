// ============================================================
// Layer 3 — Dataset Configuration
// ============================================================
// A dataset configuration says WHICH dataset kind to build,
// WHERE its split files live, and HOW MUCH of each split each
// tier uses.
//
// Two shapes exist:
//
//   RawDatasetConfig  → what the YAML file contains: a
//                       `dataset_name` string plus whatever
//                       fields that dataset kind needs
//
//   DatasetConfig     → closed enum, one variant per dataset
//                       kind, each with its own typed config
//
// The conversion between them is the only place a dataset
// name string is looked at. An unknown name becomes
// UnknownDataset; every later `match` on DatasetConfig is
// exhaustive.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DataError;
use crate::domain::fractions::FractionTable;

/// Untyped configuration as read from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDatasetConfig {
    pub dataset_name: String,

    /// Every other key, interpreted by the matching dataset kind
    #[serde(flatten)]
    pub body: serde_yaml::Mapping,
}

/// Configuration of the subsampled low-resolution ClimSim data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowResConfig {
    /// Directory holding {train,val,scoring}_{input,target}.npy
    pub data_path: PathBuf,

    pub dataset_testing_fractions: FractionTable,

    /// Directory containing grid_info/ and preprocessing/.
    /// Defaults to the crate's installation root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_root: Option<PathBuf>,
}

impl LowResConfig {
    pub fn new(data_path: impl Into<PathBuf>, fractions: FractionTable) -> Self {
        Self {
            data_path:                 data_path.into(),
            dataset_testing_fractions: fractions,
            metadata_root:             None,
        }
    }

    pub fn with_metadata_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.metadata_root = Some(root.into());
        self
    }

    /// Where the metadata files are looked up
    pub fn resolved_metadata_root(&self) -> PathBuf {
        self.metadata_root
            .clone()
            .unwrap_or_else(default_metadata_root)
    }
}

/// Installation root of this crate; independent of the working directory.
///
/// The path is fixed at compile time (`CARGO_MANIFEST_DIR`), so a binary
/// installed with `cargo install` may point at a source tree that no longer
/// exists. Set `metadata_root` in the dataset YAML for installed builds.
pub fn default_metadata_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Typed dataset configuration, one variant per dataset kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetConfig {
    SubsampledLowRes(LowResConfig),
}

impl DatasetConfig {
    pub const SUBSAMPLED_LOW_RES: &'static str = "subsampled_low_res";

    /// The discriminator this config was built from
    pub fn name(&self) -> &'static str {
        match self {
            DatasetConfig::SubsampledLowRes(_) => Self::SUBSAMPLED_LOW_RES,
        }
    }

    pub fn data_path(&self) -> &Path {
        match self {
            DatasetConfig::SubsampledLowRes(cfg) => &cfg.data_path,
        }
    }

    pub fn fractions(&self) -> &FractionTable {
        match self {
            DatasetConfig::SubsampledLowRes(cfg) => &cfg.dataset_testing_fractions,
        }
    }
}

impl TryFrom<RawDatasetConfig> for DatasetConfig {
    type Error = DataError;

    fn try_from(raw: RawDatasetConfig) -> Result<Self, Self::Error> {
        match raw.dataset_name.as_str() {
            Self::SUBSAMPLED_LOW_RES => {
                let cfg: LowResConfig =
                    serde_yaml::from_value(serde_yaml::Value::Mapping(raw.body))?;
                Ok(DatasetConfig::SubsampledLowRes(cfg))
            }
            _ => Err(DataError::UnknownDataset(raw.dataset_name)),
        }
    }
}
