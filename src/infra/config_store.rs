// ============================================================
// Layer 5 — Dataset Config Store
// ============================================================
// Reads a dataset configuration YAML file and turns it into
// the typed DatasetConfig from Layer 3.
//
// Example file (config/datasets/sub_sampled_low_res.yaml):
//
//   dataset_name: subsampled_low_res
//   data_path: /data/ClimSim_low-res/subsampled/
//   dataset_testing_fractions:
//     quick: 0.01
//     reduced: 0.1
//     full: 1.0
//     unit_test: 1000
//
// Two steps:
//   1. YAML → RawDatasetConfig (any dataset_name accepted)
//   2. RawDatasetConfig → DatasetConfig (UnknownDataset if the
//      name isn't a known kind)
//
// Reference: serde_yaml crate documentation
//            Rust Book §9 (Error Handling)

use std::fs;
use std::path::Path;

use crate::domain::config::{DatasetConfig, RawDatasetConfig};
use crate::domain::error::{DataError, Result};

/// Default location of the shipped low-res dataset config,
/// relative to the crate root.
pub const DEFAULT_DATASET_CONFIG: &str = "config/datasets/sub_sampled_low_res.yaml";

/// Parse a dataset configuration from YAML text.
pub fn parse_dataset_config(yaml: &str) -> Result<DatasetConfig> {
    let raw: RawDatasetConfig = serde_yaml::from_str(yaml)?;
    DatasetConfig::try_from(raw)
}

/// Read and parse a dataset configuration file.
pub fn load_dataset_config(path: &Path) -> Result<DatasetConfig> {
    let yaml = fs::read_to_string(path).map_err(|e| DataError::from_io(path, e))?;
    let cfg  = parse_dataset_config(&yaml)?;

    tracing::debug!(
        "Loaded '{}' dataset config from '{}'",
        cfg.name(),
        path.display()
    );
    Ok(cfg)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::default_metadata_root;
    use crate::domain::fractions::TestingValue;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const LOW_RES: &str = "\
dataset_name: subsampled_low_res
data_path: /data/low_res/
dataset_testing_fractions:
  quick: 0.01
  reduced: 0.1
  full: 1.0
  unit_test: 1000
";

    #[test]
    fn test_load_config_file() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("low_res.yaml");
        fs::write(&path, LOW_RES).unwrap();

        let cfg = load_dataset_config(&path).unwrap();
        let DatasetConfig::SubsampledLowRes(low_res) = &cfg;
        assert_eq!(low_res.data_path, PathBuf::from("/data/low_res/"));
        assert_eq!(low_res.metadata_root, None);
        assert_eq!(cfg.fractions().unit_test, Some(TestingValue::Number(1000.0)));
    }

    #[test]
    fn test_yaml_metadata_root_replaces_build_path() {
        let yaml = format!("{LOW_RES}metadata_root: /opt/climsim\n");
        let DatasetConfig::SubsampledLowRes(low_res) = parse_dataset_config(&yaml).unwrap();

        assert_eq!(low_res.resolved_metadata_root(), PathBuf::from("/opt/climsim"));
        assert_ne!(low_res.resolved_metadata_root(), default_metadata_root());
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let err = load_dataset_config(Path::new("/nonexistent/low_res.yaml")).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = parse_dataset_config("this is not valid yaml: [[[").unwrap_err();
        assert!(matches!(err, DataError::Config(_)));
    }

    #[test]
    fn test_unknown_dataset_name() {
        let err = parse_dataset_config("dataset_name: high_res\n").unwrap_err();
        assert!(matches!(err, DataError::UnknownDataset(ref name) if name == "high_res"));
    }

    #[test]
    fn test_shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATASET_CONFIG);
        let cfg  = load_dataset_config(&path).unwrap();
        assert_eq!(cfg.name(), DatasetConfig::SUBSAMPLED_LOW_RES);
    }
}
