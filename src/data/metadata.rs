// ============================================================
// Layer 4 — ClimSim Grid / Normalisation Metadata
// ============================================================
// The low-resolution dataset ships five NetCDF side files:
//
//   <root>/grid_info/ClimSim_low-res_grid-info.nc
//   <root>/preprocessing/normalizations/inputs/input_mean.nc
//   <root>/preprocessing/normalizations/inputs/input_max.nc
//   <root>/preprocessing/normalizations/inputs/input_min.nc
//   <root>/preprocessing/normalizations/outputs/output_scale.nc
//
// They are opened here so a broken install fails at dataset
// construction, but they are NOT parsed. Normalisation and
// grid handling belong to whoever consumes the dataset; they
// get the resolved paths from ClimSimMetadata.
//
// <root> is the crate installation root unless the config
// overrides it, never the current working directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::error::{DataError, Result};

/// One opened side file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFile {
    pub path:  PathBuf,
    pub bytes: u64,
}

impl MetadataFile {
    fn open(path: PathBuf) -> Result<Self> {
        let file = File::open(&path).map_err(|e| DataError::from_io(&path, e))?;
        let bytes = file
            .metadata()
            .map_err(|e| DataError::from_io(&path, e))?
            .len();
        Ok(Self { path, bytes })
    }
}

/// Every metadata file the low-res dataset requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimSimMetadata {
    pub grid_info:    MetadataFile,
    pub input_mean:   MetadataFile,
    pub input_max:    MetadataFile,
    pub input_min:    MetadataFile,
    pub output_scale: MetadataFile,
}

impl ClimSimMetadata {
    pub const GRID_INFO: &'static str = "ClimSim_low-res_grid-info.nc";

    /// Open all five files under `root`; the first missing one is reported.
    pub fn open(root: &Path) -> Result<Self> {
        let grid = root.join("grid_info");
        let norm = root.join("preprocessing").join("normalizations");

        let metadata = Self {
            grid_info:    MetadataFile::open(grid.join(Self::GRID_INFO))?,
            input_mean:   MetadataFile::open(norm.join("inputs").join("input_mean.nc"))?,
            input_max:    MetadataFile::open(norm.join("inputs").join("input_max.nc"))?,
            input_min:    MetadataFile::open(norm.join("inputs").join("input_min.nc"))?,
            output_scale: MetadataFile::open(norm.join("outputs").join("output_scale.nc"))?,
        };

        tracing::debug!("Opened ClimSim metadata under '{}'", root.display());
        Ok(metadata)
    }

    pub fn files(&self) -> [&MetadataFile; 5] {
        [
            &self.grid_info,
            &self.input_mean,
            &self.input_max,
            &self.input_min,
            &self.output_scale,
        ]
    }
}

/// Lay out empty placeholder metadata files under `root`.
/// Used by tests that need a valid metadata root.
#[cfg(test)]
pub(crate) fn write_placeholder_metadata(root: &Path) {
    let norm = root.join("preprocessing").join("normalizations");
    let files = [
        root.join("grid_info").join(ClimSimMetadata::GRID_INFO),
        norm.join("inputs").join("input_mean.nc"),
        norm.join("inputs").join("input_max.nc"),
        norm.join("inputs").join("input_min.nc"),
        norm.join("outputs").join("output_scale.nc"),
    ];
    for file in files {
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, b"CDF\x01").unwrap();
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_opens_all_files() {
        let dir = TempDir::new().unwrap();
        write_placeholder_metadata(dir.path());

        let metadata = ClimSimMetadata::open(dir.path()).unwrap();
        assert!(metadata.files().iter().all(|f| f.bytes == 4));
        assert!(metadata.grid_info.path.ends_with("grid_info/ClimSim_low-res_grid-info.nc"));
        assert!(metadata.output_scale.path.ends_with("outputs/output_scale.nc"));
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        write_placeholder_metadata(dir.path());
        std::fs::remove_file(
            dir.path().join("preprocessing/normalizations/inputs/input_max.nc"),
        )
        .unwrap();

        let err = ClimSimMetadata::open(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(ref p) if p.ends_with("input_max.nc")));
    }

    #[test]
    fn test_empty_root_fails_on_grid_info_first() {
        let dir = TempDir::new().unwrap();
        let err = ClimSimMetadata::open(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(ref p) if p.ends_with(ClimSimMetadata::GRID_INFO)));
    }
}
