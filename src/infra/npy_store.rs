// ============================================================
// Layer 5 — .npy Writer
// ============================================================
// Writes arrays back to disk as NumPy files, never replacing
// a file that is already there. Used when generating reduced
// copies of the dataset for unit tests and quick experiments.
// Each array is written in the dtype it was read with.
//
// Reference: ndarray-npy crate documentation

use std::fs;
use std::path::Path;

use crate::data::npy_array::NpyArray;
use crate::domain::error::{DataError, Result};

/// Write `array` to `path`, creating parent directories.
/// Fails with `FileExists` rather than overwrite.
pub fn write_new_npy(path: &Path, array: &NpyArray) -> Result<()> {
    if path.exists() {
        return Err(DataError::FileExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DataError::from_io(parent, e))?;
    }

    array.write(path)?;

    tracing::debug!("Wrote {} {:?} to '{}'", array.dtype(), array.shape(), path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};
    use tempfile::TempDir;

    #[test]
    fn test_writes_into_new_directories() {
        let dir   = TempDir::new().unwrap();
        let path  = dir.path().join("nested/deeper/train_input.npy");
        let array = NpyArray::F32(ArrayD::from_elem(IxDyn(&[3, 2]), 1.5));

        write_new_npy(&path, &array).unwrap();
        assert_eq!(NpyArray::read(&path).unwrap(), array);
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir   = TempDir::new().unwrap();
        let path  = dir.path().join("val_target.npy");
        let array = NpyArray::U16(ArrayD::zeros(IxDyn(&[2])));

        write_new_npy(&path, &array).unwrap();
        let err = write_new_npy(&path, &array).unwrap_err();
        assert!(matches!(err, DataError::FileExists(_)));
    }
}
