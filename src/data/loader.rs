// ============================================================
// Layer 4 — .npy Pair Loader
// ============================================================
// Reads the raw (input, target) arrays of one split from a
// directory of NumPy files:
//
//   data_path/
//     train_input.npy     train_target.npy
//     val_input.npy       val_target.npy
//     scoring_input.npy   scoring_target.npy   ← "test" split
//
// How .npy files work:
//   A short header (magic string, dtype, shape, order) followed
//   by the raw little-endian values. ndarray-npy parses the
//   header and hands back an ndarray of the right shape.
//
// Any numeric dtype is accepted (see npy_array.rs) and widened
// to f64, so float64 exports keep their full precision.
//
// Reference: ndarray-npy crate documentation
//            Rust Book §9 (Error Handling)

use std::path::{Path, PathBuf};

use ndarray::ArrayD;

use crate::data::npy_array::NpyArray;
use crate::domain::array_pair::ArrayPair;
use crate::domain::error::{DataError, Result};
use crate::domain::split::Split;
use crate::domain::traits::ArrayPairSource;

/// Which half of a pair a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    Input,
    Target,
}

impl ArrayKind {
    pub const ALL: [ArrayKind; 2] = [ArrayKind::Input, ArrayKind::Target];

    pub fn as_str(self) -> &'static str {
        match self {
            ArrayKind::Input  => "input",
            ArrayKind::Target => "target",
        }
    }
}

/// `{stem}_{kind}.npy`, e.g. `scoring_target.npy`
pub fn split_file_name(stem: &str, kind: ArrayKind) -> String {
    format!("{stem}_{}.npy", kind.as_str())
}

/// Loads split arrays from a directory of .npy files.
/// Implements the ArrayPairSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct NpyPairLoader {
    data_path: PathBuf,
}

impl NpyPairLoader {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self { data_path: data_path.into() }
    }

    /// Full path of one split file
    pub fn file_path(&self, split: Split, kind: ArrayKind) -> PathBuf {
        self.data_path.join(split_file_name(split.file_stem(), kind))
    }
}

impl ArrayPairSource for NpyPairLoader {
    fn load_pair(&self, split: Split) -> Result<ArrayPair> {
        let input  = load_array(&self.file_path(split, ArrayKind::Input))?;
        let target = load_array(&self.file_path(split, ArrayKind::Target))?;

        tracing::debug!(
            "Loaded '{}' split from '{}': input {:?}, target {:?}",
            split,
            self.data_path.display(),
            input.shape(),
            target.shape()
        );

        Ok(ArrayPair::new(input, target))
    }
}

/// Read one numeric .npy file as an f64 array with a sample axis.
pub fn load_array(path: &Path) -> Result<ArrayD<f64>> {
    let array = NpyArray::read(path)?;
    if array.ndim() == 0 {
        return Err(DataError::MissingSampleAxis(format!("array in '{}'", path.display())));
    }

    if array.dtype() != "float64" {
        tracing::debug!("Widening {} '{}' to float64", array.dtype(), path.display());
    }
    Ok(array.to_f64())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, Array2, IxDyn};
    use ndarray_npy::write_npy;
    use tempfile::TempDir;

    fn write_split(dir: &Path, stem: &str, n: usize) {
        let input  = Array::from_shape_fn(IxDyn(&[n, 4]), |ix| (ix[0] * 10 + ix[1]) as f32);
        let target = Array::from_shape_fn(IxDyn(&[n, 2]), |ix| ix[0] as f64);
        write_npy(dir.join(format!("{stem}_input.npy")), &input).unwrap();
        write_npy(dir.join(format!("{stem}_target.npy")), &target).unwrap();
    }

    #[test]
    fn test_file_names_follow_split_stems() {
        let loader = NpyPairLoader::new("/data");
        assert_eq!(
            loader.file_path(Split::Test, ArrayKind::Target),
            PathBuf::from("/data/scoring_target.npy")
        );
        assert_eq!(
            loader.file_path(Split::Val, ArrayKind::Input),
            PathBuf::from("/data/val_input.npy")
        );
    }

    #[test]
    fn test_loads_each_split() {
        let dir = TempDir::new().unwrap();
        write_split(dir.path(), "train", 12);
        write_split(dir.path(), "val", 6);
        write_split(dir.path(), "scoring", 3);

        let loader = NpyPairLoader::new(dir.path());
        assert_eq!(loader.load_pair(Split::Train).unwrap().lengths(), (12, 12));
        assert_eq!(loader.load_pair(Split::Val).unwrap().lengths(), (6, 6));

        let test = loader.load_pair(Split::Test).unwrap();
        assert_eq!(test.input.shape(), &[3, 4]);
        assert_eq!(test.target.shape(), &[3, 2]);
        assert_eq!(test.input[[2, 1]], 21.0);
    }

    #[test]
    fn test_missing_target_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let input = Array::<f32, _>::zeros(IxDyn(&[5, 1]));
        write_npy(dir.path().join("train_input.npy"), &input).unwrap();

        let err = NpyPairLoader::new(dir.path()).load_pair(Split::Train).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(ref p) if p.ends_with("train_target.npy")));
    }

    #[test]
    fn test_float64_files_keep_precision() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("wide.npy");
        let wide = Array2::<f64>::from_elem((4, 3), 0.10000000000100001);
        write_npy(&path, &wide).unwrap();

        let array = load_array(&path).unwrap();
        assert_eq!(array.shape(), &[4, 3]);
        assert_eq!(array[[3, 2]], 0.10000000000100001);
    }

    #[test]
    fn test_int64_split_loads_as_floats() {
        let dir  = TempDir::new().unwrap();
        let ints = Array::from_shape_fn(IxDyn(&[6, 3]), |ix| ix[0] as i64 * 1000);
        write_npy(dir.path().join("val_input.npy"), &ints).unwrap();
        write_npy(dir.path().join("val_target.npy"), &ints).unwrap();

        let pair = NpyPairLoader::new(dir.path()).load_pair(Split::Val).unwrap();
        assert_eq!(pair.lengths(), (6, 6));
        assert_eq!(pair.target[[5, 2]], 5000.0);
    }

    #[test]
    fn test_scalar_file_has_no_sample_axis() {
        let dir    = TempDir::new().unwrap();
        let path   = dir.path().join("scalar.npy");
        let scalar = Array::<f32, _>::from_elem(IxDyn(&[]), 1.0);
        write_npy(&path, &scalar).unwrap();

        assert!(matches!(load_array(&path), Err(DataError::MissingSampleAxis(_))));
    }
}
