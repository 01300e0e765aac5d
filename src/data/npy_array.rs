// ============================================================
// Layer 4 — Typed .npy Array
// ============================================================
// A numeric .npy file read in whatever dtype it was saved with.
//
//   '<f8' '<f4'                      → floats
//   '<i8' '<i4' '<i2' '|i1'          → signed ints
//   '<u8' '<u4' '<u2' '|u1'          → unsigned ints
//
// The dataset works on f64 copies (`to_f64`). The test-set
// generator keeps the original dtype so a reduced file holds
// exactly the values of the source file, bit for bit.
//
// 64-bit integers above 2^53 lose precision when widened to
// f64; every other supported dtype converts exactly.
//
// Reference: ndarray-npy crate documentation

use std::path::Path;

use ndarray::ArrayD;
use ndarray_npy::{read_npy, write_npy, ReadNpyError, ReadableElement};

use crate::data::sampling::SamplingPlan;
use crate::domain::array_pair::sample_count;
use crate::domain::error::{DataError, Result};

/// A numeric array tagged with its on-disk dtype.
#[derive(Debug, Clone, PartialEq)]
pub enum NpyArray {
    F64(ArrayD<f64>),
    F32(ArrayD<f32>),
    I64(ArrayD<i64>),
    I32(ArrayD<i32>),
    I16(ArrayD<i16>),
    I8(ArrayD<i8>),
    U64(ArrayD<u64>),
    U32(ArrayD<u32>),
    U16(ArrayD<u16>),
    U8(ArrayD<u8>),
}

/// Run `$body` with `$array` bound to the inner array, whatever its dtype
macro_rules! with_array {
    ($value:expr, $array:ident => $body:expr) => {
        match $value {
            NpyArray::F64($array) => $body,
            NpyArray::F32($array) => $body,
            NpyArray::I64($array) => $body,
            NpyArray::I32($array) => $body,
            NpyArray::I16($array) => $body,
            NpyArray::I8($array)  => $body,
            NpyArray::U64($array) => $body,
            NpyArray::U32($array) => $body,
            NpyArray::U16($array) => $body,
            NpyArray::U8($array)  => $body,
        }
    };
}

/// Like `with_array!`, but wraps the result back into the same variant
macro_rules! map_array {
    ($value:expr, $array:ident => $body:expr) => {
        match $value {
            NpyArray::F64($array) => NpyArray::F64($body),
            NpyArray::F32($array) => NpyArray::F32($body),
            NpyArray::I64($array) => NpyArray::I64($body),
            NpyArray::I32($array) => NpyArray::I32($body),
            NpyArray::I16($array) => NpyArray::I16($body),
            NpyArray::I8($array)  => NpyArray::I8($body),
            NpyArray::U64($array) => NpyArray::U64($body),
            NpyArray::U32($array) => NpyArray::U32($body),
            NpyArray::U16($array) => NpyArray::U16($body),
            NpyArray::U8($array)  => NpyArray::U8($body),
        }
    };
}

impl NpyArray {
    /// Read a numeric .npy file in its stored dtype.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DataError::FileNotFound(path.to_path_buf()));
        }

        if let Some(a) = try_read(path)? { return Ok(NpyArray::F64(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::F32(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::I64(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::I32(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::I16(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::I8(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::U64(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::U32(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::U16(a)); }
        if let Some(a) = try_read(path)? { return Ok(NpyArray::U8(a)); }

        Err(DataError::UnsupportedDtype(path.to_path_buf()))
    }

    /// Write the array to `path` in its own dtype
    pub fn write(&self, path: &Path) -> Result<()> {
        with_array!(self, a => write_npy(path, a)).map_err(|source| DataError::WriteNpy {
            path: path.to_path_buf(),
            source,
        })
    }

    /// NumPy name of the dtype, e.g. "float64"
    pub fn dtype(&self) -> &'static str {
        match self {
            NpyArray::F64(_) => "float64",
            NpyArray::F32(_) => "float32",
            NpyArray::I64(_) => "int64",
            NpyArray::I32(_) => "int32",
            NpyArray::I16(_) => "int16",
            NpyArray::I8(_)  => "int8",
            NpyArray::U64(_) => "uint64",
            NpyArray::U32(_) => "uint32",
            NpyArray::U16(_) => "uint16",
            NpyArray::U8(_)  => "uint8",
        }
    }

    pub fn shape(&self) -> &[usize] {
        with_array!(self, a => a.shape())
    }

    pub fn ndim(&self) -> usize {
        with_array!(self, a => a.ndim())
    }

    /// Length of axis 0, 0 for a scalar
    pub fn samples(&self) -> usize {
        with_array!(self, a => sample_count(a))
    }

    /// Widened copy used by the dataset
    pub fn to_f64(&self) -> ArrayD<f64> {
        with_array!(self, a => a.mapv(|v| v as f64))
    }

    /// The prefix `plan` keeps, in the same dtype
    pub fn sampled(&self, plan: &SamplingPlan) -> NpyArray {
        map_array!(self, a => plan.apply_to_array(a))
    }
}

/// `Ok(None)` when the file holds a different dtype than `A`
fn try_read<A: ReadableElement>(path: &Path) -> Result<Option<ArrayD<A>>> {
    match read_npy::<_, ArrayD<A>>(path) {
        Ok(array) => Ok(Some(array)),
        Err(ReadNpyError::WrongDescriptor(_)) => Ok(None),
        Err(source) => Err(DataError::Npy { path: path.to_path_buf(), source }),
    }
}
