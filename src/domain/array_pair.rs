// ============================================================
// Layer 3 — Array Pair and Paired Sample
// ============================================================
// An ArrayPair is the (input, target) tuple for one split.
// Both arrays carry the sample index on axis 0; the rest of
// the shape is free and may differ between input and target
// (e.g. [N, 556] inputs vs [N, 368] targets).
//
// A PairedSample is one row of each, i.e. what the training
// layer sees for a single index.

use ndarray::{ArrayD, Axis};
use serde::Serialize;

use crate::domain::error::{DataError, Result};

/// Raw or subsampled (input, target) arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPair {
    pub input:  ArrayD<f64>,
    pub target: ArrayD<f64>,
}

impl ArrayPair {
    /// Number of arrays carried by a pair
    pub const ARITY: usize = 2;

    pub fn new(input: ArrayD<f64>, target: ArrayD<f64>) -> Self {
        Self { input, target }
    }

    /// Leading-dimension lengths as (input, target)
    pub fn lengths(&self) -> (usize, usize) {
        (sample_count(&self.input), sample_count(&self.target))
    }

    /// Common sample count, or None if input and target disagree
    pub fn common_len(&self) -> Option<usize> {
        let (input, target) = self.lengths();
        (input == target).then_some(input)
    }

    /// Refuse zero-dimensional arrays, which carry no sample axis
    pub fn check_sample_axes(&self) -> Result<()> {
        for (name, array) in [("input", &self.input), ("target", &self.target)] {
            if array.ndim() == 0 {
                return Err(DataError::MissingSampleAxis(format!("{name} array")));
            }
        }
        Ok(())
    }
}

/// Length of axis 0, or 0 for a zero-dimensional array
pub fn sample_count<A>(array: &ArrayD<A>) -> usize {
    if array.ndim() == 0 {
        0
    } else {
        array.len_of(Axis(0))
    }
}

/// One (input, target) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSample {
    pub input:  ArrayD<f64>,
    pub target: ArrayD<f64>,
}

/// Shape-only description of a dataset, for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairShape {
    pub samples:      usize,
    pub input_shape:  Vec<usize>,
    pub target_shape: Vec<usize>,
}
