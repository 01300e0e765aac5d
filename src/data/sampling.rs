// ============================================================
// Layer 4 — Tier Subsampling
// ============================================================
// Shrinks an (input, target) pair to the size a testing tier
// asks for. The only strategy is PREFIX selection: samples
// [0, n) in their original order. No shuffling, no stride.
//
// The tier's testing value decides n:
//
//   "text"        → InvalidFractionType (never sample)
//   v > 1.0       → count mode: n = trunc(v), shared by both arrays
//   v == 1.0      → identity: pair returned as-is
//   otherwise     → fraction mode: n_i = floor(len_i * v),
//                   computed separately for each array
//
// Values <= 0 fall into fraction mode and give empty arrays.
//
// Because every tier takes a prefix, a smaller tier is always
// the leading slice of a larger one:
//
//   full     [################################]
//   reduced  [#######]
//   quick    [#]
//
// provided the configured values grow from quick to full.
//
// Reference: ndarray docs (slice_axis, Slice)

use ndarray::{ArrayD, Axis, Slice};

use crate::domain::array_pair::{sample_count, ArrayPair};
use crate::domain::error::{DataError, Result};
use crate::domain::fractions::{FractionTable, TestingValue};
use crate::domain::split::Tier;

/// How many leading samples to keep from each array of a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleCounts {
    /// Same count for every array
    Shared(usize),
    /// One count per array, in (input, target) order
    PerArray(Vec<usize>),
}

/// A testing value, interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingPlan {
    Identity,
    Count(usize),
    Fraction(f64),
}

impl SamplingPlan {
    /// Interpret the testing value configured under `label`.
    /// Strings are refused whatever they contain.
    pub fn resolve(label: &str, value: &TestingValue) -> Result<Self> {
        let v = match value {
            TestingValue::Text(s) => {
                return Err(DataError::InvalidFractionType {
                    tier:  label.to_string(),
                    value: s.clone(),
                })
            }
            TestingValue::Number(v) => *v,
        };

        Ok(if v > 1.0 {
            // `as` truncates toward zero and saturates on overflow
            SamplingPlan::Count(v as usize)
        } else if v == 1.0 {
            SamplingPlan::Identity
        } else {
            SamplingPlan::Fraction(v)
        })
    }

    /// Per-pair counts, or None when the pair is kept whole
    pub fn counts_for(&self, pair: &ArrayPair) -> Option<SampleCounts> {
        match *self {
            SamplingPlan::Identity => None,
            SamplingPlan::Count(n) => Some(SampleCounts::Shared(n)),
            SamplingPlan::Fraction(f) => {
                let (input, target) = pair.lengths();
                Some(SampleCounts::PerArray(vec![
                    fraction_count(input, f),
                    fraction_count(target, f),
                ]))
            }
        }
    }

    /// Apply the plan to both arrays of a pair
    pub fn apply(&self, pair: &ArrayPair) -> Result<ArrayPair> {
        match self.counts_for(pair) {
            None         => Ok(pair.clone()),
            Some(counts) => take_prefix(pair, &counts),
        }
    }

    /// Apply the plan to a single array of any element type
    pub fn apply_to_array<A: Clone>(&self, array: &ArrayD<A>) -> ArrayD<A> {
        match *self {
            SamplingPlan::Identity    => array.clone(),
            SamplingPlan::Count(n)    => prefix(array, n),
            SamplingPlan::Fraction(f) => prefix(array, fraction_count(sample_count(array), f)),
        }
    }
}

/// floor(len * fraction); negative and NaN results become 0
fn fraction_count(len: usize, fraction: f64) -> usize {
    (len as f64 * fraction).floor() as usize
}

/// Subsample `pair` to the size configured for `tier`.
///
/// The input pair is never modified; a new pair is returned.
pub fn subsample(pair: &ArrayPair, tier: Tier, fractions: &FractionTable) -> Result<ArrayPair> {
    let plan = SamplingPlan::resolve(tier.as_str(), fractions.get(tier))?;

    tracing::debug!(
        "Tier '{}' → {:?} on {:?} samples",
        tier,
        plan,
        pair.lengths()
    );

    plan.apply(pair)
}

/// Keep the first `counts` samples of each array in `pair`.
///
/// Counts beyond an array's length keep the whole array.
/// A per-array list must have exactly one count per array.
pub fn take_prefix(pair: &ArrayPair, counts: &SampleCounts) -> Result<ArrayPair> {
    let (n_input, n_target) = match counts {
        SampleCounts::Shared(n) => (*n, *n),
        SampleCounts::PerArray(ns) => match ns.as_slice() {
            [input, target] => (*input, *target),
            _ => {
                return Err(DataError::ArityMismatch {
                    counts: ns.len(),
                    arrays: ArrayPair::ARITY,
                })
            }
        },
    };

    Ok(ArrayPair::new(
        prefix(&pair.input, n_input),
        prefix(&pair.target, n_target),
    ))
}

/// Leading `n` rows along axis 0 (a zero-dimensional array is returned as-is)
fn prefix<A: Clone>(array: &ArrayD<A>, n: usize) -> ArrayD<A> {
    if array.ndim() == 0 {
        return array.clone();
    }
    let n = n.min(array.len_of(Axis(0)));
    array.slice_axis(Axis(0), Slice::from(..n)).to_owned()
}
