// ============================================================
// Layer 4 — Paired Dataset
// ============================================================
// The finished product handed to the training layer: the
// subsampled (input, target) arrays of one split at one tier,
// indexable by sample.
//
// Construction is a two-step builder so a half-built dataset
// is never observable:
//
//   LowResDatasetBuilder::new(cfg, split, tier)   ← no I/O
//       │
//       ▼  .open()
//   1. open grid / normalisation metadata
//   2. read {stem}_input.npy and {stem}_target.npy
//   3. subsample to the tier's size
//   4. check input and target still agree on length
//       │
//       ▼
//   PairedDataset (immutable, owns its arrays)
//
// Any failing step returns the error and nothing else.
//
// PairedDataset also implements burn's Dataset trait so it can
// go straight into a burn DataLoader.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use burn::data::dataset::Dataset;
use ndarray::Axis;

use crate::data::loader::NpyPairLoader;
use crate::data::metadata::ClimSimMetadata;
use crate::data::sampling::subsample;
use crate::domain::array_pair::{ArrayPair, PairShape, PairedSample};
use crate::domain::config::LowResConfig;
use crate::domain::error::{DataError, Result};
use crate::domain::fractions::FractionTable;
use crate::domain::split::{Split, Tier};
use crate::domain::traits::ArrayPairSource;

/// Subsampled (input, target) arrays of one split, indexable by sample.
#[derive(Debug, Clone)]
pub struct PairedDataset {
    split:    Split,
    tier:     Tier,
    pair:     ArrayPair,
    len:      usize,
    metadata: Option<ClimSimMetadata>,
}

impl PairedDataset {
    /// Subsample a raw pair and wrap it.
    /// Fails if either array is zero-dimensional, or if input and
    /// target lengths differ after sampling.
    pub fn from_pair(
        raw:       &ArrayPair,
        split:     Split,
        tier:      Tier,
        fractions: &FractionTable,
    ) -> Result<Self> {
        raw.check_sample_axes()?;
        let pair = subsample(raw, tier, fractions)?;

        let len = pair.common_len().ok_or_else(|| {
            let (input, target) = pair.lengths();
            DataError::LengthMismatch { input, target }
        })?;

        Ok(Self { split, tier, pair, len, metadata: None })
    }

    /// Load `split` from any source, then subsample it.
    pub fn from_source<S: ArrayPairSource + ?Sized>(
        source:    &S,
        split:     Split,
        tier:      Tier,
        fractions: &FractionTable,
    ) -> Result<Self> {
        let raw = source.load_pair(split)?;
        Self::from_pair(&raw, split, tier, fractions)
    }

    /// The (input, target) sample at `index`.
    pub fn get(&self, index: usize) -> Result<PairedSample> {
        if index >= self.len {
            return Err(DataError::IndexOutOfRange { index, len: self.len });
        }
        Ok(PairedSample {
            input:  self.pair.input.index_axis(Axis(0), index).to_owned(),
            target: self.pair.target.index_axis(Axis(0), index).to_owned(),
        })
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Backing arrays
    pub fn pair(&self) -> &ArrayPair {
        &self.pair
    }

    /// Metadata opened during construction, if this kind has any
    pub fn metadata(&self) -> Option<&ClimSimMetadata> {
        self.metadata.as_ref()
    }

    /// Sample count plus per-sample input / target shapes
    pub fn shape(&self) -> PairShape {
        PairShape {
            samples:      self.len,
            input_shape:  self.pair.input.shape().get(1..).unwrap_or_default().to_vec(),
            target_shape: self.pair.target.shape().get(1..).unwrap_or_default().to_vec(),
        }
    }
}

// ─── Burn Dataset Trait Implementation ────────────────────────────────────────
impl Dataset<PairedSample> for PairedDataset {
    fn get(&self, index: usize) -> Option<PairedSample> {
        PairedDataset::get(self, index).ok()
    }

    fn len(&self) -> usize {
        self.len
    }
}

// ─── LowResDatasetBuilder ─────────────────────────────────────────────────────
/// Gathers what is needed to build a low-res dataset; `open` does the I/O.
#[derive(Debug, Clone, Copy)]
pub struct LowResDatasetBuilder<'a> {
    config: &'a LowResConfig,
    split:  Split,
    tier:   Tier,
}

impl<'a> LowResDatasetBuilder<'a> {
    pub fn new(config: &'a LowResConfig, split: Split, tier: Tier) -> Self {
        Self { config, split, tier }
    }

    /// Open metadata, read the split, subsample it.
    pub fn open(self) -> Result<PairedDataset> {
        let metadata = ClimSimMetadata::open(&self.config.resolved_metadata_root())?;

        let loader  = NpyPairLoader::new(&self.config.data_path);
        let mut dataset = PairedDataset::from_source(
            &loader,
            self.split,
            self.tier,
            &self.config.dataset_testing_fractions,
        )?;
        dataset.metadata = Some(metadata);

        tracing::debug!(
            "Built '{}' dataset at tier '{}' with {} samples",
            self.split,
            self.tier,
            dataset.len
        );

        Ok(dataset)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metadata::write_placeholder_metadata;
    use ndarray::{Array, ArrayD, IxDyn};
    use ndarray_npy::write_npy;
    use tempfile::TempDir;

    /// Arrays already in memory, one pair per split
    struct InMemorySource {
        train: ArrayPair,
        val:   ArrayPair,
        test:  ArrayPair,
    }

    impl ArrayPairSource for InMemorySource {
        fn load_pair(&self, split: Split) -> Result<ArrayPair> {
            Ok(match split {
                Split::Train => self.train.clone(),
                Split::Val   => self.val.clone(),
                Split::Test  => self.test.clone(),
            })
        }
    }

    fn ramp(n: usize, width: usize) -> ArrayD<f64> {
        Array::from_shape_fn(IxDyn(&[n, width]), |ix| (ix[0] * width + ix[1]) as f64)
    }

    fn fractions() -> FractionTable {
        FractionTable::new(0.1, 0.5, 1.0)
    }

    #[test]
    fn test_index_bounds() {
        let raw = ArrayPair::new(ramp(20, 3), ramp(20, 2));
        let ds  = PairedDataset::from_pair(&raw, Split::Train, Tier::Reduced, &fractions()).unwrap();

        assert_eq!(Dataset::len(&ds), 10);
        let last = ds.get(9).unwrap();
        assert_eq!(last.input.as_slice().unwrap(), &[27.0, 28.0, 29.0]);
        assert_eq!(last.target.as_slice().unwrap(), &[18.0, 19.0]);

        let err = ds.get(10).unwrap_err();
        assert!(matches!(err, DataError::IndexOutOfRange { index: 10, len: 10 }));
    }

    #[test]
    fn test_burn_dataset_view() {
        let raw = ArrayPair::new(ramp(4, 1), ramp(4, 1));
        let ds  = PairedDataset::from_pair(&raw, Split::Val, Tier::Full, &fractions()).unwrap();

        assert!(Dataset::get(&ds, 3).is_some());
        assert!(Dataset::get(&ds, 4).is_none());
        assert_eq!(ds.iter().count(), 4);
    }

    #[test]
    fn test_length_mismatch_is_refused() {
        let raw = ArrayPair::new(ramp(100, 1), ramp(50, 1));
        let err = PairedDataset::from_pair(&raw, Split::Train, Tier::Reduced, &fractions())
            .unwrap_err();
        assert!(matches!(err, DataError::LengthMismatch { input: 50, target: 25 }));
    }

    #[test]
    fn test_shape_reports_per_sample_shapes() {
        let raw = ArrayPair::new(ramp(30, 6), ramp(30, 4));
        let ds  = PairedDataset::from_pair(&raw, Split::Test, Tier::Quick, &fractions()).unwrap();

        let shape = ds.shape();
        assert_eq!(shape.samples, 3);
        assert_eq!(shape.input_shape, vec![6]);
        assert_eq!(shape.target_shape, vec![4]);
    }

    #[test]
    fn test_scalar_pair_is_refused() {
        let scalar = ArrayD::<f64>::from_elem(IxDyn(&[]), 1.0);
        let raw    = ArrayPair::new(scalar.clone(), scalar);

        for tier in Tier::ALL {
            let err = PairedDataset::from_pair(&raw, Split::Train, tier, &fractions()).unwrap_err();
            assert!(matches!(err, DataError::MissingSampleAxis(ref what) if what == "input array"));
        }
    }

    #[test]
    fn test_scalar_target_is_refused() {
        let raw = ArrayPair::new(ramp(5, 2), ArrayD::zeros(IxDyn(&[])));
        let err = PairedDataset::from_pair(&raw, Split::Val, Tier::Full, &fractions()).unwrap_err();
        assert!(matches!(err, DataError::MissingSampleAxis(_)));
    }

    #[test]
    fn test_shape_of_one_dimensional_arrays() {
        let raw = ArrayPair::new(ArrayD::zeros(IxDyn(&[8])), ArrayD::ones(IxDyn(&[8])));
        let ds  = PairedDataset::from_pair(&raw, Split::Train, Tier::Full, &fractions()).unwrap();

        let shape = ds.shape();
        assert_eq!(shape.samples, 8);
        assert!(shape.input_shape.is_empty());
        assert!(shape.target_shape.is_empty());
    }

    #[test]
    fn test_from_in_memory_source() {
        let pair   = ArrayPair::new(ramp(10, 2), ramp(10, 2));
        let source = InMemorySource { train: pair.clone(), val: pair.clone(), test: pair };

        let ds = PairedDataset::from_source(&source, Split::Val, Tier::Quick, &fractions()).unwrap();
        assert_eq!(ds.split(), Split::Val);
        assert_eq!(ds.tier(), Tier::Quick);
        assert_eq!(ds.shape().samples, 1);
        assert!(ds.metadata().is_none());
    }

    #[test]
    fn test_builder_opens_metadata_then_data() {
        let meta = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_placeholder_metadata(meta.path());
        write_npy(data.path().join("val_input.npy"), &ramp(40, 3)).unwrap();
        write_npy(data.path().join("val_target.npy"), &ramp(40, 2)).unwrap();

        let cfg = LowResConfig::new(data.path(), fractions()).with_metadata_root(meta.path());
        let ds  = LowResDatasetBuilder::new(&cfg, Split::Val, Tier::Reduced).open().unwrap();

        assert_eq!(ds.shape().samples, 20);
        assert!(ds.metadata().is_some());
    }

    #[test]
    fn test_builder_fails_without_metadata() {
        let meta = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_npy(data.path().join("train_input.npy"), &ramp(4, 1)).unwrap();
        write_npy(data.path().join("train_target.npy"), &ramp(4, 1)).unwrap();

        let cfg = LowResConfig::new(data.path(), fractions()).with_metadata_root(meta.path());
        let err = LowResDatasetBuilder::new(&cfg, Split::Train, Tier::Full).open().unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(_)));
    }

    #[test]
    fn test_builder_fails_without_split_files() {
        let meta = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_placeholder_metadata(meta.path());

        let cfg = LowResConfig::new(data.path(), fractions()).with_metadata_root(meta.path());
        let err = LowResDatasetBuilder::new(&cfg, Split::Test, Tier::Full).open().unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(ref p) if p.ends_with("scoring_input.npy")));
    }
}
