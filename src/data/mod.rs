// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from .npy files on disk to an indexable dataset
// at the requested testing tier.
//
// The pipeline flows in this order:
//
//   DatasetConfig + split + tier
//       │
//       ▼
//   selector          → validates split / tier, picks the kind
//       │
//       ▼
//   metadata          → opens grid / normalisation side files
//       │
//       ▼
//   loader            → reads {stem}_input.npy / {stem}_target.npy
//       │
//       ▼
//   sampling          → keeps the tier's prefix of each array
//       │
//       ▼
//   dataset           → PairedDataset (burn Dataset)
//
// Each module is responsible for exactly one step.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// PairedDataset and its builder
pub mod dataset;

/// Reads split arrays from .npy files
pub mod loader;

/// Opens the ClimSim grid / normalisation files
pub mod metadata;

/// Numeric .npy arrays in their stored dtype
pub mod npy_array;

/// Tier-driven prefix subsampling
pub mod sampling;

/// get_dataset / get_all_datasets entry points
pub mod selector;
