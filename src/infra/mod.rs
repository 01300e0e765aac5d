// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// File-format plumbing that the other layers share:
//
//   config_store.rs — Dataset configuration files
//                     Reads the YAML dataset config and checks
//                     its dataset_name against the known kinds.
//
//   npy_store.rs    — .npy output
//                     Writes reduced arrays for generated test
//                     sets, refusing to overwrite existing files.
//
// Reading .npy inputs lives in data::loader since it is part
// of building a dataset.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Dataset configuration YAML loading
pub mod config_store;

/// Non-overwriting .npy writer
pub mod npy_store;
