// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The data layer reads arrays through a trait so the dataset
// builder never needs to know where the numbers come from.
// NpyPairLoader reads {stem}_input.npy / {stem}_target.npy;
// tests plug in arrays that are already in memory.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::array_pair::ArrayPair;
use crate::domain::error::Result;
use crate::domain::split::Split;

// ─── ArrayPairSource ──────────────────────────────────────────────────────────
/// Anything that can produce the raw (input, target) arrays of a split.
pub trait ArrayPairSource {
    /// Load the full, unsampled arrays for `split`.
    /// A missing backing file is a `FileNotFound` error.
    fn load_pair(&self, split: Split) -> Result<ArrayPair>;
}
