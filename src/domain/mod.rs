// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe the data core:
//
//   - which split and tier were asked for
//   - how much of a split each tier keeps (fraction table)
//   - which dataset kind to build (dataset configuration)
//   - the (input, target) arrays themselves
//   - every error the core can return
//
// Rules for this layer:
//   - NO file I/O
//   - NO burn types
//   - Only structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// (input, target) arrays and single samples
pub mod array_pair;

/// Typed and raw dataset configurations
pub mod config;

/// DataError and the crate-wide Result alias
pub mod error;

/// Tier → testing value table
pub mod fractions;

/// Split and Tier identifiers
pub mod split;

/// Abstractions the data layer implements
pub mod traits;
