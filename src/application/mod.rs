// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflows built on top of the data core:
//
//   inspect_use_case  → build datasets, report their sizes
//   test_set_use_case → write reduced copies of the split files
//
// Rules for this layer:
//   - No sampling or file-format logic here (Layers 4 and 5)
//   - No printing (Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Dataset inspection and per-tier summaries
pub mod inspect_use_case;

// Reduced test-set generation
pub mod test_set_use_case;
