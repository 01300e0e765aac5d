// ============================================================
// Layer 2 — TestSetUseCase
// ============================================================
// Writes reduced copies of every split file to a new directory,
// e.g. for unit tests or quick local experiments:
//
//   for stem in [train, val, scoring]:
//     for kind in [input, target]:
//       load   <data_path>/<stem>_<kind>.npy
//       keep   its prefix (count or fraction)
//       write  <output_dir>/<stem>_<kind>.npy   (never overwrite)
//
// Files keep the dtype they were stored with; nothing is
// converted on the way through.
//
// The size comes from the config's `unit_test` testing value
// unless the caller passes one explicitly. Each file is reduced
// on its own, so the arrays keep their row correspondence as
// long as the split files did.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::loader::{split_file_name, ArrayKind};
use crate::data::npy_array::NpyArray;
use crate::data::sampling::SamplingPlan;
use crate::domain::config::DatasetConfig;
use crate::domain::error::DataError;
use crate::domain::fractions::TestingValue;
use crate::domain::split::Split;
use crate::infra::npy_store::write_new_npy;

/// One file written by the use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path:    PathBuf,
    pub samples: usize,
    pub dtype:   &'static str,
}

pub struct TestSetUseCase {
    config:     DatasetConfig,
    output_dir: PathBuf,
    value:      Option<TestingValue>,
}

impl TestSetUseCase {
    pub fn new(config: DatasetConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self { config, output_dir: output_dir.into(), value: None }
    }

    /// Use `value` instead of the config's `unit_test` entry
    pub fn with_value(mut self, value: impl Into<TestingValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Generate every reduced split file
    pub fn execute(&self) -> Result<Vec<WrittenFile>> {
        let value = match &self.value {
            Some(v) => v.clone(),
            None => self
                .config
                .fractions()
                .unit_test
                .clone()
                .ok_or_else(|| DataError::MissingTestingValue("unit_test".into()))?,
        };
        let plan = SamplingPlan::resolve("unit_test", &value)?;

        tracing::info!(
            "Writing {:?} test sets from '{}' to '{}'",
            plan,
            self.config.data_path().display(),
            self.output_dir.display()
        );

        let mut written = Vec::new();
        for split in Split::ALL {
            for kind in ArrayKind::ALL {
                let name   = split_file_name(split.file_stem(), kind);
                let source = self.config.data_path().join(&name);
                let target = self.output_dir.join(&name);

                let array = NpyArray::read(&source)
                    .with_context(|| format!("Cannot load '{}'", source.display()))?;
                let reduced = array.sampled(&plan);

                write_new_npy(&target, &reduced)
                    .with_context(|| format!("Cannot write '{}'", target.display()))?;

                written.push(WrittenFile {
                    path:    target,
                    samples: reduced.samples(),
                    dtype:   reduced.dtype(),
                });
            }
        }

        tracing::info!("Wrote {} test set files", written.len());
        Ok(written)
    }
}
