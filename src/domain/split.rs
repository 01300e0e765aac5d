// ============================================================
// Layer 3 — Split and Tier Identifiers
// ============================================================
// Two closed enumerations that select WHICH data and HOW MUCH:
//
//   Split  → train | val | test
//            test is stored on disk under the name "scoring"
//
//   Tier   → quick | reduced | full
//            picks an entry from the fraction table
//
// Both parse from the strings used in configs and on the
// command line. Anything else is an InvalidArgument, raised
// before a single file is touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DataError;

/// Which partition of the dataset to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// All splits in train, val, test order
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val   => "val",
            Split::Test  => "test",
        }
    }

    /// Prefix of the split's files inside `data_path`.
    /// The test split lives in `scoring_*.npy`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val   => "val",
            Split::Test  => "scoring",
        }
    }
}

impl FromStr for Split {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Split::Train),
            "val"   => Ok(Split::Val),
            "test"  => Ok(Split::Test),
            other   => Err(DataError::InvalidArgument {
                name:     "split",
                value:    other.to_string(),
                expected: "'train', 'val' or 'test'",
            }),
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Testing tier: how large a slice of each split to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Quick,
    Reduced,
    Full,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Quick, Tier::Reduced, Tier::Full];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Quick   => "quick",
            Tier::Reduced => "reduced",
            Tier::Full    => "full",
        }
    }
}

impl FromStr for Tier {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick"   => Ok(Tier::Quick),
            "reduced" => Ok(Tier::Reduced),
            "full"    => Ok(Tier::Full),
            other     => Err(DataError::InvalidArgument {
                name:     "tier",
                value:    other.to_string(),
                expected: "'quick', 'reduced' or 'full'",
            }),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for split in Split::ALL {
            assert_eq!(split.as_str().parse::<Split>().unwrap(), split);
        }
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_test_split_reads_scoring_files() {
        assert_eq!(Split::Test.file_stem(), "scoring");
        assert_eq!(Split::Train.file_stem(), "train");
        assert_eq!(Split::Val.file_stem(), "val");
    }

    #[test]
    fn test_unknown_split_is_invalid_argument() {
        let err = "bogus".parse::<Split>().unwrap_err();
        assert!(matches!(err, DataError::InvalidArgument { name: "split", .. }));
    }

    #[test]
    fn test_unknown_tier_is_invalid_argument() {
        // "scoring" is a file stem, not a split name, and case matters
        assert!("scoring".parse::<Split>().is_err());
        let err = "Quick".parse::<Tier>().unwrap_err();
        assert!(matches!(err, DataError::InvalidArgument { name: "tier", .. }));
    }
}
