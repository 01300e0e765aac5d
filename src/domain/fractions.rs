// ============================================================
// Layer 3 — Fraction Table
// ============================================================
// Maps each testing tier to a "testing value":
//
//   0.0 < v < 1.0   → keep floor(len * v) samples of each array
//   v == 1.0        → keep everything
//   v > 1.0         → keep the first trunc(v) samples
//   "some string"   → misconfiguration, refused at sampling time
//
// Strings are accepted by the parser on purpose so the
// error surfaces as InvalidFractionType naming the tier,
// rather than as an opaque YAML type error.
//
// Example YAML:
//   dataset_testing_fractions:
//     quick: 0.01
//     reduced: 0.1
//     full: 1.0
//     unit_test: 1000

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::split::Tier;

/// One configured testing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestingValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for TestingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestingValue::Number(v) => write!(f, "{v}"),
            TestingValue::Text(s)   => f.write_str(s),
        }
    }
}

impl From<f64> for TestingValue {
    fn from(v: f64) -> Self {
        TestingValue::Number(v)
    }
}

impl From<&str> for TestingValue {
    fn from(s: &str) -> Self {
        TestingValue::Text(s.to_string())
    }
}

/// Tier → testing value table. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionTable {
    pub quick:   TestingValue,
    pub reduced: TestingValue,
    pub full:    TestingValue,

    /// Size of the generated unit-test sets; not a tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_test: Option<TestingValue>,
}

impl FractionTable {
    pub fn new(
        quick:   impl Into<TestingValue>,
        reduced: impl Into<TestingValue>,
        full:    impl Into<TestingValue>,
    ) -> Self {
        Self {
            quick:     quick.into(),
            reduced:   reduced.into(),
            full:      full.into(),
            unit_test: None,
        }
    }

    pub fn with_unit_test(mut self, value: impl Into<TestingValue>) -> Self {
        self.unit_test = Some(value.into());
        self
    }

    /// The testing value configured for `tier`
    pub fn get(&self, tier: Tier) -> &TestingValue {
        match tier {
            Tier::Quick   => &self.quick,
            Tier::Reduced => &self.reduced,
            Tier::Full    => &self.full,
        }
    }
}
