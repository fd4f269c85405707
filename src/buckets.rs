//! Bucketing of continuous slider inputs into categorical labels.
//!
//! The prediction service expects two categorical fields (`AgeGroup`,
//! `SalarySlab`) that are pure functions of their numeric sources. Buckets
//! are closed, ordered and non-overlapping; any integer input is accepted,
//! with everything below the first boundary landing in the lowest bucket.
//!
//! Variant order follows bucket order, so the derived `Ord` gives the
//! monotonicity property directly: a larger input never maps to a smaller
//! bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bucket derived from the `Age` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    Under26,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-55")]
    From46To55,
    #[serde(rename = "55+")]
    Over55,
}

impl AgeGroup {
    /// Bucket an age. Total over all integers; negatives fall into the
    /// lowest bucket.
    pub fn from_age(age: i64) -> Self {
        if age <= 25 {
            AgeGroup::Under26
        } else if age <= 35 {
            AgeGroup::From26To35
        } else if age <= 45 {
            AgeGroup::From36To45
        } else if age <= 55 {
            AgeGroup::From46To55
        } else {
            AgeGroup::Over55
        }
    }

    /// The exact wire label for this bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Under26 => "18-25",
            AgeGroup::From26To35 => "26-35",
            AgeGroup::From36To45 => "36-45",
            AgeGroup::From46To55 => "46-55",
            AgeGroup::Over55 => "55+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly-income bucket derived from the `MonthlyIncome` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SalarySlab {
    #[serde(rename = "Upto 5k")]
    UpTo5k,
    #[serde(rename = "5k-10k")]
    To10k,
    #[serde(rename = "10k-15k")]
    To15k,
    #[serde(rename = "15k+")]
    Over15k,
}

impl SalarySlab {
    /// Bucket a monthly income. Total over all integers; negatives fall
    /// into the lowest bucket.
    pub fn from_monthly_income(income: i64) -> Self {
        if income <= 5000 {
            SalarySlab::UpTo5k
        } else if income <= 10000 {
            SalarySlab::To10k
        } else if income <= 15000 {
            SalarySlab::To15k
        } else {
            SalarySlab::Over15k
        }
    }

    /// The exact wire label for this bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalarySlab::UpTo5k => "Upto 5k",
            SalarySlab::To10k => "5k-10k",
            SalarySlab::To15k => "10k-15k",
            SalarySlab::Over15k => "15k+",
        }
    }
}

impl fmt::Display for SalarySlab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
