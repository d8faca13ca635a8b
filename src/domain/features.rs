use crate::error::{EstimatorError, Result};
use serde::Deserialize;
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<u32> = 18..=65;
pub const PERFORMANCE_RANGE: RangeInclusive<u8> = 1..=5;

/// Column order the model was trained on.
pub const FEATURE_ORDER: [&str; 4] = ["YearsExperience", "Department", "Age", "PerformanceScore"];

/// The four values collected from the input form.
///
/// Numeric fields are range-checked on construction. The department stays a
/// raw label here; it is checked by the encoder when the selection is
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureSelection {
    pub years: u32,
    pub age: u32,
    pub performance: u8,
    pub department: String,
}

impl FeatureSelection {
    pub fn new(years: u32, age: u32, performance: u8, department: impl Into<String>) -> Result<Self> {
        let selection = Self {
            years,
            age,
            performance,
            department: department.into(),
        };
        selection.validate()?;
        Ok(selection)
    }

    /// Re-checks the ranges, for selections built by deserialization.
    pub fn validate(&self) -> Result<()> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(EstimatorError::Validation {
                field: "age",
                value: self.age.to_string(),
                reason: format!(
                    "must be between {} and {}",
                    AGE_RANGE.start(),
                    AGE_RANGE.end()
                ),
            });
        }
        if !PERFORMANCE_RANGE.contains(&self.performance) {
            return Err(EstimatorError::Validation {
                field: "performance",
                value: self.performance.to_string(),
                reason: format!(
                    "must be between {} and {}",
                    PERFORMANCE_RANGE.start(),
                    PERFORMANCE_RANGE.end()
                ),
            });
        }
        Ok(())
    }
}

/// Model input in training column order.
///
/// No range checks are applied here: values far outside the training data
/// are accepted and extrapolated by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector {
    pub years_experience: u32,
    pub department_code: u8,
    pub age: u32,
    pub performance_score: u8,
}

impl FeatureVector {
    pub fn new(years_experience: u32, department_code: u8, age: u32, performance_score: u8) -> Self {
        Self {
            years_experience,
            department_code,
            age,
            performance_score,
        }
    }

    /// Returns the values in `FEATURE_ORDER`.
    pub fn to_array(&self) -> [f64; 4] {
        [
            f64::from(self.years_experience),
            f64::from(self.department_code),
            f64::from(self.age),
            f64::from(self.performance_score),
        ]
    }
}
