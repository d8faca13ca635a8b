use crate::error::EstimatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of departments the model was trained on.
///
/// Variants are declared in alphabetical order of their labels, which is
/// also the order the training-time label encoder assigned codes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Admin,
    Finance,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "IT")]
    It,
    Marketing,
    Operations,
    #[serde(rename = "R&D")]
    RAndD,
    Sales,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::Admin,
        Department::Finance,
        Department::Hr,
        Department::It,
        Department::Marketing,
        Department::Operations,
        Department::RAndD,
        Department::Sales,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Admin => "Admin",
            Department::Finance => "Finance",
            Department::Hr => "HR",
            Department::It => "IT",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
            Department::RAndD => "R&D",
            Department::Sales => "Sales",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|department| department.label() == s)
            .ok_or_else(|| EstimatorError::UnknownCategory(s.to_string()))
    }
}
