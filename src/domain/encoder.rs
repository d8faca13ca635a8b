use super::department::Department;
use crate::error::{EstimatorError, Result};

/// Label-to-code table the model was trained with.
///
/// Codes are ordinal positions in the alphabetically sorted label list.
const TRAINING_TABLE: [(&str, u8); 8] = [
    ("Admin", 0),
    ("Finance", 1),
    ("HR", 2),
    ("IT", 3),
    ("Marketing", 4),
    ("Operations", 5),
    ("R&D", 6),
    ("Sales", 7),
];

/// Encodes department labels into the integer codes the model expects.
///
/// The table is built once and never mutated. Every construction path is
/// checked against the training table, so an encoder that exists is one
/// whose codes agree with what the model saw during training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEncoder {
    labels: Vec<Department>,
}

impl CategoryEncoder {
    /// Builds the encoder from the canonical department list.
    pub fn canonical() -> Self {
        Self {
            labels: Department::ALL.to_vec(),
        }
    }

    /// Builds the encoder from a label list, usually the one stored with the
    /// model artifact. Codes are assigned by sorted position, then compared
    /// with the training table.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let mut found: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        found.sort();
        found.dedup();

        let expected: Vec<String> = TRAINING_TABLE
            .iter()
            .map(|(label, _)| label.to_string())
            .collect();

        if found != expected || labels.len() != expected.len() {
            return Err(EstimatorError::EncoderMismatch {
                expected,
                found: labels.iter().map(|l| l.as_ref().to_string()).collect(),
            });
        }

        let departments = found
            .iter()
            .map(|label| label.parse::<Department>())
            .collect::<Result<Vec<_>>>()?;
        let encoder = Self {
            labels: departments,
        };
        encoder.verify()?;
        Ok(encoder)
    }

    fn verify(&self) -> Result<()> {
        let consistent = self.labels.len() == TRAINING_TABLE.len()
            && self
                .table()
                .zip(TRAINING_TABLE.iter())
                .all(|((code, department), (label, expected))| {
                    code == *expected && department.label() == *label
                });
        if consistent {
            Ok(())
        } else {
            Err(EstimatorError::EncoderMismatch {
                expected: TRAINING_TABLE.iter().map(|(l, _)| l.to_string()).collect(),
                found: self.labels.iter().map(|d| d.label().to_string()).collect(),
            })
        }
    }

    /// Encodes a department label, rejecting anything outside the closed set.
    pub fn encode(&self, label: &str) -> Result<u8> {
        let department: Department = label.parse()?;
        Ok(self.code_of(department))
    }

    pub fn code_of(&self, department: Department) -> u8 {
        // Construction guarantees every department is present exactly once.
        self.labels
            .iter()
            .position(|d| *d == department)
            .map_or(u8::MAX, |index| index as u8)
    }

    pub fn decode(&self, code: u8) -> Option<Department> {
        self.labels.get(usize::from(code)).copied()
    }

    /// Iterates the `(code, department)` pairs in code order.
    pub fn table(&self) -> impl Iterator<Item = (u8, Department)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, department)| (index as u8, *department))
    }
}

impl Default for CategoryEncoder {
    fn default() -> Self {
        Self::canonical()
    }
}
