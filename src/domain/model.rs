use super::encoder::CategoryEncoder;
use super::features::{FEATURE_ORDER, FeatureVector};
use super::ports::SalaryModel;
use crate::error::{EstimatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// A trained linear regression model as written by the training pipeline.
///
/// The department label list is stored next to the weights so the encoder
/// used at inference can be checked against the one used at training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub feature_order: Vec<String>,
    pub departments: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl ModelArtifact {
    /// Parses and checks an artifact. `source` only labels errors.
    pub fn from_json(source: &Path, bytes: &[u8]) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_slice(bytes).map_err(|e| load_error(source, e.to_string()))?;
        artifact.check(source)?;
        Ok(artifact)
    }

    fn check(&self, source: &Path) -> Result<()> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(load_error(
                source,
                format!("unsupported format version {}", self.format_version),
            ));
        }
        if self.feature_order != FEATURE_ORDER {
            return Err(load_error(
                source,
                format!(
                    "feature order {:?} does not match {:?}",
                    self.feature_order, FEATURE_ORDER
                ),
            ));
        }
        if self.coefficients.len() != FEATURE_ORDER.len() {
            return Err(load_error(
                source,
                format!(
                    "expected {} coefficients, found {}",
                    FEATURE_ORDER.len(),
                    self.coefficients.len()
                ),
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(load_error(source, "weights must be finite".to_string()));
        }
        Ok(())
    }

    /// Builds the encoder from the stored label list.
    pub fn encoder(&self) -> Result<CategoryEncoder> {
        CategoryEncoder::from_labels(&self.departments)
    }
}

fn load_error(source: &Path, reason: String) -> EstimatorError {
    EstimatorError::ArtifactLoad {
        path: source.to_path_buf(),
        reason,
    }
}

/// Linear estimator over a shared, immutable artifact.
///
/// Prediction is `intercept + Σ coefficient·feature`. Inputs outside the
/// training distribution (e.g. 60 years of experience at age 20) are not
/// rejected; the result is a plain extrapolation and may be unreliable or
/// negative.
#[derive(Debug, Clone)]
pub struct SalaryEstimator {
    artifact: Arc<ModelArtifact>,
}

impl SalaryEstimator {
    pub fn new(artifact: Arc<ModelArtifact>) -> Self {
        Self { artifact }
    }
}

impl SalaryModel for SalaryEstimator {
    fn predict(&self, features: &FeatureVector) -> f64 {
        self.artifact
            .coefficients
            .iter()
            .zip(features.to_array())
            .fold(self.artifact.intercept, |acc, (weight, x)| acc + weight * x)
    }
}
