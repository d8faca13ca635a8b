use crate::domain::amount::{SalaryAmount, SalaryBand};
use crate::domain::encoder::CategoryEncoder;
use crate::domain::features::{FeatureSelection, FeatureVector};
use crate::domain::formatter::CurrencyFormatter;
use crate::domain::model::{ModelArtifact, SalaryEstimator};
use crate::domain::ports::SalaryModelBox;
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Everything produced for one submitted selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub features: FeatureVector,
    pub annual: SalaryAmount,
    pub annual_display: String,
    pub monthly: SalaryAmount,
    pub monthly_display: String,
    pub band: SalaryBand,
}

/// Turns a form selection into a formatted salary estimate.
///
/// Owns its collaborators; nothing is looked up globally. Submitting the
/// same selection twice yields the same result.
pub struct PredictionPipeline {
    encoder: CategoryEncoder,
    model: SalaryModelBox,
    formatter: CurrencyFormatter,
}

impl PredictionPipeline {
    /// Creates a new pipeline.
    ///
    /// # Arguments
    ///
    /// * `encoder` - Department encoder matching the model's training table.
    /// * `model` - The estimator to invoke.
    /// * `formatter` - Display policy for the annual and monthly figures.
    pub fn new(encoder: CategoryEncoder, model: SalaryModelBox, formatter: CurrencyFormatter) -> Self {
        Self {
            encoder,
            model,
            formatter,
        }
    }

    /// Builds a pipeline around a loaded artifact, using the artifact's own
    /// department list for the encoder.
    pub fn from_artifact(artifact: Arc<ModelArtifact>, formatter: CurrencyFormatter) -> Result<Self> {
        let encoder = artifact.encoder()?;
        Ok(Self::new(
            encoder,
            Box::new(SalaryEstimator::new(artifact)),
            formatter,
        ))
    }

    pub fn encoder(&self) -> &CategoryEncoder {
        &self.encoder
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    /// Runs one selection through encode, predict and format.
    ///
    /// Fails with `UnknownCategory` for a department outside the closed set,
    /// `Validation` for out-of-range form values, and `InvalidAmount` when
    /// the model extrapolates to a negative figure.
    pub fn submit(&self, selection: &FeatureSelection) -> Result<PredictionResult> {
        selection.validate()?;
        let department_code = self.encoder.encode(&selection.department)?;
        let features = FeatureVector::new(
            selection.years,
            department_code,
            selection.age,
            selection.performance,
        );

        let raw = self.model.predict(&features);
        debug!(?features, prediction = raw, "model invoked");

        let annual = SalaryAmount::try_from(raw)?;
        let monthly = annual.monthly();

        Ok(PredictionResult {
            features,
            annual,
            annual_display: self.formatter.display(annual),
            monthly,
            monthly_display: self.formatter.display(monthly),
            band: SalaryBand::classify(annual),
        })
    }
}
